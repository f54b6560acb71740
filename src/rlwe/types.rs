//! Key and signature types.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::math::Poly;

/// Small-coefficient secret polynomial s; wiped on drop.
#[derive(Clone, Debug, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    pub(crate) poly: Poly,
}

impl SecretKey {
    pub(crate) fn new(poly: Poly) -> Self {
        Self { poly }
    }
}

/// One signer's keys: public generator `a`, public key `b = a·s + e`, and
/// the secret `s`. Regeneration replaces all three together; there is no
/// partial update.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyMaterial {
    /// Uniformly random public generator a.
    pub generator: Poly,
    /// Public key b = a·s + e.
    pub public_key: Poly,
    pub(crate) secret_key: SecretKey,
}

impl KeyMaterial {
    /// All-zero placeholder used before the first key generation.
    pub(crate) fn zeroed(dim: usize, q: u64) -> Self {
        Self {
            generator: Poly::zero(dim, q),
            public_key: Poly::zero(dim, q),
            secret_key: SecretKey::new(Poly::zero(dim, q)),
        }
    }
}

/// Direct-scheme signature (u, v). Equality is coefficient-wise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub u: Poly,
    pub v: Poly,
}

/// Blind-scheme signature: a single ring element, both in its blinded form
/// (fresh from the server) and after unblinding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindSignature(pub Poly);

/// Client-side state between blinding and unblinding: the blinded message
/// to send to the server and the blinding factor r that removes the mask.
///
/// The context is single-use by construction (`unblind` consumes it) and
/// both polynomials are wiped on drop. Callers must never blind two
/// requests with the same r; reuse breaks unlinkability without being
/// detectable at runtime.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct BlindingContext {
    pub(crate) blinded: Poly,
    pub(crate) r: Poly,
}

impl BlindingContext {
    /// The masked message Y + a·r to hand to the signing server.
    pub fn blinded(&self) -> &Poly {
        &self.blinded
    }
}
