//! Blind-signature protocol.
//!
//! Three steps across two roles plus verification:
//!
//! 1. Client: `blind_message` masks Y = H(secret) as Y + a·r.
//! 2. Server: `blind_sign` returns s·blinded + e1 without learning the
//!    secret or r.
//! 3. Client: [`BlindingContext::unblind`] strips the mask with r·b,
//!    leaving final ≈ s·Y.
//! 4. Verifier: `verify_blinded` recomputes s·H(secret) and compares the
//!    `signal()` roundings exactly. Requires the server's secret key; see
//!    the module docs in [`crate::rlwe`] for that asymmetry.

use crate::error::Result;
use crate::math::{Poly, Sampler};

use super::encode::hash_to_poly;
use super::sign::RlweSigner;
use super::types::{BlindSignature, BlindingContext};

impl RlweSigner {
    /// Client step: draw a Gaussian blinding factor r and mask the hashed
    /// secret as Y + a·r.
    ///
    /// The generator a must be the signing server's; in tests one engine
    /// plays both roles. The returned context is single-use: `unblind`
    /// consumes it, and reusing one r across requests breaks unlinkability.
    pub fn blind_message(&self, secret: &[u8]) -> Result<BlindingContext> {
        let params = self.params();
        let (n, q) = (params.ring_dim, params.q);

        let mut sampler = Sampler::new();
        let r = sampler.gaussian_poly(n, q, params.sigma)?;
        let y = hash_to_poly(secret, n, q);
        let blinded = y.add(&self.keys().generator.mul(&r)?)?;

        self.trace(|| format!("blind: masked message: {}", blinded));
        Ok(BlindingContext { blinded, r })
    }

    /// Server step: sign the masked message as s·blinded + e1.
    pub fn blind_sign(&self, blinded: &Poly) -> Result<BlindSignature> {
        let params = self.params();
        let mut sampler = Sampler::new();
        let e1 = sampler.gaussian_poly(params.ring_dim, params.q, params.sigma)?;

        let signed = self.keys().secret_key.poly.mul(blinded)?.add(&e1)?;
        self.trace(|| format!("blind_sign: s*blinded + e1: {}", signed));
        Ok(BlindSignature(signed))
    }

    /// Verify an unblinded signature against the original secret.
    ///
    /// Both final ≈ s·H(secret) and the recomputed s·H(secret) are rounded
    /// through `signal()` and must match on every coefficient. `Ok(false)`
    /// is the ordinary rejection; ring mismatches fail fast with `Err`.
    pub fn verify_blinded(&self, secret: &[u8], signature: &BlindSignature) -> Result<bool> {
        let params = self.params();
        let z = hash_to_poly(secret, params.ring_dim, params.q);
        let expected = self.keys().secret_key.poly.mul(&z)?;
        expected.check_same_ring(&signature.0)?;

        let actual_signal = signature.0.signal();
        let expected_signal = expected.signal();
        self.trace(|| format!("verify_blinded: actual signal: {}", actual_signal));
        self.trace(|| format!("verify_blinded: expected signal: {}", expected_signal));

        Ok(actual_signal == expected_signal)
    }
}

impl BlindingContext {
    /// Client step: remove the blinding contribution from the server's
    /// signature, final = signature' - r·b.
    ///
    /// Consumes the context; the blinding factor is wiped when it drops.
    pub fn unblind(
        self,
        signature: &BlindSignature,
        server_public_key: &Poly,
    ) -> Result<BlindSignature> {
        let mask = self.r.mul(server_public_key)?;
        Ok(BlindSignature(signature.0.sub(&mask)?))
    }
}
