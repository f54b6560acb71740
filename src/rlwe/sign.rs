//! Direct signing and verification.

use std::sync::Arc;

use crate::error::Result;
use crate::math::{cyclic_distance, Poly, Sampler};
use crate::params::SigParams;
use crate::trace::TraceSink;

use super::encode::message_to_poly;
use super::types::{KeyMaterial, SecretKey, Signature};

/// RLWE signature engine.
///
/// Owns one set of [`KeyMaterial`]; starts with all-zero keys, so
/// [`generate_keys`](Self::generate_keys) must run before signing.
/// `generate_keys` is the only mutating operation; everything else takes
/// `&self` and draws its own fresh randomness, so shared references may
/// sign and verify concurrently while the borrow checker serializes key
/// regeneration.
pub struct RlweSigner {
    params: SigParams,
    keys: KeyMaterial,
    sink: Option<Arc<dyn TraceSink>>,
}

impl RlweSigner {
    /// Build an engine with validated parameters and zeroed keys.
    pub fn new(params: SigParams) -> Result<Self> {
        params.validate()?;
        let keys = KeyMaterial::zeroed(params.ring_dim, params.q);
        Ok(Self {
            params,
            keys,
            sink: None,
        })
    }

    /// Same as [`new`](Self::new), with a diagnostic sink attached.
    pub fn with_trace(params: SigParams, sink: Arc<dyn TraceSink>) -> Result<Self> {
        let mut signer = Self::new(params)?;
        signer.sink = Some(sink);
        Ok(signer)
    }

    pub fn params(&self) -> &SigParams {
        &self.params
    }

    /// Public half of the key material: (generator a, public key b).
    pub fn public_key(&self) -> (Poly, Poly) {
        (
            self.keys.generator.clone(),
            self.keys.public_key.clone(),
        )
    }

    pub(crate) fn keys(&self) -> &KeyMaterial {
        &self.keys
    }

    pub(crate) fn trace(&self, f: impl FnOnce() -> String) {
        if let Some(sink) = &self.sink {
            sink.event(&f());
        }
    }

    /// Generate fresh keys: a ← uniform, s, e ← Gaussian(σ), b = a·s + e.
    ///
    /// All three polynomials are sampled and combined before any field is
    /// written, so a sampler failure leaves the previous keys intact.
    pub fn generate_keys(&mut self) -> Result<()> {
        let SigParams {
            ring_dim: n,
            q,
            sigma,
            ..
        } = self.params;
        self.trace(|| format!("generating keys: n={}, q={}", n, q));

        let mut sampler = Sampler::new();
        let generator = sampler.uniform_poly(n, q)?;
        let secret = sampler.gaussian_poly(n, q, sigma)?;
        let error = sampler.gaussian_poly(n, q, sigma)?;
        let public_key = generator.mul(&secret)?.add(&error)?;

        self.trace(|| format!("generator a: {}", generator));
        self.trace(|| format!("public key b = a*s + e: {}", public_key));

        self.keys = KeyMaterial {
            generator,
            public_key,
            secret_key: SecretKey::new(secret),
        };
        Ok(())
    }

    /// Sign a message: z = bits(message), fresh r, e1, e2 ← Gaussian(σ),
    /// u = a·r + e1, v = b·r + e2 + z·⌊q/2⌋.
    ///
    /// Every call draws new randomness; two signatures over the same
    /// message never coincide.
    pub fn sign(&self, message: &[u8]) -> Result<Signature> {
        let SigParams {
            ring_dim: n,
            q,
            sigma,
            ..
        } = self.params;
        let z = message_to_poly(message, n, q);
        self.trace(|| format!("sign: message polynomial z: {}", z));

        let mut sampler = Sampler::new();
        let r = sampler.gaussian_poly(n, q, sigma)?;
        let e1 = sampler.gaussian_poly(n, q, sigma)?;
        let e2 = sampler.gaussian_poly(n, q, sigma)?;

        let u = self.keys.generator.mul(&r)?.add(&e1)?;
        let v = self
            .keys
            .public_key
            .mul(&r)?
            .add(&e2)?
            .add(&z.scalar_mul(self.params.half_q()))?;

        self.trace(|| format!("sign: u: {}", u));
        self.trace(|| format!("sign: v: {}", v));
        Ok(Signature { u, v })
    }

    /// Verify a direct signature.
    ///
    /// Computes candidate = v - u·s and accepts iff every coefficient lies
    /// within `params.tolerance` cyclic distance of the expected encoding
    /// z·⌊q/2⌋. A mismatched signature is the ordinary `Ok(false)`; `Err`
    /// is reserved for ill-formed inputs (wrong ring) and system failures.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<bool> {
        let SigParams {
            ring_dim: n,
            q,
            tolerance,
            ..
        } = self.params;
        let z = message_to_poly(message, n, q);

        let u_s = signature.u.mul(&self.keys.secret_key.poly)?;
        let candidate = signature.v.sub(&u_s)?;
        let expected = z.scalar_mul(self.params.half_q());

        self.trace(|| format!("verify: candidate v - u*s: {}", candidate));
        self.trace(|| format!("verify: expected z*(q/2): {}", expected));

        for i in 0..n {
            let dist = cyclic_distance(candidate.coeff(i), expected.coeff(i), q);
            if dist > tolerance {
                self.trace(|| {
                    format!(
                        "verify: coefficient {} off by {} (tolerance {})",
                        i, dist, tolerance
                    )
                });
                return Ok(false);
            }
        }
        Ok(true)
    }
}
