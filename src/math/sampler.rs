//! Secure coefficient sampling.
//!
//! All randomness flows through `try_fill_bytes` on a `CryptoRng`; a failed
//! read surfaces as [`RlweError::EntropyUnavailable`] and is never papered
//! over with a weaker source. The default source is the platform CSPRNG
//! (`OsRng`); tests substitute a seeded ChaCha20 rng for reproducibility.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::{Result, RlweError};
use crate::math::Poly;

/// Draws uniform and discrete-Gaussian polynomials from a secure rng.
///
/// # Example
///
/// ```
/// use rlwe_sig::math::Sampler;
///
/// let mut sampler = Sampler::new();
/// let e = sampler.gaussian_poly(16, 3329, 3.0).unwrap();
/// assert!(e.coeffs().iter().all(|&c| c < 3329));
/// ```
pub struct Sampler<R: RngCore + CryptoRng = OsRng> {
    rng: R,
}

impl Sampler<OsRng> {
    /// Sampler backed by the platform CSPRNG.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for Sampler<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> Sampler<R> {
    /// Sampler backed by a caller-supplied cryptographic rng, e.g. a seeded
    /// ChaCha20 for deterministic tests.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    fn next_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.rng
            .try_fill_bytes(&mut buf)
            .map_err(RlweError::EntropyUnavailable)?;
        Ok(u64::from_le_bytes(buf))
    }

    /// Uniform draw from (0, 1]; the open lower end keeps ln() finite in the
    /// Box-Muller radius.
    fn unit_uniform(&mut self) -> Result<f64> {
        let r = self.next_u64()?;
        Ok((r as f64 + 1.0) / (u64::MAX as f64 + 1.0))
    }

    fn standard_normal(&mut self) -> Result<f64> {
        let u1 = self.unit_uniform()?;
        let u2 = self.unit_uniform()?;
        let radius = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * u2;
        Ok(radius * theta.cos())
    }

    /// `dim` independent coefficients uniform in [0, q).
    pub fn uniform_poly(&mut self, dim: usize, q: u64) -> Result<Poly> {
        let mut coeffs = Vec::with_capacity(dim);
        for _ in 0..dim {
            coeffs.push(self.next_u64()? % q);
        }
        Ok(Poly::from_coeffs(coeffs, q))
    }

    /// `dim` coefficients from a rounded centered Gaussian with the given
    /// standard deviation, negatives wrapped into [0, q).
    ///
    /// The modulus must satisfy `q <= i64::MAX as u64` so the centered
    /// representative survives the i64 wrap.
    pub fn gaussian_poly(&mut self, dim: usize, q: u64, sigma: f64) -> Result<Poly> {
        debug_assert!(q <= i64::MAX as u64, "modulus {} out of supported range", q);
        let mut coeffs = Vec::with_capacity(dim);
        for _ in 0..dim {
            let sample = (self.standard_normal()? * sigma).round() as i64;
            coeffs.push(sample.rem_euclid(q as i64) as u64);
        }
        Ok(Poly::from_coeffs(coeffs, q))
    }
}
