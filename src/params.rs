//! Parameter sets for the RLWE signature scheme.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RlweError};

/// Default standard deviation for the error/secret distribution.
pub const DEFAULT_SIGMA: f64 = 3.0;

/// Scheme parameters: ring, modulus, noise width, verification tolerance.
///
/// `ring_dim` is the coefficient count n of the ring Z_q[x]/(x^n + 1) and
/// must be a power of two. `tolerance` bounds the cyclic distance the direct
/// verifier accepts per coefficient; q/4 leaves the noise terms ample room
/// while still separating the 0 and q/2 message encodings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigParams {
    /// Ring dimension n (power of two).
    pub ring_dim: usize,

    /// Coefficient modulus q.
    pub q: u64,

    /// Standard deviation for Gaussian error/secret sampling.
    pub sigma: f64,

    /// Per-coefficient verification tolerance (cyclic distance).
    pub tolerance: u64,
}

impl SigParams {
    /// Small parameters for tests and examples: n=16, q=3329.
    ///
    /// Not secure; kept small so accumulated noise stays far below q/4
    /// at this dimension while tests run fast.
    pub fn toy() -> Self {
        let q = 3329;
        Self {
            ring_dim: 16,
            q,
            sigma: DEFAULT_SIGMA,
            tolerance: q / 4,
        }
    }

    /// Production-sized ring: n=1024, q=12289 (q ≡ 1 mod 2n).
    pub fn secure_1024() -> Self {
        let q = 12289;
        Self {
            ring_dim: 1024,
            q,
            sigma: DEFAULT_SIGMA,
            tolerance: q / 4,
        }
    }

    /// ⌊q/2⌋, the encoding of a set message bit.
    pub fn half_q(&self) -> u64 {
        self.q / 2
    }

    /// Check structural validity of the parameter set.
    pub fn validate(&self) -> Result<()> {
        if !self.ring_dim.is_power_of_two() {
            return Err(RlweError::InvalidParameters(format!(
                "ring_dim must be a power of two, got {}",
                self.ring_dim
            )));
        }
        if self.q < 4 {
            return Err(RlweError::InvalidParameters(format!(
                "modulus must be at least 4, got {}",
                self.q
            )));
        }
        if self.q > i64::MAX as u64 {
            return Err(RlweError::InvalidParameters(
                "modulus must fit in a signed 64-bit intermediate".into(),
            ));
        }
        if !(self.sigma > 0.0) {
            return Err(RlweError::InvalidParameters(format!(
                "sigma must be positive, got {}",
                self.sigma
            )));
        }
        if self.tolerance == 0 || self.tolerance >= self.q / 2 {
            return Err(RlweError::InvalidParameters(format!(
                "tolerance must lie in (0, q/2), got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl Default for SigParams {
    fn default() -> Self {
        Self::secure_1024()
    }
}
