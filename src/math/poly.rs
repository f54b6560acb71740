//! Polynomial arithmetic over R_q = Z_q[x]/(x^n + 1).
//!
//! Every coefficient lives in [0, q); all operations re-normalize into that
//! range. Elements are immutable values: arithmetic returns new polynomials
//! and never changes a dimension/modulus pair after construction.
//!
//! Multiplication is the schoolbook O(n²) convolution followed by the
//! negacyclic fold x^n ≡ -1. The target ring dimensions stay small enough
//! that an NTT fast path is not worth its complexity here; `mul` is the
//! contract a transform-based implementation would slot in behind.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::{Result, RlweError};

/// Polynomial in R_q = Z_q[x]/(x^n + 1).
///
/// Equality is coefficient-wise (plus matching modulus); there is no
/// identity beyond the coefficients.
///
/// The modulus must satisfy `q <= i64::MAX as u64`: addition relies on
/// `a + b` fitting in u64 for reduced operands, and Gaussian sampling maps
/// centered draws through i64. [`crate::SigParams::validate`] enforces this
/// for the engine; direct constructors debug-assert it.
///
/// # Example
///
/// ```
/// use rlwe_sig::math::Poly;
///
/// // Coefficients reduce into [0, q) on construction: 20 mod 17 = 3.
/// let f = Poly::from_coeffs(vec![20, 1, 0, 0], 17);
/// assert_eq!(f.coeff(0), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poly {
    /// Coefficients, each in [0, q).
    coeffs: Vec<u64>,
    /// Modulus q.
    q: u64,
}

/// Minimum of the forward and backward distance between `a` and `b` on the
/// cycle Z_q. Both inputs must already be reduced into [0, q).
pub fn cyclic_distance(a: u64, b: u64, q: u64) -> u64 {
    let d = a.abs_diff(b);
    d.min(q - d)
}

impl Poly {
    /// All-zero polynomial of the given dimension and modulus.
    pub fn zero(dim: usize, q: u64) -> Self {
        debug_assert!(q <= i64::MAX as u64, "modulus {} out of supported range", q);
        Self {
            coeffs: vec![0; dim],
            q,
        }
    }

    /// Build from a coefficient vector, reducing each entry mod q.
    pub fn from_coeffs(coeffs: Vec<u64>, q: u64) -> Self {
        debug_assert!(q <= i64::MAX as u64, "modulus {} out of supported range", q);
        let mut p = Self { coeffs, q };
        p.reduce();
        p
    }

    /// Replace all coefficients at once, reducing each entry mod q.
    ///
    /// The vector must match the existing ring dimension exactly.
    pub fn set_coefficients(&mut self, coeffs: Vec<u64>) -> Result<()> {
        if coeffs.len() != self.coeffs.len() {
            return Err(RlweError::CoefficientCount {
                expected: self.coeffs.len(),
                got: coeffs.len(),
            });
        }
        self.coeffs = coeffs;
        self.reduce();
        Ok(())
    }

    /// Ring dimension n.
    pub fn dimension(&self) -> usize {
        self.coeffs.len()
    }

    /// Modulus q.
    pub fn modulus(&self) -> u64 {
        self.q
    }

    /// Coefficient at index `i`.
    pub fn coeff(&self, i: usize) -> u64 {
        self.coeffs[i]
    }

    /// All coefficients in order.
    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    fn reduce(&mut self) {
        for c in &mut self.coeffs {
            *c %= self.q;
        }
    }

    pub(crate) fn check_same_ring(&self, other: &Self) -> Result<()> {
        if self.coeffs.len() != other.coeffs.len() {
            return Err(RlweError::DimensionMismatch {
                expected: self.coeffs.len(),
                got: other.coeffs.len(),
            });
        }
        if self.q != other.q {
            return Err(RlweError::ModulusMismatch {
                expected: self.q,
                got: other.q,
            });
        }
        Ok(())
    }

    /// Coefficient-wise addition mod q.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_ring(other)?;
        let coeffs = self
            .coeffs
            .iter()
            .zip(other.coeffs.iter())
            .map(|(&a, &b)| {
                let sum = a + b;
                if sum >= self.q {
                    sum - self.q
                } else {
                    sum
                }
            })
            .collect();
        Ok(Self {
            coeffs,
            q: self.q,
        })
    }

    /// Coefficient-wise subtraction mod q.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_ring(other)?;
        let coeffs = self
            .coeffs
            .iter()
            .zip(other.coeffs.iter())
            .map(|(&a, &b)| if a >= b { a - b } else { self.q - b + a })
            .collect();
        Ok(Self {
            coeffs,
            q: self.q,
        })
    }

    /// Additive inverse: c → q - c, with 0 fixed.
    pub fn negate(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| if c == 0 { 0 } else { self.q - c })
            .collect();
        Self {
            coeffs,
            q: self.q,
        }
    }

    /// Negacyclic product in R_q.
    ///
    /// Schoolbook convolution into a 2n-wide accumulator, every partial
    /// product and accumulation reduced mod q, then the fold: the
    /// accumulated coefficient of x^(i+n) is subtracted from position i
    /// because x^n ≡ -1.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_same_ring(other)?;
        let n = self.coeffs.len();
        let q = self.q;
        let wide_q = q as u128;

        let mut acc = vec![0u64; 2 * n];
        for i in 0..n {
            if self.coeffs[i] == 0 {
                continue;
            }
            for j in 0..n {
                let prod = (self.coeffs[i] as u128 * other.coeffs[j] as u128 % wide_q) as u64;
                let sum = acc[i + j] + prod;
                acc[i + j] = if sum >= q { sum - q } else { sum };
            }
        }

        let mut coeffs = vec![0u64; n];
        for i in 0..n {
            let (lo, hi) = (acc[i], acc[i + n]);
            coeffs[i] = if lo >= hi { lo - hi } else { q - hi + lo };
        }
        Ok(Self { coeffs, q })
    }

    /// Coefficient-wise multiplication by a scalar, mod q.
    pub fn scalar_mul(&self, scalar: u64) -> Self {
        let scalar = scalar % self.q;
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| (c as u128 * scalar as u128 % self.q as u128) as u64)
            .collect();
        Self {
            coeffs,
            q: self.q,
        }
    }

    /// Round each coefficient to 0 when it is strictly closer to 0 on the
    /// cycle, otherwise to ⌊q/2⌋ (so an exact tie rounds to ⌊q/2⌋).
    /// Recovers an encoded bit from a noisy coefficient; idempotent.
    pub fn signal(&self) -> Self {
        let half = self.q / 2;
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| {
                let to_zero = cyclic_distance(c, 0, self.q);
                let to_half = cyclic_distance(c, half, self.q);
                if to_zero < to_half {
                    0
                } else {
                    half
                }
            })
            .collect();
        Self {
            coeffs,
            q: self.q,
        }
    }

    /// Fixed-layout serialization for hashing: little-endian u64 dimension,
    /// u64 modulus, then each coefficient as u64 in order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16 + 8 * self.coeffs.len());
        out.extend_from_slice(&(self.coeffs.len() as u64).to_le_bytes());
        out.extend_from_slice(&self.q.to_le_bytes());
        for &c in &self.coeffs {
            out.extend_from_slice(&c.to_le_bytes());
        }
        out
    }
}

impl Zeroize for Poly {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

impl std::fmt::Display for Poly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}
