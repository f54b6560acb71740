//! Message-to-ring encoders.
//!
//! Two deliberately distinct mappings:
//!
//! - [`hash_to_poly`]: domain-separated SHA-256 expansion of a message into
//!   coefficients in {0, ⌊q/2⌋}. Deterministic, unbounded output length,
//!   single-bit avalanche. Used wherever the protocol needs a pseudorandom
//!   ring image of the message (the blind scheme's Y).
//! - [`message_to_poly`]: the literal message bits as 0/1 coefficients, no
//!   hashing. Used where the raw bits themselves are embedded (the direct
//!   scheme's z).

use sha2::{Digest, Sha256};

use crate::math::Poly;

/// Expand a message into a `dim`-coefficient polynomial with coefficients
/// in {0, ⌊q/2⌋}.
///
/// Block i is SHA-256(le32(i) ∥ message); digests are consumed bit by bit,
/// most significant first, chaining further blocks until `dim` coefficients
/// exist.
pub fn hash_to_poly(message: &[u8], dim: usize, q: u64) -> Poly {
    let half = q / 2;
    let mut coeffs = Vec::with_capacity(dim);
    let mut counter: u32 = 0;

    while coeffs.len() < dim {
        let mut hasher = Sha256::new();
        hasher.update(counter.to_le_bytes());
        hasher.update(message);
        let digest = hasher.finalize();

        'digest: for byte in digest {
            for bit in (0..8).rev() {
                if coeffs.len() == dim {
                    break 'digest;
                }
                coeffs.push(if (byte >> bit) & 1 == 1 { half } else { 0 });
            }
        }
        counter = counter.wrapping_add(1);
    }

    Poly::from_coeffs(coeffs, q)
}

/// Map the message's raw bits 1:1 into 0/1 coefficients, most significant
/// bit of each byte first. Bits past `dim` are dropped; missing bits stay 0.
pub fn message_to_poly(message: &[u8], dim: usize, q: u64) -> Poly {
    let mut coeffs = vec![0u64; dim];
    let mut idx = 0;

    'message: for &byte in message {
        for bit in (0..8).rev() {
            if idx == dim {
                break 'message;
            }
            coeffs[idx] = ((byte >> bit) & 1) as u64;
            idx += 1;
        }
    }

    Poly::from_coeffs(coeffs, q)
}
