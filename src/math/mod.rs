//! Mathematical primitives for the RLWE signature scheme.
//!
//! - **Ring arithmetic** over R_q = Z_q[x]/(x^n + 1) with schoolbook
//!   negacyclic multiplication
//! - **Secure sampling** of uniform and discrete-Gaussian coefficient
//!   vectors from the platform CSPRNG
//!
//! # Example
//!
//! ```
//! use rlwe_sig::math::{Poly, Sampler};
//!
//! let mut sampler = Sampler::new();
//! let a = sampler.uniform_poly(16, 3329).unwrap();
//! let e = sampler.gaussian_poly(16, 3329, 3.0).unwrap();
//! let b = a.add(&e).unwrap();
//! assert_eq!(b.dimension(), 16);
//! ```

pub mod poly;
pub mod sampler;

pub use poly::{cyclic_distance, Poly};
pub use sampler::Sampler;
