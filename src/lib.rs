//! RLWE digital signatures with a blind-signature variant
//!
//! This crate implements a lattice-based signature scheme over the polynomial
//! ring R_q = Z_q[x]/(x^n + 1), together with a blind-signature protocol in
//! which an untrusted server signs a masked message without learning it.
//!
//! Key components:
//! - Negacyclic polynomial arithmetic over R_q (schoolbook multiplication)
//! - Secure uniform and discrete-Gaussian coefficient sampling
//! - Counter-chained SHA-256 expansion of messages into ring elements
//! - Sign/verify plus the blind/blind-sign/unblind protocol
//!
//! # Ring convention
//!
//! The `ring_dim` parameter is the polynomial's actual coefficient count: a
//! signer built with `ring_dim = n` operates in Z_q[x]/(x^n + 1) everywhere
//! (generator, keys, encoded messages, signatures). `ring_dim` must be a
//! power of two.
//!
//! # Example
//!
//! ```
//! use rlwe_sig::{RlweSigner, SigParams};
//!
//! // Toy ring: n = 16, so the direct scheme signs the first 16 message bits.
//! let mut signer = RlweSigner::new(SigParams::toy()).unwrap();
//! signer.generate_keys().unwrap();
//!
//! let sig = signer.sign(b"OK").unwrap();
//! assert!(signer.verify(b"OK", &sig).unwrap());
//! assert!(!signer.verify(b"NO", &sig).unwrap());
//! ```

pub mod error;
pub mod math;
pub mod params;
pub mod rlwe;
pub mod trace;

pub use error::{Result, RlweError};
pub use math::{cyclic_distance, Poly, Sampler};
pub use params::SigParams;
pub use rlwe::{
    hash_to_poly, message_to_poly, BlindSignature, BlindingContext, KeyMaterial, RlweSigner,
    SecretKey, Signature,
};
pub use trace::{FnSink, TraceSink, TracingSink};
