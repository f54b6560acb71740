//! RLWE signature engine.
//!
//! Two schemes share one key layout (generator `a`, public key
//! `b = a·s + e`, small secret `s`):
//!
//! - **Direct**: `sign` produces `(u, v) = (a·r + e1, b·r + e2 + z·⌊q/2⌋)`
//!   over the raw message bits z; `verify` checks `v - u·s` against
//!   `z·⌊q/2⌋` within a cyclic-distance tolerance.
//! - **Blind**: the client masks `Y = H(secret)` as `Y + a·r`, the server
//!   returns `s·blinded + e1` without ever seeing the secret, and the client
//!   strips the mask with `r·b`. Verification rounds both sides through
//!   `signal()` and compares exactly.
//!
//! The blind verifier needs the server's secret key, so that variant behaves
//! as a symmetric blind MAC rather than a publicly verifiable signature.
//! This asymmetry is inherited from the scheme and deliberately preserved.
//!
//! # Example
//!
//! ```
//! use rlwe_sig::{RlweSigner, SigParams};
//!
//! // One engine plays both roles; in deployment the client only needs the
//! // server's public key.
//! let mut engine = RlweSigner::new(SigParams::toy()).unwrap();
//! engine.generate_keys().unwrap();
//!
//! let ctx = engine.blind_message(b"my secret").unwrap();
//! let blind_sig = engine.blind_sign(ctx.blinded()).unwrap();
//! let (_, server_pk) = engine.public_key();
//! let final_sig = ctx.unblind(&blind_sig, &server_pk).unwrap();
//! assert!(engine.verify_blinded(b"my secret", &final_sig).unwrap());
//! ```

mod blind;
mod encode;
mod sign;
mod types;

pub use encode::{hash_to_poly, message_to_poly};
pub use sign::RlweSigner;
pub use types::{BlindSignature, BlindingContext, KeyMaterial, SecretKey, Signature};
