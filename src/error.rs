//! Error types for ring and protocol operations.
//!
//! Configuration errors (mismatched rings, bad parameters, unavailable
//! entropy) surface as `Err`; a failed signature check is the ordinary
//! `Ok(false)` outcome of `verify` and never an error.

use thiserror::Error;

/// Errors produced by ring arithmetic, sampling, and the signature engine.
#[derive(Error, Debug)]
pub enum RlweError {
    /// Two ring elements with different coefficient counts were combined.
    #[error("ring dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Two ring elements with different moduli were combined.
    #[error("modulus mismatch: expected {expected}, got {got}")]
    ModulusMismatch { expected: u64, got: u64 },

    /// An explicit coefficient assignment did not match the ring dimension.
    #[error("coefficient count mismatch: expected {expected}, got {got}")]
    CoefficientCount { expected: usize, got: usize },

    /// Parameter validation failed (non-power-of-two dimension, bad modulus).
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The platform secure random source could not be read. Never retried
    /// with a weaker source.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),
}

pub type Result<T> = std::result::Result<T, RlweError>;
