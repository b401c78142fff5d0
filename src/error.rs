//! Error types
//!
//! Every fallible operation in the crate returns [`Result`]. Arithmetic
//! inconsistencies that can only stem from a programming error (capacity
//! overflow, an unbounded reduction) are not represented here: they panic.

use thiserror::Error;

/// Errors surfaced by curve operations.
#[derive(Debug, Error)]
pub enum EcError {
    /// Malformed point encoding (marker byte or length).
    #[error("malformed point encoding")]
    Format,

    /// Destination buffer too small.
    #[error("buffer too small: {needed} bytes needed, {available} available")]
    Size { needed: usize, available: usize },

    /// Public key failed range or on-curve validation.
    #[error("invalid public key: {0}")]
    InvalidKey(&'static str),

    /// The random source failed during key generation.
    #[error("random source failure: {0}")]
    Rng(#[from] rand_core::Error),

    /// No curve registered under this identifier.
    #[error("unknown curve identifier {0:#06x}")]
    MissingCurve(u16),

    /// Operation not defined for this kind of curve.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

/// Result type alias for curve operations.
pub type Result<T> = core::result::Result<T, EcError>;
