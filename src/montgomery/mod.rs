//! Montgomery ladder (X25519 / X448)
//!
//! This module implements x-only scalar multiplication on the Montgomery
//! curves of RFC 7748. It depends on field arithmetic only: no affine or
//! Jacobian point is ever formed.
//!
//! The public API is the `Curve::ladder` method, usable with the `X25519`
//! and `X448` descriptors, and the byte-level `x25519` / `x448` functions
//! defined in the internal `core` module.
//!
//! ## Structure
//!
//! - `core`  
//!   Scalar clamping, the ladder with constant-time conditional swaps,
//!   and the RFC 7748 byte interfaces.

mod core;

pub use self::core::*;
