//! Elliptic-curve arithmetic for Cryptal
//!
//! This crate provides the elliptic-curve core used by key-exchange and
//! signature protocols: field arithmetic, point arithmetic, scalar
//! multiplication, key-pair generation and public-key validation over a
//! fixed set of named curves.
//!
//! Supported curves:
//! - NIST P-192, P-224, P-256, P-384 and P-521 (short Weierstrass,
//!   `a = -3`, cofactor 1);
//! - Curve25519 and Curve448 in Montgomery form, for X25519 and X448.
//!
//! # Module overview
//!
//! - `primitives`  
//!   `BigInt`, a fixed-capacity stack integer with the arithmetic, byte
//!   conversions and constant-time swap the rest of the crate builds on.
//!
//! - `field`  
//!   Prime-field helpers and reduction: a generic division-based path and
//!   fast Solinas-style reductions for the NIST primes.
//!
//! - `point`  
//!   Affine and Jacobian points, the group law, and point encodings.
//!
//! - `multiply`  
//!   Signed-digit (NAF) double-and-add for arbitrary points, and
//!   fixed-base comb multiplication with lazily built, cached tables.
//!
//! - `montgomery`  
//!   The x-only Montgomery ladder with constant-time conditional swaps,
//!   and the RFC 7748 `x25519` / `x448` functions.
//!
//! - `keys`  
//!   Key-pair generation, shared secrets and public-key validation.
//!
//! - `curve`  
//!   Immutable curve descriptors and the registry used to look them up.
//!
//! # Design goals
//!
//! - No heap allocations: every intermediate is a fixed-size stack value
//! - Arithmetic inconsistencies fault loudly instead of producing output
//! - Constant-time swaps on the only secret-dependent ladder path
//! - Explicit, auditable formulas matching the published algorithms
//!
//! Logging goes through the `log` facade; the crate never installs a
//! logger.

pub mod curve;
pub mod error;
pub mod field;
pub mod keys;
pub mod montgomery;
pub mod multiply;
pub mod point;
pub mod primitives;

pub use curve::{Curve, CurveKind, curve_by_id, curve_by_name, curves};
pub use error::{EcError, Result};
pub use keys::{KeyPair, PublicKey};
pub use point::{AffinePoint, ProjectivePoint};
pub use primitives::BigInt;
