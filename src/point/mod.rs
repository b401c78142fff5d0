//! Point representations and group law
//!
//! Weierstrass points exist in two representations: affine `(x, y)` for
//! storage, encoding and tables, and Jacobian `(X, Y, Z)` for the
//! accumulators of scalar multiplication, where they avoid one field
//! inversion per step. Each representation has its own encoding of the
//! point at infinity, and every operation checks for it before applying
//! the group-law formulas.
//!
//! ## Structure
//!
//! - `affine`  
//!   `AffinePoint`, affine add/subtract/double/negate.
//!
//! - `projective`  
//!   `ProjectivePoint`, mixed addition, doubling and conversion back to
//!   affine.
//!
//! - `encoding`  
//!   Uncompressed SEC1-style point encoding and Montgomery u-coordinate
//!   encoding.

mod affine;
mod encoding;
mod projective;

pub use affine::AffinePoint;
pub use encoding::UNCOMPRESSED;
pub use projective::ProjectivePoint;
