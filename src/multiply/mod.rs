//! Scalar multiplication
//!
//! Two algorithms serve the Weierstrass curves:
//!
//! - `naf`  
//!   Signed-digit (non-adjacent form) double-and-add, for any point.
//!
//! - `comb`  
//!   Fixed-base comb multiplication with tables precomputed from the
//!   curve's base point, built lazily and cached on the descriptor.
//!
//! Montgomery curves go through the ladder in the `montgomery` module.
//! `Curve::multiply` and `Curve::multiply_base` pick the right path from
//! the curve's strategy and the enabled features.

mod comb;
mod naf;

pub use comb::{FixedPointTable, MAX_WINDOW_WIDTH};
pub use naf::{MAX_NAF_DIGITS, Naf, NafDigit};

use crate::curve::{Curve, CurveKind};
use crate::error::Result;
use crate::point::AffinePoint;
use crate::primitives::BigInt;

impl Curve {
    /// Computes `scalar * point` with the curve's strategy.
    ///
    /// Weierstrass curves use the comb tables when `point` is the base
    /// point (with the `fixed-base` feature), the signed-digit multiplier
    /// otherwise; a point with a coordinate not below `p` is rejected with
    /// `InvalidKey`. Montgomery curves run the ladder on `point.x` and
    /// return the resulting u-coordinate in `x`.
    pub fn multiply(&self, point: &AffinePoint, scalar: &BigInt) -> Result<AffinePoint> {
        match self.kind {
            CurveKind::ShortWeierstrass if point == self.generator() => {
                self.multiply_base(scalar)
            }
            CurveKind::ShortWeierstrass => self.scalar_multiply(point, scalar),
            CurveKind::Montgomery { .. } => {
                let u = self.ladder(&point.x, scalar)?;
                Ok(AffinePoint::new(u, BigInt::ZERO))
            }
        }
    }

    /// Computes `scalar * G` on a Weierstrass curve.
    ///
    /// Returns `UnsupportedOperation` on a Montgomery curve; use
    /// `public_key` or the ladder there.
    pub fn multiply_base(&self, scalar: &BigInt) -> Result<AffinePoint> {
        self.require_weierstrass("point multiplication on a Montgomery curve")?;

        if cfg!(feature = "fixed-base") && scalar.bits() <= self.bits() {
            return Ok(self.comb_multiply(scalar));
        }

        Ok(self.naf_multiply(self.generator(), scalar))
    }
}
