use crate::curve::Curve;
use crate::error::{EcError, Result};
use crate::point::ProjectivePoint;
use crate::primitives::BigInt;

/// Point in affine coordinates `(x, y)`.
///
/// The point at infinity is encoded as `(0, 0)`; no finite point of a
/// supported curve has both coordinates zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    pub x: BigInt,
    pub y: BigInt,
}

impl AffinePoint {
    /// The point at infinity.
    pub const IDENTITY: Self = Self::new(BigInt::ZERO, BigInt::ZERO);

    pub const fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Lifts the point to projective coordinates with `Z = 1`.
    pub fn to_projective(&self) -> ProjectivePoint {
        if self.is_identity() {
            return ProjectivePoint::IDENTITY;
        }

        ProjectivePoint::new(self.x, self.y, BigInt::ONE)
    }
}

impl Curve {
    /// Returns `-point = (x, p - y)`.
    pub fn negate(&self, point: &AffinePoint) -> Result<AffinePoint> {
        self.require_weierstrass("point negation on a Montgomery curve")?;
        self.check_coordinates(point)?;

        Ok(self.affine_negate(point))
    }

    /// Affine point addition.
    ///
    /// Handles the identity on either side, doubling (`left == right`) and
    /// opposite points (`left == -right`). Costs one field inversion.
    ///
    /// Returns `UnsupportedOperation` on a Montgomery curve and
    /// `InvalidKey` if a coordinate is not below `p`.
    pub fn add(&self, left: &AffinePoint, right: &AffinePoint) -> Result<AffinePoint> {
        self.require_weierstrass("point addition on a Montgomery curve")?;
        self.check_coordinates(left)?;
        self.check_coordinates(right)?;

        Ok(self.affine_add(left, right))
    }

    /// `left - right`, computed as `left + (x_r, p - y_r)`.
    pub fn subtract(&self, left: &AffinePoint, right: &AffinePoint) -> Result<AffinePoint> {
        self.require_weierstrass("point subtraction on a Montgomery curve")?;
        self.check_coordinates(left)?;
        self.check_coordinates(right)?;

        Ok(self.affine_add(left, &self.affine_negate(right)))
    }

    pub fn double(&self, point: &AffinePoint) -> Result<AffinePoint> {
        self.require_weierstrass("point doubling on a Montgomery curve")?;
        self.check_coordinates(point)?;

        Ok(self.affine_add(point, point))
    }

    /// Rejects points whose coordinates are not reduced mod `p`.
    pub(crate) fn check_coordinates(&self, point: &AffinePoint) -> Result<()> {
        if self.field.contains(&point.x) && self.field.contains(&point.y) {
            Ok(())
        } else {
            Err(EcError::InvalidKey("coordinate out of range"))
        }
    }

    pub(crate) fn affine_negate(&self, point: &AffinePoint) -> AffinePoint {
        if point.is_identity() {
            return *point;
        }

        AffinePoint::new(point.x, self.field.neg(&point.y))
    }

    /// The doubling slope uses `3x² - 3`, which relies on `a = -3`; this
    /// holds for every Weierstrass curve in the registry.
    pub(crate) fn affine_add(&self, left: &AffinePoint, right: &AffinePoint) -> AffinePoint {
        if left.is_identity() {
            return *right;
        }
        if right.is_identity() {
            return *left;
        }

        let f = &self.field;

        let lambda = if left.x == right.x {
            if left.y != right.y || left.y.is_zero() {
                return AffinePoint::IDENTITY;
            }

            // (3x² - 3) / 2y
            let numerator = f.sub_u64(&f.mul_u64(&f.square(&left.x), 3), 3);
            let denominator = f.add(&left.y, &left.y);
            f.mul(&numerator, &f.invert(&denominator))
        } else {
            // (y2 - y1) / (x2 - x1)
            let numerator = f.sub(&right.y, &left.y);
            let denominator = f.sub(&right.x, &left.x);
            f.mul(&numerator, &f.invert(&denominator))
        };

        let x3 = f.sub(&f.sub(&f.square(&lambda), &left.x), &right.x);
        let y3 = f.sub(&f.mul(&lambda, &f.sub(&left.x, &x3)), &left.y);

        AffinePoint::new(x3, y3)
    }
}
