use crate::curve::Curve;
use crate::error::{EcError, Result};
use crate::point::AffinePoint;
use crate::primitives::BigInt;

/// Point in Jacobian coordinates `(X, Y, Z)`, standing for the affine
/// point `(X / Z², Y / Z³)`.
///
/// Any point with `Z = 0` is the point at infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProjectivePoint {
    pub x: BigInt,
    pub y: BigInt,
    pub z: BigInt,
}

impl ProjectivePoint {
    /// The point at infinity.
    pub const IDENTITY: Self = Self::new(BigInt::ONE, BigInt::ONE, BigInt::ZERO);

    pub const fn new(x: BigInt, y: BigInt, z: BigInt) -> Self {
        Self { x, y, z }
    }

    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }
}

impl Curve {
    /// Converts back to affine coordinates with one field inversion.
    pub fn to_affine(&self, point: &ProjectivePoint) -> Result<AffinePoint> {
        self.require_weierstrass("projective conversion on a Montgomery curve")?;
        self.check_projective(point)?;

        Ok(self.jacobian_to_affine(point))
    }

    /// In-place doubling for `a = -3` curves.
    ///
    /// ```text
    /// M  = 3 (X - Z²)(X + Z²)
    /// S  = 4 X Y²
    /// X' = M² - 2S
    /// Y' = M (S - X') - 8 Y⁴
    /// Z' = 2 Y Z
    /// ```
    pub fn projective_double(&self, point: &mut ProjectivePoint) -> Result<()> {
        self.require_weierstrass("point doubling on a Montgomery curve")?;
        self.check_projective(point)?;

        self.jacobian_double(point);
        Ok(())
    }

    /// In-place mixed addition `point += other`, with `other` affine.
    ///
    /// ```text
    /// C  = X2 Z1² - X1
    /// D  = Y2 Z1³ - Y1
    /// X' = D² - (C³ + 2 X1 C²)
    /// Y' = D (X1 C² - X') - Y1 C³
    /// Z' = Z1 C
    /// ```
    ///
    /// Equal inputs fall back to doubling; opposite inputs give the
    /// identity.
    pub fn projective_add(&self, point: &mut ProjectivePoint, other: &AffinePoint) -> Result<()> {
        self.require_weierstrass("point addition on a Montgomery curve")?;
        self.check_projective(point)?;
        self.check_coordinates(other)?;

        self.jacobian_add(point, other);
        Ok(())
    }

    fn check_projective(&self, point: &ProjectivePoint) -> Result<()> {
        let f = &self.field;
        if f.contains(&point.x) && f.contains(&point.y) && f.contains(&point.z) {
            Ok(())
        } else {
            Err(EcError::InvalidKey("coordinate out of range"))
        }
    }

    pub(crate) fn jacobian_to_affine(&self, point: &ProjectivePoint) -> AffinePoint {
        if point.is_identity() {
            return AffinePoint::IDENTITY;
        }

        let f = &self.field;
        let z_inv = f.invert(&point.z);
        let z_inv2 = f.square(&z_inv);
        let z_inv3 = f.mul(&z_inv2, &z_inv);

        AffinePoint::new(f.mul(&point.x, &z_inv2), f.mul(&point.y, &z_inv3))
    }

    pub(crate) fn jacobian_double(&self, point: &mut ProjectivePoint) {
        if point.is_identity() {
            return;
        }

        let f = &self.field;

        let zz = f.square(&point.z);
        let m = f.mul_u64(&f.mul(&f.sub(&point.x, &zz), &f.add(&point.x, &zz)), 3);
        let yy = f.square(&point.y);
        let s = f.shl(&f.mul(&point.x, &yy), 2);
        let yyyy8 = f.shl(&f.square(&yy), 3);

        let x3 = f.sub(&f.square(&m), &f.add(&s, &s));
        let y3 = f.sub(&f.mul(&m, &f.sub(&s, &x3)), &yyyy8);
        let z3 = f.shl(&f.mul(&point.y, &point.z), 1);

        *point = ProjectivePoint::new(x3, y3, z3);
    }

    pub(crate) fn jacobian_add(&self, point: &mut ProjectivePoint, other: &AffinePoint) {
        if other.is_identity() {
            return;
        }
        if point.is_identity() {
            *point = other.to_projective();
            return;
        }

        let f = &self.field;

        let zz = f.square(&point.z);
        let zzz = f.mul(&zz, &point.z);
        let c = f.sub(&f.mul(&other.x, &zz), &point.x);
        let d = f.sub(&f.mul(&other.y, &zzz), &point.y);

        if c.is_zero() {
            if d.is_zero() {
                self.jacobian_double(point);
            } else {
                point.set_identity();
            }
            return;
        }

        let cc = f.square(&c);
        let ccc = f.mul(&cc, &c);
        let x1cc = f.mul(&point.x, &cc);

        let x3 = f.sub(&f.square(&d), &f.add(&ccc, &f.add(&x1cc, &x1cc)));
        let y3 = f.sub(&f.mul(&d, &f.sub(&x1cc, &x3)), &f.mul(&point.y, &ccc));
        let z3 = f.mul(&point.z, &c);

        *point = ProjectivePoint::new(x3, y3, z3);
    }
}
