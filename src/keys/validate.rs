use crate::curve::Curve;
use crate::error::{EcError, Result};
use crate::point::AffinePoint;

impl Curve {
    /// Checks that `point` is an acceptable public key.
    ///
    /// In order, short-circuiting:
    /// 1. the point is not at infinity;
    /// 2. both coordinates lie in `[0, p)`;
    /// 3. `y² = (x² + a) x + b mod p`.
    ///
    /// No subgroup check is made: every registered Weierstrass curve has
    /// cofactor 1, so any point passing these checks has order `n`.
    ///
    /// Montgomery curves are not supported (X25519/X448 accept every
    /// u-coordinate).
    pub fn validate_public_key(&self, point: &AffinePoint) -> Result<()> {
        self.require_weierstrass("public key validation on a Montgomery curve")?;

        if point.is_identity() {
            return reject(self, "point at infinity");
        }

        let f = &self.field;
        if !f.contains(&point.x) || !f.contains(&point.y) {
            return reject(self, "coordinate out of range");
        }

        let lhs = f.square(&point.y);
        let rhs = f.add(
            &f.mul(&f.add(&f.square(&point.x), &self.a), &point.x),
            &self.b,
        );

        if lhs != rhs {
            return reject(self, "point not on curve");
        }

        Ok(())
    }
}

fn reject(curve: &Curve, reason: &'static str) -> Result<()> {
    log::debug!("{} public key rejected: {}", curve.name(), reason);
    Err(EcError::InvalidKey(reason))
}
