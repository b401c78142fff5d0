//! Fixed-base comb multiplication
//!
//! The scalar `k` (at most `w * d` bits) is viewed as a `w x d` bit matrix:
//! row `j` holds bits `j*d .. (j+1)*d`. Column `c` of that matrix, read top
//! to bottom, is a `w`-bit pattern `v = Σ_j bit(c + j*d) << j`, and
//!
//! ```text
//! k * G = Σ_c 2^c * (Σ_j bit(c + j*d) * 2^(j*d) * G) = Σ_c 2^c * P[v_c]
//! ```
//!
//! where `P[v]` is the point for pattern `v`. The columns are processed in
//! two halves of `e = (d + 1) / 2` columns each: column `i` uses `comb`
//! (patterns `2 .. 2^w - 1`, pattern 1 being `G` itself) and column
//! `i + e` uses `comb2e` (patterns `1 .. 2^w - 1`, pre-scaled by `2^e`).
//! One doubling per column pair is therefore enough. When `d` is odd the
//! two halves cover `d + 1` columns, and the extra column `d` is skipped.

use crate::curve::Curve;
use crate::error::Result;
use crate::point::{AffinePoint, ProjectivePoint};
use crate::primitives::BigInt;

/// Widest supported comb window.
pub const MAX_WINDOW_WIDTH: usize = 5;

const COMB_CAPACITY: usize = (1 << MAX_WINDOW_WIDTH) - 2;
const COMB2E_CAPACITY: usize = (1 << MAX_WINDOW_WIDTH) - 1;

/// Precomputed comb tables for one curve's base point.
#[derive(Clone, Debug)]
pub struct FixedPointTable {
    window_width: usize,
    d: usize,
    e: usize,
    comb: [AffinePoint; COMB_CAPACITY],
    comb2e: [AffinePoint; COMB2E_CAPACITY],
}

impl FixedPointTable {
    /// Builds the tables for `curve`'s base point.
    ///
    /// Uses the signed-digit multiplier for the `2^d` and `2^e` scalings
    /// and affine additions for the pattern combinations.
    ///
    /// # Panics
    /// Panics on a Montgomery curve or a window width outside
    /// `2..=MAX_WINDOW_WIDTH`.
    fn precompute(curve: &Curve) -> Self {
        assert!(
            !curve.is_montgomery(),
            "comb tables are only defined for Weierstrass curves"
        );

        let w = curve.window_width();
        assert!(
            (2..=MAX_WINDOW_WIDTH).contains(&w),
            "unsupported comb window width {}",
            w
        );

        let d = curve.bits().div_ceil(w);
        let e = (d + 1) / 2;

        log::debug!(
            "precomputing comb table for {} (w = {}, d = {}, e = {})",
            curve.name(),
            w,
            d,
            e
        );

        let g = curve.generator();
        let two_d = BigInt::ONE << d;
        let two_e = BigInt::ONE << e;

        // comb[v - 2] holds the point of pattern v.
        let mut comb = [AffinePoint::IDENTITY; COMB_CAPACITY];
        comb[0] = curve.naf_multiply(g, &two_d);

        for i in 1..w {
            let offset = 1 << i;

            if i > 1 {
                comb[offset - 2] = curve.naf_multiply(&comb[(offset >> 1) - 2], &two_d);
            }

            comb[offset - 1] = curve.affine_add(&comb[offset - 2], g);
            for j in 1..offset - 1 {
                comb[offset + j - 1] = curve.affine_add(&comb[offset - 2], &comb[j - 1]);
            }
        }

        // comb2e[v - 1] holds 2^e times the point of pattern v.
        let mut comb2e = [AffinePoint::IDENTITY; COMB2E_CAPACITY];
        comb2e[0] = curve.naf_multiply(g, &two_e);
        comb2e[1] = curve.naf_multiply(&comb2e[0], &two_d);

        for i in 1..w {
            let offset = 1 << i;

            if i > 1 {
                comb2e[offset - 1] = curve.naf_multiply(&comb2e[(offset >> 1) - 1], &two_d);
            }

            for j in 0..offset - 1 {
                comb2e[offset + j] = curve.affine_add(&comb2e[offset - 1], &comb2e[j]);
            }
        }

        Self {
            window_width: w,
            d,
            e,
            comb,
            comb2e,
        }
    }

    pub fn window_width(&self) -> usize {
        self.window_width
    }

    /// Number of columns `d = ceil(bits / w)`.
    pub fn columns(&self) -> usize {
        self.d
    }

    /// Number of column pairs `e = (d + 1) / 2`.
    pub fn half(&self) -> usize {
        self.e
    }

    /// Largest scalar bit length the table can absorb.
    pub fn scalar_bits(&self) -> usize {
        self.window_width * self.d
    }

    /// Points for patterns `2 .. 2^w - 1`.
    pub fn comb(&self) -> &[AffinePoint] {
        &self.comb[..(1 << self.window_width) - 2]
    }

    /// `2^e`-scaled points for patterns `1 .. 2^w - 1`.
    pub fn comb2e(&self) -> &[AffinePoint] {
        &self.comb2e[..(1 << self.window_width) - 1]
    }

    /// Reads column `column` of the scalar's bit matrix.
    fn gather(&self, scalar: &BigInt, column: usize) -> usize {
        (0..self.window_width).fold(0, |acc, j| {
            acc | ((scalar.bit(column + j * self.d) as usize) << j)
        })
    }
}

impl Curve {
    /// Returns the comb table of this curve, building it on first use.
    ///
    /// Concurrent first calls block until a single build completes.
    /// Returns `UnsupportedOperation` on a Montgomery curve.
    pub fn fixed_points(&self) -> Result<&FixedPointTable> {
        self.require_weierstrass("comb tables on a Montgomery curve")?;

        Ok(self.comb_table())
    }

    /// Builds the comb table now instead of on first use.
    pub fn precompute(&self) -> Result<()> {
        self.fixed_points().map(|_| ())
    }

    /// Computes `scalar * G` with the comb tables.
    ///
    /// Returns `UnsupportedOperation` on a Montgomery curve.
    ///
    /// # Panics
    /// Panics if `scalar` is wider than `w * d` bits.
    pub fn fixed_base_multiply(&self, scalar: &BigInt) -> Result<AffinePoint> {
        self.require_weierstrass("point multiplication on a Montgomery curve")?;

        Ok(self.comb_multiply(scalar))
    }

    pub(crate) fn comb_table(&self) -> &FixedPointTable {
        self.fixed_points
            .get_or_init(|| FixedPointTable::precompute(self))
    }

    pub(crate) fn comb_multiply(&self, scalar: &BigInt) -> AffinePoint {
        let table = self.comb_table();
        assert!(
            scalar.bits() <= table.scalar_bits(),
            "scalar exceeds the comb table width"
        );

        let g = self.generator();
        let (d, e) = (table.d, table.e);

        let mut acc = ProjectivePoint::IDENTITY;
        for i in (0..e).rev() {
            self.jacobian_double(&mut acc);

            match table.gather(scalar, i) {
                0 => {}
                1 => self.jacobian_add(&mut acc, g),
                v => self.jacobian_add(&mut acc, &table.comb[v - 2]),
            }

            if d % 2 == 1 && i == e - 1 {
                continue;
            }

            let v = table.gather(scalar, i + e);
            if v > 0 {
                self.jacobian_add(&mut acc, &table.comb2e[v - 1]);
            }
        }

        self.jacobian_to_affine(&acc)
    }
}
