use crate::curve::Curve;
use crate::error::Result;
use crate::point::{AffinePoint, ProjectivePoint};
use crate::primitives::{BITS, BigInt};

/// Longest recoding of a `BigInt`: one digit more than its capacity.
pub const MAX_NAF_DIGITS: usize = BITS + 1;

/// One signed digit of a non-adjacent form.
///
/// Discriminants follow the two-bit encoding `0`, `1`, `3` (`3` standing
/// for -1). The value 2 has no variant and cannot be produced.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NafDigit {
    Zero = 0,
    One = 1,
    MinusOne = 3,
}

/// Non-adjacent form of a scalar, least significant digit first.
///
/// No two adjacent digits are both non-zero, and the most significant
/// stored digit is non-zero.
#[derive(Clone)]
pub struct Naf {
    digits: [NafDigit; MAX_NAF_DIGITS],
    len: usize,
}

impl Naf {
    /// Recodes `scalar`, reading its bits with a running carry.
    ///
    /// At each position the remaining value is `2q + t` with
    /// `t = bit + carry`:
    /// - `t = 0`: digit 0;
    /// - `t = 2`: digit 0, carry 1;
    /// - `t = 1`: digit +1 if the next bit is 0, else -1 with carry 1, so
    ///   the next remaining value is even.
    pub fn recode(scalar: &BigInt) -> Self {
        let mut digits = [NafDigit::Zero; MAX_NAF_DIGITS];
        let mut len = 0;
        let mut carry = 0u64;

        let bits = scalar.bits();
        let mut i = 0;

        while i < bits || carry != 0 {
            let digit = match scalar.bit(i) + carry {
                0 => NafDigit::Zero,
                2 => {
                    carry = 1;
                    NafDigit::Zero
                }
                _ if scalar.bit(i + 1) == 0 => {
                    carry = 0;
                    NafDigit::One
                }
                _ => {
                    carry = 1;
                    NafDigit::MinusOne
                }
            };

            digits[i] = digit;
            if digit != NafDigit::Zero {
                len = i + 1;
            }
            i += 1;
        }

        Self { digits, len }
    }

    /// Number of digits after trimming high zero digits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Digits, least significant first.
    pub fn digits(&self) -> &[NafDigit] {
        &self.digits[..self.len]
    }
}

impl Curve {
    /// Computes `scalar * point` for an arbitrary point by signed-digit
    /// double-and-add.
    ///
    /// The scalar is used as given; it is not reduced modulo `n`.
    /// Returns `UnsupportedOperation` on a Montgomery curve.
    pub fn scalar_multiply(&self, point: &AffinePoint, scalar: &BigInt) -> Result<AffinePoint> {
        self.require_weierstrass("point multiplication on a Montgomery curve")?;
        self.check_coordinates(point)?;

        Ok(self.naf_multiply(point, scalar))
    }

    pub(crate) fn naf_multiply(&self, point: &AffinePoint, scalar: &BigInt) -> AffinePoint {
        if point.is_identity() || scalar.is_zero() {
            return AffinePoint::IDENTITY;
        }

        let naf = Naf::recode(scalar);
        let negated = self.affine_negate(point);

        let mut acc = ProjectivePoint::IDENTITY;
        for digit in naf.digits().iter().rev() {
            self.jacobian_double(&mut acc);

            match digit {
                NafDigit::Zero => {}
                NafDigit::One => self.jacobian_add(&mut acc, point),
                NafDigit::MinusOne => self.jacobian_add(&mut acc, &negated),
            }
        }

        self.jacobian_to_affine(&acc)
    }
}
