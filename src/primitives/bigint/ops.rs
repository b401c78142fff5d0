//! Arithmetic operations for `BigInt`
//!
//! Operator traits (`+`, `-`, `*`, `%`, `<<`, `>>`) are implemented on the
//! value type directly; `BigInt` is `Copy`, so operands are passed by value
//! like machine integers.
//!
//! Unlike machine integers, none of these operators wrap. A result that
//! does not fit the fixed capacity, or a subtraction that would go below
//! zero, panics: both indicate a sizing error in the caller, and a
//! truncated value must never flow into a cryptographic result.
//!
//! The remainder is computed with schoolbook long division over 32-bit
//! digits (Knuth, TAOCP vol. 2, algorithm D).

use crate::primitives::bigint::{BITS, BigInt, LIMBS};
use std::ops::{Add, Mul, Rem, Shl, Shr, Sub};

const DIGITS: usize = LIMBS * 2;
const DIGIT_BASE: u64 = 1 << 32;

impl BigInt {
    /// Adds two values, reporting whether the capacity overflowed.
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; LIMBS];
        let mut carry = false;

        for (o, (l, r)) in out
            .iter_mut()
            .zip(self.limbs.iter().zip(rhs.limbs.iter()))
        {
            let (s1, c1) = l.overflowing_add(*r);
            let (s2, c2) = s1.overflowing_add(carry as u64);
            *o = s2;
            carry = c1 | c2;
        }

        (Self { limbs: out }, carry)
    }

    /// Subtracts `rhs`, reporting whether the result went below zero.
    ///
    /// On borrow the returned value is the two's-complement wrap and must
    /// not be used as a magnitude.
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; LIMBS];
        let mut borrow = false;

        for (o, (l, r)) in out
            .iter_mut()
            .zip(self.limbs.iter().zip(rhs.limbs.iter()))
        {
            let (d1, b1) = l.overflowing_sub(*r);
            let (d2, b2) = d1.overflowing_sub(borrow as u64);
            *o = d2;
            borrow = b1 | b2;
        }

        (Self { limbs: out }, borrow)
    }

    /// Returns `self - rhs`, or `None` if `rhs > self`.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (value, false) => Some(value),
            (_, true) => None,
        }
    }

    /// Multiplies by a single machine word.
    ///
    /// # Panics
    /// Panics if the product exceeds the capacity.
    pub fn mul_u64(&self, digit: u64) -> Self {
        let mut out = [0u64; LIMBS];
        let mut carry = 0u128;

        for (o, l) in out.iter_mut().zip(self.limbs.iter()) {
            let t = (*l as u128) * (digit as u128) + carry;
            *o = t as u64;
            carry = t >> 64;
        }

        assert!(carry == 0, "BigInt product exceeds capacity");
        Self { limbs: out }
    }

    /// Squares the value.
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Computes `self^exponent mod modulus` by left-to-right binary
    /// exponentiation.
    pub fn pow_mod(&self, exponent: &Self, modulus: &Self) -> Self {
        let base = *self % *modulus;
        let mut acc = Self::ONE % *modulus;

        for i in (0..exponent.bits()).rev() {
            acc = acc.square() % *modulus;
            if exponent.bit(i) == 1 {
                acc = (acc * base) % *modulus;
            }
        }

        acc
    }

    /// Inverse of `self` modulo the prime `p`, via Fermat's little theorem
    /// (`self^(p-2) mod p`).
    ///
    /// Zero has no inverse; it maps to zero.
    ///
    /// # Panics
    /// Panics if `p < 3`.
    pub fn inv_mod_prime(&self, p: &Self) -> Self {
        let exponent = p
            .checked_sub(&Self::from_u64(2))
            .filter(|e| !e.is_zero())
            .unwrap_or_else(|| panic!("modulus {} is not an odd prime", p));

        self.pow_mod(&exponent, p)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        let (sum, overflow) = self.overflowing_add(&rhs);
        assert!(!overflow, "BigInt addition exceeds capacity");
        sum
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        let (diff, borrow) = self.overflowing_sub(&rhs);
        assert!(!borrow, "BigInt subtraction underflow");
        diff
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    /// Schoolbook multiplication over the significant limbs only.
    fn mul(self, rhs: BigInt) -> BigInt {
        let a_len = self.limb_len();
        let b_len = rhs.limb_len();

        let mut out = [0u64; LIMBS * 2];

        for i in 0..a_len {
            let mut carry = 0u128;
            for j in 0..b_len {
                let t = (self.limbs[i] as u128) * (rhs.limbs[j] as u128)
                    + out[i + j] as u128
                    + carry;
                out[i + j] = t as u64;
                carry = t >> 64;
            }
            out[i + b_len] = carry as u64;
        }

        assert!(
            out[LIMBS..].iter().all(|&l| l == 0),
            "BigInt product exceeds capacity"
        );

        let mut limbs = [0u64; LIMBS];
        limbs.copy_from_slice(&out[..LIMBS]);
        BigInt { limbs }
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(self, shift: usize) -> BigInt {
        if self.is_zero() || shift == 0 {
            return self;
        }

        assert!(
            self.bits() + shift <= BITS,
            "BigInt left shift exceeds capacity"
        );

        let words = shift / 64;
        let bits = shift % 64;
        let mut out = [0u64; LIMBS];

        for i in (words..LIMBS).rev() {
            let src = i - words;
            out[i] = self.limbs[src] << bits;
            if bits != 0 && src > 0 {
                out[i] |= self.limbs[src - 1] >> (64 - bits);
            }
        }

        BigInt { limbs: out }
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(self, shift: usize) -> BigInt {
        if shift >= BITS {
            return BigInt::ZERO;
        }

        let words = shift / 64;
        let bits = shift % 64;
        let mut out = [0u64; LIMBS];

        for i in 0..LIMBS - words {
            let src = i + words;
            out[i] = self.limbs[src] >> bits;
            if bits != 0 && src + 1 < LIMBS {
                out[i] |= self.limbs[src + 1] << (64 - bits);
            }
        }

        BigInt { limbs: out }
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    /// Full division-based reduction, valid for any non-zero modulus.
    ///
    /// # Panics
    /// Panics if `modulus` is zero.
    fn rem(self, modulus: BigInt) -> BigInt {
        assert!(!modulus.is_zero(), "BigInt remainder by zero");

        if self < modulus {
            return self;
        }

        let u = to_digits(&self);
        let v = to_digits(&modulus);
        let m = digit_len(&u);
        let n = digit_len(&v);

        if n == 1 {
            let d = v[0] as u64;
            let mut r = 0u64;
            for digit in u[..m].iter().rev() {
                r = ((r << 32) | *digit as u64) % d;
            }
            return BigInt::from_u64(r);
        }

        // Normalize so the top digit of the divisor has its high bit set.
        let s = v[n - 1].leading_zeros() as u64;

        let mut vn = [0u32; DIGITS];
        for i in (1..n).rev() {
            vn[i] = (((v[i] as u64) << s) | ((v[i - 1] as u64) >> (32 - s))) as u32;
        }
        vn[0] = v[0] << s;

        let mut un = [0u32; DIGITS + 1];
        un[m] = ((u[m - 1] as u64) >> (32 - s)) as u32;
        for i in (1..m).rev() {
            un[i] = (((u[i] as u64) << s) | ((u[i - 1] as u64) >> (32 - s))) as u32;
        }
        un[0] = u[0] << s;

        let top = vn[n - 1] as u64;
        let next = vn[n - 2] as u64;

        for j in (0..=m - n).rev() {
            let num = ((un[j + n] as u64) << 32) | un[j + n - 1] as u64;
            let mut qhat = num / top;
            let mut rhat = num % top;

            while qhat >= DIGIT_BASE || qhat * next > ((rhat << 32) | un[j + n - 2] as u64) {
                qhat -= 1;
                rhat += top;
                if rhat >= DIGIT_BASE {
                    break;
                }
            }

            // Multiply and subtract.
            let mut borrow: i64 = 0;
            for i in 0..n {
                let p = qhat * vn[i] as u64;
                let t = un[i + j] as i64 - borrow - (p & 0xFFFF_FFFF) as i64;
                un[i + j] = t as u32;
                borrow = (p >> 32) as i64 - (t >> 32);
            }
            let t = un[j + n] as i64 - borrow;
            un[j + n] = t as u32;

            // Estimate was one too large: add the divisor back.
            if t < 0 {
                let mut carry = 0u64;
                for i in 0..n {
                    let sum = un[i + j] as u64 + vn[i] as u64 + carry;
                    un[i + j] = sum as u32;
                    carry = sum >> 32;
                }
                un[j + n] = un[j + n].wrapping_add(carry as u32);
            }
        }

        let mut r = [0u32; DIGITS];
        for i in 0..n {
            r[i] = (((un[i] as u64) >> s) | ((un[i + 1] as u64) << (32 - s))) as u32;
        }

        from_digits(&r)
    }
}

fn to_digits(value: &BigInt) -> [u32; DIGITS] {
    let mut out = [0u32; DIGITS];
    for (i, limb) in value.limbs.iter().enumerate() {
        out[2 * i] = *limb as u32;
        out[2 * i + 1] = (*limb >> 32) as u32;
    }
    out
}

fn from_digits(digits: &[u32; DIGITS]) -> BigInt {
    let mut limbs = [0u64; LIMBS];
    for (i, limb) in limbs.iter_mut().enumerate() {
        *limb = digits[2 * i] as u64 | ((digits[2 * i + 1] as u64) << 32);
    }
    BigInt { limbs }
}

fn digit_len(digits: &[u32]) -> usize {
    digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1)
}
