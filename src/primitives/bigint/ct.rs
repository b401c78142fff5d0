//! Constant-time selection and wiping for `BigInt`
//!
//! The Montgomery ladder swaps its two working points depending on secret
//! scalar bits. The swap below is branch-free: a mask derived from the
//! choice bit is XORed over every limb, so the instruction stream and
//! memory access pattern are the same whether or not the swap happens.

use crate::primitives::bigint::{BigInt, LIMBS};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

impl ConditionallySelectable for BigInt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mask = 0u64.wrapping_sub(choice.unwrap_u8() as u64);
        let mut limbs = [0u64; LIMBS];

        for (o, (x, y)) in limbs.iter_mut().zip(a.limbs.iter().zip(b.limbs.iter())) {
            *o = x ^ (mask & (x ^ y));
        }

        Self { limbs }
    }

    /// Exchanges `a` and `b` when `choice` is set, in constant time.
    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        let mask = 0u64.wrapping_sub(choice.unwrap_u8() as u64);

        for (x, y) in a.limbs.iter_mut().zip(b.limbs.iter_mut()) {
            let t = mask & (*x ^ *y);
            *x ^= t;
            *y ^= t;
        }
    }
}

impl ConstantTimeEq for BigInt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.limbs[..].ct_eq(&other.limbs[..])
    }
}

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}
