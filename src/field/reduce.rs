//! Modular reduction
//!
//! Reduces a double-width product (as produced by a multiply or square of
//! two field elements) into `[0, p)`.
//!
//! Two families are provided:
//!
//! - a generic path, delegating to the division-based remainder of
//!   `BigInt`, correct for any modulus;
//! - curve-specific fast paths for the NIST primes, which exploit the
//!   sparse shape of each prime to replace division by a handful of
//!   word-aligned additions and subtractions.
//!
//! ## Fast NIST reductions
//!
//! The input is split into 32-bit words `c0 .. c(2k-1)` (least
//! significant first). For each prime a fixed list of `k`-word partial
//! sums is assembled from those words, following FIPS 186-4, appendix D.2.
//! Layouts below are written **most significant word first**, matching
//! the notation of the standard; `Z` marks a zero word. P-192 is
//! published over 64-bit words; it is expressed here with the same
//! 32-bit word width as the other primes, each 64-bit word `A_i` becoming
//! the pair `(c(2i+1), c(2i))`.
//!
//! The signed sum of the partial sums is congruent to the input and
//! bounded by a small multiple of `p`. A correction loop then subtracts
//! `p` from the magnitude until it is below `p`, and a negative total is
//! mapped back with a single `p - |r|`. The number of subtractions never
//! exceeds the per-prime bound returned by `FieldReducer::max_corrections`;
//! a larger count means the input violated the width contract and panics.
//!
//! P-521 (`2^521 - 1`) is a Mersenne prime: the input is split at bit 521
//! and the halves are added.

use crate::primitives::BigInt;

/// Zero word marker in partial-sum layouts.
const Z: usize = usize::MAX;

/// Strategy used to reduce products modulo a field prime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldReducer {
    /// Division-based remainder, for any modulus.
    Generic,
    /// p = 2^192 - 2^64 - 1
    P192,
    /// p = 2^224 - 2^96 + 1
    P224,
    /// p = 2^256 - 2^224 + 2^192 + 2^96 - 1
    P256,
    /// p = 2^384 - 2^128 - 2^96 + 2^32 - 1
    P384,
    /// p = 2^521 - 1
    P521,
}

// P-192, 6 words per partial sum.
const P192_S1: [usize; 6] = [5, 4, 3, 2, 1, 0];
const P192_S2: [usize; 6] = [Z, Z, 7, 6, 7, 6];
const P192_S3: [usize; 6] = [9, 8, 9, 8, Z, Z];
const P192_S4: [usize; 6] = [11, 10, 11, 10, 11, 10];

// P-224, 7 words per partial sum.
const P224_T: [usize; 7] = [6, 5, 4, 3, 2, 1, 0];
const P224_S1: [usize; 7] = [10, 9, 8, 7, Z, Z, Z];
const P224_S2: [usize; 7] = [Z, 13, 12, 11, Z, Z, Z];
const P224_D1: [usize; 7] = [13, 12, 11, 10, 9, 8, 7];
const P224_D2: [usize; 7] = [Z, Z, Z, Z, 13, 12, 11];

// P-256, 8 words per partial sum.
const P256_T: [usize; 8] = [7, 6, 5, 4, 3, 2, 1, 0];
const P256_S1: [usize; 8] = [15, 14, 13, 12, 11, Z, Z, Z];
const P256_S2: [usize; 8] = [Z, 15, 14, 13, 12, Z, Z, Z];
const P256_S3: [usize; 8] = [15, 14, Z, Z, Z, 10, 9, 8];
const P256_S4: [usize; 8] = [8, 13, 15, 14, 13, 11, 10, 9];
const P256_D1: [usize; 8] = [10, 8, Z, Z, Z, 13, 12, 11];
const P256_D2: [usize; 8] = [11, 9, Z, Z, 15, 14, 13, 12];
const P256_D3: [usize; 8] = [12, Z, 10, 9, 8, 15, 14, 13];
const P256_D4: [usize; 8] = [13, Z, 11, 10, 9, Z, 15, 14];

// P-384, 12 words per partial sum.
const P384_T: [usize; 12] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
const P384_S1: [usize; 12] = [Z, Z, Z, Z, Z, 23, 22, 21, Z, Z, Z, Z];
const P384_S2: [usize; 12] = [23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12];
const P384_S3: [usize; 12] = [20, 19, 18, 17, 16, 15, 14, 13, 12, 23, 22, 21];
const P384_S4: [usize; 12] = [19, 18, 17, 16, 15, 14, 13, 12, 20, Z, 23, Z];
const P384_S5: [usize; 12] = [Z, Z, Z, Z, 23, 22, 21, 20, Z, Z, Z, Z];
const P384_S6: [usize; 12] = [Z, Z, Z, Z, Z, Z, 23, 22, 21, Z, Z, 20];
const P384_D1: [usize; 12] = [22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 23];
const P384_D2: [usize; 12] = [Z, Z, Z, Z, Z, Z, Z, 23, 22, 21, 20, Z];
const P384_D3: [usize; 12] = [Z, Z, Z, Z, Z, Z, Z, 23, 23, Z, Z, Z];

impl FieldReducer {
    /// Reduces `value` modulo `p` in place.
    ///
    /// For the fast variants `value` must be below `2^(2*bits)`, where
    /// `bits` is the width of the prime; `p` must be the prime the variant
    /// was written for.
    ///
    /// # Panics
    /// Panics if `value` is wider than the variant supports or if the
    /// correction loop exceeds its bound.
    pub fn reduce(self, value: &mut BigInt, p: &BigInt) {
        if *value < *p {
            return;
        }
        if *value == *p {
            *value = BigInt::ZERO;
            return;
        }

        let (positive, negative) = match self {
            FieldReducer::Generic => {
                *value = *value % *p;
                return;
            }
            FieldReducer::P192 => reduce_p192(value),
            FieldReducer::P224 => reduce_p224(value),
            FieldReducer::P256 => reduce_p256(value),
            FieldReducer::P384 => reduce_p384(value),
            FieldReducer::P521 => reduce_p521(value),
        };

        *value = self.correct(positive, negative, p);
    }

    /// Upper bound on the subtractions of `p` performed by the correction
    /// loop for a valid input.
    ///
    /// Each bound is the number of partial sums entering the positive side
    /// (doubled sums counted twice), since every partial sum is below
    /// `2^bits` and `2^bits < p + 2^(bits-31)` for every NIST prime.
    pub const fn max_corrections(self) -> usize {
        match self {
            FieldReducer::Generic => 0,
            FieldReducer::P192 => 4,
            FieldReducer::P224 => 3,
            FieldReducer::P256 => 7,
            FieldReducer::P384 => 8,
            FieldReducer::P521 => 2,
        }
    }

    /// Folds the signed total `positive - negative` into `[0, p)`.
    fn correct(self, positive: BigInt, negative: BigInt, p: &BigInt) -> BigInt {
        let (mut magnitude, is_negative) = match positive.checked_sub(&negative) {
            Some(diff) => (diff, false),
            None => (negative - positive, true),
        };

        let mut rounds = 0;
        while magnitude >= *p {
            magnitude = magnitude - *p;
            rounds += 1;
            assert!(
                rounds <= self.max_corrections(),
                "{:?} reduction exceeded its correction bound",
                self
            );
        }

        if is_negative && !magnitude.is_zero() {
            *p - magnitude
        } else {
            magnitude
        }
    }
}

/// Splits `value` into `N` little-endian 32-bit words.
///
/// # Panics
/// Panics if `value` has significant bits beyond `32 * N`.
fn split_words<const N: usize>(value: &BigInt) -> [u32; N] {
    assert!(
        value.bits() <= 32 * N,
        "input exceeds the double width of the reducer"
    );

    let limbs = value.limbs();
    let mut words = [0u32; N];

    for (i, word) in words.iter_mut().enumerate() {
        *word = (limbs[i / 2] >> ((i % 2) * 32)) as u32;
    }

    words
}

/// Builds one partial sum from a most-significant-first layout.
fn assemble(c: &[u32], layout: &[usize]) -> BigInt {
    let mut limbs = [0u64; 6];

    for (pos, &index) in layout.iter().rev().enumerate() {
        if index == Z {
            continue;
        }
        limbs[pos / 2] |= (c[index] as u64) << ((pos % 2) * 32);
    }

    BigInt::from_limbs(&limbs)
}

fn sum(c: &[u32], layouts: &[&[usize]]) -> BigInt {
    layouts
        .iter()
        .fold(BigInt::ZERO, |acc, layout| acc + assemble(c, layout))
}

fn reduce_p192(value: &BigInt) -> (BigInt, BigInt) {
    let c = split_words::<12>(value);
    let positive = sum(&c, &[&P192_S1, &P192_S2, &P192_S3, &P192_S4]);
    (positive, BigInt::ZERO)
}

fn reduce_p224(value: &BigInt) -> (BigInt, BigInt) {
    let c = split_words::<14>(value);
    let positive = sum(&c, &[&P224_T, &P224_S1, &P224_S2]);
    let negative = sum(&c, &[&P224_D1, &P224_D2]);
    (positive, negative)
}

fn reduce_p256(value: &BigInt) -> (BigInt, BigInt) {
    let c = split_words::<16>(value);
    let positive = sum(
        &c,
        &[&P256_T, &P256_S1, &P256_S1, &P256_S2, &P256_S2, &P256_S3, &P256_S4],
    );
    let negative = sum(&c, &[&P256_D1, &P256_D2, &P256_D3, &P256_D4]);
    (positive, negative)
}

fn reduce_p384(value: &BigInt) -> (BigInt, BigInt) {
    let c = split_words::<24>(value);
    let positive = sum(
        &c,
        &[
            &P384_T, &P384_S1, &P384_S1, &P384_S2, &P384_S3, &P384_S4, &P384_S5, &P384_S6,
        ],
    );
    let negative = sum(&c, &[&P384_D1, &P384_D2, &P384_D3]);
    (positive, negative)
}

fn reduce_p521(value: &BigInt) -> (BigInt, BigInt) {
    assert!(
        value.bits() <= 1042,
        "input exceeds the double width of the reducer"
    );

    let high = *value >> 521;
    let low = value.low_bits(521);
    (high + low, BigInt::ZERO)
}
