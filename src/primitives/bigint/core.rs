//! Fixed-capacity unsigned big integer
//!
//! This module defines `BigInt`, the single integer type used for field
//! elements, scalars and intermediate products across the crate.
//!
//! It is a **value type** backed by a fixed array of 64-bit limbs stored
//! in little-endian limb order. The capacity is chosen once, at compile
//! time, for the largest curve in the registry: the product of two
//! 521-bit field elements (1042 bits) and the `bits + 64` random draw used
//! by key generation both fit with room to spare.
//!
//! Exceeding the capacity is never silently truncated. Such a condition
//! can only be reached through a programming error and panics.

use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter, Result};

/// Number of 64-bit limbs in a `BigInt`.
pub const LIMBS: usize = 18;

/// Total bit capacity of a `BigInt`.
pub const BITS: usize = LIMBS * 64;

/// Fixed-capacity unsigned integer.
///
/// Limbs are stored least-significant first. Every limb above the logical
/// length of the value is zero.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) limbs: [u64; LIMBS],
}

impl BigInt {
    /// The value zero.
    pub const ZERO: Self = Self { limbs: [0u64; LIMBS] };

    /// The value one.
    pub const ONE: Self = Self::from_u64(1);

    /// Builds a value from a single machine word.
    pub const fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = value;
        Self { limbs }
    }

    /// Builds a value from raw little-endian limbs.
    ///
    /// # Panics
    /// Panics if more than `LIMBS` limbs are supplied.
    pub fn from_limbs(words: &[u64]) -> Self {
        assert!(words.len() <= LIMBS, "BigInt capacity exceeded");

        let mut limbs = [0u64; LIMBS];
        limbs[..words.len()].copy_from_slice(words);
        Self { limbs }
    }

    /// Parses a big-endian hexadecimal literal at compile time.
    ///
    /// Intended for curve constants. Leading zeros may be omitted.
    ///
    /// # Panics
    /// Panics (at compile time when used in a constant) on a non-hex
    /// character or a literal wider than the capacity.
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        assert!(bytes.len() <= BITS / 4, "hex literal exceeds BigInt capacity");

        let mut limbs = [0u64; LIMBS];
        let mut i = 0;

        while i < bytes.len() {
            let c = bytes[bytes.len() - 1 - i];
            let nibble = match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                b'A'..=b'F' => c - b'A' + 10,
                _ => panic!("invalid hex digit in BigInt literal"),
            };

            limbs[i / 16] |= (nibble as u64) << ((i % 16) * 4);
            i += 1;
        }

        Self { limbs }
    }

    /// Returns the little-endian limbs.
    pub fn limbs(&self) -> &[u64; LIMBS] {
        &self.limbs
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    /// Returns `true` if the lowest bit is set.
    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// Number of limbs up to and including the highest non-zero one.
    pub fn limb_len(&self) -> usize {
        self.limbs
            .iter()
            .rposition(|&l| l != 0)
            .map_or(0, |i| i + 1)
    }

    /// Bit length of the value (zero has length zero).
    pub fn bits(&self) -> usize {
        match self.limb_len() {
            0 => 0,
            n => n * 64 - self.limbs[n - 1].leading_zeros() as usize,
        }
    }

    /// Returns bit `index` as `0` or `1`.
    ///
    /// Indices beyond the capacity read as zero.
    pub fn bit(&self, index: usize) -> u64 {
        if index >= BITS {
            return 0;
        }

        (self.limbs[index / 64] >> (index % 64)) & 1
    }

    /// Sets bit `index` to `value`.
    ///
    /// # Panics
    /// Panics if `index` is outside the capacity.
    pub fn set_bit(&mut self, index: usize, value: bool) {
        assert!(index < BITS, "bit index outside BigInt capacity");

        let mask = 1u64 << (index % 64);
        if value {
            self.limbs[index / 64] |= mask;
        } else {
            self.limbs[index / 64] &= !mask;
        }
    }

    /// Keeps only the lowest `count` bits.
    pub fn low_bits(&self, count: usize) -> Self {
        let mut out = *self;

        if count >= BITS {
            return out;
        }

        let full = count / 64;
        let rem = count % 64;

        if rem != 0 {
            out.limbs[full] &= (1u64 << rem) - 1;
            out.limbs[full + 1..].iter_mut().for_each(|l| *l = 0);
        } else {
            out.limbs[full..].iter_mut().for_each(|l| *l = 0);
        }

        out
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        for (l, r) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            match l.cmp(r) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for BigInt {
    /// Formats the value as a `0x`-prefixed lowercase hexadecimal string
    /// without leading zeros.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let len = self.limb_len();
        if len == 0 {
            return f.write_str("0x0");
        }

        write!(f, "0x{:x}", self.limbs[len - 1])?;
        for limb in self.limbs[..len - 1].iter().rev() {
            write!(f, "{:016x}", limb)?;
        }

        Ok(())
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "BigInt({})", self)
    }
}
