//! Byte conversions for `BigInt`
//!
//! Weierstrass curve values travel as big-endian byte strings, Montgomery
//! curve values as little-endian ones. Both directions are provided, and
//! the fixed-width extractors zero-pad to the requested length.

use crate::error::{EcError, Result};
use crate::primitives::bigint::{BigInt, LIMBS};

impl BigInt {
    /// Builds a value from big-endian bytes.
    ///
    /// Leading zero bytes are ignored.
    ///
    /// # Panics
    /// Panics if the significant bytes exceed the capacity.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs = [0u64; LIMBS];

        for (i, byte) in bytes.iter().rev().enumerate() {
            if *byte == 0 {
                continue;
            }
            assert!(i < LIMBS * 8, "byte string exceeds BigInt capacity");
            limbs[i / 8] |= (*byte as u64) << ((i % 8) * 8);
        }

        Self { limbs }
    }

    /// Builds a value from little-endian bytes.
    ///
    /// # Panics
    /// Panics if the significant bytes exceed the capacity.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        let mut limbs = [0u64; LIMBS];

        for (i, byte) in bytes.iter().enumerate() {
            if *byte == 0 {
                continue;
            }
            assert!(i < LIMBS * 8, "byte string exceeds BigInt capacity");
            limbs[i / 8] |= (*byte as u64) << ((i % 8) * 8);
        }

        Self { limbs }
    }

    /// Writes the value as big-endian bytes filling all of `out`,
    /// zero-padded on the left.
    ///
    /// Returns a size error if the value does not fit.
    pub fn to_be_bytes_fixed(&self, out: &mut [u8]) -> Result<()> {
        let needed = self.bits().div_ceil(8);
        if needed > out.len() {
            return Err(EcError::Size {
                needed,
                available: out.len(),
            });
        }

        let len = out.len();
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.byte_at(len - 1 - i);
        }

        Ok(())
    }

    /// Writes the value as little-endian bytes filling all of `out`,
    /// zero-padded on the right.
    ///
    /// Returns a size error if the value does not fit.
    pub fn to_le_bytes_fixed(&self, out: &mut [u8]) -> Result<()> {
        let needed = self.bits().div_ceil(8);
        if needed > out.len() {
            return Err(EcError::Size {
                needed,
                available: out.len(),
            });
        }

        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.byte_at(i);
        }

        Ok(())
    }

    /// Lowest `N` bytes of the value, little-endian.
    ///
    /// Callers guarantee the value fits; higher bytes are dropped.
    pub(crate) fn to_le_array<const N: usize>(&self) -> [u8; N] {
        debug_assert!(self.bits() <= N * 8);

        let mut out = [0u8; N];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.byte_at(i);
        }
        out
    }

    /// Byte `index` of the value, counting from the least significant.
    fn byte_at(&self, index: usize) -> u8 {
        if index >= LIMBS * 8 {
            return 0;
        }

        (self.limbs[index / 8] >> ((index % 8) * 8)) as u8
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}
