use crate::curve::Curve;
use crate::error::{EcError, Result};
use crate::point::AffinePoint;
use crate::primitives::BigInt;

/// Marker byte of the uncompressed point encoding.
pub const UNCOMPRESSED: u8 = 0x04;

impl Curve {
    /// Length of an uncompressed point: `1 + 2 * byte_len`.
    pub fn encoded_point_len(&self) -> usize {
        1 + 2 * self.byte_len()
    }

    /// Writes `0x04 || X || Y` (big-endian, zero-padded) into `out`.
    ///
    /// Returns the number of bytes written.
    pub fn encode_point(&self, point: &AffinePoint, out: &mut [u8]) -> Result<usize> {
        self.require_weierstrass("point encoding on a Montgomery curve")?;

        let len = self.byte_len();
        let total = self.encoded_point_len();
        if out.len() < total {
            return Err(EcError::Size {
                needed: total,
                available: out.len(),
            });
        }

        out[0] = UNCOMPRESSED;
        point.x.to_be_bytes_fixed(&mut out[1..1 + len])?;
        point.y.to_be_bytes_fixed(&mut out[1 + len..total])?;

        Ok(total)
    }

    /// Parses an uncompressed point.
    ///
    /// Only the framing is checked here; range and on-curve checks belong
    /// to `validate_public_key`, which should run before the point is used
    /// as a public key. Arithmetic entry points reject out-of-range
    /// coordinates with `InvalidKey` but do not check curve membership.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<AffinePoint> {
        self.require_weierstrass("point decoding on a Montgomery curve")?;

        let len = self.byte_len();
        match bytes.split_first() {
            Some((&UNCOMPRESSED, rest)) if rest.len() == 2 * len => {
                let (x, y) = rest.split_at(len);
                Ok(AffinePoint::new(
                    BigInt::from_be_bytes(x),
                    BigInt::from_be_bytes(y),
                ))
            }
            _ => Err(EcError::Format),
        }
    }

    /// Writes a Montgomery u-coordinate as `byte_len` little-endian bytes.
    ///
    /// Returns `UnsupportedOperation` on a Weierstrass curve.
    pub fn encode_coordinate(&self, u: &BigInt, out: &mut [u8]) -> Result<usize> {
        self.require_montgomery("coordinate encoding on a Weierstrass curve")?;

        let len = self.byte_len();
        if out.len() < len {
            return Err(EcError::Size {
                needed: len,
                available: out.len(),
            });
        }

        u.to_le_bytes_fixed(&mut out[..len])?;
        Ok(len)
    }

    /// Reads a Montgomery u-coordinate of exactly `byte_len` bytes.
    pub fn decode_coordinate(&self, bytes: &[u8]) -> Result<BigInt> {
        self.require_montgomery("coordinate decoding on a Weierstrass curve")?;

        if bytes.len() != self.byte_len() {
            return Err(EcError::Format);
        }

        Ok(BigInt::from_le_bytes(bytes))
    }
}
