use crate::curve::{Curve, CurveKind};
use crate::error::{EcError, Result};
use crate::point::AffinePoint;
use crate::primitives::BigInt;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Extra random bits drawn beyond the group order width (FIPS 186-4 B.4.1).
const EXTRA_BITS: usize = 64;

/// Largest random draw, in bytes: P-521 with the extra bits.
const MAX_DRAW: usize = (521 + EXTRA_BITS).div_ceil(8);

/// Public half of a key pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
    /// Weierstrass curves: an affine point.
    Point(AffinePoint),
    /// Montgomery curves: a u-coordinate.
    Coordinate(BigInt),
}

/// A private scalar with its public key.
///
/// The private scalar is wiped when the key pair is dropped.
pub struct KeyPair {
    private: BigInt,
    public: PublicKey,
}

impl KeyPair {
    pub fn private(&self) -> &BigInt {
        &self.private
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// Serialized length on `curve`: the private scalar followed by the
    /// public key.
    pub fn encoded_len(curve: &Curve) -> usize {
        match curve.kind() {
            CurveKind::ShortWeierstrass => curve.byte_len() + curve.encoded_point_len(),
            CurveKind::Montgomery { .. } => 2 * curve.byte_len(),
        }
    }

    /// Writes the key pair into `out` and returns the bytes written.
    ///
    /// Weierstrass: big-endian private scalar, then the uncompressed
    /// public point. Montgomery: little-endian private scalar, then the
    /// little-endian public u-coordinate. Both halves are `byte_len` wide.
    pub fn write_to(&self, curve: &Curve, out: &mut [u8]) -> Result<usize> {
        let total = Self::encoded_len(curve);
        if out.len() < total {
            return Err(EcError::Size {
                needed: total,
                available: out.len(),
            });
        }

        let len = curve.byte_len();
        let (private, public) = out[..total].split_at_mut(len);

        match &self.public {
            PublicKey::Point(point) => {
                self.private.to_be_bytes_fixed(private)?;
                curve.encode_point(point, public)?;
            }
            PublicKey::Coordinate(u) => {
                self.private.to_le_bytes_fixed(private)?;
                curve.encode_coordinate(u, public)?;
            }
        }

        Ok(total)
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.private.zeroize();
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl Curve {
    /// Generates a fresh key pair from `rng`.
    ///
    /// Weierstrass curves draw `bits + 64` random bits `c` and use
    /// `(c mod (n - 1)) + 1` as the private scalar, which is statistically
    /// close to uniform on `[1, n - 1]` without rejection sampling.
    /// Montgomery curves use `byte_len` random bytes directly; clamping
    /// happens inside the ladder.
    ///
    /// Fails only if the random source fails.
    pub fn generate_key_pair<R>(&self, rng: &mut R) -> Result<KeyPair>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut buf = [0u8; MAX_DRAW];

        let private = match self.kind {
            CurveKind::ShortWeierstrass => {
                let draw = &mut buf[..(self.bits + EXTRA_BITS).div_ceil(8)];
                rng.try_fill_bytes(draw)?;

                let mut c = BigInt::from_be_bytes(draw);
                let private = (c % (self.order - BigInt::ONE)) + BigInt::ONE;
                c.zeroize();
                private
            }
            CurveKind::Montgomery { .. } => {
                let draw = &mut buf[..self.byte_len()];
                rng.try_fill_bytes(draw)?;
                BigInt::from_le_bytes(draw)
            }
        };
        buf.zeroize();

        log::trace!("generated {} key pair", self.name);

        let public = self.public_key(&private)?;
        Ok(KeyPair { private, public })
    }

    /// Derives the public key of `private`.
    pub fn public_key(&self, private: &BigInt) -> Result<PublicKey> {
        match self.kind {
            CurveKind::ShortWeierstrass => Ok(PublicKey::Point(self.multiply_base(private)?)),
            CurveKind::Montgomery { .. } => {
                Ok(PublicKey::Coordinate(self.ladder(&self.generator.x, private)?))
            }
        }
    }

    /// Diffie-Hellman: writes the shared x- (or u-) coordinate of
    /// `private * peer` into `out` and returns its length.
    ///
    /// Weierstrass peers are validated first and the result is encoded
    /// big-endian; a result at infinity is rejected. Montgomery results are
    /// encoded little-endian and returned as-is, zero included.
    pub fn shared_secret(&self, private: &BigInt, peer: &PublicKey, out: &mut [u8]) -> Result<usize> {
        let len = self.byte_len();
        if out.len() < len {
            return Err(EcError::Size {
                needed: len,
                available: out.len(),
            });
        }

        match (self.kind, peer) {
            (CurveKind::ShortWeierstrass, PublicKey::Point(point)) => {
                self.validate_public_key(point)?;

                let shared = self.naf_multiply(point, private);
                if shared.is_identity() {
                    return Err(EcError::InvalidKey("shared point at infinity"));
                }

                shared.x.to_be_bytes_fixed(&mut out[..len])?;
            }
            (CurveKind::Montgomery { .. }, PublicKey::Coordinate(u)) => {
                let shared = self.ladder(u, private)?;
                shared.to_le_bytes_fixed(&mut out[..len])?;
            }
            _ => return Err(EcError::InvalidKey("public key kind does not match the curve")),
        }

        Ok(len)
    }
}
