use crate::curve::{A24_X448, A24_X25519, Curve, CurveKind, X448, X25519};
use crate::error::{EcError, Result};
use crate::field::PrimeField;
use crate::primitives::BigInt;
use subtle::{Choice, ConditionallySelectable};

impl Curve {
    /// Montgomery ladder: returns the u-coordinate of `scalar * u`.
    ///
    /// The scalar is clamped on a private copy before use, so callers may
    /// pass raw private key material. The u-coordinate may be
    /// non-canonical; it is masked to the curve width and reduced mod `p`.
    ///
    /// Returns `UnsupportedOperation` on a Weierstrass curve.
    pub fn ladder(&self, u: &BigInt, scalar: &BigInt) -> Result<BigInt> {
        match self.kind {
            CurveKind::Montgomery { a24 } => Ok(ladder(
                &self.field,
                self.bits,
                self.cofactor,
                a24,
                u,
                scalar,
            )),
            CurveKind::ShortWeierstrass => Err(EcError::UnsupportedOperation(
                "Montgomery ladder on a Weierstrass curve",
            )),
        }
    }
}

/// Applies RFC 7748 clamping to a copy of `scalar`.
///
/// Bits at and above `bits` are cleared, bit `bits - 1` is set, and the
/// low `log2(cofactor)` bits are cleared. For X25519 this clears bits 0-2
/// and 255 and sets bit 254; for X448 it clears bits 0-1 and sets bit 447.
pub fn clamp(scalar: &BigInt, bits: usize, cofactor: u32) -> BigInt {
    let mut k = scalar.low_bits(bits);

    k.set_bit(bits - 1, true);
    for i in 0..cofactor.trailing_zeros() as usize {
        k.set_bit(i, false);
    }

    k
}

fn ladder(
    field: &PrimeField,
    bits: usize,
    cofactor: u32,
    a24: u64,
    u: &BigInt,
    scalar: &BigInt,
) -> BigInt {
    let f = field;
    let k = clamp(scalar, bits, cofactor);

    let mut x1 = u.low_bits(bits);
    f.reduce(&mut x1);

    let mut x2 = BigInt::ONE;
    let mut z2 = BigInt::ZERO;
    let mut x3 = x1;
    let mut z3 = BigInt::ONE;

    let mut swap = Choice::from(0);

    for t in (0..bits).rev() {
        let bit = Choice::from(k.bit(t) as u8);
        swap ^= bit;
        BigInt::conditional_swap(&mut x2, &mut x3, swap);
        BigInt::conditional_swap(&mut z2, &mut z3, swap);
        swap = bit;

        let a = f.add(&x2, &z2);
        let aa = f.square(&a);
        let b = f.sub(&x2, &z2);
        let bb = f.square(&b);
        let e = f.sub(&aa, &bb);
        let c = f.add(&x3, &z3);
        let d = f.sub(&x3, &z3);
        let da = f.mul(&d, &a);
        let cb = f.mul(&c, &b);

        x3 = f.square(&f.add(&da, &cb));
        z3 = f.mul(&x1, &f.square(&f.sub(&da, &cb)));
        x2 = f.mul(&aa, &bb);
        z2 = f.mul(&e, &f.add(&aa, &f.mul_u64(&e, a24)));
    }

    BigInt::conditional_swap(&mut x2, &mut x3, swap);
    BigInt::conditional_swap(&mut z2, &mut z3, swap);

    f.mul(&x2, &f.invert(&z2))
}

/// X25519 function of RFC 7748.
///
/// `scalar` and `u` are 32-byte little-endian strings. The result may be
/// all zeros for low-order inputs; it is returned as-is.
pub fn x25519(scalar: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
    let (field, bits, cofactor) = (&X25519.field, X25519.bits, X25519.cofactor);
    let k = BigInt::from_le_bytes(scalar);
    let u = BigInt::from_le_bytes(u);

    ladder(field, bits, cofactor, A24_X25519, &u, &k).to_le_array()
}

/// X448 function of RFC 7748, over 56-byte little-endian strings.
pub fn x448(scalar: &[u8; 56], u: &[u8; 56]) -> [u8; 56] {
    let (field, bits, cofactor) = (&X448.field, X448.bits, X448.cofactor);
    let k = BigInt::from_le_bytes(scalar);
    let u = BigInt::from_le_bytes(u);

    ladder(field, bits, cofactor, A24_X448, &u, &k).to_le_array()
}
