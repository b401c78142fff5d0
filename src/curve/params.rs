//! Named curve parameters
//!
//! NIST curves are taken from FIPS 186-4, appendix D.1.2; the Montgomery
//! curves from RFC 7748. Values are big-endian hexadecimal.

use crate::curve::{Curve, CurveKind};
use crate::field::{FieldReducer, PrimeField};
use crate::point::AffinePoint;
use crate::primitives::BigInt;
use once_cell::sync::OnceCell;

// TLS named-group identifiers.
pub const ID_SECP192R1: u16 = 0x0013;
pub const ID_SECP224R1: u16 = 0x0015;
pub const ID_SECP256R1: u16 = 0x0017;
pub const ID_SECP384R1: u16 = 0x0018;
pub const ID_SECP521R1: u16 = 0x0019;
pub const ID_X25519: u16 = 0x001d;
pub const ID_X448: u16 = 0x001e;

/// Ladder constant `(A - 2) / 4` of Curve25519.
pub const A24_X25519: u64 = 121665;

/// Ladder constant `(A - 2) / 4` of Curve448.
pub const A24_X448: u64 = 39081;

const fn hex(value: &str) -> BigInt {
    BigInt::from_be_hex(value)
}

/// NIST P-192.
pub static SECP192R1: Curve = Curve {
    name: "secp192r1",
    id: ID_SECP192R1,
    bits: 192,
    field: PrimeField::new(
        hex("fffffffffffffffffffffffffffffffeffffffffffffffff"),
        FieldReducer::P192,
    ),
    a: hex("fffffffffffffffffffffffffffffffefffffffffffffffc"),
    b: hex("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
    generator: AffinePoint::new(
        hex("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
        hex("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
    ),
    order: hex("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
    cofactor: 1,
    window_width: 4,
    kind: CurveKind::ShortWeierstrass,
    fixed_points: OnceCell::new(),
};

/// NIST P-224.
pub static SECP224R1: Curve = Curve {
    name: "secp224r1",
    id: ID_SECP224R1,
    bits: 224,
    field: PrimeField::new(
        hex("ffffffffffffffffffffffffffffffff000000000000000000000001"),
        FieldReducer::P224,
    ),
    a: hex("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
    b: hex("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
    generator: AffinePoint::new(
        hex("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
        hex("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
    ),
    order: hex("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
    cofactor: 1,
    window_width: 4,
    kind: CurveKind::ShortWeierstrass,
    fixed_points: OnceCell::new(),
};

/// NIST P-256.
pub static SECP256R1: Curve = Curve {
    name: "secp256r1",
    id: ID_SECP256R1,
    bits: 256,
    field: PrimeField::new(
        hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
        FieldReducer::P256,
    ),
    a: hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
    b: hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
    generator: AffinePoint::new(
        hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    ),
    order: hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
    cofactor: 1,
    window_width: 4,
    kind: CurveKind::ShortWeierstrass,
    fixed_points: OnceCell::new(),
};

/// NIST P-384.
pub static SECP384R1: Curve = Curve {
    name: "secp384r1",
    id: ID_SECP384R1,
    bits: 384,
    field: PrimeField::new(
        hex(concat!(
            "ffffffffffffffffffffffffffffffffffffffffffffffff",
            "fffffffffffffffeffffffff0000000000000000ffffffff"
        )),
        FieldReducer::P384,
    ),
    a: hex(concat!(
        "ffffffffffffffffffffffffffffffffffffffffffffffff",
        "fffffffffffffffeffffffff0000000000000000fffffffc"
    )),
    b: hex(concat!(
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe814112",
        "0314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef"
    )),
    generator: AffinePoint::new(
        hex(concat!(
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b98",
            "59f741e082542a385502f25dbf55296c3a545e3872760ab7"
        )),
        hex(concat!(
            "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147c",
            "e9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f"
        )),
    ),
    order: hex(concat!(
        "ffffffffffffffffffffffffffffffffffffffffffffffff",
        "c7634d81f4372ddf581a0db248b0a77aecec196accc52973"
    )),
    cofactor: 1,
    window_width: 5,
    kind: CurveKind::ShortWeierstrass,
    fixed_points: OnceCell::new(),
};

/// NIST P-521.
pub static SECP521R1: Curve = Curve {
    name: "secp521r1",
    id: ID_SECP521R1,
    bits: 521,
    field: PrimeField::new(
        hex(concat!(
            "1ff",
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        )),
        FieldReducer::P521,
    ),
    a: hex(concat!(
        "1ff",
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc"
    )),
    b: hex(concat!(
        "051",
        "953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e1",
        "56193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00"
    )),
    generator: AffinePoint::new(
        hex(concat!(
            "0c6",
            "858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dba",
            "a14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66"
        )),
        hex(concat!(
            "118",
            "39296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c",
            "97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650"
        )),
    ),
    order: hex(concat!(
        "1ff",
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa",
        "51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409"
    )),
    cofactor: 1,
    window_width: 5,
    kind: CurveKind::ShortWeierstrass,
    fixed_points: OnceCell::new(),
};

/// Curve25519 in Montgomery form, used by X25519.
pub static X25519: Curve = Curve {
    name: "x25519",
    id: ID_X25519,
    bits: 255,
    field: PrimeField::new(
        hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed"),
        FieldReducer::Generic,
    ),
    a: BigInt::from_u64(486662),
    b: BigInt::ONE,
    generator: AffinePoint::new(BigInt::from_u64(9), BigInt::ZERO),
    order: hex("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed"),
    cofactor: 8,
    window_width: 0,
    kind: CurveKind::Montgomery { a24: A24_X25519 },
    fixed_points: OnceCell::new(),
};

/// Curve448 in Montgomery form, used by X448.
pub static X448: Curve = Curve {
    name: "x448",
    id: ID_X448,
    bits: 448,
    field: PrimeField::new(
        hex(concat!(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffe",
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        )),
        FieldReducer::Generic,
    ),
    a: BigInt::from_u64(156326),
    b: BigInt::ONE,
    generator: AffinePoint::new(BigInt::from_u64(5), BigInt::ZERO),
    order: hex(concat!(
        "3fffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3"
    )),
    cofactor: 4,
    window_width: 0,
    kind: CurveKind::Montgomery { a24: A24_X448 },
    fixed_points: OnceCell::new(),
};
