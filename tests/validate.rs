use cryptal_ec::curve::{SECP256R1, X448, X25519};
use cryptal_ec::{AffinePoint, BigInt, EcError, curves};

fn invalid_key(result: cryptal_ec::Result<()>) -> &'static str {
    match result {
        Err(EcError::InvalidKey(reason)) => reason,
        other => panic!("expected invalid key, got {:?}", other),
    }
}

#[test]
fn generators_are_valid() {
    for curve in curves().iter().filter(|c| !c.is_montgomery()) {
        curve.validate_public_key(curve.generator()).unwrap();
    }
}

#[test]
fn known_public_key_is_valid() {
    let q = AffinePoint::new(
        BigInt::from_be_hex("60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6"),
        BigInt::from_be_hex("7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299"),
    );
    SECP256R1.validate_public_key(&q).unwrap();
}

#[test]
fn identity_is_rejected() {
    for curve in curves().iter().filter(|c| !c.is_montgomery()) {
        let reason = invalid_key(curve.validate_public_key(&AffinePoint::IDENTITY));
        assert_eq!(reason, "point at infinity");
    }
}

#[test]
fn coordinates_must_be_canonical() {
    for curve in curves().iter().filter(|c| !c.is_montgomery()) {
        let g = *curve.generator();
        let p = *curve.p();

        // x + p is congruent to x but out of range.
        let shifted_x = AffinePoint::new(g.x + p, g.y);
        let shifted_y = AffinePoint::new(g.x, g.y + p);
        let x_is_p = AffinePoint::new(p, g.y);
        let y_is_p = AffinePoint::new(g.x, p);

        for q in [shifted_x, shifted_y, x_is_p, y_is_p] {
            let reason = invalid_key(curve.validate_public_key(&q));
            assert_eq!(reason, "coordinate out of range", "{}", curve.name());
        }
    }
}

#[test]
fn off_curve_points_are_rejected() {
    for curve in curves().iter().filter(|c| !c.is_montgomery()) {
        let g = *curve.generator();

        for bit in [0, 1, 7, 63, 64, 130, curve.bits() - 2] {
            let mut flipped = g;
            flipped.y.set_bit(bit, g.y.bit(bit) == 0);
            if !curve.field().contains(&flipped.y) {
                continue;
            }

            let reason = invalid_key(curve.validate_public_key(&flipped));
            assert_eq!(reason, "point not on curve", "{} bit {}", curve.name(), bit);
        }

        let zero_y = AffinePoint::new(g.x, BigInt::ZERO);
        let reason = invalid_key(curve.validate_public_key(&zero_y));
        assert_eq!(reason, "point not on curve", "{}", curve.name());
    }
}

#[test]
fn negated_point_is_valid() {
    for curve in curves().iter().filter(|c| !c.is_montgomery()) {
        let minus_g = curve.negate(curve.generator()).unwrap();
        curve.validate_public_key(&minus_g).unwrap();
    }
}

#[test]
fn montgomery_validation_is_unsupported() {
    for curve in [&X25519, &X448] {
        let result = curve.validate_public_key(curve.generator());
        assert!(matches!(result, Err(EcError::UnsupportedOperation(_))));
    }
}
