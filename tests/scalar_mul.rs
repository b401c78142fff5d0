use cryptal_ec::curve::{SECP192R1, SECP224R1, SECP256R1, SECP384R1, SECP521R1, X448, X25519};
use cryptal_ec::multiply::{Naf, NafDigit};
use cryptal_ec::{AffinePoint, BigInt, Curve, EcError};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

static NIST: [&Curve; 5] = [&SECP192R1, &SECP224R1, &SECP256R1, &SECP384R1, &SECP521R1];

const K: BigInt = BigInt::from_be_hex("0123456789abcdef0123456789abcdef");

fn point(x: &str, y: &str) -> AffinePoint {
    AffinePoint::new(BigInt::from_be_hex(x), BigInt::from_be_hex(y))
}

fn random_scalar(rng: &mut StdRng, curve: &Curve) -> BigInt {
    let mut bytes = [0u8; 66];
    rng.fill_bytes(&mut bytes[..curve.byte_len()]);
    BigInt::from_be_bytes(&bytes[..curve.byte_len()]) % *curve.order()
}

fn k_times_generator() -> [(&'static Curve, AffinePoint); 5] {
    [
        (
            &SECP192R1,
            point(
                "b57aa32d330f5012976b6c1cd014e58dcaf3e4d7dcd7d908",
                "ef3173ea9018307a90fc10fb76bd9d1ef6873a9cedb98d29",
            ),
        ),
        (
            &SECP224R1,
            point(
                "beaa07bd65d873c9de0fb3766797985908e92c24ae3caffd3fe4db1c",
                "4e75916567397af71d857ca1082cc839d675e6f513d8b46a05a81b5a",
            ),
        ),
        (
            &SECP256R1,
            point(
                "5676aa46bdc9fde6d6c083923d0ae179746eb1a57b5b32f7ff9c407824d4ccfe",
                "dcfeb77f4cba4297f2dc036fc9a6f4fc5aaa0b7bc6a56937e7185f3e46bc3514",
            ),
        ),
        (
            &SECP384R1,
            point(
                concat!(
                    "480fbbc7c2b3fa7e64e639a2e072d44f324f793b6ca1df92",
                    "f50903ca5d50d6b662cf45a2170f2e809645045bae50fb2b"
                ),
                concat!(
                    "7ebe2ae51d38bb1f40d171d72aee7f8fb81af12824436c72",
                    "6f57bd8929416e5f9c97719cc8dd4525e7e39cc0c839626c"
                ),
            ),
        ),
        (
            &SECP521R1,
            point(
                concat!(
                    "01d002f99cf85a56f8e1935a1670179fe561125fd565afeb205d0de99459578a",
                    "fe4be800355ca3ff35a5e83da3d4af8e283ca642a4eb1ac6d54c1406435932d7f990"
                ),
                concat!(
                    "00f8e00a3ff2b468b9e12d91393e00785294df981d7782998249cefa4f56a118",
                    "98eac4d7d5813e9781bc5571cf3fa83c0843459f3add2d0e1b8cae5eb04820cfe9d"
                ),
            ),
        ),
    ]
}

#[test]
fn naf_of_small_values() {
    use NafDigit::{MinusOne, One, Zero};

    assert!(Naf::recode(&BigInt::ZERO).is_empty());
    assert_eq!(Naf::recode(&BigInt::ONE).digits(), &[One]);
    assert_eq!(Naf::recode(&BigInt::from_u64(3)).digits(), &[MinusOne, Zero, One]);
    assert_eq!(Naf::recode(&BigInt::from_u64(7)).digits(), &[MinusOne, Zero, Zero, One]);
    assert_eq!(Naf::recode(&BigInt::from_u64(10)).digits(), &[Zero, One, Zero, One]);
}

#[test]
fn naf_digit_encoding() {
    assert_eq!(NafDigit::Zero as u8, 0);
    assert_eq!(NafDigit::One as u8, 1);
    assert_eq!(NafDigit::MinusOne as u8, 3);
}

#[test]
fn naf_of_all_ones_grows_by_one_digit() {
    let all_ones = (BigInt::ONE << 256) - BigInt::ONE;
    let naf = Naf::recode(&all_ones);

    assert_eq!(naf.len(), 257);
    assert_eq!(naf.digits()[0], NafDigit::MinusOne);
    assert_eq!(naf.digits()[256], NafDigit::One);
    assert!(naf.digits()[1..256].iter().all(|d| *d == NafDigit::Zero));
}

proptest! {
    #[test]
    fn naf_reconstructs_and_is_non_adjacent(bytes in proptest::collection::vec(any::<u8>(), 1..=66)) {
        let k = BigInt::from_be_bytes(&bytes);
        let naf = Naf::recode(&k);

        let mut positive = BigInt::ZERO;
        let mut negative = BigInt::ZERO;
        for (i, digit) in naf.digits().iter().enumerate() {
            match digit {
                NafDigit::Zero => {}
                NafDigit::One => positive = positive + (BigInt::ONE << i),
                NafDigit::MinusOne => negative = negative + (BigInt::ONE << i),
            }
        }
        prop_assert_eq!(positive - negative, k);

        for pair in naf.digits().windows(2) {
            prop_assert!(pair[0] == NafDigit::Zero || pair[1] == NafDigit::Zero);
        }

        prop_assert!(naf.len() <= k.bits() + 1);
        if let Some(last) = naf.digits().last() {
            prop_assert_ne!(*last, NafDigit::Zero);
        }
    }
}

#[test]
fn naf_multiplication_matches_known_vectors() {
    for (curve, expected) in k_times_generator() {
        assert_eq!(
            curve.scalar_multiply(curve.generator(), &K).unwrap(),
            expected,
            "{}",
            curve.name()
        );
    }
}

#[test]
fn comb_multiplication_matches_known_vectors() {
    for (curve, expected) in k_times_generator() {
        assert_eq!(curve.fixed_base_multiply(&K).unwrap(), expected, "{}", curve.name());
        assert_eq!(curve.multiply_base(&K).unwrap(), expected, "{}", curve.name());
    }
}

#[test]
fn p256_rfc6979_public_key() {
    let curve = &SECP256R1;
    let d = BigInt::from_be_hex("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");
    let expected = point(
        "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6",
        "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299",
    );

    assert_eq!(curve.multiply_base(&d).unwrap(), expected);
    assert_eq!(curve.scalar_multiply(curve.generator(), &d).unwrap(), expected);
}

#[test]
fn comb_agrees_with_naf_on_edge_scalars() {
    let mut rng = StdRng::seed_from_u64(42);

    for curve in NIST {
        let n = *curve.order();
        let g = curve.generator();
        let mut scalars = vec![
            BigInt::ZERO,
            BigInt::ONE,
            BigInt::from_u64(2),
            n - BigInt::ONE,
            n - BigInt::from_u64(2),
            (BigInt::ONE << (curve.bits() - 1)) - BigInt::ONE,
        ];
        scalars.extend((0..3).map(|_| random_scalar(&mut rng, curve)));

        for k in scalars {
            assert_eq!(
                curve.fixed_base_multiply(&k).unwrap(),
                curve.scalar_multiply(g, &k).unwrap(),
                "{} with k = {}",
                curve.name(),
                k
            );
        }
    }
}

#[test]
fn order_times_generator_is_identity() {
    for curve in NIST {
        let n = *curve.order();
        assert!(curve.scalar_multiply(curve.generator(), &n).unwrap().is_identity());
        assert!(curve.fixed_base_multiply(&n).unwrap().is_identity());
        assert_eq!(
            curve.multiply_base(&(n + BigInt::ONE)).unwrap(),
            *curve.generator(),
            "{}",
            curve.name()
        );
    }
}

#[test]
fn order_minus_one_is_negated_generator() {
    for curve in NIST {
        let n1 = *curve.order() - BigInt::ONE;
        let expected = curve.negate(curve.generator()).unwrap();
        assert_eq!(curve.multiply_base(&n1).unwrap(), expected, "{}", curve.name());
    }
}

#[test]
fn zero_scalar_or_identity_point_gives_identity() {
    for curve in NIST {
        assert!(curve.multiply_base(&BigInt::ZERO).unwrap().is_identity());
        assert!(curve.scalar_multiply(&AffinePoint::IDENTITY, &K).unwrap().is_identity());
    }
}

#[test]
fn multiplication_by_arbitrary_point_composes() {
    let mut rng = StdRng::seed_from_u64(7);

    for curve in NIST {
        let a = random_scalar(&mut rng, curve);
        let b = BigInt::from_u64(rng.next_u64());

        let a_g = curve.multiply_base(&a).unwrap();
        let ab_g = curve.multiply(&a_g, &b).unwrap();
        let expected = curve.multiply_base(&((a * b) % *curve.order())).unwrap();

        assert_eq!(ab_g, expected, "{}", curve.name());
    }
}

#[test]
fn wide_scalars_fall_back_to_naf() {
    let curve = &SECP256R1;
    let n = *curve.order();
    let wide = n * BigInt::from_u64(3) + K;

    assert!(wide.bits() > curve.bits());
    assert_eq!(curve.multiply_base(&wide).unwrap(), curve.multiply_base(&K).unwrap());
}

#[test]
fn comb_table_shape() {
    let expected = [
        (&SECP192R1, 4, 48, 24),
        (&SECP224R1, 4, 56, 28),
        (&SECP256R1, 4, 64, 32),
        (&SECP384R1, 5, 77, 39),
        (&SECP521R1, 5, 105, 53),
    ];

    for (curve, w, d, e) in expected {
        let table = curve.fixed_points().unwrap();
        assert_eq!(table.window_width(), w, "{}", curve.name());
        assert_eq!(table.columns(), d, "{}", curve.name());
        assert_eq!(table.half(), e, "{}", curve.name());
        assert_eq!(table.comb().len(), (1 << w) - 2);
        assert_eq!(table.comb2e().len(), (1 << w) - 1);
        assert!(table.scalar_bits() >= curve.bits());
    }
}

#[test]
fn comb_table_entries() {
    let curve = &SECP256R1;
    let g = curve.generator();
    let table = curve.fixed_points().unwrap();
    let (d, e) = (table.columns(), table.half());

    // Pattern v stands for Σ_j bit_j(v) * 2^(j*d) * G.
    let pattern = |v: usize| {
        (0..table.window_width()).fold(BigInt::ZERO, |acc, j| {
            if (v >> j) & 1 == 1 {
                acc + (BigInt::ONE << (j * d))
            } else {
                acc
            }
        })
    };

    for v in 2..(1usize << table.window_width()) {
        let k = pattern(v) % *curve.order();
        let expected = curve.scalar_multiply(g, &k).unwrap();
        assert_eq!(table.comb()[v - 2], expected, "comb[{}]", v);
    }

    for v in 1..(1usize << table.window_width()) {
        let k = (pattern(v) << e) % *curve.order();
        let expected = curve.scalar_multiply(g, &k).unwrap();
        assert_eq!(table.comb2e()[v - 1], expected, "comb2e[{}]", v);
    }
}

#[test]
fn tables_are_built_once() {
    let first = SECP224R1.fixed_points().unwrap() as *const _;
    SECP224R1.precompute().unwrap();
    let second = SECP224R1.fixed_points().unwrap() as *const _;
    assert_eq!(first, second);
}

#[test]
fn montgomery_multiply_runs_the_ladder() {
    let curve = &X25519;
    let k = BigInt::from_le_bytes(&[7u8; 32]);

    let via_multiply = curve.multiply(curve.generator(), &k).unwrap();
    let via_ladder = curve.ladder(&curve.generator().x, &k).unwrap();

    assert_eq!(via_multiply.x, via_ladder);
    assert!(via_multiply.y.is_zero());
}

#[test]
fn weierstrass_multipliers_reject_montgomery_curves() {
    for curve in [&X25519, &X448] {
        let g = curve.generator();
        let k = BigInt::from_u64(5);

        for result in [
            curve.scalar_multiply(g, &k),
            curve.multiply_base(&k),
            curve.fixed_base_multiply(&k),
        ] {
            assert!(
                matches!(result, Err(EcError::UnsupportedOperation(_))),
                "{}",
                curve.name()
            );
        }

        assert!(matches!(
            curve.fixed_points(),
            Err(EcError::UnsupportedOperation(_))
        ));
        assert!(curve.precompute().is_err());
    }
}

#[test]
fn x25519_multiply_of_five_matches_ladder() {
    let curve = &X25519;
    let k = BigInt::from_u64(5);

    let u = curve.multiply(curve.generator(), &k).unwrap().x;
    assert_eq!(u, curve.ladder(&BigInt::from_u64(9), &k).unwrap());
    assert_ne!(u, BigInt::from_u64(9));
}

#[test]
fn multiply_rejects_unreduced_points() {
    let curve = &SECP256R1;
    let mut bytes = [0xffu8; 65];
    bytes[0] = 0x04;

    let q = curve.decode_point(&bytes).unwrap();
    assert!(matches!(
        curve.multiply(&q, &K),
        Err(EcError::InvalidKey("coordinate out of range"))
    ));
    assert!(curve.scalar_multiply(&q, &K).is_err());
}
