use cryptal_ec::BigInt;
use cryptal_ec::primitives::{BITS, LIMBS};
use cryptal_ec::EcError;
use subtle::{Choice, ConditionallySelectable};

fn int(hex: &str) -> BigInt {
    BigInt::from_be_hex(hex)
}

#[test]
fn bigint_hex_and_display() {
    let v = int("0123456789abcdef0011223344556677");
    assert_eq!(v.to_string(), "0x123456789abcdef0011223344556677");
    assert_eq!(v.limbs()[0], 0x0011_2233_4455_6677);
    assert_eq!(v.limbs()[1], 0x0123_4567_89ab_cdef);
    assert_eq!(BigInt::ZERO.to_string(), "0x0");
}

#[test]
fn bigint_bits_and_bit_access() {
    assert_eq!(BigInt::ZERO.bits(), 0);
    assert_eq!(BigInt::ONE.bits(), 1);
    assert_eq!((BigInt::ONE << 200).bits(), 201);

    let v = int("8000000000000000000000000000000000000001");
    assert_eq!(v.bit(0), 1);
    assert_eq!(v.bit(1), 0);
    assert_eq!(v.bit(159), 1);
    assert_eq!(v.bit(BITS + 10), 0, "out-of-range bits read as zero");
}

#[test]
fn bigint_add_sub_carry_across_limbs() {
    let a = int("ffffffffffffffffffffffffffffffff");
    let sum = a + BigInt::ONE;
    assert_eq!(sum, int("100000000000000000000000000000000"));
    assert_eq!(sum - BigInt::ONE, a);
    assert_eq!(BigInt::ONE.checked_sub(&a), None);
}

#[test]
#[should_panic(expected = "underflow")]
fn bigint_sub_underflow_panics() {
    let _ = BigInt::ONE - int("2");
}

#[test]
#[should_panic(expected = "exceeds capacity")]
fn bigint_mul_overflow_panics() {
    let big = BigInt::ONE << (BITS - 1);
    let _ = big * int("2");
}

#[test]
fn bigint_mul_and_square() {
    let a = int("ffffffffffffffff");
    assert_eq!(a * a, int("fffffffffffffffe0000000000000001"));
    assert_eq!(a.square(), a * a);
    assert_eq!(a.mul_u64(3), int("2fffffffffffffffd"));
}

#[test]
fn bigint_shifts() {
    let v = int("123456789abcdef");
    assert_eq!((v << 68) >> 68, v);
    assert_eq!(v >> 4, int("123456789abcde"));
    assert_eq!(v >> BITS, BigInt::ZERO);
    assert_eq!(v.low_bits(8), int("ef"));
    assert_eq!(v.low_bits(64), v);
}

#[test]
fn bigint_rem_matches_known_values() {
    let p25519 = int("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed");
    let m = int("7fffffffffffffffffffffffffffffff");
    // 2^255 = 2 * (2^127)^2 ≡ 2 (mod 2^127 - 1), so 2^255 - 19 ≡ -17.
    assert_eq!(p25519 % m, m - int("11"));

    assert_eq!(int("64") % int("7"), int("2"));
    assert_eq!(int("5") % int("7"), int("5"));
    assert_eq!(m % m, BigInt::ZERO);
}

#[test]
fn bigint_rem_is_consistent_with_mul() {
    let q = int("fedcba9876543210fedcba9876543210fedcba98");
    let m = int("1000000000000000000000000000000000000000000000000000000000000001d");
    let r = int("abcdef");
    let v = q * m + r;
    assert_eq!(v % m, r);
}

#[test]
fn bigint_inverse_mod_prime() {
    let p = int("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
    let x = int("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");
    let inv = x.inv_mod_prime(&p);
    assert_eq!((x * inv) % p, BigInt::ONE);
    assert_eq!(BigInt::ZERO.inv_mod_prime(&p), BigInt::ZERO);
}

#[test]
fn bigint_byte_conversions() {
    let v = BigInt::from_be_bytes(&[0x00, 0x01, 0x02, 0x03]);
    assert_eq!(v, int("10203"));
    assert_eq!(BigInt::from_le_bytes(&[0x03, 0x02, 0x01, 0x00]), v);

    let mut be = [0xAAu8; 6];
    v.to_be_bytes_fixed(&mut be).unwrap();
    assert_eq!(be, [0, 0, 0, 1, 2, 3]);

    let mut le = [0xAAu8; 6];
    v.to_le_bytes_fixed(&mut le).unwrap();
    assert_eq!(le, [3, 2, 1, 0, 0, 0]);
}

#[test]
fn bigint_fixed_extraction_too_small() {
    let v = int("1000000");
    let mut out = [0u8; 3];
    match v.to_be_bytes_fixed(&mut out) {
        Err(EcError::Size { needed, available }) => {
            assert_eq!(needed, 4);
            assert_eq!(available, 3);
        }
        other => panic!("expected size error, got {:?}", other),
    }
    assert!(v.to_le_bytes_fixed(&mut out).is_err());
}

#[test]
fn cswap_zero_leaves_values_unchanged() {
    let ones = BigInt::from_limbs(&[u64::MAX; LIMBS]);
    let mut a = ones;
    let mut b = BigInt::ZERO;

    BigInt::conditional_swap(&mut a, &mut b, Choice::from(0));
    assert_eq!(a, ones);
    assert_eq!(b, BigInt::ZERO);
}

#[test]
fn cswap_one_exchanges_values() {
    let ones = BigInt::from_limbs(&[u64::MAX; LIMBS]);
    let mut a = ones;
    let mut b = BigInt::ZERO;

    BigInt::conditional_swap(&mut a, &mut b, Choice::from(1));
    assert_eq!(a, BigInt::ZERO);
    assert_eq!(b, ones);

    let x = int("0123456789abcdef00000000000000000000000000000000ffffffffffffffff");
    let y = int("fedcba9876543210");
    let (mut p, mut q) = (x, y);
    BigInt::conditional_swap(&mut p, &mut q, Choice::from(1));
    assert_eq!((p, q), (y, x));
    BigInt::conditional_swap(&mut p, &mut q, Choice::from(1));
    assert_eq!((p, q), (x, y));
}

#[test]
fn conditional_select_picks_operand() {
    let x = int("1234");
    let y = int("5678");
    assert_eq!(BigInt::conditional_select(&x, &y, Choice::from(0)), x);
    assert_eq!(BigInt::conditional_select(&x, &y, Choice::from(1)), y);
}

#[test]
fn constant_time_equality() {
    use subtle::ConstantTimeEq;

    let x = int("0123456789abcdef0123456789abcdef");
    let mut y = x;
    assert!(bool::from(x.ct_eq(&y)));

    y.set_bit(1000, true);
    assert!(!bool::from(x.ct_eq(&y)));
}
