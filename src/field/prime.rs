use crate::field::FieldReducer;
use crate::primitives::BigInt;

/// Prime field `GF(p)` with its reduction strategy.
///
/// Elements are plain `BigInt`s in `[0, p)`; every method below expects
/// reduced inputs and returns a reduced output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigInt,
    reducer: FieldReducer,
}

impl PrimeField {
    /// Binds a modulus to a reducer.
    pub const fn new(modulus: BigInt, reducer: FieldReducer) -> Self {
        Self { modulus, reducer }
    }

    /// The field prime `p`.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// The reduction strategy in use.
    pub fn reducer(&self) -> FieldReducer {
        self.reducer
    }

    /// Reduces an arbitrary value of at most twice the field width.
    pub fn reduce(&self, value: &mut BigInt) {
        self.reducer.reduce(value, &self.modulus);
    }

    /// Returns `true` if `value` is a canonical element (`< p`).
    pub fn contains(&self, value: &BigInt) -> bool {
        *value < self.modulus
    }

    /// `a + b mod p`, with a single conditional subtraction.
    pub fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        let sum = *a + *b;
        sum.checked_sub(&self.modulus).unwrap_or(sum)
    }

    /// `a - b mod p`; `p` is added first when `a < b`.
    pub fn sub(&self, a: &BigInt, b: &BigInt) -> BigInt {
        match a.checked_sub(b) {
            Some(diff) => diff,
            None => (*a + self.modulus) - *b,
        }
    }

    /// `a - digit mod p`.
    pub fn sub_u64(&self, a: &BigInt, digit: u64) -> BigInt {
        let mut d = BigInt::from_u64(digit);
        self.reduce(&mut d);
        self.sub(a, &d)
    }

    /// `-a mod p`.
    pub fn neg(&self, a: &BigInt) -> BigInt {
        if a.is_zero() {
            BigInt::ZERO
        } else {
            self.modulus - *a
        }
    }

    pub fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        let mut product = *a * *b;
        self.reduce(&mut product);
        product
    }

    pub fn square(&self, a: &BigInt) -> BigInt {
        let mut product = a.square();
        self.reduce(&mut product);
        product
    }

    /// `a * digit mod p`, for small constants such as 3 or `a24`.
    pub fn mul_u64(&self, a: &BigInt, digit: u64) -> BigInt {
        let mut product = a.mul_u64(digit);
        self.reduce(&mut product);
        product
    }

    /// `a * 2^shift mod p`, for small shifts.
    pub fn shl(&self, a: &BigInt, shift: usize) -> BigInt {
        let mut shifted = *a << shift;
        self.reduce(&mut shifted);
        shifted
    }

    /// Multiplicative inverse; zero maps to zero.
    pub fn invert(&self, a: &BigInt) -> BigInt {
        a.inv_mod_prime(&self.modulus)
    }
}
