//! Prime-field arithmetic
//!
//! Field elements are `BigInt` values in `[0, p)`. This module supplies the
//! modular helpers used by point arithmetic and the Montgomery ladder, and
//! the reduction strategies behind them.
//!
//! ## Structure
//!
//! - `reduce`  
//!   `FieldReducer`: generic division-based reduction and the fast
//!   Solinas-style reductions for the NIST primes.
//!
//! - `prime`  
//!   `PrimeField`: a modulus bound to its reducer, with add, subtract,
//!   multiply, square, small-constant multiply, shift and inversion.

mod prime;
mod reduce;

pub use prime::PrimeField;
pub use reduce::FieldReducer;
