//! Primitive types
//!
//! This module defines the low-level integer type used throughout the
//! crate.
//!
//! `BigInt` is a fixed-capacity, stack-allocated unsigned integer. It is
//! deliberately not a general-purpose big-integer library: it supplies
//! exactly the operations elliptic-curve arithmetic needs (add, subtract,
//! multiply, shifts, remainder, modular inversion, byte conversions and a
//! constant-time swap) over a capacity fixed at compile time.

mod bigint;

pub use bigint::{BITS, BigInt, LIMBS};
