//! Fixed-capacity big integer
//!
//! `BigInt` is the arithmetic workhorse behind field elements, scalars
//! and coordinates.
//!
//! ## Structure
//!
//! - `core`  
//!   Type definition, constants, bit access and ordering.
//!
//! - `ops`  
//!   Addition, subtraction, multiplication, shifts, division-based
//!   remainder, modular exponentiation and prime-field inversion.
//!
//! - `conv`  
//!   Big-endian and little-endian byte conversions with fixed-width
//!   extraction.
//!
//! - `ct`  
//!   Constant-time conditional swap/select (`subtle`) and zeroization.

mod conv;
mod core;
mod ct;
mod ops;

pub use self::core::*;
