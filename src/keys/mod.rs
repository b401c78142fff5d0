//! Key material
//!
//! Key-pair generation, public key derivation, Diffie-Hellman shared
//! secrets and public key validation, for every registered curve.
//!
//! Weierstrass private scalars are drawn with the "extra random bits"
//! method of FIPS 186-4, appendix B.4.1, and the public point is derived
//! through the fixed-base comb multiplier. Montgomery private keys are raw
//! random strings, clamped only inside the ladder.
//!
//! ## Structure
//!
//! - `keypair`  
//!   `KeyPair`, `PublicKey`, generation, serialization and shared
//!   secrets.
//!
//! - `validate`  
//!   Range and on-curve checks for Weierstrass public keys.

mod keypair;
mod validate;

pub use keypair::{KeyPair, PublicKey};
