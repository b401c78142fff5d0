use crate::curve::Curve;
use crate::curve::params::{SECP192R1, SECP224R1, SECP256R1, SECP384R1, SECP521R1, X25519, X448};
use crate::error::{EcError, Result};

static CURVES: [&Curve; 7] = [
    &SECP192R1, &SECP224R1, &SECP256R1, &SECP384R1, &SECP521R1, &X25519, &X448,
];

/// Every registered curve, NIST curves first.
pub fn curves() -> &'static [&'static Curve] {
    &CURVES
}

/// Looks up a curve by its numeric identifier.
pub fn curve_by_id(id: u16) -> Result<&'static Curve> {
    CURVES
        .iter()
        .copied()
        .find(|curve| curve.id() == id)
        .ok_or(EcError::MissingCurve(id))
}

/// Looks up a curve by its standard name.
pub fn curve_by_name(name: &str) -> Option<&'static Curve> {
    CURVES.iter().copied().find(|curve| curve.name() == name)
}

/// Builds the comb tables of every Weierstrass curve up front.
///
/// Calling this at startup moves the one-time precomputation cost out of
/// the first key generation.
pub fn precompute_all() {
    CURVES
        .iter()
        .filter(|curve| !curve.is_montgomery())
        .for_each(|curve| {
            curve.comb_table();
        });
}
