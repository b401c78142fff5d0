use crate::error::{EcError, Result};
use crate::field::PrimeField;
use crate::multiply::FixedPointTable;
use crate::point::AffinePoint;
use crate::primitives::BigInt;
use once_cell::sync::OnceCell;

/// Arithmetic strategy of a curve, fixed when the descriptor is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CurveKind {
    /// `y² = x³ + ax + b` over a prime field, with `a = -3`.
    ShortWeierstrass,
    /// `v² = u³ + Au² + u`, used through the x-only ladder.
    ///
    /// `a24` is the ladder constant `(A - 2) / 4`.
    Montgomery { a24: u64 },
}

/// Immutable curve descriptor.
///
/// Descriptors are process-wide statics (see the `params` module) and are
/// never mutated, except for the lazily built comb table, which is
/// initialized at most once behind a `OnceCell`.
///
/// For Montgomery curves `a` holds the curve coefficient `A`, `b` is one,
/// and the base point carries its u-coordinate in `x` (with `y` unused).
pub struct Curve {
    pub(crate) name: &'static str,
    pub(crate) id: u16,
    pub(crate) bits: usize,
    pub(crate) field: PrimeField,
    pub(crate) a: BigInt,
    pub(crate) b: BigInt,
    pub(crate) generator: AffinePoint,
    pub(crate) order: BigInt,
    pub(crate) cofactor: u32,
    pub(crate) window_width: usize,
    pub(crate) kind: CurveKind,
    pub(crate) fixed_points: OnceCell<FixedPointTable>,
}

impl Curve {
    /// Standard curve name (e.g. `secp256r1`, `x25519`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Numeric identifier (TLS named-group value).
    pub fn id(&self) -> u16 {
        self.id
    }

    /// Bit length of the field prime.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Byte length of one encoded field element.
    pub fn byte_len(&self) -> usize {
        self.bits.div_ceil(8)
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// The field prime `p`.
    pub fn p(&self) -> &BigInt {
        self.field.modulus()
    }

    pub fn a(&self) -> &BigInt {
        &self.a
    }

    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// The designated base point `G`.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &BigInt {
        &self.order
    }

    pub fn cofactor(&self) -> u32 {
        self.cofactor
    }

    /// Comb window width used by the fixed-base multiplier.
    pub fn window_width(&self) -> usize {
        self.window_width
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn is_montgomery(&self) -> bool {
        matches!(self.kind, CurveKind::Montgomery { .. })
    }

    /// Rejects `operation` with `UnsupportedOperation` on a Montgomery curve.
    pub(crate) fn require_weierstrass(&self, operation: &'static str) -> Result<()> {
        match self.kind {
            CurveKind::ShortWeierstrass => Ok(()),
            CurveKind::Montgomery { .. } => Err(EcError::UnsupportedOperation(operation)),
        }
    }

    /// Rejects `operation` with `UnsupportedOperation` on a Weierstrass curve.
    pub(crate) fn require_montgomery(&self, operation: &'static str) -> Result<()> {
        match self.kind {
            CurveKind::Montgomery { .. } => Ok(()),
            CurveKind::ShortWeierstrass => Err(EcError::UnsupportedOperation(operation)),
        }
    }
}

impl std::fmt::Debug for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("bits", &self.bits)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Curve {}
