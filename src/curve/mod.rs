//! Curve descriptors and registry
//!
//! A `Curve` binds a named curve to its domain parameters and to the
//! arithmetic strategy it uses (short Weierstrass or Montgomery x-only).
//! Descriptors are statics, built at compile time and read-only
//! afterwards; callers obtain them by identifier or name.
//!
//! ## Structure
//!
//! - `core`  
//!   The `Curve` descriptor and the `CurveKind` strategy selector.
//!
//! - `params`  
//!   Domain parameters of the supported curves.
//!
//! - `registry`  
//!   Lookup by identifier/name and eager table initialization.

mod core;
mod params;
mod registry;

pub use self::core::*;
pub use params::*;
pub use registry::*;
