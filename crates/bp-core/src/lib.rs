//! bp-core: shared foundation for borepump.
//!
//! Contains:
//! - units (uom SI types, constructors and hydraulic constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{BpError, BpResult};
pub use numeric::*;
pub use units::*;
