//! Common utilities for hydraulic calculations.

use crate::error::{HydraulicsError, HydraulicsResult};
use bp_core::numeric::ensure_finite;

/// Ensure a value is finite, returning HydraulicsError if not.
pub fn check_finite(value: f64, what: &'static str) -> HydraulicsResult<f64> {
    ensure_finite(value, what).map_err(|_| HydraulicsError::NonPhysical { what })
}

/// Ensure a head or loss term is finite and non-negative.
pub fn check_head(value: f64, what: &'static str) -> HydraulicsResult<f64> {
    let value = check_finite(value, what)?;
    if value < 0.0 {
        return Err(HydraulicsError::NonPhysical { what });
    }
    Ok(value)
}
