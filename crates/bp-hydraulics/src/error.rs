//! Error types for hydraulic calculations.

use bp_core::error::BpError;
use thiserror::Error;

/// Errors that can occur while sizing a pumping system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    /// Daily demand spread over the pumping window needs more water than the borewell gives.
    #[error(
        "Required flow {flow_lph:.1} LPH exceeds borewell yield {yield_lph:.1} LPH; reduce demand or increase pumping hours"
    )]
    DemandExceedsYield { flow_lph: f64, yield_lph: f64 },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Unsupported pipe diameter: {mm} mm (expected one of 32, 40, 50, 63, 75, 90)")]
    UnsupportedDiameter { mm: u32 },
}

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

impl From<BpError> for HydraulicsError {
    fn from(e: BpError) -> Self {
        match e {
            BpError::NonFinite { what, .. } => HydraulicsError::NonPhysical { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HydraulicsError::DemandExceedsYield {
            flow_lph: 2500.0,
            yield_lph: 2000.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("2500.0"));
        assert!(msg.contains("2000.0"));
    }

    #[test]
    fn error_conversion() {
        let core_err = BpError::NonFinite {
            what: "velocity",
            value: f64::NAN,
        };
        let err: HydraulicsError = core_err.into();
        assert_eq!(err, HydraulicsError::NonPhysical { what: "velocity" });
    }
}
