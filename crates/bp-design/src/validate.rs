//! Design validation: the input ranges a sizing request must respect.

use crate::schema::{DesignFile, LATEST_VERSION, RequirementsDef};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Missing value: {field}")]
    Missing { field: &'static str },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_design(design: &DesignFile) -> Result<(), ValidationError> {
    if design.version == 0 || design.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: design.version,
        });
    }

    if design.name.trim().is_empty() {
        return Err(ValidationError::Missing { field: "name" });
    }

    if let Some(catalog) = &design.catalog {
        if catalog.trim().is_empty() {
            return Err(ValidationError::Missing { field: "catalog" });
        }
    }

    validate_requirements(&design.requirements)
}

pub fn validate_requirements(req: &RequirementsDef) -> Result<(), ValidationError> {
    // (field, value, inclusive min, inclusive max)
    let checks: [(&'static str, f64, f64, Option<f64>); 10] = [
        ("yield_lph", req.yield_lph, 100.0, None),
        ("taps", req.taps as f64, 1.0, None),
        ("demand_per_tap_l", req.demand_per_tap_l, 10.0, None),
        ("pumping_hours", req.pumping_hours, 0.5, Some(24.0)),
        ("installation_depth_m", req.installation_depth_m, 1.0, None),
        ("tank_height_m", req.tank_height_m, 0.0, None),
        ("pipe_length_m", req.pipe_length_m, 1.0, None),
        ("safety_margin_pct", req.safety_margin_pct, 0.0, Some(100.0)),
        ("efficiency_pct", req.efficiency_pct, 30.0, Some(90.0)),
        ("head_per_stage_m", req.head_per_stage_m, 1.0, Some(20.0)),
    ];

    for (field, value, min, max) in checks {
        check_range(field, value, min, max)?;
    }

    if req.pipe_material.name().trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "pipe_material",
        });
    }

    Ok(())
}

fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: Option<f64>,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field,
            value: value.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value < min {
        return Err(ValidationError::InvalidValue {
            field,
            value: value.to_string(),
            reason: format!("must be at least {min}"),
        });
    }

    if let Some(max) = max {
        if value > max {
            return Err(ValidationError::InvalidValue {
                field,
                value: value.to_string(),
                reason: format!("must be at most {max}"),
            });
        }
    }

    Ok(())
}
