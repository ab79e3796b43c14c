//! Error types for the bp-app service layer.

use std::path::PathBuf;

/// Application error wrapping the backend crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Design error: {0}")]
    Design(#[from] bp_design::DesignError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] bp_catalog::CatalogError),

    #[error("Hydraulics error: {0}")]
    Hydraulics(#[from] bp_hydraulics::HydraulicsError),

    #[error("Report error: {0}")]
    Report(#[from] bp_report::ReportError),

    #[error("No pump catalog given for design {design}; pass --catalog or set `catalog` in the file")]
    NoCatalog { design: PathBuf },

    #[error("Refusing to overwrite existing file: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for bp-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<bp_design::ValidationError> for AppError {
    fn from(err: bp_design::ValidationError) -> Self {
        AppError::Design(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_hydraulics::HydraulicsError;

    #[test]
    fn wraps_backend_errors() {
        let err: AppError = HydraulicsError::DemandExceedsYield {
            flow_lph: 3000.0,
            yield_lph: 1000.0,
        }
        .into();
        assert!(matches!(err, AppError::Hydraulics(_)));
        assert!(err.to_string().starts_with("Hydraulics error:"));

        let err: AppError = bp_design::ValidationError::Missing { field: "name" }.into();
        assert!(matches!(
            err,
            AppError::Design(bp_design::DesignError::Validation(_))
        ));
    }
}
