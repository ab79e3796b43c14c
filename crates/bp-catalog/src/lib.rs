//! bp-catalog: pump catalog loading and tiered pump selection.
//!
//! - [`PumpRecord`]: one catalog row (model, phase, HP, flow and head envelopes)
//! - [`columns`]: header normalization and alias mapping for tabular sources
//! - [`load`]: CSV / YAML / JSON readers producing a sorted [`Catalog`]
//! - [`select`]: the four-tier fallback search returning a [`MatchResult`]

pub mod catalog;
pub mod columns;
pub mod load;
pub mod record;
pub mod select;

pub use catalog::Catalog;
pub use columns::{Column, ColumnMap};
pub use load::{load_catalog, parse_csv, parse_json, parse_yaml};
pub use record::PumpRecord;
pub use select::{MatchKind, MatchResult, PumpRequirement, SelectionCriterion, select_pump};

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Pump catalog is empty")]
    EmptyCatalog,

    #[error("Pump catalog is missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("Invalid value in row {row}, column '{column}': {value:?}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Inconsistent record in row {row} ({model}): {what}")]
    InvalidRange {
        row: usize,
        model: String,
        what: &'static str,
    },

    #[error("Malformed catalog: {0}")]
    Malformed(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
