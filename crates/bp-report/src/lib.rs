//! bp-report: sizing report bundle, rendering and per-run storage.

pub mod format;
pub mod hash;
pub mod render;
pub mod store;
pub mod types;

pub use hash::compute_report_id;
pub use render::{ReportFormat, render, render_text};
pub use store::ReportStore;
pub use types::*;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Report not found: {report_id}")]
    ReportNotFound { report_id: String },

    #[error("Unknown report format: {0}")]
    UnknownFormat(String),
}
