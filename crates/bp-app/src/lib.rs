//! Shared application service layer for borepump.
//!
//! The CLI drives everything through these services: design files in,
//! hydraulic sizing and pump selection, report out.

pub mod catalog_service;
pub mod design_service;
pub mod error;
pub mod sizing_service;

pub use catalog_service::{CatalogSummary, load_catalog, resolve_catalog, summarize_catalog};
pub use design_service::{DesignSummary, init_design, load_design, summarize_design};
pub use error::{AppError, AppResult};
pub use sizing_service::{SizingOptions, SizingOutcome, SizingResponse, run_sizing, size_design};
