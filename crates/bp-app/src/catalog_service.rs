//! Catalog resolution and loading.

use std::path::{Path, PathBuf};

use bp_catalog::Catalog;
use bp_design::{DesignFile, resolve_catalog_path};
use tracing::info;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct CatalogSummary {
    pub pumps: usize,
    pub min_hp: f64,
    pub max_hp: f64,
    pub with_stage_counts: usize,
}

/// Pick the catalog for a design: an explicit override wins, otherwise the
/// design's own `catalog` entry relative to the design file.
pub fn resolve_catalog(
    design_path: &Path,
    design: &DesignFile,
    override_path: Option<&Path>,
) -> AppResult<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }
    resolve_catalog_path(design_path, design).ok_or_else(|| AppError::NoCatalog {
        design: design_path.to_path_buf(),
    })
}

pub fn load_catalog(path: &Path) -> AppResult<Catalog> {
    let catalog = bp_catalog::load_catalog(path)?;
    info!(path = %path.display(), pumps = catalog.len(), "pump catalog loaded");
    Ok(catalog)
}

pub fn summarize_catalog(catalog: &Catalog) -> CatalogSummary {
    // Sorted by HP, so the ends bound the range.
    let records = catalog.records();
    let min_hp = records.first().map(|p| p.hp).unwrap_or_default();
    CatalogSummary {
        pumps: catalog.len(),
        min_hp,
        max_hp: catalog.last().hp,
        with_stage_counts: records.iter().filter(|p| p.stages.is_some()).count(),
    }
}
