//! bp-design: design file format and validation.
//!
//! A design file is one sizing request: the system requirements, an optional
//! catalog reference and the selection policy.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_design, validate_requirements};

use std::path::{Path, PathBuf};

pub type DesignResult<T> = Result<T, DesignError>;

#[derive(thiserror::Error, Debug)]
pub enum DesignError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported design file extension: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> DesignResult<DesignFile> {
    let content = std::fs::read_to_string(path)?;
    let design: DesignFile = serde_yaml::from_str(&content)?;
    validate_design(&design)?;
    Ok(design)
}

pub fn save_yaml(path: &Path, design: &DesignFile) -> DesignResult<()> {
    validate_design(design)?;
    let content = serde_yaml::to_string(design)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> DesignResult<DesignFile> {
    let content = std::fs::read_to_string(path)?;
    let design: DesignFile = serde_json::from_str(&content)?;
    validate_design(&design)?;
    Ok(design)
}

pub fn save_json(path: &Path, design: &DesignFile) -> DesignResult<()> {
    validate_design(design)?;
    let content = serde_json::to_string_pretty(design)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is JSON, `.yaml`/`.yml` is YAML.
pub fn load_design(path: &Path) -> DesignResult<DesignFile> {
    match extension(path).as_str() {
        "json" => load_json(path),
        "yaml" | "yml" => load_yaml(path),
        other => Err(DesignError::UnsupportedFormat(other.to_string())),
    }
}

/// Save by extension, same rules as [`load_design`].
pub fn save_design(path: &Path, design: &DesignFile) -> DesignResult<()> {
    match extension(path).as_str() {
        "json" => save_json(path, design),
        "yaml" | "yml" => save_yaml(path, design),
        other => Err(DesignError::UnsupportedFormat(other.to_string())),
    }
}

/// Catalog path named by the design, resolved against the design file's directory.
pub fn resolve_catalog_path(design_path: &Path, design: &DesignFile) -> Option<PathBuf> {
    let catalog = design.catalog.as_deref()?;
    let catalog = Path::new(catalog);
    if catalog.is_absolute() {
        return Some(catalog.to_path_buf());
    }
    let base = design_path.parent().unwrap_or_else(|| Path::new(""));
    Some(base.join(catalog))
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}
