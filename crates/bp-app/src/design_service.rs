//! Design loading, creation and introspection.

use std::path::Path;

use bp_design::{DesignFile, save_design};
use tracing::info;

use crate::error::{AppError, AppResult};

/// One-line facts about a design, for listing.
#[derive(Debug, Clone)]
pub struct DesignSummary {
    pub name: String,
    pub version: u32,
    pub taps: u32,
    pub daily_demand_l: f64,
    pub pipe: String,
    pub catalog: Option<String>,
    pub criterion: String,
}

/// Load and validate a design file (YAML or JSON by extension).
pub fn load_design(path: &Path) -> AppResult<DesignFile> {
    let design = bp_design::load_design(path)?;
    info!(path = %path.display(), name = %design.name, "design loaded");
    Ok(design)
}

/// Write a starter design populated with the form defaults.
pub fn init_design(path: &Path, name: &str, force: bool) -> AppResult<DesignFile> {
    if path.exists() && !force {
        return Err(AppError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    if name.trim().is_empty() {
        return Err(AppError::InvalidInput("design name is empty".to_string()));
    }

    let design = DesignFile::template(name);
    save_design(path, &design)?;
    info!(path = %path.display(), "design template written");
    Ok(design)
}

pub fn summarize_design(design: &DesignFile) -> DesignSummary {
    let req = &design.requirements;
    DesignSummary {
        name: design.name.clone(),
        version: design.version,
        taps: req.taps,
        daily_demand_l: req.taps as f64 * req.demand_per_tap_l,
        pipe: format!(
            "{} m of {}mm {}",
            req.pipe_length_m,
            req.pipe_diameter_mm.mm(),
            req.pipe_material
        ),
        catalog: design.catalog.clone(),
        criterion: design.selection.criterion.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_path(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("{}_{}.yaml", prefix, nanos))
    }

    #[test]
    fn summary_of_template() {
        let summary = summarize_design(&DesignFile::template("Village"));
        assert_eq!(summary.name, "Village");
        assert_eq!(summary.daily_demand_l, 1000.0);
        assert_eq!(summary.pipe, "50 m of 50mm PVC");
        assert_eq!(summary.criterion, "flow_range");
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let path = unique_temp_path("bp_app_init_existing");
        std::fs::write(&path, "keep me").unwrap();

        let err = init_design(&path, "New", false).unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        init_design(&path, "New", true).unwrap();
        assert_eq!(load_design(&path).unwrap().name, "New");
    }
}
