//! Sizing pipeline: design → requirements → hydraulics → selection → report.

use std::path::{Path, PathBuf};

use bp_catalog::{Catalog, MatchResult, PumpRequirement, SelectionCriterion, select_pump};
use bp_design::DesignFile;
use bp_hydraulics::{HydraulicResult, SystemRequirements, calculate};
use bp_report::{ReportStore, SizingReport};
use tracing::info;

use crate::catalog_service;
use crate::design_service;
use crate::error::AppResult;

/// Command-line style overrides applied on top of the design file.
#[derive(Debug, Clone, Default)]
pub struct SizingOptions {
    pub catalog: Option<PathBuf>,
    pub criterion: Option<SelectionCriterion>,
    /// Report store root; `None` skips persistence.
    pub report_dir: Option<PathBuf>,
}

/// Everything one sizing run produced.
#[derive(Debug, Clone)]
pub struct SizingOutcome {
    pub hydraulics: HydraulicResult,
    pub selection: MatchResult,
    pub report: SizingReport,
}

#[derive(Debug, Clone)]
pub struct SizingResponse {
    pub design: DesignFile,
    pub catalog_path: PathBuf,
    pub outcome: SizingOutcome,
    pub saved_to: Option<PathBuf>,
}

/// Size an already-loaded design against an already-loaded catalog.
pub fn size_design(design: &DesignFile, catalog: &Catalog) -> AppResult<SizingOutcome> {
    let requirements = SystemRequirements::from(&design.requirements);
    let hydraulics = calculate(&requirements)?;

    let duty = PumpRequirement::from(&hydraulics);
    let selection = select_pump(catalog.records(), &duty, design.selection.criterion)?;

    info!(
        design = %design.name,
        tdh_m = hydraulics.tdh_m,
        hp = hydraulics.hp_rounded,
        model = %selection.pump.model,
        kind = %selection.kind,
        "sizing complete"
    );

    let report = SizingReport::build(design, &hydraulics, &selection);
    Ok(SizingOutcome {
        hydraulics,
        selection,
        report,
    })
}

/// Full pipeline from a design file on disk.
pub fn run_sizing(design_path: &Path, options: &SizingOptions) -> AppResult<SizingResponse> {
    let mut design = design_service::load_design(design_path)?;
    if let Some(criterion) = options.criterion {
        design.selection.criterion = criterion;
    }

    let catalog_path =
        catalog_service::resolve_catalog(design_path, &design, options.catalog.as_deref())?;
    let catalog = catalog_service::load_catalog(&catalog_path)?;

    let outcome = size_design(&design, &catalog)?;

    let saved_to = match &options.report_dir {
        Some(dir) => {
            let store = ReportStore::new(dir.clone())?;
            let path = store.save_report(&outcome.report)?;
            info!(report_id = %outcome.report.report_id, dir = %path.display(), "report saved");
            Some(path)
        }
        None => None,
    };

    Ok(SizingResponse {
        design,
        catalog_path,
        outcome,
        saved_to,
    })
}
