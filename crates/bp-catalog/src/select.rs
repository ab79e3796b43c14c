//! Tiered pump selection.
//!
//! Tiers are tried in order and the first hit wins:
//!
//! 1. `ExactMatch`: HP equal to the required tier, secondary criterion and head range hold
//! 2. `HigherHpMatch`: larger HP, secondary criterion and head range hold
//! 3. `TdhMatch`: HP at least the required tier, head range holds (flow ignored)
//! 4. `LastResort`: the last (largest) record in catalog order
//!
//! Selection never fails for lack of a match; only an empty catalog is an error.

use std::fmt;

use bp_core::numeric::{Tolerances, definitely_greater, nearly_equal};
use bp_hydraulics::HydraulicResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::record::PumpRecord;
use crate::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    ExactMatch,
    HigherHpMatch,
    TdhMatch,
    LastResort,
}

impl MatchKind {
    pub fn label(self) -> &'static str {
        match self {
            MatchKind::ExactMatch => "exact match",
            MatchKind::HigherHpMatch => "higher HP match",
            MatchKind::TdhMatch => "TDH match",
            MatchKind::LastResort => "last resort",
        }
    }

    /// One-line explanation for reports.
    pub fn explanation(self, criterion: SelectionCriterion, pump: &PumpRecord) -> String {
        let secondary = match criterion {
            SelectionCriterion::FlowRange => "flow and head",
            SelectionCriterion::StageCount => "stage and head",
        };
        match self {
            MatchKind::ExactMatch => {
                format!("Found pump matching the exact HP and {secondary} requirements")
            }
            MatchKind::HigherHpMatch => format!(
                "Using higher HP pump ({} HP) that meets the {secondary} requirements",
                pump.hp
            ),
            MatchKind::TdhMatch => {
                "Selected pump based on TDH requirements only; check the operating point".to_string()
            }
            MatchKind::LastResort => {
                "No suitable pump found - showing highest capacity option".to_string()
            }
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Secondary test applied alongside the head range in the first two tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionCriterion {
    /// Required flow inside the pump's `[qmin, qmax]`.
    #[default]
    FlowRange,
    /// Pump lists at least the estimated number of stages.
    StageCount,
}

impl SelectionCriterion {
    fn accepts(self, pump: &PumpRecord, req: &PumpRequirement) -> bool {
        match self {
            SelectionCriterion::FlowRange => pump.flow_in_range(req.flow_lph),
            SelectionCriterion::StageCount => pump.has_stages_for(req.stages),
        }
    }
}

impl fmt::Display for SelectionCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionCriterion::FlowRange => f.write_str("flow_range"),
            SelectionCriterion::StageCount => f.write_str("stage_count"),
        }
    }
}

/// Duty point the selected pump must cover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PumpRequirement {
    pub hp: f64,
    pub flow_lph: f64,
    pub tdh_m: f64,
    pub stages: u32,
}

impl From<&HydraulicResult> for PumpRequirement {
    fn from(r: &HydraulicResult) -> Self {
        Self {
            hp: r.hp_rounded,
            flow_lph: r.flow_lph,
            tdh_m: r.tdh_m,
            stages: r.stages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub pump: PumpRecord,
    pub kind: MatchKind,
}

impl MatchResult {
    pub fn tdh_in_range(&self, tdh_m: f64) -> bool {
        self.pump.head_in_range(tdh_m)
    }
}

/// Choose a pump from `catalog` (assumed sorted by HP, then max head).
pub fn select_pump(
    catalog: &[PumpRecord],
    req: &PumpRequirement,
    criterion: SelectionCriterion,
) -> CatalogResult<MatchResult> {
    let last = catalog.last().ok_or(CatalogError::EmptyCatalog)?;
    let tol = Tolerances::default();

    for kind in [
        MatchKind::ExactMatch,
        MatchKind::HigherHpMatch,
        MatchKind::TdhMatch,
    ] {
        if let Some(pump) = catalog
            .iter()
            .find(|p| tier_accepts(kind, p, req, criterion, tol))
        {
            debug!(model = %pump.model, hp = pump.hp, %kind, %criterion, "pump selected");
            return Ok(MatchResult {
                pump: pump.clone(),
                kind,
            });
        }
    }

    warn!(
        required_hp = req.hp,
        flow_lph = req.flow_lph,
        tdh_m = req.tdh_m,
        fallback = %last.model,
        "no catalog pump covers the duty point; falling back to the largest pump"
    );
    Ok(MatchResult {
        pump: last.clone(),
        kind: MatchKind::LastResort,
    })
}

fn tier_accepts(
    kind: MatchKind,
    pump: &PumpRecord,
    req: &PumpRequirement,
    criterion: SelectionCriterion,
    tol: Tolerances,
) -> bool {
    let head_ok = pump.head_in_range(req.tdh_m);
    match kind {
        MatchKind::ExactMatch => {
            nearly_equal(pump.hp, req.hp, tol) && criterion.accepts(pump, req) && head_ok
        }
        MatchKind::HigherHpMatch => {
            definitely_greater(pump.hp, req.hp, tol) && criterion.accepts(pump, req) && head_ok
        }
        MatchKind::TdhMatch => !definitely_greater(req.hp, pump.hp, tol) && head_ok,
        MatchKind::LastResort => true,
    }
}
