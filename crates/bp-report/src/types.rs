//! Report data types.

use bp_catalog::{MatchKind, MatchResult, PumpRecord, SelectionCriterion};
use bp_design::DesignFile;
use bp_hydraulics::{HydraulicResult, SystemRequirements};
use serde::{Deserialize, Serialize};

use crate::format::{
    compact, flow_line, group_thousands, metres, power_line, range, yes_no,
};

pub type ReportId = String;

pub const HIGH_VELOCITY_WARNING: &str =
    "High velocity detected! Consider increasing pipe size to reduce friction losses.";

/// One labelled display value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
}

impl ReportLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Selected pump as shown in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpSummary {
    pub model: String,
    pub phase: String,
    pub hp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<u32>,
    pub flow_range: String,
    pub head_range: String,
    pub match_kind: MatchKind,
    pub tdh_in_range: bool,
}

impl PumpSummary {
    pub fn from_match(selection: &MatchResult, tdh_m: f64) -> Self {
        let pump = &selection.pump;
        Self {
            model: pump.model.clone(),
            phase: pump.phase.clone(),
            hp: pump.hp,
            stages: pump.stages,
            flow_range: range(pump.min_flow_lph, pump.max_flow_lph, "LPH"),
            head_range: range(pump.min_head_m, pump.max_head_m, "m"),
            match_kind: selection.kind,
            tdh_in_range: selection.tdh_in_range(tdh_m),
        }
    }

    pub fn stages_label(&self) -> String {
        match self.stages {
            Some(n) => format!("{n} stages"),
            None => "stages not listed".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingReport {
    pub report_id: ReportId,
    pub design_name: String,
    /// RFC 3339, UTC
    pub generated_at: String,
    pub criterion: SelectionCriterion,
    pub inputs: Vec<ReportLine>,
    pub results: Vec<ReportLine>,
    pub head_breakdown: Vec<ReportLine>,
    pub pump: PumpSummary,
    pub recommendations: Vec<String>,
}

impl SizingReport {
    /// Assemble the report for one completed sizing run, stamped now.
    pub fn build(
        design: &DesignFile,
        hydraulics: &HydraulicResult,
        selection: &MatchResult,
    ) -> Self {
        let generated_at = chrono::Utc::now().to_rfc3339();
        Self::build_at(design, hydraulics, selection, generated_at)
    }

    pub fn build_at(
        design: &DesignFile,
        hydraulics: &HydraulicResult,
        selection: &MatchResult,
        generated_at: String,
    ) -> Self {
        let req = SystemRequirements::from(&design.requirements);
        let criterion = design.selection.criterion;
        let pump = PumpSummary::from_match(selection, hydraulics.tdh_m);

        Self {
            report_id: crate::hash::compute_report_id(design, &selection.pump),
            design_name: design.name.clone(),
            generated_at,
            criterion,
            inputs: input_lines(&req),
            results: result_lines(&req, hydraulics),
            head_breakdown: head_breakdown(hydraulics),
            recommendations: recommendations(criterion, hydraulics, &selection.pump, &pump),
            pump,
        }
    }

    pub fn result(&self, label: &str) -> Option<&str> {
        self.results
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

fn input_lines(req: &SystemRequirements) -> Vec<ReportLine> {
    vec![
        ReportLine::new("Borewell Yield (LPH)", group_thousands(req.yield_lph, 0)),
        ReportLine::new("Total Tap Connections", req.taps.to_string()),
        ReportLine::new(
            "Daily Water Demand per Tap (Liters)",
            compact(req.demand_per_tap_l),
        ),
        ReportLine::new("Hours Available for Pumping", compact(req.pumping_hours)),
        ReportLine::new(
            "Pump Installation Depth (m)",
            compact(req.installation_depth_m),
        ),
        ReportLine::new("Tank Height from Ground (m)", compact(req.tank_height_m)),
        ReportLine::new("Pumping Line Length (m)", compact(req.pipe_length_m)),
        ReportLine::new("Pipe Diameter (mm)", req.pipe_diameter.mm().to_string()),
        ReportLine::new("Pipe Material", req.pipe_material.name()),
        ReportLine::new("Safety Margin (%)", compact(req.safety_margin_pct)),
        ReportLine::new("Pump Efficiency (%)", compact(req.efficiency_pct)),
        ReportLine::new("Head per Pump Stage (m)", compact(req.head_per_stage_m)),
    ]
}

fn result_lines(req: &SystemRequirements, h: &HydraulicResult) -> Vec<ReportLine> {
    vec![
        ReportLine::new("Total Daily Demand (liters)", group_thousands(h.demand_l, 0)),
        ReportLine::new("Required Flow Rate", flow_line(h.flow_lph, h.flow_lps())),
        ReportLine::new("Total Dynamic Head (TDH)", metres(h.tdh_m, 1)),
        ReportLine::new("Required Power", power_line(h.hp, h.hp_rounded, h.kw)),
        ReportLine::new("Number of Stages", h.stages.to_string()),
        ReportLine::new("Flow Velocity (m/s)", format!("{:.2}", h.velocity_mps)),
        ReportLine::new(
            "Selected Pipe",
            format!("{}mm {}", req.pipe_diameter.mm(), req.pipe_material),
        ),
        ReportLine::new(
            "Recommended Max Flow for this pipe",
            format!("{} LPH", group_thousands(h.pipe_check.sizing.max_flow_lph, 0)),
        ),
        ReportLine::new("Pipe Sizing Status", h.velocity_status().label()),
        ReportLine::new(
            "Recommended RPM",
            format!("{} (for standard 4\" pumps)", h.recommended_rpm),
        ),
    ]
}

fn head_breakdown(h: &HydraulicResult) -> Vec<ReportLine> {
    vec![
        ReportLine::new("Static Head", metres(h.static_head_m, 1)),
        ReportLine::new("Pipe Friction Loss", metres(h.pipe_loss_m(), 1)),
        ReportLine::new("Velocity Head", metres(h.velocity_head_m, 2)),
        ReportLine::new("Safety Margin", metres(h.safety_addition_m, 1)),
    ]
}

fn recommendations(
    criterion: SelectionCriterion,
    h: &HydraulicResult,
    record: &PumpRecord,
    pump: &PumpSummary,
) -> Vec<String> {
    let mut recs = vec![
        format!(
            "Recommended pump: {} ({} HP, {})",
            pump.model,
            compact(pump.hp),
            pump.stages_label()
        ),
        format!("Head range of pump: {}", pump.head_range),
        format!("TDH falls within range: {}", yes_no(pump.tdh_in_range)),
        pump.match_kind.explanation(criterion, record),
    ];
    if !h.velocity_status().is_ok() {
        recs.push(HIGH_VELOCITY_WARNING.to_string());
    }
    recs
}
