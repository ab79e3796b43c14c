//! Report renderings.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{ReportLine, SizingReport};
use crate::{ReportError, ReportResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

pub fn render(report: &SizingReport, format: ReportFormat) -> ReportResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Yaml => Ok(serde_yaml::to_string(report)?),
    }
}

/// Plain-text document: the downloadable form of the report.
pub fn render_text(report: &SizingReport) -> String {
    let mut out = String::new();
    let title = "Submersible Pump Selection Report";
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.len()));
    let _ = writeln!(out, "Design: {}", report.design_name);
    let _ = writeln!(out, "Generated: {}", report.generated_at);
    let _ = writeln!(out, "Report ID: {}", report.report_id);

    section(&mut out, "Input Parameters", &report.inputs);
    section(&mut out, "Calculation Results", &report.results);
    section(&mut out, "Head Loss Breakdown", &report.head_breakdown);

    let pump = &report.pump;
    let pump_lines = [
        ReportLine::new("Model", pump.model.as_str()),
        ReportLine::new("Phase", pump.phase.as_str()),
        ReportLine::new("Power", format!("{} HP", pump.hp)),
        ReportLine::new(
            "Stages",
            pump.stages
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ReportLine::new("Flow Range", pump.flow_range.as_str()),
        ReportLine::new("Head Range", pump.head_range.as_str()),
        ReportLine::new("Match", pump.match_kind.label()),
        ReportLine::new("Selection Criterion", report.criterion.to_string()),
    ];
    section(&mut out, "Recommended Pump", &pump_lines);

    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendations:");
    for rec in &report.recommendations {
        let _ = writeln!(out, "- {rec}");
    }
    out
}

fn section(out: &mut String, heading: &str, lines: &[ReportLine]) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{heading}:");
    for line in lines {
        let _ = writeln!(out, "  {}: {}", line.label, line.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_names() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("yml".parse::<ReportFormat>().unwrap(), ReportFormat::Yaml);
        assert!(matches!(
            "pdf".parse::<ReportFormat>(),
            Err(ReportError::UnknownFormat(_))
        ));
    }

    #[test]
    fn text_is_the_default() {
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
    }
}
