//! Report storage API.
//!
//! Layout: `<root>/<report_id>/report.txt` and `<root>/<report_id>/report.json`.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::render::render_text;
use crate::types::SizingReport;
use crate::{ReportError, ReportResult};

const TEXT_FILE: &str = "report.txt";
const JSON_FILE: &str = "report.json";

#[derive(Clone)]
pub struct ReportStore {
    root_dir: PathBuf,
}

impl ReportStore {
    pub fn new(root_dir: PathBuf) -> ReportResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    pub fn report_dir(&self, report_id: &str) -> PathBuf {
        self.root_dir.join(report_id)
    }

    /// Write both renderings; returns the report directory.
    pub fn save_report(&self, report: &SizingReport) -> ReportResult<PathBuf> {
        let dir = self.report_dir(&report.report_id);
        fs::create_dir_all(&dir)?;

        fs::write(dir.join(TEXT_FILE), render_text(report))?;
        let json = serde_json::to_string_pretty(report)?;
        fs::write(dir.join(JSON_FILE), json)?;

        debug!(report_id = %report.report_id, dir = %dir.display(), "report saved");
        Ok(dir)
    }

    pub fn load_report(&self, report_id: &str) -> ReportResult<SizingReport> {
        let path = self.report_dir(report_id).join(JSON_FILE);
        if !path.exists() {
            return Err(ReportError::ReportNotFound {
                report_id: report_id.to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_text(&self, report_id: &str) -> ReportResult<String> {
        let path = self.report_dir(report_id).join(TEXT_FILE);
        if !path.exists() {
            return Err(ReportError::ReportNotFound {
                report_id: report_id.to_string(),
            });
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Reports for one design name, oldest first.
    pub fn list_reports(&self, design_name: &str) -> ReportResult<Vec<SizingReport>> {
        let mut reports = Vec::new();

        if !self.root_dir.exists() {
            return Ok(reports);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let report_id = entry.file_name().to_string_lossy().to_string();
            if let Ok(report) = self.load_report(&report_id) {
                if report.design_name == design_name {
                    reports.push(report);
                }
            }
        }

        reports.sort_by(|a, b| a.generated_at.cmp(&b.generated_at));
        Ok(reports)
    }
}
