//! Content-based hashing for report IDs.

use bp_catalog::PumpRecord;
use bp_design::DesignFile;
use sha2::{Digest, Sha256};

/// SHA-256 over the design and the selected pump. Identical requests hash
/// identically regardless of when they ran.
pub fn compute_report_id(design: &DesignFile, pump: &PumpRecord) -> String {
    let mut hasher = Sha256::new();

    let design_json = serde_json::to_string(design).unwrap_or_default();
    hasher.update(design_json.as_bytes());

    let pump_json = serde_json::to_string(pump).unwrap_or_default();
    hasher.update(pump_json.as_bytes());

    format!("{:x}", hasher.finalize())
}
