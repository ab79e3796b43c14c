//! Catalog row type.

use bp_core::numeric::within;
use serde::{Deserialize, Serialize};

/// One pump model from a manufacturer table. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpRecord {
    pub model: String,
    pub phase: String,
    pub hp: f64,
    pub min_flow_lph: f64,
    pub max_flow_lph: f64,
    pub min_head_m: f64,
    pub max_head_m: f64,
    /// Stage count, when the table lists it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<u32>,
}

impl PumpRecord {
    pub fn flow_in_range(&self, flow_lph: f64) -> bool {
        within(flow_lph, self.min_flow_lph, self.max_flow_lph)
    }

    pub fn head_in_range(&self, tdh_m: f64) -> bool {
        within(tdh_m, self.min_head_m, self.max_head_m)
    }

    pub fn has_stages_for(&self, required: u32) -> bool {
        self.stages.is_some_and(|s| s >= required)
    }
}
