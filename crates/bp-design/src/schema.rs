//! Design file schema definitions.

use bp_catalog::SelectionCriterion;
use bp_hydraulics::{PipeDiameter, PipeMaterial, SystemRequirements};
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignFile {
    pub version: u32,
    pub name: String,
    pub requirements: RequirementsDef,
    /// Catalog path, relative to the design file unless absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    #[serde(default)]
    pub selection: SelectionDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequirementsDef {
    pub yield_lph: f64,
    pub taps: u32,
    pub demand_per_tap_l: f64,
    pub pumping_hours: f64,
    pub installation_depth_m: f64,
    pub tank_height_m: f64,
    pub pipe_length_m: f64,
    pub pipe_diameter_mm: PipeDiameter,
    #[serde(default)]
    pub pipe_material: PipeMaterial,
    #[serde(default = "default_safety_margin_pct")]
    pub safety_margin_pct: f64,
    #[serde(default = "default_efficiency_pct")]
    pub efficiency_pct: f64,
    #[serde(default = "default_head_per_stage_m")]
    pub head_per_stage_m: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SelectionDef {
    #[serde(default)]
    pub criterion: SelectionCriterion,
}

fn default_safety_margin_pct() -> f64 {
    15.0
}

fn default_efficiency_pct() -> f64 {
    65.0
}

fn default_head_per_stage_m() -> f64 {
    5.0
}

impl DesignFile {
    /// Starter design populated with typical village-scheme values.
    pub fn template(name: &str) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.to_string(),
            requirements: RequirementsDef::from(&SystemRequirements::default()),
            catalog: Some("pumps.csv".to_string()),
            selection: SelectionDef::default(),
        }
    }
}

impl From<&RequirementsDef> for SystemRequirements {
    fn from(def: &RequirementsDef) -> Self {
        SystemRequirements {
            yield_lph: def.yield_lph,
            taps: def.taps,
            demand_per_tap_l: def.demand_per_tap_l,
            pumping_hours: def.pumping_hours,
            installation_depth_m: def.installation_depth_m,
            tank_height_m: def.tank_height_m,
            pipe_length_m: def.pipe_length_m,
            pipe_diameter: def.pipe_diameter_mm,
            pipe_material: def.pipe_material.clone(),
            safety_margin_pct: def.safety_margin_pct,
            efficiency_pct: def.efficiency_pct,
            head_per_stage_m: def.head_per_stage_m,
        }
    }
}

impl From<&SystemRequirements> for RequirementsDef {
    fn from(req: &SystemRequirements) -> Self {
        RequirementsDef {
            yield_lph: req.yield_lph,
            taps: req.taps,
            demand_per_tap_l: req.demand_per_tap_l,
            pumping_hours: req.pumping_hours,
            installation_depth_m: req.installation_depth_m,
            tank_height_m: req.tank_height_m,
            pipe_length_m: req.pipe_length_m,
            pipe_diameter_mm: req.pipe_diameter,
            pipe_material: req.pipe_material.clone(),
            safety_margin_pct: req.safety_margin_pct,
            efficiency_pct: req.efficiency_pct,
            head_per_stage_m: req.head_per_stage_m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_take_form_defaults() {
        let yaml = r#"
version: 1
name: Minimal
requirements:
  yield_lph: 1500
  taps: 10
  demand_per_tap_l: 40
  pumping_hours: 4
  installation_depth_m: 25
  tank_height_m: 6
  pipe_length_m: 30
  pipe_diameter_mm: 40
"#;
        let design: DesignFile = serde_yaml::from_str(yaml).unwrap();
        let req = &design.requirements;
        assert_eq!(req.pipe_material, PipeMaterial::Pvc);
        assert_eq!(req.safety_margin_pct, 15.0);
        assert_eq!(req.efficiency_pct, 65.0);
        assert_eq!(req.head_per_stage_m, 5.0);
        assert_eq!(req.pipe_diameter_mm, PipeDiameter::Mm40);
        assert_eq!(design.selection.criterion, SelectionCriterion::FlowRange);
        assert_eq!(design.catalog, None);
    }

    #[test]
    fn unknown_diameter_fails_to_parse() {
        let yaml = r#"
version: 1
name: Odd pipe
requirements:
  yield_lph: 1500
  taps: 10
  demand_per_tap_l: 40
  pumping_hours: 4
  installation_depth_m: 25
  tank_height_m: 6
  pipe_length_m: 30
  pipe_diameter_mm: 55
"#;
        let err = serde_yaml::from_str::<DesignFile>(yaml).unwrap_err();
        assert!(err.to_string().contains("55"), "{err}");
    }

    #[test]
    fn stage_criterion_parses() {
        let yaml = "criterion: stage_count\n";
        let sel: SelectionDef = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(sel.criterion, SelectionCriterion::StageCount);
    }

    #[test]
    fn requirements_convert_both_ways() {
        let req = SystemRequirements::default();
        let def = RequirementsDef::from(&req);
        assert_eq!(SystemRequirements::from(&def), req);
    }
}
