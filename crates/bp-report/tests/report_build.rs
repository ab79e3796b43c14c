use bp_catalog::{MatchKind, MatchResult, PumpRecord, SelectionCriterion};
use bp_design::DesignFile;
use bp_hydraulics::{PipeDiameter, PipeMaterial, SystemRequirements, calculate};
use bp_report::*;

fn pump(model: &str, hp: f64, flow: (f64, f64), head: (f64, f64), stages: u32) -> PumpRecord {
    PumpRecord {
        model: model.to_string(),
        phase: "Single".to_string(),
        hp,
        min_flow_lph: flow.0,
        max_flow_lph: flow.1,
        min_head_m: head.0,
        max_head_m: head.1,
        stages: Some(stages),
    }
}

fn deep_bore_design() -> DesignFile {
    let mut design = DesignFile::template("Deep bore");
    let req = &mut design.requirements;
    req.yield_lph = 6000.0;
    req.taps = 60;
    req.demand_per_tap_l = 100.0;
    req.pumping_hours = 2.0;
    req.installation_depth_m = 60.0;
    req.tank_height_m = 12.0;
    req.pipe_length_m = 120.0;
    req.pipe_diameter_mm = PipeDiameter::Mm32;
    req.pipe_material = PipeMaterial::Gi;
    req.safety_margin_pct = 20.0;
    req.efficiency_pct = 50.0;
    req.head_per_stage_m = 6.0;
    design
}

#[test]
fn default_scheme_report() {
    let design = DesignFile::template("Village");
    let hydraulics = calculate(&SystemRequirements::from(&design.requirements)).unwrap();
    let selection = MatchResult {
        pump: pump("V4-0510", 0.5, (100.0, 1800.0), (20.0, 55.0), 10),
        kind: MatchKind::ExactMatch,
    };

    let report = SizingReport::build(&design, &hydraulics, &selection);

    assert_eq!(report.design_name, "Village");
    assert_eq!(report.inputs.len(), 12);
    assert_eq!(report.inputs[0].label, "Borewell Yield (LPH)");
    assert_eq!(report.inputs[0].value, "2,000");
    assert_eq!(report.result("Total Daily Demand (liters)"), Some("1,000"));
    assert_eq!(report.result("Required Flow Rate"), Some("167 LPH (0.05 L/s)"));
    assert_eq!(report.result("Total Dynamic Head (TDH)"), Some("46.0 m"));
    assert_eq!(
        report.result("Required Power"),
        Some("0.0 HP → Use 0.5 HP (0.0 kW)")
    );
    assert_eq!(report.result("Number of Stages"), Some("9"));
    assert_eq!(report.result("Pipe Sizing Status"), Some("within limits"));
    assert_eq!(
        report.result("Recommended RPM"),
        Some("2850 (for standard 4\" pumps)")
    );

    assert!(report.pump.tdh_in_range);
    assert_eq!(report.pump.head_range, "20 - 55 m");
    assert_eq!(
        report.recommendations[0],
        "Recommended pump: V4-0510 (0.5 HP, 10 stages)"
    );
    assert_eq!(report.recommendations[2], "TDH falls within range: Yes");
    assert!(report.recommendations[3].contains("exact HP"));
    assert!(!report.recommendations.iter().any(|r| r == HIGH_VELOCITY_WARNING));
}

#[test]
fn high_velocity_scheme_warns() {
    let design = deep_bore_design();
    let hydraulics = calculate(&SystemRequirements::from(&design.requirements)).unwrap();
    let selection = MatchResult {
        pump: pump("V4-2022", 2.0, (800.0, 3600.0), (60.0, 130.0), 22),
        kind: MatchKind::ExactMatch,
    };

    let report = SizingReport::build(&design, &hydraulics, &selection);

    assert_eq!(report.result("Required Flow Rate"), Some("3,000 LPH (0.83 L/s)"));
    assert_eq!(report.result("Total Dynamic Head (TDH)"), Some("95.5 m"));
    assert_eq!(
        report.result("Required Power"),
        Some("2.1 HP → Use 2 HP (1.6 kW)")
    );
    assert_eq!(report.result("Flow Velocity (m/s)"), Some("1.04"));
    assert_eq!(report.result("Selected Pipe"), Some("32mm GI"));
    assert_eq!(
        report.result("Pipe Sizing Status"),
        Some("exceeds recommended velocity")
    );
    assert_eq!(
        report.recommendations.last().map(String::as_str),
        Some(HIGH_VELOCITY_WARNING)
    );
}

#[test]
fn out_of_range_last_resort_is_flagged() {
    let design = deep_bore_design();
    let hydraulics = calculate(&SystemRequirements::from(&design.requirements)).unwrap();
    let selection = MatchResult {
        pump: pump("Tiny", 0.5, (100.0, 200.0), (5.0, 10.0), 3),
        kind: MatchKind::LastResort,
    };

    let report = SizingReport::build(&design, &hydraulics, &selection);

    assert!(!report.pump.tdh_in_range);
    assert_eq!(report.recommendations[2], "TDH falls within range: No");
    assert!(report.recommendations[3].contains("highest capacity"));
}

#[test]
fn report_id_ignores_timestamp() {
    let design = DesignFile::template("Village");
    let hydraulics = calculate(&SystemRequirements::from(&design.requirements)).unwrap();
    let selection = MatchResult {
        pump: pump("V4-0510", 0.5, (100.0, 1800.0), (20.0, 55.0), 10),
        kind: MatchKind::ExactMatch,
    };

    let a = SizingReport::build_at(&design, &hydraulics, &selection, "a".to_string());
    let b = SizingReport::build_at(&design, &hydraulics, &selection, "b".to_string());
    assert_eq!(a.report_id, b.report_id);
    assert_eq!(a.criterion, SelectionCriterion::FlowRange);
}

#[test]
fn renders_all_formats() {
    let design = DesignFile::template("Village");
    let hydraulics = calculate(&SystemRequirements::from(&design.requirements)).unwrap();
    let selection = MatchResult {
        pump: pump("V4-0510", 0.5, (100.0, 1800.0), (20.0, 55.0), 10),
        kind: MatchKind::ExactMatch,
    };
    let report = SizingReport::build(&design, &hydraulics, &selection);

    let text = render(&report, ReportFormat::Text).unwrap();
    assert!(text.starts_with("Submersible Pump Selection Report"));
    assert!(text.contains("Input Parameters:"));
    assert!(text.contains("  Pipe Material: PVC"));
    assert!(text.contains("- Recommended pump: V4-0510"));

    let json = render(&report, ReportFormat::Json).unwrap();
    let back: SizingReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);

    let yaml = render(&report, ReportFormat::Yaml).unwrap();
    assert!(yaml.contains("match_kind: exact_match"));
}
