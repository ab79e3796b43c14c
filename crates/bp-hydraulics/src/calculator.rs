//! Demand → flow → losses → TDH → power → stages.

use crate::common::{check_finite, check_head};
use crate::error::{HydraulicsError, HydraulicsResult};
use crate::pipe::{PipeCheck, VelocityStatus};
use crate::requirements::SystemRequirements;
use crate::traits::HeadLossElement;
use bp_core::units::constants::{G_MPS2, KW_PER_HP, LPH_PER_M3PS, RHO_WATER, WATTS_PER_HP};
use bp_core::units::lph;
use serde::Serialize;
use tracing::{debug, warn};
use uom::si::length::meter;

/// Smallest motor rating the power tier is allowed to round to.
pub const MIN_POWER_TIER_HP: f64 = 0.5;

/// Bias added before rounding so the tier leans towards the larger motor.
pub const POWER_TIER_BIAS_HP: f64 = 0.4;

/// Synchronous speed of a standard 4" two-pole submersible motor at 50 Hz.
pub const RECOMMENDED_RPM: u32 = 2850;

/// Everything the calculator derives from one set of requirements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydraulicResult {
    pub demand_l: f64,
    pub flow_lph: f64,
    pub flow_m3ps: f64,
    pub static_head_m: f64,
    pub friction_loss_m: f64,
    pub minor_losses_m: f64,
    pub velocity_mps: f64,
    pub velocity_head_m: f64,
    pub safety_addition_m: f64,
    /// Total dynamic head including the safety margin
    pub tdh_m: f64,
    /// Shaft power before rounding
    pub hp: f64,
    /// Motor rating the selector searches for
    pub hp_rounded: f64,
    pub kw: f64,
    pub stages: u32,
    pub pipe_check: PipeCheck,
    pub recommended_rpm: u32,
}

impl HydraulicResult {
    /// Friction plus fitting losses in the pumping line.
    pub fn pipe_loss_m(&self) -> f64 {
        self.friction_loss_m + self.minor_losses_m
    }

    pub fn flow_lps(&self) -> f64 {
        self.flow_m3ps * 1000.0
    }

    /// TDH before the safety margin is applied.
    pub fn tdh_base_m(&self) -> f64 {
        self.tdh_m - self.safety_addition_m
    }

    pub fn velocity_status(&self) -> VelocityStatus {
        self.pipe_check.status
    }
}

/// Hourly flow needed to deliver the daily demand within the pumping window.
///
/// Fails with [`HydraulicsError::DemandExceedsYield`] when the borewell cannot
/// supply it.
pub fn required_flow_lph(req: &SystemRequirements) -> HydraulicsResult<(f64, f64)> {
    let demand_l = req.taps as f64 * req.demand_per_tap_l;
    let flow_lph = check_finite(demand_l / req.pumping_hours, "required flow")?;

    if flow_lph > req.yield_lph {
        return Err(HydraulicsError::DemandExceedsYield {
            flow_lph,
            yield_lph: req.yield_lph,
        });
    }

    Ok((demand_l, flow_lph))
}

/// Shaft horsepower to lift `flow_m3ps` against `tdh_m` at `efficiency_pct`.
pub fn shaft_power_hp(flow_m3ps: f64, tdh_m: f64, efficiency_pct: f64) -> f64 {
    let hydraulic_w = flow_m3ps * tdh_m * RHO_WATER * G_MPS2;
    hydraulic_w / (efficiency_pct / 100.0 * WATTS_PER_HP)
}

/// Motor tier: `max(0.5, round(hp + 0.4))`, exact halves going to the even tier.
pub fn power_tier_hp(hp: f64) -> f64 {
    (hp + POWER_TIER_BIAS_HP)
        .round_ties_even()
        .max(MIN_POWER_TIER_HP)
}

/// Nearest whole number of stages delivering `tdh_m`.
pub fn estimate_stages(tdh_m: f64, head_per_stage_m: f64) -> u32 {
    (tdh_m / head_per_stage_m + 0.5).floor() as u32
}

/// Size the pumping system described by `req`.
///
/// Pure: the same requirements always produce the same result.
pub fn calculate(req: &SystemRequirements) -> HydraulicsResult<HydraulicResult> {
    let (demand_l, flow_lph) = required_flow_lph(req)?;
    let flow_m3ps = flow_lph / LPH_PER_M3PS;
    let flow = lph(flow_lph);

    let pipe = req.pipe();
    let friction_loss_m = pipe.friction_head(flow)?.get::<meter>();
    let minor_losses_m = pipe.minor_head(flow)?.get::<meter>();
    let velocity_head_m = pipe.velocity_head(flow)?.get::<meter>();
    let pipe_check = pipe.check_sizing(flow)?;

    let static_head_m = check_head(req.static_head_m(), "static head")?;
    let tdh_base = static_head_m + friction_loss_m + minor_losses_m + velocity_head_m;
    let safety_addition_m = check_head(
        req.safety_margin_pct / 100.0 * tdh_base,
        "safety margin addition",
    )?;
    let tdh_m = tdh_base + safety_addition_m;

    let hp = check_finite(
        shaft_power_hp(flow_m3ps, tdh_m, req.efficiency_pct),
        "shaft power",
    )?;
    let hp_rounded = power_tier_hp(hp);
    let kw = hp * KW_PER_HP;
    let stages = estimate_stages(tdh_m, req.head_per_stage_m);

    debug!(
        line = pipe.name(),
        flow_lph,
        friction_loss_m,
        minor_losses_m,
        velocity_head_m,
        static_head_m,
        tdh_m,
        hp,
        hp_rounded,
        stages,
        "hydraulic sizing complete"
    );

    if !pipe_check.status.is_ok() {
        warn!(
            diameter = %req.pipe_diameter,
            velocity_mps = pipe_check.velocity_mps,
            limit_mps = pipe_check.sizing.max_velocity_mps,
            "line velocity exceeds recommended limit; consider a larger pipe"
        );
    }

    Ok(HydraulicResult {
        demand_l,
        flow_lph,
        flow_m3ps,
        static_head_m,
        friction_loss_m,
        minor_losses_m,
        velocity_mps: pipe_check.velocity_mps,
        velocity_head_m,
        safety_addition_m,
        tdh_m,
        hp,
        hp_rounded,
        kw,
        stages,
        pipe_check,
        recommended_rpm: RECOMMENDED_RPM,
    })
}
