//! Sizing request: what the water system needs and how the line is laid out.

use crate::pipe::{Pipe, PipeDiameter, PipeMaterial};
use bp_core::units::m;
use serde::Serialize;

/// Immutable description of one borewell pumping system.
///
/// Values are expected to be range-checked by whoever builds this (the design
/// file validator in practice); the calculator only enforces the yield limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemRequirements {
    /// Sustainable borewell yield, litres per hour
    pub yield_lph: f64,
    /// Number of tap connections served
    pub taps: u32,
    /// Daily demand per tap, litres
    pub demand_per_tap_l: f64,
    /// Hours per day available for pumping
    pub pumping_hours: f64,
    /// Pump setting below ground, metres
    pub installation_depth_m: f64,
    /// Tank inlet height above ground, metres
    pub tank_height_m: f64,
    /// Pumping line run length, metres
    pub pipe_length_m: f64,
    pub pipe_diameter: PipeDiameter,
    pub pipe_material: PipeMaterial,
    /// Head margin added on top of the computed TDH, percent
    pub safety_margin_pct: f64,
    /// Pump-set (wire-to-water) efficiency, percent
    pub efficiency_pct: f64,
    /// Head developed by one impeller stage, metres
    pub head_per_stage_m: f64,
}

impl SystemRequirements {
    /// The pumping line described by these requirements.
    pub fn pipe(&self) -> Pipe {
        Pipe::new(
            "pumping line".to_string(),
            m(self.pipe_length_m),
            self.pipe_diameter,
            self.pipe_material.clone(),
        )
    }

    /// Lift from the pump setting to the tank inlet.
    pub fn static_head_m(&self) -> f64 {
        self.installation_depth_m + self.tank_height_m
    }
}

impl Default for SystemRequirements {
    /// A small village scheme: 20 taps at 50 L/day pumped in 6 hours.
    fn default() -> Self {
        Self {
            yield_lph: 2000.0,
            taps: 20,
            demand_per_tap_l: 50.0,
            pumping_hours: 6.0,
            installation_depth_m: 30.0,
            tank_height_m: 10.0,
            pipe_length_m: 50.0,
            pipe_diameter: PipeDiameter::Mm50,
            pipe_material: PipeMaterial::Pvc,
            safety_margin_pct: 15.0,
            efficiency_pct: 65.0,
            head_per_stage_m: 5.0,
        }
    }
}
