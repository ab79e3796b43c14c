//! Rising main model: Hazen-Williams friction and pipe sizing reference data.

use std::fmt;

use crate::common::{check_finite, check_head};
use crate::error::{HydraulicsError, HydraulicsResult};
use crate::traits::HeadLossElement;
use bp_core::units::constants::G_MPS2;
use bp_core::units::{Area, Length, Velocity, VolumeRate, mm};
use serde::{Deserialize, Serialize};
use uom::si::area::square_meter;
use uom::si::length::meter;
use uom::si::velocity::meter_per_second;

/// Hazen-Williams coefficient applied to materials without a tabulated value.
pub const DEFAULT_HAZEN_WILLIAMS_C: f64 = 140.0;

/// Nominal pipe diameters offered for the pumping line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PipeDiameter {
    Mm32,
    Mm40,
    Mm50,
    Mm63,
    Mm75,
    Mm90,
}

impl PipeDiameter {
    pub const ALL: [PipeDiameter; 6] = [
        PipeDiameter::Mm32,
        PipeDiameter::Mm40,
        PipeDiameter::Mm50,
        PipeDiameter::Mm63,
        PipeDiameter::Mm75,
        PipeDiameter::Mm90,
    ];

    pub fn mm(self) -> u32 {
        match self {
            PipeDiameter::Mm32 => 32,
            PipeDiameter::Mm40 => 40,
            PipeDiameter::Mm50 => 50,
            PipeDiameter::Mm63 => 63,
            PipeDiameter::Mm75 => 75,
            PipeDiameter::Mm90 => 90,
        }
    }

    pub fn length(self) -> Length {
        mm(self.mm() as f64)
    }

    /// Reference sizing limits for this diameter.
    pub fn sizing(self) -> &'static PipeSizing {
        let idx = match self {
            PipeDiameter::Mm32 => 0,
            PipeDiameter::Mm40 => 1,
            PipeDiameter::Mm50 => 2,
            PipeDiameter::Mm63 => 3,
            PipeDiameter::Mm75 => 4,
            PipeDiameter::Mm90 => 5,
        };
        &PIPE_SIZING[idx]
    }
}

impl TryFrom<u32> for PipeDiameter {
    type Error = HydraulicsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|d| d.mm() == value)
            .ok_or(HydraulicsError::UnsupportedDiameter { mm: value })
    }
}

impl From<PipeDiameter> for u32 {
    fn from(d: PipeDiameter) -> Self {
        d.mm()
    }
}

impl fmt::Display for PipeDiameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.mm())
    }
}

/// Pipe material of the rising main.
///
/// Anything other than PVC or GI is kept by name and sized with
/// [`DEFAULT_HAZEN_WILLIAMS_C`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PipeMaterial {
    #[default]
    Pvc,
    /// Galvanised iron
    Gi,
    Other(String),
}

impl PipeMaterial {
    pub fn parse(name: &str) -> Self {
        let trimmed = name.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "PVC" => PipeMaterial::Pvc,
            "GI" => PipeMaterial::Gi,
            _ => PipeMaterial::Other(trimmed.to_string()),
        }
    }

    pub fn hazen_williams_c(&self) -> f64 {
        match self {
            PipeMaterial::Pvc => 140.0,
            PipeMaterial::Gi => 120.0,
            PipeMaterial::Other(_) => DEFAULT_HAZEN_WILLIAMS_C,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PipeMaterial::Pvc => "PVC",
            PipeMaterial::Gi => "GI",
            PipeMaterial::Other(name) => name,
        }
    }
}

impl From<String> for PipeMaterial {
    fn from(s: String) -> Self {
        PipeMaterial::parse(&s)
    }
}

impl From<PipeMaterial> for String {
    fn from(m: PipeMaterial) -> Self {
        m.name().to_string()
    }
}

impl fmt::Display for PipeMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recommended operating limits for one pipe size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipeSizing {
    pub diameter_mm: u32,
    pub max_flow_lph: f64,
    pub max_velocity_mps: f64,
}

/// Reference limits keyed by nominal diameter, same order as [`PipeDiameter::ALL`].
pub const PIPE_SIZING: [PipeSizing; 6] = [
    PipeSizing {
        diameter_mm: 32,
        max_flow_lph: 2000.0,
        max_velocity_mps: 0.7,
    },
    PipeSizing {
        diameter_mm: 40,
        max_flow_lph: 4000.0,
        max_velocity_mps: 0.9,
    },
    PipeSizing {
        diameter_mm: 50,
        max_flow_lph: 7000.0,
        max_velocity_mps: 1.0,
    },
    PipeSizing {
        diameter_mm: 63,
        max_flow_lph: 12000.0,
        max_velocity_mps: 1.1,
    },
    PipeSizing {
        diameter_mm: 75,
        max_flow_lph: 18000.0,
        max_velocity_mps: 1.2,
    },
    PipeSizing {
        diameter_mm: 90,
        max_flow_lph: 25000.0,
        max_velocity_mps: 1.3,
    },
];

/// Advisory outcome of comparing line velocity with the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityStatus {
    WithinLimits,
    ExceedsRecommended,
}

impl VelocityStatus {
    pub fn label(self) -> &'static str {
        match self {
            VelocityStatus::WithinLimits => "within limits",
            VelocityStatus::ExceedsRecommended => "exceeds recommended velocity",
        }
    }

    pub fn is_ok(self) -> bool {
        matches!(self, VelocityStatus::WithinLimits)
    }
}

impl fmt::Display for VelocityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pipe sizing annotation attached to a hydraulic result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipeCheck {
    pub sizing: PipeSizing,
    pub velocity_mps: f64,
    pub status: VelocityStatus,
}

impl PipeCheck {
    pub fn evaluate(diameter: PipeDiameter, velocity: Velocity) -> Self {
        let sizing = *diameter.sizing();
        let velocity_mps = velocity.get::<meter_per_second>();
        let status = if velocity_mps <= sizing.max_velocity_mps {
            VelocityStatus::WithinLimits
        } else {
            VelocityStatus::ExceedsRecommended
        };
        Self {
            sizing,
            velocity_mps,
            status,
        }
    }
}

/// Pumping line from the pump outlet to the tank.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    name: String,
    /// Run length
    pub length: Length,
    pub diameter: PipeDiameter,
    pub material: PipeMaterial,
}

impl Pipe {
    pub fn new(name: String, length: Length, diameter: PipeDiameter, material: PipeMaterial) -> Self {
        Self {
            name,
            length,
            diameter,
            material,
        }
    }

    /// Inner cross-section, π d² / 4.
    pub fn area(&self) -> Area {
        let d = self.diameter.length().get::<meter>();
        Area::new::<square_meter>(std::f64::consts::PI * d.powi(2) / 4.0)
    }

    /// Mean velocity of the given flow.
    pub fn velocity(&self, flow: VolumeRate) -> HydraulicsResult<Velocity> {
        let v: Velocity = flow / self.area();
        check_finite(v.get::<meter_per_second>(), "line velocity")?;
        Ok(v)
    }

    /// Kinetic head v² / 2g.
    pub fn velocity_head(&self, flow: VolumeRate) -> HydraulicsResult<Length> {
        let v = self.velocity(flow)?.get::<meter_per_second>();
        let h = check_head(v.powi(2) / (2.0 * G_MPS2), "velocity head")?;
        Ok(Length::new::<meter>(h))
    }

    pub fn check_sizing(&self, flow: VolumeRate) -> HydraulicsResult<PipeCheck> {
        Ok(PipeCheck::evaluate(self.diameter, self.velocity(flow)?))
    }
}

impl HeadLossElement for Pipe {
    fn name(&self) -> &str {
        &self.name
    }

    /// Hazen-Williams: h_f = 10.67 L Q^1.852 / (C^1.852 d^4.87), SI units.
    fn friction_head(&self, flow: VolumeRate) -> HydraulicsResult<Length> {
        use uom::si::volume_rate::cubic_meter_per_second;

        let q = flow.get::<cubic_meter_per_second>();
        let l = self.length.get::<meter>();
        let d = self.diameter.length().get::<meter>();
        let c = self.material.hazen_williams_c();

        let h = (10.67 * l * q.powf(1.852)) / (c.powf(1.852) * d.powf(4.87));
        let h = check_head(h, "friction loss")?;
        Ok(Length::new::<meter>(h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_core::units::{lph, m};

    fn pipe(diameter: PipeDiameter, material: PipeMaterial) -> Pipe {
        Pipe::new("rising main".into(), m(50.0), diameter, material)
    }

    #[test]
    fn diameter_from_mm() {
        assert_eq!(PipeDiameter::try_from(63), Ok(PipeDiameter::Mm63));
        assert_eq!(
            PipeDiameter::try_from(55),
            Err(HydraulicsError::UnsupportedDiameter { mm: 55 })
        );
    }

    #[test]
    fn sizing_table_follows_diameter_order() {
        for d in PipeDiameter::ALL {
            assert_eq!(d.sizing().diameter_mm, d.mm());
        }
        assert_eq!(PipeDiameter::Mm75.sizing().max_flow_lph, 18000.0);
        assert_eq!(PipeDiameter::Mm32.sizing().max_velocity_mps, 0.7);
    }

    #[test]
    fn material_coefficients() {
        assert_eq!(PipeMaterial::parse("pvc").hazen_williams_c(), 140.0);
        assert_eq!(PipeMaterial::parse(" GI ").hazen_williams_c(), 120.0);
        let hdpe = PipeMaterial::parse("HDPE");
        assert_eq!(hdpe, PipeMaterial::Other("HDPE".into()));
        assert_eq!(hdpe.hazen_williams_c(), DEFAULT_HAZEN_WILLIAMS_C);
    }

    #[test]
    fn velocity_at_the_table_limit_is_within_limits() {
        let limit = PipeDiameter::Mm32.sizing().max_velocity_mps;

        let at = PipeCheck::evaluate(
            PipeDiameter::Mm32,
            Velocity::new::<meter_per_second>(limit),
        );
        assert_eq!(at.status, VelocityStatus::WithinLimits);

        let above = PipeCheck::evaluate(
            PipeDiameter::Mm32,
            Velocity::new::<meter_per_second>(limit + 1e-9),
        );
        assert_eq!(above.status, VelocityStatus::ExceedsRecommended);
    }

    #[test]
    fn friction_matches_hazen_williams() {
        let flow = lph(1000.0 / 6.0);
        let h = pipe(PipeDiameter::Mm50, PipeMaterial::Pvc)
            .friction_head(flow)
            .unwrap()
            .get::<meter>();
        assert!((h - 1.1510999457e-3).abs() < 1e-9, "friction = {h}");
    }

    #[test]
    fn rougher_pipe_loses_more_head() {
        let flow = lph(1000.0 / 6.0);
        let pvc = pipe(PipeDiameter::Mm50, PipeMaterial::Pvc)
            .friction_head(flow)
            .unwrap();
        let gi = pipe(PipeDiameter::Mm50, PipeMaterial::Gi)
            .friction_head(flow)
            .unwrap();
        assert!(gi > pvc);
        assert!((gi.get::<meter>() - 1.5314347159e-3).abs() < 1e-9);
    }

    #[test]
    fn minor_losses_are_ten_percent() {
        let flow = lph(3000.0);
        let p = pipe(PipeDiameter::Mm40, PipeMaterial::Pvc);
        let major = p.friction_head(flow).unwrap().get::<meter>();
        let minor = p.minor_head(flow).unwrap().get::<meter>();
        assert!((minor - 0.1 * major).abs() < 1e-12);
    }

    #[test]
    fn zero_flow_has_no_losses() {
        let p = pipe(PipeDiameter::Mm90, PipeMaterial::Gi);
        let flow = lph(0.0);
        assert_eq!(p.friction_head(flow).unwrap().get::<meter>(), 0.0);
        assert_eq!(p.velocity_head(flow).unwrap().get::<meter>(), 0.0);
    }

    #[test]
    fn velocity_status_against_table() {
        let p = pipe(PipeDiameter::Mm32, PipeMaterial::Pvc);
        let slow = p.check_sizing(lph(500.0)).unwrap();
        assert_eq!(slow.status, VelocityStatus::WithinLimits);

        let fast = p.check_sizing(lph(3000.0)).unwrap();
        assert_eq!(fast.status, VelocityStatus::ExceedsRecommended);
        assert!((fast.velocity_mps - 1.0361649941).abs() < 1e-8);
        assert_eq!(fast.status.label(), "exceeds recommended velocity");
    }
}
