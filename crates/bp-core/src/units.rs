// bp-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, Velocity as UomVelocity, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

/// Litres per hour, the unit borewell yields and pump ranges are quoted in.
#[inline]
pub fn lph(v: f64) -> VolumeRate {
    m3ps(v / constants::LPH_PER_M3PS)
}

pub mod constants {
    /// Gravitational acceleration used by the sizing formulas.
    pub const G_MPS2: f64 = 9.81;

    /// Density of water, kg/m^3.
    pub const RHO_WATER: f64 = 1000.0;

    /// Litres per hour in one cubic metre per second.
    pub const LPH_PER_M3PS: f64 = 3_600_000.0;

    /// Mechanical horsepower in watts.
    pub const WATTS_PER_HP: f64 = 745.7;

    /// Mechanical horsepower in kilowatts.
    pub const KW_PER_HP: f64 = 0.7457;
}
