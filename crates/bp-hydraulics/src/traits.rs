//! Core traits for line elements.

use crate::error::HydraulicsResult;
use bp_core::units::{Length, VolumeRate};

/// A line element that dissipates head when water flows through it.
///
/// Elements are deterministic functions of their geometry and the flow rate,
/// so repeated calls with the same flow give identical losses.
pub trait HeadLossElement {
    /// Element name for logs and reports.
    fn name(&self) -> &str;

    /// Major (wall friction) head loss at the given volumetric flow.
    fn friction_head(&self, flow: VolumeRate) -> HydraulicsResult<Length>;

    /// Fraction of the friction loss added for fittings, bends and valves.
    ///
    /// Default is the 10% allowance used for borewell rising mains.
    fn fitting_allowance(&self) -> f64 {
        0.10
    }

    /// Minor (fitting) head loss at the given flow.
    fn minor_head(&self, flow: VolumeRate) -> HydraulicsResult<Length> {
        Ok(self.friction_head(flow)? * self.fitting_allowance())
    }
}
