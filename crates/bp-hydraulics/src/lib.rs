//! bp-hydraulics: hydraulic sizing of a submersible borewell pump.
//!
//! Turns [`SystemRequirements`] into a [`HydraulicResult`]:
//! - required flow from daily demand and pumping window (checked against yield)
//! - Hazen-Williams friction plus a fixed fitting allowance in the pumping line
//! - velocity head and the pipe sizing advisory
//! - total dynamic head with safety margin
//! - shaft power, motor tier and stage count
//!
//! # Example
//!
//! ```
//! use bp_hydraulics::{SystemRequirements, calculate};
//!
//! let result = calculate(&SystemRequirements::default()).unwrap();
//! assert_eq!(result.demand_l, 1000.0);
//! assert!(result.tdh_m >= result.static_head_m);
//! ```

pub mod calculator;
pub mod common;
pub mod error;
pub mod pipe;
pub mod requirements;
pub mod traits;

// Re-exports
pub use calculator::{HydraulicResult, calculate};
pub use error::{HydraulicsError, HydraulicsResult};
pub use pipe::{PIPE_SIZING, Pipe, PipeCheck, PipeDiameter, PipeMaterial, PipeSizing, VelocityStatus};
pub use requirements::SystemRequirements;
pub use traits::HeadLossElement;
