//! Parameter sweep infrastructure.
//!
//! Provides:
//! - [`SweepAxis`]: which input parameter varies, with its display
//!   units and conventional range
//! - [`linspace`]: evenly spaced grid generation
//! - [`SweepResult`] and friends: per-point evaluation results with
//!   explicit skip reporting for out-of-domain points

pub mod axis;
pub mod engine;
pub mod grid;

pub use axis::SweepAxis;
pub use engine::{sweep, sweep_over, SkippedPoint, SweepPoint, SweepResult};
pub use grid::linspace;
