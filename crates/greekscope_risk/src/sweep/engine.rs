//! Sweep execution.
//!
//! Evaluates price and Greeks at every grid point of a [`SweepAxis`],
//! holding all other parameters fixed. Each point is an independent
//! kernel evaluation; points whose substituted value falls outside the
//! kernel's domain are collected as [`SkippedPoint`]s with the kernel's
//! own error, never silently dropped or patched.

use greekscope_models::analytical::{
    AnalyticalError, BlackScholesMerton, BsmParams, GreeksResult, OptionType,
};

#[cfg(feature = "serde")]
use serde::Serialize;

use super::axis::SweepAxis;
use super::grid::linspace;

/// Result of one valid sweep point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SweepPoint {
    /// Swept value in display units (dollars, days, percent).
    pub display_value: f64,
    /// Swept value in model units (years, fractions).
    pub model_value: f64,
    /// Option price at this point.
    pub price: f64,
    /// Greeks at this point (default display convention).
    pub greeks: GreeksResult<f64>,
}

/// A grid point the kernel rejected, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPoint {
    /// Swept value in display units.
    pub display_value: f64,
    /// The kernel's validation error for this point.
    pub reason: AnalyticalError,
}

/// Complete result of a parameter sweep.
///
/// Valid and skipped points together cover the input grid; their order
/// follows the grid, but every point is a pure function of its own
/// swept value and the fixed base parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    /// The axis that was swept.
    pub axis: SweepAxis,
    /// The option type that was evaluated.
    pub option_type: OptionType,
    /// Successfully evaluated points.
    pub points: Vec<SweepPoint>,
    /// Grid points rejected by the kernel.
    pub skipped: Vec<SkippedPoint>,
}

impl SweepResult {
    /// Number of successfully evaluated points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no grid point could be evaluated.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sweeps an axis over its conventional display range with `n_points`
/// grid points.
///
/// # Examples
/// ```
/// use greekscope_models::analytical::{BsmParams, OptionType};
/// use greekscope_risk::{sweep, SweepAxis};
///
/// let base = BsmParams::new(100.0, 100.0, 30.0 / 365.0, 0.05, 0.2, 0.02).unwrap();
/// let result = sweep(OptionType::Call, &base, SweepAxis::Spot, 100);
///
/// assert_eq!(result.len(), 100);
/// assert!(result.skipped.is_empty());
/// ```
pub fn sweep(
    option_type: OptionType,
    base: &BsmParams<f64>,
    axis: SweepAxis,
    n_points: usize,
) -> SweepResult {
    let (lo, hi) = axis.default_range();
    sweep_over(option_type, base, axis, &linspace(lo, hi, n_points))
}

/// Sweeps an axis over an explicit display-unit grid.
///
/// Each grid value replaces the axis field of `base`; the kernel
/// validates the substituted parameter set and out-of-domain points
/// land in `skipped` with the field-identifying error.
pub fn sweep_over(
    option_type: OptionType,
    base: &BsmParams<f64>,
    axis: SweepAxis,
    display_grid: &[f64],
) -> SweepResult {
    let mut points = Vec::with_capacity(display_grid.len());
    let mut skipped = Vec::new();

    for &display_value in display_grid {
        let model_value = axis.to_model(display_value);
        match axis.apply(base, model_value) {
            Ok(params) => {
                let bsm = BlackScholesMerton::new(params);
                points.push(SweepPoint {
                    display_value,
                    model_value,
                    price: bsm.price(option_type),
                    greeks: bsm.greeks(option_type),
                });
            }
            Err(reason) => skipped.push(SkippedPoint {
                display_value,
                reason,
            }),
        }
    }

    SweepResult {
        axis,
        option_type,
        points,
        skipped,
    }
}
