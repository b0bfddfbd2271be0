//! Sweep axis definition.
//!
//! A [`SweepAxis`] names the one input parameter that varies during a
//! sweep and owns the translation between display units (dollars, days,
//! percent) and model units (years, fractions). Grids are specified in
//! display units so they line up with what a slider or chart axis would
//! show; the conversion to model units happens exactly once per point.

use greekscope_models::analytical::BsmParams;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Days per year used for the expiry axis conversion.
const DAYS_PER_YEAR: f64 = 365.0;

/// The input parameter being swept.
///
/// One variant per field of [`BsmParams`]; the option type is never an
/// axis since it is categorical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SweepAxis {
    /// Spot price, in dollars.
    Spot,
    /// Strike price, in dollars.
    Strike,
    /// Time to expiry, in calendar days.
    Expiry,
    /// Risk-free rate, in percent.
    Rate,
    /// Volatility, in percent.
    Volatility,
    /// Continuous dividend yield, in percent.
    DividendYield,
}

impl SweepAxis {
    /// All six axes, in display order.
    pub const ALL: [SweepAxis; 6] = [
        SweepAxis::Spot,
        SweepAxis::Strike,
        SweepAxis::Expiry,
        SweepAxis::Rate,
        SweepAxis::Volatility,
        SweepAxis::DividendYield,
    ];

    /// Conventional display range `(lo, hi)` for this axis, in display
    /// units: 50-150 dollars for spot and strike, 1-365 days for
    /// expiry, 0-10 % for rate and dividend yield, 5-100 % for
    /// volatility.
    pub fn default_range(&self) -> (f64, f64) {
        match self {
            SweepAxis::Spot | SweepAxis::Strike => (50.0, 150.0),
            SweepAxis::Expiry => (1.0, 365.0),
            SweepAxis::Rate | SweepAxis::DividendYield => (0.0, 10.0),
            SweepAxis::Volatility => (5.0, 100.0),
        }
    }

    /// Axis label with units, suitable for a chart or table header.
    pub fn label(&self) -> &'static str {
        match self {
            SweepAxis::Spot => "Spot Price ($)",
            SweepAxis::Strike => "Strike Price ($)",
            SweepAxis::Expiry => "Time to Expiry (Days)",
            SweepAxis::Rate => "Risk-Free Rate (%)",
            SweepAxis::Volatility => "Volatility (%)",
            SweepAxis::DividendYield => "Dividend Yield (%)",
        }
    }

    /// Converts a display-unit value into model units (years for
    /// expiry, fractions for the percent axes, identity for prices).
    pub fn to_model(&self, display: f64) -> f64 {
        match self {
            SweepAxis::Spot | SweepAxis::Strike => display,
            SweepAxis::Expiry => display / DAYS_PER_YEAR,
            SweepAxis::Rate | SweepAxis::Volatility | SweepAxis::DividendYield => display / 100.0,
        }
    }

    /// Reads the current value of this axis from a parameter set, in
    /// display units (the vertical-marker position in a chart).
    pub fn current_display(&self, params: &BsmParams<f64>) -> f64 {
        match self {
            SweepAxis::Spot => params.spot,
            SweepAxis::Strike => params.strike,
            SweepAxis::Expiry => params.expiry * DAYS_PER_YEAR,
            SweepAxis::Rate => params.rate * 100.0,
            SweepAxis::Volatility => params.volatility * 100.0,
            SweepAxis::DividendYield => params.dividend_yield * 100.0,
        }
    }

    /// Returns a copy of `base` with this axis replaced by
    /// `model_value` (model units). Validation is deferred to
    /// [`BsmParams::new`] so an out-of-domain value surfaces as the
    /// kernel's own error.
    pub(crate) fn apply(
        &self,
        base: &BsmParams<f64>,
        model_value: f64,
    ) -> Result<BsmParams<f64>, greekscope_models::analytical::AnalyticalError> {
        let (mut spot, mut strike, mut expiry, mut rate, mut vol, mut div) = (
            base.spot,
            base.strike,
            base.expiry,
            base.rate,
            base.volatility,
            base.dividend_yield,
        );
        match self {
            SweepAxis::Spot => spot = model_value,
            SweepAxis::Strike => strike = model_value,
            SweepAxis::Expiry => expiry = model_value,
            SweepAxis::Rate => rate = model_value,
            SweepAxis::Volatility => vol = model_value,
            SweepAxis::DividendYield => div = model_value,
        }
        BsmParams::new(spot, strike, expiry, rate, vol, div)
    }
}

impl std::fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SweepAxis::Spot => "spot",
            SweepAxis::Strike => "strike",
            SweepAxis::Expiry => "expiry",
            SweepAxis::Rate => "rate",
            SweepAxis::Volatility => "volatility",
            SweepAxis::DividendYield => "dividend_yield",
        };
        write!(f, "{}", name)
    }
}
