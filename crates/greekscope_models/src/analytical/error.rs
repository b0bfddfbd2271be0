//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Validation errors identifying the offending field

use thiserror::Error;

/// Analytical pricing errors.
///
/// Each variant names the parameter that failed validation and carries
/// the rejected value, so callers can report or skip the offending
/// input without re-deriving which field was at fault.
///
/// # Variants
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidStrike`: Non-positive strike price
/// - `InvalidExpiry`: Non-positive time to expiry (d1/d2 undefined)
/// - `InvalidVolatility`: Non-positive volatility (d1/d2 undefined)
/// - `InvalidDividendYield`: Negative dividend yield
///
/// # Examples
/// ```
/// use greekscope_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid time to expiry (non-positive, d1/d2 undefined).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value in years
        expiry: f64,
    },

    /// Invalid volatility (non-positive, d1/d2 undefined).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid dividend yield (negative).
    #[error("Invalid dividend yield: q = {dividend_yield}")]
    InvalidDividendYield {
        /// The invalid dividend yield value
        dividend_yield: f64,
    },
}

impl AnalyticalError {
    /// Returns the name of the parameter that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            AnalyticalError::InvalidSpot { .. } => "spot",
            AnalyticalError::InvalidStrike { .. } => "strike",
            AnalyticalError::InvalidExpiry { .. } => "expiry",
            AnalyticalError::InvalidVolatility { .. } => "volatility",
            AnalyticalError::InvalidDividendYield { .. } => "dividend_yield",
        }
    }
}
