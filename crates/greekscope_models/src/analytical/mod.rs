//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes-Merton evaluator:
//! - `BlackScholesMerton` kernel (d1/d2 and risk-neutral prices)
//! - Analytical Greeks (Delta, Gamma, Theta, Vega, Rho) with display
//!   scaling conventions
//! - Standard normal distribution helpers
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy
//! - **Guarded domain**: Out-of-range parameters are rejected at
//!   construction instead of propagating NaN

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{BlackScholesMerton, BsmParams, D1D2, OptionType};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::{GreeksConvention, GreeksResult, PercentScale, ThetaScale};
