//! Black-Scholes-Merton kernel for European options.
//!
//! Closed-form pricing of European calls and puts on an underlying
//! paying a continuous dividend yield.
//!
//! ## Mathematical Background
//!
//! With spot S, strike K, rate r, dividend yield q, volatility σ and
//! time to expiry T (years):
//!
//! d1 = (ln(S/K) + (r - q + σ²/2)·T) / (σ·√T)
//! d2 = d1 - σ·√T
//!
//! **Call Price**: C = S·e^(-qT)·N(d1) - K·e^(-rT)·N(d2)
//! **Put Price**: P = K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1)
//!
//! # Examples
//!
//! ```
//! use greekscope_models::analytical::{BlackScholesMerton, BsmParams, OptionType};
//!
//! let params = BsmParams::new(
//!     100.0,  // spot
//!     100.0,  // strike
//!     1.0,    // expiry (1 year)
//!     0.05,   // rate (5%)
//!     0.20,   // volatility (20%)
//!     0.0,    // dividend yield
//! ).unwrap();
//!
//! let bsm = BlackScholesMerton::new(params);
//! let call = bsm.price(OptionType::Call);
//! let put = bsm.price(OptionType::Put);
//!
//! // Put-call parity: C - P = S*exp(-qT) - K*exp(-rT)
//! let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
//! assert!(parity.abs() < 1e-10);
//! ```

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// European option type.
///
/// Exactly two variants; every formula in the kernel and the Greeks
/// engine dispatches on this with an exhaustive match, so there is no
/// fallback path for an unrecognised type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OptionType {
    /// Call option: right to buy at the strike.
    Call,
    /// Put option: right to sell at the strike.
    Put,
}

impl OptionType {
    /// Returns true for `Call`.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Validated parameters for the Black-Scholes-Merton model.
///
/// Construction is the single validation point: once a `BsmParams`
/// exists, every downstream formula is defined (no division by zero,
/// no logarithm of a non-positive number).
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BsmParams<T: Float> {
    /// Spot price of the underlying (S).
    pub spot: T,
    /// Strike price (K).
    pub strike: T,
    /// Time to expiry in years (T).
    pub expiry: T,
    /// Risk-free rate, continuous compounding (r).
    pub rate: T,
    /// Volatility of the underlying (σ).
    pub volatility: T,
    /// Continuous dividend yield (q).
    pub dividend_yield: T,
}

impl<T: Float> BsmParams<T> {
    /// Creates new validated Black-Scholes-Merton parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    /// * `rate` - Risk-free rate (can be negative)
    /// * `volatility` - Volatility (must be positive)
    /// * `dividend_yield` - Continuous dividend yield (must be non-negative)
    ///
    /// # Errors
    ///
    /// Returns the `AnalyticalError` variant naming the first offending
    /// field. `expiry = 0` is rejected here rather than special-cased
    /// to intrinsic value; callers sweeping towards expiry skip the
    /// degenerate point instead.
    ///
    /// # Examples
    /// ```
    /// use greekscope_models::analytical::BsmParams;
    ///
    /// assert!(BsmParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, 0.02).is_ok());
    ///
    /// // Expired option: d1/d2 undefined
    /// assert!(BsmParams::new(100.0_f64, 100.0, 0.0, 0.05, 0.2, 0.02).is_err());
    ///
    /// // Negative rates are fine
    /// assert!(BsmParams::new(100.0_f64, 100.0, 1.0, -0.01, 0.2, 0.0).is_ok());
    /// ```
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
    ) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }
        if strike <= zero {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(0.0),
            });
        }
        if expiry <= zero {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(0.0),
            });
        }
        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }
        if dividend_yield < zero {
            return Err(AnalyticalError::InvalidDividendYield {
                dividend_yield: dividend_yield.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            dividend_yield,
        })
    }

    /// Returns the forward price F = S·e^((r-q)·T).
    #[inline]
    pub fn forward(&self) -> T {
        let drift = (self.rate - self.dividend_yield) * self.expiry;
        self.spot * drift.exp()
    }
}

/// The d1/d2 pair of the Black-Scholes formula.
///
/// Always derived from a validated [`BsmParams`]; there is no public
/// constructor, so `d2 = d1 - σ√T` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D1D2<T: Float> {
    d1: T,
    d2: T,
}

impl<T: Float> D1D2<T> {
    /// Derives d1 and d2 from validated parameters.
    ///
    /// d1 = (ln(S/K) + (r - q + σ²/2)·T) / (σ·√T)
    /// d2 = d1 - σ·√T
    pub(crate) fn from_params(params: &BsmParams<T>) -> Self {
        let half = T::from(0.5).unwrap();

        let sqrt_t = params.expiry.sqrt();
        let vol_sqrt_t = params.volatility * sqrt_t;

        let log_moneyness = (params.spot / params.strike).ln();
        let drift = (params.rate - params.dividend_yield
            + half * params.volatility * params.volatility)
            * params.expiry;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        Self { d1, d2 }
    }

    /// Returns d1.
    #[inline]
    pub fn d1(&self) -> T {
        self.d1
    }

    /// Returns d2.
    #[inline]
    pub fn d2(&self) -> T {
        self.d2
    }
}

/// Black-Scholes-Merton kernel.
///
/// Pre-computes d1/d2, √T and the two discount factors once per
/// parameter set; both the price and every Greek reuse them, so call
/// and put sensitivities are consistent by construction.
///
/// Evaluation is pure and reads only the pre-computed state, so a
/// kernel may be shared freely across threads.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
#[derive(Debug, Clone)]
pub struct BlackScholesMerton<T: Float> {
    params: BsmParams<T>,
    d1d2: D1D2<T>,
    /// √T
    sqrt_t: T,
    /// e^(-r·T)
    df_rate: T,
    /// e^(-q·T)
    df_dividend: T,
}

impl<T: Float> BlackScholesMerton<T> {
    /// Creates a new kernel from validated parameters.
    pub fn new(params: BsmParams<T>) -> Self {
        let d1d2 = D1D2::from_params(&params);
        let sqrt_t = params.expiry.sqrt();
        let df_rate = (-params.rate * params.expiry).exp();
        let df_dividend = (-params.dividend_yield * params.expiry).exp();

        Self {
            params,
            d1d2,
            sqrt_t,
            df_rate,
            df_dividend,
        }
    }

    /// Returns a reference to the parameters.
    #[inline]
    pub fn params(&self) -> &BsmParams<T> {
        &self.params
    }

    /// Returns the derived d1/d2 pair.
    #[inline]
    pub fn d1d2(&self) -> D1D2<T> {
        self.d1d2
    }

    /// Returns d1.
    #[inline]
    pub fn d1(&self) -> T {
        self.d1d2.d1()
    }

    /// Returns d2.
    #[inline]
    pub fn d2(&self) -> T {
        self.d1d2.d2()
    }

    /// Returns √T.
    #[inline]
    pub(crate) fn sqrt_t(&self) -> T {
        self.sqrt_t
    }

    /// Returns the rate discount factor e^(-rT).
    #[inline]
    pub fn df_rate(&self) -> T {
        self.df_rate
    }

    /// Returns the dividend discount factor e^(-qT).
    #[inline]
    pub fn df_dividend(&self) -> T {
        self.df_dividend
    }

    /// Computes the risk-neutral option price.
    ///
    /// - Call: S·e^(-qT)·N(d1) - K·e^(-rT)·N(d2)
    /// - Put: K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1)
    ///
    /// Non-negative for all valid parameters.
    ///
    /// # Examples
    /// ```
    /// use greekscope_models::analytical::{BlackScholesMerton, BsmParams, OptionType};
    ///
    /// let params = BsmParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
    /// let bsm = BlackScholesMerton::new(params);
    ///
    /// // Known reference: S=K=100, r=5%, σ=20%, T=1, q=0
    /// let call = bsm.price(OptionType::Call);
    /// assert!((call - 10.4506).abs() < 1e-3);
    /// ```
    pub fn price(&self, option_type: OptionType) -> T {
        let d1 = self.d1d2.d1();
        let d2 = self.d1d2.d2();

        match option_type {
            OptionType::Call => {
                self.params.spot * self.df_dividend * norm_cdf(d1)
                    - self.params.strike * self.df_rate * norm_cdf(d2)
            }
            OptionType::Put => {
                self.params.strike * self.df_rate * norm_cdf(-d2)
                    - self.params.spot * self.df_dividend * norm_cdf(-d1)
            }
        }
    }
}
