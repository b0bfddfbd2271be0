//! Analytical Greeks for the Black-Scholes-Merton kernel.
//!
//! Derives the five standard sensitivities from the kernel's d1/d2,
//! with the dividend adjustment e^(-qT) carried through every formula:
//!
//! | Greek | Call | Put |
//! |-------|------|-----|
//! | Delta | e^(-qT)·N(d1) | -e^(-qT)·N(-d1) |
//! | Gamma | e^(-qT)·φ(d1) / (S·σ·√T) | same as call |
//! | Theta | -S·σ·e^(-qT)·φ(d1)/(2√T) - r·K·e^(-rT)·N(d2) + q·S·e^(-qT)·N(d1) | -S·σ·e^(-qT)·φ(d1)/(2√T) + r·K·e^(-rT)·N(-d2) - q·S·e^(-qT)·N(-d1) |
//! | Vega  | S·e^(-qT)·√T·φ(d1) | same as call |
//! | Rho   | K·T·e^(-rT)·N(d2) | -K·T·e^(-rT)·N(-d2) |
//!
//! ## Display scaling
//!
//! The raw analytic derivatives are per year (theta) and per unit of
//! volatility/rate (vega, rho). The default [`GreeksConvention`] rescales
//! them to the numbers a trader reads off a slider: theta per calendar
//! day (÷365), vega and rho per percentage point (÷100). The raw values
//! remain available through the non-default convention.

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::black_scholes::{BlackScholesMerton, OptionType};
use super::distributions::{norm_cdf, norm_pdf};

/// Scaling convention for theta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ThetaScale {
    /// Value decay per calendar day (annual theta ÷ 365).
    #[default]
    PerDay,
    /// Raw annualised theta.
    PerYear,
}

/// Scaling convention for vega and rho.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PercentScale {
    /// Sensitivity per 1 percentage point move (raw ÷ 100).
    #[default]
    PerPercentagePoint,
    /// Raw sensitivity per unit move (1.00 = 100%).
    PerUnit,
}

/// Display scaling applied to the raw analytic Greeks.
///
/// The default matches the conventional slider units: per-day theta,
/// per-percentage-point vega and rho. Delta and gamma are never
/// rescaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GreeksConvention {
    /// Scaling applied to theta.
    pub theta: ThetaScale,
    /// Scaling applied to vega and rho.
    pub percent: PercentScale,
}

impl GreeksConvention {
    /// Raw analytic derivatives: per-year theta, per-unit vega and rho.
    pub fn raw() -> Self {
        Self {
            theta: ThetaScale::PerYear,
            percent: PercentScale::PerUnit,
        }
    }
}

/// The five standard sensitivities of a European option.
///
/// Created fresh per evaluation, never mutated. Field order matches the
/// conventional reporting order: Delta, Gamma, Theta, Vega, Rho.
///
/// # Examples
/// ```
/// use greekscope_models::analytical::{BlackScholesMerton, BsmParams, OptionType};
///
/// let params = BsmParams::new(100.0_f64, 100.0, 0.5, 0.05, 0.2, 0.0).unwrap();
/// let greeks = BlackScholesMerton::new(params).greeks(OptionType::Call);
///
/// assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
/// assert!(greeks.gamma >= 0.0);
/// assert!(greeks.vega >= 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GreeksResult<T: Float> {
    /// ∂V/∂S - sensitivity to a $1 spot move.
    pub delta: T,
    /// ∂²V/∂S² - convexity with respect to spot.
    pub gamma: T,
    /// ∂V/∂t - time decay, scaled per the convention.
    pub theta: T,
    /// ∂V/∂σ - volatility sensitivity, scaled per the convention.
    pub vega: T,
    /// ∂V/∂r - rate sensitivity, scaled per the convention.
    pub rho: T,
}

impl<T: Float> BlackScholesMerton<T> {
    /// Computes all five Greeks under the default display convention
    /// (per-day theta, per-percentage-point vega and rho).
    pub fn greeks(&self, option_type: OptionType) -> GreeksResult<T> {
        self.greeks_with(option_type, GreeksConvention::default())
    }

    /// Computes all five Greeks under an explicit scaling convention.
    ///
    /// The shared subexpressions (φ(d1), e^(-qT), e^(-rT), √T) are
    /// evaluated once and reused across every formula, so call and put
    /// sensitivities stay mutually consistent.
    pub fn greeks_with(
        &self,
        option_type: OptionType,
        convention: GreeksConvention,
    ) -> GreeksResult<T> {
        let params = self.params();
        let d1 = self.d1();
        let d2 = self.d2();
        let sqrt_t = self.sqrt_t();
        let df_div = self.df_dividend();
        let df_rate = self.df_rate();
        let pdf_d1 = norm_pdf(d1);
        let two = T::from(2.0).unwrap();

        // Gamma and vega are type-independent
        let gamma = df_div * pdf_d1 / (params.spot * params.volatility * sqrt_t);
        let vega = params.spot * df_div * sqrt_t * pdf_d1;

        // Common theta term: -S·σ·e^(-qT)·φ(d1) / (2√T)
        let theta_decay = -(params.spot * params.volatility * df_div * pdf_d1) / (two * sqrt_t);

        let (delta, theta, rho) = match option_type {
            OptionType::Call => {
                let nd1 = norm_cdf(d1);
                let nd2 = norm_cdf(d2);

                let delta = df_div * nd1;
                let theta = theta_decay - params.rate * params.strike * df_rate * nd2
                    + params.dividend_yield * params.spot * df_div * nd1;
                let rho = params.strike * params.expiry * df_rate * nd2;

                (delta, theta, rho)
            }
            OptionType::Put => {
                let nd1_neg = norm_cdf(-d1);
                let nd2_neg = norm_cdf(-d2);

                let delta = -df_div * nd1_neg;
                let theta = theta_decay + params.rate * params.strike * df_rate * nd2_neg
                    - params.dividend_yield * params.spot * df_div * nd1_neg;
                let rho = -params.strike * params.expiry * df_rate * nd2_neg;

                (delta, theta, rho)
            }
        };

        let theta = match convention.theta {
            ThetaScale::PerDay => theta / T::from(365.0).unwrap(),
            ThetaScale::PerYear => theta,
        };
        let (vega, rho) = match convention.percent {
            PercentScale::PerPercentagePoint => {
                let hundred = T::from(100.0).unwrap();
                (vega / hundred, rho / hundred)
            }
            PercentScale::PerUnit => (vega, rho),
        };

        GreeksResult {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::BsmParams;
    use approx::assert_relative_eq;

    fn kernel(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        vol: f64,
        div: f64,
    ) -> BlackScholesMerton<f64> {
        BlackScholesMerton::new(BsmParams::new(spot, strike, expiry, rate, vol, div).unwrap())
    }

    fn golden() -> BlackScholesMerton<f64> {
        // S=100, K=100, T=30/365, r=0.05, σ=0.2, q=0.02
        kernel(100.0, 100.0, 30.0 / 365.0, 0.05, 0.2, 0.02)
    }

    // ==========================================================
    // Golden scenario tests
    // ==========================================================

    #[test]
    fn test_golden_call_greeks() {
        let greeks = golden().greeks(OptionType::Call);
        assert_relative_eq!(greeks.delta, 0.527701, epsilon = 1e-4);
        assert_relative_eq!(greeks.gamma, 0.069285, epsilon = 1e-4);
        assert_relative_eq!(greeks.theta, -0.041972, epsilon = 1e-4);
        assert_relative_eq!(greeks.vega, 0.113892, epsilon = 1e-4);
        assert_relative_eq!(greeks.rho, 0.041395, epsilon = 1e-4);
    }

    #[test]
    fn test_golden_put_greeks() {
        let greeks = golden().greeks(OptionType::Put);
        assert_relative_eq!(greeks.delta, -0.470657, epsilon = 1e-4);
        assert_relative_eq!(greeks.gamma, 0.069285, epsilon = 1e-4);
        assert_relative_eq!(greeks.theta, -0.033800, epsilon = 1e-4);
        assert_relative_eq!(greeks.vega, 0.113892, epsilon = 1e-4);
        assert_relative_eq!(greeks.rho, -0.040459, epsilon = 1e-4);
    }

    // ==========================================================
    // Structural identities
    // ==========================================================

    #[test]
    fn test_gamma_identical_call_put() {
        for strike in [80.0, 100.0, 120.0] {
            let bsm = kernel(100.0, strike, 0.5, 0.04, 0.25, 0.02);
            let call = bsm.greeks(OptionType::Call);
            let put = bsm.greeks(OptionType::Put);
            assert_eq!(call.gamma, put.gamma);
            assert_eq!(call.vega, put.vega);
        }
    }

    #[test]
    fn test_delta_bounds_dividend_adjusted() {
        // Call delta ∈ [0, e^(-qT)], put delta ∈ [-e^(-qT), 0]
        let q = 0.05;
        for strike in [60.0, 80.0, 100.0, 120.0, 140.0] {
            let bsm = kernel(100.0, strike, 1.0, 0.05, 0.2, q);
            let bound = (-q * 1.0_f64).exp();

            let call_delta = bsm.greeks(OptionType::Call).delta;
            assert!(call_delta >= 0.0 && call_delta <= bound);

            let put_delta = bsm.greeks(OptionType::Put).delta;
            assert!(put_delta <= 0.0 && put_delta >= -bound);
        }
    }

    #[test]
    fn test_delta_call_put_relationship() {
        // Call delta - put delta = e^(-qT)
        let bsm = kernel(100.0, 100.0, 1.0, 0.05, 0.2, 0.03);
        let call = bsm.greeks(OptionType::Call).delta;
        let put = bsm.greeks(OptionType::Put).delta;
        assert_relative_eq!(call - put, (-0.03_f64).exp(), epsilon = 1e-10);
    }

    #[test]
    fn test_gamma_vega_non_negative() {
        for spot in [60.0, 100.0, 140.0] {
            for vol in [0.05, 0.3, 0.9] {
                let bsm = kernel(spot, 100.0, 0.25, 0.02, vol, 0.04);
                for option_type in [OptionType::Call, OptionType::Put] {
                    let greeks = bsm.greeks(option_type);
                    assert!(greeks.gamma >= 0.0);
                    assert!(greeks.vega >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_rho_signs() {
        let bsm = kernel(100.0, 100.0, 1.0, 0.05, 0.2, 0.02);
        assert!(bsm.greeks(OptionType::Call).rho > 0.0);
        assert!(bsm.greeks(OptionType::Put).rho < 0.0);
    }

    #[test]
    fn test_theta_atm_negative() {
        let bsm = kernel(100.0, 100.0, 0.5, 0.05, 0.2, 0.02);
        assert!(bsm.greeks(OptionType::Call).theta < 0.0);
        assert!(bsm.greeks(OptionType::Put).theta < 0.0);
    }

    // ==========================================================
    // Scaling convention tests
    // ==========================================================

    #[test]
    fn test_scaling_round_trip() {
        let bsm = golden();
        for option_type in [OptionType::Call, OptionType::Put] {
            let scaled = bsm.greeks(option_type);
            let raw = bsm.greeks_with(option_type, GreeksConvention::raw());

            assert_relative_eq!(scaled.theta * 365.0, raw.theta, epsilon = 1e-10);
            assert_relative_eq!(scaled.vega * 100.0, raw.vega, epsilon = 1e-10);
            assert_relative_eq!(scaled.rho * 100.0, raw.rho, epsilon = 1e-10);

            // Delta and gamma are never rescaled
            assert_eq!(scaled.delta, raw.delta);
            assert_eq!(scaled.gamma, raw.gamma);
        }
    }

    #[test]
    fn test_default_convention() {
        let convention = GreeksConvention::default();
        assert_eq!(convention.theta, ThetaScale::PerDay);
        assert_eq!(convention.percent, PercentScale::PerPercentagePoint);
    }

    #[test]
    fn test_mixed_convention() {
        let bsm = golden();
        let convention = GreeksConvention {
            theta: ThetaScale::PerYear,
            percent: PercentScale::PerPercentagePoint,
        };
        let greeks = bsm.greeks_with(OptionType::Call, convention);
        let scaled = bsm.greeks(OptionType::Call);
        assert_relative_eq!(greeks.theta, scaled.theta * 365.0, epsilon = 1e-10);
        assert_relative_eq!(greeks.vega, scaled.vega, epsilon = 1e-12);
    }

    // ==========================================================
    // Finite-difference cross-checks (raw convention)
    // ==========================================================

    #[test]
    fn test_delta_vs_finite_diff() {
        let h = 0.01;
        for option_type in [OptionType::Call, OptionType::Put] {
            let base = kernel(100.0, 100.0, 1.0, 0.05, 0.2, 0.02);
            let up = kernel(100.0 + h, 100.0, 1.0, 0.05, 0.2, 0.02);
            let dn = kernel(100.0 - h, 100.0, 1.0, 0.05, 0.2, 0.02);

            let fd = (up.price(option_type) - dn.price(option_type)) / (2.0 * h);
            let analytical = base.greeks(option_type).delta;
            assert_relative_eq!(analytical, fd, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_gamma_vs_finite_diff() {
        let h = 0.01;
        let base = kernel(100.0, 100.0, 1.0, 0.05, 0.2, 0.02);
        let up = kernel(100.0 + h, 100.0, 1.0, 0.05, 0.2, 0.02);
        let dn = kernel(100.0 - h, 100.0, 1.0, 0.05, 0.2, 0.02);

        let fd = (up.price(OptionType::Call) - 2.0 * base.price(OptionType::Call)
            + dn.price(OptionType::Call))
            / (h * h);
        assert_relative_eq!(base.greeks(OptionType::Call).gamma, fd, epsilon = 1e-3);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let h = 1e-3;
        let base = kernel(100.0, 100.0, 1.0, 0.05, 0.2, 0.02);
        let up = kernel(100.0, 100.0, 1.0, 0.05, 0.2 + h, 0.02);
        let dn = kernel(100.0, 100.0, 1.0, 0.05, 0.2 - h, 0.02);

        let fd = (up.price(OptionType::Call) - dn.price(OptionType::Call)) / (2.0 * h);
        let raw = base.greeks_with(OptionType::Call, GreeksConvention::raw());
        assert_relative_eq!(raw.vega, fd, epsilon = 1e-3);
    }

    #[test]
    fn test_rho_vs_finite_diff() {
        let h = 1e-4;
        for option_type in [OptionType::Call, OptionType::Put] {
            let base = kernel(100.0, 100.0, 1.0, 0.05, 0.2, 0.02);
            let up = kernel(100.0, 100.0, 1.0, 0.05 + h, 0.2, 0.02);
            let dn = kernel(100.0, 100.0, 1.0, 0.05 - h, 0.2, 0.02);

            let fd = (up.price(option_type) - dn.price(option_type)) / (2.0 * h);
            let raw = base.greeks_with(option_type, GreeksConvention::raw());
            assert_relative_eq!(raw.rho, fd, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_theta_vs_finite_diff() {
        // theta = ∂V/∂t = -∂V/∂T, so bump expiry and negate
        let h = 1e-5;
        for option_type in [OptionType::Call, OptionType::Put] {
            let base = kernel(100.0, 100.0, 1.0, 0.05, 0.2, 0.02);
            let up = kernel(100.0, 100.0, 1.0 + h, 0.05, 0.2, 0.02);
            let dn = kernel(100.0, 100.0, 1.0 - h, 0.05, 0.2, 0.02);

            let fd = -(up.price(option_type) - dn.price(option_type)) / (2.0 * h);
            let raw = base.greeks_with(option_type, GreeksConvention::raw());
            assert_relative_eq!(raw.theta, fd, epsilon = 1e-3);
        }
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn spot_strategy() -> impl Strategy<Value = f64> {
            50.0..150.0
        }

        fn expiry_strategy() -> impl Strategy<Value = f64> {
            (1.0 / 365.0)..1.0
        }

        fn rate_strategy() -> impl Strategy<Value = f64> {
            0.0..0.10
        }

        fn vol_strategy() -> impl Strategy<Value = f64> {
            0.05..1.0
        }

        fn div_strategy() -> impl Strategy<Value = f64> {
            0.0..0.10
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_put_call_parity_holds(
                spot in spot_strategy(),
                strike in spot_strategy(),
                expiry in expiry_strategy(),
                rate in rate_strategy(),
                vol in vol_strategy(),
                div in div_strategy()
            ) {
                let bsm = kernel(spot, strike, expiry, rate, vol, div);
                let lhs = bsm.price(OptionType::Call) - bsm.price(OptionType::Put);
                let rhs = spot * (-div * expiry).exp() - strike * (-rate * expiry).exp();
                prop_assert!((lhs - rhs).abs() < 1e-8 * spot.max(strike));
            }

            #[test]
            fn test_delta_within_discounted_bounds(
                spot in spot_strategy(),
                strike in spot_strategy(),
                expiry in expiry_strategy(),
                rate in rate_strategy(),
                vol in vol_strategy(),
                div in div_strategy()
            ) {
                let bsm = kernel(spot, strike, expiry, rate, vol, div);
                let bound = (-div * expiry).exp();

                let call = bsm.greeks(OptionType::Call).delta;
                prop_assert!(call >= 0.0 && call <= bound + 1e-12);

                let put = bsm.greeks(OptionType::Put).delta;
                prop_assert!(put <= 0.0 && put >= -bound - 1e-12);
            }

            #[test]
            fn test_gamma_vega_non_negative_everywhere(
                spot in spot_strategy(),
                strike in spot_strategy(),
                expiry in expiry_strategy(),
                rate in rate_strategy(),
                vol in vol_strategy(),
                div in div_strategy()
            ) {
                let bsm = kernel(spot, strike, expiry, rate, vol, div);
                let call = bsm.greeks(OptionType::Call);
                let put = bsm.greeks(OptionType::Put);

                prop_assert!(call.gamma >= 0.0);
                prop_assert!(call.vega >= 0.0);
                prop_assert_eq!(call.gamma, put.gamma);
                prop_assert_eq!(call.vega, put.vega);
            }

            #[test]
            fn test_price_non_negative(
                spot in spot_strategy(),
                strike in spot_strategy(),
                expiry in expiry_strategy(),
                rate in rate_strategy(),
                vol in vol_strategy(),
                div in div_strategy()
            ) {
                let bsm = kernel(spot, strike, expiry, rate, vol, div);
                prop_assert!(bsm.price(OptionType::Call) >= 0.0);
                prop_assert!(bsm.price(OptionType::Put) >= 0.0);
            }

            #[test]
            fn test_scaling_round_trip_everywhere(
                spot in spot_strategy(),
                strike in spot_strategy(),
                expiry in expiry_strategy(),
                rate in rate_strategy(),
                vol in vol_strategy(),
                div in div_strategy()
            ) {
                let bsm = kernel(spot, strike, expiry, rate, vol, div);
                let scaled = bsm.greeks(OptionType::Call);
                let raw = bsm.greeks_with(OptionType::Call, GreeksConvention::raw());

                prop_assert!((scaled.theta * 365.0 - raw.theta).abs() < 1e-9 * raw.theta.abs().max(1.0));
                prop_assert!((scaled.vega * 100.0 - raw.vega).abs() < 1e-9 * raw.vega.abs().max(1.0));
                prop_assert!((scaled.rho * 100.0 - raw.rho).abs() < 1e-9 * raw.rho.abs().max(1.0));
            }
        }
    }
}
