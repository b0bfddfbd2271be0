//! Price command implementation.
//!
//! Evaluates a single option and prints the price with all five Greeks.

use serde_json::json;
use tracing::info;

use greekscope_models::analytical::{BlackScholesMerton, BsmParams, GreeksConvention, OptionType};

use crate::{CliError, Result};

/// Run the price command.
pub fn run(params: &BsmParams<f64>, option_type: OptionType, format: &str, raw: bool) -> Result<()> {
    info!("Pricing {} option", option_type);
    info!("  Spot: {}", params.spot);
    info!("  Strike: {}", params.strike);
    info!("  Expiry: {} years", params.expiry);

    let bsm = BlackScholesMerton::new(*params);
    let convention = if raw {
        GreeksConvention::raw()
    } else {
        GreeksConvention::default()
    };

    let price = bsm.price(option_type);
    let greeks = bsm.greeks_with(option_type, convention);

    match format {
        "json" => {
            let output = json!({
                "option_type": option_type.to_string(),
                "price": price,
                "greeks": {
                    "delta": greeks.delta,
                    "gamma": greeks.gamma,
                    "theta": greeks.theta,
                    "vega": greeks.vega,
                    "rho": greeks.rho,
                },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        "table" => {
            let (theta_unit, pct_unit) = if raw {
                ("$/year", "$/unit")
            } else {
                ("$/day", "$/1%")
            };
            println!("\n┌────────────┬──────────────┬─────────┐");
            println!("│ Quantity   │ Value        │ Unit    │");
            println!("├────────────┼──────────────┼─────────┤");
            println!("│ Price      │ {:>12.4} │ $       │", price);
            println!("│ Delta      │ {:>12.4} │ $/$     │", greeks.delta);
            println!("│ Gamma      │ {:>12.4} │ $/$²    │", greeks.gamma);
            println!("│ Theta      │ {:>12.4} │ {:<7} │", greeks.theta, theta_unit);
            println!("│ Vega       │ {:>12.4} │ {:<7} │", greeks.vega, pct_unit);
            println!("│ Rho        │ {:>12.4} │ {:<7} │", greeks.rho, pct_unit);
            println!("└────────────┴──────────────┴─────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    info!("Pricing complete");
    Ok(())
}
