//! Sweep command implementation.
//!
//! Sweeps one parameter over its conventional range and tabulates price
//! and Greeks per grid point. Skipped (out-of-domain) points are
//! reported with the kernel's reason rather than silently dropped.

use serde_json::json;
use tracing::{info, warn};

use greekscope_models::analytical::{BsmParams, OptionType};
use greekscope_risk::{sweep, SweepAxis};

use crate::{CliError, Result};

/// Run the sweep command.
pub fn run(
    params: &BsmParams<f64>,
    option_type: OptionType,
    axis: SweepAxis,
    points: usize,
    format: &str,
) -> Result<()> {
    if points < 2 {
        return Err(CliError::InvalidArgument(format!(
            "Need at least 2 grid points, got {}",
            points
        )));
    }

    info!("Sweeping {} over {} points", axis, points);

    let result = sweep(option_type, params, axis, points);

    for skipped in &result.skipped {
        warn!(
            "Skipped {} = {}: {}",
            axis, skipped.display_value, skipped.reason
        );
    }

    match format {
        "json" => {
            let output = json!({
                "axis": axis.to_string(),
                "label": axis.label(),
                "option_type": option_type.to_string(),
                "current_value": axis.current_display(params),
                "points": result.points,
                "skipped": result
                    .skipped
                    .iter()
                    .map(|s| json!({
                        "display_value": s.display_value,
                        "reason": s.reason.to_string(),
                    }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        "table" => {
            println!("\n{} option, sweeping {}", option_type, axis.label());
            println!("current value marker: {:.2}", axis.current_display(params));
            println!();
            println!(
                "{:>12} {:>10} {:>9} {:>9} {:>9} {:>9} {:>9}",
                axis.label(),
                "Price",
                "Delta",
                "Gamma",
                "Theta",
                "Vega",
                "Rho"
            );
            for point in &result.points {
                println!(
                    "{:>12.2} {:>10.4} {:>9.4} {:>9.4} {:>9.4} {:>9.4} {:>9.4}",
                    point.display_value,
                    point.price,
                    point.greeks.delta,
                    point.greeks.gamma,
                    point.greeks.theta,
                    point.greeks.vega,
                    point.greeks.rho
                );
            }
            if !result.skipped.is_empty() {
                println!("\nskipped {} out-of-domain point(s)", result.skipped.len());
            }
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    info!("Sweep complete: {} points evaluated", result.len());
    Ok(())
}
