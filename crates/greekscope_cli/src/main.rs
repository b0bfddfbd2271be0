//! Greekscope CLI - Black-Scholes-Merton pricing and sweep tables
//!
//! # Commands
//!
//! - `greekscope price` - Price one European option and print its Greeks
//! - `greekscope sweep --axis spot` - Sweep one parameter over its range
//!
//! Parameters are given in display units (dollars, days, percent) and
//! default to the conventional starting point: S=100, K=100, 30 days,
//! r=5%, σ=20%, q=2%.

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greekscope_models::analytical::{BsmParams, OptionType};
use greekscope_risk::SweepAxis;

mod commands;
mod error;

pub use error::{CliError, Result};

/// Greekscope option pricing CLI
#[derive(Parser)]
#[command(name = "greekscope")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Option type selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OptionTypeArg {
    /// European call
    Call,
    /// European put
    Put,
}

impl From<OptionTypeArg> for OptionType {
    fn from(arg: OptionTypeArg) -> Self {
        match arg {
            OptionTypeArg::Call => OptionType::Call,
            OptionTypeArg::Put => OptionType::Put,
        }
    }
}

/// Sweep axis selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum AxisArg {
    /// Spot price (50-150 $)
    Spot,
    /// Strike price (50-150 $)
    Strike,
    /// Time to expiry (1-365 days)
    Expiry,
    /// Risk-free rate (0-10 %)
    Rate,
    /// Volatility (5-100 %)
    Vol,
    /// Dividend yield (0-10 %)
    Div,
}

impl From<AxisArg> for SweepAxis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Spot => SweepAxis::Spot,
            AxisArg::Strike => SweepAxis::Strike,
            AxisArg::Expiry => SweepAxis::Expiry,
            AxisArg::Rate => SweepAxis::Rate,
            AxisArg::Vol => SweepAxis::Volatility,
            AxisArg::Div => SweepAxis::DividendYield,
        }
    }
}

/// Option parameters in display units.
#[derive(Debug, Args)]
struct ParamArgs {
    /// Option type
    #[arg(short = 't', long, value_enum, default_value = "call")]
    option_type: OptionTypeArg,

    /// Spot price in dollars
    #[arg(short, long, default_value = "100.0")]
    spot: f64,

    /// Strike price in dollars
    #[arg(short = 'k', long, default_value = "100.0")]
    strike: f64,

    /// Time to expiry in calendar days
    #[arg(short, long, default_value = "30.0")]
    days: f64,

    /// Risk-free rate in percent
    #[arg(short, long, default_value = "5.0")]
    rate: f64,

    /// Volatility in percent
    #[arg(short = 'i', long, default_value = "20.0")]
    vol: f64,

    /// Continuous dividend yield in percent
    #[arg(short = 'q', long, default_value = "2.0")]
    div: f64,
}

impl ParamArgs {
    /// Converts display-unit arguments into validated model parameters.
    fn to_params(&self) -> Result<BsmParams<f64>> {
        Ok(BsmParams::new(
            self.spot,
            self.strike,
            self.days / 365.0,
            self.rate / 100.0,
            self.vol / 100.0,
            self.div / 100.0,
        )?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Price one option and print its Greeks
    Price {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Report raw analytic Greeks (per-year theta, per-unit vega/rho)
        /// instead of the per-day / per-percentage-point display scaling
        #[arg(long)]
        raw: bool,
    },

    /// Sweep one parameter over its range and tabulate price and Greeks
    Sweep {
        #[command(flatten)]
        params: ParamArgs,

        /// Parameter to sweep
        #[arg(short, long, value_enum)]
        axis: AxisArg,

        /// Number of grid points
        #[arg(short = 'n', long, default_value = "20")]
        points: usize,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            params,
            format,
            raw,
        } => commands::price::run(&params.to_params()?, params.option_type.into(), &format, raw),
        Commands::Sweep {
            params,
            axis,
            points,
            format,
        } => commands::sweep::run(
            &params.to_params()?,
            params.option_type.into(),
            axis.into(),
            points,
            &format,
        ),
    }
}
