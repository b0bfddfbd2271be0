//! CLI error types.

use greekscope_models::analytical::AnalyticalError;
use thiserror::Error;

/// Errors surfaced by the greekscope CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument combination the parser accepts but the domain rejects.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Parameter validation failure from the pricing kernel.
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),

    /// Serialisation failure while producing JSON output.
    #[error("Failed to serialise output: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
