//! CLI error types.

use stoch_core::types::SamplingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `stoch` binary.
///
/// # Variants
///
/// - `Config`: configuration could not be loaded or parsed
/// - `Sampling`: the engine rejected a request (bad range, empty input)
/// - `Io`: writing output failed
/// - `Json`: encoding JSON output failed
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
