//! Fidelity mode selection.
//!
//! Every engine is built in exactly one mode and keeps it for its lifetime.
//! The sampling layer maps each mode onto a strategy type; this enum is the
//! runtime description of that choice (configuration files, diagnostics).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Trade-off between throughput and statistical exactness.
///
/// - `Speed`: floating multiplication methods; fast, with a small bias
/// - `Precision`: rejection sampling and exponent search; unbiased
///
/// # Examples
/// ```
/// use stoch_core::types::FidelityMode;
///
/// let mode: FidelityMode = "speed".parse().unwrap();
/// assert_eq!(mode, FidelityMode::Speed);
/// assert_eq!(FidelityMode::default(), FidelityMode::Precision);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FidelityMode {
    /// Biased-but-fast floating multiplication methods.
    Speed,

    /// Unbiased rejection and exponent-search methods.
    #[default]
    Precision,
}

impl FidelityMode {
    /// Returns the lowercase name used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            FidelityMode::Speed => "speed",
            FidelityMode::Precision => "precision",
        }
    }
}

impl fmt::Display for FidelityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a fidelity mode name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid fidelity mode: {0}. Must be one of: speed, precision")]
pub struct ParseModeError(pub String);

impl FromStr for FidelityMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "speed" | "fast" => Ok(FidelityMode::Speed),
            "precision" | "precise" => Ok(FidelityMode::Precision),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
