//! Error types for structured error handling.
//!
//! This module provides:
//! - `SamplingError`: every failure a sampling call can report to its caller
//! - `Result`: convenience alias over `SamplingError`
//!
//! All failures are local and synchronous. A failure is a contract violation by
//! the caller, never a transient condition, so nothing is retried internally.

use thiserror::Error;

/// Categorised sampling errors.
///
/// # Variants
/// - `InvalidRange`: the requested maximum is below the minimum
/// - `EmptySequence`: selection or shuffling over zero elements
/// - `Unsupported`: a documented, intentional gap (flag enumerations, bounded decimals)
/// - `TickOverflow`: a temporal value cannot be expressed as a 64-bit tick count
/// - `Entropy`: the operating system entropy source failed
///
/// # Examples
/// ```
/// use stoch_core::types::SamplingError;
///
/// let err = SamplingError::invalid_range(10, 3);
/// assert_eq!(format!("{}", err), "Invalid range: minimum 10 exceeds maximum 3");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplingError {
    /// The maximum of a bounded request is below its minimum.
    #[error("Invalid range: minimum {min} exceeds maximum {max}")]
    InvalidRange {
        /// Display form of the requested minimum
        min: String,
        /// Display form of the requested maximum
        max: String,
    },

    /// The sequence yielded no elements.
    #[error("Sequence contains no elements")]
    EmptySequence,

    /// The requested operation is intentionally not implemented.
    #[error("Not implemented: {0}")]
    Unsupported(&'static str),

    /// A temporal value lies outside the 64-bit tick range.
    #[error("Value cannot be expressed in 100-nanosecond ticks: {0}")]
    TickOverflow(String),

    /// The operating system entropy source could not produce a seed.
    #[error("Entropy source failure: {0}")]
    Entropy(String),
}

impl SamplingError {
    /// Builds an `InvalidRange` error from any displayable bounds.
    pub fn invalid_range(min: impl std::fmt::Display, max: impl std::fmt::Display) -> Self {
        SamplingError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// Result alias for sampling operations.
pub type Result<T> = std::result::Result<T, SamplingError>;
