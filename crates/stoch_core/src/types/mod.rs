//! Shared value types.
//!
//! This module provides:
//! - `error`: `SamplingError` and the crate-wide `Result` alias
//! - `mode`: `FidelityMode`, the per-engine speed/precision trade-off

pub mod error;
pub mod mode;

pub use error::{Result, SamplingError};
pub use mode::{FidelityMode, ParseModeError};
