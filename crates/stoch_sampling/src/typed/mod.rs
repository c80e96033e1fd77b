//! Typed value sampling.
//!
//! This module provides:
//! - `raw`: fixed-layout values reinterpreted from stream bytes (`RawValue`)
//! - `enumeration`: uniform member selection (`Enumerable`, `enumerable!`)
//! - `temporal`: time spans and timestamps as 100 ns tick counts
//! - `character`: Unicode scalar values
//! - `decimal`: 96-bit fixed-point decimals

pub mod character;
pub mod decimal;
pub mod enumeration;
pub mod raw;
pub mod temporal;

pub use decimal::Decimal;
pub use enumeration::Enumerable;
pub use raw::RawValue;
