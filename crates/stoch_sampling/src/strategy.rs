//! Fidelity strategies.
//!
//! The speed/precision trade-off is a type parameter of the engine rather than
//! a runtime flag checked inside every sampler. [`Speed`] and [`Precision`]
//! are zero-sized; the choice is fixed at construction and dispatched
//! statically.

use std::fmt::Debug;

use stoch_core::engine::BitSource;
use stoch_core::types::FidelityMode;

use crate::bounded::{rejection_u128, rejection_u64, scaled_u128, scaled_u64};
use crate::percentage::{exponent_search_f32, exponent_search_f64, truncated_f32, truncated_f64};

/// The primitive draws every higher-level sampler delegates to.
///
/// Implementations must be deterministic functions of the words they draw.
pub trait SamplingStrategy: Copy + Default + Debug + Send + Sync + 'static {
    /// Runtime description of this strategy.
    const MODE: FidelityMode;

    /// Uniform value in `[0, exclusive_max)`; `exclusive_max <= 1` returns 0
    /// without drawing.
    fn bounded_u64<B: BitSource + ?Sized>(source: &mut B, exclusive_max: u64) -> u64;

    /// 128-bit counterpart of [`SamplingStrategy::bounded_u64`].
    fn bounded_u128<B: BitSource + ?Sized>(source: &mut B, exclusive_max: u128) -> u128;

    /// Uniform `f64` in `[0, 1)`.
    fn percent_f64<B: BitSource + ?Sized>(source: &mut B) -> f64;

    /// Uniform `f32` in `[0, 1)`.
    fn percent_f32<B: BitSource + ?Sized>(source: &mut B) -> f32;
}

/// Floating multiplication and truncation: one draw per value, small bias.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Speed;

/// Rejection sampling and exponent search: unbiased, variable cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Precision;

impl SamplingStrategy for Speed {
    const MODE: FidelityMode = FidelityMode::Speed;

    #[inline]
    fn bounded_u64<B: BitSource + ?Sized>(source: &mut B, exclusive_max: u64) -> u64 {
        scaled_u64(source, exclusive_max)
    }

    #[inline]
    fn bounded_u128<B: BitSource + ?Sized>(source: &mut B, exclusive_max: u128) -> u128 {
        scaled_u128(source, exclusive_max)
    }

    #[inline]
    fn percent_f64<B: BitSource + ?Sized>(source: &mut B) -> f64 {
        truncated_f64(source)
    }

    #[inline]
    fn percent_f32<B: BitSource + ?Sized>(source: &mut B) -> f32 {
        truncated_f32(source)
    }
}

impl SamplingStrategy for Precision {
    const MODE: FidelityMode = FidelityMode::Precision;

    #[inline]
    fn bounded_u64<B: BitSource + ?Sized>(source: &mut B, exclusive_max: u64) -> u64 {
        rejection_u64(source, exclusive_max)
    }

    #[inline]
    fn bounded_u128<B: BitSource + ?Sized>(source: &mut B, exclusive_max: u128) -> u128 {
        rejection_u128(source, exclusive_max)
    }

    #[inline]
    fn percent_f64<B: BitSource + ?Sized>(source: &mut B) -> f64 {
        exponent_search_f64(source)
    }

    #[inline]
    fn percent_f32<B: BitSource + ?Sized>(source: &mut B) -> f32 {
        exponent_search_f32(source)
    }
}
