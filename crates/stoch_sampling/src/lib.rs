//! # stoch_sampling: Sampling Engine
//!
//! ## Layer 2 (Engine) Role
//!
//! stoch_sampling turns the raw word stream of stoch_core into values:
//! - Bounded integers by rejection sampling or scaled percentages (`bounded`)
//! - Floating-point percentages by truncation or exponent search (`percentage`)
//! - Raw, enumeration, character, time and decimal values (`typed`)
//! - Selection and shuffling of sequences (`sequence`)
//! - The `RandomEngine<S>` facade tying them to one seeded engine (`random`)
//!
//! ## Fidelity Strategies
//!
//! Every sampler is generic over a [`SamplingStrategy`]. [`Precision`] is
//! unbiased; [`Speed`] spends exactly one word per value and accepts a small
//! bias. The strategy is fixed by type, so both variants compile to straight
//! line code with no mode checks.
//!
//! ## Usage Examples
//!
//! ```rust
//! use stoch_sampling::{FastRandom, PreciseRandom};
//!
//! let mut precise = PreciseRandom::from_seed(0x1);
//! assert_eq!(precise.bounded_u64(10), 8);
//!
//! let mut fast = FastRandom::from_seed(0x1);
//! let p = fast.percent_f64();
//! assert!((0.0..1.0).contains(&p));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `FidelityMode` and `Decimal`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bounded;
pub mod percentage;
pub mod random;
pub mod sequence;
pub mod strategy;
pub mod typed;

#[cfg(test)]
mod integration_tests;


pub use bounded::{UniformFloat, UniformInt};
pub use random::{FastRandom, PreciseRandom, RandomEngine};
pub use sequence::BoundedSource;
pub use strategy::{Precision, SamplingStrategy, Speed};
pub use typed::{Decimal, Enumerable, RawValue};

pub use stoch_core::types::{FidelityMode, Result, SamplingError};
