//! # stoch_core: Bit Engine Foundation
//!
//! ## Layer 1 (Foundation) Role
//!
//! stoch_core is the bottom layer of the workspace, providing:
//! - The xoshiro256** generator and its SplitMix64 seeding (`engine`)
//! - Byte buffer filling from the word stream (`engine::fill_bytes`)
//! - The `BitSource` trait higher layers sample through (`engine`)
//! - Error and fidelity-mode types shared by every layer (`types`)
//!
//! ## Minimal Dependency Principle
//!
//! Layer 1 has no dependencies on other stoch_* crates:
//! - rand: `RngCore`/`SeedableRng` interop and the OS entropy source
//! - thiserror: error derivation
//! - tracing: lifecycle events (never on the per-draw path)
//! - serde: optional serialisation of `FidelityMode`
//!
//! ## Usage Examples
//!
//! ```rust
//! use stoch_core::engine::{BitSource, Xoshiro256StarStar};
//!
//! let mut engine = Xoshiro256StarStar::new(0x1);
//! let word = engine.next_u64();
//!
//! let mut bytes = [0u8; 12];
//! engine.fill(&mut bytes);
//! # let _ = word;
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `FidelityMode`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engine;
pub mod types;
