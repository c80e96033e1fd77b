//! # Bit Engine Infrastructure
//!
//! The generator and the raw byte stream every sampler is built on.
//!
//! ## Module Structure
//!
//! - [`splitmix`]: SplitMix64 seed expansion
//! - [`xoshiro`]: the xoshiro256** engine, jumps, `rand` interop
//! - [`stream`]: byte buffer filling from successive words
//!
//! ## Word Sources
//!
//! Higher layers depend on [`BitSource`] rather than on the concrete engine:
//! a source of one 64-bit word at a time, plus the byte fill derived from it.
//! All mutation of generator state stays behind that trait.

mod splitmix;
mod stream;
mod xoshiro;

pub use splitmix::SplitMix64;
pub use stream::fill_bytes;
pub use xoshiro::{entropy_seed, Xoshiro256StarStar};

/// A source of pseudo-random 64-bit words.
pub trait BitSource {
    /// Draws one word, advancing the source.
    fn next64(&mut self) -> u64;

    /// Fills `buffer` from successive words; see [`fill_bytes`].
    #[inline]
    fn fill(&mut self, buffer: &mut [u8]) {
        fill_bytes(self, buffer);
    }
}

impl<B: BitSource + ?Sized> BitSource for &mut B {
    #[inline]
    fn next64(&mut self) -> u64 {
        (**self).next64()
    }
}
