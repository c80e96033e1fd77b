//! Byte stream over a word source.
//!
//! Every typed value in the sampling layer that is not built from a single
//! word goes through [`fill_bytes`]. Words are written little-endian, so a
//! buffer of eight bytes reinterpreted with `u64::from_le_bytes` equals the
//! word that produced it.

use super::BitSource;

/// Fills `buffer` completely from successive 64-bit words.
///
/// Whole words are copied until fewer than eight bytes remain; one more word
/// is then drawn and only its low-order bytes are used. The unused high-order
/// bytes are discarded, never carried into a later call. An empty buffer
/// draws nothing.
///
/// # Examples
///
/// ```rust
/// use stoch_core::engine::{fill_bytes, Xoshiro256StarStar};
///
/// let mut engine = Xoshiro256StarStar::new(3);
/// let mut buffer = [0u8; 11];
/// fill_bytes(&mut engine, &mut buffer);
/// ```
#[inline]
pub fn fill_bytes<S: BitSource + ?Sized>(source: &mut S, buffer: &mut [u8]) {
    let mut chunks = buffer.chunks_exact_mut(8);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&source.next64().to_le_bytes());
    }
    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        let word = source.next64().to_le_bytes();
        let len = tail.len();
        tail.copy_from_slice(&word[..len]);
    }
}
