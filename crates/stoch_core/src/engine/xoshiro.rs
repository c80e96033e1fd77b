//! xoshiro256** bit engine.
//!
//! This module provides [`Xoshiro256StarStar`], the 256-bit generator every
//! sampler in the workspace draws from. The output and state transforms are
//! the published xoshiro256** constants and must not be altered: any change
//! voids the statistical guarantees and breaks reproducibility of every stream
//! derived from a seed.

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};

use super::splitmix::SplitMix64;
use super::stream::fill_bytes;
use super::BitSource;
use crate::types::{Result, SamplingError};

/// Jump polynomial: advances the state by 2^128 draws.
const JUMP: [u64; 4] = [
    0x180e_c6d3_3cfd_0aba,
    0xd5a6_1266_f0c9_392c,
    0xa958_2618_e03f_c9aa,
    0x39ab_dc45_29b1_661c,
];

/// Long-jump polynomial: advances the state by 2^192 draws.
const LONG_JUMP: [u64; 4] = [
    0x76e1_5d3e_fefd_cbbf,
    0xc500_4e44_1c52_2fb3,
    0x7771_0069_854e_e241,
    0x3910_9bb0_2acb_e635,
];

/// The xoshiro256** generator: four `u64` words of state, one `u64` per draw.
///
/// The state is owned exclusively by one instance and mutated in place on
/// every draw. Instances are not shared; construct one engine per
/// thread (see [`Xoshiro256StarStar::jump`]) when draws must run concurrently.
///
/// # Examples
///
/// ```rust
/// use stoch_core::engine::Xoshiro256StarStar;
///
/// let mut a = Xoshiro256StarStar::new(7);
/// let mut b = Xoshiro256StarStar::new(7);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xoshiro256StarStar {
    s: [u64; 4],
}

/// Draws a fresh 64-bit seed from the operating system entropy pool.
///
/// # Errors
///
/// Returns [`SamplingError::Entropy`] if the OS source is unavailable.
pub fn entropy_seed() -> Result<u64> {
    let mut bytes = [0u8; 8];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| SamplingError::Entropy(e.to_string()))?;
    Ok(u64::from_le_bytes(bytes))
}

impl Xoshiro256StarStar {
    /// Creates an engine whose state is derived from `seed` via SplitMix64.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self {
            s: SplitMix64::expand(seed),
        }
    }

    /// Creates an engine seeded from the operating system entropy pool.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::Entropy`] if the OS source is unavailable.
    pub fn from_entropy() -> Result<Self> {
        let seed = entropy_seed()?;
        tracing::debug!(seed, "bit engine seeded from OS entropy");
        Ok(Self::new(seed))
    }

    /// Creates an engine from raw state words.
    ///
    /// Returns `None` for the all-zero state, which is a fixed point of the
    /// transform and would emit zeros forever.
    pub fn from_state(state: [u64; 4]) -> Option<Self> {
        if state == [0; 4] {
            None
        } else {
            Some(Self { s: state })
        }
    }

    /// Returns a copy of the current state words.
    #[inline]
    pub fn state(&self) -> [u64; 4] {
        self.s
    }

    /// Resets the four state words from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        tracing::trace!(seed, "bit engine reseeded");
        self.s = SplitMix64::expand(seed);
    }

    /// Produces the next pseudo-random word.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s = &mut self.s;
        let result = s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;
        s[3] = s[3].rotate_left(45);

        result
    }

    /// Advances the state by 2^128 draws.
    ///
    /// Calling `jump` repeatedly on a parent and cloning in between yields
    /// non-overlapping sub-streams suitable for one engine per thread.
    pub fn jump(&mut self) {
        self.apply_polynomial(&JUMP);
        tracing::trace!("bit engine jumped 2^128 draws");
    }

    /// Advances the state by 2^192 draws.
    pub fn long_jump(&mut self) {
        self.apply_polynomial(&LONG_JUMP);
        tracing::trace!("bit engine long-jumped 2^192 draws");
    }

    fn apply_polynomial(&mut self, polynomial: &[u64; 4]) {
        let mut acc = [0u64; 4];
        for &word in polynomial {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    for (a, s) in acc.iter_mut().zip(&self.s) {
                        *a ^= s;
                    }
                }
                self.next_u64();
            }
        }
        self.s = acc;
    }
}

impl BitSource for Xoshiro256StarStar {
    #[inline]
    fn next64(&mut self) -> u64 {
        self.next_u64()
    }
}

impl RngCore for Xoshiro256StarStar {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (Xoshiro256StarStar::next_u64(self) >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Xoshiro256StarStar::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        fill_bytes(self, dest);
        Ok(())
    }
}

impl SeedableRng for Xoshiro256StarStar {
    type Seed = [u8; 32];

    /// Interprets the seed as four little-endian state words.
    ///
    /// An all-zero seed falls back to the SplitMix64 expansion of zero.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0u64; 4];
        for (word, chunk) in state.iter_mut().zip(seed.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *word = u64::from_le_bytes(bytes);
        }
        Self::from_state(state).unwrap_or_else(|| Self::new(0))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
