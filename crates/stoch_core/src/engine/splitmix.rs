//! SplitMix64 seed mixer.
//!
//! Used only to expand a single 64-bit seed into the four xoshiro state words.
//! SplitMix64 cannot emit a run of zeros long enough to zero all four words, so
//! the derived state is never all-zero.

/// Golden-ratio increment added to the counter on every step.
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 generator: single `u64` counter with a bijective output mix.
#[derive(Clone, Debug)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a mixer whose first output is derived from `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advances the counter and returns the next mixed word.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Derives four consecutive words, each output feeding the next step.
    #[inline]
    pub fn expand(seed: u64) -> [u64; 4] {
        let mut mixer = Self::new(seed);
        [
            mixer.next_u64(),
            mixer.next_u64(),
            mixer.next_u64(),
            mixer.next_u64(),
        ]
    }
}
