//! Scalar draws: words, integers, percentages, bytes and UUIDs.

use stoch_core::types::SamplingError;
use stoch_sampling::{RandomEngine, SamplingStrategy};
use uuid::Uuid;

use crate::Result;

/// `count` raw output words.
pub fn words<S: SamplingStrategy>(rng: &mut RandomEngine<S>, count: usize) -> Vec<u64> {
    (0..count).map(|_| rng.next_u64()).collect()
}

/// `count` values in `[0, max)`.
pub fn bounded<S: SamplingStrategy>(rng: &mut RandomEngine<S>, max: u64, count: usize) -> Vec<u64> {
    (0..count).map(|_| rng.bounded_u64(max)).collect()
}

/// `count` values in `[min, max]`.
///
/// The range is validated before any value is drawn.
pub fn between<S: SamplingStrategy>(
    rng: &mut RandomEngine<S>,
    min: i64,
    max: i64,
    count: usize,
) -> Result<Vec<i64>> {
    if max < min {
        return Err(SamplingError::invalid_range(min, max).into());
    }
    (0..count)
        .map(|_| rng.between(min, max).map_err(Into::into))
        .collect()
}

/// `count` percentages; single-precision draws are widened for output.
pub fn percent<S: SamplingStrategy>(
    rng: &mut RandomEngine<S>,
    count: usize,
    single: bool,
) -> Vec<f64> {
    if single {
        (0..count).map(|_| f64::from(rng.percent_f32())).collect()
    } else {
        (0..count).map(|_| rng.percent_f64()).collect()
    }
}

/// `len` random bytes rendered as lowercase hex.
pub fn hex_bytes<S: SamplingStrategy>(rng: &mut RandomEngine<S>, len: usize) -> String {
    let mut buffer = vec![0u8; len];
    rng.fill_bytes(&mut buffer);
    buffer.iter().map(|b| format!("{:02x}", b)).collect()
}

/// `count` UUIDs.
pub fn uuids<S: SamplingStrategy>(rng: &mut RandomEngine<S>, count: usize) -> Vec<Uuid> {
    (0..count).map(|_| rng.uuid()).collect()
}
