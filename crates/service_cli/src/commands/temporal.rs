//! Timestamp draws.

use chrono::{DateTime, Utc};
use stoch_sampling::{RandomEngine, SamplingStrategy};

use crate::Result;

/// `count` timestamps, within `[from, to]` when both bounds are given and
/// between 0001-01-01 and 9999-12-31 otherwise.
pub fn timestamps<S: SamplingStrategy>(
    rng: &mut RandomEngine<S>,
    count: usize,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Result<Vec<DateTime<Utc>>> {
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let value = match (from, to) {
            (Some(min), Some(max)) => rng.timestamp_between(min, max)?,
            _ => rng.timestamp(),
        };
        values.push(value);
    }
    Ok(values)
}
