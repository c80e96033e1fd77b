//! Shuffling and picking from command-line item lists.

use stoch_sampling::{RandomEngine, SamplingStrategy};

use crate::Result;

/// Shuffled copy of `items`.
pub fn shuffle<S: SamplingStrategy>(
    rng: &mut RandomEngine<S>,
    items: &[String],
) -> Result<Vec<String>> {
    Ok(rng.shuffled(items)?)
}

/// `count` picks with replacement.
///
/// With `stream` set each pick walks the list once by reservoir selection,
/// as it would over input of unknown length.
pub fn pick<S: SamplingStrategy>(
    rng: &mut RandomEngine<S>,
    items: &[String],
    count: usize,
    stream: bool,
) -> Result<Vec<String>> {
    let mut picks = Vec::with_capacity(count);
    for _ in 0..count {
        let item = if stream {
            rng.single_from_iter(items.iter())?
        } else {
            rng.single(items)?
        };
        picks.push(item.clone());
    }
    Ok(picks)
}
