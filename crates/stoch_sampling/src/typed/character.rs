//! Unicode scalar values.
//!
//! Sampling runs over a dense index of the 1,112,064 scalar values: code
//! points above the surrogate block are shifted down by its length so every
//! index maps to a valid `char`.

use stoch_core::engine::BitSource;
use stoch_core::types::{Result, SamplingError};

use crate::bounded::UniformInt;
use crate::strategy::SamplingStrategy;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_LEN: u32 = 0x800;

/// Number of Unicode scalar values.
pub const SCALAR_COUNT: u32 = 0x11_0000 - SURROGATE_LEN;

#[inline]
fn scalar_index(c: char) -> u32 {
    let code = c as u32;
    if code >= SURROGATE_START {
        code - SURROGATE_LEN
    } else {
        code
    }
}

#[inline]
fn from_scalar_index(index: u32) -> char {
    let code = if index >= SURROGATE_START {
        index + SURROGATE_LEN
    } else {
        index
    };
    // Indices below SCALAR_COUNT always land outside the surrogate block.
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Any Unicode scalar value, uniformly.
#[inline]
pub fn any_char<S, B>(source: &mut B) -> char
where
    S: SamplingStrategy,
    B: BitSource + ?Sized,
{
    from_scalar_index(S::bounded_u64(source, SCALAR_COUNT as u64) as u32)
}

/// Scalar value in `[min, max]`, skipping surrogates.
///
/// # Errors
///
/// Returns `InvalidRange` if `max < min`.
pub fn char_between<S, B>(source: &mut B, min: char, max: char) -> Result<char>
where
    S: SamplingStrategy,
    B: BitSource + ?Sized,
{
    if max < min {
        return Err(SamplingError::invalid_range(min, max));
    }
    let index = u32::between::<S, B>(source, scalar_index(min), scalar_index(max))?;
    Ok(from_scalar_index(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Precision;
    use stoch_core::engine::Xoshiro256StarStar;

    #[test]
    fn test_index_round_trips_at_block_edges() {
        for c in ['\0', '\u{D7FF}', '\u{E000}', '\u{FFFF}', char::MAX] {
            assert_eq!(from_scalar_index(scalar_index(c)), c);
        }
        assert_eq!(scalar_index(char::MAX), SCALAR_COUNT - 1);
        assert_eq!(scalar_index('\u{E000}'), scalar_index('\u{D7FF}') + 1);
    }

    #[test]
    fn test_between_spanning_surrogates() {
        let mut engine = Xoshiro256StarStar::new(21);
        let mut seen = [false; 2];
        for _ in 0..2_000 {
            let c = char_between::<Precision, _>(&mut engine, '\u{D7FF}', '\u{E000}').unwrap();
            match c {
                '\u{D7FF}' => seen[0] = true,
                '\u{E000}' => seen[1] = true,
                other => panic!("unexpected char {:?}", other),
            }
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn test_ascii_range() {
        let mut engine = Xoshiro256StarStar::new(21);
        for _ in 0..1_000 {
            let c = char_between::<Precision, _>(&mut engine, 'a', 'z').unwrap();
            assert!(c.is_ascii_lowercase());
        }
        assert!(char_between::<Precision, _>(&mut engine, 'z', 'a').is_err());
    }

    #[test]
    fn test_any_char_is_valid_scalar() {
        let mut engine = Xoshiro256StarStar::new(21);
        for _ in 0..1_000 {
            let c = any_char::<Precision, _>(&mut engine);
            assert!(!(0xD800..0xE000).contains(&(c as u32)));
        }
    }
}
