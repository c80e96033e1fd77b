//! Bounded-range sampling.
//!
//! Conventions, fixed per operation:
//!
//! - `below(exclusive_max)` returns a value in `[0, exclusive_max)`; any bound
//!   `<= 1` (including zero and negative signed bounds) returns 0 and draws
//!   nothing.
//! - `between(min, max)` returns a value in `[min, max]`, both ends inclusive.
//!   `max < min` fails with `InvalidRange`; `min == max` returns `min` and
//!   draws nothing; a range covering the whole type is one full-width draw.
//!
//! The inclusive form delegates to the exclusive one over `(max - min) + 1`
//! and offsets by `min` exactly once.

use stoch_core::engine::BitSource;
use stoch_core::types::{Result, SamplingError};

use crate::percentage::truncated_f64;
use crate::strategy::SamplingStrategy;

/// Unbiased value in `[0, exclusive_max)` by rejection sampling.
///
/// Keeps the top `ceil(log2(exclusive_max))` bits of each word and redraws
/// until the candidate is in range. At worst half the candidates are rejected;
/// nothing is cached between calls.
#[inline]
pub fn rejection_u64<B: BitSource + ?Sized>(source: &mut B, exclusive_max: u64) -> u64 {
    if exclusive_max <= 1 {
        return 0;
    }
    let bits = u64::BITS - (exclusive_max - 1).leading_zeros();
    let shift = u64::BITS - bits;
    loop {
        let candidate = source.next64() >> shift;
        if candidate < exclusive_max {
            return candidate;
        }
    }
}

/// 128-bit rejection sampling; bounds that fit a word draw one word per try.
#[inline]
pub fn rejection_u128<B: BitSource + ?Sized>(source: &mut B, exclusive_max: u128) -> u128 {
    if let Ok(narrow) = u64::try_from(exclusive_max) {
        return rejection_u64(source, narrow) as u128;
    }
    let bits = u128::BITS - (exclusive_max - 1).leading_zeros();
    let shift = u128::BITS - bits;
    loop {
        let candidate = wide_word(source) >> shift;
        if candidate < exclusive_max {
            return candidate;
        }
    }
}

/// Fast value in `[0, exclusive_max)`: a percentage scaled by the bound.
///
/// Float multiplication does not map bit patterns onto integers uniformly, so
/// some values are slightly more likely than others. For bounds above 2^53 the
/// product can round up to the bound itself; it is clamped to
/// `exclusive_max - 1`.
#[inline]
pub fn scaled_u64<B: BitSource + ?Sized>(source: &mut B, exclusive_max: u64) -> u64 {
    if exclusive_max <= 1 {
        return 0;
    }
    let scaled = (truncated_f64(source) * exclusive_max as f64) as u64;
    scaled.min(exclusive_max - 1)
}

/// 128-bit counterpart of [`scaled_u64`].
#[inline]
pub fn scaled_u128<B: BitSource + ?Sized>(source: &mut B, exclusive_max: u128) -> u128 {
    if exclusive_max <= 1 {
        return 0;
    }
    let scaled = (truncated_f64(source) * exclusive_max as f64) as u128;
    scaled.min(exclusive_max - 1)
}

/// Two words, high word first.
#[inline]
fn wide_word<B: BitSource + ?Sized>(source: &mut B) -> u128 {
    let high = source.next64() as u128;
    let low = source.next64() as u128;
    (high << 64) | low
}

/// Integer types that support bounded sampling.
pub trait UniformInt: Copy + PartialOrd + std::fmt::Display {
    /// Value in `[0, exclusive_max)`; bounds `<= 1` return 0 without drawing.
    fn below<S: SamplingStrategy, B: BitSource + ?Sized>(
        source: &mut B,
        exclusive_max: Self,
    ) -> Self;

    /// Value in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `max < min`.
    fn between<S: SamplingStrategy, B: BitSource + ?Sized>(
        source: &mut B,
        min: Self,
        max: Self,
    ) -> Result<Self>;
}

macro_rules! impl_uniform_int {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {$(
        impl UniformInt for $ty {
            #[inline]
            fn below<S: SamplingStrategy, B: BitSource + ?Sized>(
                source: &mut B,
                exclusive_max: Self,
            ) -> Self {
                if exclusive_max <= 1 {
                    return 0;
                }
                S::bounded_u64(source, exclusive_max as u64) as $ty
            }

            #[inline]
            fn between<S: SamplingStrategy, B: BitSource + ?Sized>(
                source: &mut B,
                min: Self,
                max: Self,
            ) -> Result<Self> {
                if max < min {
                    return Err(SamplingError::invalid_range(min, max));
                }
                if min == max {
                    return Ok(min);
                }
                let span = (max as $unsigned).wrapping_sub(min as $unsigned) as u64;
                let offset = if span == u64::MAX {
                    source.next64()
                } else {
                    S::bounded_u64(source, span + 1)
                };
                Ok((min as $unsigned).wrapping_add(offset as $unsigned) as $ty)
            }
        }
    )*};
}

impl_uniform_int!(
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    isize => usize,
);

macro_rules! impl_uniform_wide_int {
    ($($ty:ty),* $(,)?) => {$(
        impl UniformInt for $ty {
            #[inline]
            fn below<S: SamplingStrategy, B: BitSource + ?Sized>(
                source: &mut B,
                exclusive_max: Self,
            ) -> Self {
                if exclusive_max <= 1 {
                    return 0;
                }
                S::bounded_u128(source, exclusive_max as u128) as $ty
            }

            #[inline]
            fn between<S: SamplingStrategy, B: BitSource + ?Sized>(
                source: &mut B,
                min: Self,
                max: Self,
            ) -> Result<Self> {
                if max < min {
                    return Err(SamplingError::invalid_range(min, max));
                }
                if min == max {
                    return Ok(min);
                }
                let span = (max as u128).wrapping_sub(min as u128);
                let offset = if span == u128::MAX {
                    wide_word(source)
                } else {
                    S::bounded_u128(source, span + 1)
                };
                Ok((min as u128).wrapping_add(offset) as $ty)
            }
        }
    )*};
}

impl_uniform_wide_int!(u128, i128);

/// Floating-point types that support bounded sampling.
pub trait UniformFloat: Copy + PartialOrd + std::fmt::Display {
    /// Value in `[min, max]` scaled from one percentage draw.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if either bound is not finite or `max < min`.
    fn between<S: SamplingStrategy, B: BitSource + ?Sized>(
        source: &mut B,
        min: Self,
        max: Self,
    ) -> Result<Self>;
}

macro_rules! impl_uniform_float {
    ($($ty:ty => $percent:ident),* $(,)?) => {$(
        impl UniformFloat for $ty {
            #[inline]
            fn between<S: SamplingStrategy, B: BitSource + ?Sized>(
                source: &mut B,
                min: Self,
                max: Self,
            ) -> Result<Self> {
                if !min.is_finite() || !max.is_finite() || max < min {
                    return Err(SamplingError::invalid_range(min, max));
                }
                if min == max {
                    return Ok(min);
                }
                let p = S::$percent(source);
                let span = max - min;
                let value = if span.is_finite() {
                    min + p * span
                } else {
                    // Span overflows (e.g. [-MAX, MAX]); interpolate instead.
                    min * (1.0 - p) + max * p
                };
                Ok(value.clamp(min, max))
            }
        }
    )*};
}

impl_uniform_float!(f64 => percent_f64, f32 => percent_f32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{Precision, Speed};
    use stoch_core::engine::Xoshiro256StarStar;

    #[test]
    fn test_rejection_reference_draws_for_seed_one() {
        let mut engine = Xoshiro256StarStar::new(0x1);
        let draws: Vec<u64> = (0..3).map(|_| rejection_u64(&mut engine, 10)).collect();
        assert_eq!(draws, vec![8, 9, 6]);
    }

    #[test]
    fn test_rejection_keeps_top_bits() {
        // Bound 8 keeps the top three bits; 0b101 << 61 maps to 5.
        let mut engine = ScriptedWords(vec![0b101u64 << 61]);
        assert_eq!(rejection_u64(&mut engine, 8), 5);
    }

    #[test]
    fn test_rejection_redraws_out_of_range_candidates() {
        // Bound 5 keeps three bits: 7 and 5 are rejected, 2 is accepted.
        let mut engine = ScriptedWords(vec![2u64 << 61, 5u64 << 61, 7u64 << 61]);
        assert_eq!(rejection_u64(&mut engine, 5), 2);
        assert!(engine.0.is_empty());
    }

    #[test]
    fn test_rejection_full_width_bound() {
        let mut engine = ScriptedWords(vec![u64::MAX - 1]);
        assert_eq!(rejection_u64(&mut engine, u64::MAX), u64::MAX - 1);
    }

    #[test]
    fn test_rejection_u128_wide_bound() {
        let mut engine = Xoshiro256StarStar::new(11);
        let bound = (1u128 << 100) + 12_345;
        for _ in 0..1_000 {
            assert!(rejection_u128(&mut engine, bound) < bound);
        }
    }

    #[test]
    fn test_scaled_largest_percentage_stays_below_bound() {
        for bound in [2, 10, (1u64 << 53) + 1, u64::MAX - 1, u64::MAX] {
            let mut engine = ScriptedWords(vec![u64::MAX]);
            assert!(scaled_u64(&mut engine, bound) < bound, "bound {}", bound);
        }
        let mut engine = ScriptedWords(vec![u64::MAX]);
        assert_eq!(scaled_u64(&mut engine, 10), 9);
        let mut engine = ScriptedWords(vec![0]);
        assert_eq!(scaled_u64(&mut engine, 10), 0);
    }

    #[test]
    fn test_between_rejects_inverted_range() {
        let mut engine = Xoshiro256StarStar::new(1);
        let err = i32::between::<Precision, _>(&mut engine, 5, -5).unwrap_err();
        assert_eq!(err, SamplingError::invalid_range(5, -5));
    }

    #[test]
    fn test_between_single_value_draws_nothing() {
        let fresh = Xoshiro256StarStar::new(1);
        let mut engine = fresh.clone();
        assert_eq!(u64::between::<Precision, _>(&mut engine, 42, 42), Ok(42));
        assert_eq!(i8::between::<Speed, _>(&mut engine, -3, -3), Ok(-3));
        assert_eq!(engine, fresh);
    }

    #[test]
    fn test_between_full_width_is_single_raw_draw() {
        let mut reference = Xoshiro256StarStar::new(9);
        let mut engine = Xoshiro256StarStar::new(9);
        let value = u64::between::<Precision, _>(&mut engine, 0, u64::MAX).unwrap();
        assert_eq!(value, reference.next_u64());

        let value = i64::between::<Precision, _>(&mut engine, i64::MIN, i64::MAX).unwrap();
        assert_eq!(value, (reference.next_u64() as i64).wrapping_add(i64::MIN));
    }

    #[test]
    fn test_between_offsets_min_once() {
        let mut engine = Xoshiro256StarStar::new(4);
        for _ in 0..10_000 {
            let v = i16::between::<Precision, _>(&mut engine, 100, 103).unwrap();
            assert!((100..=103).contains(&v));
        }
    }

    #[test]
    fn test_between_signed_full_range_narrow_type() {
        let mut engine = Xoshiro256StarStar::new(4);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..20_000 {
            let v = i8::between::<Precision, _>(&mut engine, i8::MIN, i8::MAX).unwrap();
            seen_min |= v == i8::MIN;
            seen_max |= v == i8::MAX;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_below_non_positive_signed_bound() {
        let fresh = Xoshiro256StarStar::new(6);
        let mut engine = fresh.clone();
        assert_eq!(i32::below::<Precision, _>(&mut engine, -7), 0);
        assert_eq!(i64::below::<Speed, _>(&mut engine, 0), 0);
        assert_eq!(engine, fresh);
    }

    #[test]
    fn test_wide_between_full_range() {
        let mut engine = Xoshiro256StarStar::new(6);
        let v = i128::between::<Precision, _>(&mut engine, i128::MIN, i128::MAX);
        assert!(v.is_ok());
    }

    #[test]
    fn test_float_between_bounds() {
        let mut engine = Xoshiro256StarStar::new(6);
        for _ in 0..10_000 {
            let v = f64::between::<Precision, _>(&mut engine, -2.5, 7.25).unwrap();
            assert!((-2.5..=7.25).contains(&v));
            let w = f32::between::<Speed, _>(&mut engine, 1.0, 1.5).unwrap();
            assert!((1.0..=1.5).contains(&w));
        }
    }

    #[test]
    fn test_float_between_overflowing_span() {
        let mut engine = Xoshiro256StarStar::new(6);
        for _ in 0..1_000 {
            let v = f64::between::<Speed, _>(&mut engine, -f64::MAX, f64::MAX).unwrap();
            assert!(v.is_finite());
        }
    }

    #[test]
    fn test_float_between_rejects_nan_and_infinity() {
        let mut engine = Xoshiro256StarStar::new(6);
        assert!(f64::between::<Precision, _>(&mut engine, f64::NAN, 1.0).is_err());
        assert!(f64::between::<Precision, _>(&mut engine, 0.0, f64::INFINITY).is_err());
        assert!(f32::between::<Precision, _>(&mut engine, 2.0, 1.0).is_err());
    }

    /// Pops scripted words from the back.
    struct ScriptedWords(Vec<u64>);

    impl BitSource for ScriptedWords {
        fn next64(&mut self) -> u64 {
            self.0.pop().unwrap_or(0)
        }
    }
}
