//! Floating-point percentages in [0, 1).
//!
//! Two constructions per precision:
//!
//! - **Truncation** keeps the top 53 (or 24) bits of one word and scales by
//!   2^-53 (or 2^-24). Exactly 2^53 equally spaced values, one draw per call,
//!   but only a subset of the representable doubles in [0, 1) is reachable.
//! - **Exponent search** (Campbell) picks the binary exponent with the right
//!   geometric probability by counting leading zero bits, then fills a full
//!   64-bit significand. Every representable value in [0, 1) is reachable with
//!   its correct probability; the cost per call varies.
//!
//! # Algorithm Reference
//!
//! - Campbell, T. R. (2014). "Uniform random floats: how to generate a
//!   double-precision floating-point number in [0, 1] uniformly at random
//!   given a uniform random source of bits".

use stoch_core::engine::BitSource;

/// 2^-53, exact.
const F64_TRUNCATION_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// 2^-24, exact.
const F32_TRUNCATION_SCALE: f32 = 1.0 / (1u32 << 24) as f32;

/// Smallest subnormal exponent of `f64`.
const F64_MIN_EXPONENT: i32 = -1074;

/// Smallest subnormal exponent of `f32`.
const F32_MIN_EXPONENT: i32 = -149;

/// Fast `f64` in [0, 1): top 53 bits of one word times 2^-53.
#[inline]
pub fn truncated_f64<B: BitSource + ?Sized>(source: &mut B) -> f64 {
    (source.next64() >> 11) as f64 * F64_TRUNCATION_SCALE
}

/// Fast `f32` in [0, 1): top 24 bits of one word times 2^-24.
#[inline]
pub fn truncated_f32<B: BitSource + ?Sized>(source: &mut B) -> f32 {
    (source.next64() >> 40) as f32 * F32_TRUNCATION_SCALE
}

/// Unbiased `f64` in [0, 1) by exponent search.
///
/// The construction samples the closed interval [0, 1]; a draw that rounds up
/// to exactly 1.0 (probability 2^-54) is discarded and redrawn.
pub fn exponent_search_f64<B: BitSource + ?Sized>(source: &mut B) -> f64 {
    loop {
        let value = campbell_f64(source);
        if value < 1.0 {
            return value;
        }
    }
}

/// Unbiased `f32` in [0, 1) by exponent search.
///
/// The 64-bit significand is rounded to single precision in one step, so no
/// double rounding through `f64` occurs.
pub fn exponent_search_f32<B: BitSource + ?Sized>(source: &mut B) -> f32 {
    loop {
        let value = campbell_f32(source);
        if value < 1.0 {
            return value;
        }
    }
}

/// Draws the exponent and a sticky 64-bit significand.
///
/// Returns `None` once the exponent passes `min_exponent`, which only happens
/// if the source emits a run of zero words that a working engine never does.
#[inline]
fn significand_and_exponent<B: BitSource + ?Sized>(
    source: &mut B,
    min_exponent: i32,
) -> Option<(u64, i32)> {
    let mut exponent = -64;
    let mut significand = source.next64();
    while significand == 0 {
        exponent -= 64;
        if exponent < min_exponent {
            return None;
        }
        significand = source.next64();
    }

    let shift = significand.leading_zeros();
    if shift != 0 {
        exponent -= shift as i32;
        significand <<= shift;
        significand |= source.next64() >> (64 - shift);
    }

    // Sticky bit: the true value lies strictly between two 64-bit grid
    // points, so rounding never sees a false tie.
    Some((significand | 1, exponent))
}

fn campbell_f64<B: BitSource + ?Sized>(source: &mut B) -> f64 {
    match significand_and_exponent(source, F64_MIN_EXPONENT) {
        Some((significand, exponent)) => scale_f64(significand as f64, exponent),
        None => 0.0,
    }
}

fn campbell_f32<B: BitSource + ?Sized>(source: &mut B) -> f32 {
    match significand_and_exponent(source, F32_MIN_EXPONENT) {
        Some((significand, exponent)) => scale_f32(significand as f32, exponent),
        None => 0.0,
    }
}

/// `value * 2^exponent` for non-positive exponents, stepping through the
/// normal range so the power of two itself never underflows.
#[inline]
fn scale_f64(mut value: f64, mut exponent: i32) -> f64 {
    while exponent < -1022 {
        value *= pow2_f64(-1022);
        exponent += 1022;
    }
    value * pow2_f64(exponent)
}

#[inline]
fn scale_f32(mut value: f32, mut exponent: i32) -> f32 {
    while exponent < -126 {
        value *= pow2_f32(-126);
        exponent += 126;
    }
    value * pow2_f32(exponent)
}

/// 2^exponent for exponents in the normal range [-1022, 1023].
#[inline]
fn pow2_f64(exponent: i32) -> f64 {
    f64::from_bits(((exponent + 1023) as u64) << 52)
}

/// 2^exponent for exponents in the normal range [-126, 127].
#[inline]
fn pow2_f32(exponent: i32) -> f32 {
    f32::from_bits(((exponent + 127) as u32) << 23)
}
