//! Time spans and timestamps as 64-bit tick counts.
//!
//! A tick is 100 nanoseconds. Time spans cover the full signed tick range;
//! timestamps count ticks from 0001-01-01T00:00:00Z and, when unbounded, span
//! 0001-01-01 through 9999-12-31T23:59:59.9999999Z. Sub-tick precision of
//! caller-supplied bounds is truncated toward zero.

use chrono::{DateTime, TimeDelta, Utc};
use stoch_core::engine::BitSource;
use stoch_core::types::{Result, SamplingError};

use crate::bounded::UniformInt;
use crate::strategy::SamplingStrategy;

/// Ticks per second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Nanoseconds per tick.
pub const NANOS_PER_TICK: i64 = 100;

/// Ticks from 0001-01-01T00:00:00Z to the Unix epoch.
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Ticks of 9999-12-31T23:59:59.9999999Z.
pub const MAX_TIMESTAMP_TICKS: i64 = 3_155_378_975_999_999_999;

/// Converts a signed tick count to a time span.
pub fn time_delta_from_ticks(ticks: i64) -> TimeDelta {
    let seconds = ticks.div_euclid(TICKS_PER_SECOND);
    let nanos = ticks.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK;
    TimeDelta::seconds(seconds) + TimeDelta::nanoseconds(nanos)
}

/// Converts a time span to whole ticks.
///
/// # Errors
///
/// Returns `TickOverflow` if the span exceeds the signed 64-bit tick range.
pub fn ticks_from_time_delta(delta: TimeDelta) -> Result<i64> {
    let sub_ticks = delta.subsec_nanos() as i64 / NANOS_PER_TICK;
    delta
        .num_seconds()
        .checked_mul(TICKS_PER_SECOND)
        .and_then(|ticks| ticks.checked_add(sub_ticks))
        .ok_or_else(|| SamplingError::TickOverflow(delta.to_string()))
}

/// Converts a tick count since 0001-01-01 to a UTC timestamp.
pub fn timestamp_from_ticks(ticks: i64) -> Option<DateTime<Utc>> {
    let unix_ticks = ticks.checked_sub(UNIX_EPOCH_TICKS)?;
    let seconds = unix_ticks.div_euclid(TICKS_PER_SECOND);
    let nanos = (unix_ticks.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
    DateTime::from_timestamp(seconds, nanos)
}

/// Converts a UTC timestamp to ticks since 0001-01-01.
///
/// # Errors
///
/// Returns `TickOverflow` if the timestamp lies outside the tick range.
pub fn ticks_from_timestamp(timestamp: DateTime<Utc>) -> Result<i64> {
    let sub_ticks = timestamp.timestamp_subsec_nanos() as i64 / NANOS_PER_TICK;
    timestamp
        .timestamp()
        .checked_mul(TICKS_PER_SECOND)
        .and_then(|ticks| ticks.checked_add(sub_ticks))
        .and_then(|ticks| ticks.checked_add(UNIX_EPOCH_TICKS))
        .ok_or_else(|| SamplingError::TickOverflow(timestamp.to_rfc3339()))
}

/// Ticks of a timestamp that must fall within 0001-01-01..=9999-12-31.
fn calendar_ticks(timestamp: DateTime<Utc>) -> Result<i64> {
    let ticks = ticks_from_timestamp(timestamp)?;
    if !(0..=MAX_TIMESTAMP_TICKS).contains(&ticks) {
        return Err(SamplingError::TickOverflow(timestamp.to_rfc3339()));
    }
    Ok(ticks)
}

/// Any time span: one full-width signed tick draw.
#[inline]
pub fn time_span<B: BitSource + ?Sized>(source: &mut B) -> TimeDelta {
    time_delta_from_ticks(source.next64() as i64)
}

/// Time span in `[min, max]` at tick resolution.
///
/// # Errors
///
/// - `InvalidRange` if `max < min`
/// - `TickOverflow` if a bound exceeds the tick range
pub fn time_span_between<S, B>(source: &mut B, min: TimeDelta, max: TimeDelta) -> Result<TimeDelta>
where
    S: SamplingStrategy,
    B: BitSource + ?Sized,
{
    if max < min {
        return Err(SamplingError::invalid_range(min, max));
    }
    let ticks = i64::between::<S, B>(
        source,
        ticks_from_time_delta(min)?,
        ticks_from_time_delta(max)?,
    )?;
    Ok(time_delta_from_ticks(ticks))
}

/// Any timestamp between 0001-01-01 and 9999-12-31 inclusive.
#[inline]
pub fn timestamp<S, B>(source: &mut B) -> DateTime<Utc>
where
    S: SamplingStrategy,
    B: BitSource + ?Sized,
{
    let ticks = S::bounded_u64(source, MAX_TIMESTAMP_TICKS as u64 + 1) as i64;
    // Every tick in [0, MAX_TIMESTAMP_TICKS] maps to a representable instant.
    timestamp_from_ticks(ticks).unwrap_or_default()
}

/// Timestamp in `[min, max]` at tick resolution.
///
/// # Errors
///
/// - `InvalidRange` if `max < min`
/// - `TickOverflow` if a bound is outside 0001-01-01..=9999-12-31
pub fn timestamp_between<S, B>(
    source: &mut B,
    min: DateTime<Utc>,
    max: DateTime<Utc>,
) -> Result<DateTime<Utc>>
where
    S: SamplingStrategy,
    B: BitSource + ?Sized,
{
    if max < min {
        return Err(SamplingError::invalid_range(min, max));
    }
    let ticks = i64::between::<S, B>(source, calendar_ticks(min)?, calendar_ticks(max)?)?;
    timestamp_from_ticks(ticks).ok_or_else(|| SamplingError::TickOverflow(ticks.to_string()))
}
