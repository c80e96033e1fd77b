//! Fixed-point decimal values.
//!
//! [`Decimal`] is a 96-bit unsigned mantissa with a sign and a base-10 scale
//! of at most 28 digits. Unbounded sampling produces a value in [0, 1) at the
//! full 28-digit scale. Bounded decimal ranges are not implemented and report
//! `Unsupported`.

use std::fmt;

use stoch_core::engine::BitSource;
use stoch_core::types::{Result, SamplingError};

use crate::strategy::SamplingStrategy;

/// Ten to the maximum scale.
const UNIT_MANTISSA: u128 = 10u128.pow(Decimal::MAX_SCALE as u32);

/// Sign, 96-bit mantissa and decimal scale: `(-1)^sign * mantissa / 10^scale`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decimal {
    mantissa: u128,
    scale: u8,
    negative: bool,
}

impl Decimal {
    /// Largest mantissa: 2^96 - 1.
    pub const MAX_MANTISSA: u128 = (1u128 << 96) - 1;

    /// Largest number of fractional digits.
    pub const MAX_SCALE: u8 = 28;

    /// Creates a decimal, or `None` if the mantissa or scale is out of range.
    pub fn new(mantissa: u128, scale: u8, negative: bool) -> Option<Self> {
        if mantissa > Self::MAX_MANTISSA || scale > Self::MAX_SCALE {
            return None;
        }
        Some(Self {
            mantissa,
            scale,
            negative,
        })
    }

    /// Unsigned mantissa.
    pub fn mantissa(&self) -> u128 {
        self.mantissa
    }

    /// Number of fractional digits.
    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// Whether the sign bit is set.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.mantissa as f64 / 10f64.powi(self.scale as i32);
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.scale as usize;
        let digits = format!("{:0>width$}", self.mantissa, width = scale + 1);
        let (whole, fraction) = digits.split_at(digits.len() - scale);
        if self.negative && self.mantissa != 0 {
            f.write_str("-")?;
        }
        if fraction.is_empty() {
            f.write_str(whole)
        } else {
            write!(f, "{}.{}", whole, fraction)
        }
    }
}

/// Decimal in [0, 1) with 28 fractional digits.
#[inline]
pub fn unit_decimal<S, B>(source: &mut B) -> Decimal
where
    S: SamplingStrategy,
    B: BitSource + ?Sized,
{
    Decimal {
        mantissa: S::bounded_u128(source, UNIT_MANTISSA),
        scale: Decimal::MAX_SCALE,
        negative: false,
    }
}

/// Bounded decimal ranges are not implemented.
///
/// # Errors
///
/// Always returns `Unsupported`; no entropy is consumed.
pub fn decimal_between(_min: Decimal, _max: Decimal) -> Result<Decimal> {
    Err(SamplingError::Unsupported("bounded decimal ranges"))
}
