//! Raw fixed-layout values.
//!
//! A raw value is `size_of::<T>()` bytes from the byte stream reinterpreted as
//! `T` (little-endian for multi-byte scalars). Every bit pattern of the target
//! type must be a valid value; types with invalid patterns (`bool`, `char`)
//! are sampled elsewhere or reduce the bytes explicitly.

use stoch_core::engine::BitSource;
use uuid::Uuid;

/// Types that can be built from raw stream bytes.
pub trait RawValue: Sized {
    /// Reads one value's worth of bytes from `source`.
    fn from_source<B: BitSource + ?Sized>(source: &mut B) -> Self;
}

macro_rules! impl_raw_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl RawValue for $ty {
            #[inline]
            fn from_source<B: BitSource + ?Sized>(source: &mut B) -> Self {
                let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                source.fill(&mut bytes);
                <$ty>::from_le_bytes(bytes)
            }
        }
    )*};
}

impl_raw_scalar!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl<const N: usize> RawValue for [u8; N] {
    #[inline]
    fn from_source<B: BitSource + ?Sized>(source: &mut B) -> Self {
        let mut bytes = [0u8; N];
        source.fill(&mut bytes);
        bytes
    }
}

impl RawValue for bool {
    /// Lowest bit of one stream byte.
    #[inline]
    fn from_source<B: BitSource + ?Sized>(source: &mut B) -> Self {
        u8::from_source(source) & 1 == 1
    }
}

impl RawValue for Uuid {
    /// Sixteen raw bytes; no version or variant bits are forced.
    #[inline]
    fn from_source<B: BitSource + ?Sized>(source: &mut B) -> Self {
        Uuid::from_bytes(<[u8; 16]>::from_source(source))
    }
}
