//! Selection and shuffling over sequences.
//!
//! Every operation here draws only through [`BoundedSource::bounded_u64`] and
//! keeps no state of its own, so the output is a pure function of the source
//! state and the input sequence.
//!
//! Random-access input is a slice; one-pass input of unknown length is any
//! `IntoIterator`, consumed exactly once.

use stoch_core::types::{Result, SamplingError};

/// Uniform index draws.
pub trait BoundedSource {
    /// Uniform value in `[0, exclusive_max)`; bounds `<= 1` return 0 without
    /// drawing.
    fn bounded_u64(&mut self, exclusive_max: u64) -> u64;
}

impl<R: BoundedSource + ?Sized> BoundedSource for &mut R {
    #[inline]
    fn bounded_u64(&mut self, exclusive_max: u64) -> u64 {
        (**self).bounded_u64(exclusive_max)
    }
}

#[inline]
fn index_below<R: BoundedSource + ?Sized>(source: &mut R, len: usize) -> usize {
    source.bounded_u64(len as u64) as usize
}

/// One element of a slice, chosen uniformly.
///
/// # Errors
///
/// Returns `EmptySequence` if `items` is empty.
pub fn single<'a, T, R>(source: &mut R, items: &'a [T]) -> Result<&'a T>
where
    R: BoundedSource + ?Sized,
{
    if items.is_empty() {
        return Err(SamplingError::EmptySequence);
    }
    Ok(&items[index_below(source, items.len())])
}

/// One element of a one-pass sequence, chosen uniformly by reservoir sampling.
///
/// The `c`-th element replaces the held candidate with probability `1/c`.
/// The first element is always taken without a draw.
///
/// # Errors
///
/// Returns `EmptySequence` if the sequence yields nothing.
pub fn single_from_iter<I, R>(source: &mut R, items: I) -> Result<I::Item>
where
    I: IntoIterator,
    R: BoundedSource + ?Sized,
{
    let mut candidate = None;
    let mut seen: u64 = 0;
    for item in items {
        seen += 1;
        if source.bounded_u64(seen) == 0 {
            candidate = Some(item);
        }
    }
    candidate.ok_or(SamplingError::EmptySequence)
}

/// Fisher–Yates shuffle of `items`, from the last index down to 1.
///
/// # Errors
///
/// Returns `EmptySequence` if `items` is empty; the slice is untouched.
pub fn shuffle_in_place<T, R>(source: &mut R, items: &mut [T]) -> Result<()>
where
    R: BoundedSource + ?Sized,
{
    if items.is_empty() {
        return Err(SamplingError::EmptySequence);
    }
    for i in (1..items.len()).rev() {
        let j = index_below(source, i + 1);
        items.swap(i, j);
    }
    Ok(())
}

/// Shuffled copy of a slice; the source is not modified.
///
/// # Errors
///
/// Returns `EmptySequence` if `items` is empty.
pub fn shuffled<T, R>(source: &mut R, items: &[T]) -> Result<Vec<T>>
where
    T: Clone,
    R: BoundedSource + ?Sized,
{
    if items.is_empty() {
        return Err(SamplingError::EmptySequence);
    }
    Ok(inside_out(source, items.iter().cloned(), items.len()))
}

/// Shuffled collection of a one-pass sequence.
///
/// Produces the same permutation as [`shuffled`] for the same elements in the
/// same order.
///
/// # Errors
///
/// Returns `EmptySequence` if the sequence yields nothing.
pub fn shuffled_from_iter<I, R>(source: &mut R, items: I) -> Result<Vec<I::Item>>
where
    I: IntoIterator,
    R: BoundedSource + ?Sized,
{
    let items = items.into_iter();
    let capacity = items.size_hint().0;
    // Element `i` draws from `[0, i + 1)`, the same slot rule as `shuffled`.
    // Drawing from `[0, i)` instead would never leave an element in place and
    // could not yield every permutation.
    let result = inside_out(source, items, capacity);
    if result.is_empty() {
        return Err(SamplingError::EmptySequence);
    }
    Ok(result)
}

/// Inside-out Fisher–Yates: element `i` lands in slot `j = bounded(i + 1)`;
/// when `j != i` the previous occupant of `j` moves to the end.
fn inside_out<I, R>(source: &mut R, items: I, capacity: usize) -> Vec<I::Item>
where
    I: Iterator,
    R: BoundedSource + ?Sized,
{
    let mut result = Vec::with_capacity(capacity);
    for item in items {
        let i = result.len();
        let j = index_below(source, i + 1);
        if j == i {
            result.push(item);
        } else {
            let displaced = std::mem::replace(&mut result[j], item);
            result.push(displaced);
        }
    }
    result
}
