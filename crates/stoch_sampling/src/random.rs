//! Seeded random engine facade.
//!
//! [`RandomEngine`] owns a [`Xoshiro256StarStar`] and exposes every sampler in
//! the crate through one value. The fidelity strategy is a type parameter, so
//! [`PreciseRandom`] and [`FastRandom`] are distinct types and no sampler
//! checks a mode flag at runtime.

use std::marker::PhantomData;

use chrono::{DateTime, TimeDelta, Utc};
use rand::RngCore;
use rand_distr::{Distribution, StandardNormal};
use stoch_core::engine::{BitSource, Xoshiro256StarStar};
use stoch_core::types::{FidelityMode, Result};
use uuid::Uuid;

use crate::bounded::{UniformFloat, UniformInt};
use crate::sequence::{self, BoundedSource};
use crate::strategy::{Precision, SamplingStrategy, Speed};
use crate::typed::{character, decimal, enumeration, temporal, Decimal, Enumerable, RawValue};

/// Engine using rejection sampling and exponent search.
pub type PreciseRandom = RandomEngine<Precision>;

/// Engine using scaled and truncated draws.
pub type FastRandom = RandomEngine<Speed>;

/// Deterministic random engine.
///
/// Two engines built from the same seed with the same strategy produce
/// identical sequences for every operation, on every platform.
///
/// The engine is not synchronised. For parallel work, give each thread its
/// own engine from [`RandomEngine::jumped_streams`] or [`RandomEngine::fork`].
///
/// # Examples
///
/// ```rust
/// use stoch_sampling::PreciseRandom;
///
/// let mut rng = PreciseRandom::from_seed(42);
///
/// let die: u8 = rng.between(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
///
/// let p = rng.percent_f64();
/// assert!((0.0..1.0).contains(&p));
///
/// let mut deck: Vec<u32> = (0..52).collect();
/// rng.shuffle(&mut deck).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomEngine<S: SamplingStrategy = Precision> {
    /// The underlying bit engine.
    bits: Xoshiro256StarStar,
    /// The seed last applied (kept for reproducibility tracking).
    seed: u64,
    strategy: PhantomData<S>,
}

impl<S: SamplingStrategy> RandomEngine<S> {
    /// Creates an engine initialised with the given seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stoch_sampling::FastRandom;
    ///
    /// let mut a = FastRandom::from_seed(7);
    /// let mut b = FastRandom::from_seed(7);
    /// assert_eq!(a.next_u64(), b.next_u64());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            bits: Xoshiro256StarStar::new(seed),
            seed,
            strategy: PhantomData,
        }
    }

    /// Creates an engine seeded from operating-system entropy.
    ///
    /// The chosen seed is retained and available through [`RandomEngine::seed`]
    /// so the run can be replayed.
    ///
    /// # Errors
    ///
    /// Returns `Entropy` if the operating system source fails.
    pub fn from_entropy() -> Result<Self> {
        let seed = stoch_core::engine::entropy_seed()?;
        tracing::debug!(seed, mode = %S::MODE, "random engine seeded from entropy");
        Ok(Self::from_seed(seed))
    }

    /// Returns the seed last applied.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the fidelity mode fixed by the strategy type.
    #[inline]
    pub fn mode(&self) -> FidelityMode {
        S::MODE
    }

    /// Returns the underlying bit engine.
    #[inline]
    pub fn bit_engine(&self) -> &Xoshiro256StarStar {
        &self.bits
    }

    /// Restarts the sequence from `seed`; afterwards the engine behaves
    /// exactly like `from_seed(seed)`.
    pub fn reseed(&mut self, seed: u64) {
        tracing::trace!(seed, "random engine reseeded");
        self.bits.reseed(seed);
        self.seed = seed;
    }

    // ========================================================================
    // Raw words and bytes
    // ========================================================================

    /// Next 64-bit output word.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.bits.next_u64()
    }

    /// High 32 bits of the next output word.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.bits.next_u64() >> 32) as u32
    }

    /// Fills `buffer` with random bytes, one word per eight bytes.
    #[inline]
    pub fn fill_bytes(&mut self, buffer: &mut [u8]) {
        BitSource::fill(&mut self.bits, buffer);
    }

    /// Value of any [`RawValue`] type built from raw bytes.
    #[inline]
    pub fn raw<T: RawValue>(&mut self) -> T {
        T::from_source(&mut self.bits)
    }

    /// Random bool from the low bit of one byte.
    #[inline]
    pub fn boolean(&mut self) -> bool {
        self.raw()
    }

    /// UUID from 16 raw bytes. No version or variant bits are set.
    #[inline]
    pub fn uuid(&mut self) -> Uuid {
        self.raw()
    }

    // ========================================================================
    // Bounded integers
    // ========================================================================

    /// Value in `[0, exclusive_max)`; bounds `<= 1` return 0 without drawing.
    #[inline]
    pub fn bounded_u64(&mut self, exclusive_max: u64) -> u64 {
        S::bounded_u64(&mut self.bits, exclusive_max)
    }

    /// 128-bit counterpart of [`RandomEngine::bounded_u64`].
    #[inline]
    pub fn bounded_u128(&mut self, exclusive_max: u128) -> u128 {
        S::bounded_u128(&mut self.bits, exclusive_max)
    }

    /// Value of any integer type in `[0, exclusive_max)`.
    #[inline]
    pub fn below<T: UniformInt>(&mut self, exclusive_max: T) -> T {
        T::below::<S, _>(&mut self.bits, exclusive_max)
    }

    /// Value of any integer type in `[min, max]`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `max < min`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stoch_sampling::PreciseRandom;
    ///
    /// let mut rng = PreciseRandom::from_seed(1);
    /// assert_eq!(rng.between(-3i32, -3).unwrap(), -3);
    /// assert!(rng.between(5u8, 4).is_err());
    /// ```
    #[inline]
    pub fn between<T: UniformInt>(&mut self, min: T, max: T) -> Result<T> {
        T::between::<S, _>(&mut self.bits, min, max)
    }

    // ========================================================================
    // Floating point
    // ========================================================================

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn percent_f64(&mut self) -> f64 {
        S::percent_f64(&mut self.bits)
    }

    /// Uniform `f32` in `[0, 1)`.
    #[inline]
    pub fn percent_f32(&mut self) -> f32 {
        S::percent_f32(&mut self.bits)
    }

    /// Float in `[min, max]` from one percentage draw.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if a bound is not finite or `max < min`.
    #[inline]
    pub fn float_between<T: UniformFloat>(&mut self, min: T, max: T) -> Result<T> {
        T::between::<S, _>(&mut self.bits, min, max)
    }

    /// `true` with probability `probability`.
    ///
    /// Probabilities at or below zero (and NaN) give `false`, at or above one
    /// give `true`; neither draws.
    pub fn chance(&mut self, probability: f64) -> bool {
        if probability >= 1.0 {
            return true;
        }
        if probability.is_nan() || probability <= 0.0 {
            return false;
        }
        self.percent_f64() < probability
    }

    /// Standard normal variate (mean 0, standard deviation 1).
    ///
    /// Uses the Ziggurat method from `rand_distr::StandardNormal`, driven by
    /// this engine's raw words.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.bits)
    }

    /// Fills `buffer` with percentages in `[0, 1)`.
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = S::percent_f64(&mut self.bits);
        }
    }

    /// Fills `buffer` with standard normal variates.
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.bits);
        }
    }

    // ========================================================================
    // Typed values
    // ========================================================================

    /// Member of a fieldless enumeration declared with
    /// [`enumerable!`](crate::enumerable).
    ///
    /// # Errors
    ///
    /// - `Unsupported` for flag-style enumerations
    /// - `EmptySequence` if the enumeration has no members
    #[inline]
    pub fn enum_member<E: Enumerable>(&mut self) -> Result<E> {
        enumeration::member::<E, S, _>(&mut self.bits)
    }

    /// Unicode scalar value, uniform over all 1,112,064 of them.
    #[inline]
    pub fn char(&mut self) -> char {
        character::any_char::<S, _>(&mut self.bits)
    }

    /// Unicode scalar value in `[min, max]`, skipping surrogates.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `max < min`.
    #[inline]
    pub fn char_between(&mut self, min: char, max: char) -> Result<char> {
        character::char_between::<S, _>(&mut self.bits, min, max)
    }

    /// Any time span representable in 64-bit ticks.
    #[inline]
    pub fn time_span(&mut self) -> TimeDelta {
        temporal::time_span(&mut self.bits)
    }

    /// Time span in `[min, max]` at tick resolution.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` if `max < min`
    /// - `TickOverflow` if a bound exceeds the tick range
    #[inline]
    pub fn time_span_between(&mut self, min: TimeDelta, max: TimeDelta) -> Result<TimeDelta> {
        temporal::time_span_between::<S, _>(&mut self.bits, min, max)
    }

    /// Timestamp between 0001-01-01 and 9999-12-31.
    #[inline]
    pub fn timestamp(&mut self) -> DateTime<Utc> {
        temporal::timestamp::<S, _>(&mut self.bits)
    }

    /// Timestamp in `[min, max]` at tick resolution.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` if `max < min`
    /// - `TickOverflow` if a bound is outside 0001-01-01..=9999-12-31
    #[inline]
    pub fn timestamp_between(
        &mut self,
        min: DateTime<Utc>,
        max: DateTime<Utc>,
    ) -> Result<DateTime<Utc>> {
        temporal::timestamp_between::<S, _>(&mut self.bits, min, max)
    }

    /// Decimal in `[0, 1)` with 28 fractional digits.
    #[inline]
    pub fn decimal(&mut self) -> Decimal {
        decimal::unit_decimal::<S, _>(&mut self.bits)
    }

    /// Bounded decimal ranges are not implemented.
    ///
    /// # Errors
    ///
    /// Always returns `Unsupported`; the engine state is unchanged.
    #[inline]
    pub fn decimal_between(&mut self, min: Decimal, max: Decimal) -> Result<Decimal> {
        decimal::decimal_between(min, max)
    }

    // ========================================================================
    // Sequences
    // ========================================================================

    /// Uniformly chosen element of a slice.
    ///
    /// # Errors
    ///
    /// Returns `EmptySequence` if `items` is empty.
    #[inline]
    pub fn single<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        sequence::single(self, items)
    }

    /// Uniformly chosen element of a one-pass sequence (reservoir sampling).
    ///
    /// # Errors
    ///
    /// Returns `EmptySequence` if the sequence yields nothing.
    #[inline]
    pub fn single_from_iter<I: IntoIterator>(&mut self, items: I) -> Result<I::Item> {
        sequence::single_from_iter(self, items)
    }

    /// Shuffles `items` in place.
    ///
    /// # Errors
    ///
    /// Returns `EmptySequence` if `items` is empty.
    #[inline]
    pub fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()> {
        sequence::shuffle_in_place(self, items)
    }

    /// Shuffled copy of `items`.
    ///
    /// # Errors
    ///
    /// Returns `EmptySequence` if `items` is empty.
    #[inline]
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Result<Vec<T>> {
        sequence::shuffled(self, items)
    }

    /// Shuffled collection of a one-pass sequence.
    ///
    /// # Errors
    ///
    /// Returns `EmptySequence` if the sequence yields nothing.
    #[inline]
    pub fn shuffled_from_iter<I: IntoIterator>(&mut self, items: I) -> Result<Vec<I::Item>> {
        sequence::shuffled_from_iter(self, items)
    }

    // ========================================================================
    // Stream splitting
    // ========================================================================

    /// Child engine seeded from one draw of this engine.
    ///
    /// The child's sequence is reproducible from the parent's seed, but it is
    /// not guaranteed disjoint from the parent's; use
    /// [`RandomEngine::jumped_streams`] when non-overlap matters.
    pub fn fork(&mut self) -> Self {
        let seed = self.next_u64();
        tracing::debug!(parent = self.seed, child = seed, "random engine forked");
        Self::from_seed(seed)
    }

    /// `count` engines whose sequences are 2^128 words apart.
    ///
    /// Stream `k` starts where this engine would be after `k` jumps. This
    /// engine is left `count` jumps ahead, past every returned stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stoch_sampling::PreciseRandom;
    ///
    /// let mut root = PreciseRandom::from_seed(99);
    /// let streams = root.jumped_streams(4);
    /// assert_eq!(streams.len(), 4);
    /// assert_ne!(streams[0].bit_engine(), streams[1].bit_engine());
    /// ```
    pub fn jumped_streams(&mut self, count: usize) -> Vec<Self> {
        let mut streams = Vec::with_capacity(count);
        for _ in 0..count {
            streams.push(self.clone());
            self.bits.jump();
        }
        tracing::debug!(seed = self.seed, count, "jumped streams created");
        streams
    }
}

impl<S: SamplingStrategy> Default for RandomEngine<S> {
    /// Engine seeded with 0.
    fn default() -> Self {
        Self::from_seed(0)
    }
}

impl<S: SamplingStrategy> BitSource for RandomEngine<S> {
    #[inline]
    fn next64(&mut self) -> u64 {
        self.bits.next_u64()
    }
}

impl<S: SamplingStrategy> BoundedSource for RandomEngine<S> {
    #[inline]
    fn bounded_u64(&mut self, exclusive_max: u64) -> u64 {
        S::bounded_u64(&mut self.bits, exclusive_max)
    }
}

impl<S: SamplingStrategy> RngCore for RandomEngine<S> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        RandomEngine::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.bits.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        RandomEngine::fill_bytes(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        RandomEngine::fill_bytes(self, dest);
        Ok(())
    }
}
