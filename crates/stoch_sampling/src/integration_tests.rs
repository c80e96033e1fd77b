//! Cross-module scenarios for the sampling layer.
//!
//! Fixed-seed vectors pin the observable output of the engine, the strategies
//! and the sequence operations together; any change to constants or draw
//! order shows up here first.

use crate::{FastRandom, PreciseRandom, RandomEngine, SamplingError};
use rayon::prelude::*;
use stoch_core::engine::Xoshiro256StarStar;

// ============================================================================
// Golden scenarios
// ============================================================================

#[test]
fn test_seed_one_precision_bounded_ten() {
    let mut rng = PreciseRandom::from_seed(0x1);
    let values = [rng.bounded_u64(10), rng.bounded_u64(10), rng.bounded_u64(10)];
    assert_eq!(values, [8, 9, 6]);

    let mut replay = PreciseRandom::from_seed(0x1);
    let again = [replay.bounded_u64(10), replay.bounded_u64(10), replay.bounded_u64(10)];
    assert_eq!(values, again);
}

#[test]
fn test_seed_one_shuffle_to_new() {
    let items = [1, 2, 3, 4, 5];
    let first = PreciseRandom::from_seed(0x1).shuffled(&items).unwrap();
    let second = PreciseRandom::from_seed(0x1).shuffled(&items).unwrap();
    assert_eq!(first, vec![1, 2, 4, 5, 3]);
    assert_eq!(first, second);
}

#[test]
fn test_seed_forty_two_vectors() {
    let items = [1, 2, 3, 4, 5];

    let mut rng = PreciseRandom::from_seed(42);
    let values: Vec<u64> = (0..5).map(|_| rng.bounded_u64(100)).collect();
    assert_eq!(values, vec![10, 48, 87, 98, 92]);

    assert_eq!(
        PreciseRandom::from_seed(42).shuffled(&items).unwrap(),
        vec![2, 3, 4, 1, 5]
    );

    let mut in_place = items;
    PreciseRandom::from_seed(42).shuffle(&mut in_place).unwrap();
    assert_eq!(in_place, [5, 4, 3, 2, 1]);

    let mut fast = FastRandom::from_seed(42);
    let values: Vec<u64> = (0..5).map(|_| fast.bounded_u64(10)).collect();
    assert_eq!(values, vec![0, 3, 6, 9, 9]);
}

#[test]
fn test_facade_matches_bit_engine_words() {
    let mut rng = FastRandom::from_seed(1);
    let mut bits = Xoshiro256StarStar::new(1);
    for _ in 0..64 {
        assert_eq!(rng.next_u64(), bits.next_u64());
    }
}

#[test]
fn test_modes_share_the_word_stream() {
    // Speed always draws exactly one word; Precision draws at least one.
    let mut fast = FastRandom::from_seed(3);
    let mut precise = PreciseRandom::from_seed(3);
    fast.bounded_u64(1_000);
    precise.bounded_u64(1_024);
    assert_eq!(fast.bit_engine(), precise.bit_engine());
}

// ============================================================================
// Error taxonomy
// ============================================================================

#[test]
fn test_errors_are_distinct() {
    let mut rng = PreciseRandom::from_seed(0);
    let range = rng.between(2u8, 1).unwrap_err();
    let empty = rng.single_from_iter(std::iter::empty::<u8>()).unwrap_err();
    assert!(matches!(range, SamplingError::InvalidRange { .. }));
    assert_eq!(empty, SamplingError::EmptySequence);
    assert_ne!(range, empty);
}

#[test]
fn test_full_width_ranges_draw_one_word() {
    let mut rng = PreciseRandom::from_seed(11);
    let mut bits = Xoshiro256StarStar::new(11);
    let value = rng.between(i64::MIN, i64::MAX).unwrap();
    assert_eq!(value, i64::MIN.wrapping_add(bits.next_u64() as i64));
    assert_eq!(rng.bit_engine(), &bits);
}

// ============================================================================
// Parallel streams
// ============================================================================

#[test]
fn test_jumped_streams_are_reproducible_in_parallel() {
    fn run(seed: u64) -> Vec<Vec<u64>> {
        let streams = PreciseRandom::from_seed(seed).jumped_streams(8);
        streams
            .into_par_iter()
            .map(|mut stream| (0..1_000).map(|_| stream.bounded_u64(1_000_000)).collect())
            .collect()
    }

    let first = run(2024);
    let second = run(2024);
    assert_eq!(first, second);

    for i in 0..first.len() {
        for j in (i + 1)..first.len() {
            assert_ne!(first[i], first[j], "streams {} and {} coincide", i, j);
        }
    }
}

#[test]
fn test_forked_engines_per_thread() {
    let mut root = RandomEngine::<crate::Speed>::from_seed(5);
    let children: Vec<_> = (0..4).map(|_| root.fork()).collect();
    let sums: Vec<f64> = children
        .into_par_iter()
        .map(|mut child| (0..10_000).map(|_| child.percent_f64()).sum::<f64>() / 10_000.0)
        .collect();
    for mean in sums {
        assert!((mean - 0.5).abs() < 0.02, "mean {} far from 0.5", mean);
    }
}
