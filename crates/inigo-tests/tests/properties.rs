//! Property-based tests for decaying sequences.
//!
//! Each property runs over randomized half-lives, bounds, seeds and history
//! lengths with proptest shrinking to produce minimal failing examples.

use inigo_core::DecayConfig;
use inigo_decay::{DecayingSequence, ExponentialSampler};
use inigo_tests::helpers::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn bound_is_never_exceeded(
        seed in any::<u64>(),
        half_life in 0.05f64..100.0,
        bound in 1usize..64,
        n in 0u64..1_000,
    ) {
        let mut seq = seeded_sequence(half_life, bound, seed);
        for i in 0..n {
            seq.record(i);
            prop_assert!(seq.len() <= bound);
        }
    }

    #[test]
    fn same_seed_same_contents(
        seed in any::<u64>(),
        half_life in 0.05f64..100.0,
        bound in 0usize..32,
        n in 0u64..1_000,
    ) {
        let mut a = seeded_sequence(half_life, bound, seed);
        let mut b = seeded_sequence(half_life, bound, seed);
        record_range(&mut a, n);
        record_range(&mut b, n);
        prop_assert_eq!(a.to_vec(), b.to_vec());
    }

    #[test]
    fn survivors_stay_in_insertion_order(
        seed in any::<u64>(),
        half_life in 0.05f64..50.0,
        bound in 0usize..32,
        n in 0u64..1_000,
    ) {
        let mut seq = seeded_sequence(half_life, bound, seed);
        record_range(&mut seq, n);
        prop_assert!(seq.iter().zip(seq.iter().skip(1)).all(|(a, b)| a < b));
    }

    #[test]
    fn compressor_arguments_are_chronological(
        seed in any::<u64>(),
        half_life in 0.05f64..20.0,
        n in 0u64..1_000,
    ) {
        let log = CallLog::new();
        let mut seq = DecayingSequence::with_sampler(
            DecayConfig::unbounded(half_life),
            log.compressor(),
            ExponentialSampler::seeded(seed),
        )
        .unwrap();
        record_range(&mut seq, n);
        for (older, newer) in log.calls() {
            prop_assert!(older < newer, "({}, {})", older, newer);
        }
    }

    #[test]
    fn unbounded_spans_partition_history(
        seed in any::<u64>(),
        half_life in 0.05f64..20.0,
        n in 1u64..1_000,
    ) {
        let mut seq = DecayingSequence::with_sampler(
            DecayConfig::unbounded(half_life),
            merge_spans,
            ExponentialSampler::seeded(seed),
        )
        .unwrap();
        for t in 0..n {
            seq.record(Span::at(t));
        }
        let spans = seq.to_vec();
        prop_assert_eq!(spans[0].first, 0);
        prop_assert_eq!(spans[spans.len() - 1].last, n - 1);
        for w in spans.windows(2) {
            prop_assert_eq!(w[0].last + 1, w[1].first);
        }
    }

    #[test]
    fn bounded_spans_stay_ordered_and_disjoint(
        seed in any::<u64>(),
        half_life in 0.05f64..20.0,
        bound in 1usize..16,
        n in 1u64..1_000,
    ) {
        // Truncation drops the newest spans, so later records leave gaps.
        let mut seq = DecayingSequence::with_sampler(
            DecayConfig::bounded(half_life, bound),
            merge_spans,
            ExponentialSampler::seeded(seed),
        )
        .unwrap();
        for t in 0..n {
            seq.record(Span::at(t));
        }
        let spans = seq.to_vec();
        prop_assert!(spans.len() <= bound);
        prop_assert_eq!(spans[0].first, 0);
        prop_assert!(spans[spans.len() - 1].last < n);
        for w in spans.windows(2) {
            prop_assert!(w[0].last < w[1].first, "{:?} overlaps {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn first_record_is_never_the_newer_argument(
        seed in any::<u64>(),
        half_life in 0.05f64..20.0,
        bound in 0usize..16,
        n in 1u64..500,
    ) {
        // Index 0 is only ever the older half of a pair, even when every
        // merge keeps the newer item.
        let log = CallLog::new();
        let mut seq = DecayingSequence::with_sampler(
            DecayConfig::bounded(half_life, bound),
            log.compressor(),
            ExponentialSampler::seeded(seed),
        )
        .unwrap();
        record_range(&mut seq, n);
        prop_assert!(log.calls().iter().all(|&(_, newer)| newer != 0));
        let first_is_older = log.calls().iter().any(|&(older, _)| older == 0);
        prop_assert_eq!(seq[0] == 0, !first_is_older);
    }
}
