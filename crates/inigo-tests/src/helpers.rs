//! Shared test helpers for integration and property tests.

use std::cell::RefCell;
use std::rc::Rc;

use inigo_core::{DecayConfig, RateSampler};
use inigo_decay::{prefer_older, DecayingSequence, ExponentialSampler};
use rand::rngs::StdRng;

/// A contiguous run of record timestamps, `first..=last`.
///
/// Recording `Span::at(t)` for every timestamp and merging with
/// [`merge_spans`] turns a sequence into a coarse partition of its history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub first: u64,
    pub last: u64,
}

impl Span {
    pub fn at(t: u64) -> Self {
        Self { first: t, last: t }
    }

    pub fn width(&self) -> u64 {
        self.last - self.first + 1
    }
}

/// Compressor that summarizes two adjacent spans as their union.
pub fn merge_spans(older: Span, newer: Span) -> Span {
    Span {
        first: older.first,
        last: newer.last,
    }
}

/// Sequence of integers preferring older items, driven by a seeded sampler.
pub fn seeded_sequence(
    half_life: f64,
    bound: usize,
    seed: u64,
) -> DecayingSequence<u64, fn(u64, u64) -> u64, ExponentialSampler<StdRng>> {
    DecayingSequence::with_sampler(
        DecayConfig::bounded(half_life, bound),
        prefer_older as fn(u64, u64) -> u64,
        ExponentialSampler::seeded(seed),
    )
    .expect("valid half-life")
}

/// Record `0..n` into `seq`.
pub fn record_range<C, S>(seq: &mut DecayingSequence<u64, C, S>, n: u64)
where
    C: inigo_core::Compressor<u64>,
    S: RateSampler,
{
    for i in 0..n {
        seq.record(i);
    }
}

/// Shared log of every `(older, newer)` pair a compressor was called with.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<(u64, u64)>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A compressor that logs its arguments and keeps the newer item.
    pub fn compressor(&self) -> impl FnMut(u64, u64) -> u64 + use<> {
        let calls = Rc::clone(&self.calls);
        move |older, newer| {
            calls.borrow_mut().push((older, newer));
            newer
        }
    }

    pub fn calls(&self) -> Vec<(u64, u64)> {
        self.calls.borrow().clone()
    }
}

/// Arithmetic mean of a non-empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}
