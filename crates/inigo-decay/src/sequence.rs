//! The decaying sequence.
//!
//! Every [`record`](DecayingSequence::record) appends one item and then may
//! merge one adjacent pair. The pair is chosen by counting back
//! `floor(Exp(1 / half_life))` positions from the newest item, so merges
//! cluster near the recent end and old items become progressively coarser.
//! Length grows roughly like `half_life * ln(records)`.

use std::fmt;
use std::ops::Index;

use inigo_core::{Compressor, DecayConfig, RateSampler, SequenceError};
use tracing::{debug, trace};

use crate::sampler::ExponentialSampler;

/// Largest backing capacity reserved up front for a bounded sequence.
/// Bounds above this grow the backing vector on demand.
const PREALLOC_LIMIT: usize = 1024;

/// An append-only sequence that loses detail as it grows.
///
/// Items keep their relative insertion order. The only mutator is
/// [`record`](Self::record); reads go through slice-like accessors.
pub struct DecayingSequence<T, C, S = ExponentialSampler> {
    items: Vec<T>,
    config: DecayConfig,
    compressor: C,
    sampler: S,
}

impl<T, C> DecayingSequence<T, C, ExponentialSampler>
where
    C: Compressor<T>,
{
    /// Unbounded sequence using the thread-local exponential sampler.
    pub fn new(half_life: f64, compressor: C) -> Result<Self, SequenceError> {
        Self::with_sampler(
            DecayConfig::unbounded(half_life),
            compressor,
            ExponentialSampler::new(),
        )
    }

    /// Sequence capped at `bound` items (0 means unbounded), using the
    /// thread-local exponential sampler.
    pub fn bounded(half_life: f64, compressor: C, bound: usize) -> Result<Self, SequenceError> {
        Self::with_sampler(
            DecayConfig::bounded(half_life, bound),
            compressor,
            ExponentialSampler::new(),
        )
    }
}

impl<T, C, S> DecayingSequence<T, C, S>
where
    C: Compressor<T>,
    S: RateSampler,
{
    /// Fully specified constructor.
    pub fn with_sampler(config: DecayConfig, compressor: C, sampler: S) -> Result<Self, SequenceError> {
        config.validate()?;
        debug!(half_life = config.half_life, bound = config.bound, "creating decaying sequence");
        let items = if config.is_bounded() {
            Vec::with_capacity(config.bound.saturating_add(1).min(PREALLOC_LIMIT))
        } else {
            Vec::new()
        };
        Ok(Self {
            items,
            config,
            compressor,
            sampler,
        })
    }

    /// Remember an item for an indeterminate amount of time.
    ///
    /// Appends `item`, then draws an offset and merges the pair ending
    /// `floor(offset)` positions before the newest index. Index 0 is never the
    /// newer half of a pair, so a single item never decays. Bounded sequences
    /// are truncated to `bound` afterwards.
    ///
    /// Negative or NaN offsets count as 0; offsets reaching past the front
    /// (including infinity) mean no merge.
    pub fn record(&mut self, item: T) {
        self.items.push(item);
        let last = self.items.len() - 1;

        let offset = self.sampler.sample(self.config.rate());
        // Saturating cast: floors toward zero, clamps NaN and negatives to 0.
        let back = offset as usize;

        if back < last {
            self.merge_at(last - back);
        }

        if self.config.is_bounded() && self.items.len() > self.config.bound {
            let dropped = self.items.len() - self.config.bound;
            self.items.truncate(self.config.bound);
            trace!(dropped, bound = self.config.bound, "truncated to bound");
        }
    }

    /// Replace `items[i - 1]` with `compress(items[i - 1], items[i])` and
    /// drop `items[i]`. Requires `0 < i < len`.
    fn merge_at(&mut self, i: usize) {
        let newer = self.items.remove(i);
        let older = self.items.remove(i - 1);
        let merged = self.compressor.compress(older, newer);
        self.items.insert(i - 1, merged);
        trace!(index = i, len = self.items.len(), "merged neighbours");
    }
}

impl<T, C, S> DecayingSequence<T, C, S> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Checked indexed access.
    pub fn try_get(&self, index: usize) -> Result<&T, SequenceError> {
        self.items.get(index).ok_or(SequenceError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Index counted from the newest item: `get_from_end(0)` is the last
    /// recorded survivor.
    pub fn get_from_end(&self, back: usize) -> Option<&T> {
        let len = self.items.len();
        if back >= len {
            return None;
        }
        self.items.get(len - 1 - back)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Copy the current contents out. The copy is independent of the sequence.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn half_life(&self) -> f64 {
        self.config.half_life
    }

    /// Length cap, or 0 when unbounded.
    pub fn bound(&self) -> usize {
        self.config.bound
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }
}

impl<T, C, S> Index<usize> for DecayingSequence<T, C, S> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T, C, S> AsRef<[T]> for DecayingSequence<T, C, S> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T, C, S> IntoIterator for &'a DecayingSequence<T, C, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, C, S> fmt::Debug for DecayingSequence<T, C, S>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DecayingSequence").field(&self.items).finish()
    }
}

impl<T, C, S> fmt::Display for DecayingSequence<T, C, S>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DecayingSequence([")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("])")
    }
}

// Equality is element-wise over contents; compressor and sampler are ignored.

impl<T, C1, S1, C2, S2> PartialEq<DecayingSequence<T, C2, S2>> for DecayingSequence<T, C1, S1>
where
    T: PartialEq,
{
    fn eq(&self, other: &DecayingSequence<T, C2, S2>) -> bool {
        self.items == other.items
    }
}

impl<T: PartialEq, C, S> PartialEq<[T]> for DecayingSequence<T, C, S> {
    fn eq(&self, other: &[T]) -> bool {
        self.items.as_slice() == other
    }
}

impl<T: PartialEq, C, S> PartialEq<&[T]> for DecayingSequence<T, C, S> {
    fn eq(&self, other: &&[T]) -> bool {
        self.items.as_slice() == *other
    }
}

impl<T: PartialEq, C, S> PartialEq<Vec<T>> for DecayingSequence<T, C, S> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.items == other
    }
}

impl<T: PartialEq, C, S, const N: usize> PartialEq<[T; N]> for DecayingSequence<T, C, S> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items.as_slice() == other.as_slice()
    }
}
