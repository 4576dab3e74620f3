//! # inigo-decay — Decaying append-only sequences.
//!
//! A [`DecayingSequence`] records items like a `Vec`, but every
//! [`record`](DecayingSequence::record) may merge two neighbouring items into
//! one, so that the length tends towards a logarithmic bound instead of a
//! linear one:
//! - **Exponential victim selection**: the merge position is drawn `Exp(1/half_life)`
//!   positions back from the newest item, so recent history is merged most often.
//! - **Neighbour compression**: a [`Compressor`](inigo_core::Compressor)
//!   folds the older and newer item of the pair into one replacement.
//! - **Hard bound**: optionally, everything past `bound` items is dropped after
//!   each record.

pub mod compress;
pub mod sampler;
pub mod sequence;

pub use compress::{prefer_newer, prefer_older};
pub use inigo_core::{Compressor, DecayConfig, RateSampler, SequenceError, UNBOUNDED};
pub use sampler::ExponentialSampler;
pub use sequence::DecayingSequence;
