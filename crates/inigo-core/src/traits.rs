//! Trait interfaces for Inigo sequences.
//!
//! These traits are the two capabilities a sequence is built from:
//! - [`Compressor`] — merges two adjacent items into one summary item
//! - [`RateSampler`] — picks how far back from the newest item decay strikes

/// Merges an older item and a newer item into a single replacement item.
///
/// A compressor may return either input unchanged or synthesize a new
/// summary. Sequences always pass the chronologically older item first.
///
/// Implemented for every `FnMut(T, T) -> T`, so plain functions and closures
/// can be used directly. Compressors should be pure; `FnMut` is accepted so
/// that a compressor can keep its own bookkeeping.
pub trait Compressor<T> {
    /// Combine `older` and `newer` into one item.
    fn compress(&mut self, older: T, newer: T) -> T;
}

impl<T, F> Compressor<T> for F
where
    F: FnMut(T, T) -> T,
{
    fn compress(&mut self, older: T, newer: T) -> T {
        self(older, newer)
    }
}

/// Source of decay offsets.
///
/// Given a rate `λ` (the reciprocal of the half-life), returns a nonnegative
/// real number distributed like `Exp(λ)`. Sequences floor the result to choose
/// how many positions back from the newest item to merge.
///
/// Implemented for every `FnMut(f64) -> f64`, which lets tests script exact
/// offsets.
pub trait RateSampler {
    /// Draw one offset for the given rate.
    fn sample(&mut self, rate: f64) -> f64;
}

impl<F> RateSampler for F
where
    F: FnMut(f64) -> f64,
{
    fn sample(&mut self, rate: f64) -> f64 {
        self(rate)
    }
}
