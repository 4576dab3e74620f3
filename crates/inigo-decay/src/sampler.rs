//! Exponential offset sampling.
//!
//! Offsets are drawn by inverse transform: for `u` uniform in `[0, 1)`,
//! `-ln(1 - u) / rate` is `Exp(rate)` distributed. Because `1 - u` lies in
//! `(0, 1]`, every draw is finite and nonnegative for a finite positive rate.

use inigo_core::RateSampler;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// The default [`RateSampler`]: exponential draws from a uniform generator.
///
/// `ExponentialSampler::new()` uses the thread-local generator. Use
/// [`seeded`](ExponentialSampler::seeded) for reproducible sequences.
#[derive(Debug, Clone)]
pub struct ExponentialSampler<R = ThreadRng> {
    rng: R,
}

impl ExponentialSampler<ThreadRng> {
    /// Sampler backed by `rand::thread_rng()`.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ExponentialSampler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl ExponentialSampler<StdRng> {
    /// Deterministic sampler: identical seeds yield identical offset streams.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> ExponentialSampler<R> {
    /// Sampler over a caller-supplied generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RateSampler for ExponentialSampler<R> {
    fn sample(&mut self, rate: f64) -> f64 {
        let u: f64 = self.rng.gen_range(0.0..1.0);
        -(1.0 - u).ln() / rate
    }
}
