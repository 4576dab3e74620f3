//! Decay parameters for an Inigo sequence.

use serde::{Deserialize, Serialize};

use crate::error::SequenceError;

/// Bound value meaning "no hard cap on sequence length".
pub const UNBOUNDED: usize = 0;

/// Parameters fixed at sequence construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayConfig {
    /// Expected number of records after which an item has a 50% chance of
    /// having been merged away. Must be finite and positive.
    pub half_life: f64,
    /// Hard cap on sequence length. [`UNBOUNDED`] (0) disables the cap.
    #[serde(default)]
    pub bound: usize,
}

impl DecayConfig {
    /// Configuration with no length cap.
    pub fn unbounded(half_life: f64) -> Self {
        Self {
            half_life,
            bound: UNBOUNDED,
        }
    }

    /// Configuration capped at `bound` items (0 means unbounded).
    pub fn bounded(half_life: f64, bound: usize) -> Self {
        Self { half_life, bound }
    }

    /// Check the half-life is a finite positive number.
    pub fn validate(&self) -> Result<(), SequenceError> {
        if !self.half_life.is_finite() || self.half_life <= 0.0 {
            return Err(SequenceError::InvalidConfiguration(format!(
                "half-life must be finite and positive, got {}",
                self.half_life
            )));
        }
        Ok(())
    }

    /// Rate parameter handed to the sampler: `1 / half_life`.
    pub fn rate(&self) -> f64 {
        1.0 / self.half_life
    }

    pub fn is_bounded(&self) -> bool {
        self.bound != UNBOUNDED
    }
}
