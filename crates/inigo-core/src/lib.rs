//! # inigo-core
//! Foundation types and traits for Inigo decaying sequences.

pub mod config;
pub mod error;
pub mod traits;

pub use config::{DecayConfig, UNBOUNDED};
pub use error::SequenceError;
pub use traits::{Compressor, RateSampler};
