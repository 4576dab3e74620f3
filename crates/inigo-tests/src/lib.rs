//! Statistical and property test suite for Inigo.
//!
//! This crate holds integration tests that drive decaying sequences through
//! long randomized histories and check the behavioural guarantees: bound
//! enforcement, sub-linear growth, determinism under a seeded sampler, order
//! preservation and the older-then-newer compressor contract.

pub mod helpers;
