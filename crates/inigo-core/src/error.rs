//! Error types for Inigo sequences.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("invalid configuration: {0}")] InvalidConfiguration(String),
    #[error("index out of range: {index} >= {len}")] IndexOutOfRange { index: usize, len: usize },
}
