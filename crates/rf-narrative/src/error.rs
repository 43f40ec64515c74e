//! Error types for narrative inputs.

use thiserror::Error;

/// Result type for narrative operations.
pub type NarrativeResult<T> = Result<T, NarrativeError>;

/// Errors raised while parsing narrative inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrativeError {
    /// Unknown narrative mode.
    #[error("unknown mode: {0} (expected sweet, spicy, or chaotic)")]
    UnknownMode(String),

    /// Unknown answer to a quiz question.
    #[error("unknown {question} answer: {value}")]
    UnknownAnswer {
        /// The question being answered.
        question: &'static str,
        /// The rejected answer.
        value: String,
    },
}
