//! Error types for the outcome engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while computing a round outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The player's move is not one of rock, paper, or scissors.
    #[error("invalid move: {0}")]
    InvalidMove(String),
}
