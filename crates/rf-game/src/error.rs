//! Error types for the game flow.

use thiserror::Error;

use crate::session::Stage;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while driving a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// A required name was blank.
    #[error("please enter {field}")]
    EmptyName {
        /// Which name was missing.
        field: &'static str,
    },

    /// Not every quiz question was answered.
    #[error("please answer all three quiz questions")]
    IncompleteQuiz,

    /// An action was attempted in the wrong stage.
    #[error("cannot do that now: expected {expected} stage, currently at {actual}")]
    WrongStage {
        /// The stage the action requires.
        expected: Stage,
        /// The current stage.
        actual: Stage,
    },

    /// Preferences could not be written.
    #[error("preferences: {0}")]
    Prefs(String),

    /// Outcome engine error.
    #[error("{0}")]
    Engine(#[from] rf_core::EngineError),
}
