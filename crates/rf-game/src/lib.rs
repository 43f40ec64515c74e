//! Game flow for the Rosefire Oracle.
//!
//! `GameSession` walks a player through the stages of a round (name, crush,
//! quiz, intro, game, result), validates each submission, and calls the
//! outcome engine once per round. `Preferences` persists the player's mode
//! and comfort toggles between runs.

pub mod config;
pub mod error;
pub mod prefs;
pub mod session;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use prefs::Preferences;
pub use session::{GameSession, GameState, RoundRecord, RoundReport, Stage};
