//! Themed narrative text for the Rosefire Oracle.
//!
//! Turns a round outcome, the chosen narrative mode, and the player's quiz
//! answers into a titled narrative, and supplies the reveal lines and hints
//! shown while a round is being decided.

pub mod error;
pub mod mode;
pub mod narrative;
pub mod quiz;
pub mod reveal;

pub use error::{NarrativeError, NarrativeResult};
pub use mode::{Mode, ModeStyle};
pub use narrative::{Narrative, NarrativeRequest, build_narrative};
pub use quiz::{FlirtStyle, QuizAnswers, Rhythm, Spark};
pub use reveal::{THINKING_HINT, default_hint, move_icon, reveal_lines};
