//! Outcome rule engine for the Rosefire Oracle.
//!
//! Normalizes the two names entered by the player, classifies them against a
//! table of reserved identities, and decides the computer's move for a round
//! of rock-paper-scissors: either deliberately forced toward a win or a loss,
//! or drawn uniformly from an injected random source.
//!
//! Everything here is pure. Nothing performs I/O or holds shared state.

pub mod engine;
pub mod error;
pub mod identity;
pub mod moves;
pub mod name;
pub mod random;

pub use engine::{
    OutcomeEngine, RoundInput, RoundOutcome, RoundResult, Rule, compute_outcome,
    determine_winner,
};
pub use error::{EngineError, EngineResult};
pub use identity::{ReservedIdentities, is_primary_identity, is_secondary_identity};
pub use moves::Move;
pub use name::{is_name_space, normalize_name};
pub use random::{RandomSource, SeededRandom, pick_index};
