//! Round outcome decisions.
//!
//! Rules are evaluated in a fixed precedence, first match wins:
//!
//! 1. primary user with the secondary target: the computer throws the move the
//!    player defeats (`forced_win`);
//! 2. primary user with anyone else: the computer throws the move that defeats
//!    the player (`forced_lose`);
//! 3. everyone else: the computer move is drawn uniformly from the random
//!    source (`random`).
//!
//! The result is always derived from the final move pair, never hard-coded.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::identity::ReservedIdentities;
use crate::moves::Move;
use crate::random::{RandomSource, pick_index};

/// Result of a round from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundResult {
    /// The player's move defeats the computer's.
    Win,
    /// The computer's move defeats the player's.
    Lose,
    /// Both threw the same move.
    Tie,
}

impl RoundResult {
    /// Lowercase name, as used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Tie => "tie",
        }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the computer's move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Chosen to guarantee the player wins.
    ForcedWin,
    /// Chosen to guarantee the player loses.
    ForcedLose,
    /// Drawn uniformly at random.
    Random,
}

impl Rule {
    /// Snake-case tag, as used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ForcedWin => "forced_win",
            Self::ForcedLose => "forced_lose",
            Self::Random => "random",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for a single round, as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundInput<'a> {
    /// The player's display name.
    pub user_name: &'a str,
    /// The name of the player's crush.
    pub crush_name: &'a str,
    /// The player's move, unvalidated.
    pub player_move: &'a str,
}

/// The decided outcome of one round. Built fresh per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The computer's move.
    pub computer_move: Move,
    /// The result relative to the player's move.
    pub result: RoundResult,
    /// Why `computer_move` was chosen.
    pub rule: Rule,
}

/// Decide the result of `player` against `computer`.
pub fn determine_winner(player: Move, computer: Move) -> RoundResult {
    if player == computer {
        RoundResult::Tie
    } else if player.defeats() == computer {
        RoundResult::Win
    } else {
        RoundResult::Lose
    }
}

/// Stateless outcome engine parameterized by a reserved identity table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeEngine {
    identities: ReservedIdentities,
}

impl OutcomeEngine {
    /// Create an engine over the given identity table.
    pub fn new(identities: ReservedIdentities) -> Self {
        Self { identities }
    }

    /// The identity table in use.
    pub fn identities(&self) -> &ReservedIdentities {
        &self.identities
    }

    /// Decide which rule applies to a pair of names.
    pub fn classify(&self, user_name: &str, crush_name: &str) -> Rule {
        if !self.identities.is_primary(user_name) {
            Rule::Random
        } else if self.identities.is_secondary(crush_name) {
            Rule::ForcedWin
        } else {
            Rule::ForcedLose
        }
    }

    /// Decide the outcome for an already-validated move.
    ///
    /// The random source is only consulted under [`Rule::Random`].
    pub fn decide<R>(
        &self,
        user_name: &str,
        crush_name: &str,
        player_move: Move,
        random: &mut R,
    ) -> RoundOutcome
    where
        R: RandomSource + ?Sized,
    {
        let rule = self.classify(user_name, crush_name);
        let computer_move = match rule {
            Rule::ForcedWin => player_move.defeats(),
            Rule::ForcedLose => player_move.defeated_by(),
            Rule::Random => Move::ALL[pick_index(random.next_unit(), Move::ALL.len())],
        };

        RoundOutcome {
            computer_move,
            result: determine_winner(player_move, computer_move),
            rule,
        }
    }

    /// Validate the move and decide the outcome of a round.
    ///
    /// Fails with [`EngineError::InvalidMove`](crate::EngineError::InvalidMove)
    /// before any randomness is consumed.
    pub fn compute_outcome<R>(
        &self,
        input: &RoundInput<'_>,
        random: &mut R,
    ) -> EngineResult<RoundOutcome>
    where
        R: RandomSource + ?Sized,
    {
        let player_move: Move = input.player_move.parse()?;
        Ok(self.decide(input.user_name, input.crush_name, player_move, random))
    }
}

/// Compute a round outcome with the default identity table.
pub fn compute_outcome<R>(input: &RoundInput<'_>, random: &mut R) -> EngineResult<RoundOutcome>
where
    R: RandomSource + ?Sized,
{
    OutcomeEngine::default().compute_outcome(input, random)
}
