//! Game session management.
//!
//! The session owns no randomness: every round draws from a source passed in
//! by the caller. All progress lives in [`GameState`], a plain struct that can
//! be taken out of a session and handed back later.

use serde::{Deserialize, Serialize};

use rf_core::{Move, OutcomeEngine, RandomSource, RoundOutcome, is_name_space};
use rf_narrative::{
    Mode, Narrative, NarrativeRequest, QuizAnswers, build_narrative, default_hint, reveal_lines,
};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};

/// The screens a player walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Waiting for the player's name.
    #[default]
    Name,
    /// Waiting for the crush's name.
    Crush,
    /// Waiting for quiz answers.
    Quiz,
    /// Quiz done, waiting for the player to start.
    Intro,
    /// Waiting for a move.
    Game,
    /// A round has been decided.
    Result,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Crush => write!(f, "crush"),
            Self::Quiz => write!(f, "quiz"),
            Self::Intro => write!(f, "intro"),
            Self::Game => write!(f, "game"),
            Self::Result => write!(f, "result"),
        }
    }
}

/// The player's last decided round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// The player's move.
    pub player_move: Move,
    /// The decided outcome.
    pub outcome: RoundOutcome,
}

/// Everything a session knows about the current game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current stage.
    pub stage: Stage,
    /// The player's name, trimmed.
    pub user_name: String,
    /// The crush's name, trimmed.
    pub crush_name: String,
    /// Quiz answers.
    pub quiz: QuizAnswers,
    /// Narrative mode.
    pub mode: Mode,
    /// The last decided round, if any.
    pub last_round: Option<RoundRecord>,
    /// Incremented on every round and restart.
    pub round_token: u64,
}

/// Everything produced by one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    /// Token identifying this round.
    pub token: u64,
    /// The player's move.
    pub player_move: Move,
    /// The decided outcome.
    pub outcome: RoundOutcome,
    /// Lines shown before the reveal.
    pub reveal_lines: [String; 3],
    /// The narrated result.
    pub narrative: Narrative,
}

/// An interactive game session.
#[derive(Debug, Clone)]
pub struct GameSession {
    engine: OutcomeEngine,
    state: GameState,
}

impl GameSession {
    /// Create a fresh session at the name stage.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            engine: config.engine(),
            state: GameState {
                mode: config.mode,
                ..GameState::default()
            },
        }
    }

    /// Resume a session from previously taken state.
    pub fn from_state(config: &GameConfig, state: GameState) -> Self {
        Self {
            engine: config.engine(),
            state,
        }
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Give up the session, keeping its state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Switch the narrative mode. Allowed in any stage.
    pub fn set_mode(&mut self, mode: Mode) {
        log::debug!("mode set to {mode}");
        self.state.mode = mode;
    }

    /// Submit the player's name.
    pub fn submit_name(&mut self, name: &str) -> GameResult<()> {
        self.expect_stage(Stage::Name)?;
        self.state.user_name = required(name, "your name")?;
        self.advance(Stage::Crush);
        Ok(())
    }

    /// Submit the crush's name.
    pub fn submit_crush(&mut self, name: &str) -> GameResult<()> {
        self.expect_stage(Stage::Crush)?;
        self.state.crush_name = required(name, "their name")?;
        self.advance(Stage::Quiz);
        Ok(())
    }

    /// Submit the quiz. All three questions must be answered.
    pub fn submit_quiz(&mut self, quiz: QuizAnswers) -> GameResult<()> {
        self.expect_stage(Stage::Quiz)?;
        if !quiz.is_complete() {
            return Err(GameError::IncompleteQuiz);
        }
        self.state.quiz = quiz;
        self.advance(Stage::Intro);
        Ok(())
    }

    /// Move from the intro to the game.
    pub fn start_game(&mut self) -> GameResult<()> {
        self.expect_stage(Stage::Intro)?;
        self.advance(Stage::Game);
        Ok(())
    }

    /// Hint for the move prompt.
    pub fn hint(&self) -> &'static str {
        default_hint(
            self.engine
                .classify(&self.state.user_name, &self.state.crush_name),
        )
    }

    /// Play a round. Allowed in the game stage, or again from the result.
    ///
    /// An invalid move leaves the session untouched and consumes no
    /// randomness.
    pub fn play<R>(&mut self, player_move: &str, random: &mut R) -> GameResult<RoundReport>
    where
        R: RandomSource + ?Sized,
    {
        if !matches!(self.state.stage, Stage::Game | Stage::Result) {
            return Err(GameError::WrongStage {
                expected: Stage::Game,
                actual: self.state.stage,
            });
        }

        let player_move: Move = player_move.parse()?;
        let outcome = self.engine.decide(
            &self.state.user_name,
            &self.state.crush_name,
            player_move,
            random,
        );

        self.state.round_token += 1;
        log::debug!(
            "round {}: {player_move} vs {} -> {} ({})",
            self.state.round_token,
            outcome.computer_move,
            outcome.result,
            outcome.rule
        );

        let narrative = build_narrative(
            &NarrativeRequest {
                mode: self.state.mode,
                result: outcome.result,
                rule: outcome.rule,
                user_name: &self.state.user_name,
                crush_name: &self.state.crush_name,
                quiz: &self.state.quiz,
            },
            random,
        );

        self.state.last_round = Some(RoundRecord {
            player_move,
            outcome,
        });
        self.advance(Stage::Result);

        Ok(RoundReport {
            token: self.state.round_token,
            player_move,
            outcome,
            reveal_lines: reveal_lines(outcome.rule, &self.state.crush_name),
            narrative,
        })
    }

    /// Whether `token` still identifies the latest round.
    ///
    /// A restart or a newer round makes older tokens stale.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.state.round_token
    }

    /// Reset to the name stage, keeping the mode.
    pub fn restart(&mut self) {
        let mode = self.state.mode;
        let round_token = self.state.round_token + 1;
        self.state = GameState {
            mode,
            round_token,
            ..GameState::default()
        };
        log::debug!("session restarted");
    }

    fn expect_stage(&self, expected: Stage) -> GameResult<()> {
        if self.state.stage == expected {
            Ok(())
        } else {
            Err(GameError::WrongStage {
                expected,
                actual: self.state.stage,
            })
        }
    }

    fn advance(&mut self, next: Stage) {
        log::debug!("stage {} -> {next}", self.state.stage);
        self.state.stage = next;
    }
}

fn required(value: &str, field: &'static str) -> GameResult<String> {
    let trimmed = value.trim_matches(is_name_space);
    if trimmed.is_empty() {
        Err(GameError::EmptyName { field })
    } else {
        Ok(trimmed.to_string())
    }
}
