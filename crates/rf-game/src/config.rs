//! Configuration for a game session.

use rf_core::{OutcomeEngine, ReservedIdentities, SeededRandom};
use rf_narrative::Mode;

/// Configuration for a game session.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for reproducible rounds. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Narrative mode at start.
    pub mode: Mode,
    /// Reserved identity table used by the outcome engine.
    pub identities: ReservedIdentities,
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the reserved identity table.
    pub fn with_identities(mut self, identities: ReservedIdentities) -> Self {
        self.identities = identities;
        self
    }

    /// Build the random source described by this config.
    pub fn random_source(&self) -> SeededRandom {
        match self.seed {
            Some(seed) => SeededRandom::from_seed(seed),
            None => SeededRandom::from_entropy(),
        }
    }

    /// Build the outcome engine described by this config.
    pub fn engine(&self) -> OutcomeEngine {
        OutcomeEngine::new(self.identities.clone())
    }
}
