//! The three rock-paper-scissors moves.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A player's or computer's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Move {
    /// All moves in draw order. A random index into this array picks the
    /// computer's move for an unforced round.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// The move this one defeats.
    pub fn defeats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// The move that defeats this one.
    pub fn defeated_by(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }

    /// Lowercase name, as used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
}

impl FromStr for Move {
    type Err = EngineError;

    /// Parse a move. Only the exact lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            other => Err(EngineError::InvalidMove(other.to_string())),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defeats_cycle() {
        assert_eq!(Move::Rock.defeats(), Move::Scissors);
        assert_eq!(Move::Paper.defeats(), Move::Rock);
        assert_eq!(Move::Scissors.defeats(), Move::Paper);
    }

    #[test]
    fn defeated_by_inverts_defeats() {
        for m in Move::ALL {
            assert_eq!(m.defeats().defeated_by(), m);
            assert_eq!(m.defeated_by().defeats(), m);
            assert_ne!(m.defeats(), m);
            assert_ne!(m.defeated_by(), m);
        }
    }

    #[test]
    fn parse_valid() {
        assert_eq!("rock".parse::<Move>(), Ok(Move::Rock));
        assert_eq!("paper".parse::<Move>(), Ok(Move::Paper));
        assert_eq!("scissors".parse::<Move>(), Ok(Move::Scissors));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "banana".parse::<Move>(),
            Err(EngineError::InvalidMove("banana".to_string()))
        );
        assert!("".parse::<Move>().is_err());
        assert!("Rock".parse::<Move>().is_err());
        assert!(" rock".parse::<Move>().is_err());
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for m in Move::ALL {
            assert_eq!(m.to_string().parse::<Move>(), Ok(m));
        }
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&Move::Scissors).unwrap();
        assert_eq!(json, "\"scissors\"");
        let back: Move = serde_json::from_str("\"paper\"").unwrap();
        assert_eq!(back, Move::Paper);
    }
}
