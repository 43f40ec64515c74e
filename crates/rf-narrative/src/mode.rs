//! Narrative modes and their title tables.

use serde::{Deserialize, Serialize};

use crate::error::{NarrativeError, NarrativeResult};

/// The flavor of the narrative shown for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Gentle and dreamy.
    Sweet,
    /// Flirty and bold.
    #[default]
    Spicy,
    /// Unhinged.
    Chaotic,
}

/// Titles and call-to-action text for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeStyle {
    /// Titles for a won round.
    pub win_titles: [&'static str; 3],
    /// Titles for a lost round.
    pub lose_titles: [&'static str; 3],
    /// Titles for a tied round.
    pub tie_titles: [&'static str; 3],
    /// Closing line appended to a win.
    pub win_cta: &'static str,
}

const SWEET: ModeStyle = ModeStyle {
    win_titles: [
        "Soft Sparks, Big Promise",
        "Gentle Magic, Real Chemistry",
        "Heartfelt Green Flag",
    ],
    lose_titles: [
        "Sweet Vibe, Wrong Chapter",
        "Lovely But Not Aligned",
        "Not Your Soft Place",
    ],
    tie_titles: ["Tender Maybe", "A Soft Pause", "Not Yet, Beautifully"],
    win_cta: "Keep it warm, honest, and a little dreamy.",
};

const SPICY: ModeStyle = ModeStyle {
    win_titles: [
        "Chemistry: Certified",
        "A Burning Yes",
        "Your Flirt Energy Won",
    ],
    lose_titles: ["Not This Flame", "Hot, But Not Yours", "Wrong Fire Tonight"],
    tie_titles: ["A Teasing Maybe", "Heat Without Verdict", "Almost, Not Quite"],
    win_cta: "Text first. Overthink later.",
};

const CHAOTIC: ModeStyle = ModeStyle {
    win_titles: [
        "Unhinged Match Energy",
        "Chaos Says Yes",
        "Destiny Went Off Script",
    ],
    lose_titles: [
        "Chaos Rejected It",
        "Plot Twist: Nope",
        "This Timeline Is Cursed",
    ],
    tie_titles: [
        "Chaotic Maybe",
        "The Universe Is Buffering",
        "Undefined Romance",
    ],
    win_cta: "Cause a scene. Respectfully.",
};

impl Mode {
    /// All modes in display order.
    pub const ALL: [Self; 3] = [Self::Sweet, Self::Spicy, Self::Chaotic];

    /// Parse a mode name, case-insensitively.
    pub fn parse(s: &str) -> NarrativeResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "sweet" => Ok(Self::Sweet),
            "spicy" => Ok(Self::Spicy),
            "chaotic" => Ok(Self::Chaotic),
            _ => Err(NarrativeError::UnknownMode(s.to_string())),
        }
    }

    /// The title table for this mode.
    pub fn style(self) -> &'static ModeStyle {
        match self {
            Self::Sweet => &SWEET,
            Self::Spicy => &SPICY,
            Self::Chaotic => &CHAOTIC,
        }
    }

    /// The next mode, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// The previous mode, wrapping around.
    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        match self {
            Self::Sweet => 0,
            Self::Spicy => 1,
            Self::Chaotic => 2,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sweet => write!(f, "sweet"),
            Self::Spicy => write!(f, "spicy"),
            Self::Chaotic => write!(f, "chaotic"),
        }
    }
}
