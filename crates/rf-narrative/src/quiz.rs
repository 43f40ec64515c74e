//! The three-question chemistry quiz.
//!
//! Answers only color the narrative's flavor line; they never influence the
//! round outcome.

use serde::{Deserialize, Serialize};

use crate::error::{NarrativeError, NarrativeResult};

/// What sparks the player's interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spark {
    /// Eye contact.
    Eyes,
    /// Banter.
    Banter,
    /// A voice note.
    Voice,
}

/// How the player flirts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlirtStyle {
    /// Slow and soft.
    Soft,
    /// Confident.
    Bold,
    /// Unpredictable.
    Chaos,
}

/// The pace of romance the player wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rhythm {
    /// Slow burn.
    Slow,
    /// Fast-paced.
    Fast,
    /// Beautiful chaos.
    Unhinged,
}

impl Spark {
    /// Parse an answer, case-insensitively.
    pub fn parse(s: &str) -> NarrativeResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "eyes" => Ok(Self::Eyes),
            "banter" => Ok(Self::Banter),
            "voice" => Ok(Self::Voice),
            _ => Err(unknown("spark", s)),
        }
    }

    /// Phrase used in the flavor line.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Eyes => "intense eye contact",
            Self::Banter => "dangerously good banter",
            Self::Voice => "that irresistible voice note",
        }
    }
}

impl FlirtStyle {
    /// Parse an answer, case-insensitively.
    pub fn parse(s: &str) -> NarrativeResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "soft" => Ok(Self::Soft),
            "bold" => Ok(Self::Bold),
            "chaos" => Ok(Self::Chaos),
            _ => Err(unknown("style", s)),
        }
    }

    /// Phrase used in the flavor line.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Soft => "soft-burn",
            Self::Bold => "confident",
            Self::Chaos => "unpredictable",
        }
    }
}

impl Rhythm {
    /// Parse an answer, case-insensitively.
    pub fn parse(s: &str) -> NarrativeResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "slow" => Ok(Self::Slow),
            "fast" => Ok(Self::Fast),
            "unhinged" => Ok(Self::Unhinged),
            _ => Err(unknown("rhythm", s)),
        }
    }

    /// Phrase used in the flavor line.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Slow => "slow-burn romance",
            Self::Fast => "fast-paced thrill",
            Self::Unhinged => "beautiful chaos",
        }
    }
}

fn unknown(question: &'static str, value: &str) -> NarrativeError {
    NarrativeError::UnknownAnswer {
        question,
        value: value.to_string(),
    }
}

/// The player's quiz answers. Unanswered questions are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizAnswers {
    /// Answer to the spark question.
    pub spark: Option<Spark>,
    /// Answer to the style question.
    pub style: Option<FlirtStyle>,
    /// Answer to the rhythm question.
    pub rhythm: Option<Rhythm>,
}

impl QuizAnswers {
    /// Create an empty answer sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spark answer.
    pub fn with_spark(mut self, spark: Spark) -> Self {
        self.spark = Some(spark);
        self
    }

    /// Set the style answer.
    pub fn with_style(mut self, style: FlirtStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the rhythm answer.
    pub fn with_rhythm(mut self, rhythm: Rhythm) -> Self {
        self.rhythm = Some(rhythm);
        self
    }

    /// Whether all three questions are answered.
    pub fn is_complete(&self) -> bool {
        self.spark.is_some() && self.style.is_some() && self.rhythm.is_some()
    }

    /// The flavor sentence woven into every narrative.
    pub fn flavor_line(&self) -> String {
        let spark = self.spark.map_or("a magnetic spark", Spark::phrase);
        let style = self.style.map_or("playful", FlirtStyle::phrase);
        let rhythm = self.rhythm.map_or("unpredictable romance", Rhythm::phrase);
        format!("Your {style} flirting style craves {spark} and a {rhythm}.")
    }
}
