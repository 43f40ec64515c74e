//! Reveal lines, hints, and move icons shown around a round.

use rf_core::{Move, Rule};

/// Hint shown while a round is being decided.
pub const THINKING_HINT: &str = "Destiny is blushing... deciding...";

const DEFAULT_HINT: &str = "Choose a move. Make it confident. Make it cute.";
const PICKY_HINT: &str = "The stars look picky tonight. Choose anyway.";

/// The lines typed out before the result is revealed.
pub fn reveal_lines(rule: Rule, crush_name: &str) -> [String; 3] {
    match rule {
        Rule::ForcedWin => [
            "Reading your chemistry signature...".to_string(),
            format!("Locking fate with {crush_name}..."),
            "Verdict sealed with a rose-gold stamp.".to_string(),
        ],
        Rule::ForcedLose => [
            "Scanning this pairing...".to_string(),
            "Stars detected mismatch.".to_string(),
            "Protective destiny protocol activated.".to_string(),
        ],
        Rule::Random => [
            "Reading your heartbeat pattern...".to_string(),
            "Cross-checking chemistry with moonlight...".to_string(),
            "Destiny is choosing your answer now...".to_string(),
        ],
    }
}

/// The hint shown at the move prompt for a pair classified as `rule`.
pub fn default_hint(rule: Rule) -> &'static str {
    match rule {
        Rule::ForcedLose => PICKY_HINT,
        Rule::ForcedWin | Rule::Random => DEFAULT_HINT,
    }
}

/// Hand icon for a move.
pub fn move_icon(mv: Move) -> &'static str {
    match mv {
        Move::Rock => "✊",
        Move::Paper => "✋",
        Move::Scissors => "✌️",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_win_mentions_crush() {
        let lines = reveal_lines(Rule::ForcedWin, "Jenish");
        assert_eq!(lines[1], "Locking fate with Jenish...");
    }

    #[test]
    fn forced_lose_and_random_lines() {
        assert_eq!(reveal_lines(Rule::ForcedLose, "x")[1], "Stars detected mismatch.");
        assert_eq!(
            reveal_lines(Rule::Random, "x")[2],
            "Destiny is choosing your answer now..."
        );
    }

    #[test]
    fn hints() {
        assert_eq!(default_hint(Rule::ForcedLose), PICKY_HINT);
        assert_eq!(default_hint(Rule::ForcedWin), DEFAULT_HINT);
        assert_eq!(default_hint(Rule::Random), DEFAULT_HINT);
    }

    #[test]
    fn icons_are_distinct() {
        assert_ne!(move_icon(Move::Rock), move_icon(Move::Paper));
        assert_ne!(move_icon(Move::Paper), move_icon(Move::Scissors));
    }
}
