pub mod outcome;
pub mod play;
pub mod prefs;

use std::path::{Path, PathBuf};

use colored::{ColoredString, Colorize};

use rf_core::{Move, RoundOutcome, RoundResult};
use rf_game::Preferences;
use rf_narrative::{Mode, Narrative, move_icon};

const PREFS_FILE: &str = "rosefire-prefs.json";

/// Resolve the preferences file: explicit path, else under `$HOME/.config`,
/// else the current directory.
pub fn prefs_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home)
            .join(".config")
            .join("rosefire")
            .join("prefs.json"),
        None => PathBuf::from(PREFS_FILE),
    }
}

/// Load preferences and apply the terminal-wide ones.
fn load_prefs(path: &Path) -> Preferences {
    let prefs = Preferences::load(path);
    if prefs.high_contrast {
        colored::control::set_override(false);
    }
    prefs
}

/// The `--mode` flag wins over the saved preference.
fn resolve_mode(flag: Option<&str>, prefs: &Preferences) -> Result<Mode, String> {
    match flag {
        Some(name) => Mode::parse(name).map_err(|e| e.to_string()),
        None => Ok(prefs.mode),
    }
}

fn colorize_result(text: &str, result: RoundResult) -> ColoredString {
    match result {
        RoundResult::Win => text.green().bold(),
        RoundResult::Lose => text.red().bold(),
        RoundResult::Tie => text.yellow().bold(),
    }
}

/// Print a decided round: the two hands, the title, the narrative body, and a
/// one-line summary to share.
fn print_round(player_move: Move, outcome: &RoundOutcome, narrative: &Narrative) {
    println!(
        "  {} {}  vs  {} {}",
        move_icon(player_move),
        player_move,
        move_icon(outcome.computer_move),
        outcome.computer_move,
    );
    println!();
    println!("  {}", colorize_result(&narrative.title, narrative.result_class));
    for paragraph in &narrative.paragraphs {
        println!("  {paragraph}");
    }
    println!();
    println!("  {} {}", "Share:".bold(), narrative.summary.dimmed());
}
