//! Integration tests for the rf-cli binary commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `rosefire` command isolated from the user's saved preferences.
fn rosefire(prefs: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rosefire").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("ROSEFIRE_PREFS")
        .arg("--prefs")
        .arg(prefs_file(prefs));
    cmd
}

fn prefs_file(dir: &TempDir) -> PathBuf {
    dir.path().join("prefs.json")
}

// ---------------------------------------------------------------------------
// outcome
// ---------------------------------------------------------------------------

#[test]
fn outcome_forced_win_json() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args([
            "outcome",
            "--user",
            "  AnAnyAa  Singh ",
            "--crush",
            "jenish",
            "--move",
            "rock",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "{\"player_move\":\"rock\",\"computer_move\":\"scissors\",\"result\":\"win\",\"rule\":\"forced_win\"}\n",
        ));
}

#[test]
fn outcome_substring_target_is_forced_lose() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args([
            "outcome", "-u", "Ananyaa", "-c", "Jenish Shobhit", "--move", "paper", "--json",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"computer_move\":\"scissors\"")
                .and(predicate::str::contains("\"result\":\"lose\""))
                .and(predicate::str::contains("\"rule\":\"forced_lose\"")),
        );
}

#[test]
fn outcome_random_is_reproducible_with_seed() {
    let dir = TempDir::new().unwrap();
    let args = [
        "outcome", "-u", "Riya", "-c", "Jenish", "--move", "rock", "--seed", "7", "--json",
    ];
    let first = rosefire(&dir).args(args).assert().success();
    let first = String::from_utf8(first.get_output().stdout.clone()).unwrap();
    assert!(first.contains("\"rule\":\"random\""));

    rosefire(&dir)
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::diff(first));
}

#[test]
fn outcome_prints_narrative() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args([
            "outcome", "-u", "Ananyaa", "-c", "Jenish", "--move", "scissors", "--mode", "sweet",
            "--spark", "voice", "--style", "soft", "--rhythm", "slow",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ananyaa, this one is non-negotiable.")
                .and(predicate::str::contains("Jenish is star-approved for you tonight."))
                .and(predicate::str::contains(
                    "Your soft-burn flirting style craves that irresistible voice note and a slow-burn romance.",
                ))
                .and(predicate::str::contains("Keep it warm, honest, and a little dreamy.")),
        );
}

#[test]
fn outcome_prints_share_summary() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args(["outcome", "-u", "Ananyaa", "-c", "Jenish", "--move", "rock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Share: ").and(predicate::str::contains(
            ". Ananyaa + Jenish. win. Your playful flirting style craves a magnetic spark",
        )));
}

#[test]
fn outcome_html_escapes_names() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args(["outcome", "-u", "Ananyaa", "-c", "<Jen & co>", "--move", "paper", "--html"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("<p>⚡ <strong>Ananyaa</strong>, fate is being strict")
                .and(predicate::str::contains("<strong>&lt;Jen &amp; co&gt;</strong>"))
                .and(predicate::str::contains("Share:").not()),
        );
}

#[test]
fn outcome_json_and_html_conflict() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args(["outcome", "-u", "X", "-c", "Y", "--move", "rock", "--json", "--html"])
        .assert()
        .failure();
}

#[test]
fn outcome_bom_prefixed_name_is_primary() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args(["outcome", "-u", "\u{FEFF}Ananyaa", "-c", "Jenish", "--move", "rock", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rule\":\"forced_win\""));
}

#[test]
fn outcome_invalid_move_fails() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args(["outcome", "-u", "X", "-c", "Y", "--move", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid move: banana"));
}

#[test]
fn outcome_unknown_mode_fails() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args(["outcome", "-u", "X", "-c", "Y", "--move", "rock", "--mode", "mild"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown mode: mild"));
}

#[test]
fn outcome_unknown_quiz_answer_fails() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args(["outcome", "-u", "X", "-c", "Y", "--move", "rock", "--rhythm", "glacial"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown rhythm answer: glacial"));
}

// ---------------------------------------------------------------------------
// prefs
// ---------------------------------------------------------------------------

#[test]
fn prefs_show_defaults() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Mode:           spicy")
                .and(predicate::str::contains("Muted:          off")),
        );
}

#[test]
fn prefs_mode_persists() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args(["prefs", "mode", "chaotic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode set to chaotic."));

    let saved = fs::read_to_string(prefs_file(&dir)).unwrap();
    assert!(saved.contains("\"chaotic\""));

    rosefire(&dir)
        .arg("prefs")
        .assert()
        .success()
        .stdout(predicate::str::contains("chaotic"));
}

#[test]
fn prefs_toggle_flips_and_saves() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args(["prefs", "toggle", "motion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reduced motion: on"));
    rosefire(&dir)
        .args(["prefs", "toggle", "motion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reduced motion: off"));
}

#[test]
fn prefs_unknown_toggle_fails() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args(["prefs", "toggle", "volume"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown toggle: volume"));
}

#[test]
fn saved_mode_drives_outcome_narrative() {
    let dir = TempDir::new().unwrap();
    fs::write(prefs_file(&dir), r#"{"mode":"chaotic"}"#).unwrap();
    rosefire(&dir)
        .args(["outcome", "-u", "Ananyaa", "-c", "Jenish", "--move", "rock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cause a scene. Respectfully."));
}

#[test]
fn corrupt_prefs_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(prefs_file(&dir), "{ nope").unwrap();
    rosefire(&dir)
        .args(["outcome", "-u", "Ananyaa", "-c", "Jenish", "--move", "rock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Text first. Overthink later."));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_random_round() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .args(["play", "--seed", "3"])
        .write_stdin("Riya\nArjun\neyes\nbold\nslow\n\nrock\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome Riya")
                .and(predicate::str::contains("Choose a move. Make it confident. Make it cute."))
                .and(predicate::str::contains("Reading your heartbeat pattern..."))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_forced_win_round() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .arg("play")
        .write_stdin("Ananyaa\nJenish\nbanter\nchaos\nfast\n\npaper\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Locking fate with Jenish...")
                .and(predicate::str::contains("Ananyaa, this one is non-negotiable."))
                .and(predicate::str::contains("paper  vs")),
        );
}

#[test]
fn play_forced_lose_hint() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .arg("play")
        .write_stdin("Ananyaa Singh\nRahul\nvoice\nsoft\nunhinged\n\nscissors\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The stars look picky tonight. Choose anyway.")
                .and(predicate::str::contains("Protective destiny protocol activated."))
                .and(predicate::str::contains("Rahul is rejected in this timeline.")),
        );
}

#[test]
fn play_reprompts_on_bad_input() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .arg("play")
        .write_stdin("   \nRiya\nArjun\nsparkle\neyes\nbold\nslow\n\nbanana\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("please enter your name")
                .and(predicate::str::contains("unknown spark answer: sparkle"))
                .and(predicate::str::contains("invalid move: banana")),
        );
}

#[test]
fn play_mode_switch_is_saved() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .arg("play")
        .write_stdin("Riya\nArjun\neyes\nbold\nslow\n\nmode sweet\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode set to sweet."));

    let saved = fs::read_to_string(prefs_file(&dir)).unwrap();
    assert!(saved.contains("\"sweet\""));
}

#[test]
fn play_mode_next_cycles_and_saves() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .arg("play")
        .write_stdin("Riya\nArjun\neyes\nbold\nslow\n\nmode next\nmode prev\nmode prev\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Mode set to chaotic.")
                .and(predicate::str::contains("Mode set to spicy."))
                .and(predicate::str::contains("Mode set to sweet.")),
        );

    let saved = fs::read_to_string(prefs_file(&dir)).unwrap();
    assert!(saved.contains("\"sweet\""));
}

#[test]
fn play_restart_returns_to_name() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .arg("play")
        .write_stdin("Riya\nArjun\neyes\nbold\nslow\n\nrock\nrestart\nMeera\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Restarted. Enter your name.")
                .and(predicate::str::contains("Welcome Meera")),
        );
}

#[test]
fn play_ends_cleanly_on_eof() {
    let dir = TempDir::new().unwrap();
    rosefire(&dir)
        .arg("play")
        .write_stdin("Riya\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}
