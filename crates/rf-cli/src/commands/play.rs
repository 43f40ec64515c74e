//! Interactive game loop over stdin.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use colored::Colorize;

use rf_core::{RandomSource, RoundResult};
use rf_game::{GameConfig, GameError, GameSession, Preferences, Stage};
use rf_narrative::{
    FlirtStyle, Mode, NarrativeError, QuizAnswers, Rhythm, Spark, THINKING_HINT,
};

const LINE_PAUSE: Duration = Duration::from_millis(420);

pub fn run(prefs_path: &Path, seed: Option<u64>, mode: Option<&str>) -> Result<(), String> {
    let mut prefs = super::load_prefs(prefs_path);
    let mode = super::resolve_mode(mode, &prefs)?;

    let config = GameConfig {
        seed,
        mode,
        ..GameConfig::default()
    };
    let mut random = config.random_source();
    let mut session = GameSession::new(&config);
    let pauses = io::stdout().is_terminal() && !prefs.reduced_motion;

    println!("  {} Rosefire Oracle", "Welcome to".bold());
    println!("  Mode: {mode}");
    println!("  Type 'quit' at any prompt to leave.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        let keep_going = match session.stage() {
            Stage::Name => ask_name(&mut reader, &mut session, false)?,
            Stage::Crush => ask_name(&mut reader, &mut session, true)?,
            Stage::Quiz => ask_quiz(&mut reader, &mut session)?,
            Stage::Intro => {
                println!("  Chemistry locked. Press enter to start the game.");
                match read_input(&mut reader, "")? {
                    Some(_) => {
                        session.start_game().map_err(|e| e.to_string())?;
                        true
                    }
                    None => false,
                }
            }
            Stage::Game | Stage::Result => {
                ask_move(&mut reader, &mut session, &mut random, &mut prefs, prefs_path, pauses)?
            }
        };
        if !keep_going {
            break;
        }
    }

    println!("  Goodbye!");
    Ok(())
}

/// Read one trimmed line after printing `prompt`. `None` on EOF or quit.
fn read_input(reader: &mut impl BufRead, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => return Ok(None),
        Err(e) => return Err(e.to_string()),
        _ => {}
    }

    let input = line.trim();
    if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
        return Ok(None);
    }
    Ok(Some(input.to_string()))
}

fn ask_name(
    reader: &mut impl BufRead,
    session: &mut GameSession,
    crush: bool,
) -> Result<bool, String> {
    let prompt = if crush { "Your crush's name " } else { "Your name " };
    let Some(input) = read_input(reader, prompt)? else {
        return Ok(false);
    };

    let submitted = if crush {
        session.submit_crush(&input)
    } else {
        session.submit_name(&input)
    };
    match submitted {
        Ok(()) if crush => println!("  Now, a little chemistry quiz.\n"),
        Ok(()) => println!("  Welcome {}. Who is your crush?\n", input.bold()),
        Err(e) => println!("  {}", e.to_string().yellow()),
    }
    Ok(true)
}

fn ask_quiz(reader: &mut impl BufRead, session: &mut GameSession) -> Result<bool, String> {
    let mut quiz = QuizAnswers::new();

    while quiz.spark.is_none() {
        let Some(input) = read_input(reader, "What sparks you? (eyes/banter/voice) ")? else {
            return Ok(false);
        };
        match Spark::parse(&input) {
            Ok(spark) => quiz = quiz.with_spark(spark),
            Err(e) => println!("  {}", e.to_string().yellow()),
        }
    }
    while quiz.style.is_none() {
        let Some(input) = read_input(reader, "Your flirting style? (soft/bold/chaos) ")? else {
            return Ok(false);
        };
        match FlirtStyle::parse(&input) {
            Ok(style) => quiz = quiz.with_style(style),
            Err(e) => println!("  {}", e.to_string().yellow()),
        }
    }
    while quiz.rhythm.is_none() {
        let Some(input) = read_input(reader, "Your rhythm? (slow/fast/unhinged) ")? else {
            return Ok(false);
        };
        match Rhythm::parse(&input) {
            Ok(rhythm) => quiz = quiz.with_rhythm(rhythm),
            Err(e) => println!("  {}", e.to_string().yellow()),
        }
    }

    session.submit_quiz(quiz).map_err(|e| e.to_string())?;
    Ok(true)
}

fn ask_move(
    reader: &mut impl BufRead,
    session: &mut GameSession,
    random: &mut impl RandomSource,
    prefs: &mut Preferences,
    prefs_path: &Path,
    pauses: bool,
) -> Result<bool, String> {
    println!("  {}", session.hint().italic());
    let Some(input) = read_input(reader, "rock/paper/scissors ")? else {
        return Ok(false);
    };

    let lower = input.to_lowercase();
    let (cmd, rest) = lower
        .split_once(' ')
        .map_or((lower.as_str(), ""), |(cmd, rest)| (cmd, rest.trim()));

    match cmd {
        "" => {}
        "again" => println!("  Pick your next move."),
        "restart" => {
            session.restart();
            println!("  Restarted. Enter your name.\n");
        }
        "mode" => match next_mode(session.mode(), rest) {
            Ok(mode) => {
                session.set_mode(mode);
                prefs.mode = mode;
                if let Err(e) = prefs.save(prefs_path) {
                    log::warn!("{e}");
                }
                println!("  Mode set to {mode}.");
            }
            Err(e) => println!("  {}", e.to_string().yellow()),
        },
        _ => play_round(session, &lower, random, prefs, pauses)?,
    }
    Ok(true)
}

/// `mode next` / `mode prev` cycle like the arrow keys; anything else names a mode.
fn next_mode(current: Mode, arg: &str) -> Result<Mode, NarrativeError> {
    match arg {
        "next" | "n" => Ok(current.next()),
        "prev" | "previous" | "p" => Ok(current.previous()),
        name => Mode::parse(name),
    }
}

/// Wins ring the terminal bell unless muted. Reduced motion does not silence it.
fn rings_bell(result: RoundResult, prefs: &Preferences, terminal: bool) -> bool {
    result == RoundResult::Win && !prefs.muted && terminal
}

fn play_round(
    session: &mut GameSession,
    player_move: &str,
    random: &mut impl RandomSource,
    prefs: &Preferences,
    pauses: bool,
) -> Result<(), String> {
    let report = match session.play(player_move, random) {
        Ok(report) => report,
        Err(e @ GameError::Engine(_)) => {
            println!("  {}", e.to_string().yellow());
            return Ok(());
        }
        Err(e) => return Err(e.to_string()),
    };

    println!("  {}", THINKING_HINT.italic());
    for line in &report.reveal_lines {
        if pauses {
            thread::sleep(LINE_PAUSE);
        }
        println!("  {}", line.dimmed());
    }
    println!();

    super::print_round(report.player_move, &report.outcome, &report.narrative);
    if rings_bell(report.outcome.result, prefs, io::stdout().is_terminal()) {
        print!("\x07");
    }
    println!("\n  Type a move to play again, 'mode next', 'restart', or 'quit'.\n");
    Ok(())
}
