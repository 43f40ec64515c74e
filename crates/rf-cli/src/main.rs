//! CLI frontend for the Rosefire Oracle fortune game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(
    name = "rosefire",
    about = "Rosefire Oracle — names, a chemistry quiz, and a very honest game of rock-paper-scissors",
    version,
    propagate_version = true
)]
struct Cli {
    /// Preferences file (default: ~/.config/rosefire/prefs.json)
    #[arg(long, global = true, env = "ROSEFIRE_PREFS")]
    prefs: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively: names, quiz, then rock-paper-scissors
    Play {
        /// RNG seed for reproducible rounds
        #[arg(short, long)]
        seed: Option<u64>,

        /// Narrative mode: sweet, spicy, chaotic (default: saved preference)
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Decide a single round and print its narrative
    Outcome {
        /// The player's name
        #[arg(short, long)]
        user: String,

        /// The crush's name
        #[arg(short, long)]
        crush: String,

        /// The player's move: rock, paper, scissors
        #[arg(long = "move")]
        player_move: String,

        /// RNG seed for reproducible rounds
        #[arg(short, long)]
        seed: Option<u64>,

        /// Narrative mode: sweet, spicy, chaotic (default: saved preference)
        #[arg(short, long)]
        mode: Option<String>,

        /// Quiz answer: eyes, banter, voice
        #[arg(long)]
        spark: Option<String>,

        /// Quiz answer: soft, bold, chaos
        #[arg(long)]
        style: Option<String>,

        /// Quiz answer: slow, fast, unhinged
        #[arg(long)]
        rhythm: Option<String>,

        /// Print the outcome as JSON instead of a narrative
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Print the narrative paragraphs as an HTML fragment
        #[arg(long)]
        html: bool,
    },

    /// Show or change saved preferences
    Prefs {
        #[command(subcommand)]
        action: Option<PrefsAction>,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Print the saved preferences
    Show,

    /// Set the narrative mode
    Mode {
        /// sweet, spicy, or chaotic
        mode: String,
    },

    /// Flip a toggle: muted, contrast, motion
    Toggle {
        /// Which toggle to flip
        toggle: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();
    // A logger can only be installed once per process.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let prefs_path = commands::prefs_path(cli.prefs);

    let result = match cli.command {
        Commands::Play { seed, mode } => commands::play::run(&prefs_path, seed, mode.as_deref()),
        Commands::Outcome {
            user,
            crush,
            player_move,
            seed,
            mode,
            spark,
            style,
            rhythm,
            json,
            html,
        } => commands::outcome::run(
            &prefs_path,
            &commands::outcome::OutcomeArgs {
                user: &user,
                crush: &crush,
                player_move: &player_move,
                seed,
                mode: mode.as_deref(),
                spark: spark.as_deref(),
                style: style.as_deref(),
                rhythm: rhythm.as_deref(),
                json,
                html,
            },
        ),
        Commands::Prefs { action } => match action {
            None | Some(PrefsAction::Show) => commands::prefs::show(&prefs_path),
            Some(PrefsAction::Mode { mode }) => commands::prefs::set_mode(&prefs_path, &mode),
            Some(PrefsAction::Toggle { toggle }) => commands::prefs::toggle(&prefs_path, &toggle),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
