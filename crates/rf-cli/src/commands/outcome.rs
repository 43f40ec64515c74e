//! One-shot round: decide, narrate, print.

use std::path::Path;

use serde::Serialize;

use rf_core::{
    EngineError, Move, RoundInput, RoundOutcome, compute_outcome, is_name_space,
};
use rf_game::GameConfig;
use rf_narrative::{FlirtStyle, NarrativeRequest, QuizAnswers, Rhythm, Spark, build_narrative};

pub struct OutcomeArgs<'a> {
    pub user: &'a str,
    pub crush: &'a str,
    pub player_move: &'a str,
    pub seed: Option<u64>,
    pub mode: Option<&'a str>,
    pub spark: Option<&'a str>,
    pub style: Option<&'a str>,
    pub rhythm: Option<&'a str>,
    pub json: bool,
    pub html: bool,
}

#[derive(Serialize)]
struct JsonOutcome {
    player_move: Move,
    #[serde(flatten)]
    outcome: RoundOutcome,
}

pub fn run(prefs_path: &Path, args: &OutcomeArgs<'_>) -> Result<(), String> {
    let prefs = super::load_prefs(prefs_path);
    let mode = super::resolve_mode(args.mode, &prefs)?;
    let quiz = parse_quiz(args)?;

    let config = GameConfig {
        seed: args.seed,
        mode,
        ..GameConfig::default()
    };
    let mut random = config.random_source();

    let input = RoundInput {
        user_name: args.user,
        crush_name: args.crush,
        player_move: args.player_move,
    };
    let outcome = compute_outcome(&input, &mut random).map_err(|e| e.to_string())?;
    let player_move: Move = args
        .player_move
        .parse()
        .map_err(|e: EngineError| e.to_string())?;

    if args.json {
        let json = serde_json::to_string(&JsonOutcome {
            player_move,
            outcome,
        })
        .map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let narrative = build_narrative(
        &NarrativeRequest {
            mode,
            result: outcome.result,
            rule: outcome.rule,
            user_name: args.user.trim_matches(is_name_space),
            crush_name: args.crush.trim_matches(is_name_space),
            quiz: &quiz,
        },
        &mut random,
    );
    if args.html {
        println!("{}", narrative.to_html());
    } else {
        super::print_round(player_move, &outcome, &narrative);
    }
    Ok(())
}

fn parse_quiz(args: &OutcomeArgs<'_>) -> Result<QuizAnswers, String> {
    let mut quiz = QuizAnswers::new();
    if let Some(s) = args.spark {
        quiz = quiz.with_spark(Spark::parse(s).map_err(|e| e.to_string())?);
    }
    if let Some(s) = args.style {
        quiz = quiz.with_style(FlirtStyle::parse(s).map_err(|e| e.to_string())?);
    }
    if let Some(s) = args.rhythm {
        quiz = quiz.with_rhythm(Rhythm::parse(s).map_err(|e| e.to_string())?);
    }
    Ok(quiz)
}
