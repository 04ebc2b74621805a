//! Self-play CLI
//!
//! Run matches between Makruk engines and save the games as JSON.

use std::env;
use std::path::PathBuf;

use alphabeta_engine::{Ai, Difficulty, EngineSettings};
use anyhow::{bail, Context, Result};
use makruk_core::Engine;
use random_engine::RandomEngine;
use selfplay::{MatchConfig, MatchRunner};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Makruk self-play runner");
    println!();
    println!("Usage:");
    println!("  selfplay match <engine1> <engine2> [--games N] [--difficulty D]");
    println!("                 [--config FILE] [--settings FILE] [--out FILE]");
    println!();
    println!("Engines:");
    println!("  alphabeta     - Negamax with alpha-beta, TT and quiescence");
    println!("  random        - Uniform random legal moves");
    println!();
    println!("Difficulties: easy, medium, hard, expert");
    println!();
    println!("Examples:");
    println!("  selfplay match alphabeta random --games 20 --difficulty easy");
    println!("  selfplay match alphabeta alphabeta --config match.toml --out games.json");
}

fn create_engine(
    name: &str,
    difficulty: Difficulty,
    settings: &EngineSettings,
) -> Result<Box<dyn Engine>> {
    match name.to_lowercase().as_str() {
        "alphabeta" | "ab" | "ai" => Ok(Box::new(Ai::with_settings(settings.clone(), difficulty))),
        "random" | "rand" => Ok(Box::new(RandomEngine::new())),
        _ => bail!("unknown engine '{name}'"),
    }
}

struct MatchArgs {
    engine1: String,
    engine2: String,
    games: Option<u32>,
    difficulty: Option<Difficulty>,
    config: Option<PathBuf>,
    settings: Option<PathBuf>,
    out: Option<PathBuf>,
}

fn parse_match_args(args: &[String]) -> Result<MatchArgs> {
    let [engine1, engine2, rest @ ..] = args else {
        bail!("match requires two engine names");
    };
    let mut parsed = MatchArgs {
        engine1: engine1.clone(),
        engine2: engine2.clone(),
        games: None,
        difficulty: None,
        config: None,
        settings: None,
        out: None,
    };

    let mut it = rest.iter();
    while let Some(flag) = it.next() {
        let mut value = || {
            it.next()
                .with_context(|| format!("{flag} needs a value"))
                .cloned()
        };
        match flag.as_str() {
            "--games" | "-g" => {
                let v = value()?;
                parsed.games = Some(v.parse().with_context(|| format!("bad game count '{v}'"))?);
            }
            "--difficulty" | "-d" => {
                let v = value()?;
                parsed.difficulty = Some(v.parse().map_err(anyhow::Error::msg)?);
            }
            "--config" | "-c" => parsed.config = Some(value()?.into()),
            "--settings" | "-s" => parsed.settings = Some(value()?.into()),
            "--out" | "-o" => parsed.out = Some(value()?.into()),
            other => bail!("unknown option '{other}'"),
        }
    }
    Ok(parsed)
}

fn run_match(args: &[String]) -> Result<()> {
    let args = parse_match_args(args)?;

    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading match config {}", path.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(games) = args.games {
        config.num_games = games;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    let settings = match &args.settings {
        Some(path) => EngineSettings::load(path)
            .with_context(|| format!("loading engine settings {}", path.display()))?,
        None => EngineSettings::default(),
    };

    println!("=== Match: {} vs {} ===", args.engine1, args.engine2);
    println!(
        "Games: {}, Difficulty: {}, Variant: {}",
        config.num_games, config.difficulty, config.variant
    );
    println!();

    let mut engine1 = create_engine(&args.engine1, config.difficulty, &settings)?;
    let mut engine2 = create_engine(&args.engine2, config.difficulty, &settings)?;

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    println!("{}", result.report());

    if let Some(out) = &args.out {
        result
            .save(out)
            .with_context(|| format!("saving results to {}", out.display()))?;
        println!("Saved games to {}", out.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command '{other}'")
        }
    }
}
