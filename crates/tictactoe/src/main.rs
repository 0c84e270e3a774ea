//! tictactoe - play in the terminal or benchmark the computer opponents.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::cli::{Cli, Command};
use tictactoe::{CliConfig, play, selfplay, suggest};
use tictactoe_core::{Board, FallbackKind, Session, StrategyKind};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            strategy,
            fallback,
            seed,
            delay_ms,
        } => {
            let config = match config {
                Some(path) => CliConfig::from_file(&path)?,
                None => CliConfig::default(),
            };
            let config = config.with_overrides(mode, strategy, fallback, seed, delay_ms);
            run_play(config).await
        }
        Command::Selfplay {
            x_strategy,
            o_strategy,
            games,
            fallback,
            seed,
            json,
        } => run_selfplay(x_strategy, o_strategy, games, fallback, seed, json),
        Command::Suggest {
            board,
            mark,
            strategy,
            fallback,
            seed,
        } => run_suggest(&board, mark, strategy, fallback, seed),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
async fn run_play(config: CliConfig) -> Result<()> {
    info!(?config, "Starting play");
    let mut session = Session::from_config(config.game());
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    play::run(&mut session, stdin, &mut stdout, config.computer_delay()).await
}

/// Run a tournament between two strategies
#[instrument]
fn run_selfplay(
    x_strategy: StrategyKind,
    o_strategy: StrategyKind,
    games: u32,
    fallback: FallbackKind,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    // Give the two sides different streams when seeded.
    let mut o = o_strategy.build(fallback, seed);
    let mut x = x_strategy.build(fallback, seed.map(|s| s.wrapping_add(1)));
    let tally = selfplay::run(o.as_mut(), x.as_mut(), games);

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{}", tally);
    }
    Ok(())
}

/// Print a suggested move for a position
#[instrument]
fn run_suggest(
    layout: &str,
    mark: Option<tictactoe_core::Mark>,
    strategy: StrategyKind,
    fallback: FallbackKind,
    seed: Option<u64>,
) -> Result<()> {
    let board = Board::parse(layout)
        .with_context(|| format!("Board must be 9 cells of X, O or '.', got '{}'", layout))?;
    let mut strategy = strategy.build(fallback, seed);
    let (mark, position) = suggest::suggest(&board, mark, strategy.as_mut())?;
    println!("{}", board.display());
    println!(
        "{} should play {} ({}, index {})",
        mark,
        position.to_index() + 1,
        position.label(),
        position.to_index()
    );
    Ok(())
}
