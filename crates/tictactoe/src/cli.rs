//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{FallbackKind, Mark, Mode, StrategyKind};

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with heuristic and minimax computer opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively (O moves first; the computer plays X)
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// human-vs-human or human-vs-computer
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Computer opponent: heuristic or optimal
        #[arg(short, long)]
        strategy: Option<StrategyKind>,

        /// Heuristic fallback: random or first-empty
        #[arg(long)]
        fallback: Option<FallbackKind>,

        /// Seed for the heuristic's random fallback
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Pit two strategies against each other
    Selfplay {
        /// Strategy playing X
        #[arg(short = 'x', long = "x", default_value = "optimal")]
        x_strategy: StrategyKind,

        /// Strategy playing O (moves first)
        #[arg(short = 'o', long = "o", default_value = "heuristic")]
        o_strategy: StrategyKind,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Heuristic fallback: random or first-empty
        #[arg(long, default_value = "random")]
        fallback: FallbackKind,

        /// Seed for the heuristic's random fallback
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest a move for a position
    Suggest {
        /// Nine cells in row-major order, e.g. "XO..O...."; '.', '-', '_' are empty
        board: String,

        /// Mark to move (inferred from the counts when omitted)
        #[arg(short, long)]
        mark: Option<Mark>,

        /// Strategy to consult
        #[arg(short, long, default_value = "optimal")]
        strategy: StrategyKind,

        /// Heuristic fallback: random or first-empty
        #[arg(long, default_value = "first-empty")]
        fallback: FallbackKind,

        /// Seed for the heuristic's random fallback
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_overrides() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "play",
            "--mode",
            "human-vs-computer",
            "--strategy",
            "optimal",
            "--delay-ms",
            "0",
        ])
        .expect("valid args");
        match cli.command {
            Command::Play {
                mode,
                strategy,
                delay_ms,
                config,
                ..
            } => {
                assert_eq!(mode, Some(Mode::HumanVsComputer));
                assert_eq!(strategy, Some(StrategyKind::Optimal));
                assert_eq!(delay_ms, Some(0));
                assert!(config.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_selfplay_defaults() {
        let cli = Cli::try_parse_from(["tictactoe", "selfplay", "--games", "5", "--json"])
            .expect("valid args");
        match cli.command {
            Command::Selfplay {
                x_strategy,
                o_strategy,
                games,
                json,
                ..
            } => {
                assert_eq!(x_strategy, StrategyKind::Optimal);
                assert_eq!(o_strategy, StrategyKind::Heuristic);
                assert_eq!(games, 5);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_mode_short_names() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "-m", "computer"]).expect("valid args");
        match cli.command {
            Command::Play { mode, .. } => assert_eq!(mode, Some(Mode::HumanVsComputer)),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["tictactoe", "suggest", ".........", "-s", "random"]).is_err());
    }
}
