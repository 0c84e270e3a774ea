//! Computer opponents.
//!
//! Both strategies answer the same question: given a board and the mark
//! to play, which cell? They are interchangeable behind
//! [`OpponentStrategy`] so a session can hold either one.

mod heuristic;
mod optimal;

pub use heuristic::{HeuristicStrategy, find_completing_cell};
pub use optimal::{OptimalStrategy, minimax};

use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Chooses a cell for the computer.
pub trait OpponentStrategy: Send + std::fmt::Debug {
    /// Picks an empty cell for `mark` to play.
    ///
    /// Returns `None` when no move can be made (board full or game over).
    fn select_move(&mut self, board: &Board, mark: Mark) -> Option<usize>;

    /// Short name for logs and reports.
    fn name(&self) -> &str;
}

/// Which strategy to build.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Win if possible, else block, else fall back.
    #[default]
    Heuristic,
    /// Full minimax search.
    Optimal,
}

/// How the heuristic picks a cell when there is nothing to win or block.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum FallbackKind {
    /// Uniformly random empty cell.
    #[default]
    Random,
    /// Lowest-index empty cell.
    FirstEmpty,
}

impl StrategyKind {
    /// Builds a boxed strategy of this kind.
    ///
    /// `fallback` and `seed` only affect the heuristic. Without a seed the
    /// random fallback is seeded from the OS.
    #[instrument]
    pub fn build(self, fallback: FallbackKind, seed: Option<u64>) -> Box<dyn OpponentStrategy> {
        match self {
            StrategyKind::Heuristic => Box::new(HeuristicStrategy::new(fallback, seed)),
            StrategyKind::Optimal => Box::new(OptimalStrategy::new()),
        }
    }
}
