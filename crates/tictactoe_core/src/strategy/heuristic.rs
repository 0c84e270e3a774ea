//! Two-ply win-or-block opponent.

use super::{FallbackKind, OpponentStrategy};
use crate::rules::{WIN_PATTERNS, detect_outcome};
use crate::{Board, Cell, Mark};
use rand::prelude::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, instrument};

/// Finds the cell that would complete a line for `mark`.
///
/// Scans the patterns in [`WIN_PATTERNS`] order and returns the empty
/// cell of the first one holding exactly two of `mark` and one empty cell.
#[instrument(level = "trace")]
pub fn find_completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    let cells = board.cells();
    WIN_PATTERNS.iter().find_map(|pattern| {
        let own = pattern
            .iter()
            .filter(|&&i| cells[i] == Cell::Occupied(mark))
            .count();
        let mut empty = pattern.iter().copied().filter(|&i| cells[i] == Cell::Empty);
        match (own, empty.next(), empty.next()) {
            (2, Some(index), None) => Some(index),
            _ => None,
        }
    })
}

/// Takes a win, else blocks the opponent's win, else falls back.
///
/// Looks one move ahead only; forks go unnoticed, so this opponent can
/// be beaten.
pub struct HeuristicStrategy {
    fallback: FallbackKind,
    rng: StdRng,
}

impl HeuristicStrategy {
    /// Creates the strategy. Without a seed the random fallback is seeded from the OS.
    #[instrument]
    pub fn new(fallback: FallbackKind, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { fallback, rng }
    }

    /// Fallback policy in use.
    pub fn fallback(&self) -> FallbackKind {
        self.fallback
    }

    fn fallback_move(&mut self, board: &Board) -> Option<usize> {
        let empty = board.empty_cells();
        match self.fallback {
            FallbackKind::FirstEmpty => empty.first().copied(),
            FallbackKind::Random => empty.choose(&mut self.rng).copied(),
        }
    }
}

impl std::fmt::Debug for HeuristicStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeuristicStrategy")
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl OpponentStrategy for HeuristicStrategy {
    #[instrument(skip(self, board), fields(fallback = %self.fallback))]
    fn select_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        if detect_outcome(board).is_terminal() {
            return None;
        }
        if let Some(index) = find_completing_cell(board, mark) {
            debug!(index, %mark, "Taking winning cell");
            return Some(index);
        }
        if let Some(index) = find_completing_cell(board, mark.opponent()) {
            debug!(index, %mark, "Blocking opponent");
            return Some(index);
        }
        let index = self.fallback_move(board);
        debug!(?index, %mark, "No threats, using fallback");
        index
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
