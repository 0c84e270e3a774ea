//! Perfect-play opponent backed by exhaustive minimax.

use super::OpponentStrategy;
use crate::rules::detect_outcome;
use crate::{Board, Mark, Outcome};
use tracing::{debug, instrument};

/// Cell played on an empty board without searching.
const OPENING: usize = 4;

/// Score of a decisive result before the depth adjustment.
const WIN_SCORE: i32 = 10;

/// Minimax value of `board` for `maximizer`, with `to_move` playing next.
///
/// Terminal boards score `10 - depth` when `maximizer` has won,
/// `depth - 10` when it has lost, and `0` for a draw, where `depth`
/// counts plies from the position passed in. Faster wins and slower
/// losses therefore score better.
#[instrument(level = "trace", skip(board))]
pub fn minimax(board: &Board, to_move: Mark, maximizer: Mark) -> i32 {
    Search::new(maximizer).score(board, to_move, 0)
}

/// One search, counting visited nodes.
struct Search {
    maximizer: Mark,
    nodes: u64,
}

impl Search {
    fn new(maximizer: Mark) -> Self {
        Self {
            maximizer,
            nodes: 0,
        }
    }

    fn score(&mut self, board: &Board, to_move: Mark, depth: i32) -> i32 {
        self.nodes += 1;
        match detect_outcome(board) {
            Outcome::Win(mark) if mark == self.maximizer => return WIN_SCORE - depth,
            Outcome::Win(_) => return depth - WIN_SCORE,
            Outcome::Draw => return 0,
            Outcome::InProgress => {}
        }

        let maximizing = to_move == self.maximizer;
        let children = board.empty_cells().into_iter().map(|index| {
            let mut next = *board;
            next.place(index, to_move);
            self.score(&next, to_move.opponent(), depth + 1)
        });
        let best = if maximizing {
            children.max()
        } else {
            children.min()
        };
        // InProgress guarantees at least one empty cell.
        best.unwrap_or(0)
    }
}

/// Never loses: searches the whole remaining game tree.
///
/// The mark passed to `select_move` is the maximizing side. Among moves
/// with equal value the lowest index is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalStrategy;

impl OptimalStrategy {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }
}

impl OpponentStrategy for OptimalStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        if detect_outcome(board).is_terminal() {
            return None;
        }
        if board.filled() == 0 {
            debug!(index = OPENING, "Opening in the center");
            return Some(OPENING);
        }

        let mut search = Search::new(mark);
        let mut best: Option<(usize, i32)> = None;
        for index in board.empty_cells() {
            let mut next = *board;
            next.place(index, mark);
            let score = search.score(&next, mark.opponent(), 1);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((index, score));
            }
        }

        if let Some((index, score)) = best {
            debug!(index, score, nodes = search.nodes, %mark, "Minimax move chosen");
        }
        best.map(|(index, _)| index)
    }

    fn name(&self) -> &str {
        "optimal"
    }
}
