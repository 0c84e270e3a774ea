//! One-shot move suggestions for an arbitrary position.

use tictactoe_core::{
    Board, Cell, InvalidMove, InvalidMoveKind, Mark, OpponentStrategy, Position, detect_outcome,
};
use tracing::instrument;

/// Mark to move on `board`, assuming O moved first.
pub fn mark_to_move(board: &Board) -> Mark {
    let count = |mark| {
        board
            .cells()
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    };
    if count(Mark::O) > count(Mark::X) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Asks `strategy` for a move for `mark` (or whoever is to move).
///
/// # Errors
///
/// `GameOver` for a won or drawn board, `NoMovesLeft` if the strategy
/// declines.
#[instrument(skip(strategy), fields(strategy_name = strategy.name()))]
pub fn suggest(
    board: &Board,
    mark: Option<Mark>,
    strategy: &mut dyn OpponentStrategy,
) -> Result<(Mark, Position), InvalidMove> {
    if detect_outcome(board).is_terminal() {
        return Err(InvalidMove::new(InvalidMoveKind::GameOver));
    }
    let mark = mark.unwrap_or_else(|| mark_to_move(board));
    strategy
        .select_move(board, mark)
        .and_then(Position::from_index)
        .map(|position| (mark, position))
        .ok_or_else(|| InvalidMove::new(InvalidMoveKind::NoMovesLeft))
}
