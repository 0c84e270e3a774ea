//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from the game
//! state so strategies can evaluate hypothetical boards with them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_PATTERNS, WinPattern, check_winner};

use crate::{Board, InvalidMove, InvalidMoveKind, Mark, Outcome};
use tracing::{instrument, trace};

/// Evaluates the board.
///
/// `Win` for the first pattern whose three cells hold the same mark,
/// `Draw` when the board is full without a line, otherwise `InProgress`.
#[instrument(level = "trace")]
pub fn detect_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// True once the game is won or drawn.
pub fn is_terminal(outcome: Outcome) -> bool {
    outcome.is_terminal()
}

/// Returns a copy of `board` with `mark` placed at `index`.
///
/// # Errors
///
/// Rejects out-of-range indices, occupied cells, and boards that are
/// already won or drawn. The input board is never modified.
#[instrument(level = "trace", skip(board))]
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, InvalidMove> {
    if detect_outcome(board).is_terminal() {
        return Err(InvalidMove::new(InvalidMoveKind::GameOver));
    }
    match board.get(index) {
        None => Err(InvalidMove::new(InvalidMoveKind::OutOfBounds(index))),
        Some(cell) if cell.mark().is_some() => {
            Err(InvalidMove::new(InvalidMoveKind::Occupied(index)))
        }
        Some(_) => {
            let mut next = *board;
            next.place(index, mark);
            trace!(index, %mark, "Mark placed");
            Ok(next)
        }
    }
}
