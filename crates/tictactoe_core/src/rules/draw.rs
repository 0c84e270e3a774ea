//! Draw detection for tic-tac-toe.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::parse("....X....").expect("valid layout");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // O X O / X O X / X O X
        let board = Board::parse("OXOXOXXOX").expect("valid layout");
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X wins the top row on a full board
        let board = Board::parse("XXXOOXXOO").expect("valid layout");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
