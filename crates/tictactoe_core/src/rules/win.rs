//! Win detection for tic-tac-toe.

use crate::{Board, Cell, Mark};
use tracing::instrument;

/// Three board indices forming a line.
pub type WinPattern = [usize; 3];

/// Every winning line, in scan order.
///
/// The order is the tie-break when several lines qualify at once.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    [0, 1, 2],
    [0, 3, 6],
    [0, 4, 8],
    [1, 4, 7],
    [2, 5, 8],
    [2, 4, 6],
    [3, 4, 5],
    [6, 7, 8],
];

/// Returns the mark that owns a complete line, if any.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    WIN_PATTERNS.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(mark),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_pattern_wins() {
        for pattern in WIN_PATTERNS {
            let mut board = Board::new();
            for index in pattern {
                board.place(index, Mark::X);
            }
            assert_eq!(check_winner(&board), Some(Mark::X), "pattern {:?}", pattern);
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = Board::parse("O...O...O").expect("valid layout");
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::parse("XX.OO....").expect("valid layout");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::parse("XOX......").expect("valid layout");
        assert_eq!(check_winner(&board), None);
    }
}
