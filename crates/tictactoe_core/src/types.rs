//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark O (the human, moves first).
    O,
    /// Mark X (the computer in single-player mode).
    X,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell taken by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board, cells in row-major order (`index = row * 3 + col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Parses a 9-character row-major layout such as `"XO.X....O"`.
    ///
    /// `X`/`x` and `O`/`o` are marks; `.`, `-`, `_` and space are empty.
    #[instrument]
    pub fn parse(layout: &str) -> Option<Self> {
        let chars: Vec<char> = layout.chars().collect();
        if chars.len() != Self::SIZE {
            return None;
        }
        let mut cells = [Cell::Empty; 9];
        for (cell, ch) in cells.iter_mut().zip(chars) {
            *cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                _ => return None,
            };
        }
        Some(Self { cells })
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Indices of every empty cell, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..Self::SIZE).filter(|&i| self.is_empty(i)).collect()
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Writes a mark without any rule checks.
    ///
    /// Callers outside this crate go through [`crate::apply_move`].
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::Occupied(mark);
    }

    /// Formats the board as a human-readable grid; empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and empty cells remain.
    #[default]
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// Board full, nobody won.
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "Winner is {}", mark),
            Outcome::Draw => write!(f, "Game was a draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent(), Mark::O);
    }

    #[test]
    fn test_parse_layout() {
        let board = Board::parse("XO.x-o_ .").expect("valid layout");
        assert_eq!(board.get(0), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get(1), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.get(3), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get(5), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.filled(), 4);
        assert_eq!(board.empty_cells(), vec![2, 4, 6, 7, 8]);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Board::parse("XO").is_none());
        assert!(Board::parse("XO.X.O.Z.").is_none());
    }

    #[test]
    fn test_display_grid() {
        let board = Board::parse("X...O....").expect("valid layout");
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_mark_from_str() {
        use std::str::FromStr;
        assert_eq!(Mark::from_str("x"), Ok(Mark::X));
        assert_eq!(Mark::from_str("O"), Ok(Mark::O));
    }
}
