//! Move rejection errors.

use crate::Mark;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum InvalidMoveKind {
    /// The target cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    Occupied(usize),
    /// The index is outside 0-8.
    #[display("cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
    /// The game has already been won or drawn.
    #[display("game is already over")]
    GameOver,
    /// The mark does not have the move, or the board is locked for the computer.
    #[display("it is not {}'s turn", _0)]
    NotYourTurn(Mark),
    /// A computer reply was requested in human-vs-human mode.
    #[display("computer moves are only available in computer mode")]
    NotComputerMode,
    /// The strategy found no empty cell.
    #[display("no moves left")]
    NoMovesLeft,
}

/// A rejected move, with the location that rejected it.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid move: {} at {}:{}", kind, file, line)]
pub struct InvalidMove {
    /// What was wrong with the move.
    pub kind: InvalidMoveKind,
    /// Line number where the move was rejected.
    pub line: u32,
    /// Source file where the move was rejected.
    pub file: &'static str,
}

impl InvalidMove {
    /// Creates a new invalid-move error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: InvalidMoveKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<InvalidMoveKind> for InvalidMove {
    #[track_caller]
    fn from(kind: InvalidMoveKind) -> Self {
        Self::new(kind)
    }
}

impl PartialEq for InvalidMove {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}
