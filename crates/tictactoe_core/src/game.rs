//! Game state: board, turn, move count and outcome.

use crate::rules::{apply_move, detect_outcome};
use crate::{Board, InvalidMove, InvalidMoveKind, Mark, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Who plays the X side.
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
pub enum Mode {
    /// Two humans share the board; every move flips the turn.
    #[default]
    #[strum(to_string = "human-vs-human", serialize = "human")]
    HumanVsHuman,
    /// The human is O and moves first; the computer answers as X.
    #[strum(to_string = "human-vs-computer", serialize = "computer")]
    HumanVsComputer,
}

impl Mode {
    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Mode::HumanVsHuman => "User vs User",
            Mode::HumanVsComputer => "User vs Computer",
        }
    }

    /// Switches between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            Mode::HumanVsHuman => Mode::HumanVsComputer,
            Mode::HumanVsComputer => Mode::HumanVsHuman,
        }
    }
}

/// Complete state of one game.
///
/// `move_count` always equals the number of occupied cells and `outcome`
/// always equals [`detect_outcome`] of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark to move next.
    turn: Mark,
    /// Number of marks placed so far.
    move_count: u8,
    /// Current outcome.
    outcome: Outcome,
}

/// Fresh game: empty board, O to move.
#[instrument]
pub fn new_game() -> GameState {
    GameState::new()
}

impl GameState {
    /// Creates a fresh game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::O,
            move_count: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// Places `mark` at `index` and returns the next state.
    ///
    /// The turn passes to the other mark unless the move ended the game.
    ///
    /// # Errors
    ///
    /// `GameOver` once the outcome is terminal, `NotYourTurn` if `mark`
    /// does not have the move, and the board-level rejections of
    /// [`apply_move`]. `self` is untouched on error.
    #[instrument(skip(self), fields(turn = %self.turn, move_count = self.move_count))]
    pub fn apply(&self, index: usize, mark: Mark) -> Result<Self, InvalidMove> {
        if self.outcome.is_terminal() {
            return Err(InvalidMove::new(InvalidMoveKind::GameOver));
        }
        if mark != self.turn {
            return Err(InvalidMove::new(InvalidMoveKind::NotYourTurn(mark)));
        }

        let board = apply_move(&self.board, index, mark)?;
        let outcome = detect_outcome(&board);
        let turn = if outcome.is_terminal() {
            self.turn
        } else {
            mark.opponent()
        };
        debug!(index, %mark, ?outcome, "Move applied");

        Ok(Self {
            board,
            turn,
            move_count: self.move_count + 1,
            outcome,
        })
    }

    /// Replays `(index, mark)` pairs from a fresh game.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move.
    #[instrument]
    pub fn replay(moves: &[(usize, Mark)]) -> Result<Self, InvalidMove> {
        moves
            .iter()
            .try_fold(Self::new(), |state, &(index, mark)| state.apply(index, mark))
    }

    /// True once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
