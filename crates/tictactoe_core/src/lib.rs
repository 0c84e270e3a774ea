//! Tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board & rules**: the 3x3 board, win/draw detection, move validation
//! - **Game state**: board, turn, move count and outcome threaded as a value
//! - **Strategies**: heuristic win-or-block and minimax computer opponents
//! - **Session**: mode, scoreboard and computer replies across games
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Mode, Outcome, Session, StrategyKind, FallbackKind};
//!
//! let strategy = StrategyKind::Optimal.build(FallbackKind::FirstEmpty, None);
//! let mut session = Session::new(Mode::HumanVsComputer, strategy);
//!
//! session.apply_human_move(0).expect("empty board");
//! let (reply, outcome) = session.computer_respond().expect("computer to move");
//! assert_eq!(reply, 4);
//! assert_eq!(outcome, Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod game;
mod position;
pub mod rules;
mod scoreboard;
mod session;
pub mod strategy;
mod types;

pub use config::GameConfig;
pub use error::{InvalidMove, InvalidMoveKind};
pub use game::{GameState, Mode, new_game};
pub use position::Position;
pub use rules::{WIN_PATTERNS, apply_move, detect_outcome, is_terminal};
pub use scoreboard::{Scoreboard, record_result};
pub use session::{COMPUTER_MARK, HUMAN_MARK, Session};
pub use strategy::{
    FallbackKind, HeuristicStrategy, OpponentStrategy, OptimalStrategy, StrategyKind,
};
pub use types::{Board, Cell, Mark, Outcome};
