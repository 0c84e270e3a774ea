//! Session: the owner of a game, its mode, the scoreboard and the computer opponent.

use crate::config::GameConfig;
use crate::strategy::OpponentStrategy;
use crate::{GameState, InvalidMove, InvalidMoveKind, Mark, Mode, Outcome, Scoreboard};
use tracing::{debug, info, instrument};

/// Mark played by the human in computer mode.
pub const HUMAN_MARK: Mark = Mark::O;

/// Mark played by the computer in computer mode.
pub const COMPUTER_MARK: Mark = Mark::X;

/// A sequence of games sharing one scoreboard.
///
/// In computer mode the human plays O and moves first; after each human
/// move the board is locked until [`Session::computer_respond`] applies
/// the reply as X.
#[derive(Debug)]
pub struct Session {
    state: GameState,
    mode: Mode,
    scoreboard: Scoreboard,
    strategy: Box<dyn OpponentStrategy>,
}

impl Session {
    /// Creates a session with a fresh game and an empty scoreboard.
    #[instrument(skip(strategy), fields(strategy_name = strategy.name()))]
    pub fn new(mode: Mode, strategy: Box<dyn OpponentStrategy>) -> Self {
        info!(mode = %mode, "Session created");
        Self {
            state: GameState::new(),
            mode,
            scoreboard: Scoreboard::default(),
            strategy,
        }
    }

    /// Creates a session from configuration.
    #[instrument]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            *config.mode(),
            config.strategy().build(*config.fallback(), *config.seed()),
        )
    }

    /// Current game.
    #[instrument(skip(self))]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Outcome of the current game.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> Outcome {
        *self.state.outcome()
    }

    /// Win totals.
    #[instrument(skip(self))]
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Current mode.
    #[instrument(skip(self))]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Name of the computer strategy.
    #[instrument(skip(self))]
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// True while the board is locked waiting for the computer's reply.
    #[instrument(skip(self))]
    pub fn awaiting_computer(&self) -> bool {
        self.mode == Mode::HumanVsComputer
            && !self.state.is_terminal()
            && *self.state.turn() == COMPUTER_MARK
    }

    /// Plays a human move at `index`.
    ///
    /// In human-vs-human mode the move is made by whoever has the turn.
    /// In computer mode the human is always O.
    ///
    /// # Errors
    ///
    /// `NotYourTurn` while the computer's reply is pending, plus every
    /// rejection of [`GameState::apply`]. The session is unchanged on error.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<Outcome, InvalidMove> {
        let mark = match self.mode {
            Mode::HumanVsHuman => *self.state.turn(),
            Mode::HumanVsComputer => {
                if self.awaiting_computer() {
                    return Err(InvalidMove::new(InvalidMoveKind::NotYourTurn(HUMAN_MARK)));
                }
                HUMAN_MARK
            }
        };
        self.commit(index, mark)
    }

    /// Lets the computer answer as X.
    ///
    /// Returns the chosen index and the resulting outcome.
    ///
    /// # Errors
    ///
    /// `NotComputerMode` in human-vs-human mode, `GameOver` once the game
    /// has ended, `NotYourTurn` when it is O's turn, and `NoMovesLeft` if
    /// the strategy cannot find a cell.
    #[instrument(skip(self), fields(strategy_name = self.strategy.name()))]
    pub fn computer_respond(&mut self) -> Result<(usize, Outcome), InvalidMove> {
        if self.mode != Mode::HumanVsComputer {
            return Err(InvalidMove::new(InvalidMoveKind::NotComputerMode));
        }
        if self.state.is_terminal() {
            return Err(InvalidMove::new(InvalidMoveKind::GameOver));
        }
        if *self.state.turn() != COMPUTER_MARK {
            return Err(InvalidMove::new(InvalidMoveKind::NotYourTurn(COMPUTER_MARK)));
        }

        let index = self
            .strategy
            .select_move(self.state.board(), COMPUTER_MARK)
            .ok_or_else(|| InvalidMove::new(InvalidMoveKind::NoMovesLeft))?;
        debug!(index, "Computer chose cell");
        let outcome = self.commit(index, COMPUTER_MARK)?;
        Ok((index, outcome))
    }

    /// Clears the board for a new game; the scoreboard is kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        debug!("New game");
        self.state = GameState::new();
    }

    /// Clears the board and zeroes the scoreboard.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        info!("Resetting scoreboard");
        self.scoreboard = Scoreboard::default();
        self.reset_game();
    }

    /// Switches between human-vs-human and computer mode and starts a new game.
    #[instrument(skip(self))]
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggle();
        info!(mode = %self.mode, "Mode changed");
        self.reset_game();
        self.mode
    }

    fn commit(&mut self, index: usize, mark: Mark) -> Result<Outcome, InvalidMove> {
        self.state = self.state.apply(index, mark)?;
        let outcome = *self.state.outcome();
        if outcome.is_terminal() {
            self.scoreboard = self.scoreboard.record(outcome);
            info!(%outcome, scoreboard = %self.scoreboard, "Game over");
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{FallbackKind, HeuristicStrategy, OptimalStrategy};

    fn computer_session() -> Session {
        Session::new(
            Mode::HumanVsComputer,
            Box::new(HeuristicStrategy::new(FallbackKind::FirstEmpty, None)),
        )
    }

    #[test]
    fn test_human_vs_human_alternates() {
        let mut session = Session::new(Mode::HumanVsHuman, Box::new(OptimalStrategy));
        session.apply_human_move(0).expect("legal move");
        assert_eq!(*session.state().turn(), Mark::X);
        session.apply_human_move(4).expect("legal move");
        assert_eq!(session.state().board().get(4), Some(crate::Cell::Occupied(Mark::X)));
        assert_eq!(*session.state().turn(), Mark::O);
    }

    #[test]
    fn test_board_locked_until_computer_replies() {
        let mut session = computer_session();
        session.apply_human_move(0).expect("legal move");
        assert!(session.awaiting_computer());

        let err = session.apply_human_move(1).unwrap_err();
        assert_eq!(err.kind, InvalidMoveKind::NotYourTurn(Mark::O));
        assert_eq!(*session.state().move_count(), 1);

        let (index, outcome) = session.computer_respond().expect("computer move");
        assert_eq!(index, 1);
        assert_eq!(outcome, Outcome::InProgress);
        assert!(!session.awaiting_computer());
    }

    #[test]
    fn test_computer_respond_rejected_on_humans_turn() {
        let mut session = computer_session();
        let err = session.computer_respond().unwrap_err();
        assert_eq!(err.kind, InvalidMoveKind::NotYourTurn(Mark::X));
    }

    #[test]
    fn test_computer_respond_needs_computer_mode() {
        let mut session = Session::new(Mode::HumanVsHuman, Box::new(OptimalStrategy));
        let err = session.computer_respond().unwrap_err();
        assert_eq!(err.kind, InvalidMoveKind::NotComputerMode);
    }

    #[test]
    fn test_win_recorded_once_and_game_locked() {
        let mut session = Session::new(Mode::HumanVsHuman, Box::new(OptimalStrategy));
        for index in [0, 3, 1, 4, 2] {
            session.apply_human_move(index).expect("legal move");
        }
        assert_eq!(session.outcome(), Outcome::Win(Mark::O));
        assert_eq!(session.scoreboard(), Scoreboard::new(1, 0));

        let err = session.apply_human_move(8).unwrap_err();
        assert_eq!(err.kind, InvalidMoveKind::GameOver);
        assert_eq!(session.scoreboard(), Scoreboard::new(1, 0));
    }

    #[test]
    fn test_toggle_mode_resets_board_keeps_score() {
        let mut session = Session::new(Mode::HumanVsHuman, Box::new(OptimalStrategy));
        for index in [0, 3, 1, 4, 2] {
            session.apply_human_move(index).expect("legal move");
        }
        assert_eq!(session.toggle_mode(), Mode::HumanVsComputer);
        assert_eq!(*session.state(), GameState::new());
        assert_eq!(session.scoreboard(), Scoreboard::new(1, 0));
    }

    #[test]
    fn test_reset_all_zeroes_score() {
        let mut session = Session::new(Mode::HumanVsHuman, Box::new(OptimalStrategy));
        for index in [0, 3, 1, 4, 2] {
            session.apply_human_move(index).expect("legal move");
        }
        session.reset_all();
        assert_eq!(session.scoreboard(), Scoreboard::default());
        assert_eq!(session.outcome(), Outcome::InProgress);
    }
}
