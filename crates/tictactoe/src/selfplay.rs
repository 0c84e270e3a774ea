//! Strategy-versus-strategy tournaments.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tictactoe_core::{GameState, Mark, OpponentStrategy, Outcome, Scoreboard, new_game};
use tracing::{debug, info, instrument};

/// Results of a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Strategy that played O.
    o_strategy: String,
    /// Strategy that played X.
    x_strategy: String,
    /// Games played.
    games: u32,
    /// Wins by mark.
    scoreboard: Scoreboard,
    /// Drawn games.
    draws: u32,
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games, O ({}) vs X ({}): {}  Draws: {}",
            self.games, self.o_strategy, self.x_strategy, self.scoreboard, self.draws
        )
    }
}

/// Plays one game to the end, O moving first.
#[instrument(skip_all)]
pub fn play_game(o: &mut dyn OpponentStrategy, x: &mut dyn OpponentStrategy) -> Outcome {
    let mut state: GameState = new_game();
    while !state.is_terminal() {
        let mark = *state.turn();
        let mover: &mut dyn OpponentStrategy = match mark {
            Mark::O => &mut *o,
            Mark::X => &mut *x,
        };
        let Some(index) = mover.select_move(state.board(), mark) else {
            break;
        };
        match state.apply(index, mark) {
            Ok(next) => state = next,
            Err(e) => {
                debug!(error = %e, strategy = mover.name(), "Strategy produced an illegal move");
                break;
            }
        }
    }
    *state.outcome()
}

/// Plays `games` games and counts the results.
#[instrument(skip(o, x), fields(o = o.name(), x = x.name()))]
pub fn run(o: &mut dyn OpponentStrategy, x: &mut dyn OpponentStrategy, games: u32) -> Tally {
    let mut scoreboard = Scoreboard::default();
    let mut draws = 0;
    for game in 0..games {
        let outcome = play_game(o, x);
        debug!(game, ?outcome, "Game finished");
        if outcome == Outcome::Draw {
            draws += 1;
        }
        scoreboard = scoreboard.record(outcome);
    }
    let tally = Tally {
        o_strategy: o.name().to_string(),
        x_strategy: x.name().to_string(),
        games,
        scoreboard,
        draws,
    };
    info!(%tally, "Tournament finished");
    tally
}
