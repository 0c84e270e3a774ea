//! Win totals that outlive individual games.

use crate::{Mark, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wins by O and by X, kept across "new game" until "reset all".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Getters, Serialize, Deserialize, derive_new::new,
)]
pub struct Scoreboard {
    /// Games won by O.
    o_wins: u32,
    /// Games won by X.
    x_wins: u32,
}

impl Scoreboard {
    /// Returns the scoreboard with `outcome` counted.
    ///
    /// A win increments the winner's total; draws and unfinished games
    /// leave it unchanged.
    #[instrument]
    pub fn record(self, outcome: Outcome) -> Self {
        let next = match outcome {
            Outcome::Win(Mark::O) => Self {
                o_wins: self.o_wins + 1,
                ..self
            },
            Outcome::Win(Mark::X) => Self {
                x_wins: self.x_wins + 1,
                ..self
            },
            Outcome::Draw | Outcome::InProgress => self,
        };
        debug!(o_wins = next.o_wins, x_wins = next.x_wins, "Scoreboard updated");
        next
    }

    /// Wins for one mark.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::O => self.o_wins,
            Mark::X => self.x_wins,
        }
    }
}

/// Free-function form of [`Scoreboard::record`].
pub fn record_result(scoreboard: Scoreboard, outcome: Outcome) -> Scoreboard {
    scoreboard.record(outcome)
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "O Wins: {}  X Wins: {}", self.o_wins, self.x_wins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_increments_winner() {
        let score = Scoreboard::default().record(Outcome::Win(Mark::X));
        assert_eq!(score, Scoreboard::new(0, 1));
        let score = record_result(score, Outcome::Win(Mark::O));
        assert_eq!(score.wins(Mark::O), 1);
        assert_eq!(score.wins(Mark::X), 1);
    }

    #[test]
    fn test_draw_and_in_progress_unchanged() {
        let score = Scoreboard::new(2, 3);
        assert_eq!(score.record(Outcome::Draw), score);
        assert_eq!(score.record(Outcome::InProgress), score);
    }

    #[test]
    fn test_display() {
        assert_eq!(Scoreboard::new(1, 2).to_string(), "O Wins: 1  X Wins: 2");
    }
}
