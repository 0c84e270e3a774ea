//! Line-based interactive game loop.

use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use tictactoe_core::{InvalidMoveKind, Mode, Outcome, Position, Session};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Enter a cell number 1-9 or a name like 'center'.\n\
Commands: new (new game), reset (new game and clear scores), mode (toggle computer), \
board, score, help, quit";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play in a cell.
    Cell(Position),
    /// Start a new game, keeping scores.
    NewGame,
    /// Start a new game and clear scores.
    ResetAll,
    /// Switch between human and computer opponent.
    ToggleMode,
    /// Show the board.
    Board,
    /// Show the scores.
    Score,
    /// Show help.
    Help,
    /// Leave.
    Quit,
}

impl Input {
    /// Parses a line; `None` if it is neither a command nor a cell.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let command = match line.trim().to_lowercase().as_str() {
            "new" | "n" => Input::NewGame,
            "reset" | "r" => Input::ResetAll,
            "mode" | "m" => Input::ToggleMode,
            "board" | "b" => Input::Board,
            "score" | "s" => Input::Score,
            "help" | "h" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            _ => return Position::parse_input(line).map(Input::Cell),
        };
        Some(command)
    }
}

/// Runs the game loop until `quit` or end of input.
///
/// The computer's reply is delayed by `delay`; no input is read while
/// the reply is pending.
#[instrument(skip_all, fields(mode = %session.mode(), delay_ms = delay.as_millis() as u64))]
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W, delay: Duration) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    info!("Starting interactive game");
    writeln!(out, "Tic-tac-toe. Mode: {}. {}", session.mode().label(), HELP)?;
    show_board(session, out)?;

    let mut lines = input.lines();
    loop {
        prompt(session, out)?;
        let Some(line) = lines.next_line().await? else {
            debug!("Input closed");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match Input::parse(&line) {
            Some(Input::Quit) => break,
            Some(Input::NewGame) => {
                session.reset_game();
                show_board(session, out)?;
            }
            Some(Input::ResetAll) => {
                session.reset_all();
                writeln!(out, "{}", session.scoreboard())?;
                show_board(session, out)?;
            }
            Some(Input::ToggleMode) => {
                let mode = session.toggle_mode();
                writeln!(out, "Mode: {}", mode.label())?;
                show_board(session, out)?;
            }
            Some(Input::Board) => show_board(session, out)?,
            Some(Input::Score) => writeln!(out, "{}", session.scoreboard())?,
            Some(Input::Help) => writeln!(out, "{}", HELP)?,
            Some(Input::Cell(position)) => play_cell(session, position, out, delay).await?,
            None => writeln!(out, "Unrecognised input '{}'. Type 'help'.", line.trim())?,
        }
    }

    writeln!(out, "Final score: {}", session.scoreboard())?;
    Ok(())
}

async fn play_cell<W: Write>(
    session: &mut Session,
    position: Position,
    out: &mut W,
    delay: Duration,
) -> Result<()> {
    let outcome = match session.apply_human_move(position.to_index()) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error = %e, "Move rejected");
            match e.kind {
                InvalidMoveKind::Occupied(_) => {
                    writeln!(out, "Not allowed: {} is already taken.", position)?
                }
                kind => writeln!(out, "Not allowed: {}.", kind)?,
            }
            return Ok(());
        }
    };
    show_board(session, out)?;
    if announce(session, outcome, out)? {
        return Ok(());
    }

    if session.awaiting_computer() {
        writeln!(out, "Computer is thinking...")?;
        out.flush()?;
        tokio::time::sleep(delay).await;
        let (index, outcome) = session.computer_respond()?;
        let label = Position::from_index(index).map_or("?", |p| p.label());
        writeln!(out, "Computer plays {} ({}).", index + 1, label)?;
        show_board(session, out)?;
        announce(session, outcome, out)?;
    }
    Ok(())
}

/// Prints the result of a finished game; returns whether it was finished.
fn announce<W: Write>(session: &Session, outcome: Outcome, out: &mut W) -> Result<bool> {
    if !outcome.is_terminal() {
        return Ok(false);
    }
    match outcome {
        Outcome::Win(mark) => writeln!(out, "Congratulations, winner is {}!", mark)?,
        _ => writeln!(out, "Game was a draw.")?,
    }
    writeln!(out, "{}", session.scoreboard())?;
    writeln!(out, "Type 'new' for another game.")?;
    Ok(true)
}

fn show_board<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    writeln!(out, "\n{}\n", session.state().board().display())?;
    Ok(())
}

fn prompt<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let state = session.state();
    if state.is_terminal() {
        write!(out, "> ")?;
    } else if session.mode() == Mode::HumanVsComputer {
        write!(out, "Your move (O)> ")?;
    } else {
        write!(out, "{} to move> ", state.turn())?;
    }
    out.flush()?;
    Ok(())
}
