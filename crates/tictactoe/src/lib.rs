//! Terminal front-end for tictactoe_core.
//!
//! - **play**: interactive line-based game with a paced computer reply
//! - **selfplay**: strategy-versus-strategy tournaments
//! - **suggest**: one-shot move suggestions

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
pub mod play;
pub mod selfplay;
pub mod suggest;

pub use config::{CliConfig, ConfigError};
pub use selfplay::Tally;
