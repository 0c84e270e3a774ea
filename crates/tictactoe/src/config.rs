//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_core::{FallbackKind, GameConfig, Mode, StrategyKind};
use tracing::{debug, info, instrument};

/// Settings for the interactive front-end.
///
/// ```toml
/// computer_delay_ms = 350
///
/// [game]
/// mode = "human-vs-computer"
/// strategy = "optimal"
/// fallback = "random"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Session settings.
    game: GameConfig,

    /// Pause before the computer's reply, in milliseconds.
    computer_delay_ms: u64,
}

/// Default pause before the computer's reply, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 350;

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            computer_delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(mode = %config.game.mode(), strategy = %config.game.strategy(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides; `None` keeps the configured value.
    #[instrument(skip(self))]
    pub fn with_overrides(
        self,
        mode: Option<Mode>,
        strategy: Option<StrategyKind>,
        fallback: Option<FallbackKind>,
        seed: Option<u64>,
        delay_ms: Option<u64>,
    ) -> Self {
        let mut game = self.game;
        if let Some(mode) = mode {
            game = game.with_mode(mode);
        }
        if let Some(strategy) = strategy {
            game = game.with_strategy(strategy);
        }
        if let Some(fallback) = fallback {
            game = game.with_fallback(fallback);
        }
        if seed.is_some() {
            game = game.with_seed(seed);
        }
        Self {
            game,
            computer_delay_ms: delay_ms.unwrap_or(self.computer_delay_ms),
        }
    }

    /// Pause before the computer's reply.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
