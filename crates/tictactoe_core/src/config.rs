//! Session configuration.

use crate::strategy::{FallbackKind, StrategyKind};
use crate::Mode;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a session plays: mode, computer strategy, and its random source.
///
/// Every field has a default, so a partial TOML or JSON table is enough.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Human-vs-human or human-vs-computer.
    mode: Mode,

    /// Computer opponent.
    strategy: StrategyKind,

    /// Heuristic fallback when nothing is won or blocked.
    fallback: FallbackKind,

    /// Seed for the heuristic's random fallback.
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(
        mode: Mode,
        strategy: StrategyKind,
        fallback: FallbackKind,
        seed: Option<u64>,
    ) -> Self {
        Self {
            mode,
            strategy,
            fallback,
            seed,
        }
    }

    /// Returns a copy with the mode replaced.
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// Returns a copy with the strategy replaced.
    pub fn with_strategy(self, strategy: StrategyKind) -> Self {
        Self { strategy, ..self }
    }

    /// Returns a copy with the fallback replaced.
    pub fn with_fallback(self, fallback: FallbackKind) -> Self {
        Self { fallback, ..self }
    }

    /// Returns a copy with the seed replaced.
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            Mode::default(),
            StrategyKind::default(),
            FallbackKind::default(),
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"strategy": "optimal"}"#).expect("valid config");
        assert_eq!(*config.strategy(), StrategyKind::Optimal);
        assert_eq!(*config.mode(), Mode::HumanVsHuman);
        assert_eq!(*config.fallback(), FallbackKind::Random);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_kebab_case_values() {
        let config: GameConfig = serde_json::from_str(
            r#"{"mode": "human-vs-computer", "fallback": "first-empty", "seed": 3}"#,
        )
        .expect("valid config");
        assert_eq!(*config.mode(), Mode::HumanVsComputer);
        assert_eq!(*config.fallback(), FallbackKind::FirstEmpty);
        assert_eq!(*config.seed(), Some(3));
    }

    #[test]
    fn test_builder_overrides() {
        let config = GameConfig::default()
            .with_strategy(StrategyKind::Optimal)
            .with_seed(Some(9));
        assert_eq!(*config.strategy(), StrategyKind::Optimal);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.mode(), Mode::HumanVsHuman);
    }
}
