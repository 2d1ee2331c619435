//! Game configuration types.
//!
//! The host configures a game at startup by providing:
//! - `GameConfig`: symbol set, mismatch flip-back delay, RNG seed
//! - `GridConfig`: column count and spacing for the on-screen grid
//!
//! Both are plain serde types so hosts can load them from any format.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::SymbolId;
use crate::error::ConfigError;

/// Symbols used when the host supplies none.
pub const DEFAULT_SYMBOLS: [&str; 8] = [
    "suitcase", "cards", "church", "teapot", "boat", "hat", "car", "watch",
];

/// How long a mismatched pair stays face-up by default.
pub const DEFAULT_FLIP_BACK_DELAY: Duration = Duration::from_secs(1);

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Distinct symbols; each becomes one pair of cards.
    pub symbols: Vec<SymbolId>,

    /// How long a mismatched pair stays face-up before flipping back.
    #[serde(default = "default_delay")]
    pub flip_back_delay: Duration,

    /// Seed for deck shuffles. Resets fork from it.
    #[serde(default)]
    pub seed: u64,
}

fn default_delay() -> Duration {
    DEFAULT_FLIP_BACK_DELAY
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS)
    }
}

impl GameConfig {
    /// Create a configuration from a symbol set, with default delay and seed.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SymbolId>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            flip_back_delay: DEFAULT_FLIP_BACK_DELAY,
            seed: 0,
        }
    }

    /// Set the flip-back delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.flip_back_delay = delay;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of pairs a deck built from this config contains.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }

    /// Check that every symbol is distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = FxHashSet::default();
        for symbol in &self.symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol.clone()));
            }
        }
        Ok(())
    }
}

/// Grid geometry for laying out cards on screen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns.
    pub columns: usize,

    /// Gap between cells and around the grid edge.
    pub spacing: f32,

    /// Extra downward shift applied after vertical centering (room for a header).
    pub top_bias: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            spacing: 15.0,
            top_bias: 50.0,
        }
    }
}

impl GridConfig {
    /// Set the column count.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the top bias.
    #[must_use]
    pub fn with_top_bias(mut self, top_bias: f32) -> Self {
        self.top_bias = top_bias;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        if !self.top_bias.is_finite() {
            return Err(ConfigError::InvalidTopBias(self.top_bias));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.pair_count(), 8);
        assert_eq!(config.symbols[0], SymbolId::new("suitcase"));
        assert_eq!(config.flip_back_delay, Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = GameConfig::new(["a", "b"])
            .with_delay(Duration::from_millis(250))
            .with_seed(9);

        assert_eq!(config.pair_count(), 2);
        assert_eq!(config.flip_back_delay, Duration::from_millis(250));
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let config = GameConfig::new(["a", "b", "a"]);

        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateSymbol(SymbolId::new("a")))
        );
    }

    #[test]
    fn test_empty_symbols_valid() {
        let config = GameConfig::new(Vec::<SymbolId>::new());
        assert!(config.validate().is_ok());
        assert_eq!(config.pair_count(), 0);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"symbols":["x","y"]}"#).unwrap();

        assert_eq!(config.symbols, vec![SymbolId::new("x"), SymbolId::new("y")]);
        assert_eq!(config.flip_back_delay, DEFAULT_FLIP_BACK_DELAY);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = GameConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_grid_validation() {
        assert!(GridConfig::default().validate().is_ok());
        assert_eq!(
            GridConfig::default().with_columns(0).validate(),
            Err(ConfigError::NoColumns)
        );
        assert!(matches!(
            GridConfig::default().with_spacing(-1.0).validate(),
            Err(ConfigError::InvalidSpacing(_))
        ));
        assert!(GridConfig::default().with_spacing(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_grid_top_bias_must_be_finite() {
        assert!(GridConfig::default().with_top_bias(-20.0).validate().is_ok());
        assert!(matches!(
            GridConfig::default().with_top_bias(f32::NAN).validate(),
            Err(ConfigError::InvalidTopBias(_))
        ));
        assert!(matches!(
            GridConfig::default().with_top_bias(f32::NEG_INFINITY).validate(),
            Err(ConfigError::InvalidTopBias(_))
        ));
    }
}
