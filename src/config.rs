//! Configuration types for sessions.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, strategy::Difficulty, tictactoe::Symbol};

/// Configuration for a human-vs-computer session.
///
/// # Examples
///
/// ```
/// use tictactoe_engine::{SessionConfig, strategy::Difficulty, tictactoe::Symbol};
///
/// let config = SessionConfig::new(Symbol::O)
///     .with_difficulty(Difficulty::Hard)
///     .with_seed(42);
/// assert_eq!(config.computer_symbol(), Symbol::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Symbol the human plays; the computer takes the other one
    pub human_symbol: Symbol,
    /// Strength of the computer opponent
    pub difficulty: Difficulty,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a configuration for a human playing `human_symbol`.
    ///
    /// Uses Normal difficulty and no seed (non-deterministic).
    pub fn new(human_symbol: Symbol) -> Self {
        Self {
            human_symbol,
            difficulty: Difficulty::default(),
            seed: None,
        }
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn computer_symbol(&self) -> Symbol {
        self.human_symbol.other()
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create config {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Symbol::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"difficulty": "hard"}"#).unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.human_symbol, Symbol::X);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn builder_sets_fields() {
        let config = SessionConfig::new(Symbol::O)
            .with_difficulty(Difficulty::Easy)
            .with_seed(9);
        assert_eq!(config.computer_symbol(), Symbol::X);
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.seed, Some(9));
    }
}
