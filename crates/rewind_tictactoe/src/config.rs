//! Session configuration.

use crate::error::ConfigError;
use crate::settings::{Difficulty, HistoryOrder};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Pacing delay before the computer's move appears.
pub const DEFAULT_MOVE_DELAY_MS: u64 = 280;

/// Options for a [`crate::Session`].
///
/// Every key is optional in the TOML form:
///
/// ```toml
/// difficulty = "hard"
/// move_delay_ms = 0
/// seed = 42
/// history_order = "descending"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SessionConfig {
    /// Strategy the computer starts with.
    difficulty: Difficulty,

    /// Delay before a scheduled computer move is applied.
    move_delay_ms: u64,

    /// Seed for the heuristic's random tie-breaking; OS entropy when absent.
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Order of history labels.
    history_order: HistoryOrder,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            move_delay_ms: DEFAULT_MOVE_DELAY_MS,
            seed: None,
            history_order: HistoryOrder::default(),
        }
    }
}

impl SessionConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// [`Self::move_delay_ms`] as a duration.
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }
}
