use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ai::DEFAULT_DEPTH;
use crate::error::{BoardError, ConfigError};
use crate::game::{Board, COLS, ROWS};

/// Search and board settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched per decision
    pub depth: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_DEPTH,
            rows: ROWS,
            cols: COLS,
        }
    }
}

impl EngineConfig {
    /// Empty board with the configured dimensions
    pub fn empty_board(&self) -> Result<Board, BoardError> {
        Board::new(self.rows, self.cols)
    }
}

/// Who the engine faces in `play` matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    Random,
    Minimax,
}

/// Match settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub games: usize,
    pub opponent: Opponent,
    /// Seed for the random opponent; fresh entropy when unset
    pub seed: Option<u64>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            games: 10,
            opponent: Opponent::Random,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub play: PlayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.depth == 0 {
            return Err(ConfigError::Validation(
                "engine.depth must be >= 1".into(),
            ));
        }
        if self.engine.rows == 0 {
            return Err(ConfigError::Validation(
                "engine.rows must be >= 1".into(),
            ));
        }
        if self.engine.cols == 0 {
            return Err(ConfigError::Validation(
                "engine.cols must be >= 1".into(),
            ));
        }
        if self.play.games == 0 {
            return Err(ConfigError::Validation(
                "play.games must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
