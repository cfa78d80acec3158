//! TOML-based application configuration.
//!
//! Stores:
//! - The auto-return delay for picked items
//! - An optional custom seed list overriding the stock registry
//!
//! Configuration is stored at `~/.config/sortboard/config.toml`; set
//! `SORTBOARD_CONFIG_DIR` to relocate it (tests and sandboxes).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::board::{build_items, default_seeds, Item, SeedItem};
use crate::error::ConfigError;

/// Board-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Countdown duration in milliseconds before a picked item returns
    /// to the pool.
    #[serde(default = "default_return_delay_ms")]
    pub return_delay_ms: u64,
}

fn default_return_delay_ms() -> u64 {
    5000
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            return_delay_ms: default_return_delay_ms(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/sortboard/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,
    /// Custom seed list override (stock registry when absent).
    #[serde(default)]
    pub items: Option<Vec<SeedItem>>,
}

/// Returns `~/.config/sortboard/`, honoring `SORTBOARD_CONFIG_DIR`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("SORTBOARD_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("sortboard"),
    };
    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DirUnavailable(e.to_string()))?;
    Ok(dir)
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path (missing file yields the default, which
    /// is also written back).
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Build the item registry: custom seeds when configured, otherwise
    /// the stock list.
    pub fn registry(&self) -> Vec<Item> {
        match &self.items {
            Some(seeds) => build_items(seeds),
            None => build_items(&default_seeds()),
        }
    }
}
