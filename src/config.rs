//! Configuration management for the application.
//!
//! The configuration is a TOML file in the platform config directory. It is
//! read-only for the application: users edit it by hand.

use crate::constants::DEFAULT_HISTORY_LIMIT;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "GESTURE_LAYOUTS_CONFIG_DIR";

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct PathConfig {
    /// Preferences file holding the selection and custom layout history.
    /// Defaults to `preferences.toml` in the config directory.
    #[serde(default)]
    pub preferences_file: Option<PathBuf>,
}

/// Custom layout history settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of remembered custom layouts
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_max_entries() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/GestureLayouts/config.toml`
/// - macOS: `~/Library/Application Support/GestureLayouts/config.toml`
/// - Windows: `%APPDATA%\GestureLayouts\config.toml`
///
/// The directory can be overridden with `GESTURE_LAYOUTS_CONFIG_DIR`.
///
/// # Validation
///
/// - `history.max_entries` must be at least 1
/// - `preferences_file`, if set, must not be a directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Custom layout history settings
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Gets the config directory path.
    ///
    /// `GESTURE_LAYOUTS_CONFIG_DIR` wins when set; otherwise the platform
    /// config directory is used:
    /// - Linux: `~/.config/GestureLayouts/`
    /// - macOS: `~/Library/Application Support/GestureLayouts/`
    /// - Windows: `%APPDATA%\GestureLayouts\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        dirs::config_dir()
            .map(|dir| dir.join("GestureLayouts"))
            .context("Failed to determine config directory")
    }

    /// Gets the preferences file path, falling back to the config directory.
    pub fn preferences_path(&self) -> Result<PathBuf> {
        match &self.paths.preferences_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("preferences.toml")),
        }
    }

    /// Loads `config.toml` from the config directory.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.history.max_entries == 0 {
            anyhow::bail!("history.max_entries must be at least 1");
        }

        if let Some(path) = self
            .paths
            .preferences_file
            .as_deref()
            .filter(|path| path.is_dir())
        {
            anyhow::bail!("Preferences file path is a directory: {}", path.display());
        }

        Ok(())
    }
}
