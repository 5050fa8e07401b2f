//! User configuration loaded from TOML.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
    pub display: DisplayConfig,
    pub keypad: KeypadConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Width of the rendered display row.
    pub width: usize,
    /// Print the size tier next to the display.
    pub show_size_tier: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeypadConfig {
    /// Print the keypad when an interactive session starts.
    pub show_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            display: DisplayConfig::default(),
            keypad: KeypadConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 24,
            show_size_tier: false,
        }
    }
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            show_on_start: true,
        }
    }
}

impl Config {
    /// Get the default config file location (`~/.config/keycalc/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, the default
    /// location is tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
