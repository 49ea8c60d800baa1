//! Configuration loading and management

mod alias;
mod settings;

pub use alias::AliasConfig;
pub use settings::Settings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Alias configurations
    #[serde(default)]
    pub alias: AliasConfig,

    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Get the config directory path (~/.launch-terminal/)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".launch-terminal")
    }

    /// Get the config file path (~/.launch-terminal/config.toml)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load the user config, falling back to defaults when no file exists.
    ///
    /// Built-in aliases are merged in either way; user entries shadow them.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default().with_builtin_aliases())
        }
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config.with_builtin_aliases())
    }

    /// Merge the built-in alias table in; user entries shadow it.
    pub fn with_builtin_aliases(mut self) -> Self {
        self.alias = self.alias.with_builtins();
        self
    }
}
