//! Configuration types for the serp host.
//!
//! Loaded from TOML:
//!
//! ```toml
//! [ranker]
//! min_token_length = 3
//!
//! [priorities]
//! naver = 3
//! google = 2
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serp_rank::{Priority, RankConfig};

use crate::error::{AppError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Ranking settings.
    pub ranker: RankerConfig,
    /// Engine priority overrides, keyed by engine identifier.
    pub priorities: BTreeMap<String, Priority>,
}

/// Ranking settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Query tokens shorter than this many characters are ignored.
    pub min_token_length: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            min_token_length: serp_rank::DEFAULT_MIN_TOKEN_LENGTH,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// describes an invalid ranking configuration.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;
        config.rank_config().validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `path` if given, else the default config file if it exists,
    /// else the built-in defaults.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Returns the default config file path: `~/.config/serp/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("serp").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("serp")
                .join("config.toml")
        } else {
            PathBuf::from("serp-config.toml")
        }
    }

    /// The ranking core's view of this configuration.
    pub fn rank_config(&self) -> RankConfig {
        RankConfig {
            min_token_length: self.ranker.min_token_length,
            priorities: self.priorities.clone(),
        }
    }
}
