//! Configuration management for previewlink.
//!
//! Handles loading and saving configuration from TOML files.
//! Config files are stored in platform-specific locations:
//!
//! - **macOS/Linux**: `~/.config/previewlink/config.toml`
//! - **Windows**: `%APPDATA%\previewlink\config.toml`
//!
//! Tokens are never stored here; they come from the command line or the
//! environment (`GITHUB_TOKEN`, `LINEAR_API_KEY`).
//!
//! # Example
//!
//! ```ignore
//! use previewlink_core::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("github.owner", "meteora-pro")?;
//! config.set("preview.provider", "netlify")?;
//! config.save()?;
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Config directory name.
const CONFIG_DIR_NAME: &str = "previewlink";

// =============================================================================
// Configuration structures
// =============================================================================

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// GitHub configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<GitHubConfig>,

    /// Linear configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linear: Option<LinearConfig>,

    /// Preview resolution defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewConfig>,
}

/// GitHub configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// GitHub API base URL (for GitHub Enterprise)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Linear configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearConfig {
    /// GraphQL endpoint override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Preview resolution defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Provider id used when none is given on the command line.
    /// Left unset, the provider is detected from the pull request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

// =============================================================================
// Config implementation
// =============================================================================

impl Config {
    /// Get the configuration directory path.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(CONFIG_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location.
    ///
    /// Returns a default (empty) config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// Returns a default (empty) config if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = ?path, "Config file does not exist, using defaults");
            return Ok(Self::default());
        }

        debug!(path = ?path, "Loading config");

        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;

        info!(path = ?path, "Config loaded successfully");
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        debug!(path = ?path, "Saving config");

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        info!(path = ?path, "Config saved successfully");
        Ok(())
    }

    /// Repository as `(owner, repo)`, if both are configured.
    pub fn repository(&self) -> Option<(&str, &str)> {
        let github = self.github.as_ref()?;
        if github.owner.is_empty() || github.repo.is_empty() {
            return None;
        }
        Some((github.owner.as_str(), github.repo.as_str()))
    }

    /// Default preview provider id, if configured.
    pub fn default_provider(&self) -> Option<&str> {
        self.preview.as_ref().and_then(|p| p.provider.as_deref())
    }

    /// Set a configuration value by key path.
    ///
    /// Key format: `section.field` (e.g., `github.owner`, `preview.provider`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let (section, field) = split_key(key)?;

        match section {
            "github" => {
                let config = self.github.get_or_insert_with(GitHubConfig::default);
                match field {
                    "owner" => config.owner = value.to_string(),
                    "repo" => config.repo = value.to_string(),
                    "base_url" | "url" => config.base_url = Some(value.to_string()),
                    _ => return Err(unknown_field("GitHub", field)),
                }
            }
            "linear" => {
                let config = self.linear.get_or_insert_with(LinearConfig::default);
                match field {
                    "base_url" | "url" => config.base_url = Some(value.to_string()),
                    _ => return Err(unknown_field("Linear", field)),
                }
            }
            "preview" => {
                let config = self.preview.get_or_insert_with(PreviewConfig::default);
                match field {
                    "provider" => config.provider = Some(value.to_string()),
                    _ => return Err(unknown_field("preview", field)),
                }
            }
            _ => {
                return Err(Error::Config(format!("Unknown section: {}", section)));
            }
        }

        Ok(())
    }

    /// Get a configuration value by key path.
    ///
    /// Key format: `section.field` (e.g., `github.owner`, `preview.provider`)
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let (section, field) = split_key(key)?;

        match section {
            "github" => {
                let Some(config) = &self.github else {
                    return Ok(None);
                };
                match field {
                    "owner" => Ok(Some(config.owner.clone())),
                    "repo" => Ok(Some(config.repo.clone())),
                    "base_url" | "url" => Ok(config.base_url.clone()),
                    _ => Err(unknown_field("GitHub", field)),
                }
            }
            "linear" => {
                let Some(config) = &self.linear else {
                    return Ok(None);
                };
                match field {
                    "base_url" | "url" => Ok(config.base_url.clone()),
                    _ => Err(unknown_field("Linear", field)),
                }
            }
            "preview" => {
                let Some(config) = &self.preview else {
                    return Ok(None);
                };
                match field {
                    "provider" => Ok(config.provider.clone()),
                    _ => Err(unknown_field("preview", field)),
                }
            }
            _ => Err(Error::Config(format!("Unknown section: {}", section))),
        }
    }
}

fn split_key(key: &str) -> Result<(&str, &str)> {
    match key.split('.').collect::<Vec<_>>().as_slice() {
        [section, field] => Ok((*section, *field)),
        _ => Err(Error::Config(format!(
            "Invalid config key '{}'. Expected format: section.field",
            key
        ))),
    }
}

fn unknown_field(section: &str, field: &str) -> Error {
    Error::Config(format!("Unknown {} config field: {}", section, field))
}

// =============================================================================
// Tests
// =============================================================================
