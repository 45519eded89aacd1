//! Configuration management for quire.
//!
//! Loads configuration from ${QUIRE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "QUIRE_API_URL";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for quire configuration and data directories.
    //!
    //! QUIRE_HOME resolution order:
    //! 1. QUIRE_HOME environment variable (if set)
    //! 2. ~/.config/quire (default)

    use std::path::PathBuf;

    /// Returns the quire home directory.
    ///
    /// Checks QUIRE_HOME env var first, falls back to ~/.config/quire
    /// (or a relative `.quire` when no home directory can be determined).
    pub fn quire_home() -> PathBuf {
        if let Ok(home) = std::env::var("QUIRE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".quire"),
            |h| h.join(".config").join("quire"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        quire_home().join("config.toml")
    }

    /// Returns the path to the persisted credentials slot.
    pub fn credentials_path() -> PathBuf {
        quire_home().join("credentials.json")
    }

    /// Returns the directory holding log files.
    pub fn logs_dir() -> PathBuf {
        quire_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the articles API (e.g. `http://localhost:9000/api`).
    pub api_url: String,
}

impl Config {
    pub const DEFAULT_API_URL: &'static str = "http://localhost:9000/api";

    /// Loads configuration from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to `path`.
    ///
    /// Fails if the file already exists (no silent overwrite).
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }

    /// Resolves the API base URL with precedence:
    /// explicit override > `QUIRE_API_URL` env > config > default.
    ///
    /// The returned URL never ends with a slash.
    pub fn resolve_api_url(&self, override_url: Option<&str>) -> Result<String> {
        let env_url = std::env::var(API_URL_ENV).ok();
        let candidates = [override_url, env_url.as_deref(), Some(self.api_url.as_str())];

        let chosen = candidates
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(Self::DEFAULT_API_URL);

        url::Url::parse(chosen).with_context(|| format!("Invalid API base URL: {chosen}"))?;
        Ok(chosen.trim_end_matches('/').to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
        }
    }
}
