//! Configuration loading for the landing CLI.
//!
//! Reads an optional `landing.toml`:
//!
//! ```toml
//! [gemini]
//! model = "gemini-3-flash-preview"
//! base_url = "https://generativelanguage.googleapis.com"
//! api_key = "..."
//! timeout_secs = 60
//!
//! [page]
//! footer_year = 2025
//! ```
//!
//! Every field has a default, so a missing file or a partial one is fine.
//! `timeout_secs = 0` sends refinement requests without a client timeout.
//! `GEMINI_API_KEY` (or `API_KEY`) in the environment overrides the file's key.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "landing.toml";

/// Model used when the config doesn't name one
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Public Gemini API host
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variables checked for the API key, in priority order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse toml config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level `landing.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub gemini: GeminiConfig,
    pub page: PageConfig,
}

/// `[gemini]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    /// Client timeout for refinement requests; `None` when `timeout_secs` is 0
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// `[page]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub footer_year: u16,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            footer_year: page_leptos::DEFAULT_FOOTER_YEAR,
        }
    }
}

impl LandingConfig {
    /// Load config from `path`. A missing file yields defaults; a malformed
    /// one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides using the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(|name| std::env::var(name).ok())
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let key = API_KEY_VARS
            .into_iter()
            .filter_map(&lookup)
            .find(|value| !value.trim().is_empty());
        if let Some(key) = key {
            self.gemini.api_key = Some(key);
        }
        self
    }
}
