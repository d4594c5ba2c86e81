//! Client configuration.
//!
//! # Responsibility
//! - Hold the settings an `AtlanClient` and its logging need.
//! - Load them from JSON and/or `ATLAN_*` environment variables.
//!
//! # Invariants
//! - `base_url` uses `http` or `https`.
//! - `log_dir`, when set, is absolute.
//! - Search page size used at runtime is clamped to `[1, MAX_PAGE_SIZE]`.

use crate::logging::normalize_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:21000";
pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const MAX_PAGE_SIZE: usize = 500;

pub const ENV_BASE_URL: &str = "ATLAN_BASE_URL";
pub const ENV_PAGE_SIZE: &str = "ATLAN_PAGE_SIZE";
pub const ENV_LOG_LEVEL: &str = "ATLAN_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ATLAN_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    InvalidValue { key: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "failed to parse client config: {message}"),
            Self::InvalidValue { key, message } => write!(f, "invalid `{key}`: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Settings shared by every call made through one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Tenant URL of the catalog service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Hits requested per search page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Rolling log directory; logging stays off when unset.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_log_level() -> String {
    crate::logging::default_log_level().to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Parses a JSON document; missing keys take defaults.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(source).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `ATLAN_*` process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup` (keyed by `ENV_*` names) and validates.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_BASE_URL) {
            self.base_url = value.trim().to_string();
        }
        if let Some(value) = lookup(ENV_PAGE_SIZE) {
            self.page_size = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "page_size",
                    message: format!("`{value}` is not a positive integer"),
                })?;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.log_level = value;
        }
        if let Some(value) = lookup(ENV_LOG_DIR) {
            let trimmed = value.trim();
            self.log_dir = if trimmed.is_empty() {
                None
            } else {
                Some(PathBuf::from(trimmed))
            };
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "base_url",
                message: format!("`{base_url}` must start with http:// or https://"),
            });
        }
        normalize_level(&self.log_level).map_err(|message| ConfigError::InvalidValue {
            key: "log_level",
            message,
        })?;
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    key: "log_dir",
                    message: format!("`{}` must be absolute", dir.display()),
                });
            }
        }
        Ok(())
    }

    /// Page size actually sent to the search endpoint.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}
