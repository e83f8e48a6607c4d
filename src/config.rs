//! Application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config directory
//! (or `$COVERDESK_CONFIG_DIR`) and includes:
//! - The API base URL of the insurance backend
//! - An optional request timeout
//! - The tab the TUI opens on

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{CoverdeskError, Result};
use crate::types::EntityKind;

pub const DEFAULT_API_BASE: &str = "https://insurance-backened.onrender.com/api";

pub const CONFIG_DIR_ENV: &str = "COVERDESK_CONFIG_DIR";
pub const API_BASE_ENV: &str = "COVERDESK_API_BASE";

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: &[&str] = &["api_base", "request_timeout", "initial_tab"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL every entity path is appended to
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Request timeout in seconds (unset = wait indefinitely)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,

    /// Tab shown when the TUI starts
    #[serde(default)]
    pub initial_tab: EntityKind,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            request_timeout: None,
            initial_tab: EntityKind::default(),
        }
    }
}

impl Config {
    /// Directory holding the config file
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV)
            && !dir.is_empty()
        {
            return Ok(PathBuf::from(dir));
        }
        project_dirs()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| CoverdeskError::Config("could not determine home directory".into()))
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&content).map_err(|e| {
            CoverdeskError::Config(format!("invalid config file {}: {}", path.display(), e))
        })
    }

    /// Parse config file content. Unknown keys are rejected and `api_base`
    /// must be a valid URL.
    fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_yaml_ng::from_str(content)?;
        normalize_api_base(&config.api_base)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Resolve the effective API base: explicit override, then environment
    /// variable, then the config file. The result is validated and has no
    /// trailing slash.
    pub fn resolve_api_base(&self, override_base: Option<&str>) -> Result<String> {
        if let Some(base) = override_base {
            return normalize_api_base(base);
        }
        if let Ok(base) = env::var(API_BASE_ENV)
            && !base.is_empty()
        {
            return normalize_api_base(&base);
        }
        normalize_api_base(&self.api_base)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Read a single key as a display string
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api_base" => Ok(self.api_base.clone()),
            "request_timeout" => Ok(self
                .request_timeout
                .map(|t| t.to_string())
                .unwrap_or_else(|| "none".to_string())),
            "initial_tab" => Ok(self.initial_tab.plural().to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single key from its string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_base" => {
                self.api_base = normalize_api_base(value)?;
            }
            "request_timeout" => {
                self.request_timeout = match value {
                    "" | "none" | "0" => None,
                    v => Some(v.parse().map_err(|_| {
                        CoverdeskError::Config(format!(
                            "invalid request_timeout '{}': expected seconds or 'none'",
                            v
                        ))
                    })?),
                };
            }
            "initial_tab" => {
                self.initial_tab = value.parse()?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> CoverdeskError {
    CoverdeskError::Config(format!(
        "unknown config key '{}'. Valid keys: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "coverdesk")
}

/// Directory for runtime files such as the TUI log
pub fn data_dir() -> Result<PathBuf> {
    project_dirs()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .ok_or_else(|| CoverdeskError::Config("could not determine home directory".into()))
}

/// Validate an API base URL and strip its trailing slash
pub fn normalize_api_base(base: &str) -> Result<String> {
    let trimmed = base.trim();
    let url = url::Url::parse(trimmed)
        .map_err(|e| CoverdeskError::InvalidUrl(trimmed.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(CoverdeskError::InvalidUrl(
            trimmed.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(CoverdeskError::InvalidUrl(
            trimmed.to_string(),
            "query strings and fragments are not allowed".to_string(),
        ));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
