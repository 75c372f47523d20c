//! Configuration loading and management
//!
//! Settings come from an optional YAML file (path in `PLAYSTORE_CONFIG`)
//! and are then overridden by environment variables:
//!
//! | key                 | env                           | default                  |
//! |---------------------|-------------------------------|--------------------------|
//! | `bind_address`      | `PLAYSTORE_BIND`              | `127.0.0.1:8000`         |
//! | `data_path`         | `PLAYSTORE_DATA`              | bundled catalog          |
//! | `filter_precedence` | `PLAYSTORE_FILTER_PRECEDENCE` | `genre_overrides_search` |
//! | `cors`              | `PLAYSTORE_CORS`              | `true`                   |
//! | `log_level`         | `RUST_LOG` takes priority     | `info`                   |

use crate::core::FilterPrecedence;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Environment variable naming the YAML config file
pub const CONFIG_PATH_ENV: &str = "PLAYSTORE_CONFIG";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_address: String,

    /// JSON catalog to serve instead of the bundled one
    pub data_path: Option<String>,

    /// How `search` and `genres` combine
    pub filter_precedence: FilterPrecedence,

    /// Whether to answer cross-origin requests
    pub cors: bool,

    /// Default tracing filter when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            data_path: None,
            filter_precedence: FilterPrecedence::default(),
            cors: true,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path, e))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from `PLAYSTORE_CONFIG` (or defaults), then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Override fields from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Override fields from any key lookup
    ///
    /// Unset or empty values leave the field untouched.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(bind) = get("PLAYSTORE_BIND") {
            self.bind_address = bind;
        }

        if let Some(path) = get("PLAYSTORE_DATA") {
            self.data_path = Some(path);
        }

        if let Some(precedence) = get("PLAYSTORE_FILTER_PRECEDENCE") {
            self.filter_precedence = precedence
                .trim()
                .parse::<FilterPrecedence>()
                .map_err(|e| anyhow!(e))?;
        }

        if let Some(cors) = get("PLAYSTORE_CORS") {
            self.cors = parse_bool(&cors)
                .ok_or_else(|| anyhow!("PLAYSTORE_CORS must be a boolean, got '{}'", cors))?;
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
