//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::backend::BackendConfig;
use crate::flow::NoticeDelays;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendSection,

    #[serde(default)]
    pub notices: NoticeSection,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Roster service connection
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unset means no timeout beyond the transport default
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl BackendSection {
    pub fn to_backend_config(&self) -> BackendConfig {
        BackendConfig {
            base_url: self.base_url.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Notice display times
#[derive(Debug, Clone, Deserialize)]
pub struct NoticeSection {
    #[serde(default = "default_signup_hide")]
    pub signup_hide_ms: u64,

    #[serde(default = "default_unregister_hide")]
    pub unregister_hide_ms: u64,
}

fn default_signup_hide() -> u64 {
    5000
}

fn default_unregister_hide() -> u64 {
    4000
}

impl Default for NoticeSection {
    fn default() -> Self {
        Self {
            signup_hide_ms: default_signup_hide(),
            unregister_hide_ms: default_unregister_hide(),
        }
    }
}

impl NoticeSection {
    pub fn delays(&self) -> NoticeDelays {
        NoticeDelays {
            signup: Duration::from_millis(self.signup_hide_ms),
            unregister: Duration::from_millis(self.unregister_hide_ms),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("roster").join("config.toml")),
            Some(PathBuf::from("./roster.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("ROSTER_BASE_URL") {
            self.backend.base_url = url;
        }
        if let Some(level) = lookup("ROSTER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ROSTER_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Roster Configuration
#
# Environment variables override these settings:
# - ROSTER_BASE_URL
# - ROSTER_LOG_LEVEL
# - ROSTER_LOG_FORMAT

[backend]
# Roster service URL
base_url = "http://localhost:8000"

# Request timeout in seconds (unset: no timeout)
# request_timeout_secs = 30

[notices]
# How long notices stay visible (ms)
signup_hide_ms = 5000
unregister_hide_ms = 4000

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert!(config.backend.request_timeout_secs.is_none());
        assert_eq!(config.notices.delays(), NoticeDelays::default());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.backend.base_url, Config::default().backend.base_url);
        assert_eq!(config.notices.signup_hide_ms, 5000);
        assert_eq!(config.notices.unregister_hide_ms, 4000);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(
            &path,
            "[backend]\nbase_url = \"http://roster.local\"\nrequest_timeout_secs = 10\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.backend.base_url, "http://roster.local");

        let backend = config.backend.to_backend_config();
        assert_eq!(backend.request_timeout, Some(Duration::from_secs(10)));

        // Missing sections fall back to defaults
        assert_eq!(config.notices.signup_hide_ms, 5000);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[backend\nbase_url = ").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("ROSTER_BASE_URL", "http://override:9000"),
            ("ROSTER_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend.base_url, "http://override:9000");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
    }
}
