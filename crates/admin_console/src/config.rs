//! Console configuration management.
//!
//! Handles loading of console configuration from TOML files with
//! environment variable override support.

use admin_client::{API_URL_ENV, DEFAULT_API_URL};
use admin_core::dashboard::DEFAULT_AUDIT_PAGE_SIZE;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "wallet_admin.toml";

const MAX_AUDIT_PAGE_SIZE: u32 = 500;

/// Console configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Backend base URL
    pub api_url: String,

    /// Log level
    pub log_level: String,

    /// Log file used while the TUI owns the terminal
    pub log_file: PathBuf,

    /// Audit logs fetched per page
    pub audit_page_size: u32,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: "info".to_string(),
            log_file: PathBuf::from("wallet_admin.log"),
            audit_page_size: DEFAULT_AUDIT_PAGE_SIZE,
            request_timeout_secs: 30,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(api_url) = std::env::var(API_URL_ENV) {
            self.api_url = api_url;
        }

        if let Ok(log_level) = std::env::var("WALLET_ADMIN_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(log_file) = std::env::var("WALLET_ADMIN_LOG_FILE") {
            self.log_file = PathBuf::from(log_file);
        }

        if let Ok(size) = std::env::var("WALLET_ADMIN_AUDIT_PAGE_SIZE") {
            if let Ok(size) = size.parse() {
                self.audit_page_size = size;
            }
        }

        if let Ok(timeout) = std::env::var("WALLET_ADMIN_REQUEST_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout.parse() {
                self.request_timeout_secs = timeout;
            }
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            errors.push(format!(
                "Invalid api_url '{}'. Must start with http:// or https://",
                self.api_url
            ));
        }

        if self.audit_page_size == 0 || self.audit_page_size > MAX_AUDIT_PAGE_SIZE {
            errors.push(format!(
                "audit_page_size {} must be between 1 and {}",
                self.audit_page_size, MAX_AUDIT_PAGE_SIZE
            ));
        }

        if self.request_timeout_secs == 0 {
            errors.push("request_timeout_secs must be greater than 0".to_string());
        }

        if self.log_file.as_os_str().is_empty() {
            errors.push("log_file cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
