//! Application configuration
//!
//! Per-invocation settings derived from the command line and the control dict.

use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Configuration file this invocation reads
    pub config_path: PathBuf,
    /// Raw `computation_config.log_level` value, if the config provided one
    pub configured_log_level: Option<String>,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            configured_log_level: None,
        }
    }

    /// Set the log level requested by the configuration file
    pub fn with_log_level(mut self, level: Option<&str>) -> Self {
        self.configured_log_level = level.map(str::to_string);
        self
    }

    /// Get the log filter directive for the configured level
    pub fn log_level(&self) -> &'static str {
        self.configured_log_level
            .as_deref()
            .and_then(parse_level)
            .unwrap_or("info")
    }

    /// Configured level that could not be understood
    pub fn unrecognized_log_level(&self) -> Option<&str> {
        self.configured_log_level
            .as_deref()
            .filter(|level| parse_level(level).is_none())
    }

    /// Whether debug output (and full error chains) are enabled
    pub fn is_verbose(&self) -> bool {
        matches!(self.log_level(), "debug" | "trace")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CONFIG_PATH)
    }
}

fn parse_level(level: &str) -> Option<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" | "critical" => Some("error"),
        _ => None,
    }
}
