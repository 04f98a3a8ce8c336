//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;

pub(super) const APP_NAME: &str = "nexus-progress";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "roboticgen";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Base URL the `/progress` path is appended to.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start date format string (chrono format).
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Show `done/total` next to each process.
    #[serde(default = "default_true")]
    pub show_task_totals: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            show_task_totals: true,
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

const fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_url) = &args.api_url {
            self.api_base_url.clone_from(api_url);
        }
        if let Some(timeout) = args.timeout {
            self.request_timeout_secs = timeout;
        }
    }

    /// Returns the request timeout, never shorter than one second.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("nexus-progress.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            api_base_url = "https://nexus.example.com/api"
            log_level = "debug"

            [ui]
            date_format = "%d.%m.%Y"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.api_base_url, "https://nexus.example.com/api");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.ui.date_format, "%d.%m.%Y");
        assert!(config.ui.show_task_totals);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.ui.date_format, "%-m/%-d/%Y");
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "nexus-progress",
            "--api-url",
            "http://10.0.0.2:9000/api",
            "--log-level",
            "warn",
            "--timeout",
            "0",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.api_base_url, "http://10.0.0.2:9000/api");
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }
}
