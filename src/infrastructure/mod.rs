//! Infrastructure layer with external service adapters.

/// Progress REST API client.
pub mod api;
/// Application configuration.
pub mod config;
/// Token storage adapters.
pub mod storage;

pub use api::ProgressClient;
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use storage::KeyringTokenStorage;
