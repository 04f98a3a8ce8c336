use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "nexus-progress",
    version,
    about = "Terminal client for tracking process progress",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the progress API.
    #[arg(long, value_name = "URL", env = "NEXUS_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Bearer token for the API.
    #[arg(long, env = "NEXUS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Store the given token in the system keyring.
    #[arg(long, requires = "token")]
    pub save_token: bool,

    /// Remove the stored token from the system keyring and exit.
    #[arg(long, conflicts_with = "save_token")]
    pub forget_token: bool,
}
