//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Spreadsheet endpoint configuration
    pub sheets: SheetsConfig,

    /// Local backup storage configuration
    #[serde(default)]
    pub backup: BackupConfig,

    /// User interface configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    /// Apps Script deployment URL registrations are posted to
    pub endpoint_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackupConfig {
    /// Path to the local backup file
    #[serde(default = "default_backup_path")]
    pub path: PathBuf,

    /// Maximum records kept locally (oldest evicted first)
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Enable persistence (if false, the backup is in-memory only)
    #[serde(default = "default_true")]
    pub persist: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// How long non-success status messages stay visible
    #[serde(default = "default_message_timeout", with = "humantime_serde")]
    pub message_timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level filter
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            path: default_backup_path(),
            capacity: default_capacity(),
            persist: default_true(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_timeout: default_message_timeout(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_backup_path() -> PathBuf {
    "registrations.json".into()
}

fn default_capacity() -> usize {
    backup_store::DEFAULT_CAPACITY
}

fn default_message_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_log_level() -> String {
    "info".into()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Keep strings as strings; the endpoint URL and paths
                    // must never be coerced into other types.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
