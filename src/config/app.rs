//! Application configuration assembly.
//!
//! Settings come from two places, both optional: environment variables
//! (`BIND_ADDR`, `SESSION_FILE`) and a `config.toml` next to the binary
//! holding the renewal-window and polling tables. Anything absent falls
//! back to a sensible default so a bare checkout runs.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::config::renewal::RenewalConfig;
use crate::errors::{Error, Result};

/// Polling settings, read from the `[poll]` table of config.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between snapshot refreshes
    pub interval_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval_secs: 30 }
    }
}

/// Structure of the optional config.toml file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    renewal: RenewalConfig,
    poll: PollConfig,
}

/// Fully resolved application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Path of the persisted session record
    pub session_file: PathBuf,
    /// Renewal window settings
    pub renewal: RenewalConfig,
    /// Interval between dashboard snapshot refreshes
    pub poll_interval: Duration,
}

fn load_file_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the full application configuration.
///
/// Reads `./config.toml` when it exists (a missing file is not an error,
/// a malformed one is), then overlays environment variables for the
/// server-level settings.
pub fn load_app_configuration() -> Result<AppConfig> {
    let file = if Path::new("config.toml").exists() {
        load_file_config("config.toml")?
    } else {
        FileConfig::default()
    };

    file.renewal.validate()?;

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let session_file = std::env::var("SESSION_FILE")
        .map_or_else(|_| PathBuf::from("data/session.json"), PathBuf::from);

    Ok(AppConfig {
        bind_addr,
        session_file,
        renewal: file.renewal,
        poll_interval: Duration::from_secs(file.poll.interval_secs),
    })
}
