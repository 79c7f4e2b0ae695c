//! Optional TOML configuration
//!
//! Mirrors the command-line flags; values here act as defaults that flags
//! override. The file is looked up at `<config dir>/usbblock/config.toml`
//! unless an explicit path is given, and its absence is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use usbblock::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub monitor: MonitorSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Monitor cadence settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitorSettings {
    /// Polling interval in seconds (0.1-300.0)
    pub interval: Option<f64>,
    /// Seconds between simulated device connections
    pub device_period_secs: Option<u64>,
    /// Seconds between simulated write attempts
    pub write_period_secs: Option<u64>,
}

/// Output rendering settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Emit events and the report as JSON
    pub json: Option<bool>,
    /// Suppress the startup banner
    pub quiet: Option<bool>,
}

impl FileConfig {
    /// Load configuration from an explicit path
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load the per-user config file when present, defaults otherwise
    pub fn load_default() -> Result<Self> {
        match default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
