use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StatusError};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "I3_STATUS_INFO_CONFIG";

/// Per-metric threshold overrides
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    #[serde(default)]
    pub warning: Option<i8>,
    #[serde(default)]
    pub critical: Option<i8>,
}

/// Optional user configuration, read once per invocation.
///
/// Command-line flags always take precedence over these values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub cpu: ThresholdConfig,
    #[serde(default)]
    pub mem: ThresholdConfig,
    #[serde(default)]
    pub disk: ThresholdConfig,
    #[serde(default)]
    pub load: ThresholdConfig,
    #[serde(default)]
    pub battery: ThresholdConfig,
    #[serde(default)]
    pub wifi: ThresholdConfig,
    /// Throughput thresholds in MB/s
    #[serde(default)]
    pub disk_io: ThresholdConfig,
    /// Device rules in `name,icon,warning,critical` form
    #[serde(default)]
    pub battery_devices: Vec<String>,
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist. The default location is optional and a
    /// missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            StatusError::config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        let config = serde_json::from_str(&data).map_err(|e| {
            StatusError::config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;
        log::debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("i3-status-info").join("config.json"))
    }

    /// Threshold overrides for a metric subcommand
    pub fn thresholds(&self, metric: &str) -> ThresholdConfig {
        match metric {
            "cpu" => self.cpu,
            "mem" => self.mem,
            "disk" => self.disk,
            "load" => self.load,
            "battery" => self.battery,
            "wifi" => self.wifi,
            "disk-io" => self.disk_io,
            _ => ThresholdConfig::default(),
        }
    }
}
