//! Detection configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/recur/config.toml) when it exists
//! 2. Fall back to built-in defaults (3 transactions, 27–33 day gaps)
//!
//! ```toml
//! [detection]
//! min_transactions = 3
//! min_gap_days = 27
//! max_gap_days = 33
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Detection thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Minimum transactions sharing a description before a pattern is checked
    pub min_transactions: usize,
    /// Smallest accepted gap between consecutive charges, in days (inclusive)
    pub min_gap_days: i64,
    /// Largest accepted gap between consecutive charges, in days (inclusive)
    pub max_gap_days: i64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_transactions: 3,
            // 28–31 day months plus up to two days of payment jitter
            min_gap_days: 27,
            max_gap_days: 33,
        }
    }
}

impl DetectionConfig {
    /// Load config (explicit path first, then data dir override, then defaults)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = override_path {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        debug!("Loaded detection config from {}", path.display());
        Self::parse(&content)
    }

    /// Parse config from TOML content; missing keys keep their defaults
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::default();
        if let Some(detection) = raw.detection {
            if let Some(min) = detection.min_transactions {
                config.min_transactions = min;
            }
            if let Some(min) = detection.min_gap_days {
                config.min_gap_days = min;
            }
            if let Some(max) = detection.max_gap_days {
                config.max_gap_days = max;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the thresholds describe a usable window
    pub fn validate(&self) -> Result<()> {
        if self.min_transactions == 0 {
            return Err(Error::Config(
                "min_transactions must be at least 1".to_string(),
            ));
        }
        if self.min_gap_days < 0 {
            return Err(Error::Config(format!(
                "min_gap_days must not be negative (got {})",
                self.min_gap_days
            )));
        }
        if self.min_gap_days > self.max_gap_days {
            return Err(Error::Config(format!(
                "min_gap_days ({}) is greater than max_gap_days ({})",
                self.min_gap_days, self.max_gap_days
            )));
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("recur").join("config.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    detection: Option<RawDetection>,
}

#[derive(Debug, Deserialize)]
struct RawDetection {
    min_transactions: Option<usize>,
    min_gap_days: Option<i64>,
    max_gap_days: Option<i64>,
}
