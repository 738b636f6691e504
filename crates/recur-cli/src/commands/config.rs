//! Detection config resolution shared by commands

use anyhow::{Context, Result};
use recur_core::DetectionConfig;

use crate::cli::ThresholdArgs;

/// Load detection config, then apply any threshold flags on top
pub fn load_config(args: &ThresholdArgs) -> Result<DetectionConfig> {
    let mut config = DetectionConfig::load(args.config.as_deref())
        .context("Failed to load detection config")?;

    if let Some(min) = args.min_transactions {
        config.min_transactions = min;
    }
    if let Some(min) = args.min_gap_days {
        config.min_gap_days = min;
    }
    if let Some(max) = args.max_gap_days {
        config.max_gap_days = max;
    }

    config
        .validate()
        .context("Invalid detection thresholds")?;
    Ok(config)
}
