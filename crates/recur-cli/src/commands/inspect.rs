//! Normalize and check-dates command implementations

use anyhow::Result;
use recur_core::{normalize_description, DetectionConfig, MonthlyPattern, TracingReporter};

use super::load_config;
use crate::cli::ThresholdArgs;

pub fn cmd_normalize(descriptions: &[String]) -> Result<()> {
    for description in descriptions {
        println!("{:?} → {:?}", description, normalize_description(description));
    }
    Ok(())
}

/// Check dates against the configured window
pub fn check_dates(dates: &[String], config: &DetectionConfig) -> bool {
    MonthlyPattern::from_config(config).matches(dates, None, &TracingReporter)
}

pub fn cmd_check_dates(dates: &[String], thresholds: &ThresholdArgs) -> Result<()> {
    let config = load_config(thresholds)?;
    if check_dates(dates, &config) {
        println!(
            "✅ Monthly pattern ({}–{} day gaps)",
            config.min_gap_days, config.max_gap_days
        );
    } else {
        println!(
            "❌ Not a monthly pattern ({}–{} day gaps)",
            config.min_gap_days, config.max_gap_days
        );
    }
    Ok(())
}
