//! Detect command implementation

use std::path::Path;

use anyhow::{Context, Result};
use recur_core::{load_transactions, DetectionResults, InputFormat, RecurrenceDetector};
use tracing::error;

use super::load_config;
use crate::cli::ThresholdArgs;

/// Load a transaction file and run detection
///
/// Returns `None` when the file holds no transactions.
pub fn run_detection(
    file: &Path,
    format: Option<&str>,
    thresholds: &ThresholdArgs,
) -> Result<Option<DetectionResults>> {
    let format = format
        .map(|f| f.parse::<InputFormat>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;

    let config = load_config(thresholds)?;

    let transactions = load_transactions(file, format)
        .with_context(|| format!("Failed to load transactions from {}", file.display()))?;

    if transactions.is_empty() {
        error!("No transactions found in {}", file.display());
        return Ok(None);
    }

    let detector = RecurrenceDetector::with_config(config);
    Ok(Some(detector.detect_with_stats(&transactions)))
}

pub fn cmd_detect(
    file: &Path,
    format: Option<&str>,
    thresholds: &ThresholdArgs,
    json: bool,
) -> Result<()> {
    let results = run_detection(file, format, thresholds)?.unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&results.recurring)?);
        return Ok(());
    }

    println!();
    println!("🔁 Recurring Transactions");
    println!("   ─────────────────────────────");

    if results.recurring.is_empty() {
        println!("   None detected");
    } else {
        for description in &results.recurring {
            println!("   • {}", description);
        }
    }

    println!();
    println!(
        "   {} transactions, {} skipped, {} groups checked",
        results.transactions_seen, results.transactions_skipped, results.groups_found
    );
    if results.groups_with_bad_dates > 0 {
        println!(
            "   ⚠️  {} group(s) had unparseable dates. Run with --verbose for details.",
            results.groups_with_bad_dates
        );
    }

    Ok(())
}
