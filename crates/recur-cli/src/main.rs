//! Recur CLI - Recurring transaction detector
//!
//! Usage:
//!   recur detect --file example.json     Detect recurring transactions
//!   recur normalize "Jan 2021 Salary"    Show the grouping key for a description
//!   recur check-dates 2021-01-01 ...     Check dates for a monthly pattern

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Detect {
            file,
            format,
            json,
            thresholds,
        } => commands::cmd_detect(&file, format.as_deref(), &thresholds, json),
        Commands::Normalize { descriptions } => commands::cmd_normalize(&descriptions),
        Commands::CheckDates { dates, thresholds } => {
            commands::cmd_check_dates(&dates, &thresholds)
        }
    }
}
