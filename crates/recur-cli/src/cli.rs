//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Recur - Find recurring monthly transactions
#[derive(Parser)]
#[command(name = "recur")]
#[command(about = "Detect subscriptions and other monthly recurring transactions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect recurring transactions in a JSON or CSV file
    Detect {
        /// Transaction file to read
        #[arg(short, long)]
        file: PathBuf,

        /// Input format: json, csv (inferred from the extension if not specified)
        #[arg(long)]
        format: Option<String>,

        /// Print the result as a JSON array
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Show the normalized grouping key for descriptions
    Normalize {
        /// Descriptions to normalize
        #[arg(required = true)]
        descriptions: Vec<String>,
    },

    /// Check whether dates (YYYY-MM-DD) follow a monthly pattern
    CheckDates {
        /// Dates to check, in any order
        #[arg(required = true)]
        dates: Vec<String>,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },
}

/// Detection threshold overrides
#[derive(Args, Debug, Default, Clone)]
pub struct ThresholdArgs {
    /// Detection config file (defaults to ~/.local/share/recur/config.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum transactions per description
    #[arg(long)]
    pub min_transactions: Option<usize>,

    /// Smallest accepted gap between charges, in days
    #[arg(long)]
    pub min_gap_days: Option<i64>,

    /// Largest accepted gap between charges, in days
    #[arg(long)]
    pub max_gap_days: Option<i64>,
}
