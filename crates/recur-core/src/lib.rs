//! Recur Core Library
//!
//! Detects recurring monthly transactions (subscriptions, salaries, rent):
//! - Description normalization (month/year tokens stripped)
//! - Monthly interval matching with a configurable day window
//! - Grouping and recurrence detection with injectable diagnostics
//! - JSON and CSV transaction loaders
//! - TOML detection config

pub mod config;
pub mod detect;
pub mod diagnostics;
pub mod error;
pub mod import;
pub mod models;
pub mod normalize;
pub mod pattern;

pub use config::DetectionConfig;
pub use detect::{
    detect_recurring, group_transactions, DetectionResults, RecurrenceDetector, TransactionGroup,
};
pub use diagnostics::{CollectingReporter, Diagnostic, Reporter, Severity, TracingReporter};
pub use error::{Error, Result};
pub use import::{load_transactions, parse_csv, parse_json, InputFormat};
pub use models::{MissingField, Transaction, TransactionFile};
pub use normalize::normalize_description;
pub use pattern::{is_monthly_pattern, MonthlyPattern};
