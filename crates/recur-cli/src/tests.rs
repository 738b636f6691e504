//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use recur_core::DetectionConfig;
use tempfile::TempDir;

use crate::cli::{Cli, Commands, ThresholdArgs};
use crate::commands;

const STATEMENT: &str = r#"{"transactions": [
    {"description": "Spotify", "amount": -14.99, "date": "2021-01-29"},
    {"description": "Spotify", "amount": -14.99, "date": "2020-12-29"},
    {"description": "Spotify", "amount": -14.99, "date": "2020-11-29"},
    {"description": "Netflix", "amount": -20.00, "date": "2020-02-15"},
    {"description": "Netflix", "amount": -20.00, "date": "2020-03-14"},
    {"description": "Rent", "amount": -900, "date": "2020-01-01"},
    {"description": "Rent", "amount": -900, "date": "2020-02-01"},
    {"description": "Rent", "amount": -900, "date": "2020-03-01"}
]}"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

/// Thresholds pinned to the defaults so a user config never leaks into tests
fn default_thresholds(dir: &TempDir) -> ThresholdArgs {
    ThresholdArgs {
        config: Some(write_file(dir, "config.toml", "")),
        ..Default::default()
    }
}

// ========== Config Tests ==========

#[test]
fn test_load_config_defaults() {
    let dir = TempDir::new().unwrap();
    let config = commands::load_config(&default_thresholds(&dir)).unwrap();
    assert_eq!(config, DetectionConfig::default());
}

#[test]
fn test_load_config_flags_override_file() {
    let dir = TempDir::new().unwrap();
    let args = ThresholdArgs {
        config: Some(write_file(
            &dir,
            "config.toml",
            "[detection]\nmin_transactions = 5\nmax_gap_days = 40\n",
        )),
        min_transactions: Some(2),
        ..Default::default()
    };

    let config = commands::load_config(&args).unwrap();
    assert_eq!(config.min_transactions, 2);
    assert_eq!(config.min_gap_days, 27);
    assert_eq!(config.max_gap_days, 40);
}

#[test]
fn test_load_config_rejects_inverted_flags() {
    let dir = TempDir::new().unwrap();
    let args = ThresholdArgs {
        min_gap_days: Some(35),
        max_gap_days: Some(30),
        ..default_thresholds(&dir)
    };
    assert!(commands::load_config(&args).is_err());
}

// ========== Detect Command Tests ==========

#[test]
fn test_run_detection_json() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "statement.json", STATEMENT);

    let results = commands::run_detection(&file, None, &default_thresholds(&dir))
        .unwrap()
        .unwrap();
    assert_eq!(results.recurring, vec!["Spotify", "Rent"]);
    assert_eq!(results.groups_under_support, 1);
}

#[test]
fn test_run_detection_min_transactions_flag() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "statement.json", STATEMENT);
    let args = ThresholdArgs {
        min_transactions: Some(2),
        ..default_thresholds(&dir)
    };

    let results = commands::run_detection(&file, None, &args).unwrap().unwrap();
    assert!(results.recurring.contains(&"Netflix".to_string()));
}

#[test]
fn test_run_detection_csv_explicit_format() {
    let dir = TempDir::new().unwrap();
    let file = write_file(
        &dir,
        "export.txt",
        "description,date,amount\nGym,2021-01-05,-30\nGym,2021-02-04,-30\nGym,2021-03-06,-30\n",
    );

    let results = commands::run_detection(&file, Some("csv"), &default_thresholds(&dir))
        .unwrap()
        .unwrap();
    assert_eq!(results.recurring, vec!["Gym"]);
}

#[test]
fn test_run_detection_empty_file() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "empty.json", r#"{"transactions": []}"#);

    let results = commands::run_detection(&file, None, &default_thresholds(&dir)).unwrap();
    assert!(results.is_none());
}

#[test]
fn test_run_detection_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = commands::run_detection(
        &dir.path().join("missing.json"),
        None,
        &default_thresholds(&dir),
    );
    assert!(result.is_err());
}

#[test]
fn test_run_detection_unknown_format() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "statement.json", STATEMENT);
    let result = commands::run_detection(&file, Some("xml"), &default_thresholds(&dir));
    assert!(result.is_err());
}

#[test]
fn test_cmd_detect() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "statement.json", STATEMENT);
    let args = default_thresholds(&dir);

    assert!(commands::cmd_detect(&file, None, &args, false).is_ok());
    assert!(commands::cmd_detect(&file, None, &args, true).is_ok());
}

// ========== Inspect Command Tests ==========

#[test]
fn test_cmd_normalize() {
    let descriptions = vec!["Jan 2021 Acme Corp Salary".to_string(), "Aug Bonus".to_string()];
    assert!(commands::cmd_normalize(&descriptions).is_ok());
}

#[test]
fn test_check_dates() {
    let config = DetectionConfig::default();
    let monthly: Vec<String> = ["2021-01-01", "2021-02-02", "2021-03-01", "2021-04-01"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert!(commands::check_dates(&monthly, &config));

    let irregular: Vec<String> = ["2021-01-01", "2021-02-05", "2021-03-01"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert!(!commands::check_dates(&irregular, &config));

    let malformed = vec!["2021-01-01".to_string(), "yesterday".to_string()];
    assert!(!commands::check_dates(&malformed, &config));
}

#[test]
fn test_cmd_check_dates() {
    let dir = TempDir::new().unwrap();
    let dates = vec!["2021-01-01".to_string(), "2021-02-01".to_string()];
    assert!(commands::cmd_check_dates(&dates, &default_thresholds(&dir)).is_ok());
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_detect_args() {
    let cli = Cli::try_parse_from([
        "recur",
        "detect",
        "--file",
        "example.json",
        "--min-gap-days",
        "25",
        "--json",
    ])
    .unwrap();

    match cli.command {
        Commands::Detect {
            file,
            format,
            json,
            thresholds,
        } => {
            assert_eq!(file, PathBuf::from("example.json"));
            assert_eq!(format, None);
            assert!(json);
            assert_eq!(thresholds.min_gap_days, Some(25));
            assert_eq!(thresholds.max_gap_days, None);
        }
        _ => panic!("expected detect command"),
    }
}

#[test]
fn test_parse_normalize_requires_description() {
    assert!(Cli::try_parse_from(["recur", "normalize"]).is_err());
}

#[test]
fn test_parse_check_dates() {
    let cli =
        Cli::try_parse_from(["recur", "-v", "check-dates", "2021-01-01", "2021-02-01"]).unwrap();
    assert!(cli.verbose);
    match cli.command {
        Commands::CheckDates { dates, .. } => assert_eq!(dates.len(), 2),
        _ => panic!("expected check-dates command"),
    }
}
