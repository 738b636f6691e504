//! Transaction loaders
//!
//! Supports JSON documents shaped `{"transactions": [...]}` and CSV exports
//! with `description`, `date` and (optionally) `amount` columns.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionFile};

/// Supported input file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl std::str::FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown input format: {}", s)),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Load transactions from a file
///
/// When `format` is `None` it is inferred from the file extension.
pub fn load_transactions(path: &Path, format: Option<InputFormat>) -> Result<Vec<Transaction>> {
    let format = match format {
        Some(format) => format,
        None => InputFormat::from_path(path)
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?,
    };

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let transactions = match format {
        InputFormat::Json => parse_json(reader)?,
        InputFormat::Csv => parse_csv(reader)?,
    };

    debug!(
        "Loaded {} transactions from {} ({})",
        transactions.len(),
        path.display(),
        format
    );
    Ok(transactions)
}

/// Parse a JSON transaction document
///
/// A document without a `transactions` key yields no transactions.
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let file: TransactionFile = serde_json::from_reader(reader)?;
    Ok(file.transactions)
}

/// Column positions located from the CSV header row
struct CsvColumns {
    description: usize,
    date: usize,
    amount: Option<usize>,
}

impl CsvColumns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        Ok(Self {
            description: find("description")
                .ok_or_else(|| Error::InvalidData("CSV has no description column".into()))?,
            date: find("date")
                .ok_or_else(|| Error::InvalidData("CSV has no date column".into()))?,
            amount: find("amount"),
        })
    }
}

/// Parse CSV data with a header row
///
/// Empty cells become missing fields. Other cells keep their raw text,
/// padding included, the same as string fields in JSON input. Amounts
/// that parse as numbers (ignoring padding) are kept as JSON numbers,
/// anything else as a string.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = CsvColumns::from_headers(rdr.headers()?)?;
    let mut transactions = Vec::new();

    for result in rdr.records() {
        let record = result?;

        let cell = |i: usize| {
            record
                .get(i)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        transactions.push(Transaction {
            description: cell(columns.description),
            date: cell(columns.date),
            amount: columns.amount.and_then(cell).map(amount_value),
        });
    }

    Ok(transactions)
}

fn amount_value(raw: String) -> Value {
    match raw.trim().parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
        Some(n) => Value::Number(n),
        None => Value::String(raw),
    }
}
