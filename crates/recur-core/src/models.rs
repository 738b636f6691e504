//! Domain models for recur

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single transaction record as supplied by a transaction source
///
/// Every field is optional: records missing a description or date are
/// skipped during detection rather than rejected at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "text_or_none")]
    pub description: Option<String>,
    /// Calendar date, expected as `YYYY-MM-DD`
    #[serde(default, deserialize_with = "text_or_none")]
    pub date: Option<String>,
    /// Carried through untouched; never inspected by detection
    #[serde(default)]
    pub amount: Option<Value>,
}

impl Transaction {
    pub fn new(description: &str, date: &str, amount: impl Into<Value>) -> Self {
        Self {
            description: Some(description.to_string()),
            date: Some(date.to_string()),
            amount: Some(amount.into()),
        }
    }

    /// Description, if present and non-empty
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|s| !s.is_empty())
    }

    /// Date string, if present and non-empty
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref().filter(|s| !s.is_empty())
    }

    /// Which required field is missing, if any (description is checked first)
    pub fn missing_field(&self) -> Option<MissingField> {
        if self.description().is_none() {
            Some(MissingField::Description)
        } else if self.date().is_none() {
            Some(MissingField::Date)
        } else {
            None
        }
    }
}

/// Non-string values (numbers, objects) in a text field count as missing
fn text_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Required transaction field that was absent or empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingField {
    Description,
    Date,
}

impl MissingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Date => "date",
        }
    }
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top-level shape of a JSON transaction file: `{"transactions": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionFile {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}
