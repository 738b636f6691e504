//! Diagnostic reporting
//!
//! Detection never fails on bad records; instead it reports what it skipped
//! through a [`Reporter`]. The default [`TracingReporter`] forwards to
//! `tracing`, while [`CollectingReporter`] keeps everything in memory so
//! callers (and tests) can inspect warnings without capturing log output.

use std::sync::Mutex;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::models::MissingField;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Something worth telling the caller about during detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Transaction at `index` lacked a description or date and was ignored
    SkippedTransaction { index: usize, missing: MissingField },
    /// A date in a group could not be parsed; the group's check failed closed
    DateParseFailure {
        /// Normalized description of the group, when known
        key: Option<String>,
        value: String,
        reason: String,
    },
    /// Final list of recurring descriptions
    Summary { recurring: Vec<String> },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::SkippedTransaction { .. } => Severity::Warning,
            Self::DateParseFailure { .. } => Severity::Error,
            Self::Summary { .. } => Severity::Info,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SkippedTransaction { index, missing } => write!(
                f,
                "Skipping transaction {} with missing {}",
                index, missing
            ),
            // `reason` already names the offending value
            Self::DateParseFailure { key, reason, .. } => match key {
                Some(key) => write!(f, "Date parsing error in '{}': {}", key, reason),
                None => write!(f, "Date parsing error: {}", reason),
            },
            Self::Summary { recurring } => {
                write!(f, "Recurring transactions: {:?}", recurring)
            }
        }
    }
}

/// Sink for detection diagnostics
pub trait Reporter {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing` at the matching level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity() {
            Severity::Info => info!("{}", diagnostic),
            Severity::Warning => warn!("{}", diagnostic),
            Severity::Error => error!("{}", diagnostic),
        }
    }
}

/// Records diagnostics in memory
#[derive(Debug, Default)]
pub struct CollectingReporter {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Diagnostics of a single severity
    pub fn with_severity(&self, severity: Severity) -> Vec<Diagnostic> {
        self.lock()
            .iter()
            .filter(|d| d.severity() == severity)
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, diagnostic: &Diagnostic) {
        self.lock().push(diagnostic.clone());
    }
}
