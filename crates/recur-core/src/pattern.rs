//! Monthly interval matching
//!
//! A set of dates is "monthly" when, once sorted, every gap between
//! neighbours falls inside an inclusive day window (27–33 by default).
//! Unparseable dates fail the whole batch closed.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::config::DetectionConfig;
use crate::diagnostics::{Diagnostic, Reporter, TracingReporter};
use crate::error::{Error, Result};

/// Date format for transaction dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Four-digit year, then month and day of one or two digits, nothing around them.
/// chrono alone would also take `21-01-01`, ` 2021-01-01` and `+2021-01-01`.
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("valid regex")
});

/// Parse a single `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    if !DATE_SHAPE.is_match(value) {
        return Err(Error::DateParse {
            value: value.to_string(),
            reason: format!("does not match format '{}'", DATE_FORMAT),
        });
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| Error::DateParse {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Day counts between consecutive dates (input must already be sorted)
pub fn gaps_in_days(sorted: &[NaiveDate]) -> Vec<i64> {
    sorted
        .windows(2)
        .map(|w| (w[1] - w[0]).num_days())
        .collect()
}

/// Inclusive window of accepted gaps between charges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyPattern {
    pub min_gap_days: i64,
    pub max_gap_days: i64,
}

impl Default for MonthlyPattern {
    fn default() -> Self {
        Self::from_config(&DetectionConfig::default())
    }
}

impl MonthlyPattern {
    pub fn new(min_gap_days: i64, max_gap_days: i64) -> Self {
        Self {
            min_gap_days,
            max_gap_days,
        }
    }

    pub fn from_config(config: &DetectionConfig) -> Self {
        Self::new(config.min_gap_days, config.max_gap_days)
    }

    /// Whether a single gap is inside the window
    pub fn accepts_gap(&self, days: i64) -> bool {
        (self.min_gap_days..=self.max_gap_days).contains(&days)
    }

    /// Check already-parsed dates; order does not matter
    pub fn matches_parsed(&self, dates: &[NaiveDate]) -> bool {
        let mut sorted = dates.to_vec();
        sorted.sort();
        gaps_in_days(&sorted)
            .into_iter()
            .all(|gap| self.accepts_gap(gap))
    }

    /// Check raw date strings, reporting a parse failure instead of returning it
    ///
    /// `key` names the group being checked and only feeds the diagnostic.
    pub fn matches(
        &self,
        dates: &[impl AsRef<str>],
        key: Option<&str>,
        reporter: &dyn Reporter,
    ) -> bool {
        let mut parsed = Vec::with_capacity(dates.len());
        for value in dates {
            let value = value.as_ref();
            match parse_date(value) {
                Ok(date) => parsed.push(date),
                Err(e) => {
                    reporter.report(&Diagnostic::DateParseFailure {
                        key: key.map(str::to_string),
                        value: value.to_string(),
                        reason: e.to_string(),
                    });
                    return false;
                }
            }
        }

        let matched = self.matches_parsed(&parsed);
        debug!(
            "Monthly pattern check for {:?}: {} dates, matched={}",
            key.unwrap_or("<unnamed>"),
            parsed.len(),
            matched
        );
        matched
    }
}

/// Check whether dates follow a monthly pattern using the default 27–33 day window
///
/// Parse failures are logged at error level and yield `false`.
pub fn is_monthly_pattern<S: AsRef<str>>(dates: &[S]) -> bool {
    MonthlyPattern::default().matches(dates, None, &TracingReporter)
}
