//! Recurring transaction detection
//!
//! Groups transactions by normalized description and flags a group as
//! recurring when it has enough members and their dates are spaced about
//! a month apart.

use std::cell::Cell;
use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::config::DetectionConfig;
use crate::diagnostics::{Diagnostic, Reporter, TracingReporter};
use crate::models::Transaction;
use crate::normalize::normalize_description;
use crate::pattern::MonthlyPattern;

/// Results of running detection
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionResults {
    /// Normalized descriptions judged recurring, in first-seen order
    pub recurring: Vec<String>,
    pub transactions_seen: usize,
    pub transactions_skipped: usize,
    pub groups_found: usize,
    /// Groups dropped for having too few members
    pub groups_under_support: usize,
    /// Groups that had a date that failed to parse
    pub groups_with_bad_dates: usize,
}

/// Transactions sharing one normalized description
#[derive(Debug, Clone)]
pub struct TransactionGroup<'t> {
    pub key: String,
    pub transactions: Vec<&'t Transaction>,
}

impl TransactionGroup<'_> {
    /// Dates of every member that has one
    pub fn dates(&self) -> Vec<&str> {
        self.transactions.iter().filter_map(|t| t.date()).collect()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Group transactions by normalized description, keeping first-seen order
///
/// Transactions without a description or date are reported and left out.
pub fn group_transactions<'t>(
    transactions: &'t [Transaction],
    reporter: &dyn Reporter,
) -> Vec<TransactionGroup<'t>> {
    let mut groups: Vec<TransactionGroup<'t>> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for (index, tx) in transactions.iter().enumerate() {
        if let Some(missing) = tx.missing_field() {
            reporter.report(&Diagnostic::SkippedTransaction { index, missing });
            continue;
        }
        let Some(description) = tx.description() else {
            continue;
        };

        let key = normalize_description(description);
        match index_by_key.get(&key) {
            Some(&i) => groups[i].transactions.push(tx),
            None => {
                index_by_key.insert(key.clone(), groups.len());
                groups.push(TransactionGroup {
                    key,
                    transactions: vec![tx],
                });
            }
        }
    }

    groups
}

/// Detector that applies the grouping and monthly pattern checks
pub struct RecurrenceDetector<'a> {
    config: DetectionConfig,
    reporter: &'a dyn Reporter,
}

impl Default for RecurrenceDetector<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> RecurrenceDetector<'a> {
    pub fn new() -> Self {
        Self {
            config: DetectionConfig::default(),
            reporter: &TracingReporter,
        }
    }

    pub fn with_config(config: DetectionConfig) -> Self {
        Self {
            config,
            reporter: &TracingReporter,
        }
    }

    pub fn with_reporter(reporter: &'a dyn Reporter) -> Self {
        Self {
            config: DetectionConfig::default(),
            reporter,
        }
    }

    pub fn with_config_and_reporter(config: DetectionConfig, reporter: &'a dyn Reporter) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Normalized descriptions of recurring groups
    pub fn detect(&self, transactions: &[Transaction]) -> Vec<String> {
        self.detect_with_stats(transactions).recurring
    }

    /// Run detection and return counts alongside the recurring descriptions
    pub fn detect_with_stats(&self, transactions: &[Transaction]) -> DetectionResults {
        let pattern = MonthlyPattern::from_config(&self.config);
        let groups = group_transactions(transactions, self.reporter);
        let grouped: usize = groups.iter().map(TransactionGroup::len).sum();

        let mut results = DetectionResults {
            transactions_seen: transactions.len(),
            transactions_skipped: transactions.len() - grouped,
            groups_found: groups.len(),
            ..Default::default()
        };

        for group in &groups {
            if group.len() < self.config.min_transactions {
                results.groups_under_support += 1;
                continue;
            }

            match self.check_group(group, &pattern) {
                Some(true) => {
                    debug!(
                        "Recurring: {} ({} transactions)",
                        group.key,
                        group.len()
                    );
                    results.recurring.push(group.key.clone());
                }
                Some(false) => {}
                None => results.groups_with_bad_dates += 1,
            }
        }

        debug!(
            "Detection complete: {} transactions, {} skipped, {} groups, {} recurring",
            results.transactions_seen,
            results.transactions_skipped,
            results.groups_found,
            results.recurring.len()
        );
        self.reporter.report(&Diagnostic::Summary {
            recurring: results.recurring.clone(),
        });

        results
    }

    /// `Some(matched)` when every date parsed, `None` when one did not
    fn check_group(&self, group: &TransactionGroup<'_>, pattern: &MonthlyPattern) -> Option<bool> {
        let counting = CountingReporter {
            inner: self.reporter,
            failures: Cell::new(0),
        };
        let matched = pattern.matches(&group.dates(), Some(&group.key), &counting);
        (counting.failures.get() == 0).then_some(matched)
    }
}

/// Wraps a reporter and counts date parse failures passing through it
struct CountingReporter<'r> {
    inner: &'r dyn Reporter,
    failures: Cell<usize>,
}

impl Reporter for CountingReporter<'_> {
    fn report(&self, diagnostic: &Diagnostic) {
        if matches!(diagnostic, Diagnostic::DateParseFailure { .. }) {
            self.failures.set(self.failures.get() + 1);
        }
        self.inner.report(diagnostic);
    }
}

/// Identify recurring transactions with default thresholds, logging via `tracing`
pub fn detect_recurring(transactions: &[Transaction]) -> Vec<String> {
    RecurrenceDetector::new().detect(transactions)
}
