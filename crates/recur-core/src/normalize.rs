//! Description normalization
//!
//! Strips month tokens (and an optional day/year suffix) so that
//! "Netflix Jan 2021" and "Netflix Feb 2021" group together.

use std::sync::LazyLock;

use regex::Regex;

/// Three-letter month abbreviation, optionally followed by a separator and 2-4 digits.
/// Case-sensitive: "MAY" or "may" are left alone.
static MONTH_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)(?:[-/ ]?\d{2,4})?")
        .expect("valid regex")
});

/// Normalize a transaction description into a grouping key
///
/// Removes every month token left to right in a single pass, then trims
/// leading and trailing whitespace. Internal spacing is preserved as-is.
/// Removing a token can join its neighbours into a new one (`"JJanan"`
/// becomes `"Jan"`); that new token is kept.
pub fn normalize_description(description: &str) -> String {
    MONTH_TOKEN.replace_all(description, "").trim().to_string()
}
