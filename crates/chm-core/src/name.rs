//! Migration name normalization.

use heck::{ToSnakeCase, ToUpperCamelCase};
use std::fmt;

/// Convert a free-text migration name into its canonical snake_case form.
///
/// Surrounding whitespace is trimmed, words are split on case transitions
/// and on any non-alphanumeric character, then lowercased and joined with
/// `_`. Anything left over that is neither a letter, a digit nor `_` (such as
/// the combining dot produced by lowercasing `İ`) is dropped, so the result is
/// a fixed point. Input with no letters or digits yields an empty string, which
/// callers must reject.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .to_snake_case()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect::<String>()
        .split('_')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Class-style identifier for a canonical name (`create_orders_table` -> `CreateOrdersTable`)
pub fn class_name(canonical: &str) -> String {
    canonical.to_upper_camel_case()
}

/// A normalized, non-empty migration name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MigrationName(String);

impl MigrationName {
    /// Normalize `raw`, returning `None` if nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let canonical = normalize(raw);
        if canonical.is_empty() {
            None
        } else {
            Some(Self(canonical))
        }
    }

    /// Return the canonical name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Class-style identifier for this name.
    pub fn class_name(&self) -> String {
        class_name(&self.0)
    }

    /// Consume the wrapper and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MigrationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MigrationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
