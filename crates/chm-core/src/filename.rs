//! Timestamped migration file names

use chrono::NaiveDateTime;

/// Format of the timestamp prefix. Fixed width, so lexicographic order is chronological.
const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current wall-clock time
    fn now(&self) -> NaiveDateTime;
}

/// Local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock that always reads the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Timestamp prefix for a migration created at `at` (`2024_03_01_120000`)
pub fn timestamp_prefix(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp prefix produced by [`timestamp_prefix`]
pub fn parse_timestamp_prefix(prefix: &str) -> Option<NaiveDateTime> {
    if prefix.len() != 17 {
        return None;
    }
    NaiveDateTime::parse_from_str(prefix, TIMESTAMP_FORMAT).ok()
}

/// Build `<timestamp>_<canonical_name>` from the clock's current reading.
///
/// Uniqueness is only as good as the clock's one-second resolution; the
/// creator rejects a collision rather than overwriting.
pub fn generate_file_name(canonical_name: &str, clock: &dyn Clock) -> String {
    format!("{}_{}", timestamp_prefix(clock.now()), canonical_name)
}
