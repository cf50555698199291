use chrono::{DateTime, Duration, Utc};

/// Canonical timestamp layout expected by the listing API.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

const END_OFFSET_HOURS: i64 = 5;
const TRAILING_SPAN_DAYS: i64 = 365 * 2;

/// Absolute `[created_after, created_before)` range used to filter listed
/// orders.
///
/// Both bounds are canonical ISO-8601 strings. Caller-supplied bounds are
/// not validated here; a malformed value surfaces as a listing request
/// failure downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub created_after: String,
    pub created_before: String,
}

impl DateWindow {
    /// Window ending five hours before `now` and opening two years before
    /// that end.
    pub fn trailing(now: DateTime<Utc>) -> Self {
        let end = now - Duration::hours(END_OFFSET_HOURS);
        let start = end - Duration::days(TRAILING_SPAN_DAYS);
        Self {
            created_after: start.format(TIMESTAMP_FORMAT).to_string(),
            created_before: end.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Window from caller-supplied bounds. Date-only inputs expand to
    /// whole-day UTC bounds; anything carrying a time component passes
    /// through untouched.
    pub fn custom(start_input: &str, end_input: &str) -> Self {
        Self {
            created_after: expand_start(start_input),
            created_before: expand_end(end_input),
        }
    }

    /// Lexicographic order is chronological for canonical timestamps.
    pub fn is_ordered(&self) -> bool {
        self.created_after < self.created_before
    }
}

fn expand_start(input: &str) -> String {
    if input.contains('T') {
        input.to_string()
    } else {
        format!("{input}T00:00:00.000Z")
    }
}

fn expand_end(input: &str) -> String {
    if input.contains('T') {
        input.to_string()
    } else {
        format!("{input}T23:59:59.000Z")
    }
}
