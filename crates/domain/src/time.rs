//! Time and timestamp helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp used for event times and due dates.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp as fixed-width RFC 3339 (nanoseconds, `Z` suffix).
///
/// Every rendered value has the same length, so the text sorts exactly like
/// the instant it encodes.
#[must_use]
pub fn to_sortable_string(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
