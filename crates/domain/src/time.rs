//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used wherever the client needs wall-clock time.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Current epoch milliseconds, used as the list-query cache-busting value.
#[must_use]
pub fn cache_buster() -> i64 {
    now().timestamp_millis()
}
