//! Time-window helpers shared by the windowed analyzers

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Fractional days elapsed between `timestamp` and `now`
///
/// Negative when the timestamp lies after `now`.
pub fn days_since(now: DateTime<Utc>, timestamp: DateTime<Utc>) -> f64 {
    (now - timestamp).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Whether `timestamp` is at most `window_days` days before `now`
///
/// The bound is inclusive. Timestamps after `now` are inside every window.
pub fn within_window(now: DateTime<Utc>, timestamp: DateTime<Utc>, window_days: u32) -> bool {
    days_since(now, timestamp) <= f64::from(window_days)
}
