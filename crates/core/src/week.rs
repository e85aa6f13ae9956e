//! Week bucketing.
//!
//! Every rating timestamp is normalized to the Sunday that starts its
//! calendar week (date-only). The ISO `YYYY-MM-DD` form of that Sunday is
//! the grouping key used by the matrix and history aggregations.

use chrono::{Datelike, Days, NaiveDate};

use crate::types::Timestamp;

/// Number of days in a week bucket.
pub const WEEK_DAYS: u64 = 7;

/// Normalize a timestamp to its week bucket: the most recent Sunday at or
/// before the timestamp, date-only.
pub fn week_bucket(ts: Timestamp) -> NaiveDate {
    let date = ts.date_naive();
    let offset = u64::from(date.weekday().num_days_from_sunday());
    // Subtracting at most 6 days from any representable date cannot
    // leave the valid range.
    date.checked_sub_days(Days::new(offset))
        .unwrap_or(date)
}

/// The canonical string form of a week bucket, used as a grouping key.
///
/// Lexicographic ordering of keys matches chronological ordering.
pub fn week_key(bucket: NaiveDate) -> String {
    bucket.format("%Y-%m-%d").to_string()
}

/// Whether a rating timestamp falls within the 7-day span of a bucket.
pub fn in_bucket(ts: Timestamp, bucket: NaiveDate) -> bool {
    let date = ts.date_naive();
    let end = bucket
        .checked_add_days(Days::new(WEEK_DAYS))
        .unwrap_or(bucket);
    date >= bucket && date < end
}
