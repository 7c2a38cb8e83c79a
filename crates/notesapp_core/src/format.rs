//! Display helpers for note timestamps.

use chrono::{DateTime, Utc};

const DUE_DATE_FORMAT: &str = "%d %b %Y";
const NO_DUE_DATE_LABEL: &str = "No due date";
const INVALID_DATE_LABEL: &str = "Invalid date";

/// Renders a due date (epoch milliseconds) as a UTC calendar date.
pub fn due_date_label(due_date: Option<i64>) -> String {
    let Some(millis) = due_date else {
        return NO_DUE_DATE_LABEL.to_string();
    };
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(at) => at.format(DUE_DATE_FORMAT).to_string(),
        None => INVALID_DATE_LABEL.to_string(),
    }
}

/// Current Unix time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
