//! Display Formatting
//!
//! Date helpers for invoice cards.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::Timestamp;

/// Shown when there is no usable date
pub const MISSING_DATE: &str = "N/A";

/// Format a timestamp as `DD/MM/YYYY`.
///
/// Absent or unparseable values render as `N/A`. Text with an offset is
/// formatted in its own offset; epoch milliseconds in UTC.
pub fn format_date(value: Option<&Timestamp>) -> String {
    value
        .and_then(calendar_date)
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| MISSING_DATE.to_string())
}

fn calendar_date(value: &Timestamp) -> Option<NaiveDate> {
    match value {
        Timestamp::Millis(ms) => DateTime::from_timestamp_millis(*ms).map(|dt| dt.date_naive()),
        Timestamp::Text(text) => parse_date_text(text.trim()),
        Timestamp::Other(_) => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(s: &str) -> Timestamp {
        Timestamp::Text(s.to_string())
    }

    #[test]
    fn test_absent_is_na() {
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn test_date_only_zero_padded() {
        assert_eq!(format_date(Some(&text("2024-01-03"))), "03/01/2024");
        assert_eq!(format_date(Some(&text("2023-05-10"))), "10/05/2023");
    }

    #[test]
    fn test_datetime_forms() {
        assert_eq!(format_date(Some(&text("2023-05-10T12:34:56.789"))), "10/05/2023");
        assert_eq!(format_date(Some(&text("2023-05-10T12:34:56"))), "10/05/2023");
        assert_eq!(format_date(Some(&text("2023-05-10 08:00:00"))), "10/05/2023");
        assert_eq!(format_date(Some(&text("2023-05-10T08:00:00Z"))), "10/05/2023");
    }

    #[test]
    fn test_offset_kept_as_given() {
        // 23:30 at -05:00 is already the 11th in UTC
        assert_eq!(format_date(Some(&text("2023-05-10T23:30:00-05:00"))), "10/05/2023");
    }

    #[test]
    fn test_epoch_millis() {
        assert_eq!(format_date(Some(&Timestamp::Millis(1_704_240_000_000))), "03/01/2024");
    }

    #[test]
    fn test_unparseable_is_na() {
        assert_eq!(format_date(Some(&text(""))), "N/A");
        assert_eq!(format_date(Some(&text("   "))), "N/A");
        assert_eq!(format_date(Some(&text("yesterday"))), "N/A");
        assert_eq!(format_date(Some(&text("2023-02-30"))), "N/A");
        assert_eq!(format_date(Some(&Timestamp::Other(json!({ "seconds": 5 })))), "N/A");
    }
}
