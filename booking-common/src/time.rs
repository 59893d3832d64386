//! Timestamp utilities
//!
//! Show times are naive local timestamps, compared against local wall-clock
//! "now" at query time.

use chrono::{Local, NaiveDateTime};

/// Fixed display format for past shows
pub const PAST_SHOW_FORMAT: &str = "%Y/%m/%d/, %H:%M:%S";

/// Formats accepted from the show form, tried in order
const INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Display style for the datetime filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// e.g. "Saturday October, 19, 2026 at 8:00PM"
    Full,
    /// e.g. "Sat 10, 19, 2026 8:00PM"
    Medium,
}

/// Get current local wall-clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Render a show time for pages
pub fn format_datetime(value: NaiveDateTime, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}

/// Render a past show time in the fixed format
pub fn format_past(value: NaiveDateTime) -> String {
    value.format(PAST_SHOW_FORMAT).to_string()
}

/// Parse a start time submitted through the show form
pub fn parse_start_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Value used to pre-fill the show form (HTML datetime-local format)
pub fn form_default(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(20, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_format_full() {
        assert_eq!(
            format_datetime(sample(), DateFormat::Full),
            "Saturday October, 17, 2026 at 8:05PM"
        );
    }

    #[test]
    fn test_format_medium() {
        assert_eq!(
            format_datetime(sample(), DateFormat::Medium),
            "Sat 10, 17, 2026 8:05PM"
        );
    }

    #[test]
    fn test_format_past() {
        assert_eq!(format_past(sample()), "2026/10/17/, 20:05:09");
    }

    #[test]
    fn test_parse_start_time_variants() {
        let expected_minute = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(20, 5, 0)
            .unwrap();

        assert_eq!(parse_start_time("2026-10-17 20:05:09"), Some(sample()));
        assert_eq!(parse_start_time("2026-10-17T20:05:09"), Some(sample()));
        assert_eq!(parse_start_time("2026-10-17 20:05"), Some(expected_minute));
        assert_eq!(parse_start_time(" 2026-10-17T20:05 "), Some(expected_minute));
    }

    #[test]
    fn test_parse_start_time_rejects_garbage() {
        assert_eq!(parse_start_time(""), None);
        assert_eq!(parse_start_time("tomorrow"), None);
        assert_eq!(parse_start_time("2026-13-40 10:00"), None);
    }

    #[test]
    fn test_form_default_round_trips_through_parser() {
        let rendered = form_default(sample());
        assert_eq!(rendered, "2026-10-17T20:05");
        assert!(parse_start_time(&rendered).is_some());
    }
}
