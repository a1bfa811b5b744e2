//! Display helpers for snapshot values

use chrono::{DateTime, FixedOffset, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Shown in place of an absent timestamp
pub const DATE_PLACEHOLDER: &str = "--";

/// Shown for a timestamp that is present but unparseable
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_LOCALE: Locale = Locale::es_ES;
const DISPLAY_FORMAT: &str = "%-d %b %Y, %H:%M";

/// Format a snapshot timestamp as day, abbreviated month, year, hour and minute
/// in the fixed display locale. Never fails.
pub fn format_date(value: Option<&str>, offset: &FixedOffset) -> String {
    let Some(raw) = value.filter(|s| !s.is_empty()) else {
        return DATE_PLACEHOLDER.to_string();
    };

    match parse_date(raw.trim(), offset) {
        Some(date) => date
            .with_timezone(offset)
            .format_localized(DISPLAY_FORMAT, DISPLAY_LOCALE)
            .to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_date(raw: &str, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date);
    }

    // Without an offset the value is wall-clock time in the display zone
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return offset.from_local_datetime(&naive).single();
        }
    }

    // Date-only values are midnight UTC
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
}

/// Best-effort repository name from a URL: the last path segment, or the one
/// before it when the URL ends with a slash. No structural URL parsing.
pub fn extract_repo_name(url: Option<&str>) -> String {
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return String::new();
    };

    let parts: Vec<&str> = url.split('/').collect();
    match parts.as_slice() {
        [.., last] if !last.is_empty() => last.to_string(),
        [.., second_to_last, _] => second_to_last.to_string(),
        _ => String::new(),
    }
}
