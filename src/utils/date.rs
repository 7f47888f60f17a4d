use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

/// Local calendar date (export file names use the local clock).
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Fixed display offset from whole hours; out-of-range values fall back to UTC.
pub fn display_offset(hours: i32) -> FixedOffset {
    if !(-23..=23).contains(&hours) {
        return Utc.fix();
    }
    FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| Utc.fix())
}

const DISPLAY_FORMAT: &str = "%H:%M %d/%m/%Y";

/// Render an `updatedAt` value for tables and exports.
///
/// - missing or blank → `-`
/// - RFC 3339 (with offset) → converted to `offset`
/// - naive ISO (`YYYY-MM-DDTHH:MM[:SS]` or with a space) → taken as already local
/// - anything else → the raw text
pub fn format_updated_at(value: Option<&str>, offset: FixedOffset) -> String {
    let raw = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return "-".to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&offset).format(DISPLAY_FORMAT).to_string();
    }

    let naive_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in naive_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }

    raw.to_string()
}
