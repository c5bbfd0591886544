//! Date helper functions
//!
//! Catalog dates are stored as plain strings ("2025-04-07" or
//! "April 7, 2025"). Parsing never fails hard: a string no format
//! accepts simply displays as-is.

use chrono::NaiveDate;

/// Parse a date string in the formats the catalog uses
pub fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];

    for fmt in formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // RFC 3339 timestamps carry a date too
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}

/// Format a date string in full en-US form (like "April 7, 2025")
///
/// Unparseable input is returned unchanged rather than reported as an
/// error; display degrades, it never fails.
pub fn format_date(date: &str) -> String {
    match parse_date_string(date) {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

/// Generate a <time> HTML element
///
/// The datetime attribute is ISO when the date parses, the raw string
/// otherwise.
pub fn time_tag(date: &str) -> String {
    let datetime = match parse_date_string(date) {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => date.to_string(),
    };
    format!(r#"<time datetime="{}">{}</time>"#, datetime, format_date(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_string() {
        let expected = NaiveDate::from_ymd_opt(2025, 4, 7).unwrap();
        assert_eq!(parse_date_string("2025-04-07"), Some(expected));
        assert_eq!(parse_date_string("2025/04/07"), Some(expected));
        assert_eq!(parse_date_string("April 7, 2025"), Some(expected));
        assert_eq!(parse_date_string("Apr 7, 2025"), Some(expected));
        assert_eq!(parse_date_string("2025-04-07T08:30:00+08:00"), Some(expected));
        assert_eq!(parse_date_string("not a date"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-04-07"), "April 7, 2025");
        assert_eq!(format_date("January 15, 2024"), "January 15, 2024");
    }

    #[test]
    fn test_format_date_unparseable_passthrough() {
        assert_eq!(format_date("someday soon"), "someday soon");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_time_tag() {
        assert_eq!(
            time_tag("2025-04-07"),
            r#"<time datetime="2025-04-07">April 7, 2025</time>"#
        );
        assert_eq!(
            time_tag("someday"),
            r#"<time datetime="someday">someday</time>"#
        );
    }
}
