use chrono::{DateTime, Utc};

/// Parse a CloudTrail `eventTime` value (RFC 3339, usually `...Z`)
pub fn parse_timestamp(ts: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(ts).map(|dt| dt.with_timezone(&Utc))
}

/// Format a timestamp for the summary table
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_timestamp() {
        let dt = parse_timestamp("2023-01-02T03:04:05Z").unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 2);
        assert_eq!(dt.hour(), 3);
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let dt = parse_timestamp("2023-01-02T02:00:00+02:00").unwrap();
        assert_eq!(format_timestamp(&dt), "2023-01-02 00:00");
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_format_timestamp() {
        let dt = parse_timestamp("2023-11-30T23:59:59.999Z").unwrap();
        assert_eq!(format_timestamp(&dt), "2023-11-30 23:59");
    }
}
