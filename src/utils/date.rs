//! Timestamp formatting for `<lastmod>`.
//!
//! File modification times are rendered in the local time zone as
//! W3C datetime (`YYYY-MM-DDTHH:MM:SS±HH:MM`), the ISO-8601 profile the
//! sitemap protocol accepts.

use chrono::{DateTime, Local, SecondsFormat};
use std::time::SystemTime;

/// Format a filesystem timestamp as local ISO-8601 with offset.
pub fn format_lastmod(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn test_format_shape() {
        let formatted = format_lastmod(SystemTime::UNIX_EPOCH);
        // 1970-01-01T00:00:00+00:00 in UTC, shifted by the local offset elsewhere
        assert_eq!(formatted.len(), "1970-01-01T00:00:00+00:00".len());
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], "T");
        assert!(formatted[19..].starts_with(['+', '-']));
    }

    #[test]
    fn test_format_round_trips_local_time() {
        let naive =
            NaiveDateTime::parse_from_str("2024-01-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let local = Local.from_local_datetime(&naive).earliest().unwrap();
        let system: SystemTime = local.into();

        assert!(format_lastmod(system).starts_with("2024-01-01T00:00:00"));
    }
}
