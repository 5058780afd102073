//! Lenient timestamp parsing for schedule dates and join dates.
//!
//! The backend sends RFC 3339 timestamps, while date inputs produce
//! `YYYY-MM-DDTHH:MM` or plain `YYYY-MM-DD`. Values without an offset are
//! read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse any of the accepted timestamp shapes.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Parse a calendar date, accepting full timestamps too.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse(raw).map(|dt| dt.date_naive())
}

/// Format as the backend's canonical `2025-09-15T10:00:00.000Z` form.
pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(dt))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse("2025-09-15T10:00:00.000Z").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_datetime_local() {
        let start = parse("2025-09-15T10:00").unwrap();
        let end = parse("2025-09-15T09:00").unwrap();
        assert!(end < start);
    }

    #[test]
    fn test_parse_date_only() {
        let date = parse_date("2024-01-01").unwrap();
        assert_eq!(date.to_string(), "2024-01-01");
        assert_eq!(
            parse_date("2024-01-01T00:00:00.000Z").unwrap().to_string(),
            "2024-01-01"
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("").is_none());
        assert!(parse("next tuesday").is_none());
    }

    #[test]
    fn test_format_is_millis_utc() {
        let dt = parse("2025-09-15T10:00").unwrap();
        assert_eq!(format(&dt), "2025-09-15T10:00:00.000Z");
    }
}
