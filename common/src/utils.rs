use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::DateError;
use crate::types::DateInput;

const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Normalizes a date into epoch seconds, keeping millisecond precision.
///
/// Dates without an offset are read as UTC, and a bare `YYYY-MM-DD` means
/// midnight of that day.
pub fn to_timestamp(date: &DateInput) -> Result<f64, DateError> {
    let millis = match date {
        DateInput::Millis(millis) => *millis,
        DateInput::DateTime(date) => date.timestamp_millis(),
        DateInput::Text(text) => parse_date(text)?.timestamp_millis(),
    };

    Ok(millis as f64 / 1000.0)
}

pub fn parse_date(text: &str) -> Result<DateTime<Utc>, DateError> {
    let text = text.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Ok(date.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(date.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
        .ok_or_else(|| DateError::new(text))
}

pub fn now_timestamp() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

pub fn timestamp_to_date(timestamp: u64) -> DateTime<Utc> {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only_is_midnight_utc() {
        let timestamp = to_timestamp(&"2020-12-31".into()).unwrap();
        assert_eq!(timestamp, 1609372800.0);
    }

    #[test]
    fn test_rfc3339_with_offset() {
        let timestamp = to_timestamp(&"2021-01-01T02:00:00+02:00".into()).unwrap();
        assert_eq!(timestamp, 1609459200.0);
    }

    #[test]
    fn test_naive_date_time_is_utc() {
        let timestamp = to_timestamp(&"2021-01-01T00:00:30".into()).unwrap();
        assert_eq!(timestamp, 1609459230.0);
    }

    #[test]
    fn test_millis_keep_fraction() {
        let timestamp = to_timestamp(&DateInput::Millis(1609459200500)).unwrap();
        assert_eq!(timestamp, 1609459200.5);
    }

    #[test]
    fn test_structured_date() {
        let date = parse_date("2021-01-01").unwrap();
        assert_eq!(to_timestamp(&date.into()).unwrap(), 1609459200.0);
    }

    #[test]
    fn test_unparsable_date() {
        let err = to_timestamp(&"not a date".into()).unwrap_err();
        assert_eq!(err.input(), "not a date");
    }

    #[test]
    fn test_timestamp_to_date() {
        let date = timestamp_to_date(1609459200);
        assert_eq!(date.to_rfc3339(), "2021-01-01T00:00:00+00:00");
    }
}
