// crates/tzpop-core/src/text.rs

//! Timestamp handling for time-service responses.

use crate::error::{Result, TzError};
use chrono::{DateTime, FixedOffset};
use serde_json::Value;

/// Name of the field carrying the timestamp in a time-service response.
pub const DATETIME_FIELD: &str = "datetime";

/// `07 Jan 2024 14:05`
pub const DISPLAY_FORMAT: &str = "%d %b %Y %H:%M";

/// Pull the `datetime` string out of a time-service response body.
///
/// A body that is not an object, lacks the field, or holds a non-string
/// value is a [`TzError::MalformedTimeResponse`].
pub fn extract_datetime(body: &Value) -> Result<&str> {
    let object = body.as_object().ok_or_else(|| {
        TzError::MalformedTimeResponse(format!("expected a JSON object, got {body}"))
    })?;
    match object.get(DATETIME_FIELD) {
        Some(Value::String(raw)) => Ok(raw.as_str()),
        Some(other) => Err(TzError::MalformedTimeResponse(format!(
            "`{DATETIME_FIELD}` is not a string: {other}"
        ))),
        None => Err(TzError::MalformedTimeResponse(format!(
            "response did not contain any time data (no `{DATETIME_FIELD}` field)"
        ))),
    }
}

/// Parse an RFC 3339 timestamp, keeping its offset.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).map_err(|_| TzError::UnparseableTimestamp(raw.to_owned()))
}

/// Render in the wall-clock time of the timestamp's own offset.
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}

/// Full path from a response body to the display string.
pub fn display_time(body: &Value) -> Result<String> {
    let raw = extract_datetime(body)?;
    let ts = parse_timestamp(raw)?;
    Ok(format_timestamp(&ts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn formats_utc_timestamp() {
        let ts = parse_timestamp("2024-01-07T14:05:00+00:00").unwrap();
        assert_eq!(format_timestamp(&ts), "07 Jan 2024 14:05");
    }

    #[test]
    fn keeps_local_offset_and_drops_fraction() {
        // Shape returned by worldtimeapi.org
        let body = json!({
            "abbreviation": "EST",
            "datetime": "2024-11-03T01:30:59.123456-05:00",
            "timezone": "America/New_York"
        });
        assert_eq!(display_time(&body).unwrap(), "03 Nov 2024 01:30");
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = display_time(&json!({"utc_datetime": "2024-01-07T14:05:00Z"})).unwrap_err();
        assert!(matches!(err, TzError::MalformedTimeResponse(_)));
    }

    #[test]
    fn non_string_or_non_object_is_malformed() {
        assert!(matches!(
            display_time(&json!({"datetime": 1704636300})),
            Err(TzError::MalformedTimeResponse(_))
        ));
        assert!(matches!(
            display_time(&json!(["2024-01-07T14:05:00Z"])),
            Err(TzError::MalformedTimeResponse(_))
        ));
    }

    #[test]
    fn bad_timestamp_carries_raw_value() {
        match display_time(&json!({"datetime": "not-a-date"})) {
            Err(TzError::UnparseableTimestamp(raw)) => assert_eq!(raw, "not-a-date"),
            other => panic!("expected UnparseableTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn offset_is_required() {
        assert!(matches!(
            parse_timestamp("2024-01-07T14:05:00"),
            Err(TzError::UnparseableTimestamp(_))
        ));
    }
}
