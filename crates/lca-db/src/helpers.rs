//! Row-to-entity parsing helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and handle the dual datetime
//! format issue (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all lca-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a nullable REAL column.
///
/// `SQLite` stores whole numbers written into a REAL column as REAL, but rows
/// inserted by hand may carry INTEGER affinity, so both are accepted.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column holds text or a blob.
pub fn get_opt_f64(row: &libsql::Row, idx: i32) -> Result<Option<f64>, DatabaseError> {
    match row.get_value(idx)? {
        libsql::Value::Null => Ok(None),
        libsql::Value::Real(v) => Ok(Some(v)),
        #[allow(clippy::cast_precision_loss)]
        libsql::Value::Integer(v) => Ok(Some(v as f64)),
        other => Err(DatabaseError::Query(format!(
            "Expected a numeric column at index {idx}, got {other:?}"
        ))),
    }
}

/// Read a required REAL column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column is NULL or not numeric.
pub fn get_f64(row: &libsql::Row, idx: i32) -> Result<f64, DatabaseError> {
    get_opt_f64(row, idx)?
        .ok_or_else(|| DatabaseError::Query(format!("Unexpected NULL at column index {idx}")))
}

/// Convert an optional float into a bind parameter.
#[must_use]
pub fn opt_f64_value(value: Option<f64>) -> libsql::Value {
    value.map_or(libsql::Value::Null, libsql::Value::Real)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use lca_core::enums::AssessmentStatus;
    use rstest::rstest;

    #[test]
    fn parses_rfc3339() {
        let dt = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        assert_eq!(dt.year(), 2026);
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn parses_sqlite_default_format() {
        let dt = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(dt.day(), 9);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[rstest]
    #[case("draft", AssessmentStatus::Draft)]
    #[case("in_progress", AssessmentStatus::InProgress)]
    #[case("completed", AssessmentStatus::Completed)]
    fn parses_status_enum(#[case] raw: &str, #[case] expected: AssessmentStatus) {
        let status: AssessmentStatus = parse_enum(raw).unwrap();
        assert_eq!(status, expected);
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(parse_enum::<AssessmentStatus>("archived").is_err());
    }

    #[test]
    fn null_measurement_binds_as_null() {
        assert!(matches!(opt_f64_value(None), libsql::Value::Null));
        assert!(matches!(opt_f64_value(Some(1.5)), libsql::Value::Real(v) if (v - 1.5).abs() < f64::EPSILON));
    }
}
