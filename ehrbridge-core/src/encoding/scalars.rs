//! Scalar converters between string-typed wire values and typed domain values.
//!
//! Every `parse_*` function treats an absent or empty wire value as `None`
//! and fails with `Internal` naming the field and the offending value
//! otherwise. Nothing here falls back to a default.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use ehrbridge_spec::types::{Date, DateTime};

use crate::error::EhrError;

/// Wire layout for dates.
pub const DATE_LAYOUT: &str = "%m/%d/%Y";
/// Wire layout for date-times.
pub const DATE_TIME_LAYOUT: &str = "%m/%d/%Y %H:%M:%S";

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Zero-padded `MM/DD/YYYY` at the start of `raw`. chrono alone also takes
/// `1/1/1950`.
fn has_padded_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() >= 10
        && bytes[..10].iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

fn conversion_error(field: &str, value: &str, detail: impl std::fmt::Display) -> EhrError {
    EhrError::internal(format!("invalid {field} value {value:?}: {detail}"))
}

/// Parse `MM/DD/YYYY`.
pub fn parse_date(field: &str, value: Option<&str>) -> Result<Option<Date>, EhrError> {
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    if raw.len() != 10 || !has_padded_date(raw) {
        return Err(conversion_error(field, raw, "expected MM/DD/YYYY"));
    }
    let parsed = NaiveDate::parse_from_str(raw, DATE_LAYOUT)
        .map_err(|e| conversion_error(field, raw, format!("expected MM/DD/YYYY ({e})")))?;
    Ok(Some(date_from_naive(parsed)))
}

pub fn format_date(date: &Date) -> String {
    format!("{:02}/{:02}/{:04}", date.month, date.day, date.year)
}

pub fn format_date_opt(date: Option<&Date>) -> Option<String> {
    date.map(format_date)
}

/// Parse `MM/DD/YYYY HH:MM:SS`; the result carries no UTC offset.
pub fn parse_date_time(field: &str, value: Option<&str>) -> Result<Option<DateTime>, EhrError> {
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    if !has_padded_date(raw) {
        return Err(conversion_error(field, raw, "expected MM/DD/YYYY HH:MM:SS"));
    }
    let parsed = NaiveDateTime::parse_from_str(raw, DATE_TIME_LAYOUT).map_err(|e| {
        conversion_error(field, raw, format!("expected MM/DD/YYYY HH:MM:SS ({e})"))
    })?;
    Ok(Some(DateTime {
        year: parsed.year(),
        month: parsed.month(),
        day: parsed.day(),
        hours: parsed.hour(),
        minutes: parsed.minute(),
        seconds: parsed.second(),
        utc_offset_seconds: None,
    }))
}

pub fn format_date_time(value: &DateTime) -> String {
    format!(
        "{:02}/{:02}/{:04} {:02}:{:02}:{:02}",
        value.month, value.day, value.year, value.hours, value.minutes, value.seconds
    )
}

/// Parse an RFC 3339 timestamp, keeping its UTC offset.
pub fn parse_rfc3339(field: &str, value: Option<&str>) -> Result<Option<DateTime>, EhrError> {
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    let parsed = chrono::DateTime::parse_from_rfc3339(raw)
        .map_err(|e| conversion_error(field, raw, format!("expected RFC 3339 ({e})")))?;
    Ok(Some(DateTime {
        year: parsed.year(),
        month: parsed.month(),
        day: parsed.day(),
        hours: parsed.hour(),
        minutes: parsed.minute(),
        seconds: parsed.second(),
        utc_offset_seconds: Some(parsed.offset().local_minus_utc()),
    }))
}

fn date_from_naive(date: NaiveDate) -> Date {
    Date::new(date.year(), date.month(), date.day())
}

pub fn parse_i64(field: &str, value: Option<&str>) -> Result<Option<i64>, EhrError> {
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<i64>()
        .map(Some)
        .map_err(|e| conversion_error(field, raw, e))
}

pub fn parse_i32(field: &str, value: Option<&str>) -> Result<Option<i32>, EhrError> {
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<i32>()
        .map(Some)
        .map_err(|e| conversion_error(field, raw, e))
}

pub fn format_i64(value: Option<i64>) -> Option<String> {
    value.map(|v| v.to_string())
}

pub fn parse_f64(field: &str, value: Option<&str>) -> Result<Option<f64>, EhrError> {
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|e| conversion_error(field, raw, e))
}

/// Accept only `"true"` and `"false"`.
pub fn parse_bool_strict(field: &str, value: Option<&str>) -> Result<Option<bool>, EhrError> {
    match present(value) {
        None => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => Err(conversion_error(field, other, "expected \"true\" or \"false\"")),
    }
}

/// Accept the usual spellings of a boolean, including `1`/`0` and `t`/`f`.
pub fn parse_bool_lenient(field: &str, value: Option<&str>) -> Result<Option<bool>, EhrError> {
    match present(value) {
        None => Ok(None),
        Some("1" | "t" | "T" | "TRUE" | "true" | "True") => Ok(Some(true)),
        Some("0" | "f" | "F" | "FALSE" | "false" | "False") => Ok(Some(false)),
        Some(other) => Err(conversion_error(field, other, "not a boolean")),
    }
}

pub fn format_bool(value: Option<bool>) -> Option<String> {
    value.map(|v| v.to_string())
}

/// Shortest decimal rendering of a float (`75.0` renders as `"75"`).
pub fn format_f64(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
