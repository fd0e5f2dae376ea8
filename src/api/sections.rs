//! Section decoding and shape validation.
//!
//! Each response is judged on its own. A malformed section yields a
//! [`KioskError::Shape`] for that section only; the caller keeps rendering
//! the others.

use super::types::{CurrentPayload, DailyEntry, HourlyEntry};
use crate::error::{KioskError, Result};
use serde_json::Value;

pub fn decode_current(value: &Value) -> Result<CurrentPayload> {
    if !value.is_object() {
        return Err(KioskError::shape("current", "expected a JSON object"));
    }
    serde_json::from_value(value.clone()).map_err(|e| KioskError::shape("current", e.to_string()))
}

/// Hourly forecast rows from `{"forecast": [...]}`. The first row must
/// carry a time and a symbol.
pub fn decode_hourly(value: &Value) -> Result<Vec<HourlyEntry>> {
    let rows: Vec<HourlyEntry> = decode_rows("hourly", "forecast", value)?;
    let first = &rows[0];
    if first.local_time.is_none() || first.weather_symbol.is_none() {
        return Err(KioskError::shape(
            "hourly",
            "first entry lacks local_time or weather_symbol",
        ));
    }
    Ok(rows)
}

/// Daily forecast rows from `{"daily_forecast": [...]}`. The first row
/// must carry a symbol and a weekday.
pub fn decode_daily(value: &Value) -> Result<Vec<DailyEntry>> {
    let rows: Vec<DailyEntry> = decode_rows("daily", "daily_forecast", value)?;
    let first = &rows[0];
    if first.weather_symbol.is_none() || first.weekday.is_none() {
        return Err(KioskError::shape(
            "daily",
            "first entry lacks weather_symbol or weekday",
        ));
    }
    Ok(rows)
}

pub fn decode_theme(value: &Value) -> Result<String> {
    match value.get("theme").and_then(Value::as_str).map(str::trim) {
        Some(theme) if !theme.is_empty() => Ok(theme.to_string()),
        _ => Err(KioskError::shape("theme", "missing theme name")),
    }
}

fn decode_rows<T: serde::de::DeserializeOwned>(
    section: &str,
    key: &str,
    value: &Value,
) -> Result<Vec<T>> {
    // A bare array is accepted as well as the wrapped form
    let list = value.get(key).unwrap_or(value);
    let Some(items) = list.as_array() else {
        return Err(KioskError::shape(
            section,
            format!("expected `{}` to be an array", key),
        ));
    };
    if items.is_empty() {
        return Err(KioskError::shape(section, "no entries"));
    }
    serde_json::from_value(list.clone()).map_err(|e| KioskError::shape(section, e.to_string()))
}
