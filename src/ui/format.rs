//! Display formatting for values that are not source-resolved

use crate::reconcile::{Quantity, format_value};
use chrono::{DateTime, Datelike, NaiveDate};
use chrono_tz::Tz;

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// One decimal, `--.-°` when missing
pub fn temperature(value: Option<f64>) -> String {
    match present(value) {
        Some(v) => format_value(Quantity::TemperatureActual, v),
        None => "--.-°".to_string(),
    }
}

/// Whole degrees, `--°` when missing
pub fn temperature_integer(value: Option<f64>) -> String {
    match present(value) {
        Some(v) => format!("{}°", v.round() as i64),
        None => "--°".to_string(),
    }
}

pub fn pressure(value: Option<f64>) -> String {
    match present(value) {
        Some(v) => format_value(Quantity::Pressure, v),
        None => "-- hPa".to_string(),
    }
}

/// Empty for dry hours
pub fn precipitation(value: Option<f64>) -> String {
    match present(value) {
        Some(v) if v > 0.0 => format!("{:.1} mm", v),
        _ => String::new(),
    }
}

/// Swedish description of a forecast weather symbol (1..=27)
pub fn weather_description(symbol: Option<f64>) -> &'static str {
    let Some(s) = present(symbol) else {
        return "Okänt";
    };
    match s.trunc() as i64 {
        1 => "Klart",
        2 => "Nästan klart",
        3 => "Växlande",
        4 => "Halvklart",
        5 => "Molnigt",
        6 => "Mulet",
        7 => "Dimma",
        8..=10 => "Regnskurar",
        11 | 21 => "Åska",
        12..=14 | 22..=24 => "Snöblandat",
        15..=17 => "Snöbyar",
        18..=20 => "Regn",
        25..=27 => "Snöfall",
        _ => "Okänt",
    }
}

/// English weekday names become Swedish; anything else passes through
pub fn weekday(name: &str) -> String {
    match name.trim() {
        "Monday" => "Måndag",
        "Tuesday" => "Tisdag",
        "Wednesday" => "Onsdag",
        "Thursday" => "Torsdag",
        "Friday" => "Fredag",
        "Saturday" => "Lördag",
        "Sunday" => "Söndag",
        other => other,
    }
    .to_string()
}

/// `YYYY-MM-DD` as `d mon`; unparseable input is returned unchanged
pub fn daily_date(date: &str) -> String {
    let head = date.get(..10).unwrap_or(date);
    match NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        Ok(d) => format!("{} {}", d.day(), MONTHS[d.month0() as usize]),
        Err(_) => date.to_string(),
    }
}

/// RFC 3339 timestamp as local `HH:MM`, `--:--` when unreadable
pub fn sun_time(timestamp: Option<&str>, tz: Tz) -> String {
    timestamp
        .and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
        .map(|dt| dt.with_timezone(&tz).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
