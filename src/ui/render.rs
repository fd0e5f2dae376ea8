//! Render passes that write resolved data into a surface

use super::adaptation::{attach_wind_annotation, detach_wind_annotation};
use super::format;
use super::region::Region;
use super::surface::UiSurface;
use super::wind::{WindUnit, describe_wind};
use crate::api::{CurrentPayload, DailyEntry, HourlyEntry};
use crate::error::KioskError;
use crate::reconcile::{Quantity, Resolver, Trend, co2_level, noise_level};
use chrono_tz::Tz;

pub const NO_HOURLY_FORECAST: &str = "Ingen prognos tillgänglig";
pub const NO_DAILY_FORECAST: &str = "Ingen dagsprognos tillgänglig";
pub const STATUS_UPDATED: &str = "Väderdata uppdaterad";

const CO2_CLASSES: [&str; 3] = ["good", "moderate", "poor"];
const NOISE_CLASSES: [&str; 3] = ["quiet", "normal", "loud"];
const TREND_CLASSES: [&str; 4] = ["rising", "falling", "stable", "na"];

/// Turn on `<prefix>-<chosen>` and every other `<prefix>-<option>` off
fn set_exclusive_class<S: UiSurface + ?Sized>(
    surface: &mut S,
    region: Region,
    prefix: &str,
    options: &[&str],
    chosen: Option<&str>,
) {
    for option in options {
        surface.set_class(
            region,
            &format!("{}-{}", prefix, option),
            chosen == Some(*option),
        );
    }
}

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Rising => "rising",
        Trend::Falling => "falling",
        Trend::Stable => "stable",
        Trend::NotAvailable => "na",
    }
}

/// Current conditions. Layout adaptation must already have been applied
/// for the same cycle, since the wind annotation checks its parent.
pub fn render_current<S: UiSurface + ?Sized>(
    surface: &mut S,
    payload: &CurrentPayload,
    resolver: &Resolver<'_>,
    wind_unit: WindUnit,
    tz: Tz,
) {
    let forecast = payload.forecast.as_ref();

    surface.set_text(
        Region::ForecastTemperature,
        &format::temperature(forecast.and_then(|f| f.temperature)),
    );
    surface.set_text(
        Region::WeatherDescription,
        format::weather_description(forecast.and_then(|f| f.weather_symbol)),
    );

    let humidity = resolver.resolve_from(Quantity::Humidity, payload);
    surface.set_text(
        Region::Humidity,
        humidity.formatted_text.as_deref().unwrap_or(""),
    );

    let pressure = resolver.resolve_from(Quantity::Pressure, payload);
    surface.set_text(
        Region::Pressure,
        &pressure
            .formatted_text
            .unwrap_or_else(|| format::pressure(None)),
    );

    let trend = resolver.resolve_trend(payload);
    surface.set_text(
        Region::PressureTrend,
        &format!("{} {}", trend.trend.arrow(), trend.display_text()),
    );
    set_exclusive_class(
        surface,
        Region::PressureTrend,
        "trend",
        &TREND_CLASSES,
        Some(trend_class(trend.trend)),
    );

    let wind_text = describe_wind(
        forecast.and_then(|f| f.wind_speed),
        forecast.and_then(|f| f.wind_direction),
        wind_unit,
    );
    surface.set_text(Region::Wind, &wind_text);

    if resolver.station_enabled() {
        render_station_block(surface, payload, resolver);
        let has_wind = forecast.is_some_and(|f| f.wind_speed.is_some());
        if has_wind {
            attach_wind_annotation(surface, &wind_text);
        } else {
            detach_wind_annotation(surface);
        }
    } else {
        detach_wind_annotation(surface);
    }

    let sun = payload.sun.as_ref();
    surface.set_text(
        Region::Sunrise,
        &format::sun_time(sun.and_then(|s| s.sunrise.as_deref()), tz),
    );
    surface.set_text(
        Region::Sunset,
        &format::sun_time(sun.and_then(|s| s.sunset.as_deref()), tz),
    );
}

fn render_station_block<S: UiSurface + ?Sized>(
    surface: &mut S,
    payload: &CurrentPayload,
    resolver: &Resolver<'_>,
) {
    let actual = resolver.resolve_from(Quantity::TemperatureActual, payload);
    surface.set_text(
        Region::ActualTemperature,
        &actual
            .formatted_text
            .unwrap_or_else(|| format::temperature(None)),
    );

    let co2 = resolver.resolve_from(Quantity::Co2, payload);
    surface.set_text(Region::Co2, co2.formatted_text.as_deref().unwrap_or(""));
    set_exclusive_class(
        surface,
        Region::Co2,
        "co2",
        &CO2_CLASSES,
        co2.value.map(co2_level),
    );

    let noise = resolver.resolve_from(Quantity::Noise, payload);
    surface.set_text(Region::Noise, noise.formatted_text.as_deref().unwrap_or(""));
    set_exclusive_class(
        surface,
        Region::Noise,
        "noise",
        &NOISE_CLASSES,
        noise.value.map(noise_level),
    );
}

/// Hourly rows, or the placeholder when the section was unusable
pub fn render_hourly<S: UiSurface + ?Sized>(
    surface: &mut S,
    entries: Option<&[HourlyEntry]>,
    wind_unit: WindUnit,
) {
    let Some(entries) = entries.filter(|e| !e.is_empty()) else {
        surface.set_text(Region::HourlyForecast, NO_HOURLY_FORECAST);
        return;
    };
    let rows: Vec<String> = entries
        .iter()
        .map(|e| hourly_row(e, wind_unit))
        .collect();
    surface.set_rows(Region::HourlyForecast, &rows);
}

pub fn hourly_row(entry: &HourlyEntry, wind_unit: WindUnit) -> String {
    let mut row = format!(
        "{}  {}  {}  {}",
        entry.local_time.as_deref().unwrap_or("--:--"),
        format::temperature_integer(entry.temperature),
        format::weather_description(entry.weather_symbol),
        describe_wind(entry.wind_speed, entry.wind_direction, wind_unit),
    );
    let precip = format::precipitation(entry.precipitation);
    if !precip.is_empty() {
        row.push_str("  ");
        row.push_str(&precip);
    }
    row
}

/// Daily rows, or the placeholder when the section was unusable
pub fn render_daily<S: UiSurface + ?Sized>(surface: &mut S, entries: Option<&[DailyEntry]>) {
    let Some(entries) = entries.filter(|e| !e.is_empty()) else {
        surface.set_text(Region::DailyForecast, NO_DAILY_FORECAST);
        return;
    };
    let rows: Vec<String> = entries.iter().map(daily_row).collect();
    surface.set_rows(Region::DailyForecast, &rows);
}

pub fn daily_row(entry: &DailyEntry) -> String {
    let day = format::weekday(entry.weekday.as_deref().unwrap_or(""));
    let date = entry.date.as_deref().map(format::daily_date);
    let heading = match date {
        Some(date) if !date.is_empty() => format!("{} {}", day, date),
        _ => day,
    };
    format!(
        "{}  {}  {} / {}",
        heading,
        format::weather_description(entry.weather_symbol),
        format::temperature_integer(entry.temp_max),
        format::temperature_integer(entry.temp_min),
    )
}

pub fn render_status<S: UiSurface + ?Sized>(surface: &mut S, text: &str) {
    surface.set_text(Region::StatusLine, text);
}

pub fn render_last_update<S: UiSurface + ?Sized>(
    surface: &mut S,
    at: chrono::DateTime<chrono::Utc>,
    tz: Tz,
) {
    surface.set_text(
        Region::LastUpdate,
        &format!("Uppdaterad {}", at.with_timezone(&tz).format("%H:%M")),
    );
}

/// Status text for a failed cycle
pub fn error_status(err: &KioskError) -> String {
    format!("⚠️ {}", err.user_message())
}

/// Swap the body's `theme-<name>` class
pub fn apply_theme<S: UiSurface + ?Sized>(surface: &mut S, previous: Option<&str>, theme: &str) {
    if let Some(prev) = previous.filter(|p| *p != theme) {
        surface.set_class(Region::Body, &format!("theme-{}", prev), false);
    }
    surface.set_class(Region::Body, &format!("theme-{}", theme), true);
}
