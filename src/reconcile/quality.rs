//! Data-quality scoring. Informational only; never feeds source selection.

use super::availability::{AvailabilitySnapshot, StationEnablement, is_present, is_trend_present};
use crate::api::{ForecastReading, StationReading};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl QualityLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => QualityLevel::Excellent,
            60..=79 => QualityLevel::Good,
            40..=59 => QualityLevel::Fair,
            _ => QualityLevel::Poor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityAssessment {
    pub score: u32,
    pub level: QualityLevel,
    pub issues: Vec<String>,
}

fn in_range(value: Option<f64>, min: f64, max: f64) -> bool {
    value.is_some_and(|v| (min..=max).contains(&v))
}

/// Score a station reading out of 100
pub fn assess_station(reading: &StationReading) -> QualityAssessment {
    let mut score = 0;
    let mut issues = Vec::new();

    let checks: [(&str, Option<f64>, u32, f64, f64, u32); 4] = [
        ("temperature", reading.temperature, 20, -50.0, 60.0, 10),
        ("humidity", reading.humidity, 15, 0.0, 100.0, 10),
        ("pressure", reading.pressure, 15, 800.0, 1100.0, 10),
        ("co2", reading.co2, 15, 200.0, 5000.0, 5),
    ];
    for (name, value, points, min, max, bonus) in checks {
        if !is_present(value) {
            issues.push(format!("missing {}", name));
            continue;
        }
        score += points;
        if in_range(value, min, max) {
            score += bonus;
        } else {
            issues.push(format!("{} out of range", name));
        }
    }

    if is_trend_present(reading.pressure_trend.as_ref()) {
        score += 15;
    } else {
        issues.push("no pressure trend".to_string());
    }

    let score = score.min(100);
    QualityAssessment {
        score,
        level: QualityLevel::from_score(score),
        issues,
    }
}

/// Score a forecast reading. The provider is trusted: the level never
/// drops below fair.
pub fn assess_forecast(reading: &ForecastReading) -> QualityAssessment {
    let mut score = 50;
    let mut issues = Vec::new();

    if is_present(reading.temperature) {
        score += 25;
        if in_range(reading.temperature, -50.0, 60.0) {
            score += 10;
        }
    } else {
        issues.push("missing temperature".to_string());
    }
    if is_present(reading.weather_symbol) {
        score += 15;
    } else {
        issues.push("missing weather_symbol".to_string());
    }

    let score = score.min(100);
    QualityAssessment {
        score,
        level: QualityLevel::from_score(score).max(QualityLevel::Fair),
        issues,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilitySummary {
    pub station_enabled: bool,
    pub available_quantities: Vec<&'static str>,
    pub fallback_quantities: Vec<&'static str>,
    pub overall_score: u32,
    pub overall_quality: QualityLevel,
}

/// Overall coverage: station quantities weigh 60 points when the station
/// is enabled, forecast humidity and pressure 40.
pub fn summarize(
    snapshot: &AvailabilitySnapshot,
    enablement: StationEnablement,
) -> AvailabilitySummary {
    let station_enabled = enablement.is_enabled();
    let mut possible = 0u32;
    let mut earned = 0u32;
    let mut available = Vec::new();
    let mut fallback = Vec::new();

    if station_enabled {
        let station: [(&'static str, bool, u32); 5] = [
            ("temperature_actual", snapshot.station_temperature, 15),
            ("humidity", snapshot.station_humidity, 10),
            ("pressure", snapshot.station_pressure, 15),
            ("co2", snapshot.station_co2, 10),
            ("pressure_trend", snapshot.station_pressure_trend, 10),
        ];
        for (name, present, points) in station {
            possible += points;
            if present {
                earned += points;
                available.push(name);
            }
        }
        if snapshot.station_noise {
            available.push("noise");
        }
    }

    let forecast: [(&'static str, bool, bool); 2] = [
        ("humidity", snapshot.forecast_humidity, station_enabled && snapshot.station_humidity),
        ("pressure", snapshot.forecast_pressure, station_enabled && snapshot.station_pressure),
    ];
    for (name, present, covered_by_station) in forecast {
        possible += 20;
        if present {
            earned += 20;
            if !covered_by_station {
                fallback.push(name);
            }
        }
    }
    if snapshot.forecast_pressure && !(station_enabled && snapshot.station_pressure_trend) {
        fallback.push("pressure_trend");
    }

    let overall_score = if possible == 0 {
        0
    } else {
        ((earned as f64 / possible as f64) * 100.0).round() as u32
    };

    AvailabilitySummary {
        station_enabled,
        available_quantities: available,
        fallback_quantities: fallback,
        overall_score,
        overall_quality: QualityLevel::from_score(overall_score),
    }
}

/// CSS-style class for a CO2 reading in ppm
pub fn co2_level(ppm: f64) -> &'static str {
    if ppm > 1500.0 {
        "poor"
    } else if ppm > 800.0 {
        "moderate"
    } else {
        "good"
    }
}

/// CSS-style class for a noise reading in dB
pub fn noise_level(db: f64) -> &'static str {
    if db > 60.0 {
        "loud"
    } else if db > 40.0 {
        "normal"
    } else {
        "quiet"
    }
}
