//! Barometric pressure trend.
//!
//! The station computes a real tendency from its own history. When that
//! is missing, a coarse trend is synthesised from the absolute forecast
//! pressure. That fallback is an approximation: it looks at the level,
//! not at a rate of change, and is always tagged `basic` quality.

use crate::api::StationTrend;
use serde::{Deserialize, Serialize};

/// Above this forecast pressure the fallback reports rising
pub const HIGH_PRESSURE_HPA: f64 = 1020.0;
/// Below this forecast pressure the fallback reports falling
pub const LOW_PRESSURE_HPA: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    #[serde(rename = "rising")]
    Rising,
    #[serde(rename = "falling")]
    Falling,
    #[serde(rename = "stable")]
    Stable,
    #[serde(rename = "n/a")]
    NotAvailable,
}

impl Trend {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "rising" => Trend::Rising,
            "falling" => Trend::Falling,
            "stable" => Trend::Stable,
            _ => Trend::NotAvailable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Stable => "stable",
            Trend::NotAvailable => "n/a",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::Rising => "Stigande",
            Trend::Falling => "Fallande",
            Trend::Stable => "Stabilt",
            Trend::NotAvailable => "Okänt",
        }
    }

    /// Arrow shown next to the barometer reading
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Rising => "↗",
            Trend::Falling => "↘",
            Trend::Stable => "→",
            Trend::NotAvailable => "?",
        }
    }
}

impl PartialEq<&str> for Trend {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisQuality {
    Poor,
    Basic,
    Fair,
    Good,
    Excellent,
}

impl AnalysisQuality {
    /// Unknown labels are treated as `poor`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => AnalysisQuality::Basic,
            "fair" => AnalysisQuality::Fair,
            "good" => AnalysisQuality::Good,
            "excellent" => AnalysisQuality::Excellent,
            _ => AnalysisQuality::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisQuality::Poor => "poor",
            AnalysisQuality::Basic => "basic",
            AnalysisQuality::Fair => "fair",
            AnalysisQuality::Good => "good",
            AnalysisQuality::Excellent => "excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendOrigin {
    Station,
    ForecastFallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReading {
    pub trend: Trend,
    pub description: String,
    pub analysis_quality: AnalysisQuality,
    /// Hours of history behind the trend; zero for the fallback
    pub data_hours: f64,
    /// hPa change over `data_hours`; zero for the fallback
    pub pressure_change: f64,
    pub origin: TrendOrigin,
}

impl TrendReading {
    pub fn from_station(raw: &StationTrend) -> Self {
        let trend = raw
            .trend
            .as_deref()
            .map(Trend::parse)
            .unwrap_or(Trend::NotAvailable);
        Self {
            trend,
            description: raw
                .description
                .clone()
                .unwrap_or_else(|| trend.label().to_string()),
            analysis_quality: raw
                .analysis_quality
                .as_deref()
                .map(AnalysisQuality::parse)
                .unwrap_or(AnalysisQuality::Poor),
            data_hours: raw.data_hours.filter(|v| v.is_finite()).unwrap_or(0.0),
            pressure_change: raw.pressure_change.filter(|v| v.is_finite()).unwrap_or(0.0),
            origin: TrendOrigin::Station,
        }
    }

    /// `Trend: Stigande` and friends
    pub fn display_text(&self) -> String {
        format!("Trend: {}", self.trend.label())
    }
}

/// Coarse trend from the absolute forecast pressure.
///
/// `0` hPa is a reading like any other and reports falling.
pub fn derive_fallback_trend(pressure: Option<f64>) -> TrendReading {
    let Some(p) = pressure.filter(|v| v.is_finite()) else {
        return TrendReading {
            trend: Trend::NotAvailable,
            description: "Ingen tryckdata".to_string(),
            analysis_quality: AnalysisQuality::Poor,
            data_hours: 0.0,
            pressure_change: 0.0,
            origin: TrendOrigin::ForecastFallback,
        };
    };

    let (trend, description) = if p > HIGH_PRESSURE_HPA {
        (Trend::Rising, "Högtryck")
    } else if p < LOW_PRESSURE_HPA {
        (Trend::Falling, "Lågtryck")
    } else {
        (Trend::Stable, "Normalt tryck")
    };

    TrendReading {
        trend,
        description: description.to_string(),
        analysis_quality: AnalysisQuality::Basic,
        data_hours: 0.0,
        pressure_change: 0.0,
        origin: TrendOrigin::ForecastFallback,
    }
}
