//! Wire types for the backend API.
//!
//! Every field is optional: the backend omits whatever it cannot measure
//! and the kiosk treats absence as data, never as an error.

use super::lenient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `GET /api/current`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentPayload {
    /// Local sensor station readings
    #[serde(default, alias = "netatmo")]
    pub station: Option<StationReading>,

    /// Forecast provider readings for the current hour
    #[serde(default, alias = "smhi")]
    pub forecast: Option<ForecastReading>,

    /// Echo of the backend configuration
    #[serde(default)]
    pub config: Option<ServerConfig>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub theme: Option<String>,

    /// Human-readable status line suggested by the backend
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,

    #[serde(default)]
    pub sun: Option<SunTimes>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationReading {
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub humidity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub pressure: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub co2: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub noise: Option<f64>,
    #[serde(default)]
    pub pressure_trend: Option<StationTrend>,
}

/// Pressure tendency analysed by the backend from station history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationTrend {
    /// `rising`, `falling`, `stable` or `n/a`
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub trend: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub pressure_change: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub data_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub analysis_quality: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastReading {
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub humidity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub pressure: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub weather_symbol: Option<f64>,
    /// Metres per second
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub wind_speed: Option<f64>,
    /// Degrees, meteorological convention
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub wind_direction: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub precipitation: Option<f64>,
}

/// Backend configuration echoed in each current payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Missing means the station is not in use
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub use_netatmo: Option<bool>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub wind_unit: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ServerConfig {
    pub fn station_enabled(&self) -> bool {
        self.use_netatmo.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SunTimes {
    /// RFC 3339 timestamp
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub sunrise: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub sunset: Option<String>,
}

/// One row of `GET /api/forecast`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlyEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub local_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub weather_symbol: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub wind_speed: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub wind_direction: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub precipitation: Option<f64>,
}

/// One row of `GET /api/daily`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub weekday: Option<String>,
    /// ISO date, `YYYY-MM-DD`
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub weather_symbol: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub temp_max: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub temp_min: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_section_keys_are_accepted() {
        let payload: CurrentPayload = serde_json::from_str(
            r#"{"netatmo": {"temperature": 21.5}, "smhi": {"pressure": 1012}}"#,
        )
        .unwrap();
        assert_eq!(payload.station.unwrap().temperature, Some(21.5));
        assert_eq!(payload.forecast.unwrap().pressure, Some(1012.0));
    }

    #[test]
    fn null_station_is_absent() {
        let payload: CurrentPayload =
            serde_json::from_str(r#"{"station": null, "config": {"use_netatmo": false}}"#)
                .unwrap();
        assert!(payload.station.is_none());
        assert!(!payload.config.unwrap().station_enabled());
    }

    #[test]
    fn server_config_keeps_unknown_keys() {
        let cfg: ServerConfig =
            serde_json::from_str(r#"{"use_netatmo": true, "wind_unit": "ms", "refresh": 30}"#)
                .unwrap();
        assert!(cfg.station_enabled());
        assert_eq!(cfg.wind_unit.as_deref(), Some("ms"));
        assert!(cfg.extra.contains_key("refresh"));
    }
}
