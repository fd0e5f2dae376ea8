use crate::api::{CurrentPayload, StationTrend};
use serde::{Deserialize, Serialize};

/// Displayable physical quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    TemperatureActual,
    Humidity,
    Pressure,
    PressureTrend,
    Co2,
    Noise,
}

impl Quantity {
    pub const ALL: [Quantity; 6] = [
        Quantity::TemperatureActual,
        Quantity::Humidity,
        Quantity::Pressure,
        Quantity::PressureTrend,
        Quantity::Co2,
        Quantity::Noise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quantity::TemperatureActual => "temperature_actual",
            Quantity::Humidity => "humidity",
            Quantity::Pressure => "pressure",
            Quantity::PressureTrend => "pressure_trend",
            Quantity::Co2 => "co2",
            Quantity::Noise => "noise",
        }
    }

    /// Whether the forecast provider can stand in for the station.
    ///
    /// The forecast temperature is always shown in its own region, so it
    /// never substitutes for the measured temperature.
    pub fn has_forecast_fallback(&self) -> bool {
        matches!(
            self,
            Quantity::Humidity | Quantity::Pressure | Quantity::PressureTrend
        )
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a displayed value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Station,
    Forecast,
    None,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Station => "station",
            Source::Forecast => "forecast",
            Source::None => "none",
        }
    }
}

/// Whether the station participates in display.
///
/// `server_flag` is the backend's `use_netatmo` echo, `client_toggle` the
/// local mirror of it. Both must be set for the station to count; each
/// current payload carrying a config overwrites both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationEnablement {
    pub server_flag: bool,
    pub client_toggle: bool,
}

impl Default for StationEnablement {
    fn default() -> Self {
        Self {
            server_flag: true,
            client_toggle: true,
        }
    }
}

impl StationEnablement {
    pub fn new(enabled: bool) -> Self {
        Self {
            server_flag: enabled,
            client_toggle: enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.server_flag && self.client_toggle
    }

    /// Apply a payload's config echo. Without a config the previous
    /// values stand.
    pub fn update_from(&mut self, payload: &CurrentPayload) {
        if let Some(cfg) = payload.config.as_ref() {
            let enabled = cfg.station_enabled();
            self.server_flag = enabled;
            self.client_toggle = enabled;
        }
    }
}

/// Per-quantity presence flags for the latest current payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySnapshot {
    pub station_temperature: bool,
    pub station_humidity: bool,
    pub station_pressure: bool,
    pub station_co2: bool,
    pub station_noise: bool,
    pub station_pressure_trend: bool,
    pub forecast_humidity: bool,
    pub forecast_pressure: bool,
}

impl AvailabilitySnapshot {
    pub fn station(&self, quantity: Quantity) -> bool {
        match quantity {
            Quantity::TemperatureActual => self.station_temperature,
            Quantity::Humidity => self.station_humidity,
            Quantity::Pressure => self.station_pressure,
            Quantity::PressureTrend => self.station_pressure_trend,
            Quantity::Co2 => self.station_co2,
            Quantity::Noise => self.station_noise,
        }
    }

    /// Forecast presence; quantities without a forecast source are never present.
    /// The trend fallback is derived from forecast pressure.
    pub fn forecast(&self, quantity: Quantity) -> bool {
        match quantity {
            Quantity::Humidity => self.forecast_humidity,
            Quantity::Pressure | Quantity::PressureTrend => self.forecast_pressure,
            _ => false,
        }
    }
}

/// A value is present when it exists and is a finite number.
pub fn is_present(value: Option<f64>) -> bool {
    value.is_some_and(f64::is_finite)
}

/// A station trend is present when it carries a trend other than `n/a`.
pub fn is_trend_present(trend: Option<&StationTrend>) -> bool {
    trend
        .and_then(|t| t.trend.as_deref())
        .is_some_and(|t| !t.trim().is_empty() && !t.trim().eq_ignore_ascii_case("n/a"))
}

/// Recompute presence for every quantity from one payload.
pub fn compute_availability(payload: &CurrentPayload) -> AvailabilitySnapshot {
    let mut snapshot = AvailabilitySnapshot::default();

    if let Some(station) = payload.station.as_ref() {
        snapshot.station_temperature = is_present(station.temperature);
        snapshot.station_humidity = is_present(station.humidity);
        snapshot.station_pressure = is_present(station.pressure);
        snapshot.station_co2 = is_present(station.co2);
        snapshot.station_noise = is_present(station.noise);
        snapshot.station_pressure_trend = is_trend_present(station.pressure_trend.as_ref());
    }

    if let Some(forecast) = payload.forecast.as_ref() {
        snapshot.forecast_humidity = is_present(forecast.humidity);
        snapshot.forecast_pressure = is_present(forecast.pressure);
    }

    snapshot
}
