use super::availability::{AvailabilitySnapshot, Quantity, Source, StationEnablement};
use super::trend::{TrendReading, derive_fallback_trend};
use crate::api::CurrentPayload;
use serde::Serialize;

/// Which source a quantity resolves to, before looking at the value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceInfo {
    pub source: Source,
    pub available: bool,
    pub fallback: bool,
}

/// One quantity after source priority has been applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDataPoint {
    pub quantity: Quantity,
    pub value: Option<f64>,
    pub source: Source,
    pub is_fallback: bool,
    pub should_display: bool,
    pub formatted_text: Option<String>,
    /// Only set for the pressure trend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendReading>,
}

impl ResolvedDataPoint {
    fn hidden(quantity: Quantity) -> Self {
        Self {
            quantity,
            value: None,
            source: Source::None,
            is_fallback: false,
            should_display: false,
            formatted_text: None,
            trend: None,
        }
    }
}

/// Applies the static source priority: the station first, when enabled
/// and present, then the forecast provider where it can stand in.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    availability: &'a AvailabilitySnapshot,
    station_enabled: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(availability: &'a AvailabilitySnapshot, enablement: StationEnablement) -> Self {
        Self {
            availability,
            station_enabled: enablement.is_enabled(),
        }
    }

    pub fn station_enabled(&self) -> bool {
        self.station_enabled
    }

    pub fn source_of(&self, quantity: Quantity) -> SourceInfo {
        if self.station_enabled && self.availability.station(quantity) {
            SourceInfo {
                source: Source::Station,
                available: true,
                fallback: false,
            }
        } else if quantity.has_forecast_fallback() && self.availability.forecast(quantity) {
            SourceInfo {
                source: Source::Forecast,
                available: true,
                fallback: true,
            }
        } else {
            SourceInfo {
                source: Source::None,
                available: false,
                fallback: false,
            }
        }
    }

    /// Resolve a raw value already taken from the winning source.
    ///
    /// For the pressure trend `raw` is the forecast pressure, from which
    /// the fallback trend is derived. A station trend needs its label,
    /// which a bare pressure change does not carry, so it resolves with
    /// `should_display == false` here; use [`Self::resolve_from`].
    pub fn resolve(&self, quantity: Quantity, raw: Option<f64>) -> ResolvedDataPoint {
        let info = self.source_of(quantity);
        if info.source == Source::None {
            return ResolvedDataPoint::hidden(quantity);
        }

        let value = raw.filter(|v| v.is_finite());
        let (formatted_text, trend) = match (quantity, info.source, value) {
            (_, _, None) => (None, None),
            (Quantity::PressureTrend, Source::Forecast, Some(p)) => {
                let reading = derive_fallback_trend(Some(p));
                (Some(reading.display_text()), Some(reading))
            }
            (Quantity::PressureTrend, _, Some(_)) => (None, None),
            (_, _, Some(v)) => (Some(format_value(quantity, v)), None),
        };

        ResolvedDataPoint {
            quantity,
            value,
            source: info.source,
            is_fallback: info.fallback,
            should_display: formatted_text.is_some(),
            formatted_text,
            trend,
        }
    }

    /// Resolve a quantity straight from a payload, reading the value from
    /// whichever source wins.
    pub fn resolve_from(&self, quantity: Quantity, payload: &CurrentPayload) -> ResolvedDataPoint {
        let info = self.source_of(quantity);
        match (quantity, info.source) {
            (_, Source::None) => ResolvedDataPoint::hidden(quantity),
            (Quantity::PressureTrend, Source::Station) => {
                let Some(raw) = payload
                    .station
                    .as_ref()
                    .and_then(|s| s.pressure_trend.as_ref())
                else {
                    return ResolvedDataPoint::hidden(quantity);
                };
                let reading = TrendReading::from_station(raw);
                ResolvedDataPoint {
                    quantity,
                    value: Some(reading.pressure_change),
                    source: Source::Station,
                    is_fallback: false,
                    should_display: true,
                    formatted_text: Some(reading.display_text()),
                    trend: Some(reading),
                }
            }
            (_, Source::Station) => self.resolve(quantity, station_value(quantity, payload)),
            (_, Source::Forecast) => self.resolve(quantity, forecast_value(quantity, payload)),
        }
    }

    /// Every quantity, recomputed together from one payload
    pub fn resolve_all(&self, payload: &CurrentPayload) -> Vec<ResolvedDataPoint> {
        Quantity::ALL
            .iter()
            .map(|q| self.resolve_from(*q, payload))
            .collect()
    }

    /// The trend to show on the barometer, whatever its origin.
    ///
    /// Unlike [`Self::resolve_from`] this falls back to the synthetic
    /// trend whenever the station trend is unusable, so the barometer
    /// always has something to show when any pressure is known.
    pub fn resolve_trend(&self, payload: &CurrentPayload) -> TrendReading {
        let point = self.resolve_from(Quantity::PressureTrend, payload);
        point.trend.unwrap_or_else(|| {
            derive_fallback_trend(payload.forecast.as_ref().and_then(|f| f.pressure))
        })
    }
}

fn station_value(quantity: Quantity, payload: &CurrentPayload) -> Option<f64> {
    let station = payload.station.as_ref()?;
    match quantity {
        Quantity::TemperatureActual => station.temperature,
        Quantity::Humidity => station.humidity,
        Quantity::Pressure => station.pressure,
        Quantity::Co2 => station.co2,
        Quantity::Noise => station.noise,
        Quantity::PressureTrend => station.pressure_trend.as_ref()?.pressure_change,
    }
}

fn forecast_value(quantity: Quantity, payload: &CurrentPayload) -> Option<f64> {
    let forecast = payload.forecast.as_ref()?;
    match quantity {
        Quantity::Humidity => forecast.humidity,
        Quantity::Pressure | Quantity::PressureTrend => forecast.pressure,
        _ => None,
    }
}

/// Display text for a present value. Zero is an ordinary value.
pub fn format_value(quantity: Quantity, value: f64) -> String {
    match quantity {
        Quantity::TemperatureActual => format!("{:.1}°", value),
        Quantity::Humidity => format!("{}% Luftfuktighet", round(value)),
        Quantity::Pressure => format!("{} hPa", round(value)),
        Quantity::Co2 => format!("{} ppm Luftkvalitet", round(value)),
        Quantity::Noise => format!("{} dB Ljud", round(value)),
        Quantity::PressureTrend => format!("{:+.1} hPa", value),
    }
}

fn round(value: f64) -> i64 {
    value.round() as i64
}
