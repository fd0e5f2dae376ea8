use serde::{Deserialize, Serialize};

/// Named regions of the kiosk layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Body,
    StatusLine,
    LastUpdate,

    TemperatureContainer,
    MainTemperatureSection,
    TemperatureLabel,
    ForecastTemperature,
    WeatherDescription,

    ActualTemperatureSection,
    ActualTemperature,
    WindAnnotation,

    HumiditySection,
    Humidity,

    AirQualityContainer,
    Co2Container,
    Co2,
    NoiseContainer,
    Noise,

    DetailsGrid,
    ForecastMainCard,
    Pressure,
    PressureTrendContainer,
    PressureTrend,
    Wind,

    Sunrise,
    Sunset,

    HourlyForecast,
    DailyForecast,
}

impl Region {
    pub const ALL: [Region; 28] = [
        Region::Body,
        Region::StatusLine,
        Region::LastUpdate,
        Region::TemperatureContainer,
        Region::MainTemperatureSection,
        Region::TemperatureLabel,
        Region::ForecastTemperature,
        Region::WeatherDescription,
        Region::ActualTemperatureSection,
        Region::ActualTemperature,
        Region::WindAnnotation,
        Region::HumiditySection,
        Region::Humidity,
        Region::AirQualityContainer,
        Region::Co2Container,
        Region::Co2,
        Region::NoiseContainer,
        Region::Noise,
        Region::DetailsGrid,
        Region::ForecastMainCard,
        Region::Pressure,
        Region::PressureTrendContainer,
        Region::PressureTrend,
        Region::Wind,
        Region::Sunrise,
        Region::Sunset,
        Region::HourlyForecast,
        Region::DailyForecast,
    ];

    /// Stable identifier, identical to the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            Region::Body => "body",
            Region::StatusLine => "status-line",
            Region::LastUpdate => "last-update",
            Region::TemperatureContainer => "temperature-container",
            Region::MainTemperatureSection => "main-temperature-section",
            Region::TemperatureLabel => "temperature-label",
            Region::ForecastTemperature => "forecast-temperature",
            Region::WeatherDescription => "weather-description",
            Region::ActualTemperatureSection => "actual-temperature-section",
            Region::ActualTemperature => "actual-temperature",
            Region::WindAnnotation => "wind-annotation",
            Region::HumiditySection => "humidity-section",
            Region::Humidity => "humidity",
            Region::AirQualityContainer => "air-quality-container",
            Region::Co2Container => "co2-container",
            Region::Co2 => "co2",
            Region::NoiseContainer => "noise-container",
            Region::Noise => "noise",
            Region::DetailsGrid => "details-grid",
            Region::ForecastMainCard => "forecast-main-card",
            Region::Pressure => "pressure",
            Region::PressureTrendContainer => "pressure-trend-container",
            Region::PressureTrend => "pressure-trend",
            Region::Wind => "wind",
            Region::Sunrise => "sunrise",
            Region::Sunset => "sunset",
            Region::HourlyForecast => "hourly-forecast",
            Region::DailyForecast => "daily-forecast",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.id() == id)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_serde() {
        for region in Region::ALL {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.id()));
            assert_eq!(Region::from_id(region.id()), Some(region));
        }
    }
}
