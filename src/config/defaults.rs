use super::*;

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8036".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            forecast_label: "PROGNOS".to_string(),
            temperature_label: "TEMPERATUR".to_string(),
            default_theme: "light".to_string(),
            default_wind_unit: "land".to_string(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "127.0.0.1".to_string(),
            port: 8090,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            file: "/tmp/weather_kiosk.log".to_string(),
            backup_count: 5,
            console_output: true,
            json_format: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            refresh_interval_ms: 30_000,
            theme_interval_ms: 60_000,
            timezone: "Europe/Stockholm".to_string(),
            ui: UiConfig::default(),
            web: WebConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
