//! Configuration management for the weather kiosk
//!
//! This module handles loading, validation, and management of the process
//! configuration from YAML files. Everything the backend decides (station
//! usage, wind unit, theme) arrives in the polled payload instead and is
//! deliberately absent here.

use crate::error::{KioskError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod defaults;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend API connection configuration
    pub api: ApiConfig,

    /// Data-refresh timer period in milliseconds
    pub refresh_interval_ms: u64,

    /// Theme-check timer period in milliseconds
    pub theme_interval_ms: u64,

    /// IANA timezone used for sunrise/sunset display
    pub timezone: String,

    /// Display text and startup defaults
    pub ui: UiConfig,

    /// Local view server binding configuration
    pub web: WebConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Backend API connection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root URL the `/api/*` paths are joined to
    pub base_url: String,

    /// Per-request client timeout in milliseconds
    pub request_timeout_ms: u64,
}

/// Display text and startup defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Label over the forecast temperature while both sources are shown
    pub forecast_label: String,

    /// Label over the forecast temperature in single-source layout
    pub temperature_label: String,

    /// Theme shown until the backend reports one
    pub default_theme: String,

    /// Wind unit used until the backend echoes its configuration
    pub default_wind_unit: String,
}

/// View server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Whether to serve the retained view at all
    pub enabled: bool,

    /// Bind address
    pub host: String,

    /// TCP port
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Path to log file (or directory)
    pub file: String,

    /// Number of rotated files to keep
    pub backup_count: u32,

    /// Whether to log to console
    pub console_output: bool,

    /// Whether to use JSON format
    pub json_format: bool,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the first default location that exists
    pub fn load() -> Result<Self> {
        let default_paths = [
            "weather_kiosk.yaml",
            "/data/weather_kiosk.yaml",
            "/etc/weather-kiosk/config.yaml",
        ];

        for path in &default_paths {
            if Path::new(path).exists() {
                let config = Self::from_file(path)?;
                config.validate()?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Parsed display timezone
    pub fn tz(&self) -> Result<chrono_tz::Tz> {
        self.timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|_| KioskError::validation("timezone", "Unknown IANA timezone"))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let base = self.api.base_url.trim();
        if base.is_empty() {
            return Err(KioskError::validation(
                "api.base_url",
                "Base URL cannot be empty",
            ));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(KioskError::validation(
                "api.base_url",
                "Base URL must use http or https",
            ));
        }

        if self.api.request_timeout_ms == 0 {
            return Err(KioskError::validation(
                "api.request_timeout_ms",
                "Must be greater than 0",
            ));
        }

        if self.refresh_interval_ms == 0 {
            return Err(KioskError::validation(
                "refresh_interval_ms",
                "Must be greater than 0",
            ));
        }

        if self.theme_interval_ms == 0 {
            return Err(KioskError::validation(
                "theme_interval_ms",
                "Must be greater than 0",
            ));
        }

        self.tz()?;

        if crate::ui::wind::WindUnit::parse(&self.ui.default_wind_unit).is_none() {
            return Err(KioskError::validation(
                "ui.default_wind_unit",
                "Expected one of land, sjo, beaufort, ms, kmh",
            ));
        }

        if self.web.enabled && self.web.port == 0 {
            return Err(KioskError::validation(
                "web.port",
                "Port must be greater than 0",
            ));
        }

        Ok(())
    }
}
