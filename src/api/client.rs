use crate::config::ApiConfig;
use crate::error::{KioskError, Result};
use crate::logging::{StructuredLogger, get_logger};
use async_trait::async_trait;
use std::time::Duration;

/// Read-only backend resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Current,
    Forecast,
    Daily,
    Theme,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Current => "/api/current",
            Endpoint::Forecast => "/api/forecast",
            Endpoint::Daily => "/api/daily",
            Endpoint::Theme => "/api/theme",
        }
    }

    /// Section name used in logs and shape errors
    pub fn section(&self) -> &'static str {
        match self {
            Endpoint::Current => "current",
            Endpoint::Forecast => "hourly",
            Endpoint::Daily => "daily",
            Endpoint::Theme => "theme",
        }
    }
}

/// Source of raw JSON bodies.
///
/// Implementations only report transport-level failures (timeouts,
/// non-success statuses, unreachable hosts, non-JSON bodies). Judging
/// whether the JSON has the expected shape is left to
/// [`crate::api::sections`].
#[async_trait]
pub trait WeatherApi: Send + Sync {
    async fn fetch(&self, endpoint: Endpoint) -> Result<serde_json::Value>;
}

/// reqwest-backed client for the kiosk backend
pub struct HttpWeatherApi {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    logger: StructuredLogger,
}

impl HttpWeatherApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("weather-kiosk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            timeout,
            logger: get_logger("api"),
        })
    }

    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn classify(&self, endpoint: Endpoint, err: reqwest::Error) -> KioskError {
        if err.is_timeout() {
            KioskError::timeout(format!(
                "{} timed out after {}ms",
                endpoint.path(),
                self.timeout.as_millis()
            ))
        } else {
            KioskError::from(err)
        }
    }
}

#[async_trait]
impl WeatherApi for HttpWeatherApi {
    async fn fetch(&self, endpoint: Endpoint) -> Result<serde_json::Value> {
        use reqwest::header::{ACCEPT, CACHE_CONTROL};

        let url = self.url_for(endpoint);
        self.logger.debug(&format!("GET {}", url));

        let resp = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache")
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.classify(endpoint, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(KioskError::http(
                status.as_u16(),
                format!(
                    "{} returned {}",
                    endpoint.path(),
                    status.canonical_reason().unwrap_or("error")
                ),
            ));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| self.classify(endpoint, e))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            KioskError::serialization(format!("{} body is not JSON: {}", endpoint.path(), e))
        })
    }
}
