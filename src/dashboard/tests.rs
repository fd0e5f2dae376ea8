use super::*;
use crate::api::Endpoint;
use crate::error::KioskError;
use crate::ui::Region;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;

#[derive(Clone)]
enum Reply {
    Json(Value),
    Timeout,
    Http(u16),
}

struct FakeApi {
    replies: std::sync::Mutex<HashMap<Endpoint, Reply>>,
}

impl FakeApi {
    fn new(current: Value) -> Self {
        let mut replies = HashMap::new();
        replies.insert(Endpoint::Current, Reply::Json(current));
        replies.insert(
            Endpoint::Forecast,
            Reply::Json(json!({"forecast": [{"local_time": "13:00", "weather_symbol": 2, "temperature": 11.0}]})),
        );
        replies.insert(
            Endpoint::Daily,
            Reply::Json(json!({"daily_forecast": [{"weekday": "Monday", "date": "2024-04-01", "weather_symbol": 1, "temp_max": 9, "temp_min": 1}]})),
        );
        replies.insert(Endpoint::Theme, Reply::Json(json!({"theme": "dark"})));
        Self {
            replies: std::sync::Mutex::new(replies),
        }
    }

    fn set(&self, endpoint: Endpoint, reply: Reply) {
        self.replies.lock().unwrap().insert(endpoint, reply);
    }
}

#[async_trait]
impl WeatherApi for FakeApi {
    async fn fetch(&self, endpoint: Endpoint) -> Result<Value> {
        let reply = self.replies.lock().unwrap().get(&endpoint).cloned();
        match reply {
            Some(Reply::Json(v)) => Ok(v),
            Some(Reply::Timeout) => Err(KioskError::timeout("deadline")),
            Some(Reply::Http(status)) => Err(KioskError::http(status, "boom")),
            None => Err(KioskError::network("unscripted")),
        }
    }
}

fn station_payload() -> Value {
    json!({
        "station": {"temperature": 19.5, "humidity": 40, "pressure": 1015, "co2": 900, "noise": 35,
                    "pressure_trend": {"trend": "stable", "analysis_quality": "good"}},
        "forecast": {"temperature": 12.0, "pressure": 1012, "weather_symbol": 3, "wind_speed": 4.0, "wind_direction": 180},
        "config": {"use_netatmo": true, "wind_unit": "ms"},
        "status": "Netatmo + SMHI"
    })
}

#[tokio::test]
async fn startup_state_is_optimistic() {
    let dash = Dashboard::new(Config::default(), FakeApi::new(station_payload())).unwrap();
    let state = dash.state_snapshot().await;
    assert!(state.station_available());
    assert_eq!(state.availability, Default::default());
    let view = dash.view_snapshot().await;
    assert_eq!(view.text(Region::StatusLine), Some(STATUS_LOADING));
    assert!(view.has_class(Region::Body, "theme-light"));
}

#[tokio::test]
async fn refresh_renders_station_layout() {
    let dash = Dashboard::new(Config::default(), FakeApi::new(station_payload())).unwrap();
    let outcome = dash.refresh().await.unwrap();
    assert_eq!(outcome, RefreshOutcome::Completed { degraded: vec![] });

    let view = dash.view_snapshot().await;
    assert_eq!(view.text(Region::ActualTemperature), Some("19.5°"));
    assert_eq!(view.text(Region::Co2), Some("900 ppm Luftkvalitet"));
    assert!(view.has_class(Region::Co2, "co2-moderate"));
    assert_eq!(view.text(Region::TemperatureLabel), Some("PROGNOS"));
    assert_eq!(view.text(Region::WindAnnotation), Some("4.0 m/s S"));
    assert_eq!(view.text(Region::StatusLine), Some("Netatmo + SMHI"));

    let state = dash.state_snapshot().await;
    assert_eq!(state.wind_unit, crate::ui::WindUnit::Ms);
    assert_eq!(state.completed_cycles, 1);
    assert!(state.last_update.is_some());
}

#[tokio::test]
async fn http_error_keeps_previous_render() {
    let api = FakeApi::new(station_payload());
    let dash = Dashboard::new(Config::default(), api).unwrap();
    dash.refresh().await.unwrap();

    dash.api.set(Endpoint::Daily, Reply::Http(500));
    dash.api.set(
        Endpoint::Current,
        Reply::Json(json!({"station": {"temperature": -3.0}, "config": {"use_netatmo": true}})),
    );
    let err = dash.refresh().await.unwrap_err();
    assert!(err.is_transport());

    let view = dash.view_snapshot().await;
    assert_eq!(view.text(Region::ActualTemperature), Some("19.5°"));
    assert_eq!(
        view.text(Region::StatusLine),
        Some("⚠️ Serverfel - försök igen senare")
    );
    assert_eq!(dash.state_snapshot().await.failed_cycles, 1);
}

#[tokio::test]
async fn timeout_message_differs_from_http() {
    let api = FakeApi::new(station_payload());
    api.set(Endpoint::Forecast, Reply::Timeout);
    let dash = Dashboard::new(Config::default(), api).unwrap();
    let err = dash.refresh().await.unwrap_err();
    assert!(matches!(err, KioskError::Timeout { .. }));
    let view = dash.view_snapshot().await;
    assert_eq!(
        view.text(Region::StatusLine),
        Some("⚠️ Timeout - kontrollera nätverksanslutning")
    );
}

#[tokio::test]
async fn theme_failure_is_silent() {
    let api = FakeApi::new(station_payload());
    api.set(Endpoint::Theme, Reply::Http(404));
    let dash = Dashboard::new(Config::default(), api).unwrap();
    dash.refresh().await.unwrap();
    let before = dash.view_snapshot().await;

    assert_eq!(dash.check_theme().await, ThemeCheck::Failed);
    assert_eq!(dash.view_snapshot().await, before);
}

#[tokio::test]
async fn theme_change_swaps_class() {
    let dash = Dashboard::new(Config::default(), FakeApi::new(station_payload())).unwrap();
    assert_eq!(
        dash.check_theme().await,
        ThemeCheck::Changed("dark".to_string())
    );
    assert_eq!(dash.check_theme().await, ThemeCheck::Unchanged);
    let view = dash.view_snapshot().await;
    assert!(view.has_class(Region::Body, "theme-dark"));
    assert!(!view.has_class(Region::Body, "theme-light"));
}
