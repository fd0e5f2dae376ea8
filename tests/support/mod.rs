#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Semaphore;
use weather_kiosk::api::{Endpoint, WeatherApi};
use weather_kiosk::{KioskError, Result};

#[derive(Clone, Debug)]
pub enum Reply {
    Json(Value),
    Timeout,
    Http(u16),
    Network,
    /// Sleep (tokio time) and then answer
    Delayed(Duration, Box<Reply>),
}

/// Scripted backend. Every endpoint answers with its current script; an
/// optional gate holds fetches until permits are added.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    replies: Arc<Mutex<HashMap<Endpoint, Reply>>>,
    calls: Arc<Mutex<HashMap<Endpoint, usize>>>,
    in_progress: Arc<AtomicUsize>,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.set(Endpoint::Current, Reply::Json(station_payload()));
        api.set(Endpoint::Forecast, Reply::Json(hourly_body()));
        api.set(Endpoint::Daily, Reply::Json(daily_body()));
        api.set(Endpoint::Theme, Reply::Json(json!({"theme": "light"})));
        api
    }

    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn set(&self, endpoint: Endpoint, reply: Reply) {
        self.replies.lock().unwrap().insert(endpoint, reply);
    }

    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(&endpoint)
            .copied()
            .unwrap_or(0)
    }

    pub fn in_progress(&self) -> usize {
        self.in_progress.load(Ordering::SeqCst)
    }
}

fn answer(reply: Reply) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Value>> + Send>> {
    Box::pin(async move {
        match reply {
            Reply::Json(v) => Ok(v),
            Reply::Timeout => Err(KioskError::timeout("request timed out after 10000ms")),
            Reply::Http(status) => Err(KioskError::http(status, "scripted status")),
            Reply::Network => Err(KioskError::network("connection refused")),
            Reply::Delayed(d, inner) => {
                tokio::time::sleep(d).await;
                answer(*inner).await
            }
        }
    })
}

#[async_trait]
impl WeatherApi for ScriptedApi {
    async fn fetch(&self, endpoint: Endpoint) -> Result<Value> {
        *self.calls.lock().unwrap().entry(endpoint).or_insert(0) += 1;
        self.in_progress.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = self.gate.as_ref() {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(&endpoint)
            .cloned()
            .unwrap_or(Reply::Network);
        let result = answer(reply).await;
        self.in_progress.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

pub fn station_payload() -> Value {
    json!({
        "station": {
            "temperature": 21.3,
            "humidity": 44,
            "pressure": 1016.4,
            "co2": 640,
            "noise": 42,
            "pressure_trend": {"trend": "rising", "pressure_change": 2.1, "analysis_quality": "good"}
        },
        "forecast": {
            "temperature": 14.8,
            "pressure": 1013,
            "humidity": 71,
            "weather_symbol": 3,
            "wind_speed": 5.0,
            "wind_direction": 270,
            "precipitation": 0
        },
        "config": {"use_netatmo": true, "wind_unit": "land"},
        "theme": "light",
        "status": "Väderdata uppdaterad",
        "sun": {"sunrise": "2024-06-21T01:31:00Z", "sunset": "2024-06-21T20:08:00Z"}
    })
}

pub fn forecast_only_payload() -> Value {
    json!({
        "forecast": {
            "temperature": 9.1,
            "pressure": 1024,
            "weather_symbol": 6,
            "wind_speed": 2.0,
            "wind_direction": 90
        },
        "config": {"use_netatmo": false, "wind_unit": "sjo"},
        "status": "SMHI"
    })
}

pub fn hourly_body() -> Value {
    json!({"forecast": [
        {"local_time": "14:00", "weather_symbol": 3, "temperature": 15.2, "wind_speed": 4.0, "wind_direction": 250, "precipitation": 0},
        {"local_time": "15:00", "weather_symbol": 18, "temperature": 14.1, "wind_speed": 6.0, "wind_direction": 260, "precipitation": 1.4}
    ]})
}

pub fn daily_body() -> Value {
    json!({"daily_forecast": [
        {"weekday": "Friday", "date": "2024-06-21", "weather_symbol": 1, "temp_max": 22.4, "temp_min": 11.0},
        {"weekday": "Saturday", "date": "2024-06-22", "weather_symbol": 5, "temp_max": 19.0, "temp_min": 10.2}
    ]})
}
