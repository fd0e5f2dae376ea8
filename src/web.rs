//! Read-only view server
//!
//! Exposes the retained view tree and the dashboard state over HTTP so a
//! browser shell (or a developer with curl) can see exactly what the
//! kiosk is rendering.

use crate::dashboard::DashboardState;
use crate::ui::ViewTree;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub view: Arc<Mutex<ViewTree>>,
    pub dashboard: Arc<Mutex<DashboardState>>,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn view(State(state): State<AppState>) -> impl IntoResponse {
    let view = state.view.lock().await.clone();
    Json(view)
}

pub async fn dashboard_state(State(state): State<AppState>) -> impl IntoResponse {
    let st = state.dashboard.lock().await;
    Json(serde_json::json!({
        "last_update": st.last_update.map(|t| t.to_rfc3339()),
        "theme": st.current_theme,
        "wind_unit": st.wind_unit,
        "station": st.station,
        "station_available": st.station_available(),
        "availability": st.availability,
        "summary": st.summary(),
        "quality": {
            "station": st.station_quality,
            "forecast": st.forecast_quality,
        },
        "status": st.status_text,
        "cycles": {
            "completed": st.completed_cycles,
            "failed": st.failed_cycles,
            "skipped": st.skipped_cycles,
        },
    }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/view", get(view))
        .route("/api/state", get(dashboard_state))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let router = build_router(state);
    let logger = crate::logging::get_logger("web");

    let addr = match host.parse::<IpAddr>() {
        Ok(ip) => SocketAddr::new(ip, port),
        Err(_) => {
            logger.warn(&format!("Invalid host '{}'; falling back to 127.0.0.1", host));
            ([127, 0, 0, 1], port).into()
        }
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    logger.info(&format!(
        "View server listening at http://{}:{}",
        local_addr.ip(),
        local_addr.port()
    ));

    axum::serve(listener, router).await?;
    Ok(())
}
