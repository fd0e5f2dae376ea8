use anyhow::Result;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};
use weather_kiosk::api::HttpWeatherApi;
use weather_kiosk::web::AppState;
use weather_kiosk::{Config, Dashboard};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    weather_kiosk::logging::init_logging(&config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!(
        "Weather kiosk {} starting up (backend {})",
        env!("APP_VERSION"),
        config.api.base_url
    );

    let api = HttpWeatherApi::new(&config.api)
        .map_err(|e| anyhow::anyhow!("Failed to create API client: {}", e))?;
    let dashboard = Arc::new(
        Dashboard::new(config.clone(), api)
            .map_err(|e| anyhow::anyhow!("Failed to create dashboard: {}", e))?,
    );

    let web_task = if config.web.enabled {
        let state = AppState {
            view: dashboard.view_handle(),
            dashboard: dashboard.state_handle(),
        };
        let host = config.web.host.clone();
        let port = config.web.port;
        Some(tokio::spawn(async move {
            if let Err(e) = weather_kiosk::web::serve(state, &host, port).await {
                error!("View server error: {}", e);
            }
        }))
    } else {
        None
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = shutdown_tx.send(true);
            }
            Err(e) => {
                // Keep the sender alive so the dashboard keeps running
                error!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    });

    dashboard.run(shutdown_rx).await;
    info!("Weather kiosk shut down");

    if let Some(task) = web_task {
        task.abort();
    }
    Ok(())
}
