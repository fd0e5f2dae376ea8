//! Top-level kiosk controller
//!
//! [`Dashboard`] owns the process-wide [`DashboardState`] and the retained
//! [`ViewTree`], and runs the two timers: the data refresh (three
//! concurrent fetches, reconcile, adapt, render) and the independent
//! theme check. A refresh requested while another one is still running is
//! dropped rather than racing it.

use crate::api::WeatherApi;
use crate::config::Config;
use crate::error::Result;
use crate::logging::{StructuredLogger, get_logger};
use crate::ui::{Labels, ViewTree, render};
use chrono_tz::Tz;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

mod refresh;
mod runtime;
mod state;
mod theme;

#[cfg(test)]
mod tests;

pub use refresh::RefreshOutcome;
pub use state::DashboardState;
pub use theme::ThemeCheck;

pub const STATUS_LOADING: &str = "Laddar väderdata...";

pub struct Dashboard<A: WeatherApi> {
    config: Config,
    api: A,
    tz: Tz,
    labels: Labels,
    state: Arc<Mutex<DashboardState>>,
    view: Arc<Mutex<ViewTree>>,
    in_flight: AtomicBool,
    logger: StructuredLogger,
}

impl<A: WeatherApi> Dashboard<A> {
    /// Build a dashboard rendering into the full kiosk layout
    pub fn new(config: Config, api: A) -> Result<Self> {
        Self::with_view(config, api, ViewTree::kiosk())
    }

    /// Build a dashboard rendering into a caller-supplied layout
    pub fn with_view(config: Config, api: A, mut view: ViewTree) -> Result<Self> {
        let tz = config.tz()?;
        let labels = Labels::from(&config.ui);
        let state = DashboardState::new(&config);

        render::apply_theme(&mut view, None, &config.ui.default_theme);
        render::render_status(&mut view, STATUS_LOADING);

        Ok(Self {
            config,
            api,
            tz,
            labels,
            state: Arc::new(Mutex::new(state)),
            view: Arc::new(Mutex::new(view)),
            in_flight: AtomicBool::new(false),
            logger: get_logger("dashboard"),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared handle to the retained view, for the view server
    pub fn view_handle(&self) -> Arc<Mutex<ViewTree>> {
        Arc::clone(&self.view)
    }

    /// Shared handle to the dashboard state, for the view server
    pub fn state_handle(&self) -> Arc<Mutex<DashboardState>> {
        Arc::clone(&self.state)
    }

    pub async fn view_snapshot(&self) -> ViewTree {
        self.view.lock().await.clone()
    }

    pub async fn state_snapshot(&self) -> DashboardState {
        self.state.lock().await.clone()
    }

    /// Whether a refresh cycle is currently running
    pub fn is_refreshing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}
