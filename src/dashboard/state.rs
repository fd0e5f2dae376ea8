use crate::api::ServerConfig;
use crate::config::Config;
use crate::reconcile::{
    AvailabilitySnapshot, AvailabilitySummary, QualityAssessment, StationEnablement, summarize,
};
use crate::ui::WindUnit;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Process-wide kiosk state, mutated only by the refresh and theme cycles
#[derive(Debug, Clone, Serialize)]
pub struct DashboardState {
    pub last_update: Option<DateTime<Utc>>,
    pub current_theme: String,
    pub wind_unit: WindUnit,
    /// Last configuration echoed by the backend
    pub config: Option<ServerConfig>,
    pub station: StationEnablement,
    pub availability: AvailabilitySnapshot,
    /// Scores for the latest readings; informational only
    pub station_quality: Option<QualityAssessment>,
    pub forecast_quality: Option<QualityAssessment>,
    pub status_text: String,
    pub completed_cycles: u64,
    pub failed_cycles: u64,
    pub skipped_cycles: u64,
}

impl DashboardState {
    /// Startup defaults: station optimistically enabled, nothing available
    pub fn new(config: &Config) -> Self {
        Self {
            last_update: None,
            current_theme: config.ui.default_theme.clone(),
            wind_unit: WindUnit::parse(&config.ui.default_wind_unit).unwrap_or_default(),
            config: None,
            station: StationEnablement::default(),
            availability: AvailabilitySnapshot::default(),
            station_quality: None,
            forecast_quality: None,
            status_text: super::STATUS_LOADING.to_string(),
            completed_cycles: 0,
            failed_cycles: 0,
            skipped_cycles: 0,
        }
    }

    pub fn station_available(&self) -> bool {
        self.station.is_enabled()
    }

    pub fn summary(&self) -> AvailabilitySummary {
        summarize(&self.availability, self.station)
    }
}
