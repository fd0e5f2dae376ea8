use super::{Dashboard, DashboardState};
use crate::api::{
    CurrentPayload, Endpoint, WeatherApi, decode_current, decode_daily, decode_hourly,
};
use crate::error::Result;
use crate::logging::{LogContext, StructuredLogger, get_logger_with_context};
use crate::reconcile::{
    AvailabilitySnapshot, Resolver, assess_forecast, assess_station, compute_availability,
};
use crate::ui::{ViewTree, WindUnit, apply_adaptations, decide_adaptations, render};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};

pub const STATUS_PARTIAL: &str = "⚠️ Ofullständig väderdata";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// All three resources arrived; `degraded` names sections that were
    /// malformed and replaced by placeholders
    Completed { degraded: Vec<&'static str> },
    /// Another refresh was still running
    Skipped,
}

/// Clears the in-flight flag however the cycle ends
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<A: WeatherApi> Dashboard<A> {
    /// One data refresh cycle.
    ///
    /// A transport failure on any of the three fetches abandons the whole
    /// cycle: nothing but the status line changes and the error is
    /// returned. Malformed sections only degrade themselves.
    pub async fn refresh(&self) -> Result<RefreshOutcome> {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            self.logger
                .debug("Refresh requested while another is in flight, skipping");
            self.state.lock().await.skipped_cycles += 1;
            return Ok(RefreshOutcome::Skipped);
        };

        let logger = get_logger_with_context(
            LogContext::new("dashboard").with_cycle_id(uuid::Uuid::new_v4().to_string()),
        );
        logger.debug("Refresh cycle started");

        let fetched = tokio::try_join!(
            self.api.fetch(Endpoint::Current),
            self.api.fetch(Endpoint::Forecast),
            self.api.fetch(Endpoint::Daily),
        );
        let (current, hourly, daily) = match fetched {
            Ok(bodies) => bodies,
            Err(e) => {
                logger.error(&format!("Refresh cycle abandoned: {}", e));
                let status = render::error_status(&e);
                let mut state = self.state.lock().await;
                state.failed_cycles += 1;
                state.status_text = status.clone();
                let mut view = self.view.lock().await;
                render::render_status(&mut *view, &status);
                return Err(e);
            }
        };

        let mut degraded = Vec::new();
        let payload = match decode_current(&current) {
            Ok(p) => {
                if p.forecast.is_none() {
                    logger.warn("Current payload has no forecast section");
                }
                Some(p)
            }
            Err(e) => {
                logger.warn(&e.to_string());
                degraded.push("current");
                None
            }
        };
        let hourly = decode_hourly(&hourly)
            .map_err(|e| {
                logger.warn(&e.to_string());
                degraded.push("hourly");
            })
            .ok();
        let daily = decode_daily(&daily)
            .map_err(|e| {
                logger.warn(&e.to_string());
                degraded.push("daily");
            })
            .ok();

        let mut state = self.state.lock().await;
        let mut view = self.view.lock().await;

        self.reconcile(&mut state, &mut view, payload.as_ref(), &logger);
        render::render_hourly(&mut *view, hourly.as_deref(), state.wind_unit);
        render::render_daily(&mut *view, daily.as_deref());

        let status = match payload.as_ref() {
            None => STATUS_PARTIAL.to_string(),
            Some(p) => p
                .status
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(render::STATUS_UPDATED)
                .to_string(),
        };
        render::render_status(&mut *view, &status);

        let now = Utc::now();
        render::render_last_update(&mut *view, now, self.tz);
        state.last_update = Some(now);
        state.status_text = status;
        state.completed_cycles += 1;

        logger.info(&format!(
            "Refresh cycle completed (station_available={}, degraded={:?})",
            state.station_available(),
            degraded
        ));
        Ok(RefreshOutcome::Completed { degraded })
    }

    /// Rebuild availability from the payload, adapt the layout and render
    /// current conditions.
    fn reconcile(
        &self,
        state: &mut DashboardState,
        view: &mut ViewTree,
        payload: Option<&CurrentPayload>,
        logger: &StructuredLogger,
    ) {
        match payload {
            Some(p) => {
                state.station.update_from(p);
                if let Some(cfg) = p.config.as_ref() {
                    if let Some(unit) = cfg.wind_unit.as_deref() {
                        match WindUnit::parse(unit) {
                            Some(u) => state.wind_unit = u,
                            None => logger.warn(&format!("Unknown wind unit '{}'", unit)),
                        }
                    }
                    state.config = Some(cfg.clone());
                }
                state.availability = compute_availability(p);
                state.station_quality = p.station.as_ref().map(assess_station);
                state.forecast_quality = p.forecast.as_ref().map(assess_forecast);
                if let Some(q) = state.station_quality.as_ref().filter(|q| !q.issues.is_empty()) {
                    logger.debug(&format!("Station data issues: {}", q.issues.join(", ")));
                }
            }
            None => {
                state.availability = AvailabilitySnapshot::default();
                state.station_quality = None;
                state.forecast_quality = None;
            }
        }

        let station_available = state.station_available();
        let adaptation = decide_adaptations(station_available, &state.availability, &self.labels);
        logger.debug(&format!(
            "Adaptation: station_available={}, availability={:?}",
            station_available, state.availability
        ));
        apply_adaptations(view, &adaptation);

        let Some(p) = payload else {
            return;
        };
        let resolver = Resolver::new(&state.availability, state.station);
        render::render_current(view, p, &resolver, state.wind_unit, self.tz);

        if let Some(theme) = p.theme.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            self.switch_theme(state, view, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_flight_flag_released_on_drop() {
        let flag = AtomicBool::new(false);
        {
            let guard = InFlight::acquire(&flag);
            assert!(guard.is_some());
            assert!(InFlight::acquire(&flag).is_none());
        }
        assert!(!flag.load(Ordering::Acquire));
        assert!(InFlight::acquire(&flag).is_some());
    }
}
