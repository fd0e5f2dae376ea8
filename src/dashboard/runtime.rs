use super::{Dashboard, RefreshOutcome};
use crate::api::WeatherApi;
use tokio::sync::watch;
use tokio::time::{Duration, Interval, MissedTickBehavior, interval};

fn timer(period_ms: u64) -> Interval {
    let mut timer = interval(Duration::from_millis(period_ms));
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    timer
}

fn stop_requested(
    changed: Result<(), watch::error::RecvError>,
    shutdown: &watch::Receiver<bool>,
) -> bool {
    changed.is_err() || *shutdown.borrow()
}

impl<A: WeatherApi> Dashboard<A> {
    /// Drive both timers until `shutdown` flips to true or its sender is
    /// dropped. Both fire immediately on start.
    ///
    /// The timers run as two joined loops, so a slow refresh never delays
    /// a theme check. Refreshes from the timer are sequential; the
    /// in-flight guard covers callers of [`Dashboard::refresh`] outside it.
    pub async fn run(&self, shutdown: watch::Receiver<bool>) {
        self.logger.info(&format!(
            "Dashboard running (refresh every {}ms, theme every {}ms)",
            self.config.refresh_interval_ms, self.config.theme_interval_ms
        ));

        tokio::join!(
            self.refresh_loop(shutdown.clone()),
            self.theme_loop(shutdown)
        );
        self.logger.info("Shutdown signal received");
    }

    async fn refresh_loop(&self, mut shutdown: watch::Receiver<bool>) {
        let mut refresh_timer = timer(self.config.refresh_interval_ms);
        loop {
            tokio::select! {
                _ = refresh_timer.tick() => {
                    match self.refresh().await {
                        Ok(RefreshOutcome::Completed { .. }) => {}
                        Ok(RefreshOutcome::Skipped) => {
                            self.logger.debug("Refresh tick skipped");
                        }
                        // Already logged and shown; wait for the next tick
                        Err(_) => {}
                    }
                }
                changed = shutdown.changed() => {
                    if stop_requested(changed, &shutdown) {
                        break;
                    }
                }
            }
        }
    }

    async fn theme_loop(&self, mut shutdown: watch::Receiver<bool>) {
        let mut theme_timer = timer(self.config.theme_interval_ms);
        loop {
            tokio::select! {
                _ = theme_timer.tick() => {
                    self.check_theme().await;
                }
                changed = shutdown.changed() => {
                    if stop_requested(changed, &shutdown) {
                        break;
                    }
                }
            }
        }
    }
}
