//! Layout degradation.
//!
//! [`decide_adaptations`] is a pure function of station availability and
//! the availability snapshot; [`apply_adaptations`] writes the decision
//! onto a surface. Applying the same decision twice changes nothing.

use super::region::Region;
use super::surface::UiSurface;
use crate::reconcile::{AvailabilitySnapshot, Quantity, Resolver, Source, StationEnablement};
use serde::Serialize;
use std::collections::BTreeMap;

pub const SINGLE_SOURCE_CLASS: &str = "single-source-mode";
pub const FORECAST_ONLY_CLASS: &str = "forecast-only-mode";
pub const DATA_UNAVAILABLE_CLASS: &str = "data-unavailable";

/// Label texts for the forecast temperature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Shown while the station's actual temperature sits next to it
    pub dual_source: String,
    /// Shown when the forecast temperature stands alone
    pub single_source: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            dual_source: "PROGNOS".to_string(),
            single_source: "TEMPERATUR".to_string(),
        }
    }
}

impl From<&crate::config::UiConfig> for Labels {
    fn from(ui: &crate::config::UiConfig) -> Self {
        Self {
            dual_source: ui.forecast_label.clone(),
            single_source: ui.temperature_label.clone(),
        }
    }
}

/// Everything the layout should look like for one cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adaptation {
    pub station_available: bool,
    pub visibility: BTreeMap<Region, bool>,
    pub classes: Vec<(Region, &'static str, bool)>,
    pub label_text: String,
}

impl Adaptation {
    pub fn is_visible(&self, region: Region) -> bool {
        self.visibility.get(&region).copied().unwrap_or(true)
    }
}

pub fn decide_adaptations(
    station_available: bool,
    availability: &AvailabilitySnapshot,
    labels: &Labels,
) -> Adaptation {
    let resolver = Resolver::new(availability, StationEnablement::new(station_available));

    let humidity_visible = (station_available && availability.station_humidity)
        || availability.forecast_humidity;

    let mut visibility = BTreeMap::new();
    visibility.insert(Region::ActualTemperatureSection, station_available);
    visibility.insert(Region::AirQualityContainer, station_available);
    visibility.insert(Region::HumiditySection, humidity_visible);

    let single_source = !station_available;
    let mut classes = vec![
        (Region::TemperatureContainer, SINGLE_SOURCE_CLASS, single_source),
        (Region::MainTemperatureSection, SINGLE_SOURCE_CLASS, single_source),
        (Region::DetailsGrid, FORECAST_ONLY_CLASS, single_source),
        (Region::ForecastMainCard, FORECAST_ONLY_CLASS, single_source),
    ];
    for (region, quantity) in [
        (Region::Co2Container, Quantity::Co2),
        (Region::NoiseContainer, Quantity::Noise),
        (Region::PressureTrendContainer, Quantity::PressureTrend),
    ] {
        let unavailable = resolver.source_of(quantity).source == Source::None;
        classes.push((region, DATA_UNAVAILABLE_CLASS, unavailable));
    }

    let label_text = if station_available {
        labels.dual_source.clone()
    } else {
        labels.single_source.clone()
    };

    Adaptation {
        station_available,
        visibility,
        classes,
        label_text,
    }
}

pub fn apply_adaptations<S: UiSurface + ?Sized>(surface: &mut S, adaptation: &Adaptation) {
    for (region, visible) in &adaptation.visibility {
        surface.set_visible(*region, *visible);
    }
    for (region, class, on) in &adaptation.classes {
        surface.set_class(*region, class, *on);
    }
    surface.set_text(Region::TemperatureLabel, &adaptation.label_text);

    // The annotation lives inside the actual-temperature section
    if !adaptation.is_visible(Region::ActualTemperatureSection) {
        detach_wind_annotation(surface);
    }
}

/// Attach the wind readout under the actual temperature.
///
/// The parent's current visibility is re-read from the surface; a hidden
/// or missing parent gets no annotation. Returns whether it was attached.
pub fn attach_wind_annotation<S: UiSurface + ?Sized>(surface: &mut S, text: &str) -> bool {
    if surface.is_visible(Region::ActualTemperatureSection) != Some(true) {
        detach_wind_annotation(surface);
        return false;
    }
    surface.set_text(Region::WindAnnotation, text);
    surface.set_visible(Region::WindAnnotation, true);
    true
}

pub fn detach_wind_annotation<S: UiSurface + ?Sized>(surface: &mut S) {
    surface.set_text(Region::WindAnnotation, "");
    surface.set_visible(Region::WindAnnotation, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ViewTree;

    fn full() -> AvailabilitySnapshot {
        AvailabilitySnapshot {
            station_temperature: true,
            station_humidity: true,
            station_pressure: true,
            station_co2: true,
            station_noise: true,
            station_pressure_trend: true,
            forecast_humidity: false,
            forecast_pressure: true,
        }
    }

    #[test]
    fn humidity_hidden_without_any_source() {
        let snap = AvailabilitySnapshot {
            station_humidity: false,
            forecast_humidity: false,
            ..full()
        };
        let a = decide_adaptations(true, &snap, &Labels::default());
        assert!(!a.is_visible(Region::HumiditySection));
        assert!(a.is_visible(Region::ActualTemperatureSection));
    }

    #[test]
    fn station_humidity_ignored_when_disabled() {
        let a = decide_adaptations(false, &full(), &Labels::default());
        assert!(!a.is_visible(Region::HumiditySection));
        assert_eq!(a.label_text, "TEMPERATUR");
    }

    #[test]
    fn trend_fallback_keeps_container_undimmed() {
        let a = decide_adaptations(false, &full(), &Labels::default());
        assert!(a.classes.contains(&(
            Region::PressureTrendContainer,
            DATA_UNAVAILABLE_CLASS,
            false
        )));
        assert!(a.classes.contains(&(Region::Co2Container, DATA_UNAVAILABLE_CLASS, true)));
    }

    #[test]
    fn annotation_skipped_under_hidden_parent() {
        let mut tree = ViewTree::kiosk();
        let a = decide_adaptations(false, &full(), &Labels::default());
        apply_adaptations(&mut tree, &a);
        assert!(!attach_wind_annotation(&mut tree, "Svag vind SV"));
        assert_eq!(tree.text(Region::WindAnnotation), Some(""));

        let a = decide_adaptations(true, &full(), &Labels::default());
        apply_adaptations(&mut tree, &a);
        assert!(attach_wind_annotation(&mut tree, "Svag vind SV"));
        assert_eq!(tree.is_visible(Region::WindAnnotation), Some(true));
    }

    #[test]
    fn missing_parent_means_no_annotation() {
        let mut tree = ViewTree::with_regions([Region::WindAnnotation]);
        assert!(!attach_wind_annotation(&mut tree, "Storm"));
    }
}
