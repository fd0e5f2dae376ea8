use weather_kiosk::reconcile::AvailabilitySnapshot;
use weather_kiosk::ui::adaptation::{DATA_UNAVAILABLE_CLASS, FORECAST_ONLY_CLASS, SINGLE_SOURCE_CLASS};
use weather_kiosk::ui::{
    Labels, Region, UiSurface, ViewTree, apply_adaptations, attach_wind_annotation,
    decide_adaptations,
};

fn station_everything() -> AvailabilitySnapshot {
    AvailabilitySnapshot {
        station_temperature: true,
        station_humidity: true,
        station_pressure: true,
        station_co2: true,
        station_noise: true,
        station_pressure_trend: true,
        forecast_humidity: true,
        forecast_pressure: true,
    }
}

fn adapt(view: &mut ViewTree, station_available: bool, snapshot: &AvailabilitySnapshot) {
    let adaptation = decide_adaptations(station_available, snapshot, &Labels::default());
    apply_adaptations(view, &adaptation);
}

#[test]
fn applying_twice_changes_nothing_more() {
    for station in [true, false] {
        let snapshot = station_everything();
        let mut view = ViewTree::kiosk();
        adapt(&mut view, station, &snapshot);
        let after_first = view.clone();
        let count = view.mutation_count();

        adapt(&mut view, station, &snapshot);
        assert_eq!(view.mutation_count(), count, "station={}", station);
        assert_eq!(view, after_first);
    }
}

#[test]
fn disabling_then_reenabling_restores_the_layout() {
    let snapshot = station_everything();
    let mut view = ViewTree::kiosk();
    adapt(&mut view, true, &snapshot);
    let dual = view.clone();

    adapt(&mut view, false, &snapshot);
    assert_eq!(view.region(Region::ActualTemperatureSection).map(|r| r.visible), Some(false));
    assert_eq!(view.region(Region::AirQualityContainer).map(|r| r.visible), Some(false));
    assert!(view.has_class(Region::TemperatureContainer, SINGLE_SOURCE_CLASS));
    assert!(view.has_class(Region::MainTemperatureSection, SINGLE_SOURCE_CLASS));
    assert!(view.has_class(Region::DetailsGrid, FORECAST_ONLY_CLASS));
    assert!(view.has_class(Region::ForecastMainCard, FORECAST_ONLY_CLASS));
    assert_eq!(view.text(Region::TemperatureLabel), Some("TEMPERATUR"));

    adapt(&mut view, true, &snapshot);
    // Mutation counters differ; the visible state must not
    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        serde_json::to_value(&dual).unwrap()
    );
    assert_eq!(view.text(Region::TemperatureLabel), Some("PROGNOS"));
}

#[test]
fn humidity_section_follows_either_source() {
    let mut view = ViewTree::kiosk();

    let forecast_only = AvailabilitySnapshot {
        forecast_humidity: true,
        ..Default::default()
    };
    adapt(&mut view, false, &forecast_only);
    assert_eq!(view.region(Region::HumiditySection).map(|r| r.visible), Some(true));

    // Station humidity alone counts only while the station is in use
    let station_only = AvailabilitySnapshot {
        station_humidity: true,
        ..Default::default()
    };
    adapt(&mut view, false, &station_only);
    assert_eq!(view.region(Region::HumiditySection).map(|r| r.visible), Some(false));
    adapt(&mut view, true, &station_only);
    assert_eq!(view.region(Region::HumiditySection).map(|r| r.visible), Some(true));
}

#[test]
fn unresolvable_containers_are_marked() {
    let mut view = ViewTree::kiosk();
    let snapshot = AvailabilitySnapshot {
        station_temperature: true,
        forecast_pressure: true,
        ..Default::default()
    };
    adapt(&mut view, true, &snapshot);
    assert!(view.has_class(Region::Co2Container, DATA_UNAVAILABLE_CLASS));
    assert!(view.has_class(Region::NoiseContainer, DATA_UNAVAILABLE_CLASS));
    // Forecast pressure feeds the fallback trend
    assert!(!view.has_class(Region::PressureTrendContainer, DATA_UNAVAILABLE_CLASS));

    adapt(&mut view, true, &station_everything());
    assert!(!view.has_class(Region::Co2Container, DATA_UNAVAILABLE_CLASS));
    assert!(!view.has_class(Region::NoiseContainer, DATA_UNAVAILABLE_CLASS));
}

#[test]
fn missing_regions_are_skipped() {
    let mut view = ViewTree::with_regions([Region::TemperatureLabel, Region::HumiditySection]);
    adapt(&mut view, false, &AvailabilitySnapshot::default());
    assert_eq!(view.text(Region::TemperatureLabel), Some("TEMPERATUR"));
    assert_eq!(view.region(Region::HumiditySection).map(|r| r.visible), Some(false));
    assert!(view.region(Region::ActualTemperatureSection).is_none());
    assert!(!attach_wind_annotation(&mut view, "Svag vind SV"));
}

#[test]
fn wind_annotation_needs_a_visible_parent() {
    let mut view = ViewTree::kiosk();
    adapt(&mut view, true, &station_everything());
    assert!(attach_wind_annotation(&mut view, "Måttlig vind V"));
    assert_eq!(view.is_visible(Region::WindAnnotation), Some(true));
    assert_eq!(view.text(Region::WindAnnotation), Some("Måttlig vind V"));

    // Hiding the parent takes the annotation with it
    adapt(&mut view, false, &station_everything());
    assert_eq!(view.is_visible(Region::WindAnnotation), Some(false));
    assert!(!attach_wind_annotation(&mut view, "Måttlig vind V"));
    assert_eq!(view.text(Region::WindAnnotation), Some(""));
}

#[test]
fn custom_labels_are_used() {
    let labels = Labels {
        dual_source: "FORECAST".to_string(),
        single_source: "TEMP".to_string(),
    };
    let mut view = ViewTree::kiosk();
    apply_adaptations(
        &mut view,
        &decide_adaptations(false, &AvailabilitySnapshot::default(), &labels),
    );
    assert_eq!(view.text(Region::TemperatureLabel), Some("TEMP"));
}
