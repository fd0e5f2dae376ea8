#![no_main]
use libfuzzer_sys::fuzz_target;
use weather_kiosk::reconcile::{Resolver, StationEnablement, compute_availability};
use weather_kiosk::ui::{Labels, ViewTree, WindUnit, apply_adaptations, decide_adaptations, render};

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let Ok(payload) = weather_kiosk::api::decode_current(&value) else {
        return;
    };

    let mut station = StationEnablement::default();
    station.update_from(&payload);
    let availability = compute_availability(&payload);

    let mut view = ViewTree::kiosk();
    let adaptation = decide_adaptations(station.is_enabled(), &availability, &Labels::default());
    apply_adaptations(&mut view, &adaptation);
    let resolver = Resolver::new(&availability, station);
    render::render_current(
        &mut view,
        &payload,
        &resolver,
        WindUnit::Beaufort,
        chrono_tz::Europe::Stockholm,
    );

    // Re-applying the same decision is a no-op
    let before = view.mutation_count();
    apply_adaptations(&mut view, &adaptation);
    assert_eq!(view.mutation_count(), before);
});
