#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    // Shape checks must reject, never panic
    let _ = weather_kiosk::api::decode_current(&value);
    let _ = weather_kiosk::api::decode_hourly(&value);
    let _ = weather_kiosk::api::decode_daily(&value);
    let _ = weather_kiosk::api::decode_theme(&value);
});
