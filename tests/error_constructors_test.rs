use weather_kiosk::error::KioskError;

#[test]
fn error_constructors_group_1() {
    assert!(matches!(KioskError::config("x"), KioskError::Config { .. }));
    assert!(matches!(KioskError::timeout("x"), KioskError::Timeout { .. }));
    assert!(matches!(
        KioskError::http(502, "x"),
        KioskError::Http { status: 502, .. }
    ));
    assert!(matches!(KioskError::network("x"), KioskError::Network { .. }));
    assert!(matches!(KioskError::web("x"), KioskError::Web { .. }));
}

#[test]
fn error_constructors_group_2() {
    assert!(matches!(
        KioskError::shape("hourly", "empty"),
        KioskError::Shape { .. }
    ));
    assert!(matches!(
        KioskError::serialization("s"),
        KioskError::Serialization { .. }
    ));
    assert!(matches!(KioskError::io("x"), KioskError::Io { .. }));
    assert!(matches!(
        KioskError::validation("f", "m"),
        KioskError::Validation { .. }
    ));
    assert!(matches!(KioskError::generic("x"), KioskError::Generic { .. }));
}

#[test]
fn transport_and_shape_are_separate_layers() {
    assert!(KioskError::timeout("t").is_transport());
    assert!(KioskError::http(500, "s").is_transport());
    assert!(KioskError::network("n").is_transport());
    assert!(KioskError::serialization("j").is_transport());
    assert!(!KioskError::shape("daily", "d").is_transport());
    assert!(!KioskError::config("c").is_transport());
}

#[test]
fn display_messages() {
    let e = KioskError::validation("field", "bad");
    assert!(format!("{}", e).contains("Validation error"));

    let e = KioskError::shape("daily", "first entry lacks weekday");
    assert_eq!(
        format!("{}", e),
        "Shape error in daily: first entry lacks weekday"
    );
}
