#![allow(clippy::float_cmp)]

use super::*;
use serde_json::json;

#[test]
fn minimal_config_fills_defaults() {
    let config = CardConfig::parse(&json!({ "floor_id": "ground" })).unwrap();
    assert_eq!(config.floor_id, "ground");
    assert_eq!(config.title, None);
    assert_eq!(config.service_domain, DEFAULT_SERVICE_DOMAIN);
    assert!(!config.full_width);
    assert_eq!(config.rotation, 0.0);
    assert_eq!(config.theme, ThemePreference::Auto);
    assert_eq!(config.color_mode, ColorMode::Palette);
    assert_eq!(config.refresh_interval_ms, DEFAULT_REFRESH_INTERVAL_MS);
}

#[test]
fn full_config_round_trips_every_field() {
    let config = CardConfig::parse(&json!({
        "title": "Ground floor",
        "floor_id": "ground",
        "service_domain": "indoor_tracking",
        "full_width": true,
        "rotation": 90.0,
        "theme": "dark",
        "color_mode": "by_name",
        "refresh_interval_ms": 2000,
    }))
    .unwrap();

    assert_eq!(config.title.as_deref(), Some("Ground floor"));
    assert_eq!(config.service_domain, "indoor_tracking");
    assert!(config.full_width);
    assert_eq!(config.rotation, 90.0);
    assert_eq!(config.theme, ThemePreference::Dark);
    assert_eq!(config.color_mode, ColorMode::ByName);
    assert_eq!(config.refresh_interval_ms, 2000);
}

#[test]
fn missing_floor_id_is_rejected() {
    let err = CardConfig::parse(&json!({ "title": "Nameless" })).unwrap_err();
    assert!(matches!(err, ConfigError::MissingFloorId));
}

#[test]
fn blank_floor_id_is_rejected() {
    let err = CardConfig::parse(&json!({ "floor_id": "   " })).unwrap_err();
    assert!(matches!(err, ConfigError::MissingFloorId));
}

#[test]
fn rotation_bounds_are_inclusive() {
    assert!(CardConfig::parse(&json!({ "floor_id": "g", "rotation": 0.0 })).is_ok());
    assert!(CardConfig::parse(&json!({ "floor_id": "g", "rotation": 360.0 })).is_ok());
}

#[test]
fn out_of_range_rotation_is_rejected() {
    let err = CardConfig::parse(&json!({ "floor_id": "g", "rotation": 361.0 })).unwrap_err();
    assert!(matches!(err, ConfigError::RotationOutOfRange(r) if r == 361.0));

    let err = CardConfig::parse(&json!({ "floor_id": "g", "rotation": -1.0 })).unwrap_err();
    assert!(matches!(err, ConfigError::RotationOutOfRange(_)));
}

#[test]
fn unknown_theme_value_is_malformed() {
    let err = CardConfig::parse(&json!({ "floor_id": "g", "theme": "sepia" })).unwrap_err();
    assert!(matches!(err, ConfigError::Malformed(_)));
}

#[test]
fn unknown_color_mode_is_malformed() {
    let err = CardConfig::parse(&json!({ "floor_id": "g", "color_mode": "rainbow" })).unwrap_err();
    assert!(matches!(err, ConfigError::Malformed(_)));
}

#[test]
fn non_object_config_is_malformed() {
    let err = CardConfig::parse(&json!("just a string")).unwrap_err();
    assert!(matches!(err, ConfigError::Malformed(_)));
}

// --- from_json (mount entry path) ---

#[test]
fn from_json_parses_a_raw_config_string() {
    let config = CardConfig::from_json(r#"{"floor_id": "ground", "rotation": 45.0}"#).unwrap();
    assert_eq!(config.floor_id, "ground");
    assert_eq!(config.rotation, 45.0);
}

#[test]
fn from_json_rejects_invalid_json_as_malformed() {
    let err = CardConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Malformed(_)));
}

#[test]
fn from_json_missing_floor_id_yields_the_inline_message() {
    // This exact text is what the mount path renders into the host element
    // when the config is rejected.
    let err = CardConfig::from_json("{}").unwrap_err();
    assert!(matches!(err, ConfigError::MissingFloorId));
    assert_eq!(err.to_string(), "floor_id is required");
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(ConfigError::MissingFloorId.to_string(), "floor_id is required");
    assert_eq!(
        ConfigError::RotationOutOfRange(400.0).to_string(),
        "rotation must be between 0 and 360, got 400"
    );
}
