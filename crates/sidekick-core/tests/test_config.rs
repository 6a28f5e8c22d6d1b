use sidekick_core::animate::{AnimationKind, AnimationRequest, Easing};
use sidekick_core::compare::ComparisonMode;
use sidekick_core::config::SidekickConfig;
use sidekick_core::error::SidekickError;

#[test]
fn test_defaults_are_valid() {
    let config = SidekickConfig::default();
    config.validate().unwrap();

    assert_eq!(config.animation.kind, AnimationKind::ZoomIn);
    assert_eq!(config.animation.easing, Easing::EaseOut);
    assert_eq!(config.animation.fps, 30);
    assert_eq!(config.comparison.mode, ComparisonMode::SideBySide);
    assert_eq!(config.comparison.label_a, "Image A");
    assert!(config.line_art.auto_contrast);
    assert!(!config.line_art.smooth_lines);
    assert_eq!(config.processing.max_image_size, 2048);
}

#[test]
fn test_empty_document_yields_defaults() {
    let config: SidekickConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, SidekickConfig::default());
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let json = r#"{ "animation": { "fps": 12, "kind": "pan_left" } }"#;
    let config: SidekickConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.animation.fps, 12);
    assert_eq!(config.animation.kind, AnimationKind::PanLeft);
    assert_eq!(config.animation.duration, 2.0);
    assert_eq!(config.comparison, SidekickConfig::default().comparison);
}

#[test]
fn test_loop_flag_uses_loop_key() {
    let request: AnimationRequest = serde_json::from_str(r#"{ "loop": true }"#).unwrap();
    assert!(request.looped);

    let value = serde_json::to_value(AnimationRequest::default()).unwrap();
    assert_eq!(value["loop"], false);
    assert_eq!(value["easing"], "ease_out");
    assert_eq!(value["kind"], "zoom_in");
}

#[test]
fn test_config_round_trips_through_json() {
    let mut config = SidekickConfig::default();
    config.comparison.mode = ComparisonMode::Grid;
    config.line_art.threshold = 0.4;

    let text = serde_json::to_string(&config).unwrap();
    let back: SidekickConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_unknown_enum_name_fails_to_parse() {
    let json = r#"{ "comparison": { "mode": "checkerboard" } }"#;
    assert!(serde_json::from_str::<SidekickConfig>(json).is_err());
}

#[test]
fn test_validate_rejects_out_of_range_values() {
    let mut config = SidekickConfig::default();
    config.comparison.overlay_opacity = 2.0;
    assert!(matches!(
        config.validate().unwrap_err(),
        SidekickError::InvalidRequest(_)
    ));

    let mut config = SidekickConfig::default();
    config.animation.duration = 0.0;
    assert!(config.validate().is_err());

    let mut config = SidekickConfig::default();
    config.processing.max_image_size = 0;
    assert!(config.validate().is_err());
}
