use super::*;

#[test]
fn direction_picks_axis_extent() {
    let s = Size::new(120.0, 40.0);
    assert_eq!(Direction::Horizontal.extent(s), 120.0);
    assert_eq!(Direction::Vertical.extent(s), 40.0);
    assert_eq!(Direction::Vertical.along(-5.0), Vec2::new(0.0, -5.0));
    assert_eq!(Direction::Horizontal.component(Vec2::new(3.0, 9.0)), 3.0);
}

#[test]
fn defaults_match_component_inspector_values() {
    let cfg = ScrollConfig::default();
    assert_eq!(cfg.direction, Direction::Horizontal);
    assert!(cfg.enable_snapping);
    assert_eq!(cfg.snap_speed, 10.0);
    assert!(!cfg.center_elements);
    assert_eq!(cfg.item_spacing, 20.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn missing_json_fields_fall_back_to_defaults() {
    let cfg: ScrollConfig =
        serde_json::from_str(r#"{ "direction": "Vertical", "center_elements": true }"#).unwrap();
    assert_eq!(cfg.direction, Direction::Vertical);
    assert!(cfg.center_elements);
    assert_eq!(cfg.snap_speed, 10.0);
    assert_eq!(cfg.item_spacing, 20.0);
}

#[test]
fn validate_rejects_non_positive_snap_speed() {
    for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let cfg = ScrollConfig {
            snap_speed: speed,
            ..ScrollConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ScrollError::Validation(_))));
    }
}

#[test]
fn validate_rejects_negative_spacing() {
    let cfg = ScrollConfig {
        item_spacing: -0.5,
        ..ScrollConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn axis_copies_layout_fields() {
    let cfg = ScrollConfig {
        direction: Direction::Vertical,
        center_elements: true,
        item_spacing: 4.0,
        ..ScrollConfig::default()
    };
    let axis = cfg.axis();
    assert_eq!(axis.direction, Direction::Vertical);
    assert!(axis.center_elements);
    assert_eq!(axis.item_spacing, 4.0);
}
