use super::*;

fn effect() -> ParallaxEffect {
    ParallaxEffect::new(vec![
        ParallaxLayer::new(0.5, Vec2::new(10.0, 20.0)),
        ParallaxLayer::new(0.25, Vec2::ZERO),
    ])
}

#[test]
fn layers_start_at_their_initial_positions() {
    let p = effect();
    assert_eq!(p.positions(), &[Vec2::new(10.0, 20.0), Vec2::ZERO]);
    assert_eq!(p.focused_slide(), None);
}

#[test]
fn horizontal_scroll_shifts_layers_left_by_speed() {
    let mut p = effect();
    p.update(Direction::Horizontal, 0.5, 400.0);
    // content moved 200px left
    assert_eq!(p.positions(), &[Vec2::new(-90.0, 20.0), Vec2::new(-50.0, 0.0)]);
}

#[test]
fn vertical_scroll_measures_from_top() {
    let mut p = effect();
    p.update(Direction::Vertical, 1.0, 400.0);
    assert_eq!(p.positions(), &[Vec2::new(10.0, 20.0), Vec2::ZERO]);

    p.update(Direction::Vertical, 0.0, 400.0);
    assert_eq!(p.positions(), &[Vec2::new(10.0, 220.0), Vec2::new(0.0, 100.0)]);
}

#[test]
fn negative_scrollable_range_is_ignored() {
    let mut p = effect();
    p.update(Direction::Horizontal, 1.0, -50.0);
    assert_eq!(p.positions()[0], Vec2::new(10.0, 20.0));
}

#[test]
fn layer_speed_defaults_when_missing_from_json() {
    let layer: ParallaxLayer = serde_json::from_str("{}").unwrap();
    assert_eq!(layer.speed, 0.5);
    assert_eq!(layer.initial, Vec2::ZERO);
}

#[test]
fn notifications_record_focused_slide() {
    let mut p = effect();
    p.on_slide_changed(&SlideChange {
        index: 2,
        slide_count: 3,
    });
    assert_eq!(p.focused_slide(), Some(2));
}
