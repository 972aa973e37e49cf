use super::*;
use crate::{foundation::core::AxisConfig, layout::arrange::arrange};

#[test]
fn starts_at_left_and_top() {
    let vp = VirtualViewport::new(Size::new(300.0, 200.0), vec![Size::new(100.0, 100.0)]);
    assert_eq!(vp.normalized_position(Direction::Horizontal), 0.0);
    assert_eq!(vp.normalized_position(Direction::Vertical), 1.0);
    assert_eq!(vp.content(), Size::new(300.0, 200.0));
}

#[test]
fn apply_arrangement_writes_offsets_and_content_extent() {
    let sizes = vec![Size::new(100.0, 100.0); 3];
    let mut vp = VirtualViewport::new(Size::new(300.0, 200.0), sizes.clone());
    let axis = AxisConfig {
        direction: Direction::Vertical,
        center_elements: false,
        item_spacing: 10.0,
    };
    let a = arrange(&sizes, 200.0, &axis).unwrap();
    vp.apply_arrangement(&a);

    assert_eq!(
        vp.element_offsets(),
        &[
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, -110.0),
            Vec2::new(0.0, -220.0)
        ]
    );
    assert_eq!(vp.content_size(Direction::Vertical), 320.0);
    assert_eq!(vp.content_size(Direction::Horizontal), 300.0);
}

#[test]
fn positions_are_tracked_per_axis() {
    let mut vp = VirtualViewport::new(Size::new(10.0, 10.0), vec![]);
    vp.set_normalized_position(Direction::Horizontal, 0.4);
    assert_eq!(vp.normalized_position(Direction::Horizontal), 0.4);
    assert_eq!(vp.normalized_position(Direction::Vertical), 1.0);
}

#[test]
fn set_elements_resets_offsets() {
    let mut vp = VirtualViewport::new(Size::new(10.0, 10.0), vec![Size::new(1.0, 1.0)]);
    vp.set_elements(vec![Size::new(2.0, 2.0); 4]);
    assert_eq!(vp.element_sizes().len(), 4);
    assert_eq!(vp.element_offsets().len(), 4);
}
