use super::*;

fn slides(n: usize, w: f64, h: f64) -> Vec<Size> {
    vec![Size::new(w, h); n]
}

fn axis(direction: Direction, center_elements: bool, item_spacing: f64) -> AxisConfig {
    AxisConfig {
        direction,
        center_elements,
        item_spacing,
    }
}

fn positions(a: &Arrangement) -> Vec<f64> {
    a.elements.iter().map(|e| e.position).collect()
}

#[test]
fn uncentered_row_uses_item_spacing() {
    let a = arrange(
        &slides(3, 100.0, 50.0),
        300.0,
        &axis(Direction::Horizontal, false, 20.0),
    )
    .unwrap();
    assert_eq!(positions(&a), vec![0.0, 120.0, 240.0]);
    assert_eq!(a.content_size, 340.0);
    assert_eq!(a.len(), 3);
}

#[test]
fn centered_row_spaces_by_both_margins() {
    // margin = (300 - 100) / 2 = 100, spacing = 200
    let a = arrange(
        &slides(3, 100.0, 50.0),
        300.0,
        &axis(Direction::Horizontal, true, 20.0),
    )
    .unwrap();
    assert_eq!(positions(&a), vec![100.0, 400.0, 700.0]);
    assert_eq!(a.content_size, 700.0);
}

#[test]
fn vertical_positions_are_negative_offsets_from_top() {
    let a = arrange(
        &slides(3, 50.0, 100.0),
        300.0,
        &axis(Direction::Vertical, false, 20.0),
    )
    .unwrap();
    assert_eq!(positions(&a), vec![0.0, -120.0, -240.0]);
    assert_eq!(a.content_size, 340.0);
    assert_eq!(a.offset_for(1), Vec2::new(0.0, -120.0));
}

#[test]
fn vertical_axis_reads_heights_not_widths() {
    let sizes = vec![Size::new(999.0, 10.0), Size::new(1.0, 30.0)];
    let a = arrange(&sizes, 100.0, &axis(Direction::Vertical, false, 5.0)).unwrap();
    assert_eq!(positions(&a), vec![0.0, -15.0]);
    assert_eq!(a.content_size, 45.0);
}

#[test]
fn content_size_is_extents_plus_gaps_for_mixed_sizes() {
    let widths = [37.0, 120.0, 8.0, 64.0, 250.0];
    let sizes: Vec<Size> = widths.iter().map(|&w| Size::new(w, 10.0)).collect();
    let spacing = 12.0;
    let a = arrange(&sizes, 200.0, &axis(Direction::Horizontal, false, spacing)).unwrap();

    let expected = widths.iter().sum::<f64>() + spacing * (widths.len() - 1) as f64;
    assert_eq!(a.content_size, expected);

    let mut cursor = 0.0;
    for (e, w) in a.elements.iter().zip(widths) {
        assert_eq!(e.position, cursor);
        cursor += w + spacing;
    }
}

#[test]
fn single_element_has_no_trailing_spacing() {
    let a = arrange(
        &slides(1, 80.0, 80.0),
        300.0,
        &axis(Direction::Horizontal, false, 20.0),
    )
    .unwrap();
    assert_eq!(positions(&a), vec![0.0]);
    assert_eq!(a.content_size, 80.0);
}

#[test]
fn oversized_element_gets_no_negative_margin() {
    assert_eq!(centering_margin(100.0, 300.0, true), 0.0);
    assert_eq!(centering_margin(300.0, 100.0, false), 0.0);
    assert_eq!(centering_margin(300.0, 100.0, true), 100.0);

    let a = arrange(
        &slides(2, 300.0, 10.0),
        100.0,
        &axis(Direction::Horizontal, true, 20.0),
    )
    .unwrap();
    assert_eq!(positions(&a), vec![0.0, 300.0]);
    assert_eq!(a.content_size, 600.0);
}

#[test]
fn empty_input_reports_no_elements() {
    let err = arrange(&[], 300.0, &AxisConfig::default()).unwrap_err();
    assert!(matches!(err, ScrollError::NoElements));
}

#[test]
fn offset_for_unknown_index_is_zero() {
    let a = arrange(&slides(2, 10.0, 10.0), 10.0, &AxisConfig::default()).unwrap();
    assert_eq!(a.offset_for(9), Vec2::ZERO);
}
