use super::*;

#[test]
fn ready_creates_one_toggle_per_slide() {
    let mut t = ToggleIndicators::new();
    assert!(t.is_empty());
    t.on_slides_ready(4, 0);
    assert_eq!(t.len(), 4);
    assert_eq!(t.selected(), Some(0));
}

#[test]
fn re_ready_replaces_previous_toggles() {
    let mut t = ToggleIndicators::new();
    t.on_slides_ready(5, 3);
    t.on_slides_ready(2, 0);
    assert_eq!(t.len(), 2);
    assert_eq!(t.selected(), Some(0));
}

#[test]
fn slide_change_moves_selection() {
    let mut t = ToggleIndicators::new();
    t.on_slides_ready(3, 0);
    t.on_slide_changed(&SlideChange {
        index: 2,
        slide_count: 3,
    });
    assert_eq!(t.selected(), Some(2));
}

#[test]
fn out_of_range_change_keeps_selection() {
    let mut t = ToggleIndicators::new();
    t.on_slides_ready(3, 1);
    t.on_slide_changed(&SlideChange {
        index: 9,
        slide_count: 3,
    });
    assert_eq!(t.selected(), Some(1));
}

#[test]
fn select_fires_only_for_toggles_that_were_off() {
    let mut t = ToggleIndicators::new();
    t.on_slides_ready(3, 0);
    assert_eq!(t.select(0), None);
    assert_eq!(t.select(2), Some(NavCommand::Slide(2)));
    assert_eq!(t.select(3), None);
}

#[test]
fn cleared_slides_drop_all_toggles() {
    let mut t = ToggleIndicators::new();
    t.on_slides_ready(3, 1);
    t.on_slides_cleared();
    assert!(t.is_empty());
    assert_eq!(t.select(0), None);
}
