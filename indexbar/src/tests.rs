use crate::*;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Point, Rect, Shape, Size};

fn bar_with(titles: &[&str], size: Size) -> IndexBar {
    let mut bar = IndexBar::new(IndexBarOptions::default());
    bar.set_size(size);
    assert!(bar.set_data(titles.iter().copied()));
    bar
}

fn abc() -> IndexBar {
    bar_with(&["A", "B", "C"], Size::new(20.0, 300.0))
}

fn alphabet() -> Vec<String> {
    ('A'..='Z').map(String::from).collect()
}

fn record_selections(bar: &mut IndexBar) -> Rc<RefCell<Vec<usize>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    bar.set_on_section_selected(Some({
        let log = Rc::clone(&log);
        move |i: usize| log.borrow_mut().push(i)
    }));
    log
}

fn selected_count(bar: &IndexBar) -> usize {
    bar.markers().iter().filter(|m| m.is_selected()).count()
}

fn at(y: f64) -> Point {
    Point::new(5.0, y)
}

#[test]
fn set_data_creates_one_marker_per_title_and_selects_first() {
    let bar = bar_with(&["A", "B", "C", "D"], Size::new(20.0, 300.0));
    assert!(bar.is_ready());
    assert_eq!(bar.len(), 4);
    assert_eq!(bar.selected_index(), Some(0));
    assert_eq!(bar.last_selected_index(), None);
    assert_eq!(bar.markers()[0].state, SectionState::Selected);
    assert_eq!(selected_count(&bar), 1);
    let titles: Vec<_> = bar.markers().iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["A", "B", "C", "D"]);
}

#[test]
fn set_data_notifies_initial_selection() {
    let mut bar = IndexBar::default();
    bar.set_size(Size::new(20.0, 300.0));
    let log = record_selections(&mut bar);
    bar.set_data(["A", "B"]);
    assert_eq!(*log.borrow(), [0]);
}

#[test]
fn empty_titles_are_ignored() {
    let mut bar = IndexBar::default();
    assert!(!bar.set_data(Vec::<String>::new()));
    assert!(!bar.is_ready());
    assert_eq!(bar.selected_index(), None);

    let mut bar = abc();
    bar.touch_moved(at(145.0), 0);
    assert!(!bar.set_data(Vec::<&str>::new()));
    assert_eq!(bar.len(), 3);
    assert_eq!(bar.selected_index(), Some(1));
}

#[test]
fn layout_centers_stack_when_it_fits() {
    let bar = abc();
    assert_eq!(bar.content_height(), 60.0);
    assert_eq!(bar.leading_offset(), 120.0);
    assert_eq!(bar.markers()[0].rect, Rect::new(0.0, 120.0, 16.0, 136.0));
    assert_eq!(bar.markers()[1].rect, Rect::new(0.0, 140.0, 16.0, 156.0));
    assert_eq!(bar.markers()[2].rect, Rect::new(0.0, 160.0, 16.0, 176.0));
}

#[test]
fn layout_overflows_from_top_when_stack_does_not_fit() {
    let titles = alphabet();
    let mut bar = IndexBar::default();
    bar.set_size(Size::new(20.0, 100.0));
    bar.set_data(titles);

    assert_eq!(bar.content_height(), 26.0 * 20.0);
    assert_eq!(bar.leading_offset(), 0.0);
    assert_eq!(bar.markers()[0].rect.y0, 0.0);
    // Not compressed: the last marker sits far below the bottom edge.
    assert_eq!(bar.markers()[25].rect.y0, 500.0);
    assert_eq!(bar.markers()[25].rect.height(), 16.0);
}

#[test]
fn layout_with_exact_fit_starts_at_top() {
    let bar = bar_with(&["A", "B", "C"], Size::new(20.0, 60.0));
    assert_eq!(bar.leading_offset(), 0.0);
}

#[test]
fn touch_maps_points_to_marker_bands() {
    let bar = abc();
    assert_eq!(bar.section_at_point(at(125.0)), Some(0));
    assert_eq!(bar.section_at_point(at(145.0)), Some(1));
    assert_eq!(bar.section_at_point(at(175.0)), Some(2));

    // Spacing and the slack above the stack snap to the next marker down.
    assert_eq!(bar.section_at_point(at(137.0)), Some(1));
    assert_eq!(bar.section_at_point(at(10.0)), Some(0));

    // The band edge belongs to the next marker.
    assert_eq!(bar.section_at_point(at(136.0)), Some(1));

    // Below the last marker nothing matches.
    assert_eq!(bar.section_at_point(at(200.0)), None);
}

#[test]
fn touch_selects_section_and_reports_jump() {
    let mut bar = abc();
    let jump = bar.touch_moved(at(145.0), 0).unwrap();
    assert_eq!(jump.index, 1);
    assert_eq!(jump.title, "B");
    assert_eq!(bar.selected_index(), Some(1));
    assert_eq!(bar.last_selected_index(), Some(1));
    assert_eq!(bar.markers()[0].state, SectionState::Normal);
    assert_eq!(bar.markers()[1].state, SectionState::Selected);
    assert_eq!(selected_count(&bar), 1);
}

#[test]
fn first_touch_on_initial_section_still_jumps() {
    let mut bar = abc();
    let log = record_selections(&mut bar);
    let jump = bar.touch_began(at(125.0), 0).unwrap();
    assert_eq!(jump.index, 0);
    // Marker 0 was already selected by `set_data`.
    assert!(log.borrow().is_empty());
}

#[test]
fn retouching_selected_section_is_idempotent() {
    let mut bar = abc();
    let log = record_selections(&mut bar);

    assert!(bar.touch_began(at(141.0), 0).is_some());
    for y in [142.0, 145.0, 150.0, 155.5] {
        assert!(bar.touch_moved(at(y), 0).is_none());
    }
    assert!(bar.touch_ended(at(150.0), 0).is_none());

    assert_eq!(*log.borrow(), [1]);
    assert_eq!(bar.selected_index(), Some(1));
    assert_eq!(selected_count(&bar), 1);
}

#[test]
fn dragging_across_sections_notifies_each_change_once() {
    let mut bar = abc();
    let log = record_selections(&mut bar);

    let mut jumps = Vec::new();
    for y in [125.0, 130.0, 145.0, 150.0, 165.0, 170.0, 150.0, 125.0] {
        if let Some(j) = bar.touch_moved(at(y), 0) {
            jumps.push(j.index);
        }
    }

    assert_eq!(jumps, [0, 1, 2, 1, 0]);
    assert_eq!(*log.borrow(), [1, 2, 1, 0]);
}

#[test]
fn out_of_bounds_touches_never_change_selection() {
    let mut bar = abc();
    bar.touch_moved(at(145.0), 0);
    let log = record_selections(&mut bar);

    for p in [
        Point::new(5.0, 0.0),
        Point::new(5.0, -10.0),
        Point::new(5.0, 300.5),
        Point::new(20.5, 125.0),
        Point::new(5.0, f64::NAN),
    ] {
        assert!(bar.touch_moved(p, 0).is_none());
        assert_eq!(bar.selected_index(), Some(1));
        assert_eq!(bar.last_selected_index(), Some(1));
    }
    assert!(log.borrow().is_empty());
}

#[test]
fn mapping_is_monotonic_in_y() {
    for height in [100.0, 300.0, 800.0] {
        let mut bar = IndexBar::default();
        bar.set_size(Size::new(20.0, height));
        bar.set_data(alphabet());

        let mut prev: Option<usize> = None;
        let mut y = 0.25;
        while y <= height {
            if let Some(i) = bar.section_at_point(at(y)) {
                if let Some(p) = prev {
                    assert!(i >= p, "y={y} mapped to {i} after {p}");
                }
                prev = Some(i);
            }
            y += 0.25;
        }
        assert!(prev.is_some());
    }
}

#[test]
fn host_sync_ignores_programmatic_and_idle_scrolls() {
    let mut bar = abc();
    let log = record_selections(&mut bar);

    for phase in [ScrollPhase::Idle, ScrollPhase::Animating] {
        let applied = bar.sync_from_host(&ScrollSync {
            section: Some(2),
            phase,
        });
        assert!(!applied);
    }
    assert_eq!(bar.selected_index(), Some(0));
    assert!(log.borrow().is_empty());
}

#[test]
fn host_sync_mirrors_user_scrolls() {
    let mut bar = abc();
    let log = record_selections(&mut bar);

    assert!(bar.sync_from_host(&ScrollSync {
        section: Some(2),
        phase: ScrollPhase::Dragging,
    }));
    assert!(bar.sync_from_host(&ScrollSync {
        section: Some(2),
        phase: ScrollPhase::Decelerating,
    }));
    assert!(bar.sync_from_host(&ScrollSync {
        section: Some(1),
        phase: ScrollPhase::Decelerating,
    }));

    assert_eq!(bar.selected_index(), Some(1));
    assert_eq!(selected_count(&bar), 1);
    assert_eq!(*log.borrow(), [2, 1]);

    assert_eq!(bar.last_selected_index(), None);
}

#[test]
fn touch_after_host_sync_jumps_to_section_start() {
    let mut bar = abc();
    let log = record_selections(&mut bar);
    bar.sync_from_host(&ScrollSync {
        section: Some(1),
        phase: ScrollPhase::Dragging,
    });

    let jump = bar.touch_began(at(145.0), 0).unwrap();
    assert_eq!(jump.index, 1);
    assert!(bar.bubble().unwrap().is_visible());
    assert_eq!(bar.last_selected_index(), Some(1));
    // Already selected by the sync, so no second notification.
    assert_eq!(*log.borrow(), [1]);

    assert!(bar.touch_moved(at(150.0), 0).is_none());
}

#[test]
fn host_sync_rejects_unknown_sections() {
    let mut bar = abc();
    for section in [None, Some(3), Some(usize::MAX)] {
        assert!(!bar.sync_from_host(&ScrollSync {
            section,
            phase: ScrollPhase::Dragging,
        }));
    }
    assert_eq!(bar.selected_index(), Some(0));
}

#[test]
fn select_section_is_bounds_checked() {
    let mut bar = abc();
    assert!(bar.select_section(2));
    assert_eq!(bar.selected_index(), Some(2));
    assert!(!bar.select_section(3));
    assert_eq!(bar.selected_index(), Some(2));
    assert_eq!(selected_count(&bar), 1);
}

#[test]
fn second_set_data_rebuilds_from_scratch() {
    let mut bar = bar_with(&["A", "B", "C", "D", "E"], Size::new(20.0, 300.0));
    bar.touch_moved(at(130.0), 0);
    bar.touch_moved(at(150.0), 0);
    assert_eq!(bar.selected_index(), Some(2));

    let log = record_selections(&mut bar);
    assert!(bar.set_data(["X", "Y"]));

    assert_eq!(bar.len(), 2);
    assert_eq!(bar.selected_index(), Some(0));
    assert_eq!(bar.last_selected_index(), None);
    assert_eq!(selected_count(&bar), 1);
    assert_eq!(bar.markers()[1].title, "Y");
    assert_eq!(bar.leading_offset(), (300.0 - 40.0) / 2.0);
    assert_eq!(*log.borrow(), [0]);
}

#[test]
fn options_before_data_defer_layout() {
    let mut bar = IndexBar::default();
    bar.set_size(Size::new(30.0, 300.0));
    bar.update_options(|o| {
        o.section_size = 20.0;
        o.section_spacing = 10.0;
    });
    assert!(!bar.is_ready());
    assert!(bar.markers().is_empty());

    bar.set_data(["A", "B"]);
    assert_eq!(bar.content_height(), 60.0);
    assert_eq!(bar.markers()[1].rect, Rect::new(0.0, 150.0, 20.0, 170.0));
}

#[test]
fn options_after_data_rebuild_and_reselect_first() {
    let mut bar = abc();
    bar.touch_moved(at(165.0), 0);
    let log = record_selections(&mut bar);

    bar.update_options(|o| o.section_spacing = 14.0);
    assert_eq!(bar.content_height(), 90.0);
    assert_eq!(bar.leading_offset(), 105.0);
    assert_eq!(bar.selected_index(), Some(0));
    assert_eq!(bar.last_selected_index(), None);
    assert_eq!(*log.borrow(), [0]);

    // Already on 0: a rebuild is not a distinct change.
    bar.set_options(bar.options().clone().with_section_size(12.0));
    assert_eq!(*log.borrow(), [0]);
    assert_eq!(bar.markers()[0].rect.width(), 12.0);
}

#[test]
fn invalid_lengths_are_sanitized() {
    let mut bar = IndexBar::new(
        IndexBarOptions::new()
            .with_section_size(-3.0)
            .with_section_spacing(f64::NAN),
    );
    assert_eq!(bar.options().section_size, 0.0);
    assert_eq!(bar.options().section_spacing, 0.0);
    bar.set_size(Size::new(20.0, 100.0));
    bar.set_data(["A"]);
    assert_eq!(bar.content_height(), 0.0);
}

#[test]
fn resize_relayouts_and_keeps_selection() {
    let mut bar = abc();
    bar.touch_moved(at(145.0), 0);
    bar.set_size(Size::new(20.0, 100.0));

    assert_eq!(bar.leading_offset(), 20.0);
    assert_eq!(bar.markers()[0].rect.y0, 20.0);
    assert_eq!(bar.selected_index(), Some(1));
    assert_eq!(bar.last_selected_index(), Some(1));
}

#[test]
fn marker_style_follows_state() {
    let mut bar = abc();
    bar.touch_moved(at(145.0), 0);

    let normal = bar.marker_style(0).unwrap();
    assert_eq!(normal.text_color, Color::LIGHT_GRAY);
    assert_eq!(normal.background_color, Color::TRANSPARENT);
    assert_eq!(normal.corner_radius, 8.0);
    assert_eq!(normal.font.size, 10.0);

    let selected = bar.marker_style(1).unwrap();
    assert_eq!(selected.text_color, Color::WHITE);
    assert_eq!(selected.background_color, Color::BLUE);

    assert!(bar.marker_style(3).is_none());
}

#[test]
fn bubble_follows_touch_height_and_fades_on_release() {
    let mut bar = abc();
    let bubble = bar.bubble().unwrap();
    assert!(!bubble.is_visible());
    assert_eq!(bubble.center(), Point::new(-50.0, 30.0));

    let jump = bar.touch_began(at(147.0), 1_000).unwrap();
    assert_eq!(jump.bubble_anchor, Point::new(-50.0, 147.0));
    let bubble = bar.bubble().unwrap();
    assert_eq!(bubble.text(), "B");
    assert_eq!(bubble.center(), Point::new(-50.0, 147.0));
    assert_eq!(bubble.opacity(), 1.0);

    // Same section: the bubble stays where it was.
    bar.touch_moved(at(150.0), 1_010);
    assert_eq!(bar.bubble().unwrap().center().y, 147.0);

    bar.touch_moved(at(165.0), 1_020);
    assert_eq!(bar.bubble().unwrap().text(), "C");

    bar.touch_ended(at(165.0), 1_100);
    assert!(bar.bubble().unwrap().is_fading());
    assert_eq!(bar.bubble().unwrap().opacity(), 1.0);

    assert!(bar.tick(1_200));
    assert!((bar.bubble().unwrap().opacity() - 0.5).abs() < 1e-9);

    assert!(!bar.tick(1_300));
    let bubble = bar.bubble().unwrap();
    assert!(!bubble.is_visible());
    assert!(!bubble.is_fading());
}

#[test]
fn cancelled_touch_hides_bubble() {
    let mut bar = abc();
    bar.touch_began(at(145.0), 0);
    bar.touch_cancelled(0);
    assert!(bar.bubble().unwrap().is_fading());
    bar.tick(500);
    assert!(!bar.bubble().unwrap().is_visible());
}

#[test]
fn show_during_fade_restores_bubble() {
    let mut bubble = BubbleOverlay::new(BubbleOptions::default());
    bubble.show("A", Point::new(-50.0, 100.0));
    bubble.hide(0);
    bubble.tick(100);
    assert!(bubble.opacity() < 1.0);

    bubble.show("B", Point::new(-50.0, 120.0));
    assert!(!bubble.is_fading());
    assert_eq!(bubble.opacity(), 1.0);
    assert_eq!(bubble.text(), "B");
    assert_eq!(bubble.rect(), Rect::new(-80.0, 90.0, -20.0, 150.0));

    // Hiding an already hidden bubble is a no-op.
    bubble.hide_now();
    bubble.hide(200);
    assert!(!bubble.is_fading());
}

#[test]
fn bubble_can_be_disabled() {
    let mut bar = IndexBar::new(IndexBarOptions::new().with_show_bubble(false));
    bar.set_size(Size::new(20.0, 300.0));
    bar.set_data(["A", "B", "C"]);
    assert!(bar.bubble().is_none());

    let jump = bar.touch_moved(at(145.0), 0).unwrap();
    assert_eq!(jump.bubble_anchor, Point::new(8.0, 145.0));
    assert!(!bar.tick(100));

    bar.update_options(|o| o.show_bubble = true);
    assert!(bar.bubble().is_some());
}

#[test]
fn bubble_path_has_pointer_and_round_body() {
    let path = bubble_path(Size::new(60.0, 60.0));
    let r = (15.0f64 * 15.0 * 2.0).sqrt();

    let bbox = path.bounding_box();
    assert!((bbox.x0 - (30.0 - r)).abs() < 0.5);
    assert!((bbox.x1 - 60.0).abs() < 1e-9);
    assert!((bbox.y0 - (30.0 - r)).abs() < 0.5);
    assert!((bbox.y1 - (30.0 + r)).abs() < 0.5);

    assert!(path.contains(Point::new(30.0, 30.0)));
    assert!(path.contains(Point::new(57.0, 30.0)));
    assert!(path.contains(Point::new(12.0, 30.0)));
    assert!(!path.contains(Point::new(58.0, 12.0)));
    assert!(!path.contains(Point::new(2.0, 2.0)));

    let degenerate = bubble_path(Size::ZERO);
    assert!(degenerate.bounding_box().area() == 0.0);
}

#[test]
fn tween_clamps_and_eases() {
    let t = Tween::new(1.0, 0.0, 100, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert!(t.is_done(101));

    let t = Tween::new(0.0, 10.0, 0, 100, Easing::SmoothStep);
    assert_eq!(t.sample(0), 0.0);
    assert_eq!(t.sample(50), 5.0);
    assert_eq!(t.sample(1_000), 10.0);
    assert!(t.sample(25) < 2.5);

    let mut t = Tween::new(0.0, 10.0, 0, 100, Easing::EaseInOutCubic);
    t.retarget(50, 20.0, 100);
    assert_eq!(t.from, 5.0);
    assert_eq!(t.to, 20.0);
    assert_eq!(t.start_ms, 50);
}

#[test]
fn tween_step_finishes_on_exact_end_value() {
    let t = Tween::new(1.0, 0.0, 0, 200, Easing::EaseInOutCubic);
    assert_eq!(t.step(0), TweenStep::Running(1.0));
    assert!(matches!(t.step(100), TweenStep::Running(v) if v > 0.0 && v < 1.0));
    assert_eq!(t.step(200), TweenStep::Finished(0.0));
    assert_eq!(t.step(5_000).value(), 0.0);
}
