// Example: a headless table and an index bar kept in sync in both directions.
use std::cell::RefCell;
use std::rc::Rc;

use indexbar::kurbo::{Point, Size};
use indexbar::{Easing, IndexBarOptions};
use indexbar_adapter::{Controller, ImpactStyle, SectionTable};

fn main() {
    let table = Rc::new(RefCell::new(
        SectionTable::new([4, 7, 2, 9, 5], 44.0, 28.0, 400.0)
            .with_animation(240, Easing::EaseInOutCubic),
    ));

    let mut c = Controller::new(IndexBarOptions::default())
        .with_haptics(|style: ImpactStyle| println!("haptic={style:?}"));
    c.set_size(Size::new(20.0, 400.0));
    c.set_on_section_selected(Some(|i: usize| println!("selected={i}")));
    c.set_data(["A", "B", "C", "D", "E"], &table);

    // Bar -> list: touch the fourth marker and let the list animate.
    let y = c.index_bar().marker(3).map_or(0.0, |m| m.rect.center().y);
    c.touch_began(Point::new(10.0, y), 0);
    c.touch_ended(Point::new(10.0, y), 0);

    let mut now_ms = 0u64;
    loop {
        now_ms += 16;
        let scrolling = table.borrow_mut().tick(now_ms);
        let fading = c.tick(now_ms);
        if !scrolling && !fading {
            break;
        }
    }
    println!("after jump: offset={} t={now_ms}", table.borrow().offset());

    // List -> bar: drag the list back to the top.
    for off in (0..=300).rev().step_by(50) {
        table.borrow_mut().drag_to(off as f64);
    }
    table.borrow_mut().end_drag(false);
    println!(
        "after drag: selected={:?}",
        c.index_bar().selected_marker().map(|m| m.title.as_str())
    );
}
