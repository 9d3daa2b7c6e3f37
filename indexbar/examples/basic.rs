// Example: lay out an A-Z bar, then drag a finger down it.
use indexbar::kurbo::{Point, Size};
use indexbar::{IndexBar, IndexBarOptions};

fn main() {
    let mut bar = IndexBar::new(IndexBarOptions::default());
    bar.set_size(Size::new(20.0, 600.0));
    bar.set_on_section_selected(Some(|i: usize| println!("selected={i}")));

    let titles = (b'A'..=b'Z').map(|c| (c as char).to_string());
    bar.set_data(titles);
    println!(
        "markers={} content_height={} leading_offset={}",
        bar.len(),
        bar.content_height(),
        bar.leading_offset()
    );

    let mut now_ms = 0u64;
    let top = bar.leading_offset();
    bar.touch_began(Point::new(10.0, top + 1.0), now_ms);
    for step in 0..40 {
        now_ms += 16;
        let y = top + step as f64 * 8.0;
        if let Some(jump) = bar.touch_moved(Point::new(10.0, y), now_ms) {
            println!("t={now_ms} jump={} bubble_y={}", jump.title, jump.bubble_anchor.y);
        }
    }
    bar.touch_ended(Point::new(10.0, top + 320.0), now_ms);

    while bar.tick(now_ms) {
        now_ms += 16;
    }
    println!(
        "done: selected={:?} bubble_visible={:?}",
        bar.selected_marker().map(|m| m.title.as_str()),
        bar.bubble().map(|b| b.is_visible())
    );
}
