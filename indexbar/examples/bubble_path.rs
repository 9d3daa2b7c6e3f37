// Example: print the bubble silhouette as SVG path data.
use indexbar::kurbo::{Shape, Size};
use indexbar::{BubbleOptions, bubble_path};

fn main() {
    let rect = BubbleOptions::default().rect;
    let path = bubble_path(rect.size());
    println!("frame={rect:?}");
    println!("bbox={:?}", path.bounding_box());
    println!("svg={}", path.to_svg());

    let tall = bubble_path(Size::new(60.0, 90.0));
    println!("tall_bbox={:?}", tall.bounding_box());
}
