//! Pure layout math for the index track.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

/// Total height of `count` markers including the trailing spacing of each.
pub fn content_height(count: usize, section_size: f64, section_spacing: f64) -> f64 {
    (section_size + section_spacing) * count as f64
}

/// Top offset of the first marker.
///
/// The stack is centered when it fits; otherwise it starts at the top and overflows past the
/// bottom edge without being compressed.
pub fn leading_offset(available_height: f64, content_height: f64) -> f64 {
    let slack = available_height - content_height;
    if slack > 0.0 { slack / 2.0 } else { 0.0 }
}

/// Frames of `count` markers stacked in a control of the given size.
pub fn marker_rects(count: usize, size: Size, section_size: f64, section_spacing: f64) -> Vec<Rect> {
    let content = content_height(count, section_size, section_spacing);
    let mut y = leading_offset(size.height, content);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(Rect::from_origin_size(
            Point::new(0.0, y),
            Size::new(section_size, section_size),
        ));
        y += section_size + section_spacing;
    }
    out
}

/// Maps a touch to a marker index.
///
/// Points right of the control, below it, or at/above its top edge are rejected. Otherwise the
/// first marker whose bottom edge lies below `point.y` wins, so a touch in the spacing (or above
/// a centered stack) snaps to the next marker down. Returns `None` below the last marker.
pub fn section_at_point(
    rects: impl IntoIterator<Item = Rect>,
    bounds: Size,
    point: Point,
) -> Option<usize> {
    if point.x > bounds.width || point.y > bounds.height || point.y <= 0.0 {
        return None;
    }
    rects.into_iter().position(|r| point.y < r.max_y())
}
