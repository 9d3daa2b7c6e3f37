use alloc::string::String;
use core::f64::consts::PI;

use kurbo::{Arc, BezPath, Point, Rect, Size, Vec2};

use crate::{BubbleOptions, Tween, TweenStep};

const ARC_TOLERANCE: f64 = 0.1;

/// Headless state of the preview bubble.
///
/// `show` applies immediately; `hide` starts a fade that the adapter advances with `tick`.
///
/// There is intentionally no `Deserialize` impl: a bubble is always created from
/// [`BubbleOptions`] by its index bar.
#[derive(Clone, Debug)]
pub struct BubbleOverlay {
    options: BubbleOptions,
    text: String,
    center: Point,
    opacity: f64,
    fade: Option<Tween>,
}

impl BubbleOverlay {
    /// Creates a hidden bubble centered in its resting frame.
    pub fn new(options: BubbleOptions) -> Self {
        let center = options.rect.center();
        Self {
            options,
            text: String::new(),
            center,
            opacity: 0.0,
            fade: None,
        }
    }

    pub fn options(&self) -> &BubbleOptions {
        &self.options
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Current frame: the resting size around the current center.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, self.options.rect.size())
    }

    /// The `x` the bubble rests at; touches only move it vertically.
    pub fn resting_center_x(&self) -> f64 {
        self.options.rect.center().x
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Shows `text` centered at `anchor`. Cancels a running fade.
    pub fn show(&mut self, text: &str, anchor: Point) {
        itrace!(text, x = anchor.x, y = anchor.y, "BubbleOverlay::show");
        self.text.clear();
        self.text.push_str(text);
        self.center = anchor;
        self.fade = None;
        if self.opacity < 1.0 {
            self.opacity = 1.0;
        }
    }

    /// Starts fading out. Does nothing when already hidden or fading.
    pub fn hide(&mut self, now_ms: u64) {
        if !self.is_visible() || self.fade.is_some() {
            return;
        }
        itrace!(now_ms, "BubbleOverlay::hide");
        self.fade = Some(Tween::new(
            self.opacity,
            0.0,
            now_ms,
            self.options.fade_duration_ms,
            self.options.fade_easing,
        ));
    }

    /// Hides without animating.
    pub fn hide_now(&mut self) {
        self.fade = None;
        self.opacity = 0.0;
    }

    /// Advances a running fade. Returns `true` while the bubble is still animating.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(fade) = self.fade else {
            return false;
        };
        match fade.step(now_ms) {
            TweenStep::Running(opacity) => {
                self.opacity = opacity.clamp(0.0, 1.0);
                true
            }
            TweenStep::Finished(_) => {
                self.opacity = 0.0;
                self.fade = None;
                false
            }
        }
    }

    /// Silhouette of the bubble in local coordinates (origin at the top-left of [`Self::rect`]).
    pub fn path(&self) -> BezPath {
        bubble_path(self.options.rect.size())
    }
}

/// Builds the speech-bubble outline for a frame of `size`: a pointer whose apex touches the
/// middle of the right edge, closed by a circular body through the pointer's two base corners.
pub fn bubble_path(size: Size) -> BezPath {
    let (w, h) = (size.width, size.height);
    let dx = w / 4.0;
    let dy = h / 4.0;
    let radius = (dx * dx + dy * dy).sqrt();
    let center = Point::new(w * 0.5, h * 0.5);

    let mut path = BezPath::new();
    path.move_to((w - dx, h * 0.5 - dy));
    path.line_to((w, h * 0.5));
    path.line_to((w - dx, h * 0.5 + dy));

    if radius > 0.0 {
        // (w/2 + dx, h/2 + dy) sits on the circle; sweep clockwise on screen (y down) through the
        // bottom, left and top tangent points back to (w/2 + dx, h/2 - dy).
        let start = dy.atan2(dx);
        let body = Arc::new(center, Vec2::new(radius, radius), start, 2.0 * PI - 2.0 * start, 0.0);
        path.extend(body.append_iter(ARC_TOLERANCE));
    }
    path.close_path();
    path
}
