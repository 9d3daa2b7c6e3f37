use alloc::vec::Vec;

use indexbar::{Easing, ScrollPhase, Tween, TweenStep};
use kurbo::Point;

use crate::{ScrollChange, ScrollListener, ScrollObservers, SectionedList, SubscriptionId};

/// A headless sectioned list with fixed row and header heights.
///
/// This is a reference [`SectionedList`] for tests, demos and adapters that do not have a native
/// list view. Scrolling is vertical only. Adapters drive it with:
/// - `begin_drag` / `drag_to` / `end_drag` for finger scrolling
/// - `fling_to` while decelerating
/// - `tick(now_ms)` each frame for animated scrolls
///
/// Every offset change is reported to subscribers with the phase it happened in.
#[derive(Debug)]
pub struct SectionTable {
    row_counts: Vec<usize>,
    /// Start offset of each section (its header top).
    starts: Vec<f64>,
    content_height: f64,
    row_height: f64,
    header_height: f64,
    viewport_height: f64,

    offset: f64,
    phase: ScrollPhase,
    tween: Option<Tween>,
    now_ms: u64,
    animation_ms: u64,
    easing: Easing,

    observers: ScrollObservers,
}

impl SectionTable {
    pub fn new(
        row_counts: impl IntoIterator<Item = usize>,
        row_height: f64,
        header_height: f64,
        viewport_height: f64,
    ) -> Self {
        let mut table = Self {
            row_counts: Vec::new(),
            starts: Vec::new(),
            content_height: 0.0,
            row_height: row_height.max(0.0),
            header_height: header_height.max(0.0),
            viewport_height: viewport_height.max(0.0),
            offset: 0.0,
            phase: ScrollPhase::Idle,
            tween: None,
            now_ms: 0,
            animation_ms: 300,
            easing: Easing::EaseInOutCubic,
            observers: ScrollObservers::new(),
        };
        table.set_row_counts(row_counts);
        table
    }

    /// Sets how animated scrolls are timed.
    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.animation_ms = duration_ms;
        self.easing = easing;
        self
    }

    /// Replaces the sections. The offset is clamped to the new content.
    pub fn set_row_counts(&mut self, row_counts: impl IntoIterator<Item = usize>) {
        self.row_counts = row_counts.into_iter().collect();
        self.starts.clear();
        self.starts.reserve_exact(self.row_counts.len());
        let mut y = 0.0;
        for &rows in &self.row_counts {
            self.starts.push(y);
            y += self.header_height + rows as f64 * self.row_height;
        }
        self.content_height = y;
        self.tween = None;
        let clamped = self.clamp_offset(self.offset);
        self.set_offset(clamped);
    }

    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height.max(0.0);
        let clamped = self.clamp_offset(self.offset);
        self.set_offset(clamped);
    }

    pub fn row_count(&self, section: usize) -> Option<usize> {
        self.row_counts.get(section).copied()
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    pub fn max_offset(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn section_start(&self, section: usize) -> Option<f64> {
        self.starts.get(section).copied()
    }

    /// Offset that puts the header of `section` at the top of the viewport, clamped.
    pub fn section_start_offset(&self, section: usize) -> Option<f64> {
        let start = self.section_start(section)?;
        Some(self.clamp_offset(start))
    }

    /// Section whose header or rows cover the vertical offset `y`.
    pub fn section_at_y(&self, y: f64) -> Option<usize> {
        if !(0.0..self.content_height).contains(&y) {
            return None;
        }
        let after = self.starts.partition_point(|&s| s <= y);
        after.checked_sub(1)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// The finger touched the list. Cancels a running animation.
    pub fn begin_drag(&mut self) {
        self.tween = None;
        self.phase = ScrollPhase::Dragging;
    }

    pub fn drag_to(&mut self, offset: f64) {
        if self.phase != ScrollPhase::Dragging {
            self.begin_drag();
        }
        let clamped = self.clamp_offset(offset);
        self.set_offset(clamped);
    }

    /// The finger lifted. With `decelerate`, the list keeps moving until [`Self::stop`].
    pub fn end_drag(&mut self, decelerate: bool) {
        self.phase = if decelerate {
            ScrollPhase::Decelerating
        } else {
            ScrollPhase::Idle
        };
    }

    /// Moves the list while decelerating. Ignored in any other phase.
    pub fn fling_to(&mut self, offset: f64) {
        if self.phase != ScrollPhase::Decelerating {
            return;
        }
        let clamped = self.clamp_offset(offset);
        self.set_offset(clamped);
    }

    pub fn stop(&mut self) {
        self.tween = None;
        self.phase = ScrollPhase::Idle;
    }

    /// Programmatic scroll. Animated scrolls run in [`ScrollPhase::Animating`] and advance with
    /// [`Self::tick`].
    pub fn scroll_to_offset(&mut self, offset: f64, animated: bool) {
        let to = self.clamp_offset(offset);
        if !animated || self.animation_ms == 0 {
            self.tween = None;
            self.phase = ScrollPhase::Idle;
            self.set_offset(to);
            return;
        }
        match &mut self.tween {
            Some(tween) => tween.retarget(self.now_ms, to, self.animation_ms),
            None => {
                self.tween = Some(Tween::new(
                    self.offset,
                    to,
                    self.now_ms,
                    self.animation_ms,
                    self.easing,
                ));
            }
        }
        self.phase = ScrollPhase::Animating;
    }

    /// Advances an animated scroll. Returns `true` while it is still running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.now_ms = now_ms;
        let Some(tween) = self.tween else {
            return false;
        };
        let step = tween.step(now_ms);
        let off = self.clamp_offset(step.value());
        self.set_offset(off);
        if let TweenStep::Finished(_) = step {
            self.tween = None;
            self.phase = ScrollPhase::Idle;
            return false;
        }
        true
    }

    fn set_offset(&mut self, offset: f64) {
        if self.offset == offset {
            return;
        }
        self.offset = offset;
        let change = ScrollChange {
            offset: Point::new(0.0, offset),
            section: self.section_at_y(offset),
            phase: self.phase,
        };
        self.observers.emit(&change);
    }
}

impl SectionedList for SectionTable {
    fn section_count(&self) -> usize {
        self.row_counts.len()
    }

    fn content_offset(&self) -> Point {
        Point::new(0.0, self.offset)
    }

    fn section_at(&self, offset: Point) -> Option<usize> {
        self.section_at_y(offset.y)
    }

    fn scroll_phase(&self) -> ScrollPhase {
        self.phase
    }

    fn scroll_to_section_start(&mut self, section: usize, animated: bool) {
        let Some(offset) = self.section_start_offset(section) else {
            return;
        };
        self.scroll_to_offset(offset, animated);
    }

    fn subscribe_scroll(&mut self, listener: ScrollListener) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    fn unsubscribe_scroll(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
