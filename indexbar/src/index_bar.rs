use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::layout;
use crate::{
    BubbleOverlay, Color, IndexBarOptions, MarkerStyle, ScrollSync, SectionJump, SectionMarker,
    SectionState, TouchPhase,
};

/// A callback fired when a different section becomes selected.
pub type OnSectionSelected = Rc<dyn Fn(usize)>;

/// A headless section index bar.
///
/// This type holds no UI objects and no reference to the host list. Adapters drive it with:
/// - `set_size` whenever the control's bounds change
/// - `set_data` / `set_options` to (re)build the markers
/// - `touch*` for touches inside the control
/// - `sync_from_host` for scroll changes of the host list
/// - `tick(now_ms)` each frame while the bubble fades out
///
/// A touch that reaches a new section returns a [`SectionJump`]; scrolling the host and haptic
/// feedback are left to the adapter (see the `indexbar-adapter` crate).
#[derive(Clone)]
pub struct IndexBar {
    options: IndexBarOptions,
    size: Size,
    markers: Vec<SectionMarker>,
    selected: Option<usize>,
    last_selected_index: Option<usize>,
    bubble: Option<BubbleOverlay>,
    on_section_selected: Option<OnSectionSelected>,
}

impl Default for IndexBar {
    fn default() -> Self {
        Self::new(IndexBarOptions::default())
    }
}

impl IndexBar {
    pub fn new(options: IndexBarOptions) -> Self {
        Self {
            options: options.sanitized(),
            size: Size::ZERO,
            markers: Vec::new(),
            selected: None,
            last_selected_index: None,
            bubble: None,
            on_section_selected: None,
        }
    }

    pub fn options(&self) -> &IndexBarOptions {
        &self.options
    }

    /// Applies a full configuration value. When data exists, the bar is rebuilt from scratch and
    /// the first section is selected again.
    pub fn set_options(&mut self, options: IndexBarOptions) {
        self.options = options.sanitized();
        idebug!(
            section_size = self.options.section_size,
            section_spacing = self.options.section_spacing,
            show_bubble = self.options.show_bubble,
            "IndexBar::set_options"
        );
        if self.markers.is_empty() {
            return;
        }
        let titles: Vec<String> = self.markers.drain(..).map(|m| m.title).collect();
        let prev = self.selected;
        self.rebuild(titles);
        self.select_index(0, prev != Some(0));
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut IndexBarOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_section_selected(
        &mut self,
        on_section_selected: Option<impl Fn(usize) + 'static>,
    ) {
        self.on_section_selected = on_section_selected.map(|f| Rc::new(f) as _);
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Updates the control's bounds and re-positions the markers. Selection is kept.
    pub fn set_size(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        self.size = size;
        itrace!(width = size.width, height = size.height, "IndexBar::set_size");
        self.relayout();
    }

    /// Replaces all markers with one per title and selects the first.
    ///
    /// Returns `false` (and changes nothing) when `titles` is empty.
    pub fn set_data<I, S>(&mut self, titles: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        if titles.is_empty() {
            iwarn!("IndexBar::set_data: empty titles ignored");
            return false;
        }
        idebug!(count = titles.len(), "IndexBar::set_data");
        self.rebuild(titles);
        self.select_index(0, true);
        true
    }

    /// `true` once data has been set.
    pub fn is_ready(&self) -> bool {
        !self.markers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn markers(&self) -> &[SectionMarker] {
        &self.markers
    }

    pub fn marker(&self, index: usize) -> Option<&SectionMarker> {
        self.markers.get(index)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_marker(&self) -> Option<&SectionMarker> {
        self.selected.and_then(|i| self.markers.get(i))
    }

    /// The last section reached by a touch or a user-driven host scroll.
    pub fn last_selected_index(&self) -> Option<usize> {
        self.last_selected_index
    }

    pub fn content_height(&self) -> f64 {
        layout::content_height(
            self.markers.len(),
            self.options.section_size,
            self.options.section_spacing,
        )
    }

    pub fn leading_offset(&self) -> f64 {
        layout::leading_offset(self.size.height, self.content_height())
    }

    pub fn bubble(&self) -> Option<&BubbleOverlay> {
        self.bubble.as_ref()
    }

    pub fn marker_style(&self, index: usize) -> Option<MarkerStyle> {
        let marker = self.markers.get(index)?;
        let (text_color, background_color) = match marker.state {
            SectionState::Normal => (self.options.title_color, Color::TRANSPARENT),
            SectionState::Selected => (
                self.options.selected_title_color,
                self.options.selected_background_color,
            ),
        };
        Some(MarkerStyle {
            text_color,
            background_color,
            corner_radius: self.options.section_size / 2.0,
            font: self.options.title_font.clone(),
        })
    }

    /// Maps a point in control coordinates to a marker index without changing any state.
    pub fn section_at_point(&self, point: Point) -> Option<usize> {
        layout::section_at_point(self.markers.iter().map(|m| m.rect), self.size, point)
    }

    /// Handles a touch sample.
    ///
    /// `Began`, `Moved` and `Ended` select the section under `point`; `Ended` and `Cancelled`
    /// also start the bubble fade-out.
    pub fn touch(&mut self, phase: TouchPhase, point: Point, now_ms: u64) -> Option<SectionJump> {
        itrace!(?phase, x = point.x, y = point.y, now_ms, "IndexBar::touch");
        let jump = match phase {
            TouchPhase::Began | TouchPhase::Moved | TouchPhase::Ended => {
                self.select_at_point(point)
            }
            TouchPhase::Cancelled => None,
        };
        if matches!(phase, TouchPhase::Ended | TouchPhase::Cancelled) {
            if let Some(bubble) = &mut self.bubble {
                bubble.hide(now_ms);
            }
        }
        jump
    }

    pub fn touch_began(&mut self, point: Point, now_ms: u64) -> Option<SectionJump> {
        self.touch(TouchPhase::Began, point, now_ms)
    }

    pub fn touch_moved(&mut self, point: Point, now_ms: u64) -> Option<SectionJump> {
        self.touch(TouchPhase::Moved, point, now_ms)
    }

    pub fn touch_ended(&mut self, point: Point, now_ms: u64) -> Option<SectionJump> {
        self.touch(TouchPhase::Ended, point, now_ms)
    }

    pub fn touch_cancelled(&mut self, now_ms: u64) {
        self.touch(TouchPhase::Cancelled, Point::ZERO, now_ms);
    }

    /// Mirrors a host scroll change.
    ///
    /// Only user-driven motion (dragging or decelerating) is mirrored; programmatic scrolls,
    /// including the ones requested after a [`SectionJump`], are ignored. Never produces a jump.
    ///
    /// Returns `true` when the change was applied.
    pub fn sync_from_host(&mut self, sync: &ScrollSync) -> bool {
        if !sync.phase.is_user_driven() {
            return false;
        }
        let Some(index) = sync.section else {
            return false;
        };
        if index >= self.markers.len() {
            return false;
        }
        itrace!(index, phase = ?sync.phase, "IndexBar::sync_from_host");
        self.select_index(index, true);
        // The list may sit anywhere inside the section; a touch on it still scrolls to its start.
        self.last_selected_index = None;
        true
    }

    /// Selects a section by index without touching the host. Returns `false` when out of range.
    pub fn select_section(&mut self, index: usize) -> bool {
        if index >= self.markers.len() {
            return false;
        }
        self.select_index(index, true);
        true
    }

    /// Advances the bubble fade. Returns `true` while an animation is still running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.bubble.as_mut().is_some_and(|b| b.tick(now_ms))
    }

    fn rebuild(&mut self, titles: Vec<String>) {
        self.selected = None;
        self.last_selected_index = None;
        let rects = layout::marker_rects(
            titles.len(),
            self.size,
            self.options.section_size,
            self.options.section_spacing,
        );
        self.markers = titles
            .into_iter()
            .zip(rects)
            .map(|(title, rect)| SectionMarker {
                title,
                rect,
                state: SectionState::Normal,
            })
            .collect();
        self.bubble = self
            .options
            .show_bubble
            .then(|| BubbleOverlay::new(self.options.bubble.clone()));
        debug_assert_eq!(self.markers.iter().filter(|m| m.is_selected()).count(), 0);
    }

    fn relayout(&mut self) {
        let rects = layout::marker_rects(
            self.markers.len(),
            self.size,
            self.options.section_size,
            self.options.section_spacing,
        );
        for (marker, rect) in self.markers.iter_mut().zip(rects) {
            marker.rect = rect;
        }
    }

    fn select_at_point(&mut self, point: Point) -> Option<SectionJump> {
        let index = self.section_at_point(point)?;
        self.select_index(index, true);
        if self.last_selected_index == Some(index) {
            return None;
        }
        self.last_selected_index = Some(index);

        let title = self.markers[index].title.clone();
        let bubble_anchor = match &mut self.bubble {
            Some(bubble) => {
                let anchor = Point::new(bubble.resting_center_x(), point.y);
                bubble.show(&title, anchor);
                anchor
            }
            None => Point::new(self.markers[index].rect.center().x, point.y),
        };
        idebug!(index, title = %title, "IndexBar: section jump");
        Some(SectionJump {
            index,
            title,
            bubble_anchor,
        })
    }

    /// Moves the Selected state to `index`. With `notify`, the observer hears about it when the
    /// selected marker actually changes.
    fn select_index(&mut self, index: usize, notify: bool) {
        debug_assert!(index < self.markers.len());
        let prev = self.selected;
        if let Some(last) = prev {
            self.markers[last].state = SectionState::Normal;
        }
        self.markers[index].state = SectionState::Selected;
        self.selected = Some(index);
        if notify && prev != Some(index) {
            if let Some(cb) = &self.on_section_selected {
                cb(index);
            }
        }
    }
}

impl core::fmt::Debug for IndexBar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IndexBar")
            .field("options", &self.options)
            .field("size", &self.size)
            .field("markers", &self.markers)
            .field("selected", &self.selected)
            .field("last_selected_index", &self.last_selected_index)
            .field("bubble", &self.bubble)
            .finish_non_exhaustive()
    }
}
