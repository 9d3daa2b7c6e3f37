use alloc::boxed::Box;
use alloc::vec::Vec;

use indexbar::{ScrollPhase, ScrollSync};
use kurbo::Point;

/// Identifies a scroll subscription on a host list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptionId(pub u64);

/// A content-offset change of the host list.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollChange {
    /// New content offset.
    pub offset: Point,
    /// Section at `offset`, as resolved by the host's own layout.
    pub section: Option<usize>,
    pub phase: ScrollPhase,
}

impl ScrollChange {
    pub fn sync(&self) -> ScrollSync {
        ScrollSync {
            section: self.section,
            phase: self.phase,
        }
    }
}

/// Receives every content-offset change of a host list.
pub type ScrollListener = Box<dyn FnMut(&ScrollChange)>;

/// The scrollable, sectioned list an index bar is attached to.
///
/// Implementations are owned by the application; the index bar only keeps a weak handle and never
/// mutates anything but the scroll position.
pub trait SectionedList {
    fn section_count(&self) -> usize;

    fn content_offset(&self) -> Point;

    /// Section whose layout covers `offset`, if any.
    fn section_at(&self, offset: Point) -> Option<usize>;

    fn scroll_phase(&self) -> ScrollPhase;

    /// Scrolls so that the start of `section` is at the top of the viewport.
    fn scroll_to_section_start(&mut self, section: usize, animated: bool);

    /// Registers `listener` for content-offset changes.
    ///
    /// Listeners may be invoked while the list is mutably borrowed; they must not call back into
    /// the list.
    fn subscribe_scroll(&mut self, listener: ScrollListener) -> SubscriptionId;

    /// Returns `true` when `id` was registered.
    fn unsubscribe_scroll(&mut self, id: SubscriptionId) -> bool;
}

/// A listener registry for [`SectionedList`] implementations.
#[derive(Default)]
pub struct ScrollObservers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, ScrollListener)>,
}

impl ScrollObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: ScrollListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, listener));
        atrace!(id = id.0, listeners = self.listeners.len(), "ScrollObservers::subscribe");
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(i, _)| *i != id);
        let removed = self.listeners.len() != before;
        atrace!(id = id.0, removed, "ScrollObservers::unsubscribe");
        removed
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn emit(&mut self, change: &ScrollChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(change);
        }
    }
}

impl core::fmt::Debug for ScrollObservers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollObservers")
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
