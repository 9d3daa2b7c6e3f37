use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Ref, RefCell};

use indexbar::{IndexBar, IndexBarOptions, SectionJump, TouchPhase};
use kurbo::{Point, Size};

use crate::{
    Haptics, ImpactStyle, NoHaptics, ScrollChange, ScrollListener, SectionedList, SubscriptionId,
};

struct HostBinding {
    list: Weak<RefCell<dyn SectionedList>>,
    subscription: Option<SubscriptionId>,
}

/// Binds an [`IndexBar`] to a host list.
///
/// The controller owns the bar and keeps only a weak handle to the host. It:
/// - subscribes to the host's scroll changes and mirrors user-driven ones on the bar
/// - turns section jumps into a light haptic pulse plus an animated scroll on the host
/// - unsubscribes when re-bound, on [`Controller::unbind`], and on drop
///
/// A dropped or currently borrowed host turns host-facing work into a no-op.
///
/// # Panics
///
/// Touch and configuration methods borrow the bar mutably; holding the guard returned by
/// [`Controller::index_bar`] across such a call panics.
pub struct Controller {
    bar: Rc<RefCell<IndexBar>>,
    host: Option<HostBinding>,
    haptics: Box<dyn Haptics>,
}

impl Controller {
    pub fn new(options: IndexBarOptions) -> Self {
        Self {
            bar: Rc::new(RefCell::new(IndexBar::new(options))),
            host: None,
            haptics: Box::new(NoHaptics),
        }
    }

    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    pub fn index_bar(&self) -> Ref<'_, IndexBar> {
        self.bar.borrow()
    }

    pub fn set_size(&mut self, size: Size) {
        self.bar.borrow_mut().set_size(size);
    }

    pub fn set_options(&mut self, options: IndexBarOptions) {
        self.bar.borrow_mut().set_options(options);
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut IndexBarOptions)) {
        self.bar.borrow_mut().update_options(f);
    }

    pub fn set_on_section_selected(
        &mut self,
        on_section_selected: Option<impl Fn(usize) + 'static>,
    ) {
        self.bar
            .borrow_mut()
            .set_on_section_selected(on_section_selected);
    }

    /// Whether a host is bound and still alive.
    pub fn is_bound(&self) -> bool {
        self.host
            .as_ref()
            .is_some_and(|b| b.list.strong_count() > 0)
    }

    /// Replaces the markers with `titles` and binds the bar to `host`.
    ///
    /// Any previous host is unsubscribed first. Returns `false` and keeps everything as it was
    /// when `titles` is empty.
    pub fn set_data<H, I, S>(&mut self, titles: I, host: &Rc<RefCell<H>>) -> bool
    where
        H: SectionedList + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        if titles.is_empty() {
            return false;
        }

        self.unbind();
        let count = titles.len();
        self.bar.borrow_mut().set_data(titles);

        let list: Rc<RefCell<dyn SectionedList>> = host.clone();
        let subscription = match list.try_borrow_mut() {
            Ok(mut list) => {
                let sections = list.section_count();
                if sections != count {
                    awarn!(titles = count, sections, "Controller::set_data: section count mismatch");
                }
                Some(list.subscribe_scroll(self.scroll_listener()))
            }
            Err(_) => {
                awarn!("Controller::set_data: host busy, scroll sync disabled");
                None
            }
        };
        adebug!(titles = count, subscribed = subscription.is_some(), "Controller::set_data");

        self.host = Some(HostBinding {
            list: Rc::downgrade(&list),
            subscription,
        });
        true
    }

    /// Drops the host binding and its scroll subscription. The markers are kept.
    pub fn unbind(&mut self) {
        let Some(binding) = self.host.take() else {
            return;
        };
        let (Some(list), Some(id)) = (binding.list.upgrade(), binding.subscription) else {
            return;
        };
        match list.try_borrow_mut() {
            Ok(mut list) => {
                list.unsubscribe_scroll(id);
                atrace!(id = id.0, "Controller::unbind");
            }
            // The listener only holds a weak handle to the bar, so it goes inert once the bar
            // is gone.
            Err(_) => {
                awarn!(id = id.0, "Controller::unbind: host busy, subscription left behind");
            }
        }
    }

    pub fn touch(&mut self, phase: TouchPhase, point: Point, now_ms: u64) -> Option<SectionJump> {
        let jump = self.bar.borrow_mut().touch(phase, point, now_ms);
        if let Some(jump) = &jump {
            self.perform_jump(jump);
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

    /// Reads the host's current offset and phase and mirrors them like a scroll change would.
    pub fn refresh_from_host(&mut self) -> bool {
        let Some(list) = self.host_list() else {
            return false;
        };
        let Ok(list) = list.try_borrow() else {
            return false;
        };
        let offset = list.content_offset();
        let change = ScrollChange {
            offset,
            section: list.section_at(offset),
            phase: list.scroll_phase(),
        };
        drop(list);
        self.bar.borrow_mut().sync_from_host(&change.sync())
    }

    /// Advances the bubble fade. Returns `true` while it is still animating.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.bar.borrow_mut().tick(now_ms)
    }

    fn host_list(&self) -> Option<Rc<RefCell<dyn SectionedList>>> {
        self.host.as_ref().and_then(|b| b.list.upgrade())
    }

    fn scroll_listener(&self) -> ScrollListener {
        let bar = Rc::downgrade(&self.bar);
        Box::new(move |change: &ScrollChange| {
            let Some(bar) = bar.upgrade() else {
                return;
            };
            // Busy means the change was caused by the bar's own update.
            let Ok(mut bar) = bar.try_borrow_mut() else {
                return;
            };
            bar.sync_from_host(&change.sync());
        })
    }

    fn perform_jump(&mut self, jump: &SectionJump) {
        self.haptics.impact(ImpactStyle::Light);

        let Some(list) = self.host_list() else {
            return;
        };
        let Ok(mut list) = list.try_borrow_mut() else {
            awarn!(index = jump.index, "Controller: host busy, scroll skipped");
            return;
        };
        if jump.index >= list.section_count() {
            awarn!(
                index = jump.index,
                sections = list.section_count(),
                "Controller: section out of host range, scroll skipped"
            );
            return;
        }
        adebug!(index = jump.index, "Controller: scroll to section");
        list.scroll_to_section_start(jump.index, true);
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(IndexBarOptions::default())
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.unbind();
    }
}

impl core::fmt::Debug for Controller {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("bar", &self.bar)
            .field("bound", &self.is_bound())
            .finish_non_exhaustive()
    }
}
