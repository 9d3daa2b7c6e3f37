//! A headless section index bar: the "A–Z" scrubber shown along the edge of a sectioned list,
//! plus the preview bubble that displays the section under the finger.
//!
//! For host-list bindings (scroll subscriptions, haptics, a reference list model), see the
//! `indexbar-adapter` crate.
//!
//! This crate owns the state and the math only:
//! - marker layout (fixed-size markers, centered when they fit, overflowing when they don't)
//! - touch → section mapping and the selection state machine
//! - mirroring user-driven scrolls of the host list without writing back to it
//! - bubble visibility, position, fade-out, and its outline as a vector path
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - the control's size
//! - touch locations in control coordinates
//! - host scroll changes (section at the top of the viewport + scroll phase)
//! - a clock (`now_ms`) for the bubble fade
//!
//! ```
//! use indexbar::{IndexBar, IndexBarOptions};
//! use indexbar::kurbo::{Point, Size};
//!
//! let mut bar = IndexBar::new(IndexBarOptions::default());
//! bar.set_size(Size::new(20.0, 300.0));
//! bar.set_data(["A", "B", "C"]);
//!
//! let jump = bar.touch_moved(Point::new(5.0, 145.0), 0).unwrap();
//! assert_eq!(jump.title, "B");
//! assert_eq!(bar.selected_index(), Some(1));
//! ```
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod bubble;
mod index_bar;
pub mod layout;
mod options;
mod tween;
mod types;

#[cfg(test)]
mod tests;

pub use bubble::{BubbleOverlay, bubble_path};
pub use index_bar::{IndexBar, OnSectionSelected};
pub use options::{BubbleOptions, IndexBarOptions};
pub use tween::{Easing, Tween, TweenStep};
pub use types::{
    Color, Font, FontWeight, MarkerStyle, ScrollPhase, ScrollSync, SectionJump, SectionMarker,
    SectionState, TouchPhase,
};

pub use kurbo;
