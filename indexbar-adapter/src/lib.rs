//! Host-list bindings for the `indexbar` crate.
//!
//! The `indexbar` crate is UI-agnostic and only knows about markers, touches and scroll phases.
//! This crate provides the framework-neutral glue an adapter needs to attach it to a list:
//!
//! - [`SectionedList`]: the host list abstraction (section lookup, scroll phase, scroll-to-section,
//!   explicit scroll subscriptions)
//! - [`Controller`]: owns an `IndexBar`, keeps a weak handle to the host, subscribes to its scroll
//!   changes, and turns section jumps into haptics + host scrolls
//! - [`SectionTable`]: a reference headless host with drag, deceleration and animated scrolling
//!
//! This crate is intentionally framework-agnostic (no UIKit/egui/ratatui bindings).
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod controller;
mod haptics;
mod host;
mod table;


pub use controller::Controller;
pub use haptics::{Haptics, ImpactStyle, NoHaptics};
pub use host::{ScrollChange, ScrollListener, ScrollObservers, SectionedList, SubscriptionId};
pub use table::SectionTable;
