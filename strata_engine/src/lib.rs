// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=strata_engine --heading-base-level=0

//! Strata Engine: scroll-progress synchronization for parallax scroll
//! sequences.
//!
//! A parallax page reveals its sections as they travel through the
//! viewport. This crate is the headless engine behind that: it tracks the
//! active scroll axis (vertical page scroll in portrait, horizontal
//! container scroll in landscape), computes a clamped `[0, 1]` traversal
//! progress per section on every scroll tick, republishes each value
//! through a sink the presentation layer styles from, and rewires its own
//! event bindings whenever the orientation flips.
//!
//! The engine owns no rendering and reads no ambient state. Hosts implement
//! four small capability traits — [`GeometryProvider`], [`ScrollSurface`],
//! [`EventBindings`], [`ProgressSink`] (united as [`Host`]) — and translate
//! runtime events into engine calls:
//!
//! - scroll events → [`ScrollEngine::on_scroll`],
//! - resize events → [`ScrollEngine::on_resize`],
//! - clock ticks → [`ScrollEngine::advance`] (drives the post-transition
//!   settle recompute),
//! - navigation activations → [`NavDispatcher::activate`].
//!
//! Orientation transitions are a deterministic state-machine step: unbind
//! the old scroll target, reset the new axis to its start, force a reflow,
//! bind the new target, and schedule a cancellable settle task that re-runs
//! the progress computation once layout has stabilized. A transition that
//! arrives while a settle task is pending supersedes it; stale corrective
//! recomputes never fire.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use strata_engine::{
//!     EventBindings, GeometryProvider, ProgressSink, ScrollEngine, ScrollMotion, ScrollState,
//!     ScrollSurface, ScrollTarget,
//! };
//! use strata_orientation::Axis;
//! use strata_sections::SectionRegistry;
//!
//! // A toy host: one 500px section at the top of a portrait page.
//! #[derive(Default)]
//! struct Page {
//!     scroll: f64,
//!     published: Vec<(&'static str, f64)>,
//! }
//! # impl GeometryProvider<&'static str> for Page {
//! #     fn section_rect(&self, _key: &&'static str) -> Option<Rect> {
//! #         Some(Rect::new(0.0, -self.scroll, 390.0, 500.0 - self.scroll))
//! #     }
//! #     fn scroll_state(&self, _axis: Axis) -> Option<ScrollState> {
//! #         Some(ScrollState { offset: self.scroll, extent: 844.0 })
//! #     }
//! # }
//! # impl ScrollSurface for Page {
//! #     fn scroll_to(&mut self, _axis: Axis, offset: f64, _motion: ScrollMotion) {
//! #         self.scroll = offset;
//! #     }
//! #     fn force_reflow(&mut self) {}
//! # }
//! # impl EventBindings<&'static str> for Page {
//! #     fn bind_scroll(&mut self, _target: ScrollTarget) {}
//! #     fn unbind_scroll(&mut self, _target: ScrollTarget) {}
//! #     fn bind_resize(&mut self) {}
//! #     fn unbind_resize(&mut self) {}
//! #     fn bind_nav(&mut self, _key: &&'static str) {}
//! #     fn unbind_nav(&mut self, _key: &&'static str) {}
//! # }
//! # impl ProgressSink<&'static str> for Page {
//! #     fn publish(&mut self, key: &&'static str, progress: f64) {
//! #         self.published.push((key, progress));
//! #     }
//! # }
//!
//! let mut page = Page::default();
//! let mut engine = ScrollEngine::new(SectionRegistry::from_iter(["intro"]));
//!
//! // Mounting binds listeners and runs a first tick.
//! engine.mount(390.0, 844.0, &mut page);
//! assert_eq!(engine.progress_of(&"intro"), Some(0.0));
//!
//! // Scrolled halfway through the section's own extent.
//! page.scroll = 250.0;
//! engine.on_scroll(&mut page);
//! assert_eq!(engine.progress_of(&"intro"), Some(0.5));
//! assert_eq!(page.published.last(), Some(&("intro", 0.5)));
//! ```
//!
//! ## Design notes
//!
//! - Progress is recomputed for **every** registered section on every tick,
//!   not just the nearest one; several sections can animate simultaneously
//!   and each is independent.
//! - The published value is the engine's entire contract with presentation:
//!   what visual effect a host derives from it is not the engine's concern.
//! - Listener bindings are keyed by value ([`ScrollTarget`], entry keys),
//!   so unbinding always names exactly what binding registered.
//! - Time is an input: hosts pass clock readings into
//!   [`ScrollEngine::on_resize`] and [`ScrollEngine::advance`], which keeps
//!   settle-delay behavior reproducible in tests.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bindings;
mod engine;
mod host;
mod nav;
pub mod progress;

pub use bindings::ListenerBindings;
pub use engine::{DEFAULT_SETTLE_DELAY, EngineDebugInfo, ScrollEngine};
pub use host::{
    EventBindings, GeometryProvider, Host, ProgressSink, ScrollMotion, ScrollState, ScrollSurface,
    ScrollTarget,
};
pub use nav::{NavDispatcher, NavOutcome};
