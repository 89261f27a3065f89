// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits through which the engine reaches its host runtime.
//!
//! The engine never reads ambient state. Everything it needs from the
//! environment — section geometry, the current scroll position, listener
//! registration, the ability to scroll — is expressed as a small trait the
//! host implements, and every engine operation takes the host as a
//! parameter. A browser/WASM adapter backs these with DOM calls; tests back
//! them with plain structs.
//!
//! The traits are split by concern so adapters can be composed and tested
//! piecemeal; [`Host`] is the blanket union the engine's operations bound
//! on.

use kurbo::Rect;
use strata_orientation::{Axis, Orientation};

/// Scroll position and viewport extent along one axis.
///
/// `offset` is the page offset in portrait mode and the container offset in
/// landscape mode; `extent` is the viewport's extent along the same axis.
/// Both are queried fresh on every tick and never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    /// Current scroll offset along the axis.
    pub offset: f64,
    /// Viewport (or container) extent along the axis.
    pub extent: f64,
}

/// The event target a scroll listener attaches to.
///
/// Portrait layouts scroll the page itself, landscape layouts scroll a
/// dedicated container; listener rewiring on orientation change moves the
/// subscription between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    /// The page/window (portrait mode).
    Page,
    /// The horizontal scroll container (landscape mode).
    Container,
}

impl ScrollTarget {
    /// Returns the target an orientation's scroll events arrive on.
    #[must_use]
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => Self::Page,
            Orientation::Landscape => Self::Container,
        }
    }
}

/// How a programmatic scroll should move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMotion {
    /// Jump directly to the offset (orientation resets).
    Instant,
    /// Animate to the offset (navigation). The animation itself is the
    /// host's concern; the engine only observes the scroll events it emits.
    Smooth,
}

/// Live layout geometry, queried per tick.
pub trait GeometryProvider<K> {
    /// Viewport-relative bounds of a section.
    ///
    /// Returns `None` while the section is not mounted/laid out; the engine
    /// skips that section for the tick. Note these coordinates shift as
    /// scrolling occurs — the engine normalizes them against the current
    /// scroll offset before computing progress.
    fn section_rect(&self, key: &K) -> Option<Rect>;

    /// Current scroll offset and viewport extent along `axis`.
    ///
    /// Returns `None` while the scroll surface is not ready; the engine
    /// treats that as "skip this tick entirely".
    fn scroll_state(&self, axis: Axis) -> Option<ScrollState>;
}

/// Scroll effects on the host surface.
pub trait ScrollSurface {
    /// Scrolls the active surface to `offset` along `axis`.
    fn scroll_to(&mut self, axis: Axis, offset: f64, motion: ScrollMotion);

    /// Forces a layout reflow of the scroll container.
    ///
    /// Rendering engines may retain stale layout metrics across an
    /// orientation-driven layout switch; the host compensates by toggling
    /// the container out of and back into the layout flow.
    fn force_reflow(&mut self);
}

/// Listener registration, keyed by value.
///
/// Every binding here is identified by a plain value — a [`ScrollTarget`] or
/// a navigation entry key — and every unbind passes the same value its bind
/// did. Hosts keep whatever closure or callback they registered stored under
/// that value, which is what makes teardown actually detach it.
pub trait EventBindings<K> {
    /// Subscribes the engine to scroll events from `target`.
    fn bind_scroll(&mut self, target: ScrollTarget);

    /// Removes the scroll subscription from `target`.
    fn unbind_scroll(&mut self, target: ScrollTarget);

    /// Subscribes the engine to viewport resize events.
    fn bind_resize(&mut self);

    /// Removes the resize subscription.
    fn unbind_resize(&mut self);

    /// Attaches an activation listener to the navigation entry for `key`.
    fn bind_nav(&mut self, key: &K);

    /// Detaches the activation listener from the navigation entry for `key`.
    fn unbind_nav(&mut self, key: &K);
}

/// The outbound styling signal.
pub trait ProgressSink<K> {
    /// Publishes a section's traversal progress, a clamped value in
    /// `[0, 1]`, keyed by section.
    ///
    /// Called for every registered section on every tick; later calls for
    /// the same key overwrite earlier ones. The presentation layer reads
    /// this (for example as a CSS custom property) to drive visual effects
    /// the engine knows nothing about.
    fn publish(&mut self, key: &K, progress: f64);
}

/// Union of the capabilities a full host provides.
///
/// Blanket-implemented, so a type implementing the four component traits is
/// a `Host` automatically.
pub trait Host<K>: GeometryProvider<K> + ScrollSurface + EventBindings<K> + ProgressSink<K> {}

impl<K, H> Host<K> for H where
    H: GeometryProvider<K> + ScrollSurface + EventBindings<K> + ProgressSink<K>
{
}
