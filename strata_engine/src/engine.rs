// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The orchestrating scroll engine.

use alloc::vec::Vec;
use core::hash::Hash;

use strata_orientation::Orientation;
use strata_sections::SectionRegistry;
use strata_timing::{TimerQueue, TimerToken};

use crate::bindings::ListenerBindings;
use crate::host::{Host, ScrollMotion, ScrollTarget};
use crate::progress::{content_start, traversal_progress};

/// Default settle delay after an orientation transition, in host clock units
/// (typically milliseconds).
pub const DEFAULT_SETTLE_DELAY: u64 = 100;

/// Scroll-progress synchronization engine.
///
/// Owns the section registry, the listener-binding state machine, the held
/// orientation, and the settle-task queue. All interaction with the runtime
/// goes through a [`Host`] passed into each operation; the engine itself is
/// plain data and fully deterministic.
///
/// Event flow: the host delivers resize events to [`ScrollEngine::on_resize`]
/// (which rewires bindings when the orientation flips), scroll events to
/// [`ScrollEngine::on_scroll`] (which recomputes and publishes progress for
/// every registered section), clock ticks to [`ScrollEngine::advance`]
/// (which fires the post-transition corrective recompute), and navigation
/// activations to [`ScrollEngine::navigate_to`] (usually via
/// [`NavDispatcher`](crate::NavDispatcher)).
#[derive(Clone, Debug)]
pub struct ScrollEngine<K> {
    registry: SectionRegistry<K>,
    bindings: ListenerBindings,
    orientation: Orientation,
    mounted: bool,
    timers: TimerQueue,
    settle: Option<TimerToken>,
    settle_delay: u64,
    progress: Vec<Option<f64>>,
}

impl<K> ScrollEngine<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an unmounted engine over a registry of sections.
    ///
    /// The section set is fixed for the engine's lifetime; it is discovered
    /// once and registered before mounting.
    #[must_use]
    pub fn new(registry: SectionRegistry<K>) -> Self {
        let progress = alloc::vec![None; registry.len()];
        Self {
            registry,
            bindings: ListenerBindings::new(),
            orientation: Orientation::Landscape,
            mounted: false,
            timers: TimerQueue::new(),
            settle: None,
            settle_delay: DEFAULT_SETTLE_DELAY,
            progress,
        }
    }

    /// Returns the section registry.
    #[must_use]
    pub fn registry(&self) -> &SectionRegistry<K> {
        &self.registry
    }

    /// Returns the held orientation.
    ///
    /// Meaningful once mounted; updated only when a resize crosses the
    /// portrait/landscape threshold.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns `true` between [`ScrollEngine::mount`] and
    /// [`ScrollEngine::unmount`].
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns the settle delay in host clock units.
    #[must_use]
    pub fn settle_delay(&self) -> u64 {
        self.settle_delay
    }

    /// Sets the settle delay applied after orientation transitions.
    pub fn set_settle_delay(&mut self, delay: u64) {
        self.settle_delay = delay;
    }

    /// Returns the latest computed progress for `key`.
    ///
    /// `None` before the first tick touches the section, or for unknown
    /// keys. Values mirror what was last handed to the host's progress
    /// sink: finite, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress_of(&self, key: &K) -> Option<f64> {
        self.registry
            .index_of(key)
            .and_then(|i| self.progress.get(i).copied().flatten())
    }

    /// Mounts the engine: detects the orientation from the viewport
    /// dimensions, binds the resize listener and the orientation's scroll
    /// target, and runs one initial tick.
    ///
    /// Mounting an already-mounted engine is a no-op.
    pub fn mount<H: Host<K>>(&mut self, width: f64, height: f64, host: &mut H) {
        if self.mounted {
            return;
        }
        self.orientation = Orientation::from_viewport(width, height);
        host.bind_resize();
        self.bindings
            .rebind(host, ScrollTarget::for_orientation(self.orientation));
        self.mounted = true;
        self.recompute(host);
    }

    /// Tears the engine down: unbinds whichever scroll listener is active,
    /// removes the resize listener, and cancels any pending settle task.
    ///
    /// Terminal for this mount; a later [`ScrollEngine::mount`] starts
    /// fresh. Unmounting an unmounted engine is a no-op.
    pub fn unmount<H: Host<K>>(&mut self, host: &mut H) {
        if !self.mounted {
            return;
        }
        self.bindings.release(host);
        host.unbind_resize();
        self.timers.clear();
        self.settle = None;
        self.mounted = false;
    }

    /// Handles a scroll tick: recomputes and publishes progress for every
    /// registered section.
    pub fn on_scroll<H: Host<K>>(&mut self, host: &mut H) {
        if !self.mounted {
            return;
        }
        self.recompute(host);
    }

    /// Handles a viewport resize at clock reading `now`.
    ///
    /// Re-detects the orientation; when it is unchanged nothing happens, so
    /// resizes that stay on one side of the portrait/landscape threshold
    /// cause no binding churn. When it flips, the transition runs in a fixed
    /// order:
    ///
    /// 1. unbind the scroll listener from the previous target,
    /// 2. reset the new axis's scroll position to the start (orientation
    ///    changes discard scroll position rather than remapping it),
    /// 3. force a reflow of the scroll container,
    /// 4. bind the scroll listener to the new target,
    /// 5. supersede any pending settle task and schedule a fresh one; when
    ///    it fires via [`ScrollEngine::advance`], one corrective recompute
    ///    picks up whatever layout settling the reflow caused.
    pub fn on_resize<H: Host<K>>(&mut self, width: f64, height: f64, now: u64, host: &mut H) {
        if !self.mounted {
            return;
        }
        let detected = Orientation::from_viewport(width, height);
        if detected == self.orientation {
            return;
        }
        self.orientation = detected;
        let axis = detected.axis();

        self.bindings.release(host);
        host.scroll_to(axis, 0.0, ScrollMotion::Instant);
        host.force_reflow();
        self.bindings
            .rebind(host, ScrollTarget::for_orientation(detected));

        if let Some(stale) = self.settle.take() {
            self.timers.cancel(stale);
        }
        self.settle = Some(self.timers.schedule_after(now, self.settle_delay));
    }

    /// Drives pending settle tasks from the host clock.
    ///
    /// Hosts call this from their timer facility (a due-date is available
    /// via the queue when the engine schedules one). A due settle task runs
    /// exactly one corrective recompute.
    pub fn advance<H: Host<K>>(&mut self, now: u64, host: &mut H) {
        if !self.mounted {
            return;
        }
        while let Some(token) = self.timers.poll_due(now) {
            if self.settle == Some(token) {
                self.settle = None;
                self.recompute(host);
            }
        }
    }

    /// Smooth-scrolls the active axis to a section's start position.
    ///
    /// Unknown keys are a silent no-op: the navigation surface is expected
    /// to pass only registered keys, and an id that has gone missing is not
    /// an error worth surfacing. Returns `true` when a scroll was issued.
    pub fn navigate_to<H: Host<K>>(&mut self, key: &K, host: &mut H) -> bool {
        if !self.mounted || !self.registry.contains(key) {
            return false;
        }
        let axis = self.orientation.axis();
        let Some(state) = host.scroll_state(axis) else {
            return false;
        };
        let Some(rect) = host.section_rect(key) else {
            return false;
        };
        let start = content_start(axis.start(rect), state.offset);
        host.scroll_to(axis, start, ScrollMotion::Smooth);
        true
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> EngineDebugInfo {
        EngineDebugInfo {
            mounted: self.mounted,
            orientation: self.orientation,
            bound: self.bindings.bound(),
            settle_pending: self.settle.is_some(),
            settle_delay: self.settle_delay,
            section_count: self.registry.len(),
        }
    }

    /// One tick: progress for every registered section, every time.
    ///
    /// Sections are independent; several can be mid-traversal at once, so
    /// no nearest-section shortcut applies. A missing scroll state means the
    /// surface is not ready and the whole tick is skipped; a section with
    /// missing geometry is skipped individually.
    fn recompute<H: Host<K>>(&mut self, host: &mut H) {
        let axis = self.orientation.axis();
        let Some(state) = host.scroll_state(axis) else {
            return;
        };
        for i in 0..self.registry.len() {
            let Some(key) = self.registry.get(i) else {
                continue;
            };
            let Some(rect) = host.section_rect(key) else {
                continue;
            };
            let start = content_start(axis.start(rect), state.offset);
            let value = traversal_progress(state.offset, start, axis.extent(rect));
            host.publish(key, value);
            self.progress[i] = Some(value);
        }
    }
}

/// Debug snapshot of a [`ScrollEngine`] state.
#[derive(Clone, Copy, Debug)]
pub struct EngineDebugInfo {
    /// Whether the engine is currently mounted.
    pub mounted: bool,
    /// The held orientation.
    pub orientation: Orientation,
    /// The scroll target currently carrying the listener, if any.
    pub bound: Option<ScrollTarget>,
    /// Whether a settle task is pending.
    pub settle_pending: bool,
    /// Settle delay in host clock units.
    pub settle_delay: u64,
    /// Number of registered sections.
    pub section_count: usize,
}
