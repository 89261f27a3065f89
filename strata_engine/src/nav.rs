// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation dispatch: from entry activation to engine scroll.
//!
//! Each navigation entry (a link in the bottom bar) carries the key of the
//! section it targets. The dispatcher owns that ordered set of keys,
//! registers an activation listener per entry through the host, and on
//! activation suppresses the entry's default behavior and delegates to
//! [`ScrollEngine::navigate_to`].
//!
//! Bindings are keyed by the entry keys themselves: [`NavDispatcher::release`]
//! deregisters exactly the keys [`NavDispatcher::bind`] registered, so
//! teardown detaches the listeners that were actually attached rather than
//! a fresh set of look-alikes.

use core::hash::Hash;

use smallvec::SmallVec;

use crate::engine::ScrollEngine;
use crate::host::{EventBindings, Host};

/// Result of activating a navigation entry.
///
/// Tells the host what to do with the underlying input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// The activation was handled; the host suppresses the entry's default
    /// behavior (e.g. an anchor's own jump navigation).
    Consumed,
    /// The key is not a registered entry; the host proceeds with its
    /// default behavior.
    Ignored,
}

/// The ordered set of navigation entries and their listener bindings.
#[derive(Clone, Debug, Default)]
pub struct NavDispatcher<K> {
    entries: SmallVec<[K; 4]>,
    bound: bool,
}

impl<K> NavDispatcher<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a dispatcher with no entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            bound: false,
        }
    }

    /// Appends an entry targeting `key`.
    ///
    /// Returns `false` and does nothing for a duplicate key. Entries are
    /// expected to be registered before [`NavDispatcher::bind`].
    pub fn push(&mut self, key: K) -> bool {
        if self.entries.contains(&key) {
            return false;
        }
        self.entries.push(key);
        true
    }

    /// Iterates the entry keys in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &K> {
        self.entries.iter()
    }

    /// Returns `true` while the activation listeners are attached.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Attaches an activation listener for every entry. Idempotent.
    pub fn bind<H: EventBindings<K>>(&mut self, host: &mut H) {
        if self.bound {
            return;
        }
        for key in &self.entries {
            host.bind_nav(key);
        }
        self.bound = true;
    }

    /// Detaches the listeners attached by [`NavDispatcher::bind`] — the
    /// same keys, in the same order. Idempotent.
    pub fn release<H: EventBindings<K>>(&mut self, host: &mut H) {
        if !self.bound {
            return;
        }
        for key in &self.entries {
            host.unbind_nav(key);
        }
        self.bound = false;
    }

    /// Handles an activation of the entry for `key`.
    ///
    /// Known entries consume the event and delegate to the engine; the
    /// navigation itself may still be a silent no-op (for instance when the
    /// target has no registered section). Unknown keys are ignored and left
    /// to the host's default behavior.
    pub fn activate<H: Host<K>>(
        &self,
        key: &K,
        engine: &mut ScrollEngine<K>,
        host: &mut H,
    ) -> NavOutcome {
        if !self.entries.contains(key) {
            return NavOutcome::Ignored;
        }
        let _ = engine.navigate_to(key, host);
        NavOutcome::Consumed
    }
}

impl<K> FromIterator<K> for NavDispatcher<K>
where
    K: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut dispatcher = Self::new();
        for key in iter {
            dispatcher.push(key);
        }
        dispatcher
    }
}
