// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=strata_timing --heading-base-level=0

//! Strata Timing: host-agnostic timer queue primitives.
//!
//! UI runtimes deliver time in many shapes: `setTimeout` callbacks, frame
//! ticks, embedded system timers. This crate models delayed work as plain
//! data instead, so the owning component can schedule, supersede, and cancel
//! tasks deterministically and hosts only have to do one thing: call
//! [`TimerQueue::poll_due`] with the current clock reading.
//!
//! - [`TimerQueue::schedule_at`] / [`TimerQueue::schedule_after`] register a
//!   deadline and hand back a [`TimerToken`].
//! - [`TimerQueue::cancel`] removes a pending entry. A component that wants
//!   "latest transition wins" semantics cancels the previous token before
//!   scheduling a replacement; a stale task can then never fire.
//! - [`TimerQueue::poll_due`] pops due entries earliest-deadline first (FIFO
//!   among equal deadlines); hosts loop until it returns `None`.
//!
//! Deadlines are `u64` readings of a caller-chosen monotonic clock. The
//! queue never interprets the unit; milliseconds are typical.
//!
//! ## Minimal example
//!
//! ```rust
//! use strata_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//!
//! // Schedule work for 100 units from "now" (= 1_000).
//! let token = timers.schedule_after(1_000, 100);
//! assert!(timers.is_pending(token));
//!
//! // Nothing is due before the deadline.
//! assert_eq!(timers.poll_due(1_050), None);
//!
//! // At (or after) the deadline the token pops exactly once.
//! assert_eq!(timers.poll_due(1_100), Some(token));
//! assert_eq!(timers.poll_due(1_100), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Handle to a scheduled entry in a [`TimerQueue`].
///
/// Tokens are unique per queue for its lifetime and are never reused, so a
/// token held across a cancellation cannot alias a later entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Clone, Copy, Debug)]
struct TimerEntry {
    token: TimerToken,
    deadline: u64,
}

/// Queue of pending deadlines on a caller-supplied monotonic clock.
///
/// The queue is passive: it fires nothing on its own. Hosts drive it by
/// polling with their clock, which keeps the owning component's behavior
/// reproducible in tests (time is just another input).
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    next_token: u64,
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules an entry due at the absolute clock reading `deadline`.
    pub fn schedule_at(&mut self, deadline: u64) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.entries.push(TimerEntry { token, deadline });
        token
    }

    /// Schedules an entry due `delay` units after `now`.
    ///
    /// The deadline saturates at `u64::MAX` rather than wrapping.
    pub fn schedule_after(&mut self, now: u64, delay: u64) -> TimerToken {
        self.schedule_at(now.saturating_add(delay))
    }

    /// Cancels a pending entry.
    ///
    /// Returns `true` if the token was pending and has been removed, `false`
    /// if it already fired, was already cancelled, or never belonged to this
    /// queue.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.token != token);
        self.entries.len() != before
    }

    /// Pops the next entry whose deadline has been reached.
    ///
    /// Entries pop earliest-deadline first; entries sharing a deadline pop in
    /// scheduling order. Returns `None` once nothing further is due at `now`.
    pub fn poll_due(&mut self, now: u64) -> Option<TimerToken> {
        let mut due: Option<(usize, u64)> = None;
        for (i, e) in self.entries.iter().enumerate() {
            if e.deadline > now {
                continue;
            }
            // Strict comparison keeps the first-scheduled entry on ties.
            match due {
                Some((_, best)) if e.deadline >= best => {}
                _ => due = Some((i, e.deadline)),
            }
        }
        due.map(|(i, _)| self.entries.remove(i).token)
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts without a free-running tick can use this to arm a single
    /// runtime timer for the next poll.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Returns `true` if `token` is still pending.
    #[must_use]
    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.entries.iter().any(|e| e.token == token)
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every pending entry.
    ///
    /// Used on teardown; outstanding tokens become permanently stale.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
