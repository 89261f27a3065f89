// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=strata_sections --heading-base-level=0

//! Strata Sections: the ordered registry of content sections.
//!
//! A parallax page is a sequence of content sections, each addressable by a
//! stable key. [`SectionRegistry`] records that sequence once per mount:
//! insertion order is preserved (it defines the navigation surface) and each
//! key can be resolved back to its position in O(1).
//!
//! The registry stores keys only. Positions and sizes change as the host
//! lays the page out, so they are queried live from the host's geometry
//! provider rather than cached here.
//!
//! Keys are an application-chosen type — string ids for a DOM host, node
//! handles for a scene-graph host — anything `Clone + Eq + Hash`.
//!
//! ## Minimal example
//!
//! ```rust
//! use strata_sections::SectionRegistry;
//!
//! let registry: SectionRegistry<&str> =
//!     ["boundry", "projects", "about", "contact"].into_iter().collect();
//!
//! assert_eq!(registry.len(), 4);
//! assert_eq!(registry.index_of(&"about"), Some(2));
//! assert!(registry.contains(&"projects"));
//! assert!(!registry.contains(&"missing"));
//!
//! // Iteration follows insertion order.
//! let keys: Vec<_> = registry.keys().copied().collect();
//! assert_eq!(keys, ["boundry", "projects", "about", "contact"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

/// Insertion-ordered set of section keys with O(1) lookup.
///
/// The ordered keys live inline for the small, fixed section counts typical
/// of a single page; a map from key to position backs `contains`/`index_of`.
/// Duplicate keys are rejected: the first insertion wins and later attempts
/// are no-ops, so a key's index is stable for the registry's lifetime.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry<K> {
    order: SmallVec<[K; 8]>,
    index: HashMap<K, usize>,
}

impl<K> SectionRegistry<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: SmallVec::new(),
            index: HashMap::new(),
        }
    }

    /// Appends a key to the sequence.
    ///
    /// Returns `true` if the key was newly registered, `false` if it was
    /// already present (in which case nothing changes, including its index).
    pub fn insert(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.order.len());
        self.order.push(key);
        true
    }

    /// Returns `true` if `key` is registered.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the position of `key` in the sequence.
    #[must_use]
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Returns the key at `index` in the sequence.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&K> {
        self.order.get(index)
    }

    /// Iterates the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Number of registered sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no sections are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<K> FromIterator<K> for SectionRegistry<K>
where
    K: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut registry = Self::new();
        for key in iter {
            registry.insert(key);
        }
        registry
    }
}
