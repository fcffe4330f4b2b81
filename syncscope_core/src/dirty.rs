// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty tracking for connector synchronization.
//!
//! A connector is *dirty* when its server-side state changed since the last
//! synchronization pass and must be re-sent to the client. [`DirtySet`] is a
//! plain membership set keyed by connector handle: no ordering, no
//! multiplicity, no reasons.
//!
//! # Subtree propagation
//!
//! [`mark_subtree_dirty`] walks a hierarchy depth-first in pre-order and
//! marks every node it visits. A node whose visibility test fails is still
//! marked, but its descendants are not visited: an invisible component
//! reports its own state, while the state of its children is irrelevant to
//! the client until the subtree is shown again.
//!
//! The dirty set may contain connectors that have since become invisible.
//! Filtering the output of a pass by visibility is the serializer's job.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

/// The set of connectors pending re-synchronization.
#[derive(Clone, Debug)]
pub struct DirtySet<K> {
    keys: BTreeSet<K>,
}

impl<K> Default for DirtySet<K> {
    fn default() -> Self {
        Self {
            keys: BTreeSet::new(),
        }
    }
}

impl<K: Copy + Ord> DirtySet<K> {
    /// Creates an empty dirty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` dirty. Returns `true` if it was clean before.
    pub fn mark(&mut self, key: K) -> bool {
        self.keys.insert(key)
    }

    /// Marks `key` clean. Returns `true` if it was dirty before.
    pub fn unmark(&mut self, key: K) -> bool {
        self.keys.remove(&key)
    }

    /// Marks every connector clean, returning how many were dirty.
    pub fn clear(&mut self) -> usize {
        let count = self.keys.len();
        self.keys.clear();
        count
    }

    /// Removes and returns every dirty connector.
    pub fn take(&mut self) -> Vec<K> {
        core::mem::take(&mut self.keys).into_iter().collect()
    }

    /// Returns whether `key` is dirty.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.keys.contains(&key)
    }

    /// Returns the number of dirty connectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns whether no connector is dirty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the dirty connectors.
    ///
    /// The order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.keys.iter().copied()
    }
}

impl<K: Copy + Ord> Extend<K> for DirtySet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.keys.extend(iter);
    }
}

/// Marks `from` and its reachable descendants, pruning at invisible nodes.
///
/// `is_visible` answers the visibility test for a node, `children`
/// enumerates its direct children, and `mark` is called once for every
/// visited node, parents before children. Children of a node that fails the
/// visibility test are never enumerated.
///
/// The hierarchy must be acyclic.
pub fn mark_subtree_dirty<K, V, C, I, M>(from: K, is_visible: &V, children: &C, mark: &mut M)
where
    K: Copy,
    V: Fn(K) -> bool,
    C: Fn(K) -> I,
    I: IntoIterator<Item = K>,
    M: FnMut(K),
{
    mark(from);
    if !is_visible(from) {
        return;
    }
    for child in children(from) {
        mark_subtree_dirty(child, is_visible, children, mark);
    }
}
