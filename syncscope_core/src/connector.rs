// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capabilities the tracker consumes from the tree that owns connectors.
//!
//! The tracker never holds connector objects. It holds handles
//! ([`ConnectorTree::Key`]) and asks the tree about them: which identifier a
//! handle answers to, who its parent is, whether it is a component (and if
//! so whether it is visible and which root it belongs to), and what its
//! direct children are.

use alloc::vec::Vec;
use core::fmt;

use crate::id::ConnectorId;

/// Component-only state of a connector.
///
/// Returned by [`ConnectorTree::as_component`]. Connectors that are not
/// components have no visibility flag and are always treated as visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ComponentState<K> {
    /// Whether the component is visible.
    pub visible: bool,
    /// The root the component currently belongs to, or `None` if detached.
    pub root: Option<K>,
}

/// Read access to a hierarchy of connectors.
///
/// Handles must compare equal exactly when they refer to the same connector
/// instance. The hierarchy is assumed to be acyclic; walks over a cyclic
/// tree do not terminate.
pub trait ConnectorTree {
    /// Identity handle of a connector.
    type Key: Copy + Ord + fmt::Debug;

    /// Returns the identifier the connector answers to.
    fn connector_id(&self, key: Self::Key) -> &ConnectorId;

    /// Returns a human-readable type name, used only for diagnostics.
    fn display_name(&self, key: Self::Key) -> &str;

    /// Returns the parent connector, if any.
    fn parent(&self, key: Self::Key) -> Option<Self::Key>;

    /// Returns the component state if the connector is a component.
    fn as_component(&self, key: Self::Key) -> Option<ComponentState<Self::Key>>;

    /// Returns the direct children of a connector.
    ///
    /// Callers must not rely on the order beyond "every child is yielded
    /// once".
    fn children(&self, key: Self::Key) -> impl Iterator<Item = Self::Key> + '_;
}

/// Returns whether the connector should be treated as visible.
///
/// Non-components are always visible.
#[must_use]
pub fn is_visible<T: ConnectorTree>(tree: &T, key: T::Key) -> bool {
    tree.as_component(key).is_none_or(|c| c.visible)
}

/// Finds the root the connector is attached to.
///
/// A component answers for itself; any other connector defers to its
/// nearest ancestor. Returns `None` if the connector is not attached to any
/// root.
#[must_use]
pub fn owning_root<T: ConnectorTree>(tree: &T, key: T::Key) -> Option<T::Key> {
    let mut current = key;
    loop {
        if let Some(component) = tree.as_component(current) {
            return component.root;
        }
        current = tree.parent(current)?;
    }
}

/// Collects the connector and all its descendants in pre-order.
///
/// Visibility is ignored; every reachable connector is returned.
#[must_use]
pub fn subtree<T: ConnectorTree>(tree: &T, key: T::Key) -> Vec<T::Key> {
    let mut out = Vec::new();
    let mut stack = alloc::vec![key];
    while let Some(next) = stack.pop() {
        out.push(next);
        let first = stack.len();
        stack.extend(tree.children(next));
        // Reverse so the first child is popped first.
        stack[first..].reverse();
    }
    out
}
