// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays connector storage with allocation and topology management.

use alloc::string::String;
use alloc::vec::Vec;

use super::traverse::{Ancestors, Children};
use crate::connector::{ComponentState, ConnectorTree};
use crate::id::{ComponentKey, ConnectorId, INVALID};

/// What a node in the tree is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The top of a UI; owns a synchronization scope. Roots are components.
    Root,
    /// A component: has a visibility flag and belongs to a root once attached.
    Component,
    /// A plain connector (for example an extension) with no visibility flag.
    Connector,
}

/// Struct-of-arrays storage for a connector hierarchy.
///
/// Connectors are addressed by [`ComponentKey`] handles. Detaching a
/// connector only unlinks it; its slot stays valid so handles held elsewhere
/// (for example by a registry that missed the detach) keep answering
/// queries.
#[derive(Debug, Default)]
pub struct ComponentTree {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,

    // -- Identity --
    ids: Vec<ConnectorId>,
    names: Vec<String>,
    kind: Vec<NodeKind>,

    // -- Component state --
    visible: Vec<bool>,

    len: u32,
}

impl ComponentTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Allocation API --

    /// Creates a detached root and returns its handle.
    pub fn create_root(&mut self, id: ConnectorId, name: impl Into<String>) -> ComponentKey {
        self.create(NodeKind::Root, id, name.into())
    }

    /// Creates a detached, visible component and returns its handle.
    pub fn create_component(&mut self, id: ConnectorId, name: impl Into<String>) -> ComponentKey {
        self.create(NodeKind::Component, id, name.into())
    }

    /// Creates a detached plain connector and returns its handle.
    pub fn create_connector(&mut self, id: ConnectorId, name: impl Into<String>) -> ComponentKey {
        self.create(NodeKind::Connector, id, name.into())
    }

    fn create(&mut self, kind: NodeKind, id: ConnectorId, name: String) -> ComponentKey {
        let idx = self.len;
        self.len += 1;
        self.parent.push(INVALID);
        self.first_child.push(INVALID);
        self.next_sibling.push(INVALID);
        self.prev_sibling.push(INVALID);
        self.ids.push(id);
        self.names.push(name);
        self.kind.push(kind);
        self.visible.push(true);
        ComponentKey(idx)
    }

    /// Returns the number of connectors ever created in this tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns whether the tree has no connectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // -- Topology API --

    /// Adds `child` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is unknown, if `child` already has a parent,
    /// or if `child` is a root.
    pub fn add_child(&mut self, parent: ComponentKey, child: ComponentKey) {
        self.validate(parent);
        self.validate(child);
        let p = parent.0;
        let c = child.0;
        assert!(
            self.parent[c as usize] == INVALID,
            "child already has a parent"
        );
        assert!(
            self.kind[c as usize] != NodeKind::Root,
            "a root cannot be attached to a parent"
        );

        self.parent[c as usize] = p;
        self.prev_sibling[c as usize] = INVALID;
        self.next_sibling[c as usize] = INVALID;

        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            // Walk to last child.
            let mut last = self.first_child[p as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
            self.prev_sibling[c as usize] = last;
        }
    }

    /// Removes `child` from its current parent.
    ///
    /// The detached subtree keeps its internal structure.
    ///
    /// # Panics
    ///
    /// Panics if the handle is unknown or the connector has no parent.
    pub fn remove_from_parent(&mut self, child: ComponentKey) {
        self.validate(child);
        let c = child.0;
        assert!(self.parent[c as usize] != INVALID, "connector has no parent");
        self.unlink_from_parent(c);
    }

    /// Returns the parent of a connector, if any.
    #[must_use]
    pub fn parent(&self, key: ComponentKey) -> Option<ComponentKey> {
        self.validate(key);
        let p = self.parent[key.0 as usize];
        (p != INVALID).then_some(ComponentKey(p))
    }

    /// Returns an iterator over the direct children of a connector.
    #[must_use]
    pub fn children(&self, key: ComponentKey) -> Children<'_> {
        self.validate(key);
        Children::new(self, self.first_child[key.0 as usize])
    }

    /// Returns an iterator over the ancestors of a connector, nearest first.
    #[must_use]
    pub fn ancestors(&self, key: ComponentKey) -> Ancestors<'_> {
        self.validate(key);
        Ancestors::new(self, key.0)
    }

    /// Returns the root this connector is attached to, if any.
    ///
    /// A root is attached to itself.
    #[must_use]
    pub fn root_of(&self, key: ComponentKey) -> Option<ComponentKey> {
        let top = self.ancestors(key).last().unwrap_or(key);
        (self.kind[top.0 as usize] == NodeKind::Root).then_some(top)
    }

    // -- Property API --

    /// Returns what kind of node this is.
    #[must_use]
    pub fn kind(&self, key: ComponentKey) -> NodeKind {
        self.validate(key);
        self.kind[key.0 as usize]
    }

    /// Returns the identifier of a connector.
    #[must_use]
    pub fn id(&self, key: ComponentKey) -> &ConnectorId {
        self.validate(key);
        &self.ids[key.0 as usize]
    }

    /// Returns the diagnostic name of a connector.
    #[must_use]
    pub fn name(&self, key: ComponentKey) -> &str {
        self.validate(key);
        &self.names[key.0 as usize]
    }

    /// Sets the visibility flag of a component.
    ///
    /// # Panics
    ///
    /// Panics if the handle is unknown or refers to a plain connector.
    pub fn set_visible(&mut self, key: ComponentKey, visible: bool) {
        self.validate(key);
        assert!(
            self.kind[key.0 as usize] != NodeKind::Connector,
            "plain connectors have no visibility flag"
        );
        self.visible[key.0 as usize] = visible;
    }

    // -- Internal helpers --

    /// Panics if the handle does not belong to this tree.
    fn validate(&self, key: ComponentKey) {
        assert!(
            key.0 < self.len,
            "unknown ComponentKey: {key:?} (len {})",
            self.len
        );
    }

    /// Removes `idx` from its parent's child list.
    fn unlink_from_parent(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != INVALID {
            self.next_sibling[prev as usize] = next;
        } else {
            // Was first child.
            self.first_child[p as usize] = next;
        }

        if next != INVALID {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;
    }
}

impl ConnectorTree for ComponentTree {
    type Key = ComponentKey;

    fn connector_id(&self, key: ComponentKey) -> &ConnectorId {
        self.id(key)
    }

    fn display_name(&self, key: ComponentKey) -> &str {
        self.name(key)
    }

    fn parent(&self, key: ComponentKey) -> Option<ComponentKey> {
        Self::parent(self, key)
    }

    fn as_component(&self, key: ComponentKey) -> Option<ComponentState<ComponentKey>> {
        match self.kind(key) {
            NodeKind::Connector => None,
            NodeKind::Root | NodeKind::Component => Some(ComponentState {
                visible: self.visible[key.0 as usize],
                root: self.root_of(key),
            }),
        }
    }

    fn children(&self, key: ComponentKey) -> impl Iterator<Item = ComponentKey> + '_ {
        Self::children(self, key)
    }
}
