// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use super::store::ComponentTree;
use crate::id::{ComponentKey, INVALID};

/// An iterator over the direct children of a connector.
///
/// Created by [`ComponentTree::children`].
#[derive(Debug)]
pub struct Children<'a> {
    tree: &'a ComponentTree,
    current: u32,
}

impl<'a> Children<'a> {
    pub(crate) fn new(tree: &'a ComponentTree, first: u32) -> Self {
        Self {
            tree,
            current: first,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = ComponentKey;

    fn next(&mut self) -> Option<ComponentKey> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.tree.next_sibling[idx as usize];
        Some(ComponentKey(idx))
    }
}

/// An iterator from a connector up through its ancestors.
///
/// Created by [`ComponentTree::ancestors`]. The starting connector is not
/// included.
#[derive(Debug)]
pub struct Ancestors<'a> {
    tree: &'a ComponentTree,
    current: u32,
}

impl<'a> Ancestors<'a> {
    pub(crate) fn new(tree: &'a ComponentTree, start: u32) -> Self {
        Self {
            tree,
            current: tree.parent[start as usize],
        }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = ComponentKey;

    fn next(&mut self) -> Option<ComponentKey> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.tree.parent[idx as usize];
        Some(ComponentKey(idx))
    }
}
