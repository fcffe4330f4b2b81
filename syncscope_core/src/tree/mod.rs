// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference connector hierarchy.
//!
//! [`ComponentTree`] is an arena-backed implementation of
//! [`ConnectorTree`](crate::connector::ConnectorTree). Each node has:
//!
//! - An identity ([`ComponentKey`](crate::id::ComponentKey)) and the
//!   client-visible [`ConnectorId`](crate::id::ConnectorId) it answers to.
//! - Topology: parent, first-child, and sibling links forming an ordered tree.
//! - A [`NodeKind`]: roots and components carry a visibility flag, plain
//!   connectors do not.
//!
//! The tree does not talk to a [`SyncScope`](crate::scope::SyncScope) on its
//! own. Callers pair topology changes with
//! [`SyncScope::attach`](crate::scope::SyncScope::attach) and
//! [`SyncScope::detach`](crate::scope::SyncScope::detach).

mod store;
mod traverse;

pub use store::{ComponentTree, NodeKind};
pub use traverse::{Ancestors, Children};
