// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connector bookkeeping for server-driven UI synchronization.
//!
//! `syncscope_core` keeps a server-held hierarchy of UI connectors in step
//! with a remote client representation. It is `no_std` compatible (with
//! `alloc`) and never holds connector objects: connectors are addressed by
//! handles, and everything the crate needs to know about them is asked of a
//! [`ConnectorTree`](connector::ConnectorTree).
//!
//! # Architecture
//!
//! One [`SyncScope`](scope::SyncScope) exists per UI root and owns:
//!
//! ```text
//!   Registry ── ConnectorId ──► handle        (inbound message routing)
//!   DirtySet ── handles pending re-sync       (outbound state)
//! ```
//!
//! **[`registry`]**: Identifier bindings. A binding is never overwritten;
//! a second connector claiming a bound identifier is a hard fault.
//!
//! **[`dirty`]**: The dirty set and [`mark_subtree_dirty`](dirty::mark_subtree_dirty),
//! a pre-order walk that marks every visited node and does not descend
//! into invisible components.
//!
//! **[`scope`]**: The owning scope: registration, dirty marking,
//! attach/detach of whole subtrees, and the reconcile sweep that drops
//! bindings for connectors no longer reachable from the root.
//!
//! **[`connector`]**: The [`ConnectorTree`](connector::ConnectorTree)
//! capability trait and root resolution.
//!
//! **[`tree`]**: [`ComponentTree`](tree::ComponentTree), an arena-backed
//! reference hierarchy.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! bookkeeping diagnostics, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! **[`config`]**: [`ScopeConfig`](config::ScopeConfig).
//!
//! **[`error`]**: [`SyncError`](error::SyncError), the hard faults.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod connector;
pub mod dirty;
pub mod error;
pub mod id;
pub mod registry;
pub mod scope;
pub mod trace;
pub mod tree;
