// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-scope configuration.

/// Configuration for a [`SyncScope`](crate::scope::SyncScope).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeConfig {
    /// Emit a [`MarkedDirty`](crate::trace::ConnectorEventKind::MarkedDirty)
    /// or [`MarkedClean`](crate::trace::ConnectorEventKind::MarkedClean)
    /// event whenever a connector's membership in the dirty set changes.
    ///
    /// Bulk operations emit one event per connector when this is on, which
    /// is noisy for large trees.
    pub dirty_transitions: bool,
    /// Run [`SyncScope::reconcile`](crate::scope::SyncScope::reconcile)
    /// after every successful
    /// [`SyncScope::detach`](crate::scope::SyncScope::detach).
    ///
    /// Reconcile walks every binding, so this is meant for debug builds that
    /// want detach bookkeeping bugs to surface early.
    pub reconcile_after_detach: bool,
}

impl ScopeConfig {
    /// Scope-wide events only.
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            dirty_transitions: false,
            reconcile_after_detach: false,
        }
    }

    /// Every transition reported, stale bindings swept on detach.
    #[must_use]
    pub const fn verbose() -> Self {
        Self {
            dirty_transitions: true,
            reconcile_after_detach: true,
        }
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self::quiet()
    }
}
