// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The synchronization scope: one registry and one dirty set per UI root.
//!
//! A [`SyncScope`] is created for a root connector and keeps that root for
//! its whole lifetime. It is driven from outside:
//!
//! ```text
//!   tree attach ──► SyncScope::attach ──► register + mark dirty
//!   tree detach ──► SyncScope::detach ──► unregister + mark clean
//!
//!   component mutation ──► SyncScope::mark_dirty
//!
//!   pass boundary:
//!     SyncScope::take_dirty ──► serializer ──► client
//!     (or mark_all_dirty for a full refresh)
//!
//!   inbound message ──► SyncScope::connector(id)
//! ```
//!
//! Operations are synchronous and never block. A scope has no internal
//! locking; hosts that share scopes between threads must give one thread
//! exclusive access for the duration of a synchronization turn.
//!
//! Every operation takes a [`Tracer`]. Pass [`Tracer::none`] to discard
//! diagnostics.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use crate::config::ScopeConfig;
use crate::connector::{ConnectorTree, is_visible, owning_root, subtree};
use crate::dirty::{DirtySet, mark_subtree_dirty};
use crate::error::SyncError;
use crate::id::ConnectorId;
use crate::registry::{Registration, Registry, Unregistration};
use crate::trace::{ConnectorEventKind, ScopeEvent, ScopeEventKind, Tracer};

/// Registry and dirty-set bookkeeping for one UI root.
///
/// ```
/// use syncscope_core::id::ConnectorId;
/// use syncscope_core::scope::SyncScope;
/// use syncscope_core::trace::Tracer;
/// use syncscope_core::tree::ComponentTree;
///
/// let mut tree = ComponentTree::new();
/// let root = tree.create_root(ConnectorId::new("root").unwrap(), "Root");
/// let label = tree.create_component(ConnectorId::new("label").unwrap(), "Label");
/// tree.add_child(root, label);
///
/// let mut scope = SyncScope::new(root);
/// let mut tracer = Tracer::none();
/// scope.attach(&tree, root, &mut tracer).unwrap();
///
/// assert_eq!(scope.connector("label"), Some(label));
/// assert_eq!(scope.take_dirty(), vec![root, label]);
/// ```
#[derive(Clone, Debug)]
pub struct SyncScope<K> {
    root: K,
    registry: Registry<K>,
    dirty: DirtySet<K>,
    config: ScopeConfig,
}

impl<K: Copy + Ord + fmt::Debug> SyncScope<K> {
    /// Creates an empty scope for `root` with the default configuration.
    #[must_use]
    pub fn new(root: K) -> Self {
        Self::with_config(root, ScopeConfig::default())
    }

    /// Creates an empty scope for `root`.
    #[must_use]
    pub fn with_config(root: K, config: ScopeConfig) -> Self {
        Self {
            root,
            registry: Registry::new(),
            dirty: DirtySet::new(),
            config,
        }
    }

    /// Returns the root this scope belongs to.
    #[must_use]
    pub fn root(&self) -> K {
        self.root
    }

    /// Returns the scope configuration.
    #[must_use]
    pub fn config(&self) -> ScopeConfig {
        self.config
    }

    /// Returns the identifier bindings.
    #[must_use]
    pub fn registry(&self) -> &Registry<K> {
        &self.registry
    }

    // -- Registry API --

    /// Binds the connector to its identifier.
    ///
    /// Registering an already registered connector again is reported and
    /// otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::DuplicateIdentifier`] if the identifier is bound
    /// to a different connector. The scope is unchanged.
    pub fn register<T>(
        &mut self,
        tree: &T,
        key: K,
        tracer: &mut Tracer<'_>,
    ) -> Result<Registration, SyncError<K>>
    where
        T: ConnectorTree<Key = K>,
    {
        match self.registry.register(tree.connector_id(key), key) {
            Ok(outcome) => {
                let kind = match outcome {
                    Registration::Inserted => ConnectorEventKind::Registered,
                    Registration::AlreadyRegistered => ConnectorEventKind::RedundantRegistration,
                };
                tracer.describe(tree, kind, key);
                Ok(outcome)
            }
            Err(err) => {
                tracer.describe(tree, ConnectorEventKind::DuplicateIdentifier, key);
                Err(err)
            }
        }
    }

    /// Removes the connector's binding.
    ///
    /// Unregistering a connector whose identifier has no binding is reported
    /// and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::IdentityMismatch`] if the identifier is bound to
    /// a different connector. The scope is unchanged.
    pub fn unregister<T>(
        &mut self,
        tree: &T,
        key: K,
        tracer: &mut Tracer<'_>,
    ) -> Result<Unregistration, SyncError<K>>
    where
        T: ConnectorTree<Key = K>,
    {
        match self.registry.unregister(tree.connector_id(key), key) {
            Ok(outcome) => {
                let kind = match outcome {
                    Unregistration::Removed => ConnectorEventKind::Unregistered,
                    Unregistration::NotRegistered => ConnectorEventKind::UnknownUnregistration,
                };
                tracer.describe(tree, kind, key);
                Ok(outcome)
            }
            Err(err) => {
                tracer.describe(tree, ConnectorEventKind::IdentityMismatch, key);
                Err(err)
            }
        }
    }

    /// Returns the connector registered under `id`, if any.
    #[must_use]
    pub fn connector(&self, id: &str) -> Option<K> {
        self.registry.get(id)
    }

    /// Removes bindings for connectors no longer attached to this scope's
    /// root, returning the removed bindings.
    ///
    /// Correct callers unregister connectors when they detach, so every
    /// removal here points at a missed [`detach`](Self::detach) and is
    /// reported as such.
    pub fn reconcile<T>(&mut self, tree: &T, tracer: &mut Tracer<'_>) -> Vec<(ConnectorId, K)>
    where
        T: ConnectorTree<Key = K>,
    {
        let root = self.root;
        let removed = self
            .registry
            .retain(|key| owning_root(tree, key) == Some(root));
        for &(_, key) in &removed {
            tracer.describe(tree, ConnectorEventKind::ReconcileRemoval, key);
        }
        tracer.scope(&ScopeEvent {
            kind: ScopeEventKind::Reconciled,
            count: removed.len(),
        });
        removed
    }

    // -- Dirty API --

    /// Marks the connector dirty.
    pub fn mark_dirty<T>(&mut self, tree: &T, key: K, tracer: &mut Tracer<'_>)
    where
        T: ConnectorTree<Key = K>,
    {
        if self.dirty.mark(key) && self.config.dirty_transitions {
            tracer.describe(tree, ConnectorEventKind::MarkedDirty, key);
        }
    }

    /// Marks the connector clean.
    pub fn mark_clean<T>(&mut self, tree: &T, key: K, tracer: &mut Tracer<'_>)
    where
        T: ConnectorTree<Key = K>,
    {
        if self.dirty.unmark(key) && self.config.dirty_transitions {
            tracer.describe(tree, ConnectorEventKind::MarkedClean, key);
        }
    }

    /// Marks every visible connector under the scope's root dirty.
    ///
    /// Returns how many connectors became dirty. See
    /// [`mark_all_dirty_from`](Self::mark_all_dirty_from).
    pub fn mark_all_dirty<T>(&mut self, tree: &T, tracer: &mut Tracer<'_>) -> usize
    where
        T: ConnectorTree<Key = K>,
    {
        self.mark_all_dirty_from(tree, self.root, tracer)
    }

    /// Marks `from` and its descendants dirty, pruning invisible subtrees.
    ///
    /// An invisible component is marked, but nothing below it is visited.
    /// This also applies when `from` itself is invisible. Returns how many
    /// connectors became dirty.
    pub fn mark_all_dirty_from<T>(&mut self, tree: &T, from: K, tracer: &mut Tracer<'_>) -> usize
    where
        T: ConnectorTree<Key = K>,
    {
        let before = self.dirty.len();
        let transitions = self.config.dirty_transitions;
        let dirty = &mut self.dirty;
        mark_subtree_dirty(
            from,
            &|key| is_visible(tree, key),
            &|key| tree.children(key),
            &mut |key| {
                if dirty.mark(key) && transitions {
                    tracer.describe(tree, ConnectorEventKind::MarkedDirty, key);
                }
            },
        );
        let count = self.dirty.len() - before;
        tracer.scope(&ScopeEvent {
            kind: ScopeEventKind::AllDirty,
            count,
        });
        count
    }

    /// Marks every connector clean, returning how many were dirty.
    pub fn mark_all_clean(&mut self, tracer: &mut Tracer<'_>) -> usize {
        let count = self.dirty.clear();
        tracer.scope(&ScopeEvent {
            kind: ScopeEventKind::AllClean,
            count,
        });
        count
    }

    /// Returns the connectors pending synchronization.
    ///
    /// The set may contain connectors that are currently invisible.
    #[must_use]
    pub fn dirty_connectors(&self) -> &DirtySet<K> {
        &self.dirty
    }

    /// Returns whether the connector is pending synchronization.
    #[must_use]
    pub fn is_dirty(&self, key: K) -> bool {
        self.dirty.contains(key)
    }

    /// Removes and returns every dirty connector, for serialization.
    pub fn take_dirty(&mut self) -> Vec<K> {
        self.dirty.take()
    }

    // -- Lifecycle API --

    /// Registers `key` and every descendant and marks them dirty.
    ///
    /// Call after attaching the subtree to this scope's root.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::DuplicateIdentifier`] if any connector in the
    /// subtree collides with a binding or with another connector in the
    /// subtree. Nothing is registered or marked in that case.
    pub fn attach<T>(&mut self, tree: &T, key: K, tracer: &mut Tracer<'_>) -> Result<(), SyncError<K>>
    where
        T: ConnectorTree<Key = K>,
    {
        let keys = subtree(tree, key);

        let mut pending: BTreeMap<&ConnectorId, K> = BTreeMap::new();
        for &k in &keys {
            let id = tree.connector_id(k);
            let check = match pending.get(id) {
                Some(&registered) => Err(SyncError::DuplicateIdentifier {
                    id: id.clone(),
                    registered,
                    rejected: k,
                }),
                None => self.registry.check_register(id, k).map(drop),
            };
            if let Err(err) = check {
                tracer.describe(tree, ConnectorEventKind::DuplicateIdentifier, k);
                return Err(err);
            }
            pending.insert(id, k);
        }

        for &k in &keys {
            self.register(tree, k, tracer)?;
            self.mark_dirty(tree, k, tracer);
        }
        Ok(())
    }

    /// Unregisters `key` and every descendant and marks them clean.
    ///
    /// Call before or after detaching the subtree from this scope's root.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::IdentityMismatch`] if any connector in the
    /// subtree is not the one bound to its identifier. Nothing is
    /// unregistered or marked in that case.
    pub fn detach<T>(&mut self, tree: &T, key: K, tracer: &mut Tracer<'_>) -> Result<(), SyncError<K>>
    where
        T: ConnectorTree<Key = K>,
    {
        let keys = subtree(tree, key);

        for &k in &keys {
            if let Err(err) = self.registry.check_unregister(tree.connector_id(k), k) {
                tracer.describe(tree, ConnectorEventKind::IdentityMismatch, k);
                return Err(err);
            }
        }

        for &k in &keys {
            self.unregister(tree, k, tracer)?;
            self.mark_clean(tree, k, tracer);
        }
        if self.config.reconcile_after_detach {
            self.reconcile(tree, tracer);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::id::ComponentKey;
    use crate::tree::ComponentTree;

    fn id(s: &str) -> ConnectorId {
        ConnectorId::new(s).unwrap()
    }

    /// `root -> [a (visible), b (invisible) -> [c -> [d]]]`
    struct Fixture {
        tree: ComponentTree,
        root: ComponentKey,
        a: ComponentKey,
        b: ComponentKey,
        c: ComponentKey,
        d: ComponentKey,
    }

    fn fixture() -> Fixture {
        let mut tree = ComponentTree::new();
        let root = tree.create_root(id("root"), "Root");
        let a = tree.create_component(id("a"), "Label");
        let b = tree.create_component(id("b"), "Panel");
        let c = tree.create_component(id("c"), "VerticalLayout");
        let d = tree.create_component(id("d"), "Button");
        tree.add_child(root, a);
        tree.add_child(root, b);
        tree.add_child(b, c);
        tree.add_child(c, d);
        tree.set_visible(b, false);
        Fixture {
            tree,
            root,
            a,
            b,
            c,
            d,
        }
    }

    #[test]
    fn new_scope_is_empty_and_quiet() {
        let f = fixture();
        let scope = SyncScope::new(f.root);
        assert_eq!(scope.root(), f.root);
        assert_eq!(scope.config(), ScopeConfig::quiet());
        assert!(scope.registry().is_empty());
        assert!(scope.dirty_connectors().is_empty());
    }

    #[test]
    fn register_then_lookup() {
        let f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        for key in [f.root, f.a, f.b] {
            scope.register(&f.tree, key, &mut tracer).unwrap();
        }
        assert_eq!(scope.connector("root"), Some(f.root));
        assert_eq!(scope.connector("a"), Some(f.a));
        assert_eq!(scope.connector("b"), Some(f.b));
        assert_eq!(scope.connector("c"), None);
    }

    #[test]
    fn reregistration_leaves_state_unchanged() {
        let f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        scope.register(&f.tree, f.a, &mut tracer).unwrap();
        scope.mark_dirty(&f.tree, f.a, &mut tracer);

        assert_eq!(
            scope.register(&f.tree, f.a, &mut tracer),
            Ok(Registration::AlreadyRegistered)
        );
        assert_eq!(scope.registry().len(), 1);
        assert!(scope.is_dirty(f.a));
        assert_eq!(scope.dirty_connectors().len(), 1);
    }

    #[test]
    fn duplicate_identifier_is_rejected() {
        let mut f = fixture();
        let impostor = f.tree.create_component(id("a"), "Label");
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        scope.register(&f.tree, f.a, &mut tracer).unwrap();

        let err = scope.register(&f.tree, impostor, &mut tracer).unwrap_err();
        assert_eq!(
            err,
            SyncError::DuplicateIdentifier {
                id: id("a"),
                registered: f.a,
                rejected: impostor,
            }
        );
        assert_eq!(scope.connector("a"), Some(f.a));
        assert_eq!(scope.registry().len(), 1);
    }

    #[test]
    fn unregister_unknown_is_noop() {
        let f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        scope.register(&f.tree, f.a, &mut tracer).unwrap();

        assert_eq!(
            scope.unregister(&f.tree, f.b, &mut tracer),
            Ok(Unregistration::NotRegistered)
        );
        assert_eq!(scope.registry().len(), 1);
    }

    #[test]
    fn unregister_wrong_instance_is_rejected() {
        let mut f = fixture();
        let impostor = f.tree.create_component(id("a"), "Label");
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        scope.register(&f.tree, f.a, &mut tracer).unwrap();

        let err = scope.unregister(&f.tree, impostor, &mut tracer).unwrap_err();
        assert!(
            matches!(err, SyncError::IdentityMismatch { .. }),
            "unexpected error {err:?}"
        );
        assert_eq!(scope.connector("a"), Some(f.a));
    }

    #[test]
    fn mark_dirty_and_clean_are_idempotent() {
        let f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();

        scope.mark_dirty(&f.tree, f.a, &mut tracer);
        scope.mark_dirty(&f.tree, f.a, &mut tracer);
        assert!(scope.is_dirty(f.a));
        assert_eq!(scope.dirty_connectors().len(), 1);

        scope.mark_clean(&f.tree, f.a, &mut tracer);
        scope.mark_clean(&f.tree, f.a, &mut tracer);
        assert!(!scope.is_dirty(f.a));
        assert!(scope.dirty_connectors().is_empty());
    }

    #[test]
    fn mark_all_clean_empties_dirty_set() {
        let f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        scope.mark_dirty(&f.tree, f.a, &mut tracer);
        scope.mark_dirty(&f.tree, f.d, &mut tracer);

        assert_eq!(scope.mark_all_clean(&mut tracer), 2);
        assert!(scope.dirty_connectors().is_empty());
        assert_eq!(scope.mark_all_clean(&mut tracer), 0);
    }

    #[test]
    fn mark_all_dirty_prunes_invisible_subtree() {
        let f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();

        assert_eq!(scope.mark_all_dirty(&f.tree, &mut tracer), 3);
        let dirty: Vec<_> = scope.dirty_connectors().iter().collect();
        assert_eq!(dirty, vec![f.root, f.a, f.b]);
        assert!(!scope.is_dirty(f.c));
        assert!(!scope.is_dirty(f.d));
    }

    #[test]
    fn mark_all_dirty_covers_visible_chain() {
        let mut f = fixture();
        f.tree.set_visible(f.b, true);
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();

        scope.mark_all_dirty_from(&f.tree, f.b, &mut tracer);
        let dirty: Vec<_> = scope.dirty_connectors().iter().collect();
        assert_eq!(dirty, vec![f.b, f.c, f.d]);
    }

    #[test]
    fn mark_all_dirty_from_invisible_start_marks_only_start() {
        let f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();

        assert_eq!(scope.mark_all_dirty_from(&f.tree, f.b, &mut tracer), 1);
        assert_eq!(scope.take_dirty(), vec![f.b]);
    }

    #[test]
    fn plain_connectors_are_walked_as_visible() {
        let mut f = fixture();
        let ext = f.tree.create_connector(id("x"), "Tooltip");
        let inner = f.tree.create_component(id("y"), "Label");
        f.tree.add_child(f.a, ext);
        f.tree.add_child(ext, inner);
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();

        scope.mark_all_dirty(&f.tree, &mut tracer);
        assert!(scope.is_dirty(ext));
        assert!(scope.is_dirty(inner));
    }

    #[test]
    fn take_dirty_drains() {
        let f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        scope.mark_dirty(&f.tree, f.d, &mut tracer);
        scope.mark_dirty(&f.tree, f.a, &mut tracer);

        assert_eq!(scope.take_dirty(), vec![f.a, f.d]);
        assert!(scope.dirty_connectors().is_empty());
    }

    #[test]
    fn reconcile_removes_only_unreachable_bindings() {
        let mut f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        scope.attach(&f.tree, f.root, &mut tracer).unwrap();
        assert_eq!(scope.registry().len(), 5);

        // Detach from the tree without telling the scope.
        f.tree.remove_from_parent(f.a);
        let removed = scope.reconcile(&f.tree, &mut tracer);

        assert_eq!(removed, vec![(id("a"), f.a)]);
        assert_eq!(scope.connector("a"), None);
        for (name, key) in [("root", f.root), ("b", f.b), ("c", f.c), ("d", f.d)] {
            assert_eq!(scope.connector(name), Some(key), "{name} must survive");
        }
    }

    #[test]
    fn reconcile_uses_parent_chain_for_plain_connectors() {
        let mut f = fixture();
        let ext = f.tree.create_connector(id("x"), "Tooltip");
        f.tree.add_child(f.d, ext);
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        scope.attach(&f.tree, f.root, &mut tracer).unwrap();

        assert!(scope.reconcile(&f.tree, &mut tracer).is_empty());

        f.tree.remove_from_parent(f.c);
        let removed = scope.reconcile(&f.tree, &mut tracer);
        let keys: Vec<_> = removed.into_iter().map(|(_, k)| k).collect();
        assert_eq!(keys, vec![f.c, f.d, ext]);
    }

    #[test]
    fn reconcile_drops_connectors_of_another_root() {
        let mut f = fixture();
        let other_root = f.tree.create_root(id("other"), "Root");
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        scope.register(&f.tree, f.a, &mut tracer).unwrap();
        scope.register(&f.tree, other_root, &mut tracer).unwrap();

        let removed = scope.reconcile(&f.tree, &mut tracer);
        assert_eq!(removed, vec![(id("other"), other_root)]);
    }

    #[test]
    fn attach_registers_and_dirties_whole_subtree() {
        let f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        scope.attach(&f.tree, f.root, &mut tracer).unwrap();

        assert_eq!(scope.registry().len(), 5);
        // Attach ignores visibility: hidden connectors still need bindings.
        assert!(scope.is_dirty(f.d));
        assert_eq!(scope.dirty_connectors().len(), 5);
    }

    #[test]
    fn attach_collision_changes_nothing() {
        let mut f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        scope.register(&f.tree, f.root, &mut tracer).unwrap();

        let panel = f.tree.create_component(id("panel"), "Panel");
        let clash = f.tree.create_component(id("root"), "Label");
        f.tree.add_child(panel, clash);

        let err = scope.attach(&f.tree, panel, &mut tracer).unwrap_err();
        assert_eq!(err.id().as_str(), "root");
        assert_eq!(scope.connector("panel"), None, "nothing may be registered");
        assert!(scope.dirty_connectors().is_empty());
    }

    #[test]
    fn attach_collision_inside_subtree_is_rejected() {
        let mut f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();

        let panel = f.tree.create_component(id("panel"), "Panel");
        let first = f.tree.create_component(id("same"), "Label");
        let second = f.tree.create_component(id("same"), "Label");
        f.tree.add_child(panel, first);
        f.tree.add_child(panel, second);

        let err = scope.attach(&f.tree, panel, &mut tracer).unwrap_err();
        assert_eq!(
            err,
            SyncError::DuplicateIdentifier {
                id: id("same"),
                registered: first,
                rejected: second,
            }
        );
        assert!(scope.registry().is_empty());
    }

    #[test]
    fn detach_unregisters_and_cleans_subtree() {
        let mut f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        scope.attach(&f.tree, f.root, &mut tracer).unwrap();

        scope.detach(&f.tree, f.b, &mut tracer).unwrap();
        f.tree.remove_from_parent(f.b);

        for name in ["b", "c", "d"] {
            assert_eq!(scope.connector(name), None, "{name} must be unregistered");
        }
        assert!(!scope.is_dirty(f.c));
        assert!(scope.is_dirty(f.a));
        assert!(scope.reconcile(&f.tree, &mut tracer).is_empty());
    }

    #[test]
    fn detach_mismatch_changes_nothing() {
        let mut f = fixture();
        let mut scope = SyncScope::new(f.root);
        let mut tracer = Tracer::none();
        scope.attach(&f.tree, f.root, &mut tracer).unwrap();

        let panel = f.tree.create_component(id("panel"), "Panel");
        let impostor = f.tree.create_component(id("a"), "Label");
        f.tree.add_child(panel, impostor);

        let err = scope.detach(&f.tree, panel, &mut tracer).unwrap_err();
        assert!(matches!(err, SyncError::IdentityMismatch { .. }));
        assert_eq!(scope.registry().len(), 5);
        assert_eq!(scope.connector("a"), Some(f.a));
    }

    #[test]
    fn detach_with_reconcile_sweeps_stale_bindings() {
        let mut f = fixture();
        let mut scope = SyncScope::with_config(f.root, ScopeConfig::verbose());
        assert!(scope.config().reconcile_after_detach);
        let mut tracer = Tracer::none();
        scope.attach(&f.tree, f.root, &mut tracer).unwrap();

        // `a` leaves the tree unnoticed; detaching `b` later sweeps it up.
        f.tree.remove_from_parent(f.a);
        f.tree.remove_from_parent(f.b);
        scope.detach(&f.tree, f.b, &mut tracer).unwrap();

        assert_eq!(scope.registry().len(), 1);
        assert_eq!(scope.connector("root"), Some(f.root));
    }
}
