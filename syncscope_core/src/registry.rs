// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifier to connector bindings.
//!
//! The [`Registry`] lets inbound client messages address connectors by
//! [`ConnectorId`] without the client ever holding a server-side handle. An
//! identifier resolves to the same connector for as long as it stays
//! registered: a binding is never overwritten, only removed.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use crate::error::SyncError;
use crate::id::ConnectorId;

/// Outcome of a successful [`Registry::register`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Registration {
    /// A new binding was inserted.
    Inserted,
    /// The connector was already bound to its identifier; nothing changed.
    AlreadyRegistered,
}

/// Outcome of a successful [`Registry::unregister`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unregistration {
    /// The binding was removed.
    Removed,
    /// No binding existed for the identifier; nothing changed.
    NotRegistered,
}

/// Bindings from connector identifiers to connector handles.
#[derive(Clone, Debug)]
pub struct Registry<K> {
    by_id: BTreeMap<ConnectorId, K>,
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self {
            by_id: BTreeMap::new(),
        }
    }
}

impl<K: Copy + Eq + fmt::Debug> Registry<K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks what [`register`](Self::register) would do without changing
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::DuplicateIdentifier`] if `id` is bound to a
    /// different connector.
    pub fn check_register(&self, id: &ConnectorId, key: K) -> Result<Registration, SyncError<K>> {
        match self.by_id.get(id) {
            None => Ok(Registration::Inserted),
            Some(&registered) if registered == key => Ok(Registration::AlreadyRegistered),
            Some(&registered) => Err(SyncError::DuplicateIdentifier {
                id: id.clone(),
                registered,
                rejected: key,
            }),
        }
    }

    /// Binds `id` to `key`.
    ///
    /// Registering the connector that is already bound to `id` is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::DuplicateIdentifier`] if `id` is bound to a
    /// different connector. The registry is unchanged.
    pub fn register(&mut self, id: &ConnectorId, key: K) -> Result<Registration, SyncError<K>> {
        let outcome = self.check_register(id, key)?;
        if outcome == Registration::Inserted {
            self.by_id.insert(id.clone(), key);
        }
        Ok(outcome)
    }

    /// Checks what [`unregister`](Self::unregister) would do without
    /// changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::IdentityMismatch`] if `id` is bound to a
    /// different connector.
    pub fn check_unregister(
        &self,
        id: &ConnectorId,
        key: K,
    ) -> Result<Unregistration, SyncError<K>> {
        match self.by_id.get(id) {
            None => Ok(Unregistration::NotRegistered),
            Some(&registered) if registered == key => Ok(Unregistration::Removed),
            Some(&registered) => Err(SyncError::IdentityMismatch {
                id: id.clone(),
                registered,
                given: key,
            }),
        }
    }

    /// Removes the binding of `id` to `key`.
    ///
    /// Unregistering an identifier with no binding is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::IdentityMismatch`] if `id` is bound to a
    /// different connector. The registry is unchanged.
    pub fn unregister(
        &mut self,
        id: &ConnectorId,
        key: K,
    ) -> Result<Unregistration, SyncError<K>> {
        let outcome = self.check_unregister(id, key)?;
        if outcome == Unregistration::Removed {
            self.by_id.remove(id);
        }
        Ok(outcome)
    }

    /// Returns the connector bound to `id`, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<K> {
        self.by_id.get(id).copied()
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns whether the registry has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Iterates over all bindings in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&ConnectorId, K)> + '_ {
        self.by_id.iter().map(|(id, &key)| (id, key))
    }

    /// Removes every binding whose connector fails `keep`, returning the
    /// removed bindings in identifier order.
    pub fn retain(&mut self, mut keep: impl FnMut(K) -> bool) -> Vec<(ConnectorId, K)> {
        let mut removed = Vec::new();
        self.by_id.retain(|id, key| {
            if keep(*key) {
                true
            } else {
                removed.push((id.clone(), *key));
                false
            }
        });
        removed
    }
}
