// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hard faults raised by registry operations.
//!
//! Both variants of [`SyncError`] indicate a programming error in the code
//! that assigns connector identifiers. They are returned to the caller and
//! the operation that raised them leaves the scope unchanged. Softer
//! conditions (redundant registration, unregistering an unknown connector,
//! reconciliation removals) are reported through
//! [`TraceSink`](crate::trace::TraceSink) instead.

use core::fmt;

use crate::id::ConnectorId;

/// A consistency violation between connector identities and the registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyncError<K: fmt::Debug> {
    /// A different connector is already bound to this identifier.
    #[error("a connector with id {id} is already registered (bound to {registered:?}, rejected {rejected:?})")]
    DuplicateIdentifier {
        /// The contested identifier.
        id: ConnectorId,
        /// The connector currently bound to `id`.
        registered: K,
        /// The connector that attempted to register.
        rejected: K,
    },
    /// The connector being unregistered is not the one bound to its identifier.
    #[error("connector {given:?} with id {id} is not the one registered for that id ({registered:?})")]
    IdentityMismatch {
        /// The identifier the caller tried to unregister.
        id: ConnectorId,
        /// The connector currently bound to `id`.
        registered: K,
        /// The connector passed by the caller.
        given: K,
    },
}

impl<K: fmt::Debug> SyncError<K> {
    /// Returns the identifier involved in the fault.
    #[must_use]
    pub fn id(&self) -> &ConnectorId {
        match self {
            Self::DuplicateIdentifier { id, .. } | Self::IdentityMismatch { id, .. } => id,
        }
    }
}

/// Returned when constructing a [`ConnectorId`] from an empty string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("connector identifiers must not be empty")]
pub struct InvalidConnectorId;
