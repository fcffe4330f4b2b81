// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connector and component identity types.

use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

use crate::error::InvalidConnectorId;

/// Sentinel value indicating "no component" in index fields.
pub const INVALID: u32 = u32::MAX;

/// The client-visible identifier of a connector.
///
/// Identifiers are assigned by the connector itself and are opaque to the
/// tracker. They are never empty, so a registry entry always has a key the
/// client can address.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConnectorId(String);

impl ConnectorId {
    /// Creates an identifier from a non-empty string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConnectorId`] if `id` is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidConnectorId> {
        let id = id.into();
        if id.is_empty() {
            return Err(InvalidConnectorId);
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConnectorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ConnectorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ConnectorId {
    type Error = InvalidConnectorId;

    fn try_from(id: &str) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl fmt::Debug for ConnectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConnectorId({:?})", self.0)
    }
}

impl fmt::Display for ConnectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A handle to a connector in a [`ComponentTree`](crate::tree::ComponentTree).
///
/// Handles compare by slot, so two handles are equal exactly when they name
/// the same connector instance. Slots are never reused.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentKey(pub(crate) u32);

impl fmt::Debug for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentKey({})", self.0)
    }
}
