// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for registry and dirty-set bookkeeping.
//!
//! This module provides a [`TraceSink`] trait that scope operations call
//! whenever something worth reporting happens. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing and no event is ever
//! built. When **on**, each method performs a single `Option` branch before
//! dispatching.
//!
//! Every event has a [`DiagnosticLevel`]. Hard faults are still returned as
//! [`SyncError`](crate::error::SyncError)s; the matching warning event is
//! emitted just before the error is returned.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use core::fmt;

use crate::connector::ConnectorTree;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Severity of a diagnostic event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticLevel {
    /// Routine bookkeeping.
    Debug,
    /// Harmless but unexpected calls.
    Info,
    /// Consistency violations.
    Warn,
}

impl DiagnosticLevel {
    /// Returns a lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }
}

/// What happened to a single connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectorEventKind {
    /// The connector was bound to its identifier.
    Registered,
    /// The connector's binding was removed.
    Unregistered,
    /// The connector was registered again under its existing binding.
    RedundantRegistration,
    /// Unregistration of a connector whose identifier had no binding.
    UnknownUnregistration,
    /// Registration rejected: the identifier is bound to another connector.
    DuplicateIdentifier,
    /// Unregistration rejected: the identifier is bound to another connector.
    IdentityMismatch,
    /// A reconcile sweep removed a binding for an unreachable connector.
    ReconcileRemoval,
    /// The connector went from clean to dirty.
    MarkedDirty,
    /// The connector went from dirty to clean.
    MarkedClean,
}

impl ConnectorEventKind {
    /// Returns the severity of this kind of event.
    #[must_use]
    pub const fn level(self) -> DiagnosticLevel {
        match self {
            Self::Registered | Self::Unregistered | Self::MarkedDirty | Self::MarkedClean => {
                DiagnosticLevel::Debug
            }
            Self::RedundantRegistration | Self::UnknownUnregistration | Self::ReconcileRemoval => {
                DiagnosticLevel::Info
            }
            Self::DuplicateIdentifier | Self::IdentityMismatch => DiagnosticLevel::Warn,
        }
    }

    /// Returns a short kebab-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Unregistered => "unregistered",
            Self::RedundantRegistration => "redundant-registration",
            Self::UnknownUnregistration => "unknown-unregistration",
            Self::DuplicateIdentifier => "duplicate-identifier",
            Self::IdentityMismatch => "identity-mismatch",
            Self::ReconcileRemoval => "reconcile-removal",
            Self::MarkedDirty => "dirty",
            Self::MarkedClean => "clean",
        }
    }
}

/// What happened to a whole scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScopeEventKind {
    /// A subtree walk marked connectors dirty.
    AllDirty,
    /// The dirty set was emptied.
    AllClean,
    /// A reconcile sweep finished.
    Reconciled,
}

impl ScopeEventKind {
    /// Returns the severity of this kind of event.
    #[must_use]
    pub const fn level(self) -> DiagnosticLevel {
        DiagnosticLevel::Debug
    }

    /// Returns a short kebab-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllDirty => "all-dirty",
            Self::AllClean => "all-clean",
            Self::Reconciled => "reconciled",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Type name and identifier of a connector, rendered as `Name(id)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConnectorLabel<'a> {
    /// Diagnostic type name.
    pub name: &'a str,
    /// Client-visible identifier.
    pub id: &'a str,
}

impl<'a> ConnectorLabel<'a> {
    /// Builds the label for `key` from the tree.
    #[must_use]
    pub fn of<T: ConnectorTree>(tree: &'a T, key: T::Key) -> Self {
        Self {
            name: tree.display_name(key),
            id: tree.connector_id(key).as_str(),
        }
    }
}

impl fmt::Display for ConnectorLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.id)
    }
}

/// Emitted for per-connector bookkeeping.
#[derive(Clone, Copy, Debug)]
pub struct ConnectorEvent<'a> {
    /// What happened.
    pub kind: ConnectorEventKind,
    /// The connector it happened to.
    pub connector: ConnectorLabel<'a>,
    /// The connector's parent at the time of the event, if any.
    pub parent: Option<ConnectorLabel<'a>>,
}

impl<'a> ConnectorEvent<'a> {
    /// Describes `key` and its parent using the tree.
    #[must_use]
    pub fn describe<T: ConnectorTree>(tree: &'a T, kind: ConnectorEventKind, key: T::Key) -> Self {
        Self {
            kind,
            connector: ConnectorLabel::of(tree, key),
            parent: tree.parent(key).map(|p| ConnectorLabel::of(tree, p)),
        }
    }

    /// Returns the severity of the event.
    #[must_use]
    pub const fn level(&self) -> DiagnosticLevel {
        self.kind.level()
    }
}

/// Renders `Name(id) (parent: Name(id))`.
impl fmt::Display for ConnectorEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.connector)?;
        if let Some(parent) = &self.parent {
            write!(f, " (parent: {parent})")?;
        }
        Ok(())
    }
}

/// Emitted for operations covering a whole scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeEvent {
    /// What happened.
    pub kind: ScopeEventKind,
    /// For [`AllDirty`](ScopeEventKind::AllDirty), connectors that became
    /// dirty; for [`AllClean`](ScopeEventKind::AllClean), connectors that
    /// were dirty; for [`Reconciled`](ScopeEventKind::Reconciled), bindings
    /// removed.
    pub count: usize,
}

impl ScopeEvent {
    /// Returns the severity of the event.
    #[must_use]
    pub const fn level(&self) -> DiagnosticLevel {
        self.kind.level()
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives diagnostic events from scope operations.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called for per-connector bookkeeping.
    fn on_connector(&mut self, e: &ConnectorEvent<'_>) {
        _ = e;
    }

    /// Called for scope-wide operations.
    fn on_scope(&mut self, e: &ScopeEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracer")
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Returns whether events reach a sink.
    ///
    /// Callers use this to skip building events nobody will see.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    /// Emits a [`ConnectorEvent`].
    #[inline]
    pub fn connector(&mut self, e: &ConnectorEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_connector(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ScopeEvent`].
    #[inline]
    pub fn scope(&mut self, e: &ScopeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scope(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Describes `key` and emits a [`ConnectorEvent`] if a sink is attached.
    #[inline]
    pub fn describe<T: ConnectorTree>(&mut self, tree: &T, kind: ConnectorEventKind, key: T::Key) {
        if self.is_enabled() {
            self.connector(&ConnectorEvent::describe(tree, kind, key));
        }
    }
}

impl Default for Tracer<'_> {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn sample_event() -> ConnectorEvent<'static> {
        ConnectorEvent {
            kind: ConnectorEventKind::ReconcileRemoval,
            connector: ConnectorLabel {
                name: "Button",
                id: "PID3",
            },
            parent: Some(ConnectorLabel {
                name: "VerticalLayout",
                id: "PID1",
            }),
        }
    }

    #[test]
    fn event_renders_connector_and_parent() {
        assert_eq!(
            sample_event().to_string(),
            "Button(PID3) (parent: VerticalLayout(PID1))"
        );
        let orphan = ConnectorEvent {
            parent: None,
            ..sample_event()
        };
        assert_eq!(orphan.to_string(), "Button(PID3)");
    }

    #[test]
    fn levels_follow_severity() {
        assert_eq!(ConnectorEventKind::Registered.level(), DiagnosticLevel::Debug);
        assert_eq!(
            ConnectorEventKind::RedundantRegistration.level(),
            DiagnosticLevel::Info
        );
        assert_eq!(
            ConnectorEventKind::UnknownUnregistration.level(),
            DiagnosticLevel::Info
        );
        assert_eq!(ConnectorEventKind::ReconcileRemoval.level(), DiagnosticLevel::Info);
        assert_eq!(ConnectorEventKind::IdentityMismatch.level(), DiagnosticLevel::Warn);
        assert!(DiagnosticLevel::Warn > DiagnosticLevel::Info);
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_connector(&sample_event());
        sink.on_scope(&ScopeEvent {
            kind: ScopeEventKind::AllClean,
            count: 0,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        assert!(!tracer.is_enabled());
        tracer.connector(&sample_event());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            kinds: Vec<ConnectorEventKind>,
        }
        impl TraceSink for RecordingSink {
            fn on_connector(&mut self, e: &ConnectorEvent<'_>) {
                self.kinds.push(e.kind);
            }
        }

        let mut sink = RecordingSink { kinds: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        assert!(tracer.is_enabled());
        tracer.connector(&sample_event());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.kinds, &[ConnectorEventKind::ReconcileRemoval]);
    }
}
