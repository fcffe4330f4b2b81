// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps an owned copy of every
//! event, so a test or a debug overlay can inspect what a scope reported
//! after the fact.

use syncscope_core::trace::{
    ConnectorEvent, ConnectorEventKind, ConnectorLabel, DiagnosticLevel, ScopeEvent, TraceSink,
};

/// Owned copy of a [`ConnectorLabel`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordedLabel {
    /// Diagnostic type name.
    pub name: String,
    /// Client-visible identifier.
    pub id: String,
}

impl From<&ConnectorLabel<'_>> for RecordedLabel {
    fn from(label: &ConnectorLabel<'_>) -> Self {
        Self {
            name: label.name.to_owned(),
            id: label.id.to_owned(),
        }
    }
}

/// A recorded event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A [`ConnectorEvent`].
    Connector {
        /// What happened.
        kind: ConnectorEventKind,
        /// The connector it happened to.
        connector: RecordedLabel,
        /// The connector's parent, if any.
        parent: Option<RecordedLabel>,
    },
    /// A [`ScopeEvent`].
    Scope(ScopeEvent),
}

impl RecordedEvent {
    /// Returns the severity of the event.
    #[must_use]
    pub fn level(&self) -> DiagnosticLevel {
        match self {
            Self::Connector { kind, .. } => kind.level(),
            Self::Scope(e) => e.level(),
        }
    }

    /// Returns a short kebab-case label for the event kind.
    #[must_use]
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::Connector { kind, .. } => kind.as_str(),
            Self::Scope(e) => e.kind.as_str(),
        }
    }
}

impl From<&ConnectorEvent<'_>> for RecordedEvent {
    fn from(e: &ConnectorEvent<'_>) -> Self {
        Self::Connector {
            kind: e.kind,
            connector: RecordedLabel::from(&e.connector),
            parent: e.parent.as_ref().map(RecordedLabel::from),
        }
    }
}

/// A [`TraceSink`] that stores every event.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the kinds of all recorded connector events, in order.
    #[must_use]
    pub fn connector_kinds(&self) -> Vec<ConnectorEventKind> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Connector { kind, .. } => Some(*kind),
                RecordedEvent::Scope(_) => None,
            })
            .collect()
    }

    /// Returns the identifiers of connectors that received `kind` events.
    #[must_use]
    pub fn ids_for(&self, kind: ConnectorEventKind) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Connector {
                    kind: k, connector, ..
                } if *k == kind => Some(connector.id.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Returns the recorded scope events, in order.
    #[must_use]
    pub fn scope_events(&self) -> Vec<ScopeEvent> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Scope(s) => Some(*s),
                RecordedEvent::Connector { .. } => None,
            })
            .collect()
    }
}

impl TraceSink for RecorderSink {
    fn on_connector(&mut self, e: &ConnectorEvent<'_>) {
        self.events.push(RecordedEvent::from(e));
    }

    fn on_scope(&mut self, e: &ScopeEvent) {
        self.events.push(RecordedEvent::Scope(*e));
    }
}
