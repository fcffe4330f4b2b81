// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forwarding to [`tracing`].
//!
//! [`LogSink`] turns every event into a `tracing` event at the matching
//! level, with the connector and parent labels as structured fields. Hosts
//! that already install a `tracing` subscriber get scope diagnostics without
//! any extra plumbing.

use syncscope_core::trace::{ConnectorEvent, DiagnosticLevel, ScopeEvent, TraceSink};

/// `tracing` target used for every forwarded event.
pub const TARGET: &str = "syncscope";

/// A [`TraceSink`] that forwards to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn on_connector(&mut self, e: &ConnectorEvent<'_>) {
        let kind = e.kind.as_str();
        let parent = e.parent.map(tracing::field::display);
        match e.level() {
            DiagnosticLevel::Debug => {
                tracing::debug!(
                    target: TARGET,
                    kind,
                    connector = %e.connector,
                    parent = ?parent
                );
            }
            DiagnosticLevel::Info => {
                tracing::info!(
                    target: TARGET,
                    kind,
                    connector = %e.connector,
                    parent = ?parent,
                    "{e}"
                );
            }
            DiagnosticLevel::Warn => {
                tracing::warn!(
                    target: TARGET,
                    kind,
                    connector = %e.connector,
                    parent = ?parent,
                    "{e}"
                );
            }
        }
    }

    fn on_scope(&mut self, e: &ScopeEvent) {
        tracing::debug!(target: TARGET, kind = e.kind.as_str(), count = e.count);
    }
}
