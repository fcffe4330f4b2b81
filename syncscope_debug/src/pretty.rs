// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Events below
//! the sink's minimum [`DiagnosticLevel`] are skipped.

use std::io::Write;

use syncscope_core::trace::{ConnectorEvent, DiagnosticLevel, ScopeEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    min_level: DiagnosticLevel,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes every event to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes every event to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes every event to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            min_level: DiagnosticLevel::Debug,
        }
    }

    /// Skips events below `level`.
    #[must_use]
    pub fn min_level(mut self, level: DiagnosticLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_connector(&mut self, e: &ConnectorEvent<'_>) {
        if e.level() < self.min_level {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[{}] {} {e}",
            e.level().as_str(),
            e.kind.as_str(),
        );
    }

    fn on_scope(&mut self, e: &ScopeEvent) {
        if e.level() < self.min_level {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[{}] {} count={}",
            e.level().as_str(),
            e.kind.as_str(),
            e.count,
        );
    }
}
