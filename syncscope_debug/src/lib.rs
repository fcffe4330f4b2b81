// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, logging, and JSON export for syncscope
//! diagnostics.
//!
//! This crate provides [`TraceSink`](syncscope_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: owned event log for inspection in tests and
//!   debug tooling.
//! - [`json::export`]: writes recorded events as a JSON array.
//! - [`log::LogSink`]: forwards events to `tracing` at the matching level.

pub mod json;
pub mod log;
pub mod pretty;
pub mod recorder;
