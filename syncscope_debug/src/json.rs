// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] writes the events held by a
//! [`RecorderSink`](super::recorder::RecorderSink) as a pretty-printed JSON
//! array, one object per event, in emission order.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, RecordedLabel};

/// Exports recorded events as a JSON array.
///
/// Connector events look like
///
/// ```json
/// { "type": "connector", "kind": "registered", "level": "debug",
///   "connector": { "name": "Button", "id": "b1" },
///   "parent": { "name": "Root", "id": "root" } }
/// ```
///
/// with `"parent": null` for parentless connectors. Scope events carry
/// `"type": "scope"` and a `"count"` instead of labels.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}

fn to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::Connector {
            kind,
            connector,
            parent,
        } => json!({
            "type": "connector",
            "kind": kind.as_str(),
            "level": kind.level().as_str(),
            "connector": label(connector),
            "parent": parent.as_ref().map(label),
        }),
        RecordedEvent::Scope(e) => json!({
            "type": "scope",
            "kind": e.kind.as_str(),
            "level": e.level().as_str(),
            "count": e.count,
        }),
    }
}

fn label(l: &RecordedLabel) -> Value {
    json!({ "name": l.name, "id": l.id })
}
