// Copyright 2026 the Syncscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated synchronization passes that exercise the diagnostics pipeline.
//!
//! Builds a small component tree, attaches it to a
//! [`SyncScope`](syncscope_core::scope::SyncScope) and runs a few passes:
//! a full refresh, a hidden subtree, a detach, a connector that leaves the
//! tree without being detached, and a rejected duplicate identifier. Events
//! go to a [`PrettyPrintSink`](syncscope_debug::pretty::PrettyPrintSink), to
//! `tracing` through a [`LogSink`](syncscope_debug::log::LogSink), and to a
//! [`RecorderSink`](syncscope_debug::recorder::RecorderSink) that is exported
//! as JSON at the end.
//!
//! Set `RUST_LOG=syncscope=debug` to see every `tracing` event.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

use syncscope_core::config::ScopeConfig;
use syncscope_core::connector::ConnectorTree;
use syncscope_core::id::{ComponentKey, ConnectorId};
use syncscope_core::scope::SyncScope;
use syncscope_core::trace::{ConnectorEvent, ScopeEvent, TraceSink, Tracer};
use syncscope_core::tree::ComponentTree;

use syncscope_debug::log::LogSink;
use syncscope_debug::pretty::PrettyPrintSink;
use syncscope_debug::recorder::RecorderSink;

use tracing_subscriber::EnvFilter;

/// Forwards every event to all three sinks.
struct Tee<'a> {
    pretty: &'a mut PrettyPrintSink,
    log: &'a mut LogSink,
    recorder: &'a mut RecorderSink,
}

impl TraceSink for Tee<'_> {
    fn on_connector(&mut self, e: &ConnectorEvent<'_>) {
        self.pretty.on_connector(e);
        self.log.on_connector(e);
        self.recorder.on_connector(e);
    }

    fn on_scope(&mut self, e: &ScopeEvent) {
        self.pretty.on_scope(e);
        self.log.on_scope(e);
        self.recorder.on_scope(e);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("syncscope=info")),
        )
        .init();

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut log = LogSink;
    let mut recorder = RecorderSink::new();
    let mut tee = Tee {
        pretty: &mut pretty,
        log: &mut log,
        recorder: &mut recorder,
    };
    let mut tracer = Tracer::new(&mut tee);

    // -- tree --------------------------------------------------------------
    let mut tree = ComponentTree::new();
    let root = tree.create_root(ConnectorId::new("0")?, "UI");
    let layout = tree.create_component(ConnectorId::new("1")?, "VerticalLayout");
    let label = tree.create_component(ConnectorId::new("2")?, "Label");
    let button = tree.create_component(ConnectorId::new("3")?, "Button");
    let panel = tree.create_component(ConnectorId::new("4")?, "Panel");
    let field = tree.create_component(ConnectorId::new("5")?, "TextField");
    let tooltip = tree.create_connector(ConnectorId::new("6")?, "TooltipExtension");
    tree.add_child(root, layout);
    tree.add_child(layout, label);
    tree.add_child(layout, button);
    tree.add_child(layout, panel);
    tree.add_child(panel, field);
    tree.add_child(button, tooltip);

    let mut scope = SyncScope::with_config(root, ScopeConfig::verbose());

    // -- pass 1: initial attach --------------------------------------------
    println!("== pass 1: attach");
    scope.attach(&tree, root, &mut tracer)?;
    sync_pass(&mut scope, &tree);

    // -- pass 2: hide the panel, full refresh ------------------------------
    println!("== pass 2: hidden panel, full refresh");
    tree.set_visible(panel, false);
    scope.mark_all_dirty(&tree, &mut tracer);
    sync_pass(&mut scope, &tree);

    // -- pass 3: inbound message routed by id ------------------------------
    println!("== pass 3: inbound click");
    if let Some(clicked) = scope.connector("3") {
        println!("   routed to {}", tree.display_name(clicked));
        scope.mark_dirty(&tree, clicked, &mut tracer);
    }
    sync_pass(&mut scope, &tree);

    // -- pass 4: detach the panel, lose the label --------------------------
    println!("== pass 4: detach");
    scope.detach(&tree, panel, &mut tracer)?;
    tree.remove_from_parent(panel);
    // Removed from the tree without telling the scope: reconcile reports it.
    tree.remove_from_parent(label);
    scope.reconcile(&tree, &mut tracer);
    sync_pass(&mut scope, &tree);

    // -- pass 5: duplicate identifier --------------------------------------
    println!("== pass 5: duplicate identifier");
    let clash = tree.create_component(ConnectorId::new("3")?, "Button");
    tree.add_child(layout, clash);
    if let Err(err) = scope.attach(&tree, clash, &mut tracer) {
        println!("   rejected: {err}");
    }
    drop(tracer);

    // -- export ------------------------------------------------------------
    let path = "sync_trace.json";
    let mut writer = BufWriter::new(File::create(path)?);
    syncscope_debug::json::export(recorder.events(), &mut writer)?;
    tracing::info!(path, events = recorder.events().len(), "wrote event log");
    println!("Wrote {path} ({} events)", recorder.events().len());
    Ok(())
}

/// Drains the dirty set the way a serializer would at a pass boundary.
fn sync_pass(scope: &mut SyncScope<ComponentKey>, tree: &ComponentTree) {
    let dirty = scope.take_dirty();
    let names: Vec<_> = dirty
        .iter()
        .map(|&key| format!("{}({})", tree.display_name(key), tree.connector_id(key)))
        .collect();
    println!("   sync {} connector(s): {}", names.len(), names.join(", "));
}
