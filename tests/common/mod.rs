//! Shared fixtures for integration tests.

#![allow(dead_code)]

use futures::channel::oneshot;
use gpui::{div, Context, IntoElement, ParentElement, Render, Window};
use gpui_lazy_router::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Turn on `env_logger` output for a test run (`RUST_LOG=debug cargo test`).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Minimal page used by fixture modules.
pub struct ReportsPage;

impl Render for ReportsPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<'_, Self>) -> impl IntoElement {
        div().child("reports")
    }
}

/// Deferred route whose loader counts how often it runs.
pub fn counting_route(path: &str, export: &str) -> (RouteEntry, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let module_export = export.to_string();
    let entry = RouteEntry::lazy(path, export, move || {
        let counter = Arc::clone(&counter);
        let export = module_export.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(FeatureModule::new("reports").export(export, || ReportsPage))
        }
    });
    (entry, count)
}

/// Deferred route whose first load waits until the returned sender fires.
pub fn gated_route(path: &str, export: &str) -> (RouteEntry, oneshot::Sender<()>, Arc<AtomicUsize>) {
    let (release, gate) = oneshot::channel::<()>();
    let gate = Arc::new(Mutex::new(Some(gate)));
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let module_export = export.to_string();
    let entry = RouteEntry::lazy(path, export, move || {
        let gate = gate.lock().unwrap().take();
        let counter = Arc::clone(&counter);
        let export = module_export.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(FeatureModule::new("reports").export(export, || ReportsPage))
        }
    });
    (entry, release, count)
}

/// Deferred route whose loader always fails.
pub fn failing_route(path: &str, message: &'static str) -> RouteEntry {
    RouteEntry::lazy(path, "Unreachable", move || async move { Err(LoadError::new(message)) })
}

/// Read how many times a counting loader ran.
pub fn loads(count: &AtomicUsize) -> usize {
    count.load(Ordering::SeqCst)
}
