//! Async Views - Application Library
//!
//! Integrates the inflation core with eframe: two buttons, a scrolling list of
//! rows and a modal busy indicator while the worker thread runs.

mod app;

pub use app::AsyncViewsApp;

// Define all platform entry points using the unified macro
eframe_entrypoints::eframe_app!("Async Views", |cc| Box::new(AsyncViewsApp::new(cc)));
