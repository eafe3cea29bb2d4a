//! Application module
//!
//! A single screen:
//! - Top bar with "Inflate" and "Clear"
//! - Scrolling list of the inflated rows
//! - Modal busy dialog while the worker thread builds the rows

pub(crate) mod settings;
mod ui_panels;

use crate::app::settings::Settings;
use async_views_lib::{InflateController, UiEffect};
use eframe::egui;
use std::sync::Arc;

/// Main application structure
pub struct AsyncViewsApp {
    /// Owns the visible rows, the progress indicator and the worker channel
    controller: InflateController,

    /// Height of one row in points
    row_height: f32,
}

impl AsyncViewsApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Settings::from_cli();

        let config = settings.inflate_config_or_fallback();

        // Workers wake the UI thread so messages are applied without waiting for input
        let ctx = cc.egui_ctx.clone();
        let mut controller =
            InflateController::new(config).with_waker(Arc::new(move || ctx.request_repaint()));
        controller.setup_progress(settings.progress_strings());

        tracing::info!(
            "Initialized: {} rows per inflate, {} cells per row",
            controller.config().rows,
            controller.config().template.cells().len()
        );

        if settings.inflate_on_start
            && let Err(e) = controller.inflate()
        {
            tracing::error!("Initial inflate failed: {e}");
        }

        Self {
            controller,
            row_height: settings.row_height,
        }
    }

    /// Apply pending worker messages
    fn process_worker_messages(&mut self) {
        for effect in self.controller.poll() {
            match effect {
                UiEffect::ProgressShown => tracing::debug!("Progress dialog shown"),
                UiEffect::Attached { rows } => tracing::debug!("Showing {rows} rows"),
                UiEffect::ProgressHidden => tracing::debug!("Progress dialog hidden"),
                UiEffect::Failed { reason } => tracing::warn!("Inflate failed: {reason}"),
            }
        }
    }
}

#[profiling::all_functions]
impl eframe::App for AsyncViewsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_worker_messages();

        ui_panels::top_bar(ctx, &mut self.controller);
        ui_panels::row_list(ctx, &self.controller, self.row_height);

        if let Some(progress) = self.controller.progress()
            && progress.is_visible()
        {
            ui_panels::progress_dialog(ctx, progress);
        }
    }
}
