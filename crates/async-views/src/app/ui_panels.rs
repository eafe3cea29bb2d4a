//! UI panels for the application
//!
//! Top bar with the two actions, the virtualized row list and the progress dialog.

use async_views_lib::{InflateController, ProgressIndicator, Rgb, Row, WorkerState};
use egui::{Align2, Color32, FontId, Rect, RichText, Sense, Ui, pos2, vec2};

/// Render the top bar with the inflate/clear actions and a short status
pub fn top_bar(ctx: &egui::Context, controller: &mut InflateController) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("⏬ Inflate").clicked() {
                // Failure is logged and kept as `last_error` for the status line
                let _ = controller.inflate();
            }
            if ui.button("🗑 Clear").clicked() {
                controller.clear();
            }

            ui.separator();
            ui.label(status_text(controller));
        });

        if let Some(error) = controller.last_error() {
            ui.label(
                RichText::new(format!("⚠ {error}"))
                    .small()
                    .color(ui.visuals().error_fg_color),
            );
        }
        ui.add_space(4.0);
    });
}

fn status_text(controller: &InflateController) -> String {
    match controller.state() {
        WorkerState::Idle => "Nothing inflated yet".to_string(),
        WorkerState::Running => "Inflating...".to_string(),
        WorkerState::Done => format!("{} rows", controller.visible().row_count()),
        WorkerState::Failed => "Inflate failed".to_string(),
    }
}

/// Render the visible container. Only rows inside the viewport are painted.
pub fn row_list(ctx: &egui::Context, controller: &InflateController, row_height: f32) {
    let margin = controller.visible().layout().margin;

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.inner_margin(egui::Margin::same(margin_px(margin))))
        .show(ctx, |ui| {
            profiling::scope!("row_list");

            let Some(container) = controller.visible().child() else {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("Press Inflate to build the rows").weak());
                });
                return;
            };

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show_rows(ui, row_height, container.len(), |ui, range| {
                    for row in &container.rows()[range] {
                        row_view(ui, row, row_height);
                    }
                });
        });
}

fn row_view(ui: &mut Ui, row: &Row, row_height: f32) {
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), row_height), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    let rects = cell_rects(rect, row);
    for (cell, cell_rect) in row.cells().iter().zip(&rects) {
        painter.rect_filled(*cell_rect, 0.0, to_color32(cell.color));
    }

    if let (Some(cell), Some(label_rect)) = (
        row.cells().get(row.label_cell()),
        rects.get(row.label_cell()),
    ) {
        painter.text(
            label_rect.center(),
            Align2::CENTER_CENTER,
            row.label(),
            FontId::monospace(row_height * 0.6),
            label_color(cell.color),
        );
    }
}

/// Split a row's rect horizontally, proportional to the cell weights
pub fn cell_rects(rect: Rect, row: &Row) -> Vec<Rect> {
    let total = row.total_weight();
    let mut x = rect.left();
    row.cells()
        .iter()
        .map(|cell| {
            let width = rect.width() * cell.weight / total;
            let cell_rect = Rect::from_min_max(pos2(x, rect.top()), pos2(x + width, rect.bottom()));
            x += width;
            cell_rect
        })
        .collect()
}

pub fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Black or white, whichever reads better on `background`
pub fn label_color(background: Rgb) -> Color32 {
    // ITU-R BT.601 luma
    let luma = 0.299 * background.r as f32 + 0.587 * background.g as f32 + 0.114 * background.b as f32;
    if luma > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

fn margin_px(margin: f32) -> i8 {
    margin.round().clamp(0.0, i8::MAX as f32) as i8
}

/// Render the modal busy dialog. It has no close button and ignores outside clicks.
pub fn progress_dialog(ctx: &egui::Context, progress: &ProgressIndicator) {
    let _ = egui::Modal::new(egui::Id::new("progress_dialog")).show(ctx, |ui| {
        ui.set_min_width(240.0);
        ui.heading(progress.title());
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            // Indeterminate: a spinner, never a percentage
            ui.spinner();
            ui.label(progress.message());
        });
    });
}
