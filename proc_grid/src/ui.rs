// ui.rs - Paints the walker's grid and drives it once per frame

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use grid_walker::WalkStatus;

use crate::ProcGrid;

const BACKGROUND: Color32 = Color32::from_rgb(0x13, 0x13, 0x13);
// Tile size as a fraction of its slot.
const TILE_FILL: f32 = 0.8;

fn status_label(status: WalkStatus) -> &'static str {
    match status {
        WalkStatus::Running => "running",
        WalkStatus::Stuck => "stuck",
        WalkStatus::Complete => "complete",
    }
}

impl eframe::App for ProcGrid {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance_frame();

        let panel = egui::Frame::none().fill(BACKGROUND).inner_margin(16.0);
        egui::CentralPanel::default().frame(panel).show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⟲ Restart").clicked() {
                    self.restart();
                }

                ui.separator();

                let state = self.walker().state();
                ui.label(format!("Status: {}", status_label(state.status)));
                ui.label(format!("Steps: {}", state.steps));
                ui.label(format!("Remaining: {}", state.remaining));
            });

            ui.separator();

            let grid = self.walker().grid();
            let cells_per_side = grid.size().get() as f32;
            let side = ui.available_width().min(ui.available_height());
            let slot = side / cells_per_side;

            let (response, painter) =
                ui.allocate_painter(Vec2::splat(side), egui::Sense::hover());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, BACKGROUND);

            for (row, cells) in grid.rows().enumerate() {
                for (col, cell) in cells.iter().enumerate() {
                    let slot_rect = Rect::from_min_size(
                        egui::pos2(origin.x + col as f32 * slot, origin.y + row as f32 * slot),
                        Vec2::splat(slot),
                    );
                    let tile =
                        Rect::from_center_size(slot_rect.center(), Vec2::splat(slot * TILE_FILL));

                    let color = if cell.is_active() {
                        self.active_color
                    } else {
                        self.idle_color
                    };

                    painter.rect_filled(tile, 0.0, color);
                    painter.rect_stroke(tile, 0.0, Stroke::new(0.2, Color32::from_gray(40)));
                }
            }
        });

        // Keep frames coming while there is something left to animate
        if self.walker().status() == WalkStatus::Running {
            ctx.request_repaint();
        }
    }
}
