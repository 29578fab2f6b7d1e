//! # Modals Module
//!
//! Routes to the active dialogs: the export dialog and the blocking error
//! alert. The alert sits above everything and must be dismissed.

use eframe::egui;
use shared::DashboardView;

use crate::ui::app_state::MrrTrackerApp;
use crate::ui::components::theme::colors;

const ALERT_SIZE: egui::Vec2 = egui::vec2(380.0, 150.0);

impl MrrTrackerApp {
    pub fn render_modals(&mut self, ctx: &egui::Context, view: &DashboardView) {
        self.render_export_modal(ctx, view);
        self.render_error_alert(ctx);
    }

    fn render_error_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.ui_state.error_alert.clone() else {
            return;
        };

        let mut dismiss = false;

        // Dim the app behind the alert and swallow clicks
        egui::Area::new(egui::Id::new("error_alert_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.allocate_rect(screen_rect, egui::Sense::click());
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 110),
                );

                let alert_rect = egui::Rect::from_center_size(screen_rect.center(), ALERT_SIZE);
                ui.allocate_ui_at_rect(alert_rect, |ui| {
                    egui::Frame::window(ui.style()).show(ui, |ui| {
                        ui.set_min_size(ALERT_SIZE - egui::vec2(24.0, 24.0));
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new("Export failed")
                                    .strong()
                                    .color(colors::TEXT_PRIMARY),
                            );
                            ui.add_space(8.0);
                            ui.label(egui::RichText::new(&message).color(colors::TEXT_SECONDARY));
                            ui.add_space(12.0);
                            if ui.button("OK").clicked() {
                                dismiss = true;
                            }
                        });
                    });
                });
            });

        if dismiss {
            self.ui_state.dismiss_alert();
        }
    }
}
