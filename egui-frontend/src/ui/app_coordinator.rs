//! # App Coordinator Module
//!
//! The eframe update loop. Each frame:
//! 1. Finish any export whose screenshot just arrived
//! 2. Compute a fresh `DashboardView` from the backend
//! 3. Render header, toolbar, cards and table
//! 4. Render the export dialog and error alert on top

use eframe::egui;

use crate::ui::app_state::MrrTrackerApp;

const CHART_HEIGHT: f32 = 280.0;

impl eframe::App for MrrTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshot_events(ctx);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.export.is_open && !self.export.is_capturing() {
            self.export.close();
        }

        let view = self.current_view();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    self.render_header(ui);
                    ui.add_space(12.0);
                    self.render_toolbar(ui, &view);
                    self.render_messages(ui);
                    ui.add_space(12.0);

                    self.draw_overview_card(ui, &view);
                    ui.add_space(12.0);
                    self.draw_chart_card(ui, &view, CHART_HEIGHT);
                    ui.add_space(12.0);
                    self.draw_payment_form(ui);
                    ui.add_space(12.0);
                    self.draw_payments_card(ui, &view);
                    ui.add_space(16.0);
                });
        });

        self.render_modals(ctx, &view);
    }
}
