//! # Header Module
//!
//! Renders the dashboard header: site title and tagline, the export button,
//! and the toolbar with the month navigator and the period selector.
//!
//! ## Key Functions:
//! - `render_header()` - Title row and the "Export as Image" button
//! - `render_toolbar()` - Month navigator plus Daily/Monthly selector
//! - `render_messages()` - Success confirmation under the toolbar

use eframe::egui;
use shared::{DashboardView, TimePeriod};

use crate::ui::app_state::MrrTrackerApp;
use crate::ui::components::theme::colors;

impl MrrTrackerApp {
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let mut open_export = false;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&self.backend.config.site.name)
                            .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.label(
                    egui::RichText::new(&self.backend.config.site.description)
                        .color(colors::TEXT_SECONDARY),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button = egui::Button::new(
                    egui::RichText::new("📷 Export as Image")
                        .color(colors::TEXT_WHITE)
                        .strong(),
                )
                .fill(colors::ACCENT)
                .min_size(egui::vec2(150.0, 36.0));

                if ui.add(button).clicked() {
                    open_export = true;
                }
            });
        });

        if open_export {
            self.export.open();
        }
    }

    pub fn render_toolbar(&mut self, ui: &mut egui::Ui, view: &DashboardView) {
        let mut go_previous = false;
        let mut go_next = false;
        let mut chosen_period = self.chart.selected_period;

        ui.horizontal(|ui| {
            let nav_button = |label: &str| {
                egui::Button::new(egui::RichText::new(label).strong())
                    .fill(colors::INACTIVE_BACKGROUND)
                    .min_size(egui::vec2(36.0, 32.0))
            };

            if ui.add_enabled(view.can_go_previous, nav_button("⬅")).clicked() {
                go_previous = true;
            }

            let heading = match view.selected_month {
                Some(month) => self.backend.payment_table_service.format_month_heading(month),
                None => "No payments yet".to_string(),
            };
            ui.add_space(6.0);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(heading)
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            ui.add_space(6.0);

            if ui.add_enabled(view.can_go_next, nav_button("➡")).clicked() {
                go_next = true;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::ComboBox::from_id_source("period_selector")
                    .selected_text(chosen_period.label())
                    .width(110.0)
                    .show_ui(ui, |ui| {
                        for period in TimePeriod::ALL {
                            ui.selectable_value(&mut chosen_period, period, period.label());
                        }
                    });
                ui.label(egui::RichText::new("View").color(colors::TEXT_SECONDARY));
            });
        });

        if go_previous {
            self.navigate_to_previous_month();
        }
        if go_next {
            self.navigate_to_next_month();
        }
        self.chart.set_period(chosen_period);
    }

    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        let mut dismiss = false;
        if let Some(message) = &self.ui_state.success_message {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("✅ {}", message))
                        .color(egui::Color32::from_rgb(22, 163, 74)),
                );
                if ui.small_button("✖").clicked() {
                    dismiss = true;
                }
            });
        }
        if dismiss {
            self.ui_state.success_message = None;
        }
    }
}
