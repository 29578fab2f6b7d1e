//! # Table Renderer Module
//!
//! Payments of the selected month, oldest first, with a delete button per
//! row. Deleting removes every payment sharing that row's date.

use chrono::NaiveDate;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::DashboardView;

use crate::ui::app_state::MrrTrackerApp;
use crate::ui::components::styling::card_frame;
use crate::ui::components::theme::{colors, CURRENT_THEME};

impl MrrTrackerApp {
    pub fn draw_payments_card(&mut self, ui: &mut egui::Ui, view: &DashboardView) {
        let mut delete_date: Option<NaiveDate> = None;

        card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            let heading = match view.selected_month {
                Some(month) => format!(
                    "Payments in {}",
                    self.backend.payment_table_service.format_month_heading(month)
                ),
                None => "Payments".to_string(),
            };
            ui.label(egui::RichText::new(heading).strong().color(colors::TEXT_SECONDARY));
            ui.add_space(6.0);

            if view.month_payments.is_empty() {
                ui.label(egui::RichText::new("No payments yet").color(colors::TEXT_MUTED));
                return;
            }

            delete_date = self.render_payments_table(ui, view);
        });

        if let Some(date) = delete_date {
            self.delete_payments_on(date);
        }
    }

    /// Returns the date of the row whose delete button was clicked
    fn render_payments_table(&self, ui: &mut egui::Ui, view: &DashboardView) -> Option<NaiveDate> {
        let rows = self
            .backend
            .payment_table_service
            .format_payments_for_table(&view.month_payments);
        let table_colors = &CURRENT_THEME.table;
        let mut clicked: Option<NaiveDate> = None;

        let header_cell = |ui: &mut egui::Ui, text: &str| {
            ui.painter()
                .rect_filled(ui.max_rect(), egui::Rounding::ZERO, table_colors.header_background);
            ui.label(
                egui::RichText::new(text)
                    .strong()
                    .color(table_colors.header_text),
            );
        };

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().at_least(160.0)) // DATE
            .column(Column::exact(120.0)) // AMOUNT
            .column(Column::exact(80.0)) // ACTIONS
            .max_scroll_height(260.0)
            .header(32.0, |mut header| {
                header.col(|ui| header_cell(ui, "DATE"));
                header.col(|ui| header_cell(ui, "AMOUNT"));
                header.col(|ui| header_cell(ui, ""));
            })
            .body(|mut body| {
                for row_data in &rows {
                    body.row(36.0, |mut row| {
                        row.col(|ui| {
                            ui.label(
                                egui::RichText::new(&row_data.formatted_date).color(colors::TEXT_PRIMARY),
                            );
                        });
                        row.col(|ui| {
                            ui.label(
                                egui::RichText::new(&row_data.formatted_amount)
                                    .strong()
                                    .color(colors::TEXT_PRIMARY),
                            );
                        });
                        row.col(|ui| {
                            let button = egui::Button::new(
                                egui::RichText::new("🗑 Delete").color(table_colors.delete),
                            )
                            .frame(false);
                            if ui.add(button).clicked() {
                                clicked = Some(row_data.raw_date);
                            }
                        });
                    });
                }
            });

        clicked
    }
}
