//! # Payment Form Module
//!
//! The "Add Payment" card: a date field with a picker and an amount field.
//! Input that fails validation is ignored; nothing is shown to the user.

use eframe::egui;
use egui_extras::DatePickerButton;

use crate::ui::app_state::MrrTrackerApp;
use crate::ui::components::styling::card_frame;
use crate::ui::components::theme::colors;

impl MrrTrackerApp {
    pub fn draw_payment_form(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;

        card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new("Add Payment").strong().color(colors::TEXT_SECONDARY));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Date");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.date_input)
                        .hint_text("YYYY-MM-DD")
                        .desired_width(110.0),
                );
                let picker = ui.add(
                    DatePickerButton::new(&mut self.form.picker_date)
                        .id_source("payment_date_picker")
                        .show_icon(true),
                );
                if picker.changed() {
                    self.form.apply_picker_date();
                }

                ui.add_space(12.0);
                ui.label("Amount");
                let amount = ui.add(
                    egui::TextEdit::singleline(&mut self.form.amount_input)
                        .hint_text("3000")
                        .desired_width(110.0),
                );
                if amount.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }

                ui.add_space(12.0);
                let button = egui::Button::new(
                    egui::RichText::new("➕ Add Payment").color(colors::TEXT_WHITE).strong(),
                )
                .fill(colors::ACCENT);
                if ui.add(button).clicked() {
                    submit = true;
                }
            });
        });

        if submit {
            self.submit_payment_form();
        }
    }
}
