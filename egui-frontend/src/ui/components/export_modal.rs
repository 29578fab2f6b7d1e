//! # Export Modal
//!
//! The "Export as Image" dialog and the capture pipeline behind it.
//!
//! ## Responsibilities:
//! - Stats/Graph tabs and the gradient background picker
//! - A live preview of the card that will be exported
//! - Requesting a viewport screenshot on "Download Image"
//! - Cropping the screenshot to the preview and handing it to `ExportService`
//!
//! The screenshot arrives as an input event on a later frame, so the export
//! finishes in `handle_screenshot_events`, not in the click handler.

use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use eframe::egui;
use log::{error, info};
use mrr_backend::domain::RgbaSnapshot;
use shared::{DashboardView, ExportResult, ExportType, GradientPreset};

use crate::ui::app_state::MrrTrackerApp;
use crate::ui::components::styling::{draw_card_container, gradient_colors, paint_gradient, CARD_ROUNDING};
use crate::ui::components::theme::colors;
use crate::ui::state::PendingCapture;

const PREVIEW_SIZE: egui::Vec2 = egui::vec2(560.0, 320.0);
const GRADIENT_PADDING: f32 = 32.0;
const SWATCH_SIZE: egui::Vec2 = egui::vec2(34.0, 24.0);

impl MrrTrackerApp {
    pub fn render_export_modal(&mut self, ctx: &egui::Context, view: &DashboardView) {
        if !self.export.is_open {
            return;
        }

        let mut window_open = true;
        let mut download_clicked = false;
        let mut preview_rect = egui::Rect::NOTHING;

        egui::Window::new("Export as Image")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .open(&mut window_open)
            .show(ctx, |ui| {
                self.render_export_tabs(ui);
                ui.add_space(8.0);
                self.render_gradient_picker(ui);
                ui.add_space(8.0);

                preview_rect = self.render_export_preview(ui, view);
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label("Save to");
                    let default_hint = self
                        .backend
                        .export_service
                        .resolve_export_dir(None)
                        .map(|dir| dir.display().to_string())
                        .unwrap_or_default();
                    ui.add(
                        egui::TextEdit::singleline(&mut self.export.custom_dir)
                            .hint_text(default_hint)
                            .desired_width(300.0),
                    );
                });
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let label = if self.export.is_capturing() {
                        "⏳ Capturing..."
                    } else {
                        "⬇ Download Image"
                    };
                    let button = egui::Button::new(
                        egui::RichText::new(label).color(colors::TEXT_WHITE).strong(),
                    )
                    .fill(colors::ACCENT);
                    if ui.add_enabled(!self.export.is_capturing(), button).clicked() {
                        download_clicked = true;
                    }

                    if let Some(result) = &self.export.last_result {
                        ui.label(
                            egui::RichText::new(format!("Saved to {}", result.file_path))
                                .color(colors::TEXT_SECONDARY),
                        );
                    }
                });
            });

        if download_clicked && preview_rect.is_positive() {
            info!("🖼️ EXPORT: Requesting screenshot for {:?}", self.export.export_type);
            self.export.begin_capture(preview_rect);
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot);
        }

        if !window_open {
            self.export.close();
        }
    }

    fn render_export_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for export_type in [ExportType::Stats, ExportType::Graph] {
                let selected = self.export.export_type == export_type;
                if ui.selectable_label(selected, export_type.label()).clicked() {
                    self.export.export_type = export_type;
                }
            }
        });
    }

    fn render_gradient_picker(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for preset in GradientPreset::ALL {
                let (rect, response) = ui.allocate_exact_size(SWATCH_SIZE, egui::Sense::click());
                paint_gradient(ui.painter(), rect, &gradient_colors(preset));

                if self.export.gradient == preset {
                    ui.painter().rect_stroke(
                        rect.expand(2.0),
                        egui::Rounding::same(4.0),
                        egui::Stroke::new(2.0, colors::SELECTED_OUTLINE),
                    );
                }

                if response.on_hover_text(preset.key()).clicked() {
                    self.export.gradient = preset;
                }
            }
        });
    }

    /// Draw the gradient-backed card and return its screen rect
    fn render_export_preview(&self, ui: &mut egui::Ui, view: &DashboardView) -> egui::Rect {
        let (rect, _) = ui.allocate_exact_size(PREVIEW_SIZE, egui::Sense::hover());
        paint_gradient(ui.painter(), rect, &gradient_colors(self.export.gradient));

        let card_rect = rect.shrink(GRADIENT_PADDING);
        draw_card_container(ui.painter(), card_rect, CARD_ROUNDING);

        ui.allocate_ui_at_rect(card_rect.shrink(18.0), |ui| match self.export.export_type {
            ExportType::Stats => self.draw_stats_card_content(ui, view),
            ExportType::Graph => self.draw_graph_card_content(ui, view, card_rect.height() - 80.0),
        });

        rect
    }

    fn draw_stats_card_content(&self, ui: &mut egui::Ui, view: &DashboardView) {
        let table = &self.backend.payment_table_service;
        let stats = &view.stats;

        ui.label(egui::RichText::new("MRR Stats").strong().color(colors::TEXT_SECONDARY));
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(table.format_currency(stats.current))
                    .font(egui::FontId::new(40.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(8.0);
            self.draw_percent_badge(ui, stats.percent_change);
        });
        ui.label(
            egui::RichText::new(format!("Previous: {}", table.format_currency(stats.previous)))
                .color(colors::TEXT_SECONDARY),
        );
        ui.add_space(10.0);

        let updated = if stats.generated_on == Self::today() {
            "Updated today".to_string()
        } else {
            format!("Updated {}", table.format_long_date(stats.generated_on))
        };
        ui.label(egui::RichText::new(updated).color(colors::TEXT_MUTED));
        ui.label(egui::RichText::new(&self.backend.config.site.url).color(colors::TEXT_MUTED));
    }

    fn draw_graph_card_content(&self, ui: &mut egui::Ui, view: &DashboardView, height: f32) {
        ui.label(
            egui::RichText::new(format!("{} Revenue", view.period.label()))
                .strong()
                .color(colors::TEXT_SECONDARY),
        );
        if view.series.is_empty() {
            ui.label(egui::RichText::new("No revenue to chart yet").color(colors::TEXT_MUTED));
            return;
        }
        self.render_revenue_chart(ui, "export_revenue_chart", &view.series, view.period, height.max(80.0));
    }

    /// Finish a pending export once the viewport screenshot arrives
    pub fn handle_screenshot_events(&mut self, ctx: &egui::Context) {
        if !self.export.is_capturing() {
            return;
        }
        ctx.request_repaint();

        let screenshot = ctx.input(|i| {
            i.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(Arc::clone(image)),
                _ => None,
            })
        });
        let Some(image) = screenshot else {
            return;
        };
        let Some(capture) = self.export.take_capture() else {
            return;
        };

        match self.save_capture(&image, capture, ctx.pixels_per_point()) {
            Ok(result) => {
                info!("✅ EXPORT: Saved {}x{} image to {}", result.width, result.height, result.file_path);
                self.ui_state.success_message = Some(format!("Image saved to {}", result.file_path));
                self.export.last_result = Some(result);
            }
            Err(e) => {
                error!("❌ EXPORT: {:#}", e);
                self.ui_state.show_export_failure();
            }
        }
    }

    fn save_capture(
        &self,
        image: &egui::ColorImage,
        capture: PendingCapture,
        pixels_per_point: f32,
    ) -> anyhow::Result<ExportResult> {
        let [width, height] = image.size;
        let pixels: Vec<u8> = image.pixels.iter().flat_map(|color| color.to_array()).collect();
        let screen = RgbaSnapshot::new(width as u32, height as u32, pixels)
            .context("Screenshot did not match its reported size")?;

        let region = capture.region;
        let to_pixels = |points: f32| (points * pixels_per_point).round().max(0.0) as u32;
        let card = screen
            .crop(
                to_pixels(region.min.x),
                to_pixels(region.min.y),
                to_pixels(region.width()),
                to_pixels(region.height()),
            )
            .context("Export card is outside the captured screen")?;

        let export_service = &self.backend.export_service;
        let factor = self.backend.config.export.scale / pixels_per_point;
        let scaled = export_service
            .scale_snapshot(&card, factor)
            .context("Failed to scale export image")?;

        info!("🖼️ EXPORT: Writing {:?} card", capture.export_type);
        export_service
            .export_png(&scaled, self.export.custom_dir(), Utc::now())
            .context("Failed to save export image")
    }
}
