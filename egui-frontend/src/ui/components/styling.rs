//! # Styling Module
//!
//! Global egui style plus the painting helpers shared by the dashboard
//! cards and the export dialog.
//!
//! ## Key Functions:
//! - `setup_dashboard_style()` - Configure global egui styling once at start-up
//! - `draw_card_container()` - White card with a soft offset shadow
//! - `paint_gradient()` - Left-to-right multi-stop gradient behind export cards
//! - `gradient_colors()` - Map a `GradientPreset` to egui colors
//! - `percent_badge_colors()` - Foreground/background for the growth badge

use eframe::egui;
use egui::epaint::{Mesh, Shape};
use egui::{Color32, Pos2, Rect};
use shared::GradientPreset;

use crate::ui::components::theme::{colors, CURRENT_THEME};

pub const CARD_ROUNDING: f32 = 12.0;

pub fn setup_dashboard_style(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());
    ctx.style_mut(|style| {
        style.visuals.panel_fill = colors::PAGE_BACKGROUND;
        style.visuals.window_fill = colors::CARD_BACKGROUND;
        style.visuals.window_rounding = egui::Rounding::same(CARD_ROUNDING);
        style.visuals.selection.bg_fill = colors::ACCENT;

        // Text edits use extreme_bg_color in egui 0.28
        style.visuals.extreme_bg_color = Color32::from_rgb(248, 250, 252);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
    });
}

/// Draw a card container with white background, border and shadow
pub fn draw_card_container(painter: &egui::Painter, rect: Rect, rounding: f32) {
    let shadow_rect = rect.translate(egui::vec2(0.0, 2.0));
    painter.rect_filled(shadow_rect, egui::Rounding::same(rounding), colors::CARD_SHADOW);
    painter.rect(
        rect,
        egui::Rounding::same(rounding),
        colors::CARD_BACKGROUND,
        egui::Stroke::new(1.0, colors::CARD_BORDER),
    );
}

pub fn gradient_colors(preset: GradientPreset) -> Vec<Color32> {
    preset
        .stops()
        .iter()
        .map(|[r, g, b]| Color32::from_rgb(*r, *g, *b))
        .collect()
}

/// Paint a horizontal gradient through `stops`, evenly spaced across `rect`
pub fn paint_gradient(painter: &egui::Painter, rect: Rect, stops: &[Color32]) {
    match stops {
        [] => {}
        [only] => {
            painter.rect_filled(rect, egui::Rounding::ZERO, *only);
        }
        _ => {
            let mut mesh = Mesh::default();
            let segments = (stops.len() - 1) as f32;

            for (index, color) in stops.iter().enumerate() {
                let x = rect.left() + rect.width() * index as f32 / segments;
                mesh.colored_vertex(Pos2::new(x, rect.top()), *color);
                mesh.colored_vertex(Pos2::new(x, rect.bottom()), *color);
            }

            for segment in 0..stops.len() as u32 - 1 {
                let top_left = segment * 2;
                mesh.add_triangle(top_left, top_left + 1, top_left + 2);
                mesh.add_triangle(top_left + 1, top_left + 2, top_left + 3);
            }

            painter.add(Shape::mesh(mesh));
        }
    }
}

/// (text, background) colors for a percentage badge
pub fn percent_badge_colors(is_growth: bool) -> (Color32, Color32) {
    let chart = &CURRENT_THEME.chart;
    if is_growth {
        (chart.growth, chart.growth_background)
    } else {
        (chart.decline, chart.decline_background)
    }
}

/// Frame used for the dashboard cards
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .rounding(egui::Rounding::same(CARD_ROUNDING))
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .inner_margin(egui::Margin::same(20.0))
}
