//! # Chart Renderer Module
//!
//! The "MRR Overview" card and the revenue chart.
//!
//! ## Key Functions:
//! - `draw_overview_card()` - Selected month's MRR with the percentage badge
//! - `draw_chart_card()` - Card wrapping the revenue chart
//! - `render_revenue_chart()` - egui_plot area chart of an aggregated series
//! - `draw_percent_badge()` - Green/red pill with the formatted change
//!
//! Chart points are plotted at their index along the x axis; tick labels
//! come from the period keys, so monthly and daily series share one path.

use eframe::egui;
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};
use log::debug;
use shared::{AggregatedPoint, DashboardView, TimePeriod};

use crate::ui::app_state::MrrTrackerApp;
use crate::ui::components::styling::{card_frame, percent_badge_colors};
use crate::ui::components::theme::{colors, CURRENT_THEME};

impl MrrTrackerApp {
    pub fn draw_overview_card(&self, ui: &mut egui::Ui, view: &DashboardView) {
        let table = &self.backend.payment_table_service;

        card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new("MRR Overview").strong().color(colors::TEXT_SECONDARY));
            ui.add_space(4.0);

            let Some(overview) = &view.overview else {
                ui.label(
                    egui::RichText::new("Add a payment to see your MRR")
                        .color(colors::TEXT_MUTED),
                );
                return;
            };

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(table.format_currency(overview.mrr))
                        .font(egui::FontId::new(36.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.add_space(8.0);
                self.draw_percent_badge(ui, overview.percent_change);
            });

            let comparison = match overview.previous_month {
                Some(previous) => format!(
                    "vs previous month ({}: {})",
                    table.format_month_heading(previous),
                    table.format_currency(overview.previous_mrr)
                ),
                None => "vs previous month (no earlier data)".to_string(),
            };
            ui.label(egui::RichText::new(comparison).color(colors::TEXT_MUTED));
        });
    }

    pub fn draw_percent_badge(&self, ui: &mut egui::Ui, percent_change: f64) {
        let table = &self.backend.payment_table_service;
        let (text_color, background) = percent_badge_colors(table.is_growth(percent_change));

        egui::Frame::none()
            .fill(background)
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::symmetric(8.0, 2.0))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(table.format_percent(percent_change))
                        .strong()
                        .color(text_color),
                );
            });
    }

    pub fn draw_chart_card(&self, ui: &mut egui::Ui, view: &DashboardView, height: f32) {
        card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            let title = match view.period {
                TimePeriod::Daily => "Daily Revenue",
                TimePeriod::Monthly => "Monthly Revenue",
            };
            ui.label(egui::RichText::new(title).strong().color(colors::TEXT_SECONDARY));
            ui.add_space(6.0);

            if view.series.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(height / 3.0);
                    ui.label(egui::RichText::new("No revenue to chart yet").color(colors::TEXT_MUTED));
                    ui.add_space(height / 3.0);
                });
                return;
            }

            self.render_revenue_chart(ui, "dashboard_revenue_chart", &view.series, view.period, height);
        });
    }

    /// Render `series` as an area chart. `plot_id` must be unique per call site.
    pub fn render_revenue_chart(
        &self,
        ui: &mut egui::Ui,
        plot_id: &str,
        series: &[AggregatedPoint],
        period: TimePeriod,
        height: f32,
    ) {
        debug!("📊 CHART: Rendering {} points for {:?}", series.len(), period);

        let table = &self.backend.payment_table_service;
        let labels: Vec<String> = series
            .iter()
            .map(|point| table.format_period_label(&point.period_key, period))
            .collect();
        let amounts: Vec<String> = series
            .iter()
            .map(|point| table.format_currency(point.amount))
            .collect();

        let raw_points: Vec<[f64; 2]> = series
            .iter()
            .enumerate()
            .map(|(index, point)| [index as f64, point.amount])
            .collect();

        let chart = &CURRENT_THEME.chart;
        let line = Line::new(PlotPoints::from(raw_points.clone()))
            .color(chart.line)
            .width(2.5)
            .fill(0.0);
        let markers = Points::new(PlotPoints::from(raw_points))
            .color(chart.line)
            .filled(true)
            .radius(4.0)
            .shape(MarkerShape::Circle)
            .name("Revenue");

        let max_amount = series.iter().map(|point| point.amount).fold(0.0, f64::max);
        let axis_labels = labels.clone();

        Plot::new(plot_id)
            .height(height)
            .show_axes([true, true])
            .show_grid([false, true])
            .include_y(0.0)
            .include_y(max_amount * 1.1)
            .include_x(-0.5)
            .include_x(series.len() as f64 - 0.5)
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show_background(false)
            .label_formatter(move |name, value| {
                if name != "Revenue" {
                    return String::new();
                }
                let index = value.x.round();
                if index < 0.0 {
                    return String::new();
                }
                match (labels.get(index as usize), amounts.get(index as usize)) {
                    (Some(label), Some(amount)) => format!("{}: {}", label, amount),
                    _ => String::new(),
                }
            })
            .x_axis_formatter(move |mark, _range| {
                // Only whole indexes carry a label
                if mark.value < 0.0 || mark.value.fract() != 0.0 {
                    return String::new();
                }
                axis_labels.get(mark.value as usize).cloned().unwrap_or_default()
            })
            .y_axis_formatter(|mark, _range| {
                if mark.value < 0.0 {
                    String::new()
                } else if mark.value >= 1000.0 {
                    format!("${:.1}k", mark.value / 1000.0)
                } else {
                    format!("${:.0}", mark.value)
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(line);
                plot_ui.points(markers);
            });
    }
}
