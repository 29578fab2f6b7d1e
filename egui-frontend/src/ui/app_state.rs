//! # App State Module
//!
//! The central application struct for the MRR tracker. It owns the backend
//! (payment store, month cursor and services) plus the UI-only state: chart
//! granularity, the add-payment form, the export dialog and user feedback.
//!
//! Derived figures are never cached here. Each frame asks the backend for a
//! fresh `DashboardView`, so a mutation is visible on the next repaint.

use chrono::{Local, NaiveDate};
use log::{info, warn};
use mrr_backend::Backend;
use shared::DashboardView;

use crate::ui::components::styling::setup_dashboard_style;
use crate::ui::state::{ChartState, ExportModalState, PaymentFormState, UiState};

/// Main application struct for the egui MRR tracker
pub struct MrrTrackerApp {
    pub backend: Backend,
    pub chart: ChartState,
    pub form: PaymentFormState,
    pub export: ExportModalState,
    pub ui_state: UiState,
}

impl MrrTrackerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, backend: Backend) -> Self {
        info!("🚀 Initializing MrrTrackerApp");

        setup_dashboard_style(&cc.egui_ctx);

        let chart = ChartState::new(backend.config.ui.default_period);
        let export = ExportModalState::new(
            backend.config.export.default_export_type,
            backend.config.export.default_gradient,
        );

        Self {
            chart,
            form: PaymentFormState::new(Self::today()),
            export,
            ui_state: UiState::default(),
            backend,
        }
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Recompute everything the dashboard shows
    pub fn current_view(&self) -> DashboardView {
        self.backend.dashboard.view(self.chart.selected_period, Self::today())
    }

    pub fn navigate_to_previous_month(&mut self) {
        if self.backend.dashboard.go_to_previous_month() {
            info!("📅 Navigated to previous month: {:?}", self.selected_month_key());
        }
    }

    pub fn navigate_to_next_month(&mut self) {
        if self.backend.dashboard.go_to_next_month() {
            info!("📅 Navigated to next month: {:?}", self.selected_month_key());
        }
    }

    /// Submit the add-payment form. Invalid input is dropped without a message.
    pub fn submit_payment_form(&mut self) {
        match self
            .backend
            .dashboard
            .add_payment(&self.form.date_input, &self.form.amount_input)
        {
            Ok(payment) => {
                info!("💰 Added payment of {} on {}", payment.amount, payment.date);
                self.form.clear_after_submit();
            }
            Err(e) => {
                warn!("💰 Ignoring payment form input: {}", e);
            }
        }
    }

    pub fn delete_payments_on(&mut self, date: NaiveDate) {
        let removed = self.backend.dashboard.delete_payments_on(date);
        info!("🗑️ Deleted {} payment(s) dated {}", removed, date);
    }

    fn selected_month_key(&self) -> Option<String> {
        self.backend.dashboard.selected_month().map(|m| m.to_string())
    }
}
