//! Dashboard orchestration for the MRR tracker.
//!
//! Owns the payment store and the month cursor, and exposes the only
//! operations that change them. Every mutation is followed by a cursor
//! resync, so the selected month stays one of the available months. Reads
//! go through `view`, which recomputes all derived figures from scratch.

use chrono::NaiveDate;
use log::{debug, info};
use shared::{DashboardView, Payment, TimePeriod, YearMonth};

use crate::domain::aggregation::AggregationService;
use crate::domain::navigation::MonthCursor;
use crate::domain::payment_service::{PaymentError, PaymentService};
use crate::domain::stats_service::StatsService;

#[derive(Debug, Clone)]
pub struct DashboardService {
    payment_service: PaymentService,
    aggregation_service: AggregationService,
    stats_service: StatsService,
    cursor: MonthCursor,
}

impl DashboardService {
    /// Wrap a payment store, starting the cursor on its latest month
    pub fn new(payment_service: PaymentService) -> Self {
        let aggregation_service = AggregationService::new();
        let months = aggregation_service.available_months(payment_service.list_payments());
        let cursor = MonthCursor::from_months(&months);

        info!(
            "📊 DASHBOARD: Starting with {} payments across {} months, cursor at {:?}",
            payment_service.len(),
            months.len(),
            cursor.selected().map(|m| m.to_string())
        );

        Self {
            payment_service,
            aggregation_service,
            stats_service: StatsService::new(),
            cursor,
        }
    }

    pub fn payments(&self) -> &[Payment] {
        self.payment_service.list_payments()
    }

    pub fn available_months(&self) -> Vec<YearMonth> {
        self.aggregation_service.available_months(self.payments())
    }

    pub fn selected_month(&self) -> Option<YearMonth> {
        self.cursor.selected()
    }

    /// Add a payment from form input; rejected input changes nothing
    pub fn add_payment(&mut self, date_input: &str, amount_input: &str) -> Result<Payment, PaymentError> {
        let payment = self.payment_service.add_payment(date_input, amount_input)?;
        self.resync_cursor();
        Ok(payment)
    }

    /// Delete every payment on `date`
    pub fn delete_payments_on(&mut self, date: NaiveDate) -> usize {
        let removed = self.payment_service.delete_payments_on(date);
        if removed > 0 {
            self.resync_cursor();
        }
        removed
    }

    pub fn go_to_previous_month(&mut self) -> bool {
        let months = self.available_months();
        self.cursor.go_to_previous_month(&months)
    }

    pub fn go_to_next_month(&mut self) -> bool {
        let months = self.available_months();
        self.cursor.go_to_next_month(&months)
    }

    fn resync_cursor(&mut self) {
        let months = self.available_months();
        self.cursor.resync(&months);
    }

    /// Recompute every derived view for the given granularity
    pub fn view(&self, period: TimePeriod, today: NaiveDate) -> DashboardView {
        let payments = self.payments();
        let available_months = self.aggregation_service.available_months(payments);
        let selected_month = self.cursor.selected();

        let overview = selected_month.map(|month| self.aggregation_service.month_overview(payments, month));
        let series = self.aggregation_service.chart_series(payments, period, selected_month);
        let month_payments = selected_month
            .map(|month| self.payment_service.payments_in_month(month))
            .unwrap_or_default();

        let full_series = self.aggregation_service.aggregate(payments, period);
        let stats = self.stats_service.stats_snapshot(&full_series, today);

        debug!(
            "📊 DASHBOARD: View for {:?} -> {} chart points, {} table rows",
            period,
            series.len(),
            month_payments.len()
        );

        DashboardView {
            period,
            can_go_previous: self.cursor.can_go_previous(&available_months),
            can_go_next: self.cursor.can_go_next(&available_months),
            available_months,
            selected_month,
            overview,
            series,
            month_payments,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ym(key: &str) -> YearMonth {
        key.parse().unwrap()
    }

    fn scenario() -> DashboardService {
        DashboardService::new(PaymentService::with_payments(vec![
            Payment::new(date(2024, 1, 1), 100.0),
            Payment::new(date(2024, 1, 8), 50.0),
            Payment::new(date(2024, 2, 5), 200.0),
        ]))
    }

    #[test]
    fn test_initial_view() {
        let dashboard = scenario();
        let view = dashboard.view(TimePeriod::Monthly, date(2024, 3, 1));

        assert_eq!(view.available_months, vec![ym("2024-01"), ym("2024-02")]);
        assert_eq!(view.selected_month, Some(ym("2024-02")));
        assert!(view.can_go_previous);
        assert!(!view.can_go_next);

        let overview = view.overview.unwrap();
        assert_eq!(overview.mrr, 200.0);
        assert_eq!(overview.previous_mrr, 150.0);

        assert_eq!(view.stats.current, 200.0);
        assert_eq!(view.stats.previous, 150.0);
        assert_eq!(view.month_payments, vec![Payment::new(date(2024, 2, 5), 200.0)]);
    }

    #[test]
    fn test_daily_view_scopes_chart_to_selected_month() {
        let mut dashboard = scenario();
        dashboard.go_to_previous_month();

        let view = dashboard.view(TimePeriod::Daily, date(2024, 3, 1));
        let keys: Vec<&str> = view.series.iter().map(|p| p.period_key.as_str()).collect();
        assert_eq!(keys, vec!["2024-01-01", "2024-01-08"]);
        // The stats card still compares the last two days of the whole store
        assert_eq!(view.stats.current, 200.0);
        assert_eq!(view.stats.previous, 50.0);
    }

    #[test]
    fn test_add_payment_in_new_month_keeps_selection() {
        let mut dashboard = scenario();
        dashboard.add_payment("2024-03-04", "300").unwrap();

        assert_eq!(dashboard.selected_month(), Some(ym("2024-02")));
        assert!(dashboard.go_to_next_month());
        assert_eq!(dashboard.selected_month(), Some(ym("2024-03")));
    }

    #[test]
    fn test_rejected_add_changes_nothing() {
        let mut dashboard = scenario();
        assert!(dashboard.add_payment("", "100").is_err());
        assert_eq!(dashboard.payments().len(), 3);
    }

    #[test]
    fn test_delete_last_payment_of_selected_month_moves_cursor() {
        let mut dashboard = scenario();
        assert_eq!(dashboard.delete_payments_on(date(2024, 2, 5)), 1);

        assert_eq!(dashboard.selected_month(), Some(ym("2024-01")));
        let view = dashboard.view(TimePeriod::Monthly, date(2024, 3, 1));
        assert!(!view.can_go_next);
        assert!(!view.can_go_previous);
    }

    #[test]
    fn test_empty_store_view() {
        let mut dashboard = DashboardService::new(PaymentService::new());
        let view = dashboard.view(TimePeriod::Monthly, date(2024, 3, 1));

        assert_eq!(view.selected_month, None);
        assert!(view.overview.is_none());
        assert!(view.series.is_empty());
        assert_eq!(view.stats.current, 0.0);

        dashboard.add_payment("2024-06-01", "10").unwrap();
        assert_eq!(dashboard.selected_month(), Some(ym("2024-06")));
    }
}
