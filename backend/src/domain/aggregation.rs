//! Revenue aggregation domain logic for the MRR tracker.
//!
//! Everything here is a pure function of the payment list: daily and
//! monthly rollups, the set of months that have data, per-month totals and
//! month-over-month change. The UI recomputes these whenever the store
//! changes; nothing is cached.
//!
//! Rollups are grouped through an ordered map keyed by the date or
//! `YearMonth` itself, so the output is chronological no matter in which
//! order payments were added.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use shared::{AggregatedPoint, MonthOverview, Payment, TimePeriod, YearMonth};

/// Month-over-month change in percent; `0.0` when there is nothing to compare against
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Aggregation service for revenue rollups
#[derive(Debug, Clone, Default)]
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Group payments by period and sum each group, oldest period first
    pub fn aggregate(&self, payments: &[Payment], period: TimePeriod) -> Vec<AggregatedPoint> {
        let points = match period {
            TimePeriod::Daily => Self::group_by(payments, period, |payment| payment.date),
            TimePeriod::Monthly => Self::group_by(payments, period, Payment::year_month),
        };

        debug!("📊 AGGREGATE: {} payments -> {} {:?} buckets", payments.len(), points.len(), period);
        points
    }

    // Buckets are ordered by the typed key; the formatted key is only a label
    // and does not sort chronologically outside four-digit years.
    fn group_by<K: Ord>(
        payments: &[Payment],
        period: TimePeriod,
        bucket_of: impl Fn(&Payment) -> K,
    ) -> Vec<AggregatedPoint> {
        let mut buckets: BTreeMap<K, AggregatedPoint> = BTreeMap::new();
        for payment in payments {
            buckets
                .entry(bucket_of(payment))
                .or_insert_with(|| AggregatedPoint {
                    period_key: period.period_key(payment.date),
                    amount: 0.0,
                })
                .amount += payment.amount;
        }
        buckets.into_values().collect()
    }

    /// Distinct months that have at least one payment, ascending
    pub fn available_months(&self, payments: &[Payment]) -> Vec<YearMonth> {
        payments
            .iter()
            .map(Payment::year_month)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sum of payment amounts within `month`
    pub fn monthly_total(&self, payments: &[Payment], month: YearMonth) -> f64 {
        payments
            .iter()
            .filter(|payment| month.contains(payment.date))
            .map(|payment| payment.amount)
            .sum()
    }

    /// MRR for `month` against the previous month that has data.
    ///
    /// The comparison month is the previous entry in `available_months`,
    /// not the calendar month before, so gaps in the data are skipped.
    pub fn month_overview(&self, payments: &[Payment], month: YearMonth) -> MonthOverview {
        let months = self.available_months(payments);
        let previous_month = months
            .iter()
            .position(|m| *m == month)
            .and_then(|index| index.checked_sub(1))
            .map(|index| months[index]);

        let mrr = self.monthly_total(payments, month);
        let previous_mrr = previous_month
            .map(|previous| self.monthly_total(payments, previous))
            .unwrap_or(0.0);

        MonthOverview {
            month,
            mrr,
            previous_month,
            previous_mrr,
            percent_change: percent_change(mrr, previous_mrr),
        }
    }

    /// Series for the overview chart.
    ///
    /// Monthly granularity charts every month; daily granularity only the
    /// days inside the selected month.
    pub fn chart_series(
        &self,
        payments: &[Payment],
        period: TimePeriod,
        selected_month: Option<YearMonth>,
    ) -> Vec<AggregatedPoint> {
        match (period, selected_month) {
            (TimePeriod::Monthly, _) => self.aggregate(payments, TimePeriod::Monthly),
            (TimePeriod::Daily, Some(month)) => {
                let in_month: Vec<Payment> = payments
                    .iter()
                    .filter(|payment| month.contains(payment.date))
                    .cloned()
                    .collect();
                self.aggregate(&in_month, TimePeriod::Daily)
            }
            (TimePeriod::Daily, None) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn payment(date: &str, amount: f64) -> Payment {
        Payment::new(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(), amount)
    }

    fn month(key: &str) -> YearMonth {
        key.parse().unwrap()
    }

    fn scenario_payments() -> Vec<Payment> {
        vec![
            payment("2024-01-01", 100.0),
            payment("2024-01-08", 50.0),
            payment("2024-02-05", 200.0),
        ]
    }

    fn point(key: &str, amount: f64) -> AggregatedPoint {
        AggregatedPoint { period_key: key.to_string(), amount }
    }

    #[test]
    fn test_monthly_aggregate_scenario() {
        let service = AggregationService::new();
        let monthly = service.aggregate(&scenario_payments(), TimePeriod::Monthly);
        assert_eq!(monthly, vec![point("2024-01", 150.0), point("2024-02", 200.0)]);
    }

    #[test]
    fn test_daily_aggregate_merges_same_day() {
        let service = AggregationService::new();
        let payments = vec![
            payment("2024-01-08", 50.0),
            payment("2024-01-01", 100.0),
            payment("2024-01-08", 25.0),
        ];
        let daily = service.aggregate(&payments, TimePeriod::Daily);
        assert_eq!(daily, vec![point("2024-01-01", 100.0), point("2024-01-08", 75.0)]);
    }

    #[test]
    fn test_aggregate_is_chronological_for_out_of_order_input() {
        let service = AggregationService::new();
        let payments = vec![
            payment("2024-03-05", 1.0),
            payment("2023-12-31", 2.0),
            payment("2024-01-15", 3.0),
            payment("2023-12-01", 4.0),
        ];

        let monthly: Vec<String> = service
            .aggregate(&payments, TimePeriod::Monthly)
            .into_iter()
            .map(|p| p.period_key)
            .collect();
        assert_eq!(monthly, vec!["2023-12", "2024-01", "2024-03"]);

        let daily: Vec<String> = service
            .aggregate(&payments, TimePeriod::Daily)
            .into_iter()
            .map(|p| p.period_key)
            .collect();
        assert_eq!(daily, vec!["2023-12-01", "2023-12-31", "2024-01-15", "2024-03-05"]);
    }

    #[test]
    fn test_aggregate_orders_five_digit_years_after_four_digit_ones() {
        let service = AggregationService::new();
        let far_future = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        let payments = vec![Payment::new(far_future, 50.0), payment("2024-01-01", 100.0)];

        let monthly = service.aggregate(&payments, TimePeriod::Monthly);
        let monthly_keys: Vec<&str> = monthly.iter().map(|p| p.period_key.as_str()).collect();
        let month_keys: Vec<String> = service
            .available_months(&payments)
            .iter()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(monthly_keys, month_keys);
        assert_eq!(monthly.last().map(|p| p.amount), Some(50.0));

        let daily = service.aggregate(&payments, TimePeriod::Daily);
        assert_eq!(daily[0].period_key, "2024-01-01");
        assert_eq!(daily[1].amount, 50.0);
    }

    #[test]
    fn test_rollups_preserve_total() {
        let service = AggregationService::new();
        let payments = crate::domain::sample_data::sample_payments();
        let total: f64 = payments.iter().map(|p| p.amount).sum();

        let monthly: f64 = service.aggregate(&payments, TimePeriod::Monthly).iter().map(|p| p.amount).sum();
        let daily: f64 = service.aggregate(&payments, TimePeriod::Daily).iter().map(|p| p.amount).sum();

        assert!((monthly - total).abs() < 1e-9);
        assert!((daily - total).abs() < 1e-9);
    }

    #[test]
    fn test_available_months_strictly_ascending() {
        let service = AggregationService::new();
        let mut payments = scenario_payments();
        payments.push(payment("2023-11-20", 10.0));
        payments.push(payment("2024-01-30", 10.0));

        let months = service.available_months(&payments);
        assert_eq!(months, vec![month("2023-11"), month("2024-01"), month("2024-02")]);
        assert!(months.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_available_months_empty_store() {
        let service = AggregationService::new();
        assert!(service.available_months(&[]).is_empty());
        assert!(service.aggregate(&[], TimePeriod::Monthly).is_empty());
    }

    #[test]
    fn test_monthly_total() {
        let service = AggregationService::new();
        assert_eq!(service.monthly_total(&scenario_payments(), month("2024-01")), 150.0);
        assert_eq!(service.monthly_total(&scenario_payments(), month("2024-03")), 0.0);
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(150.0, 100.0), 50.0);
        assert_eq!(percent_change(50.0, 100.0), -50.0);
        assert_eq!(percent_change(123.0, 0.0), 0.0);
        assert_eq!(percent_change(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_month_overview_uses_previous_available_month() {
        let service = AggregationService::new();
        let payments = vec![
            payment("2024-01-01", 100.0),
            payment("2024-03-01", 150.0),
        ];

        let overview = service.month_overview(&payments, month("2024-03"));
        assert_eq!(overview.mrr, 150.0);
        assert_eq!(overview.previous_month, Some(month("2024-01")));
        assert_eq!(overview.previous_mrr, 100.0);
        assert_eq!(overview.percent_change, 50.0);

        let first = service.month_overview(&payments, month("2024-01"));
        assert_eq!(first.previous_month, None);
        assert_eq!(first.percent_change, 0.0);
    }

    #[test]
    fn test_chart_series_daily_scoped_to_month() {
        let service = AggregationService::new();
        let series = service.chart_series(&scenario_payments(), TimePeriod::Daily, Some(month("2024-01")));
        assert_eq!(series, vec![point("2024-01-01", 100.0), point("2024-01-08", 50.0)]);

        let monthly = service.chart_series(&scenario_payments(), TimePeriod::Monthly, Some(month("2024-01")));
        assert_eq!(monthly.len(), 2);

        assert!(service.chart_series(&scenario_payments(), TimePeriod::Daily, None).is_empty());
    }
}
