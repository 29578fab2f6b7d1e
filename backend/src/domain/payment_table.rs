//! Payment table and display formatting for the MRR tracker.
//!
//! Turns raw payments and aggregates into the strings the UI shows:
//! currency amounts, chart tick labels, the month heading of the navigator,
//! and the percentage badge.
//! Formatting is fixed to US dollars with whole-dollar precision.

use chrono::NaiveDate;
use shared::{FormattedPayment, Payment, TimePeriod, YearMonth};

/// Payment table service that handles all display formatting
#[derive(Debug, Clone, Default)]
pub struct PaymentTableService;

impl PaymentTableService {
    pub fn new() -> Self {
        Self
    }

    /// Format rows for the payments table
    pub fn format_payments_for_table(&self, payments: &[Payment]) -> Vec<FormattedPayment> {
        payments
            .iter()
            .map(|payment| self.format_single_payment(payment))
            .collect()
    }

    pub fn format_single_payment(&self, payment: &Payment) -> FormattedPayment {
        FormattedPayment {
            formatted_date: self.format_long_date(payment.date),
            formatted_amount: self.format_currency(payment.amount),
            raw_date: payment.date,
            raw_amount: payment.amount,
        }
    }

    /// "$4,300": dollars rounded to whole units with thousands separators
    pub fn format_currency(&self, value: f64) -> String {
        let rounded = value.round();
        // Rounding can produce -0.0, which should still print as "$0"
        let sign = if rounded < 0.0 { "-" } else { "" };
        let digits = format!("{:.0}", rounded.abs());

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, ch) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        format!("{}${}", sign, grouped)
    }

    /// "+5.0%" / "-2.5%"; zero counts as growth
    pub fn format_percent(&self, value: f64) -> String {
        if value >= 0.0 {
            format!("+{:.1}%", value)
        } else {
            format!("{:.1}%", value)
        }
    }

    /// Whether the percentage badge should use the positive style
    pub fn is_growth(&self, value: f64) -> bool {
        value >= 0.0
    }

    /// Chart tick label for a period key: "Jan 8" (daily) or "Jan" (monthly).
    /// Unparseable keys are returned unchanged.
    pub fn format_period_label(&self, period_key: &str, period: TimePeriod) -> String {
        match period {
            TimePeriod::Daily => match NaiveDate::parse_from_str(period_key, "%Y-%m-%d") {
                Ok(date) => date.format("%b %-d").to_string(),
                Err(_) => period_key.to_string(),
            },
            TimePeriod::Monthly => match period_key.parse::<YearMonth>() {
                Ok(month) => self.short_month_name(month.month).to_string(),
                Err(_) => period_key.to_string(),
            },
        }
    }

    /// Navigator heading, e.g. "April 2024"
    pub fn format_month_heading(&self, month: YearMonth) -> String {
        format!("{} {}", self.month_name(month.month), month.year)
    }

    /// Table date, e.g. "April 30, 2024"
    pub fn format_long_date(&self, date: NaiveDate) -> String {
        date.format("%B %-d, %Y").to_string()
    }

    fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    fn short_month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "Jan", 2 => "Feb", 3 => "Mar", 4 => "Apr",
            5 => "May", 6 => "Jun", 7 => "Jul", 8 => "Aug",
            9 => "Sep", 10 => "Oct", 11 => "Nov", 12 => "Dec",
            _ => "???",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_currency() {
        let service = PaymentTableService::new();
        assert_eq!(service.format_currency(4300.0), "$4,300");
        assert_eq!(service.format_currency(0.0), "$0");
        assert_eq!(service.format_currency(999.4), "$999");
        assert_eq!(service.format_currency(1234567.0), "$1,234,567");
        assert_eq!(service.format_currency(-1500.0), "-$1,500");
        assert_eq!(service.format_currency(-0.2), "$0");
    }

    #[test]
    fn test_format_percent() {
        let service = PaymentTableService::new();
        assert_eq!(service.format_percent(0.0), "+0.0%");
        assert_eq!(service.format_percent(5.0), "+5.0%");
        assert_eq!(service.format_percent(-2.54), "-2.5%");
        assert!(service.is_growth(0.0));
        assert!(!service.is_growth(-0.1));
    }

    #[test]
    fn test_format_period_label() {
        let service = PaymentTableService::new();
        assert_eq!(service.format_period_label("2024-01-08", TimePeriod::Daily), "Jan 8");
        assert_eq!(service.format_period_label("2024-04", TimePeriod::Monthly), "Apr");
        assert_eq!(service.format_period_label("garbage", TimePeriod::Monthly), "garbage");
    }

    #[test]
    fn test_format_month_heading() {
        let service = PaymentTableService::new();
        assert_eq!(service.format_month_heading(YearMonth::new(2024, 4).unwrap()), "April 2024");
    }

    #[test]
    fn test_format_payments_for_table() {
        let service = PaymentTableService::new();
        let rows = service.format_payments_for_table(&[Payment::new(date(2024, 4, 30), 4300.0)]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].formatted_date, "April 30, 2024");
        assert_eq!(rows[0].formatted_amount, "$4,300");
        assert_eq!(rows[0].raw_date, date(2024, 4, 30));
    }
}
