//! Payment store for the MRR tracker.
//!
//! Holds the session's payments in insertion order and is the single source
//! of truth for every derived view (aggregates, available months, tables).
//! Nothing here is persisted: the store is seeded at start-up and dropped
//! with the window.
//!
//! Payments have no identity beyond their date. Deleting by date removes
//! every payment recorded on that day, duplicates included.

use chrono::NaiveDate;
use log::{debug, info};
use shared::{Payment, YearMonth};

use crate::domain::sample_data;

/// Reasons an add-payment request is rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentError {
    #[error("Date cannot be empty")]
    EmptyDate,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Amount cannot be empty")]
    EmptyAmount,
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Amount cannot be negative")]
    NegativeAmount,
}

/// Parse a form date in ISO "YYYY-MM-DD" form
pub fn parse_payment_date(input: &str) -> Result<NaiveDate, PaymentError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PaymentError::EmptyDate);
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| PaymentError::InvalidDate(trimmed.to_string()))
}

/// Parse a form amount, tolerating "$", thousands commas and spaces
pub fn parse_payment_amount(input: &str) -> Result<f64, PaymentError> {
    let cleaned = input
        .trim()
        .replace('$', "")
        .replace(',', "")
        .replace(' ', "");

    if cleaned.is_empty() {
        return Err(PaymentError::EmptyAmount);
    }

    let amount = cleaned
        .parse::<f64>()
        .map_err(|_| PaymentError::InvalidAmount(input.trim().to_string()))?;

    if !amount.is_finite() {
        return Err(PaymentError::InvalidAmount(input.trim().to_string()));
    }
    if amount < 0.0 {
        return Err(PaymentError::NegativeAmount);
    }

    Ok(amount)
}

/// In-memory, insertion-ordered payment store
#[derive(Debug, Clone, Default)]
pub struct PaymentService {
    payments: Vec<Payment>,
}

impl PaymentService {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given payments, in the given order
    pub fn with_payments(payments: Vec<Payment>) -> Self {
        Self { payments }
    }

    /// Create a store seeded with the built-in sample revenue
    pub fn seeded() -> Self {
        let payments = sample_data::sample_payments();
        info!("💾 PAYMENTS: Seeding store with {} sample payments", payments.len());
        Self::with_payments(payments)
    }

    /// Append a payment from raw form input.
    ///
    /// Empty or unparseable fields leave the store untouched. No ordering
    /// is enforced here; aggregation sorts on read.
    pub fn add_payment(&mut self, date_input: &str, amount_input: &str) -> Result<Payment, PaymentError> {
        let date = parse_payment_date(date_input)?;
        let amount = parse_payment_amount(amount_input)?;

        let payment = Payment::new(date, amount);
        self.payments.push(payment.clone());
        info!("💾 PAYMENTS: Added payment {} ${:.2} ({} total)", date, amount, self.payments.len());

        Ok(payment)
    }

    /// Remove every payment recorded on `date`, returning how many went
    pub fn delete_payments_on(&mut self, date: NaiveDate) -> usize {
        let before = self.payments.len();
        self.payments.retain(|payment| payment.date != date);
        let removed = before - self.payments.len();

        if removed > 1 {
            info!("🗑️ PAYMENTS: Removed {} payments sharing date {}", removed, date);
        } else {
            debug!("🗑️ PAYMENTS: Removed {} payment(s) on {}", removed, date);
        }

        removed
    }

    /// All payments in insertion order
    pub fn list_payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Payments falling in `month`, oldest first
    pub fn payments_in_month(&self, month: YearMonth) -> Vec<Payment> {
        let mut in_month: Vec<Payment> = self
            .payments
            .iter()
            .filter(|payment| month.contains(payment.date))
            .cloned()
            .collect();
        in_month.sort_by_key(|payment| payment.date);
        in_month
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_payment_appends_without_sorting() {
        let mut service = PaymentService::new();
        service.add_payment("2024-02-05", "200").unwrap();
        service.add_payment("2024-01-01", "100").unwrap();

        let dates: Vec<NaiveDate> = service.list_payments().iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(2024, 2, 5), date(2024, 1, 1)]);
    }

    #[test]
    fn test_add_payment_rejects_empty_fields() {
        let mut service = PaymentService::with_payments(vec![Payment::new(date(2024, 1, 1), 100.0)]);

        assert_eq!(service.add_payment("", "100"), Err(PaymentError::EmptyDate));
        assert_eq!(service.add_payment("2024-01-02", ""), Err(PaymentError::EmptyAmount));
        assert_eq!(service.add_payment("  ", "  "), Err(PaymentError::EmptyDate));
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_add_payment_rejects_unparseable_fields() {
        let mut service = PaymentService::new();

        assert!(matches!(service.add_payment("01/02/2024", "100"), Err(PaymentError::InvalidDate(_))));
        assert!(matches!(service.add_payment("2024-02-30", "100"), Err(PaymentError::InvalidDate(_))));
        assert!(matches!(service.add_payment("2024-01-02", "abc"), Err(PaymentError::InvalidAmount(_))));
        assert!(matches!(service.add_payment("2024-01-02", "inf"), Err(PaymentError::InvalidAmount(_))));
        assert_eq!(service.add_payment("2024-01-02", "-5"), Err(PaymentError::NegativeAmount));
        assert!(service.is_empty());
    }

    #[test]
    fn test_amount_cleaning() {
        assert_eq!(parse_payment_amount("$1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_payment_amount(" 42 ").unwrap(), 42.0);
        assert_eq!(parse_payment_amount("0").unwrap(), 0.0);
    }

    #[test]
    fn test_delete_removes_every_payment_on_date() {
        let mut service = PaymentService::with_payments(vec![
            Payment::new(date(2024, 1, 1), 100.0),
            Payment::new(date(2024, 1, 8), 50.0),
            Payment::new(date(2024, 1, 1), 25.0),
        ]);

        assert_eq!(service.delete_payments_on(date(2024, 1, 1)), 2);
        assert_eq!(service.list_payments(), &[Payment::new(date(2024, 1, 8), 50.0)]);
    }

    #[test]
    fn test_delete_missing_date_is_noop() {
        let mut service = PaymentService::with_payments(vec![Payment::new(date(2024, 1, 1), 100.0)]);
        assert_eq!(service.delete_payments_on(date(2023, 12, 31)), 0);
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_payments_in_month_sorted() {
        let service = PaymentService::with_payments(vec![
            Payment::new(date(2024, 1, 22), 3.0),
            Payment::new(date(2024, 2, 5), 9.0),
            Payment::new(date(2024, 1, 8), 1.0),
        ]);

        let january = service.payments_in_month(YearMonth::new(2024, 1).unwrap());
        assert_eq!(
            january,
            vec![Payment::new(date(2024, 1, 8), 1.0), Payment::new(date(2024, 1, 22), 3.0)]
        );
    }

    #[test]
    fn test_seeded_store() {
        let service = PaymentService::seeded();
        assert_eq!(service.len(), 18);
    }
}
