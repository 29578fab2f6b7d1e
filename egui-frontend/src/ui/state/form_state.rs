//! # Payment Form State
//!
//! Raw text behind the "Add Payment" form. The strings are handed to the
//! backend untouched; parsing and validation live there.

use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct PaymentFormState {
    /// "YYYY-MM-DD", typed or filled in by the date picker
    pub date_input: String,
    pub amount_input: String,
    /// Backing value for the date picker button
    pub picker_date: NaiveDate,
}

impl PaymentFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date_input: today.format("%Y-%m-%d").to_string(),
            amount_input: String::new(),
            picker_date: today,
        }
    }

    /// Copy a date chosen in the picker into the text field
    pub fn apply_picker_date(&mut self) {
        self.date_input = self.picker_date.format("%Y-%m-%d").to_string();
    }

    /// Clear the amount after a successful add, keeping the date for quick entry
    pub fn clear_after_submit(&mut self) {
        self.amount_input.clear();
    }
}
