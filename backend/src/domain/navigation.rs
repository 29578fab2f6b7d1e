//! Month navigation for the MRR tracker.
//!
//! The cursor is an index into the sorted list of available months. It
//! starts on the most recent month and moves one step at a time; at either
//! end a move is a no-op. Whenever the list is non-empty the cursor points
//! at one of its entries.
//!
//! The cursor does not own the month list. Callers pass the current
//! `available_months` on every call, and `resync` after the payment store
//! changes so the selection never points at a month that has disappeared.

use log::{debug, info};
use shared::YearMonth;

/// Currently selected month, always one of the available months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthCursor {
    selected: Option<YearMonth>,
}

impl MonthCursor {
    /// Start on the latest month, or empty when there are no months
    pub fn from_months(months: &[YearMonth]) -> Self {
        Self {
            selected: months.last().copied(),
        }
    }

    pub fn selected(&self) -> Option<YearMonth> {
        self.selected
    }

    fn index_in(&self, months: &[YearMonth]) -> Option<usize> {
        let selected = self.selected?;
        months.iter().position(|month| *month == selected)
    }

    pub fn can_go_previous(&self, months: &[YearMonth]) -> bool {
        matches!(self.index_in(months), Some(index) if index > 0)
    }

    pub fn can_go_next(&self, months: &[YearMonth]) -> bool {
        matches!(self.index_in(months), Some(index) if index + 1 < months.len())
    }

    /// Step back one available month. Returns whether the cursor moved.
    pub fn go_to_previous_month(&mut self, months: &[YearMonth]) -> bool {
        match self.index_in(months) {
            Some(index) if index > 0 => {
                self.selected = Some(months[index - 1]);
                info!("📅 NAVIGATION: Moved to previous month {}", months[index - 1]);
                true
            }
            _ => {
                debug!("📅 NAVIGATION: Already at the earliest month");
                false
            }
        }
    }

    /// Step forward one available month. Returns whether the cursor moved.
    pub fn go_to_next_month(&mut self, months: &[YearMonth]) -> bool {
        match self.index_in(months) {
            Some(index) if index + 1 < months.len() => {
                self.selected = Some(months[index + 1]);
                info!("📅 NAVIGATION: Moved to next month {}", months[index + 1]);
                true
            }
            _ => {
                debug!("📅 NAVIGATION: Already at the latest month");
                false
            }
        }
    }

    /// Restore the cursor invariant after the month list changed.
    ///
    /// A selection that is still available is kept. Otherwise the cursor
    /// snaps to the latest month not after the old selection, falling back
    /// to the earliest month. An empty list clears the cursor.
    pub fn resync(&mut self, months: &[YearMonth]) {
        let resynced = match self.selected {
            _ if months.is_empty() => None,
            None => months.last().copied(),
            Some(selected) if months.contains(&selected) => Some(selected),
            Some(selected) => months
                .iter()
                .rev()
                .find(|month| **month <= selected)
                .or_else(|| months.first())
                .copied(),
        };

        if resynced != self.selected {
            info!(
                "📅 NAVIGATION: Cursor resynced from {:?} to {:?}",
                self.selected.map(|m| m.to_string()),
                resynced.map(|m| m.to_string())
            );
        }
        self.selected = resynced;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(keys: &[&str]) -> Vec<YearMonth> {
        keys.iter().map(|key| key.parse().unwrap()).collect()
    }

    fn ym(key: &str) -> YearMonth {
        key.parse().unwrap()
    }

    #[test]
    fn test_initial_cursor_is_latest_month() {
        let available = months(&["2024-01", "2024-02"]);
        let cursor = MonthCursor::from_months(&available);
        assert_eq!(cursor.selected(), Some(ym("2024-02")));
    }

    #[test]
    fn test_empty_months_give_empty_cursor() {
        let mut cursor = MonthCursor::from_months(&[]);
        assert_eq!(cursor.selected(), None);
        assert!(!cursor.go_to_previous_month(&[]));
        assert!(!cursor.go_to_next_month(&[]));
        assert!(!cursor.can_go_previous(&[]));
        assert!(!cursor.can_go_next(&[]));
    }

    #[test]
    fn test_next_at_last_month_is_noop() {
        let available = months(&["2024-01", "2024-02"]);
        let mut cursor = MonthCursor::from_months(&available);

        assert!(!cursor.can_go_next(&available));
        assert!(!cursor.go_to_next_month(&available));
        assert_eq!(cursor.selected(), Some(ym("2024-02")));
    }

    #[test]
    fn test_previous_at_first_month_is_noop() {
        let available = months(&["2024-01", "2024-02", "2024-03"]);
        let mut cursor = MonthCursor::from_months(&available);

        assert!(cursor.go_to_previous_month(&available));
        assert!(cursor.go_to_previous_month(&available));
        assert_eq!(cursor.selected(), Some(ym("2024-01")));

        assert!(!cursor.can_go_previous(&available));
        assert!(!cursor.go_to_previous_month(&available));
        assert_eq!(cursor.selected(), Some(ym("2024-01")));
    }

    #[test]
    fn test_navigation_skips_months_without_data() {
        let available = months(&["2024-01", "2024-04"]);
        let mut cursor = MonthCursor::from_months(&available);

        assert!(cursor.go_to_previous_month(&available));
        assert_eq!(cursor.selected(), Some(ym("2024-01")));
        assert!(cursor.go_to_next_month(&available));
        assert_eq!(cursor.selected(), Some(ym("2024-04")));
    }

    #[test]
    fn test_cursor_never_leaves_available_months() {
        let available = months(&["2024-01", "2024-02", "2024-03"]);
        let mut cursor = MonthCursor::from_months(&available);

        for step in 0..10 {
            if step % 3 == 0 {
                cursor.go_to_next_month(&available);
            } else {
                cursor.go_to_previous_month(&available);
            }
            let selected = cursor.selected().unwrap();
            assert!(available.contains(&selected));
        }
    }

    #[test]
    fn test_resync_keeps_present_selection() {
        let available = months(&["2024-01", "2024-02", "2024-03"]);
        let mut cursor = MonthCursor::from_months(&available);
        cursor.go_to_previous_month(&available);

        let grown = months(&["2024-01", "2024-02", "2024-03", "2024-05"]);
        cursor.resync(&grown);
        assert_eq!(cursor.selected(), Some(ym("2024-02")));
    }

    #[test]
    fn test_resync_after_selected_month_removed() {
        let available = months(&["2024-01", "2024-02", "2024-03"]);
        let mut cursor = MonthCursor::from_months(&available);
        cursor.go_to_previous_month(&available);

        cursor.resync(&months(&["2024-01", "2024-03"]));
        assert_eq!(cursor.selected(), Some(ym("2024-01")));

        cursor.resync(&months(&["2024-03"]));
        assert_eq!(cursor.selected(), Some(ym("2024-03")));

        cursor.resync(&[]);
        assert_eq!(cursor.selected(), None);

        cursor.resync(&months(&["2024-06", "2024-07"]));
        assert_eq!(cursor.selected(), Some(ym("2024-07")));
    }
}
