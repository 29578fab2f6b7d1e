//! Stats card figures for the export dialog.
//!
//! The "MRR Stats" card compares the last two buckets of whichever series
//! is active (daily or monthly), so its meaning follows the period
//! selector rather than the month cursor.

use chrono::NaiveDate;
use shared::{AggregatedPoint, StatsSnapshot};

use crate::domain::aggregation::percent_change;

#[derive(Debug, Clone, Default)]
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Latest bucket against the one before it; missing buckets count as 0
    pub fn stats_snapshot(&self, series: &[AggregatedPoint], today: NaiveDate) -> StatsSnapshot {
        let current = series.last().map(|point| point.amount).unwrap_or(0.0);
        let previous = series
            .len()
            .checked_sub(2)
            .and_then(|index| series.get(index))
            .map(|point| point.amount)
            .unwrap_or(0.0);

        StatsSnapshot {
            current,
            previous,
            percent_change: percent_change(current, previous),
            generated_on: today,
        }
    }
}
