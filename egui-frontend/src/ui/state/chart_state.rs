//! # Chart State Module
//!
//! Granularity selection for the revenue chart.

use log::info;
use shared::TimePeriod;

#[derive(Debug, Clone)]
pub struct ChartState {
    /// Currently selected time period for the chart
    pub selected_period: TimePeriod,
}

impl ChartState {
    pub fn new(default_period: TimePeriod) -> Self {
        Self {
            selected_period: default_period,
        }
    }

    /// Switch granularity; returns whether anything changed
    pub fn set_period(&mut self, period: TimePeriod) -> bool {
        if self.selected_period == period {
            return false;
        }
        info!("📊 CHART: Period changed {:?} -> {:?}", self.selected_period, period);
        self.selected_period = period;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_period() {
        let mut state = ChartState::new(TimePeriod::Monthly);
        assert!(!state.set_period(TimePeriod::Monthly));
        assert!(state.set_period(TimePeriod::Daily));
        assert_eq!(state.selected_period, TimePeriod::Daily);
    }
}
