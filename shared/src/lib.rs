use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use chrono::{Datelike, NaiveDate};

/// A single recurring-revenue payment.
///
/// There is no id field: the date doubles as the key for deletes, and
/// several payments may share a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Calendar date, serialized as "YYYY-MM-DD"
    pub date: NaiveDate,
    /// Non-negative amount in dollars
    pub amount: f64,
}

impl Payment {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self { date, amount }
    }

    /// Year-month this payment falls in
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }
}

/// Year-month key, displayed and parsed as "YYYY-MM".
///
/// Field order matters: the derived `Ord` compares year first, so sorting
/// is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Build a year-month, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or(YearMonthParseError::InvalidFormat)?;

        let year = year
            .parse::<i32>()
            .map_err(|_| YearMonthParseError::InvalidYear)?;
        let month = month
            .parse::<u32>()
            .map_err(|_| YearMonthParseError::InvalidMonth)?;

        YearMonth::new(year, month).ok_or(YearMonthParseError::InvalidMonth)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = YearMonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum YearMonthParseError {
    InvalidFormat,
    InvalidYear,
    InvalidMonth,
}

impl fmt::Display for YearMonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearMonthParseError::InvalidFormat => write!(f, "Expected a year-month like 2024-01"),
            YearMonthParseError::InvalidYear => write!(f, "Invalid year in year-month key"),
            YearMonthParseError::InvalidMonth => write!(f, "Invalid month in year-month key"),
        }
    }
}

impl std::error::Error for YearMonthParseError {}

/// Aggregation granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Daily,
    #[default]
    Monthly,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 2] = [TimePeriod::Daily, TimePeriod::Monthly];

    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Daily => "Daily",
            TimePeriod::Monthly => "Monthly",
        }
    }

    /// Grouping key for a date: the ISO date, or its year-month prefix
    pub fn period_key(&self, date: NaiveDate) -> String {
        match self {
            TimePeriod::Daily => date.format("%Y-%m-%d").to_string(),
            TimePeriod::Monthly => YearMonth::from_date(date).to_string(),
        }
    }
}

/// One bucket of an aggregated revenue series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPoint {
    /// ISO date for daily series, "YYYY-MM" for monthly series
    pub period_key: String,
    /// Sum of all payment amounts falling in the period
    pub amount: f64,
}

/// Figures behind the "MRR Overview" card for the selected month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthOverview {
    pub month: YearMonth,
    pub mrr: f64,
    /// The available month immediately before `month`, if any
    pub previous_month: Option<YearMonth>,
    pub previous_mrr: f64,
    pub percent_change: f64,
}

/// Figures behind the exported "MRR Stats" card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub current: f64,
    pub previous: f64,
    pub percent_change: f64,
    pub generated_on: NaiveDate,
}

/// Everything the dashboard renders, derived from the payment store in one pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub period: TimePeriod,
    pub available_months: Vec<YearMonth>,
    pub selected_month: Option<YearMonth>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// None when the store is empty
    pub overview: Option<MonthOverview>,
    /// Chart series for the active period, scoped to the selected month when daily
    pub series: Vec<AggregatedPoint>,
    /// Payments in the selected month, oldest first
    pub month_payments: Vec<Payment>,
    pub stats: StatsSnapshot,
}

/// Represents a formatted payment for the payments table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedPayment {
    pub formatted_date: String,
    pub formatted_amount: String,
    pub raw_date: NaiveDate,
    pub raw_amount: f64,
}

/// What the export dialog rasterizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    #[default]
    Stats,
    Graph,
}

impl ExportType {
    pub fn label(&self) -> &'static str {
        match self {
            ExportType::Stats => "Export Stats",
            ExportType::Graph => "Export Graph",
        }
    }
}

/// Background gradients offered behind an exported card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientPreset {
    #[default]
    Blue,
    Purple,
    Orange,
    Green,
    Red,
    Indigo,
    Sunset,
    Ocean,
    Forest,
    Aurora,
    Fire,
    Cosmic,
}

impl GradientPreset {
    pub const ALL: [GradientPreset; 12] = [
        GradientPreset::Blue,
        GradientPreset::Purple,
        GradientPreset::Orange,
        GradientPreset::Green,
        GradientPreset::Red,
        GradientPreset::Indigo,
        GradientPreset::Sunset,
        GradientPreset::Ocean,
        GradientPreset::Forest,
        GradientPreset::Aurora,
        GradientPreset::Fire,
        GradientPreset::Cosmic,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            GradientPreset::Blue => "blue",
            GradientPreset::Purple => "purple",
            GradientPreset::Orange => "orange",
            GradientPreset::Green => "green",
            GradientPreset::Red => "red",
            GradientPreset::Indigo => "indigo",
            GradientPreset::Sunset => "sunset",
            GradientPreset::Ocean => "ocean",
            GradientPreset::Forest => "forest",
            GradientPreset::Aurora => "aurora",
            GradientPreset::Fire => "fire",
            GradientPreset::Cosmic => "cosmic",
        }
    }

    /// Left-to-right RGB color stops
    pub fn stops(&self) -> &'static [[u8; 3]] {
        match self {
            GradientPreset::Blue => &[[59, 130, 246], [45, 212, 191]],
            GradientPreset::Purple => &[[168, 85, 247], [236, 72, 153]],
            GradientPreset::Orange => &[[251, 146, 60], [251, 113, 133]],
            GradientPreset::Green => &[[74, 222, 128], [6, 182, 212]],
            GradientPreset::Red => &[[239, 68, 68], [234, 179, 8]],
            GradientPreset::Indigo => &[[99, 102, 241], [168, 85, 247]],
            GradientPreset::Sunset => &[[253, 186, 116], [248, 113, 113], [236, 72, 153]],
            GradientPreset::Ocean => &[[96, 165, 250], [6, 182, 212], [20, 184, 166]],
            GradientPreset::Forest => &[[22, 163, 74], [132, 204, 22], [5, 150, 105]],
            GradientPreset::Aurora => &[[134, 239, 172], [59, 130, 246], [147, 51, 234]],
            GradientPreset::Fire => &[[250, 204, 21], [239, 68, 68], [219, 39, 119]],
            GradientPreset::Cosmic => &[[165, 180, 252], [192, 132, 252], [244, 114, 182]],
        }
    }
}

/// Response after writing an exported image to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportResult {
    pub file_path: String,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month_display_and_parse() {
        let ym = YearMonth::new(2024, 3).unwrap();
        assert_eq!(ym.to_string(), "2024-03");
        assert_eq!("2024-03".parse::<YearMonth>().unwrap(), ym);

        assert_eq!("2024".parse::<YearMonth>(), Err(YearMonthParseError::InvalidFormat));
        assert_eq!("abcd-03".parse::<YearMonth>(), Err(YearMonthParseError::InvalidYear));
        assert_eq!("2024-13".parse::<YearMonth>(), Err(YearMonthParseError::InvalidMonth));
    }

    #[test]
    fn test_year_month_ordering_is_chronological() {
        let mut months = vec![
            YearMonth::new(2024, 10).unwrap(),
            YearMonth::new(2023, 12).unwrap(),
            YearMonth::new(2024, 2).unwrap(),
        ];
        months.sort();
        let keys: Vec<String> = months.iter().map(|m| m.to_string()).collect();
        assert_eq!(keys, vec!["2023-12", "2024-02", "2024-10"]);
    }

    #[test]
    fn test_period_key() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(TimePeriod::Daily.period_key(date), "2024-01-08");
        assert_eq!(TimePeriod::Monthly.period_key(date), "2024-01");
    }

    #[test]
    fn test_payment_wire_format() {
        let payment = Payment::new(NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(), 200.0);
        let json = serde_json::to_string(&payment).unwrap();
        assert_eq!(json, r#"{"date":"2024-02-05","amount":200.0}"#);

        let month_json = serde_json::to_string(&payment.year_month()).unwrap();
        assert_eq!(month_json, r#""2024-02""#);
        let parsed: YearMonth = serde_json::from_str(&month_json).unwrap();
        assert_eq!(parsed, payment.year_month());
    }

    #[test]
    fn test_gradient_keys_match_wire_names() {
        for preset in GradientPreset::ALL {
            let json = serde_json::to_string(&preset).unwrap();
            assert_eq!(json, format!("\"{}\"", preset.key()));
            assert!(preset.stops().len() >= 2);
        }
        assert!(serde_json::from_str::<GradientPreset>(r#""plaid""#).is_err());
    }
}
