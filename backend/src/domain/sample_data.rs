use chrono::NaiveDate;
use shared::Payment;

/// Weekly revenue from January to April 2024, growing steadily
const SAMPLE_ROWS: [(i32, u32, u32, f64); 18] = [
    (2024, 1, 1, 3000.0),
    (2024, 1, 8, 3050.0),
    (2024, 1, 15, 3100.0),
    (2024, 1, 22, 3150.0),
    (2024, 1, 29, 3200.0),
    (2024, 2, 5, 3250.0),
    (2024, 2, 12, 3300.0),
    (2024, 2, 19, 3350.0),
    (2024, 2, 26, 3400.0),
    (2024, 3, 5, 3500.0),
    (2024, 3, 12, 3600.0),
    (2024, 3, 19, 3700.0),
    (2024, 3, 26, 3800.0),
    (2024, 4, 2, 3900.0),
    (2024, 4, 9, 4000.0),
    (2024, 4, 16, 4100.0),
    (2024, 4, 23, 4200.0),
    (2024, 4, 30, 4300.0),
];

pub fn sample_payments() -> Vec<Payment> {
    SAMPLE_ROWS
        .iter()
        .filter_map(|&(year, month, day, amount)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| Payment::new(date, amount))
        })
        .collect()
}
