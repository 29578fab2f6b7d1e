//! # Domain Module
//!
//! Contains all business logic for the MRR tracker.
//!
//! ## Module Organization
//!
//! - **payment_service**: In-memory payment store with add and delete-by-date
//! - **aggregation**: Daily/monthly rollups, available months, month-over-month change
//! - **navigation**: Bounded month cursor over the available months
//! - **dashboard**: Owns store and cursor, produces the derived dashboard view
//! - **stats_service**: Figures for the exported stats card
//! - **payment_table**: Currency, date and percentage formatting plus form validation
//! - **export_service**: PNG encoding and writing of captured snapshots
//!
//! ## Core Concepts
//!
//! - **Payment**: a dated amount of recurring revenue; the date is its only key
//! - **Period key**: ISO date for daily rollups, "YYYY-MM" for monthly rollups
//! - **Cursor**: the selected month scoping the chart (daily view) and table
//!
//! Nothing in this module persists state or touches the UI toolkit.

pub mod aggregation;
pub mod dashboard;
pub mod export_service;
pub mod navigation;
pub mod payment_service;
pub mod payment_table;
pub mod sample_data;
pub mod stats_service;

pub use aggregation::{percent_change, AggregationService};
pub use dashboard::DashboardService;
pub use export_service::{ExportError, ExportService, RgbaSnapshot};
pub use navigation::MonthCursor;
pub use payment_service::{PaymentError, PaymentService};
pub use payment_table::PaymentTableService;
pub use stats_service::StatsService;
