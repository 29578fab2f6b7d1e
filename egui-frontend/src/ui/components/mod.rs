//! # UI Components Module
//!
//! ## Module Organization:
//! - `header` - Title row, month navigator and period selector
//! - `chart_renderer` - MRR overview card and revenue chart
//! - `table_renderer` - Payments of the selected month with delete buttons
//! - `payment_form` - "Add Payment" card
//! - `export_modal` - Export dialog and screenshot capture
//! - `modals` - Modal routing and the error alert
//! - `styling` / `theme` - Global style, colors and painting helpers

pub mod chart_renderer;
pub mod export_modal;
pub mod header;
pub mod modals;
pub mod payment_form;
pub mod styling;
pub mod table_renderer;
pub mod theme;
