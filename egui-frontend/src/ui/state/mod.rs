//! # UI State
//!
//! Plain state structs grouped by concern. None of them touch egui
//! rendering, so they are unit tested directly.

pub mod chart_state;
pub mod form_state;
pub mod modal_state;
pub mod ui_state;

pub use chart_state::ChartState;
pub use form_state::PaymentFormState;
pub use modal_state::{ExportModalState, PendingCapture};
pub use ui_state::UiState;
