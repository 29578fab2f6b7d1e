//! # UI State Module
//!
//! User feedback that is not tied to one component.

pub const EXPORT_FAILED_MESSAGE: &str = "There was an error generating the screenshot. Please try again.";

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Blocking alert shown until dismissed
    pub error_alert: Option<String>,
    /// Short confirmation shown under the header
    pub success_message: Option<String>,
}

impl UiState {
    pub fn show_export_failure(&mut self) {
        self.error_alert = Some(EXPORT_FAILED_MESSAGE.to_string());
        self.success_message = None;
    }

    pub fn dismiss_alert(&mut self) {
        self.error_alert = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_failure_alert() {
        let mut state = UiState {
            success_message: Some("saved".to_string()),
            ..UiState::default()
        };
        state.show_export_failure();
        assert_eq!(state.error_alert.as_deref(), Some(EXPORT_FAILED_MESSAGE));
        assert!(state.success_message.is_none());

        state.dismiss_alert();
        assert!(state.error_alert.is_none());
    }
}
