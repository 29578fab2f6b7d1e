//! # Modal State Module
//!
//! State of the export dialog, including the two-step screenshot capture:
//! the dialog records which card region to keep and asks the viewport for a
//! screenshot, and the frame that receives it finishes the export.

use egui::Rect;
use log::info;
use shared::{ExportResult, ExportType, GradientPreset};

/// A screenshot request waiting for its image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingCapture {
    /// Card region in logical points
    pub region: Rect,
    pub export_type: ExportType,
}

#[derive(Debug, Clone)]
pub struct ExportModalState {
    pub is_open: bool,
    pub export_type: ExportType,
    pub gradient: GradientPreset,
    /// Optional directory override typed by the user
    pub custom_dir: String,
    pub pending_capture: Option<PendingCapture>,
    pub last_result: Option<ExportResult>,
    default_type: ExportType,
}

impl ExportModalState {
    pub fn new(default_type: ExportType, default_gradient: GradientPreset) -> Self {
        Self {
            is_open: false,
            export_type: default_type,
            gradient: default_gradient,
            custom_dir: String::new(),
            pending_capture: None,
            last_result: None,
            default_type,
        }
    }

    pub fn open(&mut self) {
        info!("🖼️ EXPORT: Opening export dialog");
        self.is_open = true;
        self.export_type = self.default_type;
        self.last_result = None;
    }

    /// Close the dialog; the export type always comes back as Stats
    pub fn close(&mut self) {
        info!("🖼️ EXPORT: Export dialog closed");
        self.is_open = false;
        self.export_type = ExportType::Stats;
        self.pending_capture = None;
    }

    pub fn is_capturing(&self) -> bool {
        self.pending_capture.is_some()
    }

    pub fn begin_capture(&mut self, region: Rect) {
        self.pending_capture = Some(PendingCapture {
            region,
            export_type: self.export_type,
        });
    }

    pub fn take_capture(&mut self) -> Option<PendingCapture> {
        self.pending_capture.take()
    }

    /// Trimmed custom directory, if one was entered
    pub fn custom_dir(&self) -> Option<&str> {
        let trimmed = self.custom_dir.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}
