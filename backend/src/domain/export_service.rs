//! Image export domain logic for the MRR tracker.
//!
//! The UI captures the export card as a raw RGBA raster; this module crops
//! it to the card, scales it to the configured output density, encodes it
//! as PNG and writes it to disk. The UI only handles presentation: opening
//! the dialog, requesting the capture and showing the result or alert.
//!
//! Files are named `mrr-overview-<epoch_millis>.png` and land in the custom
//! directory if one is configured, otherwise the user's Downloads folder,
//! otherwise their home directory.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};
use log::{error, info};
use shared::ExportResult;

/// Export failures. Every variant ends up as the same user-facing alert.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Nothing to export: the captured region is empty")]
    EmptySnapshot,
    #[error("Snapshot is {width}x{height} but holds {actual} bytes instead of {expected}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("Could not determine an export directory")]
    NoExportDirectory,
    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Raw RGBA8 raster, row-major, 4 bytes per pixel
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaSnapshot {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbaSnapshot {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ExportError> {
        let snapshot = Self { width, height, pixels };
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), ExportError> {
        if self.width == 0 || self.height == 0 {
            return Err(ExportError::EmptySnapshot);
        }
        let expected = self.width as usize * self.height as usize * 4;
        if self.pixels.len() != expected {
            return Err(ExportError::SizeMismatch {
                width: self.width,
                height: self.height,
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Cut out a region in pixel coordinates, clamped to the raster bounds
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Self, ExportError> {
        self.validate()?;

        let x0 = x.min(self.width);
        let y0 = y.min(self.height);
        let x1 = x.saturating_add(width).min(self.width);
        let y1 = y.saturating_add(height).min(self.height);
        if x1 <= x0 || y1 <= y0 {
            return Err(ExportError::EmptySnapshot);
        }

        let row_bytes = self.width as usize * 4;
        let mut pixels = Vec::with_capacity((x1 - x0) as usize * (y1 - y0) as usize * 4);
        for row in y0..y1 {
            let start = row as usize * row_bytes + x0 as usize * 4;
            let end = row as usize * row_bytes + x1 as usize * 4;
            pixels.extend_from_slice(&self.pixels[start..end]);
        }

        Ok(Self {
            width: x1 - x0,
            height: y1 - y0,
            pixels,
        })
    }

    fn to_image(&self) -> Result<RgbaImage, ExportError> {
        self.validate()?;
        RgbaImage::from_raw(self.width, self.height, self.pixels.clone()).ok_or(
            ExportError::SizeMismatch {
                width: self.width,
                height: self.height,
                expected: self.width as usize * self.height as usize * 4,
                actual: self.pixels.len(),
            },
        )
    }
}

/// Export service that handles all export-related business logic
#[derive(Debug, Clone, Default)]
pub struct ExportService {
    output_dir: Option<String>,
}

impl ExportService {
    /// Create an ExportService writing to the default location
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an ExportService with a configured output directory
    pub fn with_output_dir(output_dir: Option<String>) -> Self {
        Self { output_dir }
    }

    /// `mrr-overview-<epoch_millis>.png`
    pub fn export_filename(&self, now: DateTime<Utc>) -> String {
        format!("mrr-overview-{}.png", now.timestamp_millis())
    }

    /// Resize by `factor`; factors at or below 1.0 return the raster unchanged
    pub fn scale_snapshot(&self, snapshot: &RgbaSnapshot, factor: f32) -> Result<RgbaSnapshot, ExportError> {
        if !factor.is_finite() || factor <= 1.0 {
            return Ok(snapshot.clone());
        }

        let image = snapshot.to_image()?;
        let width = ((snapshot.width as f32) * factor).round() as u32;
        let height = ((snapshot.height as f32) * factor).round() as u32;
        let scaled = image::imageops::resize(&image, width, height, FilterType::CatmullRom);

        Ok(RgbaSnapshot {
            width: scaled.width(),
            height: scaled.height(),
            pixels: scaled.into_raw(),
        })
    }

    /// Encode the snapshot as PNG bytes
    pub fn encode_png(&self, snapshot: &RgbaSnapshot) -> Result<Vec<u8>, ExportError> {
        let image = snapshot.to_image()?;
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Pick the export directory: custom path, configured path, Downloads, home
    pub fn resolve_export_dir(&self, custom_dir: Option<&str>) -> Result<PathBuf, ExportError> {
        let explicit = custom_dir
            .or(self.output_dir.as_deref())
            .filter(|path| !path.trim().is_empty());

        if let Some(path) = explicit {
            return Ok(PathBuf::from(self.sanitize_path(path)));
        }

        dirs::download_dir()
            .or_else(dirs::home_dir)
            .ok_or(ExportError::NoExportDirectory)
    }

    /// Encode the snapshot and write it to the export directory
    pub fn export_png(
        &self,
        snapshot: &RgbaSnapshot,
        custom_dir: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<ExportResult, ExportError> {
        info!("🖼️ EXPORT: Exporting {}x{} snapshot as PNG", snapshot.width, snapshot.height);

        let png = self.encode_png(snapshot)?;
        let export_dir = self.resolve_export_dir(custom_dir)?;

        if let Err(e) = fs::create_dir_all(&export_dir) {
            error!("❌ EXPORT: Failed to create export directory {:?}: {}", export_dir, e);
            return Err(e.into());
        }

        let file_path = export_dir.join(self.export_filename(now));
        if let Err(e) = fs::write(&file_path, &png) {
            error!("❌ EXPORT: Failed to write export file to {:?}: {}", file_path, e);
            return Err(e.into());
        }

        let file_path = file_path.to_string_lossy().to_string();
        info!("✅ EXPORT: Wrote {} bytes to {}", png.len(), file_path);

        Ok(ExportResult {
            file_path,
            width: snapshot.width,
            height: snapshot.height,
        })
    }

    /// Basic path sanitization to handle common user input issues
    pub fn sanitize_path(&self, path: &str) -> String {
        let mut cleaned = path.trim().to_string();

        if cleaned.len() >= 2
            && ((cleaned.starts_with('"') && cleaned.ends_with('"'))
                || (cleaned.starts_with('\'') && cleaned.ends_with('\'')))
        {
            cleaned = cleaned[1..cleaned.len() - 1].trim().to_string();
        }

        cleaned = cleaned.replace("\\ ", " ");

        while cleaned.len() > 1 && (cleaned.ends_with('/') || cleaned.ends_with('\\')) {
            cleaned.pop();
        }

        if cleaned.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                if cleaned == "~" {
                    cleaned = home.to_string_lossy().to_string();
                } else if cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
                    cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
                }
            }
        }

        cleaned
    }
}
