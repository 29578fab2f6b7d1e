//! # MRR Backend
//!
//! Domain services for the MRR tracker, used directly by the egui frontend.
//! All operations are synchronous and in-memory; the only I/O is reading
//! the optional config file and writing exported PNGs.

use anyhow::Result;
use log::{info, warn};

pub mod config;
pub mod domain;

pub use config::AppConfig;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub config: AppConfig,
    pub dashboard: domain::DashboardService,
    pub payment_table_service: domain::PaymentTableService,
    pub export_service: domain::ExportService,
}

impl Backend {
    /// Create a backend from the on-disk config
    pub fn new() -> Result<Self> {
        let config = AppConfig::load()?;
        Ok(Self::with_config(config))
    }

    /// Like `new`, but a broken config file only costs a warning
    pub fn new_or_default() -> Self {
        Self::new().unwrap_or_else(|e| {
            warn!("⚙️ CONFIG: {:#}, using defaults", e);
            Self::with_config(AppConfig::default())
        })
    }

    /// Create a backend with an explicit config
    pub fn with_config(config: AppConfig) -> Self {
        let payment_service = if config.ui.seed_sample_data {
            domain::PaymentService::seeded()
        } else {
            domain::PaymentService::new()
        };

        let export_service = domain::ExportService::with_output_dir(config.export.output_dir.clone());

        info!("🚀 BACKEND: Initialized for '{}'", config.site.name);

        Self {
            dashboard: domain::DashboardService::new(payment_service),
            payment_table_service: domain::PaymentTableService::new(),
            export_service,
            config,
        }
    }
}
