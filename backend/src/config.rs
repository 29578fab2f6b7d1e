//! # Application Configuration
//!
//! Optional YAML configuration for the MRR tracker, read once at start-up
//! from `<config_dir>/mrr-tracker/config.yaml`. Every field has a default,
//! so a missing file, or a file that sets only a few keys, is fine.
//!
//! ## YAML Format
//!
//! ```yaml
//! site:
//!   name: "Stripe MRR"
//!   description: "A slick tool to flex your MRR that directly hits your bank account."
//! export:
//!   output_dir: "~/Pictures/mrr"
//!   default_gradient: "ocean"
//!   default_export_type: "graph"
//!   scale: 2.0
//! ui:
//!   default_period: "daily"
//!   seed_sample_data: true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use shared::{ExportType, GradientPreset, TimePeriod};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Static site metadata shown in the window title and header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub url: String,
    pub description: String,
    pub twitter: String,
    pub github: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Stripe MRR".to_string(),
            url: "https://www.stripemrr.com".to_string(),
            description: "A slick tool to flex your MRR that directly hits your bank account."
                .to_string(),
            twitter: "https://x.com/itsarghyadas".to_string(),
            github: "https://github.com/itsarghyadas".to_string(),
        }
    }
}

/// Image export preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for exported PNGs; Downloads (or home) when unset
    pub output_dir: Option<String>,
    pub default_gradient: GradientPreset,
    pub default_export_type: ExportType,
    /// Output pixels per logical point, kept within `MIN_SCALE..=MAX_SCALE`
    pub scale: f32,
}

impl ExportConfig {
    pub const MIN_SCALE: f32 = 1.0;
    pub const MAX_SCALE: f32 = 4.0;

    fn clamp_scale(&mut self) {
        let clamped = if self.scale.is_finite() {
            self.scale.clamp(Self::MIN_SCALE, Self::MAX_SCALE)
        } else {
            Self::default().scale
        };
        if clamped != self.scale {
            warn!("⚠️ CONFIG: export.scale {} out of range, using {}", self.scale, clamped);
            self.scale = clamped;
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            default_gradient: GradientPreset::Blue,
            default_export_type: ExportType::Stats,
            scale: 2.0,
        }
    }
}

/// Start-up UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub default_period: TimePeriod,
    /// Seed the payment store with sample revenue on launch
    pub seed_sample_data: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_period: TimePeriod::Monthly,
            seed_sample_data: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub export: ExportConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// `<config_dir>/mrr-tracker/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mrr-tracker").join("config.yaml"))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("⚙️ CONFIG: No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("⚙️ CONFIG: {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_yaml_str(&yaml_content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        info!("⚙️ CONFIG: Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_yaml::from_str(yaml)?;
        config.export.clamp_scale();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.site.name, "Stripe MRR");
        assert_eq!(config.ui.default_period, TimePeriod::Monthly);
        assert!(config.ui.seed_sample_data);
        assert_eq!(config.export.scale, 2.0);
        assert_eq!(config.export.default_gradient, GradientPreset::Blue);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = "export:\n  default_gradient: ocean\nui:\n  default_period: daily\n";
        let config = AppConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.export.default_gradient, GradientPreset::Ocean);
        assert_eq!(config.export.default_export_type, ExportType::Stats);
        assert_eq!(config.ui.default_period, TimePeriod::Daily);
        assert!(config.ui.seed_sample_data);
        assert_eq!(config.site, SiteConfig::default());
    }

    #[test]
    fn test_export_scale_is_clamped() {
        let huge = AppConfig::from_yaml_str("export:\n  scale: 1000000\n").unwrap();
        assert_eq!(huge.export.scale, ExportConfig::MAX_SCALE);

        let tiny = AppConfig::from_yaml_str("export:\n  scale: 0.1\n").unwrap();
        assert_eq!(tiny.export.scale, ExportConfig::MIN_SCALE);

        let nan = AppConfig::from_yaml_str("export:\n  scale: .nan\n").unwrap();
        assert_eq!(nan.export.scale, 2.0);

        let in_range = AppConfig::from_yaml_str("export:\n  scale: 3\n").unwrap();
        assert_eq!(in_range.export.scale, 3.0);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml_str("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&temp_dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_malformed_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "ui:\n  default_period: [weekly\n").unwrap();

        assert!(matches!(AppConfig::load_from(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "site:\n  name: \"My MRR\"\nexport:\n  output_dir: /tmp/mrr\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.site.name, "My MRR");
        assert_eq!(config.export.output_dir.as_deref(), Some("/tmp/mrr"));
    }
}
