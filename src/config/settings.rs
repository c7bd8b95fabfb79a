//! User settings
//!
//! Manages user preferences for planning runs: trace verbosity, log level,
//! the tolerated drift between ideal and realized spending, and defaults for
//! the command line.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::paths::SmootherPaths;
use crate::error::SmootherError;

/// Ledger export format preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values (default)
    #[default]
    Csv,
    /// JSON array of transactions
    Json,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Print the day-by-day replay trace
    #[serde(default)]
    pub verbose: bool,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Allowed relative drift of realized vs ideal daily spending
    #[serde(default = "default_ratio_tolerance")]
    pub ratio_tolerance: f64,

    /// Scenario planned when none is named
    #[serde(default = "default_scenario")]
    pub default_scenario: String,

    /// Preferred ledger export format
    #[serde(default)]
    pub export_format: ExportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_ratio_tolerance() -> f64 {
    0.05
}

fn default_scenario() -> String {
    "basic".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            verbose: false,
            log_level: default_log_level(),
            ratio_tolerance: default_ratio_tolerance(),
            default_scenario: default_scenario(),
            export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// Check whether a realized/ideal ratio is within tolerance
    pub fn within_tolerance(&self, ratio: f64) -> bool {
        (ratio - 1.0).abs() <= self.ratio_tolerance
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &SmootherPaths) -> Result<Self, SmootherError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SmootherError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SmootherError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SmootherPaths) -> Result<(), SmootherError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SmootherError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            SmootherError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
