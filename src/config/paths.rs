//! Path management for the smoother
//!
//! ## Path Resolution Order
//!
//! 1. `SMOOTHER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/cashflow-smoother` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SmootherError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SMOOTHER_DATA_DIR";

/// Manages all paths used by the smoother
#[derive(Debug, Clone)]
pub struct SmootherPaths {
    base_dir: PathBuf,
}

impl SmootherPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, SmootherError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default directory for ledger exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), SmootherError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SmootherError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| SmootherError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SmootherError> {
    ProjectDirs::from("", "", "cashflow-smoother")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SmootherError::Config("Could not determine a home directory".into()))
}
