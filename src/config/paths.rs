//! Path management for the planner
//!
//! Provides XDG-compliant path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `PLANNER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/planner-cli` or `~/.config/planner-cli`
//! 3. Windows: `%APPDATA%\planner-cli`

use std::path::PathBuf;

use crate::error::{PlannerError, PlannerResult};

/// Manages all paths used by the planner
#[derive(Debug, Clone)]
pub struct PlannerPaths {
    /// Base directory for all planner data
    base_dir: PathBuf,
}

impl PlannerPaths {
    /// Create a new PlannerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> PlannerResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var("PLANNER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PlannerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/planner-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the account store file
    pub fn store_file(&self) -> PathBuf {
        self.base_dir.join("users.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> PlannerResult<()> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            PlannerError::Persistence(format!("failed to create data directory: {}", e))
        })?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> PlannerResult<PathBuf> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("planner-cli"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| PlannerError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("planner-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> PlannerResult<PathBuf> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PlannerError::Config("could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("planner-cli"))
}
