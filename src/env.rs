//! Environment-driven configuration.

use std::path::PathBuf;

use thiserror::Error;

pub const DATA_DIR_VAR: &str = "DASHBOARD_DATA_DIR";
pub const FONT_VAR: &str = "DASHBOARD_FONT";
pub const OWNER_VAR: &str = "DASHBOARD_OWNER";

const APP_DIR_NAME: &str = "dhruv-dashboard";
const DEFAULT_OWNER: &str = "Dhruv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a data directory; set DASHBOARD_DATA_DIR")]
    NoDataDir,
}

/// Resolve the storage directory: DASHBOARD_DATA_DIR > <platform data dir>/dhruv-dashboard
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = non_empty_var(DATA_DIR_VAR) {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(ConfigError::NoDataDir)
}

/// Optional font file to install in place of egui's defaults.
pub fn font_path() -> Option<PathBuf> {
    non_empty_var(FONT_VAR).map(PathBuf::from)
}

/// Name shown in the sidebar and greeting.
pub fn owner_name() -> String {
    non_empty_var(OWNER_VAR).unwrap_or_else(|| DEFAULT_OWNER.to_string())
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
