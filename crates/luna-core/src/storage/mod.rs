mod config;

pub use config::{ChartConfig, Config, JournalConfig, MAX_BAR_WIDTH};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/luna[-dev]/` based on LUNA_ENV.
///
/// Set LUNA_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir().ok_or(ConfigError::NoDataDir)?.join(".config");

    let env = std::env::var("LUNA_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("luna-dev")
    } else {
        base_dir.join("luna")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
