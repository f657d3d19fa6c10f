//! TOML-based application configuration.
//!
//! Stores display preferences:
//! - Trend chart date label format and bar width
//! - Whether a new session starts from the sample data
//!
//! Configuration is stored at `~/.config/luna/config.toml`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, CoreError, Result};
use crate::trend::{DEFAULT_BAR_WIDTH, DEFAULT_DATE_FORMAT};

/// Widest bar the text chart will draw.
pub const MAX_BAR_WIDTH: u32 = 200;

/// Trend chart configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// strftime pattern for x-axis labels
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_bar_width")]
    pub bar_width: u32,
}

/// Session journal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalConfig {
    #[serde(default = "default_true")]
    pub seed_fixtures: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/luna/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub journal: JournalConfig,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.into()
}
fn default_bar_width() -> u32 {
    DEFAULT_BAR_WIDTH as u32
}
/// Whether `pattern` renders a plain date without needing time fields.
fn formats_a_date(pattern: &str) -> bool {
    let sample = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap_or_default();
    let mut out = String::new();
    write!(out, "{}", sample.format(pattern)).is_ok()
}

fn default_true() -> bool {
    true
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            bar_width: default_bar_width(),
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            seed_fixtures: true,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(root: &mut serde_json::Value, key: &str, value: &str) -> Result<()> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown().into());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                ),
                serde_json::Value::Number(_) => serde_json::Value::Number(
                    value
                        .parse::<u64>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                        .into(),
                ),
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("not a leaf value".into()).into());
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown().into())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Reject values the chart cannot render.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a date format that cannot
    /// render a calendar date (bad syntax or time-only fields) or a bar width outside `1..=MAX_BAR_WIDTH`.
    pub fn validate(&self) -> Result<()> {
        let fmt = &self.chart.date_format;
        if fmt.is_empty() || !formats_a_date(fmt) {
            return Err(ConfigError::InvalidValue {
                key: "chart.date_format".into(),
                message: format!("'{fmt}' is not a valid strftime pattern"),
            }
            .into());
        }
        if !(1..=MAX_BAR_WIDTH).contains(&self.chart.bar_width) {
            return Err(ConfigError::InvalidValue {
                key: "chart.bar_width".into(),
                message: format!("must be between 1 and {MAX_BAR_WIDTH}"),
            }
            .into());
        }
        Ok(())
    }

    /// Load from disk, writing defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// fails validation, or if the default config cannot be written.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Update a value in memory. The result must still validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// into the existing type, or the new config is invalid.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(CoreError::from)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Update a value and persist the config.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value)?;
        self.save()
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Self::default()
        })
    }
}
