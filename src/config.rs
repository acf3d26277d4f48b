//! Application configuration.
//!
//! Stored as TOML in the platform data directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::athlete::UserRole;
use crate::condition::{ConditionClassifier, DayBoundary};

/// Largest accepted day-boundary offset from UTC, in minutes.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Calendar settings
    #[serde(default)]
    pub calendar: CalendarSettings,
    /// Advice settings
    #[serde(default)]
    pub advice: AdviceSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            calendar: CalendarSettings::default(),
            advice: AdviceSettings::default(),
        }
    }
}

impl AppConfig {
    /// Classifier using the configured day boundary.
    pub fn classifier(&self) -> Result<ConditionClassifier, ConfigError> {
        Ok(ConditionClassifier::with_day_boundary(self.calendar.day_boundary()?))
    }
}

/// Calendar-related settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSettings {
    /// Minutes east of UTC at which calendar days start
    pub utc_offset_minutes: i32,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
        }
    }
}

impl CalendarSettings {
    /// Day boundary for the configured offset.
    pub fn day_boundary(&self) -> Result<DayBoundary, ConfigError> {
        if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&self.utc_offset_minutes) {
            return Err(ConfigError::ParseError(format!(
                "utc_offset_minutes must be within ±{}, got {}",
                MAX_UTC_OFFSET_MINUTES, self.utc_offset_minutes
            )));
        }
        DayBoundary::from_offset_minutes(self.utc_offset_minutes).ok_or_else(|| {
            ConfigError::ParseError(format!(
                "invalid utc_offset_minutes {}",
                self.utc_offset_minutes
            ))
        })
    }
}

/// Advice-related settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdviceSettings {
    /// Role assumed when the reader's role is not known
    pub default_role: UserRole,
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "conditioncoach", "ConditionCoach")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`, using defaults if it does not exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("No config at {}, using defaults", path.display());
        return Ok(AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    if let Err(e) = config.calendar.day_boundary() {
        tracing::warn!("Rejecting config at {}: {}", path.display(), e);
        return Err(e);
    }

    config.data_dir = get_data_dir();
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
