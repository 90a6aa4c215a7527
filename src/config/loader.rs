use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::SchedulerProps;
use crate::ui::scheduler::{available_views, duplicate_event_id, ViewKind};

/// Why a scheduler configuration file could not be turned into props.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read scheduler config {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in scheduler config {}: {source}", .path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Scheduler config rejected: {message}")]
    ValidationError { message: String },
}

impl SchedulerProps {
    /// Location of the scheduler config: `scheduler-state/config.toml`
    /// inside the platform config directory, or the working directory when
    /// the platform has none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("scheduler-state").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns `SchedulerProps::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(SchedulerProps::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let props: SchedulerProps =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        props.validate()?;
        Ok(props)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one of day/week/month is enabled
    /// - Event ids are unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        if available_views(self).is_empty() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "At least one view must be enabled (one of: {})",
                    ViewKind::CANONICAL.map(ViewKind::as_str).join(", ")
                ),
            });
        }

        if let Some(event_id) = duplicate_event_id(&self.events) {
            return Err(ConfigError::ValidationError {
                message: format!("Duplicate event id '{}'", event_id),
            });
        }

        Ok(())
    }
}
