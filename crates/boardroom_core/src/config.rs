//! Builder configuration loading.
//!
//! # Responsibility
//! - Describe startup settings for one builder application context.
//! - Load settings from a JSON file and apply environment overrides.
//!
//! # Invariants
//! - Missing fields fall back to defaults; unknown fields are rejected.
//! - Loading never panics; failures are typed `ConfigError`s.

use crate::logging::{default_log_level, normalize_level};
use crate::model::mode::ViewMode;
use crate::model::palette::ComponentPalette;
use crate::model::report::ReportWidget;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Env var naming a JSON config file.
pub const CONFIG_PATH_ENV: &str = "BOARDROOM_CONFIG";
/// Env var overriding `log_level`.
pub const LOG_LEVEL_ENV: &str = "BOARDROOM_LOG_LEVEL";
/// Env var overriding `log_dir`.
pub const LOG_DIR_ENV: &str = "BOARDROOM_LOG_DIR";

/// Errors from configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// Config file is not valid JSON for this schema, including palette
    /// entries rejected by `ComponentPalette`.
    Parse(serde_json::Error),
    /// Log level is not one of trace|debug|info|warn|error.
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidLogLevel(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Startup settings for one builder application context.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardroomConfig {
    /// Palette entries listed in the sidebar.
    pub components: ComponentPalette,
    /// Builder mode at startup.
    pub initial_mode: ViewMode,
    /// Report widgets for the present/edit report view.
    pub report: Vec<ReportWidget>,
    /// One of trace|debug|info|warn|error.
    pub log_level: String,
    /// Absolute log directory; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for BoardroomConfig {
    fn default() -> Self {
        Self {
            components: ComponentPalette::default(),
            initial_mode: ViewMode::Edit,
            report: Vec::new(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl BoardroomConfig {
    /// Parses config from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.log_level = normalize_level(&config.log_level)
            .map_err(ConfigError::InvalidLogLevel)?
            .to_string();
        Ok(config)
    }

    /// Loads config from a JSON file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Loads config from `BOARDROOM_CONFIG` (or defaults) and applies
    /// `BOARDROOM_LOG_LEVEL` / `BOARDROOM_LOG_DIR` overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match non_blank_env(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from_path(path)?,
            None => Self::default(),
        };
        config.apply_overrides(non_blank_env(LOG_LEVEL_ENV), non_blank_env(LOG_DIR_ENV))?;
        Ok(config)
    }

    /// Applies log overrides; blank values are ignored by callers.
    pub fn apply_overrides(
        &mut self,
        log_level: Option<String>,
        log_dir: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(level) = log_level {
            self.log_level = normalize_level(&level)
                .map_err(ConfigError::InvalidLogLevel)?
                .to_string();
        }
        if let Some(dir) = log_dir {
            self.log_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
