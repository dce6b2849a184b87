//! Configuration management for ticketpick.
//!
//! Settings come from an optional TOML file; credentials come from the
//! environment and are never written anywhere.

mod credentials;
mod settings;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

pub use credentials::Credentials;
pub use settings::Settings;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The configuration file exists but could not be read.
    #[error("failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file is not valid TOML for `Settings`.
    #[error("failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A setting has an unusable value.
    #[error("invalid configuration: {0}")]
    ValidationError(String),

    /// A required environment variable is missing or empty.
    #[error("{0} environment variable not set")]
    MissingCredential(&'static str),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Loaded application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&contents)?;
        settings.validate()?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(Self { settings })
    }

    /// Get the default configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("ticketpick").join("config.toml"))
    }
}
