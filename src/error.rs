//! Centralized error types for ticketpick.
//!
//! Module errors stay specific (`ApiError`, `ConfigError`, ...); `AppError`
//! aggregates them for the status line and the process exit path.

use thiserror::Error;

use crate::actions::SideEffectError;
use crate::api::ApiError;
use crate::config::ConfigError;
use crate::session::SelectionError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// API-related errors.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// A stale or out-of-range selection.
    #[error("{0}")]
    Selection(#[from] SelectionError),

    /// Browser or clipboard failures.
    #[error("{0}")]
    SideEffect(#[from] SideEffectError),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file is readable."
                        .to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
                ConfigError::MissingCredential(var) => {
                    format!("{} environment variable not set", var)
                }
            },
            AppError::Api(e) if e.is_auth_failure() => {
                "Authentication failed. Please check JIRA_EMAIL and JIRA_API_TOKEN.".to_string()
            }
            AppError::Api(e) => format!("Error fetching tickets: {}", e),
            AppError::Selection(_) => "Invalid issue selection.".to_string(),
            AppError::SideEffect(e) => e.to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
        }
    }

    /// Critical errors stop the process; everything else is reported on the
    /// status line and the session continues.
    pub fn is_critical(&self) -> bool {
        match self {
            AppError::Config(_) | AppError::Terminal(_) => true,
            AppError::Api(e) => e.is_auth_failure(),
            AppError::Selection(_) | AppError::SideEffect(_) => false,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
