//! Application settings configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::api::client::MAX_PAGE_SIZE;

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The JIRA instance URL.
    pub base_url: String,
    /// The query issued once at startup.
    pub jql: String,
    /// Size of the single page fetched at startup.
    pub max_results: u32,
    /// Ceiling for each request, in seconds.
    pub request_timeout_secs: u64,
    /// Prefix of generated branch names.
    pub branch_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "https://vus-edtech.atlassian.net".to_string(),
            jql: "assignee = currentUser() ORDER BY created DESC".to_string(),
            max_results: MAX_PAGE_SIZE,
            request_timeout_secs: 20,
            branch_prefix: "feature".to_string(),
        }
    }
}

impl Settings {
    /// Validate these settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "base_url '{}' must start with http:// or https://",
                self.base_url
            )));
        }

        if self.jql.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "jql cannot be empty".to_string(),
            ));
        }

        if self.max_results == 0 || self.max_results > MAX_PAGE_SIZE {
            return Err(ConfigError::ValidationError(format!(
                "max_results must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.max_results
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.branch_prefix.is_empty() || self.branch_prefix.contains(char::is_whitespace) {
            return Err(ConfigError::ValidationError(format!(
                "branch_prefix '{}' must be a non-empty word",
                self.branch_prefix
            )));
        }

        Ok(())
    }

    /// The request ceiling as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
