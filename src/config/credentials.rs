//! Credentials supplied through the environment.

use std::fmt;

use super::{ConfigError, Result};

/// Environment variable holding the account email.
pub const EMAIL_VAR: &str = "JIRA_EMAIL";

/// Environment variable holding the API token.
pub const TOKEN_VAR: &str = "JIRA_API_TOKEN";

/// An email + API token pair used for Basic Auth.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    token: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
        }
    }

    /// Read credentials from `JIRA_EMAIL` and `JIRA_API_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredential` naming the first variable that
    /// is unset or empty. The token is checked first.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingCredential(name))
        };

        let token = read(TOKEN_VAR)?;
        let email = read(EMAIL_VAR)?;
        Ok(Self::new(email, token))
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}
