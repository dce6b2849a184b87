//! Authentication handling for the JIRA API.
//!
//! JIRA Cloud uses Basic Auth with the account email and an API token.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::config::Credentials;

/// Authentication credentials for JIRA.
#[derive(Debug, Clone)]
pub struct Auth {
    /// The user's email address.
    email: String,
    /// The Base64-encoded authorization header value.
    auth_header: String,
}

impl Auth {
    /// Create new authentication credentials from email and token.
    ///
    /// The token is immediately encoded and the raw token is not stored.
    pub fn new(email: &str, token: &str) -> Self {
        let auth_header = build_auth_header(email, token);
        Self {
            email: email.to_string(),
            auth_header,
        }
    }

    /// Create authentication from credentials read at startup.
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new(credentials.email(), credentials.token())
    }

    /// Get the authorization header value for HTTP requests.
    ///
    /// Returns the complete "Basic ..." header value.
    pub fn header_value(&self) -> &str {
        &self.auth_header
    }

    /// Get the email address.
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Build the Basic Auth header value.
///
/// Encodes "email:token" in Base64 and prepends "Basic ".
fn build_auth_header(email: &str, token: &str) -> String {
    let credentials = format!("{}:{}", email, token);
    let encoded = BASE64.encode(credentials.as_bytes());
    format!("Basic {}", encoded)
}
