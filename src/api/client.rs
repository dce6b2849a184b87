//! JIRA API client implementation.
//!
//! Issues one bounded request per call against the REST API v2 and the agile
//! API. Every call is capped by a fixed timeout and is never retried.

use std::time::Duration;

use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::auth::Auth;
use super::error::{ApiError, Result};
use super::types::{Board, Issue, PagedValues, SearchResult, Sprint, Status, User};
use crate::config::Credentials;

/// Fields requested for every issue in a search.
pub const ISSUE_FIELDS: &str =
    "summary,status,issuetype,assignee,reporter,priority,description,created,updated,comment";

/// Hard upper bound JIRA places on a single search page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// The JIRA API client.
#[derive(Debug, Clone)]
pub struct JiraClient {
    /// The HTTP client.
    client: Client,
    /// The base URL for the JIRA instance.
    base_url: String,
    /// Authentication credentials.
    auth: Auth,
    /// Ceiling applied to every request.
    timeout: Duration,
}

impl JiraClient {
    /// Create a new client for `base_url` using the given credentials.
    ///
    /// Does not contact the server.
    pub fn new(base_url: &str, credentials: &Credentials, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Transport)?;

        let auth = Auth::from_credentials(credentials);
        debug!(email = %auth.email(), timeout_secs = timeout.as_secs(), "Building JIRA client");
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
            auth,
            timeout,
        })
    }

    /// Search for issues using JQL.
    ///
    /// Returns at most `max_results` issues (clamped to 100) in server order.
    /// There is no pagination beyond this single page.
    #[instrument(skip(self), fields(jql = %jql))]
    pub async fn search_issues(&self, jql: &str, max_results: u32) -> Result<Vec<Issue>> {
        let url = search_url(&self.base_url, jql, max_results);
        let result: SearchResult = self.get(&url).await?;
        info!(
            count = result.issues.len(),
            total = result.total,
            "Fetched issues"
        );
        Ok(result.issues)
    }

    /// Fetch the status catalog.
    ///
    /// Calls `GET /rest/api/2/status`.
    #[instrument(skip(self))]
    pub async fn get_statuses(&self) -> Result<Vec<Status>> {
        let url = format!("{}/rest/api/2/status", self.base_url);
        self.get(&url).await
    }

    /// Search users. JIRA Cloud requires a query; `.` matches everyone.
    #[instrument(skip(self))]
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>> {
        let url = format!(
            "{}/rest/api/2/user/search?query={}",
            self.base_url,
            urlencoding::encode(query)
        );
        self.get(&url).await
    }

    /// List agile boards.
    #[instrument(skip(self))]
    pub async fn get_boards(&self) -> Result<Vec<Board>> {
        let url = format!("{}/rest/agile/1.0/board", self.base_url);
        let page: PagedValues<Board> = self.get(&url).await?;
        Ok(page.values)
    }

    /// List the sprints of one board.
    #[instrument(skip(self))]
    pub async fn get_sprints(&self, board_id: u64) -> Result<Vec<Sprint>> {
        let url = format!("{}/rest/agile/1.0/board/{}/sprint", self.base_url, board_id);
        let page: PagedValues<Sprint> = self.get(&url).await?;
        Ok(page.values)
    }

    /// Perform a single authenticated GET and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = %url, "GET");
        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, self.auth.header_value())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        self.handle_response(response).await
    }

    /// Check the status code, then read and parse the body.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if status.is_success() {
            parse_body(&body)
        } else {
            warn!(status = %status, "JIRA returned an error status");
            debug!("Error response body: {}", body);
            Err(ApiError::from_status(status, &body))
        }
    }

    fn classify(&self, err: reqwest::Error) -> ApiError {
        let err = ApiError::from_reqwest(err, self.timeout);
        warn!(error = %err, "Request failed");
        err
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Build the issue search URL.
pub fn search_url(base_url: &str, jql: &str, max_results: u32) -> String {
    format!(
        "{}/rest/api/2/search?jql={}&maxResults={}&fields={}&expand=renderedFields",
        base_url.trim_end_matches('/'),
        urlencoding::encode(jql),
        max_results.clamp(1, MAX_PAGE_SIZE),
        urlencoding::encode(ISSUE_FIELDS),
    )
}

/// The web URL of an issue on a JIRA instance.
pub fn browse_url(base_url: &str, key: &str) -> String {
    format!("{}/browse/{}", base_url.trim_end_matches('/'), key)
}

/// Decode a response body, reporting failures as `ApiError::Parse`.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Normalize the base URL by removing trailing slashes.
fn normalize_base_url(url: &str) -> String {
    let url = url.trim_end_matches('/');

    if !url.starts_with("https://") && !url.contains("localhost") {
        warn!("URL does not use HTTPS: {}. This is insecure for production use.", url);
    }

    url.to_string()
}
