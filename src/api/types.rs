//! JIRA API response types.
//!
//! These types model the JIRA REST API v2 search payload and the auxiliary
//! catalog endpoints (statuses, users, boards, sprints).

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Label used wherever an issue has no assignee.
pub const UNASSIGNED: &str = "Unassigned";

/// Wire format of every timestamp JIRA sends (e.g. `2024-01-15T10:00:00.000+0000`).
pub const JIRA_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Search result from a JQL query.
///
/// Returned by `GET /rest/api/2/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// The index of the first result.
    #[serde(default)]
    pub start_at: u32,
    /// Maximum results requested.
    #[serde(default)]
    pub max_results: u32,
    /// Total number of matching issues on the server.
    #[serde(default)]
    pub total: u32,
    /// The list of issues, in server order.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Envelope used by the agile API for paged collections.
#[derive(Debug, Clone, Deserialize)]
pub struct PagedValues<T> {
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
}

/// A JIRA issue.
///
/// Issues are immutable once fetched; the session only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// The issue ID.
    pub id: String,
    /// The issue key (e.g., "PROJ-123").
    pub key: String,
    /// The issue fields.
    pub fields: IssueFields,
}

impl Issue {
    /// Get the issue summary.
    pub fn summary(&self) -> &str {
        &self.fields.summary
    }

    /// Get the issue status name.
    pub fn status(&self) -> &str {
        &self.fields.status.name
    }

    /// Get the issue type name.
    pub fn issue_type(&self) -> &str {
        &self.fields.issuetype.name
    }

    /// Get the issue priority name, if set.
    pub fn priority(&self) -> Option<&str> {
        self.fields.priority.as_ref().map(|p| p.name.as_str())
    }

    /// Get the assignee display name, if assigned.
    pub fn assignee(&self) -> Option<&str> {
        self.fields.assignee.as_ref().map(|a| a.display_name.as_str())
    }

    /// Get the reporter display name, if set.
    pub fn reporter(&self) -> Option<&str> {
        self.fields.reporter.as_ref().map(|r| r.display_name.as_str())
    }

    /// Get the assignee display name, or "Unassigned" if not set.
    pub fn assignee_name(&self) -> &str {
        self.assignee().unwrap_or(UNASSIGNED)
    }

    /// Get the description as display text, if present.
    pub fn description_text(&self) -> Option<String> {
        self.fields.description.as_ref().map(describe)
    }

    /// Comments attached to the issue, in server order.
    pub fn comments(&self) -> &[Comment] {
        self.fields
            .comment
            .as_ref()
            .map(|page| page.comments.as_slice())
            .unwrap_or(&[])
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.fields.summary)
    }
}

/// Issue fields requested by the search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueFields {
    /// The issue summary/title.
    pub summary: String,
    /// The issue status.
    pub status: Status,
    /// The issue type (Bug, Story, Task, etc.).
    pub issuetype: IssueType,
    /// The issue assignee.
    #[serde(default)]
    pub assignee: Option<User>,
    /// The issue reporter.
    #[serde(default)]
    pub reporter: Option<User>,
    /// The issue priority.
    #[serde(default)]
    pub priority: Option<Priority>,
    /// The description, either plain text or an Atlassian document.
    #[serde(default)]
    pub description: Option<serde_json::Value>,
    /// When the issue was created.
    pub created: JiraTimestamp,
    /// When the issue was last updated.
    pub updated: JiraTimestamp,
    /// The first page of comments.
    #[serde(default)]
    pub comment: Option<CommentPage>,
}

/// Issue status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// The status ID.
    #[serde(default)]
    pub id: Option<String>,
    /// The status name (e.g., "To Do", "In Progress", "Done").
    pub name: String,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Issue type (Bug, Story, Task, Epic, etc.).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueType {
    /// The issue type name.
    pub name: String,
}

/// Issue priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    /// The priority name (e.g., "Highest", "High", "Medium", "Low", "Lowest").
    pub name: String,
}

/// A JIRA user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The user's account ID (absent on some server deployments).
    #[serde(default)]
    pub account_id: Option<String>,
    /// The user's display name.
    pub display_name: String,
    /// The user's email address (may be hidden).
    #[serde(default)]
    pub email_address: Option<String>,
    /// Whether the user is active.
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// The comment block embedded in an issue's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPage {
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub start_at: u32,
}

/// A comment on a JIRA issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// The user who authored the comment, if still known.
    #[serde(default)]
    pub author: Option<User>,
    /// The comment body.
    #[serde(default)]
    pub body: String,
    /// When the comment was created.
    pub created: JiraTimestamp,
    /// When the comment was last updated.
    pub updated: JiraTimestamp,
}

/// An agile board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: u64,
    pub name: String,
    /// Board kind ("scrum", "kanban", ...).
    #[serde(rename = "type", default)]
    pub board_type: Option<String>,
}

/// A sprint on an agile board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: u64,
    pub name: String,
    /// Sprint state ("active", "closed", "future").
    #[serde(default)]
    pub state: String,
}

/// A timestamp in JIRA's wire format.
///
/// Deserialization is strict: a malformed value fails the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JiraTimestamp(DateTime<FixedOffset>);

impl JiraTimestamp {
    /// Parse a timestamp such as `2024-01-15T10:00:00.000+0000`.
    pub fn parse(raw: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_str(raw, JIRA_TIMESTAMP_FORMAT).map(Self)
    }

    /// Format as `YYYY-MM-DD HH:MM` in the timestamp's own offset.
    pub fn format_datetime(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Format as `YYYY-MM-DD`.
    pub fn format_date(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl<'de> Deserialize<'de> for JiraTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .map_err(|e| de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
    }
}

impl Serialize for JiraTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string())
    }
}

/// Render a description value as text.
///
/// Plain strings are returned as is, Atlassian documents are flattened to
/// their text content and anything else falls back to compact JSON.
pub fn describe(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Object(obj)
            if obj.get("type").and_then(|t| t.as_str()) == Some("doc") =>
        {
            let mut text = String::new();
            if let Some(content) = obj.get("content") {
                extract_doc_text(content, &mut text);
            }
            text.trim().to_string()
        }
        other => other.to_string(),
    }
}

fn extract_doc_text(node: &serde_json::Value, out: &mut String) {
    match node {
        serde_json::Value::Array(items) => {
            for item in items {
                extract_doc_text(item, out);
            }
        }
        serde_json::Value::Object(obj) => {
            let node_type = obj.get("type").and_then(|t| t.as_str());
            match node_type {
                Some("text") => {
                    if let Some(text) = obj.get("text").and_then(|t| t.as_str()) {
                        out.push_str(text);
                    }
                }
                Some("hardBreak") => out.push('\n'),
                Some("mention") => {
                    if let Some(text) = obj
                        .get("attrs")
                        .and_then(|a| a.get("text"))
                        .and_then(|t| t.as_str())
                    {
                        out.push_str(text);
                    }
                }
                Some("listItem") => {
                    out.push_str("• ");
                    if let Some(content) = obj.get("content") {
                        extract_doc_text(content, out);
                    }
                }
                Some("paragraph") | Some("heading") | Some("codeBlock") => {
                    if let Some(content) = obj.get("content") {
                        extract_doc_text(content, out);
                    }
                    if !out.is_empty() && !out.ends_with('\n') {
                        out.push('\n');
                    }
                }
                _ => {
                    if let Some(content) = obj.get("content") {
                        extract_doc_text(content, out);
                    }
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::issue;

    #[test]
    fn test_parse_minimal_issue() {
        let json = r#"{
            "id": "10001",
            "key": "PROJ-123",
            "fields": {
                "summary": "Test issue",
                "status": {"name": "To Do"},
                "issuetype": {"name": "Bug"},
                "created": "2024-01-15T10:00:00.000+0000",
                "updated": "2024-01-16T14:30:00.000+0000"
            }
        }"#;

        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.key, "PROJ-123");
        assert_eq!(issue.summary(), "Test issue");
        assert_eq!(issue.status(), "To Do");
        assert_eq!(issue.issue_type(), "Bug");
        assert!(issue.priority().is_none());
        assert!(issue.assignee().is_none());
        assert_eq!(issue.assignee_name(), UNASSIGNED);
        assert!(issue.description_text().is_none());
        assert!(issue.comments().is_empty());
    }

    #[test]
    fn test_parse_full_issue() {
        let json = r#"{
            "id": "10001",
            "key": "PROJ-123",
            "fields": {
                "summary": "Test issue with full fields",
                "status": {"id": "3", "name": "In Progress"},
                "issuetype": {"name": "Story"},
                "priority": {"name": "High"},
                "assignee": {"accountId": "abc123", "displayName": "John Doe"},
                "reporter": {"displayName": "Jane Smith"},
                "description": "Plain text body",
                "created": "2024-01-15T10:00:00.000+0000",
                "updated": "2024-01-16T14:30:00.000+0700",
                "comment": {
                    "comments": [
                        {
                            "author": {"displayName": "Jane Smith"},
                            "body": "Looks good",
                            "created": "2024-01-17T09:00:00.000+0000",
                            "updated": "2024-01-17T09:00:00.000+0000"
                        }
                    ],
                    "maxResults": 1,
                    "total": 1,
                    "startAt": 0
                }
            }
        }"#;

        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.priority(), Some("High"));
        assert_eq!(issue.assignee(), Some("John Doe"));
        assert_eq!(issue.reporter(), Some("Jane Smith"));
        assert_eq!(issue.description_text().as_deref(), Some("Plain text body"));
        assert_eq!(issue.comments().len(), 1);
        assert_eq!(issue.fields.updated.format_datetime(), "2024-01-16 14:30");
    }

    #[test]
    fn test_parse_issue_with_null_fields() {
        let json = r#"{
            "id": "10001",
            "key": "PROJ-123",
            "fields": {
                "summary": "Test issue",
                "description": null,
                "status": {"name": "Open"},
                "issuetype": {"name": "Bug"},
                "priority": null,
                "assignee": null,
                "reporter": null,
                "comment": null,
                "created": "2024-01-15T10:00:00.000+0000",
                "updated": "2024-01-15T10:00:00.000+0000"
            }
        }"#;

        let issue: Issue = serde_json::from_str(json).unwrap();
        assert!(issue.priority().is_none());
        assert_eq!(issue.assignee_name(), "Unassigned");
        assert!(issue.description_text().is_none());
    }

    #[test]
    fn test_malformed_timestamp_fails_whole_payload() {
        let json = r#"{
            "issues": [
                {
                    "id": "1",
                    "key": "PROJ-1",
                    "fields": {
                        "summary": "ok",
                        "status": {"name": "Open"},
                        "issuetype": {"name": "Bug"},
                        "created": "2024-01-15T10:00:00.000+0000",
                        "updated": "2024-01-15T10:00:00.000+0000"
                    }
                },
                {
                    "id": "2",
                    "key": "PROJ-2",
                    "fields": {
                        "summary": "broken",
                        "status": {"name": "Open"},
                        "issuetype": {"name": "Bug"},
                        "created": "15/01/2024",
                        "updated": "2024-01-15T10:00:00.000+0000"
                    }
                }
            ]
        }"#;

        let err = serde_json::from_str::<SearchResult>(json).unwrap_err();
        assert!(err.to_string().contains("invalid timestamp"));
    }

    #[test]
    fn test_timestamp_without_fraction() {
        let ts = JiraTimestamp::parse("2024-03-05T08:07:06+0100").unwrap();
        assert_eq!(ts.format_datetime(), "2024-03-05 08:07");
        assert_eq!(ts.format_date(), "2024-03-05");
    }

    #[test]
    fn test_timestamp_keeps_remote_offset() {
        let ts = JiraTimestamp::parse("2024-12-31T23:59:59.999-0500").unwrap();
        assert_eq!(ts.format_datetime(), "2024-12-31 23:59");
    }

    #[test]
    fn test_parse_search_result() {
        let json = r#"{
            "startAt": 0,
            "maxResults": 100,
            "total": 0,
            "issues": []
        }"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.max_results, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_parse_paged_boards_and_sprints() {
        let boards: PagedValues<Board> = serde_json::from_str(
            r#"{"maxResults": 50, "values": [{"id": 7, "name": "Team board", "type": "scrum"}]}"#,
        )
        .unwrap();
        assert_eq!(boards.values[0].id, 7);
        assert_eq!(boards.values[0].board_type.as_deref(), Some("scrum"));

        let sprints: PagedValues<Sprint> = serde_json::from_str(
            r#"{"values": [{"id": 3, "name": "Sprint 3", "state": "active"}]}"#,
        )
        .unwrap();
        assert_eq!(sprints.values[0].state, "active");
    }

    #[test]
    fn test_describe_atlassian_document() {
        let doc = serde_json::json!({
            "type": "doc",
            "version": 1,
            "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "First."}]},
                {"type": "bulletList", "content": [
                    {"type": "listItem", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "item"}]}
                    ]}
                ]}
            ]
        });
        assert_eq!(describe(&doc), "First.\n• item");
    }

    #[test]
    fn test_describe_other_values_stringify() {
        assert_eq!(describe(&serde_json::json!(42)), "42");
        assert_eq!(describe(&serde_json::json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_issue_display() {
        let issue = issue("TEST-1", "Test");
        assert_eq!(format!("{}", issue), "TEST-1: Test");
    }
}
