//! Shared fixtures for unit tests.

use crate::api::types::{
    Comment, CommentPage, Issue, IssueFields, IssueType, JiraTimestamp, Status, User,
};

pub fn timestamp(raw: &str) -> JiraTimestamp {
    JiraTimestamp::parse(raw).expect("fixture timestamp must parse")
}

pub fn user(name: &str) -> User {
    User {
        account_id: Some(format!("id-{}", name.to_lowercase().replace(' ', "-"))),
        display_name: name.to_string(),
        email_address: None,
        active: true,
    }
}

/// A "To Do" task with no optional fields set.
pub fn issue(key: &str, summary: &str) -> Issue {
    issue_with(key, summary, "To Do", "Task", None)
}

pub fn issue_with(
    key: &str,
    summary: &str,
    status: &str,
    issue_type: &str,
    assignee: Option<&str>,
) -> Issue {
    Issue {
        id: format!("id-{}", key),
        key: key.to_string(),
        fields: IssueFields {
            summary: summary.to_string(),
            status: Status {
                id: None,
                name: status.to_string(),
            },
            issuetype: IssueType {
                name: issue_type.to_string(),
            },
            assignee: assignee.map(user),
            reporter: None,
            priority: None,
            description: None,
            created: timestamp("2024-01-15T10:00:00.000+0000"),
            updated: timestamp("2024-01-16T14:30:00.000+0000"),
            comment: None,
        },
    }
}

pub fn comment(author: Option<&str>, body: &str, created: &str) -> Comment {
    Comment {
        author: author.map(user),
        body: body.to_string(),
        created: timestamp(created),
        updated: timestamp(created),
    }
}

pub fn with_comments(mut issue: Issue, comments: Vec<Comment>) -> Issue {
    let total = comments.len() as u32;
    issue.fields.comment = Some(CommentPage {
        comments,
        max_results: total,
        total,
        start_at: 0,
    });
    issue
}
