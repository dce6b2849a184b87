//! Detail projection of a single issue.
//!
//! `IssueDetail::project` is total: every optional field has a defined
//! fallback, so it never fails.

use crate::api::types::{Issue, UNASSIGNED};

pub const NO_DESCRIPTION: &str = "No description.";
pub const NO_COMMENTS: &str = "No comments.";
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Workflow category of a status name. Unknown names map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    ToDo,
    InProgress,
    Done,
    SelectedForDevelopment,
    InTesting,
    ReadyForTest,
    Other,
}

impl StatusCategory {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "to do" => StatusCategory::ToDo,
            "in progress" => StatusCategory::InProgress,
            "done" => StatusCategory::Done,
            "selected for development" => StatusCategory::SelectedForDevelopment,
            "in testing" => StatusCategory::InTesting,
            "ready for test" => StatusCategory::ReadyForTest,
            _ => StatusCategory::Other,
        }
    }
}

/// Category of an issue type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueTypeCategory {
    Bug,
    Story,
    Task,
    Epic,
    Other,
}

impl IssueTypeCategory {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "bug" => IssueTypeCategory::Bug,
            "story" => IssueTypeCategory::Story,
            "task" => IssueTypeCategory::Task,
            "epic" => IssueTypeCategory::Epic,
            _ => IssueTypeCategory::Other,
        }
    }
}

/// Category of a priority name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityCategory {
    Highest,
    High,
    Medium,
    Low,
    Lowest,
    Other,
}

impl PriorityCategory {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "highest" => PriorityCategory::Highest,
            "high" => PriorityCategory::High,
            "medium" => PriorityCategory::Medium,
            "low" => PriorityCategory::Low,
            "lowest" => PriorityCategory::Lowest,
            _ => PriorityCategory::Other,
        }
    }
}

/// A named value paired with its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorized<C> {
    pub name: String,
    pub category: C,
}

/// Human-readable expansion of one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDetail {
    pub key: String,
    pub summary: String,
    pub status: Categorized<StatusCategory>,
    pub issue_type: Categorized<IssueTypeCategory>,
    pub priority: Option<Categorized<PriorityCategory>>,
    /// Assignee display name or "Unassigned".
    pub assignee: String,
    pub reporter: Option<String>,
    /// `YYYY-MM-DD HH:MM`.
    pub created: String,
    /// `YYYY-MM-DD HH:MM`.
    pub updated: String,
    /// Stringified description or "No description.".
    pub description: String,
    /// One `- <author> (<date>): <body>` line per comment, in order.
    pub comments: Vec<String>,
}

impl IssueDetail {
    pub fn project(issue: &Issue) -> Self {
        let status = issue.status().to_string();
        let issue_type = issue.issue_type().to_string();

        Self {
            key: issue.key.clone(),
            summary: issue.summary().to_string(),
            status: Categorized {
                category: StatusCategory::from_name(&status),
                name: status,
            },
            issue_type: Categorized {
                category: IssueTypeCategory::from_name(&issue_type),
                name: issue_type,
            },
            priority: issue.priority().map(|name| Categorized {
                name: name.to_string(),
                category: PriorityCategory::from_name(name),
            }),
            assignee: issue.assignee().unwrap_or(UNASSIGNED).to_string(),
            reporter: issue.reporter().map(str::to_string),
            created: issue.fields.created.format_datetime(),
            updated: issue.fields.updated.format_datetime(),
            description: issue
                .description_text()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            comments: issue
                .comments()
                .iter()
                .map(|c| {
                    format!(
                        "- {} ({}): {}",
                        c.author
                            .as_ref()
                            .map(|a| a.display_name.as_str())
                            .unwrap_or(UNKNOWN_AUTHOR),
                        c.created.format_date(),
                        c.body
                    )
                })
                .collect(),
        }
    }

    /// Comments as a block of text, or "No comments.".
    pub fn comments_text(&self) -> String {
        if self.comments.is_empty() {
            NO_COMMENTS.to_string()
        } else {
            self.comments.join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Priority;
    use crate::test_support::{comment, issue, issue_with, user, with_comments};

    #[test]
    fn test_projection_with_all_optionals_absent() {
        let detail = IssueDetail::project(&issue("ABC-1", "Fix Login"));
        assert_eq!(detail.key, "ABC-1");
        assert_eq!(detail.assignee, "Unassigned");
        assert_eq!(detail.description, NO_DESCRIPTION);
        assert!(detail.comments.is_empty());
        assert_eq!(detail.comments_text(), NO_COMMENTS);
        assert!(detail.priority.is_none());
        assert!(detail.reporter.is_none());
        assert_eq!(detail.created, "2024-01-15 10:00");
        assert_eq!(detail.updated, "2024-01-16 14:30");
    }

    #[test]
    fn test_projection_with_all_optionals_present() {
        let mut issue = issue_with("ABC-2", "Add dashboard", "Done", "Story", Some("Jane"));
        issue.fields.reporter = Some(user("Sam"));
        issue.fields.priority = Some(Priority {
            name: "High".to_string(),
        });
        issue.fields.description = Some(serde_json::json!("Build the thing"));
        let issue = with_comments(
            issue,
            vec![
                comment(Some("Sam"), "Looks good", "2024-02-01T09:15:00.000+0000"),
                comment(None, "ship it", "2024-02-02T11:00:00.000+0000"),
            ],
        );

        let detail = IssueDetail::project(&issue);
        assert_eq!(detail.assignee, "Jane");
        assert_eq!(detail.reporter.as_deref(), Some("Sam"));
        assert_eq!(detail.status.category, StatusCategory::Done);
        assert_eq!(detail.issue_type.category, IssueTypeCategory::Story);
        assert_eq!(
            detail.priority.as_ref().map(|p| p.category),
            Some(PriorityCategory::High)
        );
        assert_eq!(detail.description, "Build the thing");
        assert_eq!(
            detail.comments,
            vec![
                "- Sam (2024-02-01): Looks good".to_string(),
                "- Unknown (2024-02-02): ship it".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_comment_page_reads_as_no_comments() {
        let issue = with_comments(issue("ABC-3", "x"), vec![]);
        assert_eq!(IssueDetail::project(&issue).comments_text(), NO_COMMENTS);
    }

    #[test]
    fn test_structured_description_is_stringified() {
        let mut issue = issue("ABC-4", "x");
        issue.fields.description = Some(serde_json::json!({"unexpected": true}));
        assert_eq!(
            IssueDetail::project(&issue).description,
            r#"{"unexpected":true}"#
        );
    }

    #[test]
    fn test_status_categories() {
        assert_eq!(StatusCategory::from_name("To Do"), StatusCategory::ToDo);
        assert_eq!(StatusCategory::from_name("IN PROGRESS"), StatusCategory::InProgress);
        assert_eq!(
            StatusCategory::from_name("Selected for Development"),
            StatusCategory::SelectedForDevelopment
        );
        assert_eq!(StatusCategory::from_name("Ready for Test"), StatusCategory::ReadyForTest);
        assert_eq!(StatusCategory::from_name("Blocked"), StatusCategory::Other);
    }

    #[test]
    fn test_type_and_priority_fallbacks() {
        assert_eq!(IssueTypeCategory::from_name("Epic"), IssueTypeCategory::Epic);
        assert_eq!(IssueTypeCategory::from_name("Sub-task"), IssueTypeCategory::Other);
        assert_eq!(PriorityCategory::from_name("lowest"), PriorityCategory::Lowest);
        assert_eq!(PriorityCategory::from_name("P1"), PriorityCategory::Other);
    }
}
