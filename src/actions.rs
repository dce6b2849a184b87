//! Side actions on the selected issue: open it in a browser or copy a
//! generated branch name to the clipboard.

use thiserror::Error;
use tracing::{debug, info};

use crate::api::Issue;

/// Longest sanitized summary kept in a branch name, in characters.
pub const MAX_BRANCH_SUMMARY_CHARS: usize = 60;

/// Build `<prefix>/<key>-<sanitized summary>`.
///
/// The summary is lower-cased, spaces become hyphens, `&` and `@` become
/// `and`/`at`, and a fixed punctuation set is removed. The sanitized part is
/// capped at [`MAX_BRANCH_SUMMARY_CHARS`] characters without trailing hyphens.
pub fn generate_branch_name(issue: &Issue, prefix: &str) -> String {
    let mut sanitized = String::with_capacity(issue.summary().len());
    for c in issue.summary().to_lowercase().chars() {
        match c {
            ' ' => sanitized.push('-'),
            '&' => sanitized.push_str("and"),
            '@' => sanitized.push_str("at"),
            '!' | '"' | '\'' | '?' | ',' | '.' | ':' | ';' | '(' | ')' | '[' | ']' | '{'
            | '}' => {}
            other => sanitized.push(other),
        }
    }

    let truncated: String = sanitized.chars().take(MAX_BRANCH_SUMMARY_CHARS).collect();
    let summary = truncated.trim_end_matches('-');

    if summary.is_empty() {
        format!("{}/{}", prefix, issue.key)
    } else {
        format!("{}/{}-{}", prefix, issue.key, summary)
    }
}

/// Entries of the action menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueAction {
    OpenInBrowser,
    GenerateBranchName,
    Cancel,
}

impl IssueAction {
    pub const ALL: [IssueAction; 3] = [
        IssueAction::OpenInBrowser,
        IssueAction::GenerateBranchName,
        IssueAction::Cancel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IssueAction::OpenInBrowser => "Open in Browser",
            IssueAction::GenerateBranchName => "Generate Branch Name",
            IssueAction::Cancel => "Cancel",
        }
    }
}

/// Errors from the external side-effect collaborators.
#[derive(Debug, Error)]
pub enum SideEffectError {
    #[error("Error opening browser: {0}")]
    Browser(#[source] std::io::Error),

    #[error("Error copying to clipboard: {0}")]
    Clipboard(#[source] arboard::Error),
}

/// Single-call external effects. Failures are reported, never retried.
pub trait SideEffects: Send {
    fn open_url(&mut self, url: &str) -> Result<(), SideEffectError>;
    fn copy_text(&mut self, text: &str) -> Result<(), SideEffectError>;
}

/// Default browser and system clipboard.
///
/// The clipboard handle is created lazily so a headless session only fails
/// when a copy is actually requested.
#[derive(Default)]
pub struct SystemSideEffects {
    clipboard: Option<arboard::Clipboard>,
}

impl SystemSideEffects {
    pub fn new() -> Self {
        Self::default()
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard, SideEffectError> {
        if self.clipboard.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(SideEffectError::Clipboard)?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or(SideEffectError::Clipboard(arboard::Error::ClipboardNotSupported))
    }
}

impl SideEffects for SystemSideEffects {
    fn open_url(&mut self, url: &str) -> Result<(), SideEffectError> {
        info!(url = %url, "Opening browser");
        open::that(url).map_err(SideEffectError::Browser)
    }

    fn copy_text(&mut self, text: &str) -> Result<(), SideEffectError> {
        debug!(len = text.len(), "Writing to clipboard");
        self.clipboard()?
            .set_text(text.to_string())
            .map_err(SideEffectError::Clipboard)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{issue, issue_with};

    #[test]
    fn test_branch_name_strips_punctuation() {
        let issue = issue_with("ABC-2", "Fix login bug!", "Done", "Story", Some("Jane"));
        assert_eq!(generate_branch_name(&issue, "feature"), "feature/ABC-2-fix-login-bug");
    }

    #[test]
    fn test_branch_name_replaces_ampersand_and_at() {
        let issue = issue("ABC-3", "Cache & retry @ edge");
        assert_eq!(
            generate_branch_name(&issue, "feature"),
            "feature/ABC-3-cache-and-retry-at-edge"
        );
    }

    #[test]
    fn test_branch_name_removes_brackets_and_quotes() {
        let issue = issue("ABC-4", "Handle \"null\" values (API) [v2]: {fast}; ok?");
        assert_eq!(
            generate_branch_name(&issue, "feature"),
            "feature/ABC-4-handle-null-values-api-v2-fast-ok"
        );
    }

    #[test]
    fn test_branch_name_is_deterministic() {
        let issue = issue("ABC-5", "Same Input");
        assert_eq!(
            generate_branch_name(&issue, "feature"),
            generate_branch_name(&issue, "feature")
        );
    }

    #[test]
    fn test_long_summary_is_truncated() {
        let summary = "word ".repeat(30);
        let name = generate_branch_name(&issue("ABC-6", &summary), "feature");
        let sanitized = name.trim_start_matches("feature/ABC-6-");
        assert!(sanitized.chars().count() <= MAX_BRANCH_SUMMARY_CHARS);
        assert!(!sanitized.ends_with('-'));
        assert!(sanitized.starts_with("word-word"));
    }

    #[test]
    fn test_short_summary_is_not_padded_or_cut() {
        let name = generate_branch_name(&issue("ABC-7", "ok"), "feature");
        assert_eq!(name, "feature/ABC-7-ok");
    }

    #[test]
    fn test_multibyte_summary_truncates_on_char_boundary() {
        let summary = "é".repeat(100);
        let name = generate_branch_name(&issue("ABC-8", &summary), "feature");
        assert_eq!(name, format!("feature/ABC-8-{}", "é".repeat(60)));
    }

    #[test]
    fn test_punctuation_only_summary_keeps_key() {
        let name = generate_branch_name(&issue("ABC-9", "?!"), "bugfix");
        assert_eq!(name, "bugfix/ABC-9");
    }

    #[test]
    fn test_action_labels_in_menu_order() {
        let labels: Vec<&str> = IssueAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Open in Browser", "Generate Branch Name", "Cancel"]);
    }

    #[test]
    fn test_side_effect_error_messages() {
        let err = SideEffectError::Browser(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "xdg-open missing",
        ));
        assert_eq!(err.to_string(), "Error opening browser: xdg-open missing");
    }

    #[test]
    fn test_recorder_captures_calls() {
        let mut effects = recording::RecordingSideEffects::default();
        effects.open_url("https://example.test/browse/ABC-1").unwrap();
        effects.copy_text("feature/ABC-1-x").unwrap();
        let recorded = effects.snapshot();
        assert_eq!(recorded.opened, vec!["https://example.test/browse/ABC-1"]);
        assert_eq!(recorded.copied, vec!["feature/ABC-1-x"]);

        let mut failing = recording::RecordingSideEffects::failing();
        assert!(failing.copy_text("x").is_err());
    }
}
