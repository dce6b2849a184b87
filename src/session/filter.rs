//! Search and field filtering over the fetched issue set.
//!
//! `recompute` is a pure function of (issues, search term, filter set): it
//! keeps fetch order, never resorts, and returns positions into the full set.

use std::collections::BTreeMap;
use std::fmt;

use crate::api::types::Issue;

/// A field that can be constrained by an exact-match filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Status,
    IssueType,
    Assignee,
}

impl FilterKey {
    /// The name used on the command line and in status messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Status => "status",
            FilterKey::IssueType => "issueType",
            FilterKey::Assignee => "assignee",
        }
    }

    /// The issue's value for this field. A missing assignee reads as "Unassigned".
    pub fn value_of<'a>(&self, issue: &'a Issue) -> &'a str {
        match self {
            FilterKey::Status => issue.status(),
            FilterKey::IssueType => issue.issue_type(),
            FilterKey::Assignee => issue.assignee_name(),
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named field-equality constraints, applied in conjunction.
///
/// Empty values are kept but ignored, so clearing a field in a filter panel
/// can simply store "".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    values: BTreeMap<FilterKey, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from (key, value) pairs; later pairs win.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (FilterKey, S)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (key, value) in pairs {
            set.set(key, value);
        }
        set
    }

    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    /// Constraints that actually apply (non-empty values only).
    pub fn active(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (*k, v.as_str()))
    }

    /// True when no constraint applies.
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Whether `issue` satisfies every active constraint (exact, case-sensitive).
    pub fn matches(&self, issue: &Issue) -> bool {
        self.active().all(|(key, value)| key.value_of(issue) == value)
    }
}

impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .active()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Case-insensitive substring match on key or summary. An empty term matches all.
pub fn matches_search(issue: &Issue, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    issue.key.to_lowercase().contains(&term) || issue.summary().to_lowercase().contains(&term)
}

/// Compute the displayed subset as positions into `issues`, in fetch order.
pub fn recompute(issues: &[Issue], search: &str, filters: &FilterSet) -> Vec<usize> {
    issues
        .iter()
        .enumerate()
        .filter(|(_, issue)| matches_search(issue, search) && filters.matches(issue))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{issue, issue_with};

    fn sample() -> Vec<Issue> {
        vec![
            issue_with("ABC-1", "Fix Login", "To Do", "Bug", None),
            issue_with("ABC-2", "Add dashboard", "Done", "Story", Some("Jane")),
            issue_with("ABC-3", "Refactor login flow", "In Progress", "Task", Some("Jane")),
            issue_with("XYZ-4", "Docs", "Done", "Task", None),
        ]
    }

    #[test]
    fn test_empty_inputs_return_everything_in_order() {
        let issues = sample();
        assert_eq!(recompute(&issues, "", &FilterSet::new()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_issue_set() {
        let filters = FilterSet::from_pairs([(FilterKey::Status, "Done")]);
        assert!(recompute(&[], "anything", &filters).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_on_summary() {
        let issues = vec![issue("AB-1", "Fix Login")];
        assert_eq!(recompute(&issues, "login", &FilterSet::new()), vec![0]);
        assert!(recompute(&issues, "logOUT", &FilterSet::new()).is_empty());
    }

    #[test]
    fn test_search_matches_key() {
        let issues = sample();
        assert_eq!(recompute(&issues, "xyz", &FilterSet::new()), vec![3]);
        assert_eq!(recompute(&issues, "abc-", &FilterSet::new()), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_is_exact_and_case_sensitive() {
        let issues = sample();
        let done = FilterSet::from_pairs([(FilterKey::Status, "Done")]);
        assert_eq!(recompute(&issues, "", &done), vec![1, 3]);

        let lower = FilterSet::from_pairs([(FilterKey::Status, "done")]);
        assert!(recompute(&issues, "", &lower).is_empty());

        let partial = FilterSet::from_pairs([(FilterKey::Status, "Do")]);
        assert!(recompute(&issues, "", &partial).is_empty());
    }

    #[test]
    fn test_unassigned_matches_absent_assignee_only() {
        let issues = sample();
        let filters = FilterSet::from_pairs([(FilterKey::Assignee, "Unassigned")]);
        assert_eq!(recompute(&issues, "", &filters), vec![0, 3]);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let issues = sample();
        let one = FilterSet::from_pairs([(FilterKey::Assignee, "Jane")]);
        let two = FilterSet::from_pairs([
            (FilterKey::Assignee, "Jane"),
            (FilterKey::IssueType, "Task"),
        ]);

        let first = recompute(&issues, "", &one);
        let both = recompute(&issues, "", &two);
        assert_eq!(first, vec![1, 2]);
        assert_eq!(both, vec![2]);
        assert!(both.len() <= first.len());
    }

    #[test]
    fn test_empty_filter_values_are_ignored() {
        let issues = sample();
        let filters = FilterSet::from_pairs([(FilterKey::Status, ""), (FilterKey::IssueType, "")]);
        assert!(filters.is_empty());
        assert_eq!(recompute(&issues, "", &filters).len(), issues.len());
    }

    #[test]
    fn test_search_and_filter_combine() {
        let issues = sample();
        let filters = FilterSet::from_pairs([(FilterKey::Assignee, "Jane")]);
        assert_eq!(recompute(&issues, "LOGIN", &filters), vec![2]);
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let issues = sample();
        let filters = FilterSet::from_pairs([(FilterKey::Status, "Done")]);
        let first = recompute(&issues, "a", &filters);
        let second = recompute(&issues, "a", &filters);
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_set_display() {
        let filters = FilterSet::from_pairs([
            (FilterKey::Assignee, "Jane"),
            (FilterKey::Status, "Done"),
            (FilterKey::IssueType, ""),
        ]);
        assert_eq!(filters.to_string(), "status=Done, assignee=Jane");
    }
}
