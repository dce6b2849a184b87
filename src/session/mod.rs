//! Issue session state: the fetched set, the displayed subset and selection.
//!
//! The session is owned by the render loop and is its only mutator. The
//! background fetch hands its result over once through `apply_fetch`.

pub mod filter;
pub mod projection;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{ApiError, Issue};
pub use filter::{FilterKey, FilterSet};
pub use projection::IssueDetail;

/// Outcome of the single background fetch.
pub type FetchResult = Result<Vec<Issue>, ApiError>;

/// Lifecycle of the session's one fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// The fetch task is in flight.
    Fetching,
    /// The issue set is installed (possibly empty).
    Populated,
    /// The fetch failed; the set stays empty for the rest of the session.
    FetchFailed(String),
}

/// What happened when a fetch result was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Issues installed; the first one is selected.
    Loaded(usize),
    /// The query matched nothing.
    Empty,
    /// The fetch failed with this message.
    Failed(String),
    /// No fetch was outstanding; the result was dropped.
    Ignored,
}

/// Errors from selection against the displayed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid issue selection: {index} is outside 0..{len}")]
    InvalidSelection { index: isize, len: usize },
}

/// In-memory session over one fetched issue set.
#[derive(Debug, Default)]
pub struct Session {
    state: FetchState,
    /// Full set in fetch order; installed at most once.
    issues: Vec<Issue>,
    /// Positions into `issues` currently shown.
    displayed: Vec<usize>,
    search: String,
    filters: FilterSet,
    /// Position in `displayed`.
    selected: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that starts with the given filters applied.
    pub fn with_filters(filters: FilterSet) -> Self {
        let mut session = Self::new();
        session.set_filters(filters);
        session
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Mark the fetch as started.
    ///
    /// Returns `false` (and changes nothing) unless the session is `Idle`, so
    /// at most one fetch is ever outstanding.
    pub fn begin_fetch(&mut self) -> bool {
        if self.state != FetchState::Idle {
            debug!(state = ?self.state, "Fetch already requested, ignoring");
            return false;
        }
        self.state = FetchState::Fetching;
        true
    }

    /// Install the result of the outstanding fetch.
    pub fn apply_fetch(&mut self, result: FetchResult) -> FetchOutcome {
        if self.state != FetchState::Fetching {
            warn!(state = ?self.state, "Fetch result arrived with no fetch outstanding");
            return FetchOutcome::Ignored;
        }

        match result {
            Ok(issues) => {
                info!(count = issues.len(), "Installing fetched issues");
                self.issues = issues;
                self.state = FetchState::Populated;
                self.recompute();
                if self.issues.is_empty() {
                    FetchOutcome::Empty
                } else {
                    FetchOutcome::Loaded(self.issues.len())
                }
            }
            Err(err) => {
                let message = err.to_string();
                warn!(error = %message, "Fetch failed");
                self.state = FetchState::FetchFailed(message.clone());
                FetchOutcome::Failed(message)
            }
        }
    }

    /// Replace the search term and recompute.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.recompute();
    }

    /// Replace the whole filter set and recompute.
    pub fn set_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
        self.recompute();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Recompute the displayed set. Any previous selection is discarded and the
    /// first displayed issue, if any, becomes selected.
    fn recompute(&mut self) {
        self.displayed = filter::recompute(&self.issues, &self.search, &self.filters);
        self.selected = if self.displayed.is_empty() { None } else { Some(0) };
        debug!(
            search = %self.search,
            filters = %self.filters,
            shown = self.displayed.len(),
            "Recomputed displayed issues"
        );
    }

    /// The full fetched set.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// The displayed issues in order.
    pub fn displayed(&self) -> impl Iterator<Item = &Issue> + '_ {
        self.displayed.iter().map(move |&i| &self.issues[i])
    }

    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Validate `index` against the displayed set and return that issue.
    pub fn issue_at(&self, index: isize) -> Result<&Issue, SelectionError> {
        let len = self.displayed.len();
        usize::try_from(index)
            .ok()
            .and_then(|i| self.displayed.get(i))
            .map(|&pos| &self.issues[pos])
            .ok_or(SelectionError::InvalidSelection { index, len })
    }

    /// Move the selection to `index`. On error the selection is unchanged.
    pub fn select(&mut self, index: isize) -> Result<&Issue, SelectionError> {
        self.issue_at(index)?;
        // issue_at succeeded, so the index is non-negative and in range.
        self.selected = Some(index as usize);
        self.issue_at(index)
    }

    /// The currently selected issue, re-validated against the displayed set.
    pub fn selected_issue(&self) -> Result<&Issue, SelectionError> {
        match self.selected {
            Some(i) => self.issue_at(i as isize),
            None => Err(SelectionError::InvalidSelection {
                index: -1,
                len: self.displayed.len(),
            }),
        }
    }

    /// Detail projection of the selected issue.
    pub fn selected_detail(&self) -> Result<IssueDetail, SelectionError> {
        self.selected_issue().map(IssueDetail::project)
    }
}
