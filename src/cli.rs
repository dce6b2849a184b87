//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::session::{FilterKey, FilterSet};

#[derive(Debug, Parser)]
#[command(name = "ticketpick")]
#[command(about = "Browse, filter and act on JIRA issues from the terminal")]
#[command(version)]
#[command(after_help = "Credentials are read from JIRA_EMAIL and JIRA_API_TOKEN.")]
pub struct Cli {
    /// Path to a config file (default: <config dir>/ticketpick/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JIRA instance URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Query used for the startup fetch
    #[arg(long)]
    pub jql: Option<String>,

    /// Page size of the startup fetch (1-100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub max_results: Option<u32>,

    /// Only show issues with this exact status name
    #[arg(long)]
    pub status: Option<String>,

    /// Only show issues of this exact type name
    #[arg(long)]
    pub issue_type: Option<String>,

    /// Only show issues with this assignee ("Unassigned" for none)
    #[arg(long)]
    pub assignee: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// List the instance's workflow statuses
    Statuses,

    /// Search users by name or email
    Users {
        /// Search text ("." matches everyone)
        #[arg(default_value = ".")]
        query: String,
    },

    /// List agile boards
    Boards,

    /// List the sprints of a board
    Sprints {
        /// Board ID as shown by `boards`
        board_id: u64,
    },
}

impl Cli {
    /// Overlay command-line values onto file settings.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(url) = &self.base_url {
            settings.base_url = url.clone();
        }
        if let Some(jql) = &self.jql {
            settings.jql = jql.clone();
        }
        if let Some(max) = self.max_results {
            settings.max_results = max;
        }
    }

    /// Initial filter set from `--status`, `--issue-type` and `--assignee`.
    pub fn filters(&self) -> FilterSet {
        let pairs = [
            (FilterKey::Status, &self.status),
            (FilterKey::IssueType, &self.issue_type),
            (FilterKey::Assignee, &self.assignee),
        ];
        FilterSet::from_pairs(
            pairs
                .into_iter()
                .filter_map(|(key, value)| value.clone().map(|v| (key, v))),
        )
    }
}
