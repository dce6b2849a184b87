//! Background fetch tasks for the interactive session.
//!
//! The fetch runs on a tokio task while the UI keeps rendering. Its result is
//! sent back exactly once through an unbounded channel, and the main loop
//! drains that channel with `try_recv()` before every draw. Only the main loop
//! ever touches the session, so the worker never sees UI state.

use std::future::Future;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::JiraClient;
use crate::session::FetchResult;

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum ApiMessage {
    /// Issue search result for the given JQL.
    IssuesFetched { jql: String, result: FetchResult },
}

/// Spawns background tasks that report through the channel.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ApiMessage>,
}

impl TaskSpawner {
    /// Create a new TaskSpawner with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<ApiMessage>) -> Self {
        Self { tx }
    }

    /// Spawn a task that fetches one page of issues for `jql`.
    pub fn spawn_fetch_issues(&self, client: &JiraClient, jql: String, max_results: u32) {
        let client = client.clone();
        let query = jql.clone();
        self.spawn_fetch(jql, async move { client.search_issues(&query, max_results).await });
    }

    /// Run any issue-producing future in the background and deliver its result.
    ///
    /// A send failure means the receiver is gone (the UI has exited), so the
    /// result is dropped.
    pub fn spawn_fetch<F>(&self, jql: String, fetch: F)
    where
        F: Future<Output = FetchResult> + Send + 'static,
    {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            info!(jql = %jql, "Fetching issues");
            let result = fetch.await;
            match &result {
                Ok(issues) => debug!(count = issues.len(), "Fetch task finished"),
                Err(e) => debug!(error = %e, "Fetch task failed"),
            }
            if tx.send(ApiMessage::IssuesFetched { jql, result }).is_err() {
                debug!("Receiver dropped before fetch result was delivered");
            }
        });
    }
}

/// Create a new task channel and spawner.
///
/// Returns a tuple of (receiver, spawner). The receiver should be polled
/// in the main event loop, and the spawner should be used to spawn tasks.
pub fn create_task_channel() -> (mpsc::UnboundedReceiver<ApiMessage>, TaskSpawner) {
    let (tx, rx) = mpsc::unbounded_channel();
    (rx, TaskSpawner::new(tx))
}
