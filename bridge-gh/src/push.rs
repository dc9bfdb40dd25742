//! # Push-Event Filtering
//!
//! A push event can carry any number of commits, most of which reference no
//! Jira issue at all. Before a push is handed to the sync pipeline the
//! commits without issue keys are filtered out; an empty result means there
//! is nothing to enqueue.

use bridge_core::parse_issue_keys;
use serde::{Deserialize, Serialize};

/// The repository a push happened in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushRepository {
  pub id: u64,
  pub name: String,
}

/// One commit in a push event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushCommit {
  pub id: String,
  pub message: String,
}

/// The app installation a push event was delivered for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushInstallation {
  pub id: u64,
}

/// The subset of a push webhook the sync pipeline consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushEvent {
  pub repository: PushRepository,
  pub commits: Vec<PushCommit>,
  pub installation: PushInstallation,
}

/// Keep only the commits that reference at least one issue key.
///
/// Returns `None` when no commit survives, so callers skip the enqueue
/// entirely instead of processing an empty payload.
pub fn filter_push_event(event: PushEvent) -> Option<PushEvent> {
  let PushEvent {
    repository,
    commits,
    installation,
  } = event;

  let commits: Vec<PushCommit> = commits
    .into_iter()
    .filter(|commit| parse_issue_keys(&commit.message).is_some())
    .collect();

  if commits.is_empty() {
    return None;
  }

  Some(PushEvent {
    repository,
    commits,
    installation,
  })
}
