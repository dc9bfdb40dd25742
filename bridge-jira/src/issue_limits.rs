//! # Issue-Key Limit Enforcement
//!
//! Jira's bulk devinfo endpoint rejects any commit or branch referencing
//! more than [`ISSUE_KEY_API_LIMIT`] issue keys. Before every repository
//! sync the payload is deduplicated and, on overflow, truncated. A branch's
//! nested last-commit is walked independently of the branch's own key list,
//! matching the behavior Jira integrations have come to rely on.

use std::collections::HashSet;

use crate::consts::ISSUE_KEY_API_LIMIT;
use crate::models::{Branch, Commit, RepositoryUpdate};

/// Replace every issue-key list in the payload with its first-occurrence
/// deduplication. Idempotent.
pub(crate) fn dedup_issue_keys(repository: &mut RepositoryUpdate) {
  update_repository_issue_keys(repository, dedup);
}

/// Keep only the first [`ISSUE_KEY_API_LIMIT`] keys of every issue-key list
/// in the payload.
pub(crate) fn truncate_issue_keys(repository: &mut RepositoryUpdate) {
  update_repository_issue_keys(repository, truncate);
}

/// Whether every commit in the collection is within the key limit. An empty
/// collection is never a violation.
pub(crate) fn commits_within_issue_key_limit(commits: &[Commit]) -> bool {
  commits.iter().all(|c| c.issue_keys.len() <= ISSUE_KEY_API_LIMIT)
}

/// Whether every branch, including each branch's nested last-commit, is
/// within the key limit.
pub(crate) fn branches_within_issue_key_limit(branches: &[Branch]) -> bool {
  branches.iter().all(|b| {
    b.issue_keys.len() <= ISSUE_KEY_API_LIMIT
      && b
        .last_commit
        .as_ref()
        .is_none_or(|c| c.issue_keys.len() <= ISSUE_KEY_API_LIMIT)
  })
}

/// Run a mutating function over every issue-key list in the payload:
/// commits, branches, and each branch's last-commit.
fn update_repository_issue_keys(repository: &mut RepositoryUpdate, apply: fn(&mut Vec<String>)) {
  for commit in &mut repository.commits {
    apply(&mut commit.issue_keys);
  }
  for branch in &mut repository.branches {
    apply(&mut branch.issue_keys);
    if let Some(last_commit) = &mut branch.last_commit {
      apply(&mut last_commit.issue_keys);
    }
  }
}

fn dedup(keys: &mut Vec<String>) {
  let mut seen = HashSet::new();
  keys.retain(|key| seen.insert(key.clone()));
}

fn truncate(keys: &mut Vec<String>) {
  keys.truncate(ISSUE_KEY_API_LIMIT);
}
