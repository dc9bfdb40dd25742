//! # Development-Information Endpoints
//!
//! Ingestion and cleanup of repository state in Jira's devinfo API. The
//! repository bulk update is the one operation with real logic: issue keys
//! are deduplicated and bounded to the API's per-resource cap before the
//! payload goes on the wire, and truncation is recorded as a subscription
//! warning instead of failing the sync.

use anyhow::{Context, Result};
use reqwest::{Method, Response};
use tracing::{instrument, warn};

use crate::client::JiraClient;
use crate::consts::{DEVINFO_PREFIX, SYNC_WARNING_MESSAGE};
use crate::issue_limits::{
  branches_within_issue_key_limit, commits_within_issue_key_limit, dedup_issue_keys, truncate_issue_keys,
};
use crate::models::{BulkUpdateBody, BulkUpdateProperties, RepositoryUpdate, UpdateOptions};

impl JiraClient {
  /// Delete a branch from a repository's devinfo record
  pub async fn delete_branch(&self, repository_id: &str, branch_ref: &str) -> Result<Response> {
    let path = format!(
      "{DEVINFO_PREFIX}/repository/{repository_id}/branch/{}?_updateSequenceId={}",
      devinfo_entity_id(branch_ref),
      update_sequence_id(),
    );
    self.delete_raw(&path).await.context("Failed to delete Jira branch")
  }

  /// Delete a pull request from a repository's devinfo record
  pub async fn delete_pull_request(&self, repository_id: &str, number: u64) -> Result<Response> {
    let path = format!(
      "{DEVINFO_PREFIX}/repository/{repository_id}/pull_request/{number}?_updateSequenceId={}",
      update_sequence_id(),
    );
    self.delete_raw(&path).await.context("Failed to delete Jira pull request")
  }

  /// Fetch a repository's devinfo record
  pub async fn get_repository(&self, repository_id: &str) -> Result<Response> {
    let response = self
      .request(Method::GET, &format!("{DEVINFO_PREFIX}/repository/{repository_id}"))?
      .send()
      .await?
      .error_for_status()
      .context("Failed to fetch Jira repository")?;
    Ok(response)
  }

  /// Delete a repository's entire devinfo record
  pub async fn delete_repository(&self, repository_id: &str) -> Result<Response> {
    let path = format!(
      "{DEVINFO_PREFIX}/repository/{repository_id}?_updateSequenceId={}",
      update_sequence_id(),
    );
    self.delete_raw(&path).await.context("Failed to delete Jira repository")
  }

  /// Check whether any devinfo entities carry this installation's marker
  pub async fn installation_exists(&self) -> Result<Response> {
    let path = format!(
      "{DEVINFO_PREFIX}/existsByProperties?installationId={}",
      self.github_installation_id
    );
    let response = self
      .request(Method::GET, &path)?
      .send()
      .await?
      .error_for_status()
      .context("Failed to check Jira devinfo installation")?;
    Ok(response)
  }

  /// Delete every devinfo entity carrying this installation's marker
  pub async fn delete_installation(&self) -> Result<Response> {
    let path = format!(
      "{DEVINFO_PREFIX}/bulkByProperties?installationId={}",
      self.github_installation_id
    );
    self.delete_raw(&path).await.context("Failed to delete Jira devinfo installation")
  }

  /// Mark the devinfo migration as complete
  pub async fn migration_complete(&self) -> Result<Response> {
    self.post_migration("migrationComplete").await
  }

  /// Undo the devinfo migration
  pub async fn migration_undo(&self) -> Result<Response> {
    self.post_migration("undoMigration").await
  }

  /// Sync a repository's commits and branches into Jira.
  ///
  /// Issue keys are deduplicated first. If any commit, branch, or branch
  /// last-commit still references more than the API's per-resource cap,
  /// every key list is truncated to the cap and a warning is persisted on
  /// the subscription; the sync itself proceeds. The payload is mutated in
  /// place so callers can observe exactly what went on the wire.
  #[instrument(skip(self, data, options), fields(repository_id = %data.id), level = "debug")]
  pub async fn update_repository(&self, data: &mut RepositoryUpdate, options: &UpdateOptions) -> Result<()> {
    dedup_issue_keys(data);

    if !commits_within_issue_key_limit(&data.commits) || !branches_within_issue_key_limit(&data.branches) {
      truncate_issue_keys(data);

      // The subscription row must exist; skipping the warning silently
      // would hide the data loss from operators.
      let subscription = self
        .subscriptions
        .get_single_installation(&self.base_url, self.github_installation_id)
        .await
        .context("Failed to resolve subscription for sync warning")?;
      self
        .subscriptions
        .set_sync_warning(
          &subscription.jira_host,
          subscription.github_installation_id,
          SYNC_WARNING_MESSAGE,
        )
        .await
        .context("Failed to persist sync warning")?;

      warn!(
        repository_id = %data.id,
        github_installation_id = self.github_installation_id,
        "issue key reference limit exceeded, payload truncated"
      );
    }

    let body = BulkUpdateBody {
      prevent_transitions: options.prevent_transitions,
      repositories: vec![&*data],
      properties: BulkUpdateProperties {
        installation_id: self.github_installation_id.to_string(),
      },
    };

    self
      .request(Method::POST, &format!("{DEVINFO_PREFIX}/bulk"))?
      .json(&body)
      .send()
      .await
      .context("Failed to post repository update")?
      .error_for_status()
      .context("Jira bulk update failed")?;

    Ok(())
  }

  async fn delete_raw(&self, path: &str) -> Result<Response> {
    let response = self.request(Method::DELETE, path)?.send().await?.error_for_status()?;
    Ok(response)
  }

  // The migration endpoints take no parameters but return 500s when the
  // body is empty or null; an empty object is the required minimum payload.
  async fn post_migration(&self, endpoint: &str) -> Result<Response> {
    let response = self
      .request(Method::POST, &format!("{DEVINFO_PREFIX}/github/{endpoint}"))?
      .json(&serde_json::json!({}))
      .send()
      .await?
      .error_for_status()
      .with_context(|| format!("Jira migration call '{endpoint}' failed"))?;
    Ok(response)
  }
}

/// Devinfo entity ids cannot contain `/`, so branch refs are normalized
/// before being used in a path.
fn devinfo_entity_id(reference: &str) -> String {
  reference.replace('/', "~")
}

fn update_sequence_id() -> i64 {
  chrono::Utc::now().timestamp_millis()
}
