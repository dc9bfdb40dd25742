//! # Jira Issue Endpoints
//!
//! Pass-through operations on issues: fetch, bulk best-effort fetch,
//! update, comments, transitions, and worklogs. Single-call operations
//! forward the transport's response untouched; only the fan-out recovers
//! from individual failures.

use anyhow::{Context, Result};
use futures::future::join_all;
use reqwest::{Method, Response};
use tracing::{instrument, warn};

use crate::client::JiraClient;
use crate::models::Issue;

impl JiraClient {
  /// Get an issue by id or key, fetching only the summary field
  pub async fn get_issue(&self, issue_id: &str) -> Result<Issue> {
    self.get_issue_with_query(issue_id, &[("fields", "summary")]).await
  }

  /// Get an issue by id or key with an explicit query string
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue_with_query(&self, issue_id: &str, query: &[(&str, &str)]) -> Result<Issue> {
    let path = format!("/rest/api/latest/issue/{}{}", issue_id, query_string(query));

    let issue = self
      .request(Method::GET, &path)?
      .send()
      .await
      .context("Failed to fetch Jira issue")?
      .error_for_status()
      .with_context(|| format!("Jira issue fetch failed for {issue_id}"))?
      .json::<Issue>()
      .await
      .context("Failed to parse Jira issue")?;

    Ok(issue)
  }

  /// Best-effort bulk fetch: one concurrent request per id, individual
  /// failures are dropped from the result rather than failing the batch.
  /// Dropped ids are logged so the loss stays observable.
  pub async fn get_issues(&self, issue_ids: &[&str], query: &[(&str, &str)]) -> Vec<Issue> {
    let fetches = issue_ids.iter().map(|id| self.get_issue_with_query(id, query));
    let results = join_all(fetches).await;

    let mut issues = Vec::with_capacity(results.len());
    for (id, result) in issue_ids.iter().zip(results) {
      match result {
        Ok(issue) => issues.push(issue),
        Err(error) => warn!(issue_id = %id, %error, "dropping failed issue fetch from batch"),
      }
    }
    issues
  }

  /// Update an issue
  pub async fn update_issue(&self, issue_id: &str, payload: &serde_json::Value) -> Result<Response> {
    let response = self
      .request(Method::PUT, &format!("/rest/api/3/issue/{issue_id}"))?
      .json(payload)
      .send()
      .await
      .context("Failed to update Jira issue")?
      .error_for_status()
      .with_context(|| format!("Jira issue update failed for {issue_id}"))?;

    Ok(response)
  }

  /// Get the comments on an issue
  pub async fn get_comments(&self, issue_id: &str) -> Result<Response> {
    self
      .get_raw(&format!("/rest/api/latest/issue/{issue_id}/comment"))
      .await
      .context("Failed to fetch Jira comments")
  }

  /// Add a comment to an issue
  pub async fn add_comment(&self, issue_id: &str, payload: &serde_json::Value) -> Result<Response> {
    self
      .post_raw(&format!("/rest/api/3/issue/{issue_id}/comment"), payload)
      .await
      .context("Failed to add Jira comment")
  }

  /// Get the available transitions for an issue
  pub async fn get_transitions(&self, issue_id: &str) -> Result<Response> {
    self
      .get_raw(&format!("/rest/api/latest/issue/{issue_id}/transitions"))
      .await
      .context("Failed to fetch Jira transitions")
  }

  /// Transition an issue to a new status
  #[instrument(skip(self), level = "debug")]
  pub async fn transition_issue(&self, issue_id: &str, transition_id: &str) -> Result<Response> {
    let payload = serde_json::json!({ "transition": { "id": transition_id } });

    self
      .post_raw(&format!("/rest/api/latest/issue/{issue_id}/transitions"), &payload)
      .await
      .context("Failed to transition Jira issue")
  }

  /// Get the worklogs recorded on an issue
  pub async fn get_worklogs(&self, issue_id: &str) -> Result<Response> {
    self
      .get_raw(&format!("/rest/api/latest/issue/{issue_id}/worklog"))
      .await
      .context("Failed to fetch Jira worklogs")
  }

  /// Record a worklog on an issue
  pub async fn add_worklog(&self, issue_id: &str, payload: &serde_json::Value) -> Result<Response> {
    self
      .post_raw(&format!("/rest/api/3/issue/{issue_id}/worklog"), payload)
      .await
      .context("Failed to add Jira worklog")
  }

  async fn get_raw(&self, path: &str) -> Result<Response> {
    let response = self.request(Method::GET, path)?.send().await?.error_for_status()?;
    Ok(response)
  }

  async fn post_raw(&self, path: &str, payload: &serde_json::Value) -> Result<Response> {
    let response = self
      .request(Method::POST, path)?
      .json(payload)
      .send()
      .await?
      .error_for_status()?;
    Ok(response)
  }
}

// The signed query-string hash covers this string verbatim, so the pairs
// must be encoded here rather than left to the transport.
fn query_string(query: &[(&str, &str)]) -> String {
  if query.is_empty() {
    return String::new();
  }

  let pairs: Vec<String> = query
    .iter()
    .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
    .collect();
  format!("?{}", pairs.join("&"))
}
