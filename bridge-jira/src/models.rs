use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author attribution on a devinfo commit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitAuthor {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
}

/// A commit reference in a devinfo repository payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
  pub id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default)]
  pub issue_keys: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub author: Option<CommitAuthor>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub author_timestamp: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub update_sequence_id: Option<u64>,
}

impl Commit {
  pub fn new(id: &str, issue_keys: Vec<String>) -> Self {
    Self {
      id: id.to_string(),
      message: None,
      url: None,
      issue_keys,
      author: None,
      author_timestamp: None,
      update_sequence_id: None,
    }
  }
}

/// A branch reference. Its `last_commit`, when present, is limit-checked
/// independently of the branch's own issue keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
  pub id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default)]
  pub issue_keys: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_commit: Option<Commit>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub update_sequence_id: Option<u64>,
}

impl Branch {
  pub fn new(id: &str, issue_keys: Vec<String>) -> Self {
    Self {
      id: id.to_string(),
      name: None,
      url: None,
      issue_keys,
      last_commit: None,
      update_sequence_id: None,
    }
  }
}

/// The unit of repository sync sent to the bulk devinfo endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryUpdate {
  pub id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default)]
  pub commits: Vec<Commit>,
  #[serde(default)]
  pub branches: Vec<Branch>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub update_sequence_id: Option<u64>,
}

impl RepositoryUpdate {
  pub fn new(id: &str) -> Self {
    Self {
      id: id.to_string(),
      name: None,
      url: None,
      commits: Vec::new(),
      branches: Vec::new(),
      update_sequence_id: None,
    }
  }
}

/// Options for a repository bulk update
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
  /// Ask Jira not to run automatic issue transitions for this update
  pub prevent_transitions: bool,
}

/// Body of the bulk devinfo POST
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BulkUpdateBody<'a> {
  pub prevent_transitions: bool,
  pub repositories: Vec<&'a RepositoryUpdate>,
  pub properties: BulkUpdateProperties,
}

/// Installation marker attached to every bulk update
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BulkUpdateProperties {
  pub installation_id: String,
}

/// A Jira issue as returned by the issue endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
  pub id: String,
  pub key: String,
  pub fields: IssueFields,
}

/// Issue fields; only `summary` is requested by default
#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
  pub summary: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub status: Option<IssueStatus>,
}

/// Status of a Jira issue
#[derive(Debug, Clone, Deserialize)]
pub struct IssueStatus {
  #[serde(default)]
  pub id: Option<String>,
  pub name: String,
}
