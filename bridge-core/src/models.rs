use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Jira-side credentials for one host, registered when the Connect app is
/// installed. Read-only from the sync client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installation {
  /// Base URL of the Jira instance, e.g. `https://example.atlassian.net`
  pub jira_host: String,
  /// Connect client key identifying this installation to Jira
  pub client_key: String,
  /// Shared secret used to sign outbound requests
  pub shared_secret: String,
}

/// Links one GitHub installation to one Jira host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
  pub jira_host: String,
  pub github_installation_id: u64,
  /// Last truncation/overflow notice, surfaced to operators
  pub sync_warning: Option<String>,
  pub updated_at: DateTime<Utc>,
}

impl Subscription {
  /// Create a fresh subscription with no warning recorded
  pub fn new(jira_host: &str, github_installation_id: u64) -> Self {
    Self {
      jira_host: jira_host.to_string(),
      github_installation_id,
      sync_warning: None,
      updated_at: Utc::now(),
    }
  }
}
