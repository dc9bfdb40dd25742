use serde::{Deserialize, Serialize};

/// Represents GitHub authentication credentials
#[derive(Clone)]
pub struct GitHubAuth {
  pub token: String,
}

/// Represents a GitHub user
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
  pub login: String,
  pub id: u64,
  pub name: Option<String>,
}

/// The account (user or organization) an installation belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationAccount {
  pub login: String,
}

/// A GitHub App installation visible to a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubInstallation {
  pub id: u64,
  pub account: InstallationAccount,
  /// `"User"` for personal installations, `"Organization"` otherwise
  pub target_type: String,
}

/// Response envelope of the user installations endpoint
#[derive(Debug, Deserialize)]
pub struct InstallationsResponse {
  #[serde(default)]
  pub total_count: u64,
  pub installations: Vec<GitHubInstallation>,
}

/// A user's membership in an organization
#[derive(Debug, Deserialize)]
pub struct OrgMembership {
  pub role: String,
}
