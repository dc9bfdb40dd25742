use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::instrument;

use crate::client::GitHubClient;
use crate::models::OrgMembership;

impl GitHubClient {
  /// Get a user's membership in an organization
  #[instrument(skip(self), level = "debug")]
  pub async fn get_org_membership(&self, org: &str, username: &str) -> Result<OrgMembership> {
    let response = self
      .get(&format!("/orgs/{org}/memberships/{username}"))
      .send()
      .await
      .context("Failed to fetch org membership")?;

    match response.status() {
      StatusCode::OK => {
        response
          .json::<OrgMembership>()
          .await
          .context("Failed to parse org membership")
      }
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("{username} is not a member of {org}")),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Not authorized to read membership of {org}. The org may not have accepted the required permission."
      )),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
