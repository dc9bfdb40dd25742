use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::instrument;

use crate::client::GitHubClient;
use crate::models::{GitHubInstallation, GitHubUser, InstallationsResponse};

impl GitHubClient {
  /// Get the current authenticated user
  #[instrument(skip(self), level = "debug")]
  pub async fn get_current_user(&self) -> Result<GitHubUser> {
    let response = self
      .get("/user")
      .send()
      .await
      .context("Failed to fetch GitHub user")?;

    match response.status() {
      StatusCode::OK => response.json::<GitHubUser>().await.context("Failed to parse GitHub user"),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your GitHub credentials."
      )),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// List the app installations the current user can access
  #[instrument(skip(self), level = "debug")]
  pub async fn get_installations(&self) -> Result<Vec<GitHubInstallation>> {
    let response = self
      .get("/user/installations")
      .send()
      .await
      .context("Failed to fetch GitHub installations")?;

    match response.status() {
      StatusCode::OK => {
        let installations = response
          .json::<InstallationsResponse>()
          .await
          .context("Failed to parse GitHub installations")?;
        Ok(installations.installations)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your GitHub credentials."
      )),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
