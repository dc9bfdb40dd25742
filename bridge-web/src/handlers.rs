//! # HTTP Handlers
//!
//! The descriptor responder and the installation-management endpoints.
//! Callers authenticate with a GitHub token in the `Authorization` header;
//! only installations the caller administers are visible or deletable.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use bridge_core::SubscriptionStore;
use bridge_gh::models::GitHubAuth;
use bridge_gh::{GitHubClient, GitHubInstallation};
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Settings;
use crate::descriptor::connect_app_descriptor;
use crate::error::{Result, WebError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
  pub subscriptions: Arc<dyn SubscriptionStore>,
  pub settings: Settings,
}

/// GET /jira/atlassian-connect.json - the Connect app descriptor
pub async fn connect_descriptor(State(state): State<AppState>) -> Json<serde_json::Value> {
  Json(connect_app_descriptor(
    state.settings.instance_name.as_deref(),
    &state.settings.app_url,
  ))
}

/// GET /github/installations - installations the caller administers
pub async fn list_installations(
  State(state): State<AppState>,
  headers: HeaderMap,
) -> Result<Json<Vec<GitHubInstallation>>> {
  let github = github_client(&state, &headers)?;
  let user = github.get_current_user().await?;
  let installations = github.get_installations().await?;

  let mut admin_installations = Vec::new();
  for installation in installations {
    if is_admin(&github, &installation, &user.login).await {
      admin_installations.push(installation);
    }
  }

  Ok(Json(admin_installations))
}

/// Body of a subscription deletion request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSubscriptionRequest {
  pub installation_id: Option<u64>,
  pub jira_host: Option<String>,
}

/// DELETE /github/subscription - unlink a GitHub installation from a Jira host
pub async fn delete_subscription(
  State(state): State<AppState>,
  headers: HeaderMap,
  Json(body): Json<DeleteSubscriptionRequest>,
) -> Result<StatusCode> {
  let github = github_client(&state, &headers)?;

  let (Some(installation_id), Some(jira_host)) = (body.installation_id, body.jira_host) else {
    return Err(WebError::BadRequest(
      "installationId and jiraHost must be provided to delete a subscription.".to_string(),
    ));
  };

  // The caller must have access to the installation they name
  let installations = github.get_installations().await?;
  let Some(installation) = installations.into_iter().find(|i| i.id == installation_id) else {
    return Err(WebError::Unauthorized(format!(
      "Failed to delete subscription for {installation_id}. User does not have access to that installation."
    )));
  };

  // Org installations additionally require the org admin role
  if installation.target_type == "Organization" {
    let user = github.get_current_user().await?;
    let role = match github.get_org_membership(&installation.account.login, &user.login).await {
      Ok(membership) => membership.role,
      Err(error) => {
        warn!(org = %installation.account.login, %error, "could not read org membership");
        return Err(WebError::Unauthorized(format!(
          "Failed to delete subscription to {installation_id}. User is not an admin of that installation"
        )));
      }
    };
    if role != "admin" {
      return Err(WebError::Unauthorized(format!(
        "Failed to delete subscription to {installation_id}. User is not an admin of that installation"
      )));
    }
  }

  state.subscriptions.uninstall(&jira_host, installation_id).await?;
  info!(installation_id, %jira_host, "subscription removed");

  Ok(StatusCode::ACCEPTED)
}

/// Whether the user administers the installation: user-owned installations
/// match on login, org installations ask GitHub for the role. Membership
/// lookups that fail drop the installation rather than failing the request.
async fn is_admin(github: &GitHubClient, installation: &GitHubInstallation, username: &str) -> bool {
  if installation.target_type == "User" {
    return installation.account.login == username;
  }

  match github.get_org_membership(&installation.account.login, username).await {
    Ok(membership) => membership.role == "admin",
    Err(error) => {
      warn!(org = %installation.account.login, %error, "skipping installation, could not read org membership");
      false
    }
  }
}

fn github_client(state: &AppState, headers: &HeaderMap) -> Result<GitHubClient> {
  let value = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or_else(|| WebError::Unauthorized("missing GitHub token".to_string()))?;
  let token = value
    .strip_prefix("Bearer ")
    .or_else(|| value.strip_prefix("token "))
    .unwrap_or(value);

  Ok(GitHubClient::with_base_url(
    GitHubAuth {
      token: token.to_string(),
    },
    &state.settings.github_api_url,
  ))
}
