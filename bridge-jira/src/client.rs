use std::sync::Arc;

use anyhow::{Context, Result};
use bridge_core::{InstallationStore, SubscriptionStore};
use reqwest::{Client, Method, RequestBuilder, Response};

use crate::auth::ConnectAuth;
use crate::consts::USER_AGENT;

/// Jira sync client bound to one (jira host, GitHub installation) pair.
///
/// Holds no shared mutable state; a fresh client per sync is cheap and
/// isolated, like the per-call factory it replaces.
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: ConnectAuth,
  pub(crate) github_installation_id: u64,
  pub(crate) subscriptions: Arc<dyn SubscriptionStore>,
}

impl std::fmt::Debug for JiraClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JiraClient")
      .field("base_url", &self.base_url)
      .field("github_installation_id", &self.github_installation_id)
      .finish_non_exhaustive()
  }
}

impl JiraClient {
  /// Create a client for a Jira host, looking up the host's Connect
  /// credentials. Fails when no installation is registered for the host;
  /// no sync can proceed without credentials.
  pub async fn create(
    jira_host: &str,
    github_installation_id: u64,
    installations: &dyn InstallationStore,
    subscriptions: Arc<dyn SubscriptionStore>,
  ) -> Result<Self> {
    let installation = installations
      .get_for_host(jira_host)
      .await
      .context("Failed to resolve Jira installation")?;

    Ok(Self {
      client: Client::new(),
      base_url: installation.jira_host.clone(),
      auth: ConnectAuth::new(&installation.client_key, &installation.shared_secret),
      github_installation_id,
      subscriptions,
    })
  }

  /// Base URL of the Jira instance this client talks to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Build a signed request for a path under the instance base URL
  pub(crate) fn request(&self, method: Method, path_and_query: &str) -> Result<RequestBuilder> {
    let authorization = self.auth.authorization_header(method.as_str(), path_and_query)?;

    Ok(
      self
        .client
        .request(method, format!("{}{}", self.base_url, path_and_query))
        .header("Authorization", authorization)
        .header("User-Agent", USER_AGENT)
        .header("Accept", "application/json"),
    )
  }

  /// Fetch the Jira field catalog
  pub async fn get_fields(&self) -> Result<Response> {
    let response = self
      .request(Method::GET, "/rest/api/latest/field")?
      .send()
      .await
      .context("Failed to fetch Jira fields")?
      .error_for_status()
      .context("Jira field fetch failed")?;

    Ok(response)
  }
}

/// Create a sync client for a Jira host / GitHub installation pair
pub async fn create_jira_client(
  jira_host: &str,
  github_installation_id: u64,
  installations: &dyn InstallationStore,
  subscriptions: Arc<dyn SubscriptionStore>,
) -> Result<JiraClient> {
  JiraClient::create(jira_host, github_installation_id, installations, subscriptions).await
}
