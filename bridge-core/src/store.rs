//! # Installation and Subscription Stores
//!
//! Async seams in front of installation credentials and subscription rows.
//! The sync client and the web handlers only ever see these traits; the
//! in-memory implementation backs tests and single-process deployments.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Installation, Subscription};

/// Errors surfaced by the store seams
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("no installation registered for Jira host '{0}'")]
  InstallationNotFound(String),
  #[error("no subscription for Jira host '{0}' and GitHub installation {1}")]
  SubscriptionNotFound(String, u64),
}

/// Read access to Jira installation credentials
#[async_trait]
pub trait InstallationStore: Send + Sync {
  /// Look up the credentials registered for a host
  async fn get_for_host(&self, jira_host: &str) -> Result<Installation, StoreError>;

  /// Register credentials for a host, replacing any previous record
  async fn insert(&self, installation: Installation) -> Result<(), StoreError>;
}

/// Persistence for GitHub-installation-to-Jira-host links
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
  /// Resolve the single active subscription row for a host/installation pair
  async fn get_single_installation(
    &self,
    jira_host: &str,
    github_installation_id: u64,
  ) -> Result<Subscription, StoreError>;

  /// All subscriptions registered for a host
  async fn get_all_for_host(&self, jira_host: &str) -> Result<Vec<Subscription>, StoreError>;

  /// Create a subscription row
  async fn insert(&self, subscription: Subscription) -> Result<(), StoreError>;

  /// Persist a sync warning on the subscription row. Concurrent syncs for
  /// the same pair are not serialized; the last write wins.
  async fn set_sync_warning(
    &self,
    jira_host: &str,
    github_installation_id: u64,
    warning: &str,
  ) -> Result<(), StoreError>;

  /// Remove the link between a GitHub installation and a Jira host
  async fn uninstall(&self, jira_host: &str, github_installation_id: u64) -> Result<(), StoreError>;
}

/// In-memory store backing tests and single-process deployments
#[derive(Default)]
pub struct MemoryStore {
  installations: RwLock<HashMap<String, Installation>>,
  subscriptions: RwLock<Vec<Subscription>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl InstallationStore for MemoryStore {
  async fn get_for_host(&self, jira_host: &str) -> Result<Installation, StoreError> {
    self
      .installations
      .read()
      .await
      .get(jira_host)
      .cloned()
      .ok_or_else(|| StoreError::InstallationNotFound(jira_host.to_string()))
  }

  async fn insert(&self, installation: Installation) -> Result<(), StoreError> {
    self
      .installations
      .write()
      .await
      .insert(installation.jira_host.clone(), installation);
    Ok(())
  }
}

#[async_trait]
impl SubscriptionStore for MemoryStore {
  async fn get_single_installation(
    &self,
    jira_host: &str,
    github_installation_id: u64,
  ) -> Result<Subscription, StoreError> {
    self
      .subscriptions
      .read()
      .await
      .iter()
      .find(|s| s.jira_host == jira_host && s.github_installation_id == github_installation_id)
      .cloned()
      .ok_or_else(|| StoreError::SubscriptionNotFound(jira_host.to_string(), github_installation_id))
  }

  async fn get_all_for_host(&self, jira_host: &str) -> Result<Vec<Subscription>, StoreError> {
    Ok(
      self
        .subscriptions
        .read()
        .await
        .iter()
        .filter(|s| s.jira_host == jira_host)
        .cloned()
        .collect(),
    )
  }

  async fn insert(&self, subscription: Subscription) -> Result<(), StoreError> {
    self.subscriptions.write().await.push(subscription);
    Ok(())
  }

  async fn set_sync_warning(
    &self,
    jira_host: &str,
    github_installation_id: u64,
    warning: &str,
  ) -> Result<(), StoreError> {
    let mut subscriptions = self.subscriptions.write().await;
    let subscription = subscriptions
      .iter_mut()
      .find(|s| s.jira_host == jira_host && s.github_installation_id == github_installation_id)
      .ok_or_else(|| StoreError::SubscriptionNotFound(jira_host.to_string(), github_installation_id))?;

    subscription.sync_warning = Some(warning.to_string());
    subscription.updated_at = Utc::now();
    Ok(())
  }

  async fn uninstall(&self, jira_host: &str, github_installation_id: u64) -> Result<(), StoreError> {
    let mut subscriptions = self.subscriptions.write().await;
    let before = subscriptions.len();
    subscriptions.retain(|s| !(s.jira_host == jira_host && s.github_installation_id == github_installation_id));

    if subscriptions.len() == before {
      return Err(StoreError::SubscriptionNotFound(
        jira_host.to_string(),
        github_installation_id,
      ));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const HOST: &str = "https://example.atlassian.net";

  #[tokio::test]
  async fn test_installation_lookup() {
    let store = MemoryStore::new();
    InstallationStore::insert(
      &store,
      Installation {
        jira_host: HOST.to_string(),
        client_key: "key".to_string(),
        shared_secret: "secret".to_string(),
      },
    )
    .await
    .unwrap();

    let installation = store.get_for_host(HOST).await.unwrap();
    assert_eq!(installation.shared_secret, "secret");

    let missing = store.get_for_host("https://other.atlassian.net").await;
    assert!(matches!(missing, Err(StoreError::InstallationNotFound(_))));
  }

  #[tokio::test]
  async fn test_subscription_warning_roundtrip() {
    let store = MemoryStore::new();
    SubscriptionStore::insert(&store, Subscription::new(HOST, 1234)).await.unwrap();

    store.set_sync_warning(HOST, 1234, "too many keys").await.unwrap();

    let subscription = store.get_single_installation(HOST, 1234).await.unwrap();
    assert_eq!(subscription.sync_warning.as_deref(), Some("too many keys"));
  }

  #[tokio::test]
  async fn test_set_warning_without_subscription_fails() {
    let store = MemoryStore::new();

    let result = store.set_sync_warning(HOST, 42, "warning").await;
    assert!(matches!(result, Err(StoreError::SubscriptionNotFound(_, 42))));
  }

  #[tokio::test]
  async fn test_uninstall_removes_only_matching_pair() {
    let store = MemoryStore::new();
    SubscriptionStore::insert(&store, Subscription::new(HOST, 1)).await.unwrap();
    SubscriptionStore::insert(&store, Subscription::new(HOST, 2)).await.unwrap();

    store.uninstall(HOST, 1).await.unwrap();

    let remaining = store.get_all_for_host(HOST).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].github_installation_id, 2);

    let again = store.uninstall(HOST, 1).await;
    assert!(again.is_err());
  }
}
