//! Pre-seeded in-memory stores.

use std::sync::Arc;

use bridge_core::{Installation, InstallationStore, MemoryStore, Subscription, SubscriptionStore};

/// GitHub installation id used by fixtures
pub const TEST_INSTALLATION_ID: u64 = 1234;

/// Connect client key used by fixtures
pub const TEST_CLIENT_KEY: &str = "test-client-key";

/// Shared secret used by fixtures
pub const TEST_SHARED_SECRET: &str = "test-shared-secret";

/// Store holding an installation for `jira_host` but no subscriptions
pub async fn store_with_installation(jira_host: &str) -> Arc<MemoryStore> {
  let store = Arc::new(MemoryStore::new());

  InstallationStore::insert(
    store.as_ref(),
    Installation {
      jira_host: jira_host.to_string(),
      client_key: TEST_CLIENT_KEY.to_string(),
      shared_secret: TEST_SHARED_SECRET.to_string(),
    },
  )
  .await
  .expect("memory store insert cannot fail");

  store
}

/// Store holding an installation for `jira_host` plus the matching
/// subscription row for [`TEST_INSTALLATION_ID`]
pub async fn seeded_store(jira_host: &str) -> Arc<MemoryStore> {
  let store = store_with_installation(jira_host).await;

  SubscriptionStore::insert(store.as_ref(), Subscription::new(jira_host, TEST_INSTALLATION_ID))
    .await
    .expect("memory store insert cannot fail");

  store
}
