//! # Bridge Core Library
//!
//! Shared domain types for the GitHub to Jira bridge: installation and
//! subscription records, the async store seams they are persisted behind,
//! and issue-key extraction used by both the sync and push paths.

pub mod issue_keys;
pub mod models;
pub mod store;

// Re-export the types the other bridge crates reach for
pub use issue_keys::parse_issue_keys;
pub use models::{Installation, Subscription};
pub use store::{InstallationStore, MemoryStore, StoreError, SubscriptionStore};
