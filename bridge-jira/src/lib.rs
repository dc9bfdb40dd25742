//! # Jira Sync Client
//!
//! Jira REST integration for the bridge: devinfo ingestion of commits,
//! branches, and pull requests, issue pass-through operations, and the
//! issue-key reference cap enforced before every repository sync.

mod auth;
mod client;
pub mod consts;
mod endpoints;
mod issue_limits;
pub mod models;

// Re-export the client
pub use auth::ConnectAuth;
pub use client::{JiraClient, create_jira_client};
// Re-export models
pub use models::{Branch, Commit, CommitAuthor, Issue, IssueFields, IssueStatus, RepositoryUpdate, UpdateOptions};
