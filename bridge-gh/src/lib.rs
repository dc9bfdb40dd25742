//! # GitHub API Client
//!
//! GitHub REST integration backing the bridge's installation-management
//! surface: current user, installation listing, and org membership checks,
//! plus the push-event commit filter feeding the sync pipeline.

mod client;
mod endpoints;
pub mod models;
pub mod push;

// Re-export the client
pub use client::GitHubClient;
// Re-export models
pub use models::{GitHubInstallation, GitHubUser, InstallationAccount, OrgMembership};
