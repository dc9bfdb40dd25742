//! # GitHub API Endpoints
//!
//! Endpoint implementations for the resources the bridge's management
//! surface needs: users, their installations, and org memberships.

pub mod orgs;
pub mod users;
