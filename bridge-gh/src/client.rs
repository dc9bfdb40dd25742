//! # GitHub HTTP Client
//!
//! HTTP client for the GitHub REST API, authenticating with the caller's
//! OAuth token and defaulting to the public API host.

use reqwest::{Client, RequestBuilder};

use crate::models::GitHubAuth;

/// User-Agent header value for the GitHub API client
const USER_AGENT: &str = concat!("bridge/", env!("CARGO_PKG_VERSION"));

/// Represents a GitHub API client
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: GitHubAuth,
}

impl GitHubClient {
  /// Create a new GitHub client against the public API
  pub fn new(auth: GitHubAuth) -> Self {
    Self {
      client: Client::new(),
      base_url: "https://api.github.com".to_string(),
      auth,
    }
  }

  /// Create a client against a non-default API host (tests, GHE)
  pub fn with_base_url(auth: GitHubAuth, base_url: &str) -> Self {
    Self {
      base_url: base_url.to_string(),
      ..Self::new(auth)
    }
  }

  pub(crate) fn get(&self, path: &str) -> RequestBuilder {
    self
      .client
      .get(format!("{}{}", self.base_url, path))
      .header("Accept", "application/vnd.github.v3+json")
      .header("User-Agent", USER_AGENT)
      .header("Authorization", format!("token {}", self.auth.token))
  }
}
