//! # Bridge Web Service
//!
//! The outward-facing surface of the bridge: serves the Jira Connect app
//! descriptor and the GitHub installation-management endpoints. HTML
//! rendering and session management are deliberately absent; responses are
//! JSON and callers authenticate with a GitHub token header.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod handlers;
pub mod routes;

pub use config::Settings;
pub use error::{Result, WebError};
pub use handlers::AppState;
pub use routes::create_router;
