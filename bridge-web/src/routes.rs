//! Router assembly.

use axum::Router;
use axum::routing::{delete, get};
use tower_http::trace::TraceLayer;

use crate::handlers::{self, AppState};

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/jira/atlassian-connect.json", get(handlers::connect_descriptor))
    .route("/github/installations", get(handlers::list_installations))
    .route("/github/subscription", delete(handlers::delete_subscription))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
