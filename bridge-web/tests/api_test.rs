//! End-to-end tests for the web surface, driving the router directly and
//! mocking the GitHub API with wiremock.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use bridge_core::{MemoryStore, Subscription, SubscriptionStore};
use bridge_web::handlers::AppState;
use bridge_web::{Settings, create_router};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JIRA_HOST: &str = "https://example.atlassian.net";

fn settings(github_api_url: &str) -> Settings {
  Settings {
    bind_addr: "127.0.0.1:0".parse().expect("valid socket address"),
    instance_name: Some("staging".to_string()),
    app_url: "https://bridge.example.com".to_string(),
    github_api_url: github_api_url.to_string(),
  }
}

async fn app(github_api_url: &str) -> (axum::Router, Arc<MemoryStore>) {
  let store = Arc::new(MemoryStore::new());
  let state = AppState {
    subscriptions: store.clone(),
    settings: settings(github_api_url),
  };
  (create_router(state), store)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("body is readable");
  serde_json::from_slice(&bytes).expect("body is JSON")
}

fn delete_request(token: Option<&str>, body: serde_json::Value) -> Request<Body> {
  let mut builder = Request::builder()
    .method("DELETE")
    .uri("/github/subscription")
    .header("content-type", "application/json");
  if let Some(token) = token {
    builder = builder.header("authorization", format!("token {token}"));
  }
  builder.body(Body::from(body.to_string())).expect("valid request")
}

async fn mock_github_org_installation(mock_server: &MockServer, role: &str) {
  Mock::given(method("GET"))
    .and(path("/user/installations"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "total_count": 1,
        "installations": [
            { "id": 42, "account": { "login": "github" }, "target_type": "Organization" }
        ]
    })))
    .mount(mock_server)
    .await;
  Mock::given(method("GET"))
    .and(path("/user"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "login": "octocat",
        "id": 1
    })))
    .mount(mock_server)
    .await;
  Mock::given(method("GET"))
    .and(path("/orgs/github/memberships/octocat"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "role": role,
        "state": "active"
    })))
    .mount(mock_server)
    .await;
}

#[tokio::test]
async fn descriptor_reflects_instance_name() {
  let (router, _store) = app("https://api.github.com").await;

  let response = router
    .oneshot(
      Request::builder()
        .uri("/jira/atlassian-connect.json")
        .body(Body::empty())
        .expect("valid request"),
    )
    .await
    .expect("router handles request");

  assert_eq!(response.status(), StatusCode::OK);
  let descriptor = body_json(response).await;
  assert_eq!(descriptor["key"], "com.github.integration.staging");
  assert_eq!(descriptor["name"], "GitHub (staging)");
  assert_eq!(descriptor["baseUrl"], "https://bridge.example.com");
}

#[tokio::test]
async fn delete_subscription_requires_token() {
  let (router, _store) = app("https://api.github.com").await;

  let response = router
    .oneshot(delete_request(
      None,
      serde_json::json!({ "installationId": 42, "jiraHost": JIRA_HOST }),
    ))
    .await
    .expect("router handles request");

  assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn delete_subscription_requires_both_fields() {
  let (router, _store) = app("https://api.github.com").await;

  let response = router
    .oneshot(delete_request(Some("gh-token"), serde_json::json!({ "installationId": 42 })))
    .await
    .expect("router handles request");

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  let body = body_json(response).await;
  assert!(
    body["err"]
      .as_str()
      .expect("error message present")
      .contains("installationId and jiraHost")
  );
}

#[tokio::test]
async fn delete_subscription_as_org_admin() {
  let mock_server = MockServer::start().await;
  mock_github_org_installation(&mock_server, "admin").await;

  let (router, store) = app(&mock_server.uri()).await;
  SubscriptionStore::insert(store.as_ref(), Subscription::new(JIRA_HOST, 42))
    .await
    .expect("memory store insert cannot fail");

  let response = router
    .oneshot(delete_request(
      Some("gh-token"),
      serde_json::json!({ "installationId": 42, "jiraHost": JIRA_HOST }),
    ))
    .await
    .expect("router handles request");

  assert_eq!(response.status(), StatusCode::ACCEPTED);
  let remaining = store.get_all_for_host(JIRA_HOST).await.expect("store is readable");
  assert!(remaining.is_empty());
}

#[tokio::test]
async fn delete_subscription_rejected_for_non_admin() {
  let mock_server = MockServer::start().await;
  mock_github_org_installation(&mock_server, "member").await;

  let (router, store) = app(&mock_server.uri()).await;
  SubscriptionStore::insert(store.as_ref(), Subscription::new(JIRA_HOST, 42))
    .await
    .expect("memory store insert cannot fail");

  let response = router
    .oneshot(delete_request(
      Some("gh-token"),
      serde_json::json!({ "installationId": 42, "jiraHost": JIRA_HOST }),
    ))
    .await
    .expect("router handles request");

  assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
  // The subscription row survives
  let remaining = store.get_all_for_host(JIRA_HOST).await.expect("store is readable");
  assert_eq!(remaining.len(), 1);
}

#[tokio::test]
async fn delete_subscription_rejected_for_foreign_installation() {
  let mock_server = MockServer::start().await;
  mock_github_org_installation(&mock_server, "admin").await;

  let (router, _store) = app(&mock_server.uri()).await;

  let response = router
    .oneshot(delete_request(
      Some("gh-token"),
      serde_json::json!({ "installationId": 9999, "jiraHost": JIRA_HOST }),
    ))
    .await
    .expect("router handles request");

  assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
  let body = body_json(response).await;
  assert!(
    body["err"]
      .as_str()
      .expect("error message present")
      .contains("does not have access")
  );
}

#[tokio::test]
async fn list_installations_keeps_only_admin_rows() {
  let mock_server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/user/installations"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "total_count": 3,
        "installations": [
            { "id": 1, "account": { "login": "octocat" }, "target_type": "User" },
            { "id": 2, "account": { "login": "github" }, "target_type": "Organization" },
            { "id": 3, "account": { "login": "someone-else" }, "target_type": "User" }
        ]
    })))
    .mount(&mock_server)
    .await;
  Mock::given(method("GET"))
    .and(path("/user"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "login": "octocat",
        "id": 1
    })))
    .mount(&mock_server)
    .await;
  // Org membership lookup fails; the installation is dropped, not an error
  Mock::given(method("GET"))
    .and(path("/orgs/github/memberships/octocat"))
    .respond_with(ResponseTemplate::new(403))
    .mount(&mock_server)
    .await;

  let (router, _store) = app(&mock_server.uri()).await;

  let response = router
    .oneshot(
      Request::builder()
        .uri("/github/installations")
        .header("authorization", "token gh-token")
        .body(Body::empty())
        .expect("valid request"),
    )
    .await
    .expect("router handles request");

  assert_eq!(response.status(), StatusCode::OK);
  let installations = body_json(response).await;
  let ids: Vec<u64> = installations
    .as_array()
    .expect("array response")
    .iter()
    .map(|i| i["id"].as_u64().expect("id present"))
    .collect();
  assert_eq!(ids, vec![1]);
}
