//! End-to-end tests for the RPC surface
//!
//! Each test spawns the full application on an ephemeral port and talks to
//! it over HTTP, with `wiremock` standing in for the downstream LLM
//! service where one is needed.

use std::time::Duration;

use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use collabdocs::backend::server::config::ServerConfig;
use collabdocs::backend::server::init::create_app;
use collabdocs::shared::wire::{GetResponse, LoginResponse, Status, StatusResponse};

/// Address nothing listens on, for unreachable-downstream scenarios
const DEAD_LLM_URL: &str = "http://127.0.0.1:1";

/// Spawn the server against the given downstream URL, returning its base URL
async fn spawn_server(llm_base_url: &str) -> String {
    let config = ServerConfig {
        port: 0,
        llm_base_url: llm_base_url.to_string(),
        llm_probe_attempts: 1,
        llm_probe_delay: Duration::ZERO,
        llm_query_timeout: Duration::from_millis(500),
    };
    let app = create_app(&config).await;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Thin RPC client over the JSON endpoints
struct TestClient {
    http: reqwest::Client,
    base: String,
}

impl TestClient {
    fn new(base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    async fn login(&self, username: &str, password: &str) -> LoginResponse {
        self.http
            .post(format!("{}/api/login", self.base))
            .json(&serde_json::json!({"username": username, "password": password}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    async fn logout(&self, token: &str) -> StatusResponse {
        self.http
            .post(format!("{}/api/logout", self.base))
            .json(&serde_json::json!({"token": token}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    async fn post_op(&self, token: &str, kind: &str, data: &str) -> StatusResponse {
        self.http
            .post(format!("{}/api/post", self.base))
            .json(&serde_json::json!({"token": token, "type": kind, "data": data}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    async fn get_op(&self, token: &str, kind: &str, params: &str) -> GetResponse {
        self.http
            .post(format!("{}/api/get", self.base))
            .json(&serde_json::json!({"token": token, "type": kind, "params": params}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn scenario_login_success_and_failure() {
    let client = TestClient::new(spawn_server(DEAD_LLM_URL).await);

    let ok = client.login("admin", "admin123").await;
    assert_eq!(ok.status, Status::Success);
    assert!(!ok.token.is_empty());

    let bad = client.login("admin", "wrong").await;
    assert_eq!(bad.status, Status::Failure);
    assert!(bad.token.is_empty());
}

#[tokio::test]
async fn scenario_create_and_list_document() {
    let client = TestClient::new(spawn_server(DEAD_LLM_URL).await);
    let token = client.login("admin", "admin123").await.token;

    let created = client.post_op(&token, "document", "Hello World").await;
    assert_eq!(created.status, Status::Success);
    let id = created
        .message
        .strip_prefix("Document created with ID: ")
        .expect("message carries the generated id");
    assert!(!id.is_empty());

    let listing = client.get_op(&token, "documents", "").await;
    assert_eq!(listing.status, Status::Success);
    assert_eq!(listing.items.len(), 1);
    assert_eq!(listing.items[0].id, id);
    assert!(listing.items[0].data.contains("Hello World"));
    assert!(listing.items[0].data.contains("Author: admin"));
    assert!(listing.items[0].data.contains("Version: 1"));
}

#[tokio::test]
async fn scenario_update_document() {
    let client = TestClient::new(spawn_server(DEAD_LLM_URL).await);
    let token = client.login("admin", "admin123").await.token;

    let created = client.post_op(&token, "document", "Hello World").await;
    let id = created
        .message
        .strip_prefix("Document created with ID: ")
        .unwrap();

    let updated = client
        .post_op(&token, "update", &format!("{}|Goodbye", id))
        .await;
    assert_eq!(updated.status, Status::Success);
    assert_eq!(updated.message, "Document updated");

    let listing = client.get_op(&token, "documents", "").await;
    assert!(listing.items[0].data.contains("Goodbye"));
    assert!(listing.items[0].data.contains("Version: 2"));
}

#[tokio::test]
async fn scenario_update_unknown_document_fails() {
    let client = TestClient::new(spawn_server(DEAD_LLM_URL).await);
    let token = client.login("admin", "admin123").await.token;

    let response = client.post_op(&token, "update", "doesNotExist|x").await;
    assert_eq!(response.status, Status::Failure);
    assert_eq!(response.message, "Invalid request");
}

#[tokio::test]
async fn scenario_llm_unreachable_degrades_gracefully() {
    let client = TestClient::new(spawn_server(DEAD_LLM_URL).await);
    let token = client.login("admin", "admin123").await.token;

    let response = client.get_op(&token, "llm_query", "what is rust?").await;
    assert_eq!(response.status, Status::Failure);
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].id, "error");
    assert!(response.items[0].data.contains("not running"));

    // The same connection keeps serving non-LLM operations normally
    let listing = client.get_op(&token, "documents", "").await;
    assert_eq!(listing.status, Status::Success);
}

#[tokio::test]
async fn scenario_llm_query_forwards_answer() {
    let llm = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/answer"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"answer": "Rust is a systems language."})),
        )
        .mount(&llm)
        .await;

    let client = TestClient::new(spawn_server(&llm.uri()).await);
    let token = client.login("alice", "alice123").await.token;

    let response = client.get_op(&token, "llm_query", "what is rust?").await;
    assert_eq!(response.status, Status::Success);
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].id, "llm_response");
    assert_eq!(response.items[0].data, "Rust is a systems language.");
}

#[tokio::test]
async fn scenario_logout_and_active_users() {
    let client = TestClient::new(spawn_server(DEAD_LLM_URL).await);
    let admin = client.login("admin", "admin123").await.token;
    let alice = client.login("alice", "alice123").await.token;

    let users = client.get_op(&admin, "active_users", "").await;
    assert_eq!(users.status, Status::Success);
    let names: Vec<&str> = users.items.iter().map(|i| i.data.as_str()).collect();
    assert_eq!(names, vec!["admin", "alice"]);

    let out = client.logout(&alice).await;
    assert_eq!(out.status, Status::Success);
    assert_eq!(out.message, "Logged out successfully");

    // Logging out again with the stale token fails
    let again = client.logout(&alice).await;
    assert_eq!(again.status, Status::Failure);
    assert_eq!(again.message, "Invalid token");

    let users = client.get_op(&admin, "active_users", "").await;
    let names: Vec<&str> = users.items.iter().map(|i| i.data.as_str()).collect();
    assert_eq!(names, vec!["admin"]);

    // The revoked token no longer reads anything
    let denied = client.get_op(&alice, "documents", "").await;
    assert_eq!(denied.status, Status::Failure);
    assert!(denied.items.is_empty());
}

#[tokio::test]
async fn concurrent_updates_serialize_per_document() {
    let client = TestClient::new(spawn_server(DEAD_LLM_URL).await);
    let token = client.login("admin", "admin123").await.token;

    let created = client.post_op(&token, "document", "v0").await;
    let id = created
        .message
        .strip_prefix("Document created with ID: ")
        .unwrap()
        .to_string();

    let base = client.base.clone();
    let mut handles = Vec::new();
    for i in 0..20 {
        let client = TestClient::new(base.clone());
        let token = token.clone();
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            client
                .post_op(&token, "update", &format!("{}|v{}", id, i))
                .await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().status, Status::Success);
    }

    // 20 accepted updates on top of version 1
    let listing = client.get_op(&token, "documents", "").await;
    assert!(listing.items[0].data.contains("Version: 21"));
}
