//! Common test utilities and helpers
//!
//! Every test builds the real router over its own in-memory SQLite database,
//! so tests are isolated and need no external services.

#![allow(dead_code)]

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use serde_json::{json, Value};

use number_talk::backend::routes::create_router;
use number_talk::backend::server::{load_database, AppState, AuthConfig};

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_PASSWORD: &str = "secret123";

/// Auth settings with the cheapest bcrypt cost
pub fn auth_config() -> AuthConfig {
    AuthConfig::new(TEST_SECRET).with_bcrypt_cost(4)
}

/// Fresh application state backed by an empty in-memory database
pub async fn test_state() -> AppState {
    let pool = load_database("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    AppState::new(pool, auth_config())
}

/// Test server plus direct access to its state
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let state = test_state().await;
        let server = TestServer::new(create_router(state.clone())).expect("Failed to start test server");
        Self { server, state }
    }

    pub async fn register(&self, username: &str, password: &str) -> TestResponse {
        self.server
            .post("/api/auth/register")
            .json(&json!({ "username": username, "password": password }))
            .await
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.server
            .post("/api/auth/login")
            .json(&json!({ "username": username, "password": password }))
            .await
    }

    /// Register `username` and return a token for it
    pub async fn signed_up(&self, username: &str) -> String {
        self.register(username, TEST_PASSWORD).await.assert_status(StatusCode::CREATED);
        let body: Value = self.login(username, TEST_PASSWORD).await.json();
        body["token"].as_str().expect("login returns a token").to_string()
    }

    pub async fn create_thread(&self, token: &str, body: Value) -> TestResponse {
        self.server
            .post("/api/threads")
            .authorization_bearer(token)
            .json(&body)
            .await
    }

    /// Create a thread and return its id
    pub async fn thread_id(&self, token: &str, value: f64) -> String {
        let response = self.create_thread(token, json!({ "value": value })).await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        body["id"].as_str().expect("thread has an id").to_string()
    }

    pub async fn create_operation(&self, token: &str, body: Value) -> TestResponse {
        self.server
            .post("/api/operations")
            .authorization_bearer(token)
            .json(&body)
            .await
    }

    /// Create an operation and return the created node
    pub async fn operation(
        &self,
        token: &str,
        thread_id: &str,
        parent_id: Option<&str>,
        operation: &str,
        right_operand: f64,
    ) -> Value {
        let response = self
            .create_operation(
                token,
                json!({
                    "threadId": thread_id,
                    "parentId": parent_id,
                    "operation": operation,
                    "rightOperand": right_operand,
                }),
            )
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }

    pub async fn tree(&self, thread_id: &str) -> TestResponse {
        self.server.get(&format!("/api/threads/{}/tree", thread_id)).await
    }

    pub async fn threads(&self) -> Vec<Value> {
        let response = self.server.get("/api/threads").await;
        response.assert_status_ok();
        response.json()
    }
}

/// Assert the status and the `{message, status}` error body
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status_code(), status, "body: {}", response.text());
    let body: Value = response.json();
    assert_eq!(body["message"], message);
    assert_eq!(body["status"], status.as_u16());
}
