/**
 * REST API Client
 *
 * Blocking HTTP client for the Number Talk API. Every call runs on a worker
 * thread spawned by the UI state, never on the egui thread.
 *
 * Non-2xx responses are decoded from the server's `{"message": ...}` body
 * into `ApiError::Server`.
 */

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::egui_app::config::Config;
use crate::shared::{
    Credentials, LoginResponse, NewOperation, NewThread, OperationNode, RegisteredUser,
    ThreadSummary, ThreadTree,
};

/// Errors returned by [`ApiClient`]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure or undecodable response body
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status
    #[error("{message} ({status})")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Whether the server refused the credentials or token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Server { status: 401, .. })
    }

    /// The server's message, or the transport error text
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { message, .. } => message.clone(),
            Self::Http(e) => format!("Network error: {}", e),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

/// Blocking client for the REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    http: Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// `GET /api/health`, returns the reported status
    pub fn health(&self) -> Result<String, ApiError> {
        let body: HealthBody = self.send(self.http.get(self.config.api_url("/api/health")))?;
        Ok(body.status)
    }

    /// `POST /api/auth/register`
    pub fn register(&self, credentials: &Credentials) -> Result<RegisteredUser, ApiError> {
        self.send(
            self.http
                .post(self.config.api_url("/api/auth/register"))
                .json(credentials),
        )
    }

    /// `POST /api/auth/login`
    pub fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.send(
            self.http
                .post(self.config.api_url("/api/auth/login"))
                .json(credentials),
        )
    }

    /// Register, then log in with the same credentials
    pub fn register_and_login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let user = self.register(credentials)?;
        tracing::info!("Registered {}", user.username);
        self.login(credentials)
    }

    /// `GET /api/threads`, newest first
    pub fn list_threads(&self) -> Result<Vec<ThreadSummary>, ApiError> {
        self.send(self.http.get(self.config.api_url("/api/threads")))
    }

    /// `POST /api/threads`
    pub fn create_thread(&self, token: &str, value: f64) -> Result<ThreadSummary, ApiError> {
        self.send(
            self.http
                .post(self.config.api_url("/api/threads"))
                .bearer_auth(token)
                .json(&NewThread { value }),
        )
    }

    /// `POST /api/operations`
    pub fn create_operation(
        &self,
        token: &str,
        operation: &NewOperation,
    ) -> Result<OperationNode, ApiError> {
        self.send(
            self.http
                .post(self.config.api_url("/api/operations"))
                .bearer_auth(token)
                .json(operation),
        )
    }

    /// `GET /api/threads/{id}/tree`
    pub fn fetch_tree(&self, thread_id: Uuid) -> Result<ThreadTree, ApiError> {
        let path = format!("/api/threads/{}/tree", thread_id);
        self.send(self.http.get(self.config.api_url(&path)))
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send()?;
        decode(response)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json()?);
    }

    let message = response
        .json::<ErrorBody>()
        .map(|body| body.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });
    tracing::warn!("API error {}: {}", status, message);

    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::Server {
            status: 401,
            message: "Invalid token".to_string(),
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Invalid token");

        let err = ApiError::Server {
            status: 400,
            message: "Division by zero is not allowed".to_string(),
        };
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "Division by zero is not allowed (400)");
    }
}
