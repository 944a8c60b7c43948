/**
 * Authentication State
 *
 * Holds the current session (if any) and the progress of a pending login or
 * registration.
 */

use crate::egui_app::session::Session;
use crate::shared::Credentials;

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State restored from a saved session
    pub fn with_session(session: Option<Session>) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.username.as_str())
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }
}

/// Build credentials from form input
///
/// The username is trimmed; both fields must be non-empty.
pub fn credentials_from_input(username: &str, password: &str) -> Result<Credentials, String> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Username and password are required".to_string());
    }
    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
