/**
 * Authentication Handler Types
 *
 * Request payloads accepted by the register and login handlers. Fields are
 * optional so that a missing field reaches the handler and produces the
 * documented 400 message instead of a generic body rejection.
 *
 * Response bodies are the shared `RegisteredUser` and `LoginResponse` types.
 */

use serde::Deserialize;

/// Register or login request
///
/// Contains the username and password.
#[derive(Deserialize, Debug, Default)]
pub struct CredentialsPayload {
    /// User's chosen username
    #[serde(default)]
    pub username: Option<String>,
    /// User's password (hashed before storage, never logged)
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsPayload {
    /// Both fields when present and non-empty
    pub fn into_parts(self) -> Option<(String, String)> {
        match (self.username, self.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some((username, password))
            }
            _ => None,
        }
    }
}
