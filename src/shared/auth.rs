//! Authentication wire types
//!
//! Bodies exchanged with `/api/auth/*`. The backend produces the response
//! types; the desktop client sends [`Credentials`] and decodes the responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Username/password pair sent to register and login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Public fields of a freshly registered user. Never carries the hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Identity shown next to threads and operations, and returned on login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
}

/// Successful login: a bearer token plus the user it was issued to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}
