/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * opens the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables (a `.env` file is
 * honoured by the server binary):
 *
 * - `DATABASE_URL` - required, e.g. `sqlite://number_talk.db`
 * - `JWT_SECRET` - token signing secret, falls back to a development value
 * - `SERVER_PORT` - listen port, default 4000
 * - `BCRYPT_COST` - bcrypt work factor, default 10
 *
 * The token lifetime is fixed at one day.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::shared::ConfigError;

/// Default listen port
pub const DEFAULT_PORT: u16 = 4000;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Lifetime of every issued token
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Secret used when `JWT_SECRET` is not set
const DEV_JWT_SECRET: &str = "dev-secret";

/// Token and password settings used by the auth handlers and middleware
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify tokens
    pub jwt_secret: String,
    /// How long an issued token stays valid
    pub token_lifetime: Duration,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_lifetime: TOKEN_LIFETIME,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_lifetime", &self.token_lifetime)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Used by `from_env` and by tests that must not touch the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingValue("DATABASE_URL"))?;

        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                DEV_JWT_SECRET.to_string()
            }
        };

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                message: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => {
                let cost = raw.parse::<u32>().map_err(|e| ConfigError::InvalidValue {
                    key: "BCRYPT_COST",
                    message: e.to_string(),
                })?;
                if !(4..=31).contains(&cost) {
                    return Err(ConfigError::InvalidValue {
                        key: "BCRYPT_COST",
                        message: format!("{} is outside 4..=31", cost),
                    });
                }
                cost
            }
            None => DEFAULT_BCRYPT_COST,
        };

        Ok(Self {
            database_url,
            port,
            auth: AuthConfig::new(jwt_secret).with_bcrypt_cost(bcrypt_cost),
        })
    }
}

/// Open the SQLite connection pool and run embedded migrations
///
/// File databases are created when missing. In-memory URLs get a single
/// connection that is never recycled, since every SQLite connection to
/// `:memory:` opens a fresh, empty database.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(8)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.auth.jwt_secret, DEV_JWT_SECRET);
        assert_eq!(config.auth.bcrypt_cost, DEFAULT_BCRYPT_COST);
        assert_eq!(config.auth.token_lifetime, Duration::from_secs(86_400));
    }

    #[test]
    fn test_missing_database_url() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingValue("DATABASE_URL"));
    }

    #[test]
    fn test_explicit_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite://data.db"),
            ("JWT_SECRET", "s3cret"),
            ("SERVER_PORT", "8080"),
            ("BCRYPT_COST", "4"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.auth.jwt_secret, "s3cret");
        assert_eq!(config.auth.bcrypt_cost, 4);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SERVER_PORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "SERVER_PORT", .. }));
    }

    #[test]
    fn test_bcrypt_cost_out_of_range() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BCRYPT_COST", "2"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "BCRYPT_COST", .. }));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let auth = AuthConfig::new("top-secret");
        assert!(!format!("{:?}", auth).contains("top-secret"));
    }

    #[tokio::test]
    async fn test_load_in_memory_database() {
        let pool = load_database("sqlite::memory:").await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
