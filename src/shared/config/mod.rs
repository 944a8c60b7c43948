//! Application configuration module
//!
//! Configuration types shared by the server and the desktop client, and the
//! error type both report when a setting is missing or malformed.

use thiserror::Error;

/// Desktop client configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Server URL, without the `/api` suffix
    pub server_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build the configuration
    ///
    /// The URL must use `http` or `https`; a trailing slash is dropped.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let server_url = match self.server_url {
            Some(url) => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidUrl(url));
                }
                Some(url.trim_end_matches('/').to_string())
            }
            None => None,
        };
        Ok(AppConfig { server_url })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}
