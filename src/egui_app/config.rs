use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:4000";

/// Client configuration wrapper.
///
/// The server URL comes from `CLIENT_API_URL` when set and valid.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env_value(std::env::var("CLIENT_API_URL").ok())
    }
}

impl Config {
    /// Create a new configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self { app: builder.build()? })
    }

    /// Configuration pointing at `url`
    pub fn with_server_url(url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder().server_url(url))
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(url) => Self::with_server_url(url).unwrap_or_else(|e| {
                tracing::warn!("Ignoring CLIENT_API_URL: {}", e);
                Self { app: AppConfig::default() }
            }),
            None => Self { app: AppConfig::default() },
        }
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let config = Config::from_env_value(None);
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_env_url() {
        let config = Config::from_env_value(Some("http://api.example.com:8080/".to_string()));
        assert_eq!(config.server_url(), "http://api.example.com:8080");
    }

    #[test]
    fn test_invalid_env_url_falls_back() {
        let config = Config::from_env_value(Some("localhost:4000".to_string()));
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_api_url() {
        let config = Config::from_env_value(None);
        let url = config.api_url("/api/auth/login");
        assert_eq!(url, "http://127.0.0.1:4000/api/auth/login");
    }

    #[test]
    fn test_with_server_url_rejects_bad_scheme() {
        assert!(Config::with_server_url("ws://127.0.0.1:4000").is_err());
    }
}
