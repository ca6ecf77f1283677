//! Process configuration
//!
//! Read once at startup and treated as read-only afterwards. A missing
//! provider credential disables the headline fetcher with a clear failure
//! instead of crashing the process.

use std::time::Duration;

/// Default provider API base URL
pub const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

/// Default port the HTTP server binds to
pub const DEFAULT_PORT: u16 = 4111;

/// Default bound on a single provider request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Process-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API credential; `None` disables headline fetching
    pub api_key: Option<String>,

    /// Provider API base URL
    pub base_url: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Timeout applied to each outbound provider request
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Reads `GNEWS_API_KEY`, `GNEWS_BASE_URL` and `PORT`; unset or empty
    /// values fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            api_key: env_non_empty("GNEWS_API_KEY"),
            base_url: env_non_empty("GNEWS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            port: env_non_empty("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Set the provider credential
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the provider base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the provider request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            port: DEFAULT_PORT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_api_key("key-123")
            .with_base_url("http://127.0.0.1:9999")
            .with_request_timeout(Duration::from_millis(100));

        assert_eq!(config.api_key.as_deref(), Some("key-123"));
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.request_timeout, Duration::from_millis(100));
    }
}
