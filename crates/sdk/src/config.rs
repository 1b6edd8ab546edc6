//! Configuration types for the Infomaniak SDK.

use std::time::Duration;
use url::Url;

/// Default endpoint of the Infomaniak API.
pub const DEFAULT_BASE_URL: &str = "https://api.infomaniak.com";

/// Configuration for the Infomaniak client.
///
/// Read-only once the client is built; shared by every in-flight request.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the Infomaniak API.
    pub base_url: Url,
    /// Bearer token sent with every request.
    pub api_token: String,
    /// Optional per-request timeout. Requests wait indefinitely when unset.
    pub timeout: Option<Duration>,
    /// User agent reported to the API.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL and token.
    pub fn new(base_url: Url, api_token: impl Into<String>) -> Self {
        Self {
            base_url,
            api_token: api_token.into(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

pub fn default_user_agent() -> String {
    format!("infomaniak-mcp/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_new() {
        let url = Url::parse("https://example.com").unwrap();
        let config = ClientConfig::new(url.clone(), "tok");

        assert_eq!(config.base_url, url);
        assert_eq!(config.api_token, "tok");
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("infomaniak-mcp/"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new(Url::parse(DEFAULT_BASE_URL).unwrap(), "secret-token");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
