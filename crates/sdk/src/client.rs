//! Main client for the Infomaniak SDK.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{InfomaniakError, InfomaniakResult};
use crate::transport::HttpTransport;
use reqwest::Method;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the Infomaniak API.
///
/// The configuration is immutable after construction, so clones can be used
/// from any number of concurrent tasks.
#[derive(Debug, Clone)]
pub struct InfomaniakClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl InfomaniakClient {
    /// Create a new client builder.
    pub fn builder() -> InfomaniakClientBuilder {
        InfomaniakClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> InfomaniakResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the accounts API (profile, accounts, users, products).
    pub fn accounts(&self) -> AccountsApi<'_> {
        AccountsApi::new(self)
    }

    /// Get the domains and DNS API.
    pub fn domains(&self) -> DomainsApi<'_> {
        DomainsApi::new(self)
    }

    /// Get the mail hosting API.
    pub fn mail(&self) -> MailApi<'_> {
        MailApi::new(self)
    }

    /// Get the web hosting API.
    pub fn hosting(&self) -> HostingApi<'_> {
        HostingApi::new(self)
    }

    /// Get the VPS API.
    pub fn vps(&self) -> VpsApi<'_> {
        VpsApi::new(self)
    }

    /// Get the kDrive API.
    pub fn drives(&self) -> DrivesApi<'_> {
        DrivesApi::new(self)
    }

    /// Get the API for backups, invoices and reference data.
    pub fn misc(&self) -> MiscApi<'_> {
        MiscApi::new(self)
    }

    /// Send an arbitrary request for endpoints without a dedicated method.
    ///
    /// `path` must start with a single `/` and always resolves against the
    /// configured base URL. Query values must be strings, numbers or booleans.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&Map<String, Value>>,
    ) -> InfomaniakResult<Value> {
        if !path.starts_with('/') {
            return Err(InfomaniakError::InvalidInput(format!(
                "path must start with '/', got '{}'",
                path
            )));
        }
        // `//host` and `/\host` are scheme-relative and would switch hosts
        if path.starts_with("//") || path.starts_with("/\\") {
            return Err(InfomaniakError::InvalidInput(format!(
                "path must not name a host, got '{}'",
                path
            )));
        }

        let mut params = Vec::new();
        for (key, value) in query.into_iter().flatten() {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => {
                    return Err(InfomaniakError::InvalidInput(format!(
                        "query parameter '{}' must be a string, number or boolean",
                        key
                    )));
                }
            };
            params.push((key.clone(), rendered));
        }

        self.http.request(method, path, body, &params).await
    }
}

/// Builder for creating an InfomaniakClient.
pub struct InfomaniakClientBuilder {
    base_url: String,
    api_token: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl InfomaniakClientBuilder {
    /// Create a new builder pointing at the public Infomaniak API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the base URL of the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bearer token used for authentication.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Bound every request to `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> InfomaniakResult<InfomaniakClient> {
        let api_token = self
            .api_token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| InfomaniakError::Config("api_token is required".to_string()))?;

        let base_url = Url::parse(&self.base_url)?;

        let mut config = ClientConfig::new(base_url, api_token);
        config.timeout = self.timeout;
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }

        InfomaniakClient::from_config(config)
    }
}

impl Default for InfomaniakClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
