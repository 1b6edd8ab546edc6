//! HTTP transport layer for the Infomaniak SDK.

use crate::config::ClientConfig;
use crate::error::{InfomaniakError, InfomaniakResult};
use reqwest::{header, Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP transport for making API requests.
///
/// Issues exactly one request per call: no retries, no queueing. Cheap to
/// clone and safe to share between concurrent tasks.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> InfomaniakResult<Self> {
        let mut headers = header::HeaderMap::new();

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|_| InfomaniakError::Config("Invalid API token format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given path.
    ///
    /// The result always stays on the origin of the configured base URL; the
    /// bearer token is never sent anywhere else.
    fn build_url(&self, path: &str) -> InfomaniakResult<url::Url> {
        let url = self.config.base_url.join(path)?;
        if url.origin() != self.config.base_url.origin() {
            return Err(InfomaniakError::InvalidInput(format!(
                "path '{}' does not resolve to the API host",
                path
            )));
        }
        Ok(url)
    }

    /// Send a request and normalize the response.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> InfomaniakResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Infomaniak API returned an error");
            return Err(InfomaniakError::from_response(status.as_u16(), &body));
        }

        if body.trim().is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Execute a request with an arbitrary method, optional body and query.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &[(String, String)],
    ) -> InfomaniakResult<T> {
        let url = self.build_url(path)?;
        debug!(method = %method, url = %url, "Request");

        let mut request = self.client.request(method, url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> InfomaniakResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        self.execute(self.client.get(url)).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> InfomaniakResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request with query");

        self.execute(self.client.get(url).query(query)).await
    }

    /// Execute a POST request.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> InfomaniakResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        self.execute(self.client.post(url).json(body)).await
    }

    /// Execute a POST request without a request body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> InfomaniakResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request (no body)");

        self.execute(self.client.post(url)).await
    }

    /// Execute a PUT request.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> InfomaniakResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "PUT request");

        self.execute(self.client.put(url).json(body)).await
    }

    /// Execute a DELETE request.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> InfomaniakResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "DELETE request");

        self.execute(self.client.delete(url)).await
    }
}
