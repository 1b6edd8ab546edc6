use anyhow::{Context, Result};
use clap::ValueEnum;
use infomaniak_sdk::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Where API tokens are managed
pub const TOKEN_HELP_URL: &str = "https://manager.infomaniak.com/v3/ng/accounts/token/list";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Stdio,
    Http,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    #[default]
    Stateful,
    Stateless,
}

impl SessionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stateful => "stateful",
            Self::Stateless => "stateless",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Contents of the optional TOML configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiSection,

    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSection {
    pub transport: Option<Transport>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub session_mode: Option<SessionMode>,
}

impl FileConfig {
    /// Load the file if it exists, otherwise use defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }
}

/// Settings given on the command line or through the environment.
///
/// Anything set here wins over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_token: Option<String>,
    pub api_url: Option<String>,
    pub request_timeout: Option<u64>,
    pub transport: Option<Transport>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub session_mode: Option<SessionMode>,
}

/// Fully resolved process configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub api_token: String,
    pub api_url: String,
    pub request_timeout: Option<Duration>,
    pub transport: Transport,
    pub host: String,
    pub port: u16,
    pub session_mode: SessionMode,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .field("transport", &self.transport)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("session_mode", &self.session_mode)
            .finish()
    }
}

impl ServerConfig {
    /// Merge overrides over the file over built-in defaults.
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Self> {
        let api_token = overrides
            .api_token
            .filter(|token| !token.trim().is_empty())
            .with_context(|| {
                format!(
                    "INFOMANIAK_API_TOKEN is not set. Create an API token at {} \
                     and export it as INFOMANIAK_API_TOKEN (or pass --api-token)",
                    TOKEN_HELP_URL
                )
            })?;

        let timeout_secs = overrides.request_timeout.or(file.api.timeout_secs);

        Ok(Self {
            api_token,
            api_url: overrides
                .api_url
                .or(file.api.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout: timeout_secs.map(Duration::from_secs),
            transport: overrides
                .transport
                .or(file.server.transport)
                .unwrap_or_default(),
            host: overrides
                .host
                .or(file.server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            session_mode: overrides
                .session_mode
                .or(file.server.session_mode)
                .unwrap_or_default(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
