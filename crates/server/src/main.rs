use anyhow::{Context, Result};
use clap::Parser;
use infomaniak_mcp::{stdio, Dispatcher, McpServer};
use infomaniak_sdk::InfomaniakClient;
use std::path::PathBuf;
use std::sync::Arc;

mod config;
mod http;

use config::{FileConfig, LogFormat, Overrides, ServerConfig, SessionMode, Transport};

#[derive(Parser, Debug)]
#[command(name = "infomaniak-mcp")]
#[command(version, about = "MCP server exposing the Infomaniak API as tools", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "infomaniak-mcp.toml")]
    config: PathBuf,

    /// Infomaniak API token
    #[arg(long, env = "INFOMANIAK_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Base URL of the Infomaniak API
    #[arg(long, env = "INFOMANIAK_API_URL")]
    api_url: Option<String>,

    /// Per-request timeout in seconds (no timeout when unset)
    #[arg(long, env = "INFOMANIAK_REQUEST_TIMEOUT")]
    request_timeout: Option<u64>,

    /// Transport to serve on
    #[arg(long, env = "MCP_TRANSPORT", value_enum)]
    transport: Option<Transport>,

    /// Host to bind to (http transport)
    #[arg(long, env = "MCP_HOST")]
    host: Option<String>,

    /// Port to listen on (http transport)
    #[arg(short, long, env = "MCP_PORT")]
    port: Option<u16>,

    /// Session handling (http transport)
    #[arg(long, env = "MCP_SESSION_MODE", value_enum)]
    session_mode: Option<SessionMode>,

    /// Log output format
    #[arg(long, env = "MCP_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            api_token: self.api_token.clone(),
            api_url: self.api_url.clone(),
            request_timeout: self.request_timeout,
            transport: self.transport,
            host: self.host.clone(),
            port: self.port,
            session_mode: self.session_mode,
        }
    }
}

fn init_tracing(format: LogFormat) {
    // stdout carries the stdio protocol, so logs always go to stderr
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "infomaniak=info,tower_http=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn build_client(config: &ServerConfig) -> Result<InfomaniakClient> {
    let mut builder = InfomaniakClient::builder()
        .base_url(config.api_url.clone())
        .api_token(config.api_token.clone());
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().context("Failed to create Infomaniak client")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_format);

    let file = FileConfig::load(&args.config)?;
    let config = ServerConfig::resolve(args.overrides(), file)?;

    tracing::info!(
        transport = ?config.transport,
        api_url = %config.api_url,
        timeout_secs = config.request_timeout.map(|t| t.as_secs()),
        "Starting Infomaniak MCP server"
    );

    let client = build_client(&config)?;
    let server = McpServer::new(Dispatcher::new(client));
    tracing::info!("Registered {} tools", server.dispatcher().tool_count());

    match config.transport {
        Transport::Stdio => {
            let session = server.session();
            stdio::run(&session).await?;
        }
        Transport::Http => {
            let state = http::AppState::new(
                server,
                Arc::new(http::SessionRegistry::new()),
                config.session_mode,
            );
            tracing::info!(session_mode = config.session_mode.as_str(), "Serving MCP over HTTP");
            http::serve(&config.bind_addr(), state).await?;
        }
    }

    Ok(())
}
