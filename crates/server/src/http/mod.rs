use crate::config::SessionMode;
use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use infomaniak_mcp::protocol::{JsonRpcError, JsonRpcResponse};
use infomaniak_mcp::McpServer;
use serde_json::Value;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

mod handlers;
mod sessions;

pub use sessions::SessionRegistry;

/// Header carrying the session identifier
pub const MCP_SESSION_ID: &str = "mcp-session-id";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub server: McpServer,
    pub sessions: Arc<SessionRegistry>,
    pub mode: SessionMode,
}

impl AppState {
    pub fn new(server: McpServer, sessions: Arc<SessionRegistry>, mode: SessionMode) -> Self {
        Self {
            server,
            sessions,
            mode,
        }
    }
}

/// Start the HTTP session adapter and serve until Ctrl-C
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let sessions = state.sessions.clone();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("MCP HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sessions))
        .await?;

    Ok(())
}

async fn shutdown_signal(sessions: Arc<SessionRegistry>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        return;
    }
    if sessions.is_empty() {
        tracing::info!("Shutting down");
        return;
    }
    let closed = sessions.close_all();
    tracing::info!(closed, "Shutting down, sessions closed");
}

/// Create the HTTP router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/mcp",
            get(handlers::open_stream)
                .post(handlers::submit)
                .delete(handlers::terminate),
        )
        .route("/sessions", get(list_sessions))
        .route("/health", get(health_check))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": infomaniak_mcp::server::SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "transport": "http",
        "session_mode": state.mode.as_str(),
        "active_sessions": state.sessions.len(),
    }))
}

async fn list_sessions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let sessions = state.sessions.list();
    Json(serde_json::json!({
        "count": sessions.len(),
        "sessions": sessions,
    }))
}

/// Transport-level rejection, answered without reaching the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Missing or unknown session identifier
    NoValidSession,
    /// `initialize` sent on an already established session
    AlreadyInitialized,
    /// DELETE of an unknown session
    NotFound,
    /// Verb not available in stateless mode
    MethodNotAllowed,
    /// Body is not JSON
    Parse,
}

impl SessionError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NoValidSession | Self::AlreadyInitialized | Self::Parse => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn rpc_error(&self) -> JsonRpcError {
        match self {
            Self::NoValidSession => {
                JsonRpcError::custom(-32000, "Bad Request: No valid session ID provided")
            }
            Self::AlreadyInitialized => {
                JsonRpcError::custom(-32600, "Invalid Request: Server already initialized")
            }
            Self::NotFound => JsonRpcError::custom(-32001, "Session not found"),
            Self::MethodNotAllowed => JsonRpcError::custom(-32000, "Method not allowed"),
            Self::Parse => JsonRpcError::parse_error(),
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let body = JsonRpcResponse::error(Value::Null, self.rpc_error());
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests;
