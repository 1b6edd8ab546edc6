use super::{AppState, SessionError, MCP_SESSION_ID};
use crate::config::SessionMode;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    Json,
};
use futures::Stream;
use infomaniak_mcp::server::is_initialize;
use infomaniak_mcp::McpSession;
use serde_json::Value;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// Session header, if sent. A header that is not visible ASCII can never name
/// a session and is rejected rather than ignored.
fn session_id(headers: &HeaderMap) -> Result<Option<&str>, SessionError> {
    headers
        .get(MCP_SESSION_ID)
        .map(|value| value.to_str().map_err(|_| SessionError::NoValidSession))
        .transpose()
}

/// POST /mcp: submit one message or a batch
pub async fn submit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, SessionError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Unparseable request body");
        SessionError::Parse
    })?;

    if state.mode == SessionMode::Stateless {
        if session_id(&headers)?.is_some() {
            return Err(SessionError::NoValidSession);
        }
        let session = state.server.session();
        return Ok(reply(session.handle_payload(payload).await));
    }

    match session_id(&headers)? {
        Some(id) => {
            let session = state.sessions.get(id).ok_or(SessionError::NoValidSession)?;
            if is_initialize(&payload) {
                return Err(SessionError::AlreadyInitialized);
            }
            Ok(reply(session.handle_payload(payload).await))
        }
        None if is_initialize(&payload) => {
            let session = Arc::new(state.server.session());
            let result = session.handle_payload(payload).await;
            if !session.is_initialized() {
                return Ok(reply(result));
            }

            let id = state.sessions.insert(session);
            info!(session_id = %id, active = state.sessions.len(), "Session created");

            let mut response = reply(result);
            match HeaderValue::from_str(&id) {
                Ok(value) => {
                    response.headers_mut().insert(MCP_SESSION_ID, value);
                }
                Err(e) => warn!(error = %e, "Session id is not a valid header value"),
            }
            Ok(response)
        }
        None => Err(SessionError::NoValidSession),
    }
}

/// JSON answer, or 202 when the payload held nothing to answer
fn reply(result: Option<Value>) -> Response {
    match result {
        Some(body) => Json(body).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// GET /mcp: server-sent events for one session
pub async fn open_stream(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, SessionError> {
    if state.mode == SessionMode::Stateless {
        return Err(SessionError::MethodNotAllowed);
    }
    let id = session_id(&headers)?.ok_or(SessionError::NoValidSession)?;
    let session = state.sessions.get(id).ok_or(SessionError::NoValidSession)?;
    debug!(session_id = %id, "Event stream opened");

    Ok(Sse::new(event_stream(&session)).keep_alive(KeepAlive::new().interval(KEEP_ALIVE_INTERVAL)))
}

fn event_stream(session: &McpSession) -> impl Stream<Item = Result<Event, Infallible>> {
    let mut receiver = session.subscribe();
    async_stream::stream! {
        loop {
            match receiver.recv().await {
                Ok(message) => match Event::default().event("message").json_data(&message) {
                    Ok(event) => yield Ok(event),
                    Err(e) => warn!(error = %e, "Failed to encode event"),
                },
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Event stream fell behind, messages dropped");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}

/// DELETE /mcp: terminate a session
pub async fn terminate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, SessionError> {
    if state.mode == SessionMode::Stateless {
        return Err(SessionError::MethodNotAllowed);
    }
    let id = session_id(&headers)?.ok_or(SessionError::NoValidSession)?;
    if !state.sessions.remove(id) {
        return Err(SessionError::NotFound);
    }

    info!(session_id = %id, active = state.sessions.len(), "Session closed");
    Ok(StatusCode::OK)
}
