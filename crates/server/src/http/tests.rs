use super::*;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request};
use infomaniak_mcp::protocol::LoggingLevel;
use infomaniak_mcp::Dispatcher;
use infomaniak_sdk::InfomaniakClient;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn state_for(base_url: &str, mode: SessionMode) -> AppState {
    let client = InfomaniakClient::builder()
        .base_url(base_url)
        .api_token("tok")
        .build()
        .unwrap();
    AppState::new(
        McpServer::new(Dispatcher::new(client)),
        Arc::new(SessionRegistry::new()),
        mode,
    )
}

fn state(mode: SessionMode) -> AppState {
    state_for("http://127.0.0.1:9", mode)
}

fn initialize() -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-06-18",
            "capabilities": {},
            "clientInfo": {"name": "http-test", "version": "0.1"}
        }
    })
}

fn post(body: &Value, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/mcp")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(id) = session {
        builder = builder.header(MCP_SESSION_ID, id);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn bare(method: Method, uri: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = session {
        builder = builder.header(MCP_SESSION_ID, id);
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = create_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let session = response
        .headers()
        .get(MCP_SESSION_ID)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, session, body)
}

async fn open_session(state: &AppState) -> String {
    let (status, session, _) = send(state, post(&initialize(), None)).await;
    assert_eq!(status, StatusCode::OK);
    session.unwrap()
}

#[tokio::test]
async fn test_initialize_creates_session() {
    let state = state(SessionMode::Stateful);
    let (status, session, body) = send(&state, post(&initialize(), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["serverInfo"]["name"], "infomaniak-mcp");
    let id = session.unwrap();
    assert!(state.sessions.get(&id).unwrap().is_initialized());
    assert_eq!(state.sessions.len(), 1);
}

#[tokio::test]
async fn test_two_sessions_are_routed_separately() {
    let state = state(SessionMode::Stateful);
    let first = open_session(&state).await;
    let second = open_session(&state).await;
    assert_ne!(first, second);
    assert_eq!(state.sessions.len(), 2);

    let set_level = json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "logging/setLevel",
        "params": {"level": "warning"}
    });
    let (status, _, body) = send(&state, post(&set_level, Some(&first))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!({}));

    assert_eq!(
        state.sessions.get(&first).unwrap().log_level(),
        Some(LoggingLevel::Warning)
    );
    assert_eq!(state.sessions.get(&second).unwrap().log_level(), None);
}

#[tokio::test]
async fn test_request_without_session_is_rejected() {
    let state = state(SessionMode::Stateful);
    let ping = json!({"jsonrpc": "2.0", "id": 1, "method": "ping"});

    let (status, _, body) = send(&state, post(&ping, None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], -32000);
    assert_eq!(body["error"]["message"], "Bad Request: No valid session ID provided");

    let (status, _, body) = send(&state, post(&ping, Some("made-up"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], -32000);
    assert!(state.sessions.is_empty());
}

#[tokio::test]
async fn test_unreadable_session_header_is_rejected() {
    let stateless = state(SessionMode::Stateless);
    let state = state(SessionMode::Stateful);
    let garbled = axum::http::HeaderValue::from_bytes(b"caf\xE9").unwrap();
    let with_header = |method: Method, body: Body| {
        Request::builder()
            .method(method)
            .uri("/mcp")
            .header(header::CONTENT_TYPE, "application/json")
            .header(MCP_SESSION_ID, garbled.clone())
            .body(body)
            .unwrap()
    };

    let request = with_header(Method::POST, Body::from(initialize().to_string()));
    let (status, session, body) = send(&state, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(session.is_none());
    assert_eq!(body["error"]["code"], -32000);
    assert!(state.sessions.is_empty());

    let (status, _, _) = send(&state, with_header(Method::GET, Body::empty())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = send(&state, with_header(Method::DELETE, Body::empty())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = with_header(Method::POST, Body::from(initialize().to_string()));
    let (status, _, _) = send(&stateless, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reinitialize_is_rejected() {
    let state = state(SessionMode::Stateful);
    let id = open_session(&state).await;

    let (status, _, body) = send(&state, post(&initialize(), Some(&id))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Invalid Request: Server already initialized");
    assert_eq!(state.sessions.len(), 1);
}

#[tokio::test]
async fn test_failed_initialize_registers_nothing() {
    let state = state(SessionMode::Stateful);
    let broken = json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}});

    let (status, session, body) = send(&state, post(&broken, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(session.is_none());
    assert_eq!(body["error"]["code"], -32602);
    assert!(state.sessions.is_empty());
}

#[tokio::test]
async fn test_delete_session() {
    let state = state(SessionMode::Stateful);
    let id = open_session(&state).await;

    let (status, _, body) = send(&state, bare(Method::DELETE, "/mcp", Some("unknown"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Session not found");
    assert_eq!(state.sessions.len(), 1);

    let (status, _, _) = send(&state, bare(Method::DELETE, "/mcp", Some(&id))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(state.sessions.is_empty());

    let ping = json!({"jsonrpc": "2.0", "id": 1, "method": "ping"});
    let (status, _, _) = send(&state, post(&ping, Some(&id))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_notifications_are_accepted() {
    let state = state(SessionMode::Stateful);
    let id = open_session(&state).await;

    let initialized = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
    let (status, _, body) = send(&state, post(&initialized, Some(&id))).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_malformed_body() {
    let state = state(SessionMode::Stateful);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/mcp")
        .body(Body::from("{oops"))
        .unwrap();

    let (status, _, body) = send(&state, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], -32700);
}

#[tokio::test]
async fn test_tool_call_through_session() {
    let remote = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1/vps/77"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"result": "success", "data": {"id": 77}})),
        )
        .expect(1)
        .mount(&remote)
        .await;

    let state = state_for(&remote.uri(), SessionMode::Stateful);
    let id = open_session(&state).await;

    let call = json!({
        "jsonrpc": "2.0",
        "id": 3,
        "method": "tools/call",
        "params": {"name": "infomaniak_get_vps", "arguments": {"vps_id": 77}}
    });
    let (status, _, body) = send(&state, post(&call, Some(&id))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["result"].get("isError").is_none());

    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    let payload: Value = serde_json::from_str(text).unwrap();
    assert_eq!(payload["data"]["id"], 77);
}

#[tokio::test]
async fn test_stateless_mode() {
    let state = state(SessionMode::Stateless);

    let (status, session, body) = send(&state, post(&initialize(), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(session.is_none());
    assert_eq!(body["result"]["protocolVersion"], "2025-06-18");
    assert!(state.sessions.is_empty());

    let list = json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"});
    let (status, _, body) = send(&state, post(&list, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["result"]["tools"].as_array().unwrap().len() >= 50);

    let (status, _, _) = send(&state, post(&list, Some("anything"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = send(&state, bare(Method::GET, "/mcp", None)).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    let (status, _, _) = send(&state, bare(Method::DELETE, "/mcp", None)).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_event_stream_requires_session() {
    let state = state(SessionMode::Stateful);

    let (status, _, _) = send(&state, bare(Method::GET, "/mcp", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let id = open_session(&state).await;
    let response = create_router(state.clone())
        .oneshot(bare(Method::GET, "/mcp", Some(&id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/event-stream"
    );
}

#[tokio::test]
async fn test_health_and_sessions() {
    let state = state(SessionMode::Stateful);
    open_session(&state).await;

    let (status, _, body) = send(&state, bare(Method::GET, "/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["transport"], "http");
    assert_eq!(body["session_mode"], "stateful");
    assert_eq!(body["active_sessions"], 1);

    let (status, _, body) = send(&state, bare(Method::GET, "/sessions", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["sessions"][0]["client"]["name"], "http-test");
}
