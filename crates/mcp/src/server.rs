// MCP server implementation: per-session JSON-RPC handling

use crate::dispatcher::Dispatcher;
use crate::protocol::*;
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

pub const SERVER_NAME: &str = "infomaniak-mcp";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Logger name carried by `notifications/message`
pub const LOGGER_NAME: &str = "infomaniak";

const NOTIFICATION_CAPACITY: usize = 64;

const INSTRUCTIONS: &str = "Tools for the Infomaniak API. Most tools need an identifier \
(account_id, mail_hosting_id, hosting_id, vps_id, drive_id); start with \
infomaniak_list_accounts or infomaniak_list_products to discover them.";

/// Shared server state: the dispatcher every session routes tool calls to.
#[derive(Clone)]
pub struct McpServer {
    dispatcher: Dispatcher,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Open a fresh protocol session
    pub fn session(&self) -> McpSession {
        McpSession::new(self.dispatcher.clone())
    }
}

#[derive(Debug, Default)]
struct SessionState {
    initialized: bool,
    client: Option<ClientInfo>,
    log_level: Option<LoggingLevel>,
}

/// One protocol conversation with one client.
///
/// Requests are answered independently; concurrent calls on the same session
/// are not serialized. Server-initiated messages go out through
/// [`McpSession::subscribe`].
pub struct McpSession {
    dispatcher: Dispatcher,
    state: Mutex<SessionState>,
    notifier: broadcast::Sender<JsonRpcRequest>,
}

impl McpSession {
    pub fn new(dispatcher: Dispatcher) -> Self {
        let (notifier, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        Self {
            dispatcher,
            state: Mutex::new(SessionState::default()),
            notifier,
        }
    }

    /// Receive the notifications this session emits from now on
    pub fn subscribe(&self) -> broadcast::Receiver<JsonRpcRequest> {
        self.notifier.subscribe()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.lock().initialized
    }

    pub fn client_info(&self) -> Option<ClientInfo> {
        self.state.lock().client.clone()
    }

    pub fn log_level(&self) -> Option<LoggingLevel> {
        self.state.lock().log_level
    }

    /// Handle a decoded JSON payload: one message or a batch.
    ///
    /// Returns `None` when nothing needs answering (notifications and client
    /// responses only).
    pub async fn handle_payload(&self, payload: Value) -> Option<Value> {
        match payload {
            Value::Array(items) => {
                if items.is_empty() {
                    return Some(error_value(Value::Null, JsonRpcError::invalid_request()));
                }
                let mut responses = Vec::new();
                for item in items {
                    if let Some(response) = self.handle_value(item).await {
                        responses.push(response);
                    }
                }
                if responses.is_empty() {
                    None
                } else {
                    Some(Value::Array(responses))
                }
            }
            other => self.handle_value(other).await,
        }
    }

    async fn handle_value(&self, value: Value) -> Option<Value> {
        let Some(object) = value.as_object() else {
            return Some(error_value(Value::Null, JsonRpcError::invalid_request()));
        };

        if !object.contains_key("method") {
            if object.contains_key("result") || object.contains_key("error") {
                debug!("Ignoring client response");
                return None;
            }
            let id = object.get("id").cloned().unwrap_or(Value::Null);
            return Some(error_value(id, JsonRpcError::invalid_request()));
        }

        let id = object.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Malformed JSON-RPC request");
                return Some(error_value(id, JsonRpcError::invalid_request()));
            }
        };
        if request.jsonrpc != JSONRPC_VERSION {
            return Some(error_value(id, JsonRpcError::invalid_request()));
        }

        self.handle_message(request)
            .await
            .and_then(|response| serde_json::to_value(response).ok())
    }

    /// Handle one JSON-RPC request or notification
    pub async fn handle_message(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id.clone() else {
            self.handle_notification(&request);
            return None;
        };

        debug!(method = %request.method, "Handling request");
        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id, request.params),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.handle_list_tools(id),
            "tools/call" => self.handle_call_tool(id, request.params).await,
            "logging/setLevel" => self.handle_set_level(id, request.params),
            method => JsonRpcResponse::error(id, JsonRpcError::method_not_found(method)),
        };
        Some(response)
    }

    fn handle_notification(&self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" => debug!("Client finished initialization"),
            "notifications/cancelled" => debug!("Client cancelled a request"),
            other => debug!(method = other, "Ignoring notification"),
        }
    }

    fn handle_initialize(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: InitializeParams = match params.map(serde_json::from_value).transpose() {
            Ok(Some(params)) => params,
            Ok(None) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params("initialize requires params"),
                )
            }
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params(format!("Invalid initialize params: {}", e)),
                )
            }
        };

        let protocol_version = negotiate_protocol_version(&params.protocol_version);
        info!(
            client = %params.client_info.name,
            client_version = %params.client_info.version,
            protocol_version,
            "Client initialized"
        );

        {
            let mut state = self.state.lock();
            state.initialized = true;
            state.client = Some(params.client_info);
        }

        let result = InitializeResult {
            protocol_version: protocol_version.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
                logging: Some(json!({})),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        };
        to_response(id, &result)
    }

    fn handle_list_tools(&self, id: Value) -> JsonRpcResponse {
        let result = ListToolsResult {
            tools: self.dispatcher.list_tools(),
        };
        to_response(id, &result)
    }

    async fn handle_call_tool(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e)),
                )
            }
            None => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params("tools/call requires params"),
                )
            }
        };

        let result = self
            .dispatcher
            .call_tool(&params.name, params.arguments.as_ref())
            .await;
        self.notify_tool_outcome(&params.name, &result);
        to_response(id, &result)
    }

    fn handle_set_level(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: SetLevelParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params(format!("Invalid logging/setLevel params: {}", e)),
                )
            }
            None => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params("logging/setLevel requires params"),
                )
            }
        };

        debug!(level = ?params.level, "Client log level set");
        self.state.lock().log_level = Some(params.level);
        JsonRpcResponse::success(id, json!({}))
    }

    fn notify_tool_outcome(&self, tool: &str, result: &CallToolResult) {
        let Some(threshold) = self.log_level() else {
            return;
        };
        let (level, outcome) = if result.is_error() {
            (LoggingLevel::Error, "error")
        } else {
            (LoggingLevel::Info, "success")
        };
        if level < threshold {
            return;
        }

        let params = LoggingMessageParams {
            level,
            logger: Some(LOGGER_NAME.to_string()),
            data: json!({ "tool": tool, "outcome": outcome }),
        };
        match serde_json::to_value(params) {
            Ok(params) => {
                // No receiver just means nobody is listening right now.
                let _ = self
                    .notifier
                    .send(JsonRpcRequest::notification("notifications/message", params));
            }
            Err(e) => warn!(error = %e, "Failed to encode log notification"),
        }
    }
}

/// Whether a payload is (or, for a batch, contains) an `initialize` request
pub fn is_initialize(payload: &Value) -> bool {
    match payload {
        Value::Array(items) => items.iter().any(is_initialize),
        Value::Object(object) => object.get("method").and_then(Value::as_str) == Some("initialize"),
        _ => false,
    }
}

fn to_response<T: serde::Serialize>(id: Value, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string())),
    }
}

fn error_value(id: Value, error: JsonRpcError) -> Value {
    json!(JsonRpcResponse::error(id, error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use infomaniak_sdk::InfomaniakClient;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session_for(base_url: &str) -> McpSession {
        let client = InfomaniakClient::builder()
            .base_url(base_url)
            .api_token("tok")
            .build()
            .unwrap();
        McpServer::new(Dispatcher::new(client)).session()
    }

    fn session() -> McpSession {
        session_for("http://127.0.0.1:9")
    }

    fn initialize_request(id: i64, version: &str) -> Value {
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "initialize",
            "params": {
                "protocolVersion": version,
                "capabilities": {},
                "clientInfo": {"name": "test-client", "version": "1.0"}
            }
        })
    }

    #[tokio::test]
    async fn test_initialize() {
        let session = session();
        let response = session
            .handle_payload(initialize_request(1, "2025-03-26"))
            .await
            .unwrap();

        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], "2025-03-26");
        assert_eq!(response["result"]["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(response["result"]["capabilities"]["tools"]["listChanged"], false);
        assert!(session.is_initialized());
        assert_eq!(session.client_info().unwrap().name, "test-client");
    }

    #[tokio::test]
    async fn test_initialize_unknown_version_gets_latest() {
        let response = session()
            .handle_payload(initialize_request(1, "2023-01-01"))
            .await
            .unwrap();
        assert_eq!(response["result"]["protocolVersion"], LATEST_PROTOCOL_VERSION);
    }

    #[tokio::test]
    async fn test_tools_list() {
        let response = session()
            .handle_payload(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}))
            .await
            .unwrap();

        let tools = response["result"]["tools"].as_array().unwrap();
        assert!(tools.len() >= 50);
        assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let response = session()
            .handle_payload(json!({"jsonrpc": "2.0", "id": 3, "method": "resources/list"}))
            .await
            .unwrap();
        assert_eq!(response["error"]["code"], -32601);
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let session = session();
        let response = session
            .handle_payload(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
            .await;
        assert!(response.is_none());

        let response = session
            .handle_payload(json!({"jsonrpc": "2.0", "id": 9, "result": {}}))
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_invalid_requests() {
        let session = session();

        let response = session.handle_payload(json!(42)).await.unwrap();
        assert_eq!(response["error"]["code"], -32600);
        assert!(response["id"].is_null());

        let response = session.handle_payload(json!([])).await.unwrap();
        assert_eq!(response["error"]["code"], -32600);

        let response = session
            .handle_payload(json!({"jsonrpc": "1.0", "id": 4, "method": "ping"}))
            .await
            .unwrap();
        assert_eq!(response["error"]["code"], -32600);
        assert_eq!(response["id"], 4);
    }

    #[tokio::test]
    async fn test_tools_call_bad_params() {
        let response = session()
            .handle_payload(json!({"jsonrpc": "2.0", "id": 5, "method": "tools/call", "params": {"arguments": {}}}))
            .await
            .unwrap();
        assert_eq!(response["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_tools_call_failure_is_a_result() {
        let response = session()
            .handle_payload(json!({
                "jsonrpc": "2.0",
                "id": 6,
                "method": "tools/call",
                "params": {"name": "infomaniak_does_not_exist", "arguments": {}}
            }))
            .await
            .unwrap();

        assert!(response.get("error").is_none());
        assert_eq!(response["result"]["isError"], true);
        assert_eq!(
            response["result"]["content"][0]["text"],
            "Error: Unknown tool: infomaniak_does_not_exist"
        );
    }

    #[tokio::test]
    async fn test_batch() {
        let response = session()
            .handle_payload(json!([
                {"jsonrpc": "2.0", "id": 1, "method": "ping"},
                {"jsonrpc": "2.0", "method": "notifications/initialized"},
                {"jsonrpc": "2.0", "id": 2, "method": "ping"}
            ]))
            .await
            .unwrap();

        let responses = response.as_array().unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_log_notifications_after_set_level() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1/countries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
            .mount(&server)
            .await;

        let session = session_for(&server.uri());
        let mut notifications = session.subscribe();
        let call = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "infomaniak_list_countries"}
        });

        session.handle_payload(call.clone()).await.unwrap();
        assert!(notifications.try_recv().is_err());

        session
            .handle_payload(json!({"jsonrpc": "2.0", "id": 2, "method": "logging/setLevel", "params": {"level": "info"}}))
            .await
            .unwrap();
        assert_eq!(session.log_level(), Some(LoggingLevel::Info));

        session.handle_payload(call).await.unwrap();
        let notification = notifications.try_recv().unwrap();
        assert_eq!(notification.method, "notifications/message");
        let params = notification.params.unwrap();
        assert_eq!(params["level"], "info");
        assert_eq!(params["logger"], LOGGER_NAME);
        assert_eq!(params["data"], json!({"tool": "infomaniak_list_countries", "outcome": "success"}));
    }

    #[tokio::test]
    async fn test_error_threshold_filters_success() {
        let session = session();
        let mut notifications = session.subscribe();
        session
            .handle_payload(json!({"jsonrpc": "2.0", "id": 1, "method": "logging/setLevel", "params": {"level": "error"}}))
            .await
            .unwrap();

        session
            .handle_payload(json!({
                "jsonrpc": "2.0",
                "id": 2,
                "method": "tools/call",
                "params": {"name": "infomaniak_get_account", "arguments": {}}
            }))
            .await
            .unwrap();

        let notification = notifications.try_recv().unwrap();
        assert_eq!(notification.params.unwrap()["level"], "error");
    }

    #[test]
    fn test_is_initialize() {
        assert!(is_initialize(&initialize_request(1, "2025-06-18")));
        assert!(is_initialize(&json!([{"jsonrpc": "2.0", "id": 1, "method": "initialize"}])));
        assert!(!is_initialize(&json!({"jsonrpc": "2.0", "id": 1, "method": "ping"})));
        assert!(!is_initialize(&json!("initialize")));
    }
}
