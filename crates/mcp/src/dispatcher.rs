// Operation dispatch: validate, run the handler, wrap the outcome

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{self, ToolError, ToolRegistry};
use infomaniak_core::SchemaRegistry;
use infomaniak_sdk::InfomaniakClient;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Routes a named tool call to its handler.
///
/// Every call is validated against the operation's spec first; a handler only
/// ever sees arguments that passed. Cheap to clone.
#[derive(Clone)]
pub struct Dispatcher {
    schemas: Arc<SchemaRegistry>,
    tools: Arc<ToolRegistry>,
    client: InfomaniakClient,
}

impl Dispatcher {
    /// Dispatcher over the full Infomaniak catalog
    pub fn new(client: InfomaniakClient) -> Self {
        Self::with_registries(SchemaRegistry::infomaniak(), tools::infomaniak(), client)
    }

    pub fn with_registries(
        schemas: SchemaRegistry,
        tools: ToolRegistry,
        client: InfomaniakClient,
    ) -> Self {
        Self {
            schemas: Arc::new(schemas),
            tools: Arc::new(tools),
            client,
        }
    }

    /// Tool definitions, sorted by name
    pub fn list_tools(&self) -> Vec<ToolSchema> {
        self.schemas
            .list()
            .into_iter()
            .filter(|spec| self.tools.contains(spec.name))
            .map(|spec| ToolSchema {
                name: spec.name.to_string(),
                description: spec.description.to_string(),
                input_schema: spec.input_schema(),
            })
            .collect()
    }

    pub fn tool_count(&self) -> usize {
        self.list_tools().len()
    }

    /// Validate `args` and perform the single remote call behind `name`.
    pub async fn dispatch(&self, name: &str, args: Option<&Value>) -> Result<Value, ToolError> {
        let handler = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let validated = self
            .schemas
            .validate(name, args)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))??;

        debug!(tool = name, fields = validated.len(), "Dispatching tool call");
        handler.call(&self.client, validated).await
    }

    /// Dispatch and render the outcome as a tool result.
    ///
    /// Failures never escape as errors: they become `isError` results whose
    /// text starts with `Error: `.
    pub async fn call_tool(&self, name: &str, args: Option<&Value>) -> CallToolResult {
        match self.dispatch(name, args).await {
            Ok(payload) => match serde_json::to_string_pretty(&payload) {
                Ok(text) => CallToolResult::success(text),
                Err(e) => CallToolResult::failure(e.to_string()),
            },
            Err(e) => {
                warn!(tool = name, error = %e, "Tool call failed");
                CallToolResult::failure(e.to_string())
            }
        }
    }
}
