// Registration table mapping tool names to their handlers

use infomaniak_core::{ValidatedArgs, ValidationError};
use infomaniak_sdk::{InfomaniakClient, InfomaniakError, InfomaniakResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

/// Why a tool call did not produce a payload.
///
/// The rendered message is what the calling agent sees.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] InfomaniakError),
}

/// Tool executor trait
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Perform the remote call for already validated arguments
    async fn call(&self, client: &InfomaniakClient, args: ValidatedArgs) -> Result<Value, ToolError>;
}

/// Handler taking its own typed argument struct.
struct TypedHandler<A, F> {
    handler: F,
    _args: PhantomData<fn() -> A>,
}

#[async_trait::async_trait]
impl<A, F, Fut> ToolHandler for TypedHandler<A, F>
where
    A: DeserializeOwned + Send + 'static,
    F: Fn(InfomaniakClient, A) -> Fut + Send + Sync,
    Fut: Future<Output = InfomaniakResult<Value>> + Send,
{
    async fn call(&self, client: &InfomaniakClient, args: ValidatedArgs) -> Result<Value, ToolError> {
        let typed: A = args.into_typed()?;
        Ok((self.handler)(client.clone(), typed).await?)
    }
}

/// Tool registry for managing available tools
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: HashMap<&'static str, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler receiving typed arguments.
    ///
    /// The validated argument bag is deserialized into `A` before `handler`
    /// runs, so handlers never see raw client input.
    pub fn register<A, F, Fut>(&mut self, name: &'static str, handler: F)
    where
        A: DeserializeOwned + Send + 'static,
        F: Fn(InfomaniakClient, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = InfomaniakResult<Value>> + Send + 'static,
    {
        self.register_handler(
            name,
            Arc::new(TypedHandler {
                handler,
                _args: PhantomData,
            }),
        );
    }

    /// Register a handler object
    pub fn register_handler(&mut self, name: &'static str, handler: Arc<dyn ToolHandler>) {
        if self.tools.insert(name, handler).is_some() {
            tracing::warn!(tool = name, "Tool handler registered twice");
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.tools.get(name).cloned()
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.tools.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infomaniak_core::{validate, FieldRule, OperationSpec};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct EchoArgs {
        value: u64,
    }

    fn client() -> InfomaniakClient {
        InfomaniakClient::builder().api_token("tok").build().unwrap()
    }

    #[tokio::test]
    async fn test_typed_handler_receives_struct() {
        let mut registry = ToolRegistry::new();
        registry.register("echo", |_client, args: EchoArgs| async move {
            Ok(json!({ "doubled": args.value * 2 }))
        });

        let spec = OperationSpec::new("echo", "Echo").field(FieldRule::id("value", "Value"));
        let args = validate(&spec, Some(&json!({"value": 21}))).unwrap();

        let handler = registry.get("echo").unwrap();
        let result = handler.call(&client(), args).await.unwrap();
        assert_eq!(result, json!({"doubled": 42}));
    }

    #[tokio::test]
    async fn test_typed_handler_rejects_mismatched_args() {
        let mut registry = ToolRegistry::new();
        registry.register("echo", |_client, args: EchoArgs| async move {
            Ok(json!(args.value))
        });

        let handler = registry.get("echo").unwrap();
        let err = handler
            .call(&client(), ValidatedArgs::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)));
        assert!(err.to_string().starts_with("arguments: "));
    }

    #[test]
    fn test_unknown_tool_message() {
        let err = ToolError::UnknownTool("infomaniak_nope".to_string());
        assert_eq!(err.to_string(), "Unknown tool: infomaniak_nope");
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = ToolRegistry::new();
        registry.register("b", |_c, _a: Value| async move { Ok(Value::Null) });
        registry.register("a", |_c, _a: Value| async move { Ok(Value::Null) });
        assert_eq!(registry.names(), vec!["a", "b"]);
        assert!(registry.contains("a"));
        assert_eq!(registry.len(), 2);
    }
}
