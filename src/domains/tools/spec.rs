//! Static tool descriptors.
//!
//! A [`ToolSpec`] binds a tool name to its parameter table and an async
//! handler calling the Webmaster client. Both transports invoke tools through
//! [`ToolSpec::call`], which validates arguments and applies the error
//! boundary.

use futures::future::BoxFuture;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::boundary::{guarded, json_result};
use super::error::{ToolError, ToolResult};
use super::schema::{FieldSpec, input_schema, validate_arguments};
use crate::domains::webmaster::WebmasterClient;

/// Async tool handler receiving validated arguments.
pub type ToolHandlerFn =
    fn(Arc<WebmasterClient>, JsonObject) -> BoxFuture<'static, ToolResult<Value>>;

/// A tool exposed to MCP clients.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    /// Stable tool name.
    pub name: &'static str,
    /// Description shown to clients.
    pub description: &'static str,
    /// Declared parameters.
    pub fields: &'static [FieldSpec],
    pub handler: ToolHandlerFn,
}

impl ToolSpec {
    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(input_schema(self.fields)),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Validate `arguments`, run the handler and render its outcome.
    ///
    /// Never fails: every error is reported as an error result.
    #[instrument(skip_all, fields(tool = self.name))]
    pub async fn call(
        &self,
        client: Arc<WebmasterClient>,
        arguments: Option<JsonObject>,
    ) -> CallToolResult {
        info!("Tool called");
        guarded(self.name, self.run(client, arguments.unwrap_or_default())).await
    }

    async fn run(
        &self,
        client: Arc<WebmasterClient>,
        arguments: JsonObject,
    ) -> ToolResult<CallToolResult> {
        let arguments = validate_arguments(self.fields, arguments)?;
        let payload = (self.handler)(client, arguments).await?;
        json_result(&payload)
    }
}

/// Deserialize validated arguments into typed operation parameters.
pub fn parse_args<P: DeserializeOwned>(arguments: JsonObject) -> ToolResult<P> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
