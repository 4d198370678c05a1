//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls
//! - Tool metadata for listing

use std::sync::Arc;
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::{all_tools, find_tool};
use super::error::ToolError;
use crate::domains::webmaster::WebmasterClient;

/// Tool registry - manages all available tools.
///
/// The registry owns the shared Webmaster client every tool call goes
/// through.
pub struct ToolRegistry {
    client: Arc<WebmasterClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<WebmasterClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        all_tools().map(|spec| spec.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// The HTTP transport lists tools from here. The STDIO/TCP router is
    /// built from the same tables, so both advertise identical tools.
    pub fn get_all_tools() -> Vec<Tool> {
        all_tools().map(|spec| spec.to_tool()).collect()
    }

    /// Dispatch a tool call by name and return the serialized `CallToolResult`.
    ///
    /// Tool failures are reported inside the result (`isError: true`); only an
    /// unknown tool name is an `Err`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let Some(spec) = find_tool(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name).to_string());
        };

        let arguments = match arguments {
            serde_json::Value::Object(map) => Some(map),
            serde_json::Value::Null => None,
            other => {
                return Err(format!(
                    "Tool arguments must be an object, got {}",
                    json_type(&other)
                ));
            }
        };

        let result = spec.call(self.client.clone(), arguments).await;
        serde_json::to_value(result).map_err(|e| e.to_string())
    }
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
