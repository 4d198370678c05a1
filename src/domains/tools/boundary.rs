//! Error boundary applied to every tool invocation.
//!
//! Handlers return `Result`s and may even panic; [`guarded`] turns whatever
//! they produce into a `CallToolResult`. It is the only place tool failures
//! are caught, and it never fails itself.

use futures::FutureExt;
use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use std::any::Any;
use std::fmt::Display;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tracing::error;

use super::error::{ToolError, ToolResult};

/// Run a tool handler, converting failures into an error result.
///
/// A normal result is returned unchanged. An `Err` or a panic becomes
/// `{isError: true, content: [{type: "text", text: "Error: <message>"}]}`
/// and is logged.
pub async fn guarded<F, E>(tool: &str, handler: F) -> CallToolResult
where
    F: Future<Output = Result<CallToolResult, E>>,
    E: Display,
{
    let message = match AssertUnwindSafe(handler).catch_unwind().await {
        Ok(Ok(result)) => return result,
        Ok(Err(err)) => err.to_string(),
        Err(panic) => panic_message(panic.as_ref()),
    };

    error!(tool, "Tool call failed: {}", message);
    error_result(&message)
}

/// An error result with the `Error: ` prefix clients rely on.
pub fn error_result(message: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {message}"))])
}

/// Render a payload as pretty-printed JSON text.
///
/// `is_error` is left unset on success.
pub fn json_result(payload: &Value) -> ToolResult<CallToolResult> {
    let text = serde_json::to_string_pretty(payload)
        .map_err(|e| ToolError::internal(format!("cannot render response: {e}")))?;

    Ok(CallToolResult {
        content: vec![Content::text(text)],
        structured_content: None,
        is_error: None,
        meta: None,
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "tool handler panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("expected text content"),
        }
    }

    #[tokio::test]
    async fn test_success_is_passed_through_unchanged() {
        let expected = json_result(&json!({"hosts": [{"host_id": "h"}]})).unwrap();
        let snapshot = serde_json::to_value(&expected).unwrap();

        let result = guarded("list_hosts", async move { Ok::<_, ToolError>(expected) }).await;

        assert_eq!(serde_json::to_value(&result).unwrap(), snapshot);
        assert!(result.is_error.is_none());
    }

    #[tokio::test]
    async fn test_error_becomes_error_result() {
        let result = guarded("get_host_info", async {
            Err::<CallToolResult, _>(std::io::Error::other("boom"))
        })
        .await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        assert_eq!(text_of(&result), "Error: boom");
    }

    #[tokio::test]
    async fn test_string_error_becomes_error_result() {
        let result = guarded("get_host_info", async { Err::<CallToolResult, _>("x") }).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: x");
    }

    #[tokio::test]
    async fn test_panic_is_caught() {
        let result = guarded("get_host_info", async {
            if true {
                panic!("x");
            }
            Ok::<CallToolResult, ToolError>(error_result("unreachable"))
        })
        .await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: x");
    }

    #[tokio::test]
    async fn test_formatted_panic_is_caught() {
        let code = 7;
        let result = guarded("get_host_info", async move {
            if code > 0 {
                panic!("failed with code {code}");
            }
            Ok::<CallToolResult, ToolError>(error_result("unreachable"))
        })
        .await;

        assert_eq!(text_of(&result), "Error: failed with code 7");
    }

    #[test]
    fn test_json_result_is_pretty_text() {
        let result = json_result(&json!({"a": 1})).unwrap();
        assert_eq!(text_of(&result), "{\n  \"a\": 1\n}");
        assert!(result.is_error.is_none());
    }
}
