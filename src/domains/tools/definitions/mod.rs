//! Tool definitions module.
//!
//! Tools are grouped by API area, one file per area. Each file exports a
//! static table of [`ToolSpec`]s; [`all_tools`] is the single list both
//! transports are built from.

use super::spec::ToolSpec;

/// Turn an `async fn(Arc<WebmasterClient>, JsonObject) -> ToolResult<Value>`
/// into a [`super::spec::ToolHandlerFn`].
macro_rules! handler {
    ($f:path) => {{
        fn boxed(
            client: ::std::sync::Arc<$crate::domains::webmaster::WebmasterClient>,
            arguments: ::rmcp::model::JsonObject,
        ) -> ::futures::future::BoxFuture<
            'static,
            $crate::domains::tools::ToolResult<::serde_json::Value>,
        > {
            ::std::boxed::Box::pin($f(client, arguments))
        }
        boxed as $crate::domains::tools::spec::ToolHandlerFn
    }};
}

pub mod common;
pub mod hosts;
pub mod indexing;
pub mod quality;
pub mod recrawl;
pub mod search_queries;
pub mod sitemaps;

/// Every tool exposed by the server, in listing order.
pub fn all_tools() -> impl Iterator<Item = &'static ToolSpec> {
    hosts::TOOLS
        .iter()
        .chain(search_queries::TOOLS)
        .chain(sitemaps::TOOLS)
        .chain(indexing::TOOLS)
        .chain(quality::TOOLS)
        .chain(recrawl::TOOLS)
}

/// Look a tool up by name.
pub fn find_tool(name: &str) -> Option<&'static ToolSpec> {
    all_tools().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tool_count() {
        assert_eq!(all_tools().count(), 29);
    }

    #[test]
    fn test_tool_names_are_unique() {
        let names: HashSet<_> = all_tools().map(|spec| spec.name).collect();
        assert_eq!(names.len(), all_tools().count());
    }

    #[test]
    fn test_field_names_are_unique_per_tool() {
        for spec in all_tools() {
            let names: HashSet<_> = spec.fields.iter().map(|f| f.name).collect();
            assert_eq!(names.len(), spec.fields.len(), "duplicate field in {}", spec.name);
        }
    }

    #[test]
    fn test_find_tool() {
        assert_eq!(
            find_tool("get_popular_queries").map(|spec| spec.name),
            Some("get_popular_queries")
        );
        assert!(find_tool("unknown").is_none());
    }
}
