//! Indexing and search presence tools.

use rmcp::model::JsonObject;
use serde_json::Value;
use std::sync::Arc;

use super::common::{DATE_RANGE_FIELDS, HOST_FIELDS, PAGE_FIELDS};
use crate::domains::tools::ToolResult;
use crate::domains::tools::spec::{ToolSpec, parse_args};
use crate::domains::webmaster::WebmasterClient;
use crate::domains::webmaster::params::{DateRangeParams, HostRef, PageParams};

pub static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "get_indexing_history",
        description: "Get the history of pages downloaded by the crawler, grouped by HTTP status.",
        fields: DATE_RANGE_FIELDS,
        handler: handler!(get_indexing_history),
    },
    ToolSpec {
        name: "get_indexing_samples",
        description: "Get sample pages downloaded by the crawler with their HTTP status and access date.",
        fields: PAGE_FIELDS,
        handler: handler!(get_indexing_samples),
    },
    ToolSpec {
        name: "get_insearch_history",
        description: "Get the history of the number of site pages included in search results.",
        fields: DATE_RANGE_FIELDS,
        handler: handler!(get_insearch_history),
    },
    ToolSpec {
        name: "get_insearch_samples",
        description: "Get sample pages currently included in search results.",
        fields: PAGE_FIELDS,
        handler: handler!(get_insearch_samples),
    },
    ToolSpec {
        name: "get_important_urls",
        description: "Get the state of pages the user marked as important: indexing status, search presence and recent changes.",
        fields: HOST_FIELDS,
        handler: handler!(get_important_urls),
    },
];

async fn get_indexing_history(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: DateRangeParams = parse_args(arguments)?;
    Ok(client.get_indexing_history(&params).await?)
}

async fn get_indexing_samples(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: PageParams = parse_args(arguments)?;
    Ok(client.get_indexing_samples(&params).await?)
}

async fn get_insearch_history(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: DateRangeParams = parse_args(arguments)?;
    Ok(client.get_insearch_history(&params).await?)
}

async fn get_insearch_samples(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: PageParams = parse_args(arguments)?;
    Ok(client.get_insearch_samples(&params).await?)
}

async fn get_important_urls(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: HostRef = parse_args(arguments)?;
    Ok(client.get_important_urls(&params).await?)
}
