//! Search query analytics tools.

use rmcp::model::JsonObject;
use serde_json::Value;
use std::sync::Arc;

use super::common::{DATE_FROM, DATE_TO, HOST_ID, LIMIT, OFFSET, QUERY_INDICATOR, USER_ID};
use crate::domains::tools::ToolResult;
use crate::domains::tools::schema::{FieldKind, FieldSpec};
use crate::domains::tools::spec::{ToolSpec, parse_args};
use crate::domains::webmaster::WebmasterClient;
use crate::domains::webmaster::params::{
    PopularQueriesParams, QueriesHistoryParams, QueryHistoryParams,
};

pub static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "get_popular_queries",
        description: "Get the most popular search queries leading to the site, with shows, clicks and positions.",
        fields: &[
            USER_ID,
            HOST_ID,
            FieldSpec::required(
                "orderBy",
                FieldKind::String,
                "Sort order: TOTAL_SHOWS or TOTAL_CLICKS",
            ),
            DATE_FROM,
            DATE_TO,
            QUERY_INDICATOR,
            LIMIT,
            OFFSET,
        ],
        handler: handler!(get_popular_queries),
    },
    ToolSpec {
        name: "get_search_queries_history",
        description: "Get the daily history of an indicator aggregated over all search queries of the site.",
        fields: &[USER_ID, HOST_ID, QUERY_INDICATOR, DATE_FROM, DATE_TO],
        handler: handler!(get_search_queries_history),
    },
    ToolSpec {
        name: "get_search_query_history",
        description: "Get the daily history of an indicator for a single search query.",
        fields: &[
            USER_ID,
            HOST_ID,
            FieldSpec::required(
                "queryId",
                FieldKind::String,
                "Query ID (returned by get_popular_queries)",
            ),
            QUERY_INDICATOR,
            DATE_FROM,
            DATE_TO,
        ],
        handler: handler!(get_search_query_history),
    },
];

async fn get_popular_queries(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: PopularQueriesParams = parse_args(arguments)?;
    Ok(client.get_popular_queries(&params).await?)
}

async fn get_search_queries_history(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: QueriesHistoryParams = parse_args(arguments)?;
    Ok(client.get_search_queries_history(&params).await?)
}

async fn get_search_query_history(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: QueryHistoryParams = parse_args(arguments)?;
    Ok(client.get_search_query_history(&params).await?)
}
