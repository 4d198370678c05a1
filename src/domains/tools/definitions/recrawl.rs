//! Recrawl queue tools.

use rmcp::model::JsonObject;
use serde_json::Value;
use std::sync::Arc;

use super::common::{DATE_FROM, DATE_TO, HOST_FIELDS, HOST_ID, LIMIT, OFFSET, PAGE_URL, USER_ID};
use crate::domains::tools::ToolResult;
use crate::domains::tools::schema::{FieldKind, FieldSpec};
use crate::domains::tools::spec::{ToolSpec, parse_args};
use crate::domains::webmaster::WebmasterClient;
use crate::domains::webmaster::params::{HostRef, RecrawlTaskRef, RecrawlTasksParams, UrlParams};

pub static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "recrawl_url",
        description: "Ask the crawler to re-fetch a page. Consumes the daily recrawl quota.",
        fields: &[USER_ID, HOST_ID, PAGE_URL],
        handler: handler!(recrawl_url),
    },
    ToolSpec {
        name: "list_recrawl_tasks",
        description: "List recrawl tasks of the site with their state.",
        fields: &[USER_ID, HOST_ID, DATE_FROM, DATE_TO, OFFSET, LIMIT],
        handler: handler!(list_recrawl_tasks),
    },
    ToolSpec {
        name: "get_recrawl_task",
        description: "Get the state of a recrawl task.",
        fields: &[
            USER_ID,
            HOST_ID,
            FieldSpec::required(
                "taskId",
                FieldKind::String,
                "Task ID (returned by recrawl_url)",
            ),
        ],
        handler: handler!(get_recrawl_task),
    },
    ToolSpec {
        name: "get_recrawl_quota",
        description: "Get the daily recrawl quota of the site and how much of it remains.",
        fields: HOST_FIELDS,
        handler: handler!(get_recrawl_quota),
    },
];

async fn recrawl_url(client: Arc<WebmasterClient>, arguments: JsonObject) -> ToolResult<Value> {
    let params: UrlParams = parse_args(arguments)?;
    Ok(client.recrawl_url(&params).await?)
}

async fn list_recrawl_tasks(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: RecrawlTasksParams = parse_args(arguments)?;
    Ok(client.list_recrawl_tasks(&params).await?)
}

async fn get_recrawl_task(client: Arc<WebmasterClient>, arguments: JsonObject) -> ToolResult<Value> {
    let params: RecrawlTaskRef = parse_args(arguments)?;
    Ok(client.get_recrawl_task(&params).await?)
}

async fn get_recrawl_quota(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: HostRef = parse_args(arguments)?;
    Ok(client.get_recrawl_quota(&params).await?)
}
