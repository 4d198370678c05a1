//! Site quality, diagnostics and link tools.

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
        name: "get_sqi_history",
        description: "Get the history of the site quality index (SQI).",
        fields: DATE_RANGE_FIELDS,
        handler: handler!(get_sqi_history),
    },
    ToolSpec {
        name: "get_diagnostics",
        description: "Get site diagnostics: detected problems grouped by severity, with their state and last check time.",
        fields: HOST_FIELDS,
        handler: handler!(get_diagnostics),
    },
    ToolSpec {
        name: "get_broken_internal_links",
        description: "Get sample broken internal links of the site with the pages they appear on.",
        fields: PAGE_FIELDS,
        handler: handler!(get_broken_internal_links),
    },
    ToolSpec {
        name: "get_external_links",
        description: "Get sample external links pointing to the site.",
        fields: PAGE_FIELDS,
        handler: handler!(get_external_links),
    },
];

async fn get_sqi_history(client: Arc<WebmasterClient>, arguments: JsonObject) -> ToolResult<Value> {
    let params: DateRangeParams = parse_args(arguments)?;
    Ok(client.get_sqi_history(&params).await?)
}

async fn get_diagnostics(client: Arc<WebmasterClient>, arguments: JsonObject) -> ToolResult<Value> {
    let params: HostRef = parse_args(arguments)?;
    Ok(client.get_diagnostics(&params).await?)
}

async fn get_broken_internal_links(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: PageParams = parse_args(arguments)?;
    Ok(client.get_broken_internal_links(&params).await?)
}

async fn get_external_links(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: PageParams = parse_args(arguments)?;
    Ok(client.get_external_links(&params).await?)
}
