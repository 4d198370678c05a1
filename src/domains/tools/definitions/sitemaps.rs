//! Sitemap tools.

use rmcp::model::JsonObject;
use serde_json::Value;
use std::sync::Arc;

use super::common::{HOST_ID, LIMIT, PAGE_FIELDS, USER_ID};
use crate::domains::tools::ToolResult;
use crate::domains::tools::schema::{FieldKind, FieldSpec};
use crate::domains::tools::spec::{ToolSpec, parse_args};
use crate::domains::webmaster::WebmasterClient;
use crate::domains::webmaster::params::{PageParams, SitemapRef, SitemapsParams, UrlParams};

const SITEMAP_ID: FieldSpec = FieldSpec::required(
    "sitemapId",
    FieldKind::String,
    "Sitemap ID (returned by list_sitemaps or list_user_sitemaps)",
);

pub static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "list_sitemaps",
        description: "List sitemaps the crawler knows for the site, with their processing state and errors.",
        fields: &[
            USER_ID,
            HOST_ID,
            FieldSpec::optional(
                "parentId",
                FieldKind::String,
                "List the children of this sitemap index",
            ),
            LIMIT,
        ],
        handler: handler!(list_sitemaps),
    },
    ToolSpec {
        name: "get_sitemap",
        description: "Get details of a sitemap known to the crawler.",
        fields: &[USER_ID, HOST_ID, SITEMAP_ID],
        handler: handler!(get_sitemap),
    },
    ToolSpec {
        name: "list_user_sitemaps",
        description: "List sitemaps added manually by the user.",
        fields: PAGE_FIELDS,
        handler: handler!(list_user_sitemaps),
    },
    ToolSpec {
        name: "add_sitemap",
        description: "Submit a sitemap URL for the site.",
        fields: &[
            USER_ID,
            HOST_ID,
            FieldSpec::required("url", FieldKind::String, "Absolute URL of the sitemap file"),
        ],
        handler: handler!(add_sitemap),
    },
    ToolSpec {
        name: "delete_sitemap",
        description: "Remove a sitemap that was added manually by the user.",
        fields: &[USER_ID, HOST_ID, SITEMAP_ID],
        handler: handler!(delete_sitemap),
    },
];

async fn list_sitemaps(client: Arc<WebmasterClient>, arguments: JsonObject) -> ToolResult<Value> {
    let params: SitemapsParams = parse_args(arguments)?;
    Ok(client.list_sitemaps(&params).await?)
}

async fn get_sitemap(client: Arc<WebmasterClient>, arguments: JsonObject) -> ToolResult<Value> {
    let params: SitemapRef = parse_args(arguments)?;
    Ok(client.get_sitemap(&params).await?)
}

async fn list_user_sitemaps(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: PageParams = parse_args(arguments)?;
    Ok(client.list_user_sitemaps(&params).await?)
}

async fn add_sitemap(client: Arc<WebmasterClient>, arguments: JsonObject) -> ToolResult<Value> {
    let params: UrlParams = parse_args(arguments)?;
    Ok(client.add_sitemap(&params).await?)
}

async fn delete_sitemap(client: Arc<WebmasterClient>, arguments: JsonObject) -> ToolResult<Value> {
    let params: SitemapRef = parse_args(arguments)?;
    Ok(client.delete_sitemap(&params).await?)
}
