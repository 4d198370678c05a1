//! User, host management and ownership verification tools.

use rmcp::model::JsonObject;
use serde_json::Value;
use std::sync::Arc;

use super::common::{HOST_FIELDS, HOST_ID, USER_ID};
use crate::domains::tools::ToolResult;
use crate::domains::tools::schema::{FieldKind, FieldSpec};
use crate::domains::tools::spec::{ToolSpec, parse_args};
use crate::domains::webmaster::WebmasterClient;
use crate::domains::webmaster::params::{AddHostParams, HostRef, UserRef, VerifyHostParams};

pub static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "get_user_id",
        description: "Get the Webmaster user ID of the account owning the OAuth token. Most other tools need this ID.",
        fields: &[],
        handler: handler!(get_user_id),
    },
    ToolSpec {
        name: "list_hosts",
        description: "List all sites (hosts) added to the user's Webmaster account, with their host IDs and verification state.",
        fields: &[USER_ID],
        handler: handler!(list_hosts),
    },
    ToolSpec {
        name: "add_host",
        description: "Add a site to the user's Webmaster account. The site must then be verified.",
        fields: &[
            USER_ID,
            FieldSpec::required(
                "hostUrl",
                FieldKind::String,
                "Site URL, e.g. https://example.com",
            ),
        ],
        handler: handler!(add_host),
    },
    ToolSpec {
        name: "get_host_info",
        description: "Get information about a site: URL, verification state and main mirror.",
        fields: HOST_FIELDS,
        handler: handler!(get_host_info),
    },
    ToolSpec {
        name: "delete_host",
        description: "Remove a site from the user's Webmaster account.",
        fields: HOST_FIELDS,
        handler: handler!(delete_host),
    },
    ToolSpec {
        name: "get_host_summary",
        description: "Get site statistics: SQI, pages in search, excluded pages and site problems.",
        fields: HOST_FIELDS,
        handler: handler!(get_host_summary),
    },
    ToolSpec {
        name: "get_verification_status",
        description: "Get the ownership verification state of a site and the verification UIN.",
        fields: HOST_FIELDS,
        handler: handler!(get_verification_status),
    },
    ToolSpec {
        name: "verify_host",
        description: "Start ownership verification of a site using the given method.",
        fields: &[
            USER_ID,
            HOST_ID,
            FieldSpec::required(
                "verificationType",
                FieldKind::String,
                "Verification method: DNS, HTML_FILE, META_TAG or WHOIS",
            ),
        ],
        handler: handler!(verify_host),
    },
];

async fn get_user_id(client: Arc<WebmasterClient>, _arguments: JsonObject) -> ToolResult<Value> {
    Ok(client.get_user().await?)
}

async fn list_hosts(client: Arc<WebmasterClient>, arguments: JsonObject) -> ToolResult<Value> {
    let params: UserRef = parse_args(arguments)?;
    Ok(client.list_hosts(&params).await?)
}

async fn add_host(client: Arc<WebmasterClient>, arguments: JsonObject) -> ToolResult<Value> {
    let params: AddHostParams = parse_args(arguments)?;
    Ok(client.add_host(&params).await?)
}

async fn get_host_info(client: Arc<WebmasterClient>, arguments: JsonObject) -> ToolResult<Value> {
    let params: HostRef = parse_args(arguments)?;
    Ok(client.get_host(&params).await?)
}

async fn delete_host(client: Arc<WebmasterClient>, arguments: JsonObject) -> ToolResult<Value> {
    let params: HostRef = parse_args(arguments)?;
    Ok(client.delete_host(&params).await?)
}

async fn get_host_summary(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: HostRef = parse_args(arguments)?;
    Ok(client.get_host_summary(&params).await?)
}

async fn get_verification_status(
    client: Arc<WebmasterClient>,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let params: HostRef = parse_args(arguments)?;
    Ok(client.get_verification(&params).await?)
}

async fn verify_host(client: Arc<WebmasterClient>, arguments: JsonObject) -> ToolResult<Value> {
    let params: VerifyHostParams = parse_args(arguments)?;
    Ok(client.verify_host(&params).await?)
}
