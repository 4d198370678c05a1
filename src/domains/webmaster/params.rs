//! Typed parameters for Webmaster API operations.
//!
//! Each struct deserializes from the camelCase arguments a tool receives
//! (`userId`, `dateFrom`, ...) and serializes into the snake_case query string
//! the upstream expects (`date_from`, ...). Path identifiers are never
//! serialized; field order fixes query key order; `None` fields are omitted.

use serde::{Deserialize, Serialize};

/// Identifies the authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct UserRef {
    #[serde(skip_serializing)]
    pub user_id: String,
}

/// Identifies a host of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct HostRef {
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub host_id: String,
}

impl HostRef {
    pub fn new(user_id: impl Into<String>, host_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            host_id: host_id.into(),
        }
    }
}

/// Adds a site to the user's host list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct AddHostParams {
    #[serde(skip_serializing)]
    pub user_id: String,
    pub host_url: String,
}

/// Starts ownership verification with the given method
/// (`DNS`, `HTML_FILE`, `META_TAG`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct VerifyHostParams {
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub host_id: String,
    pub verification_type: String,
}

/// Host plus an optional `YYYY-MM-DD` date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DateRangeParams {
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub host_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

/// Host plus optional paging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PageParams {
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub host_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// Popular search queries, ordered by `TOTAL_SHOWS` or `TOTAL_CLICKS`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PopularQueriesParams {
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub host_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    pub order_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

/// Aggregated history over all search queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct QueriesHistoryParams {
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub host_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

/// History of a single search query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct QueryHistoryParams {
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub host_id: String,
    #[serde(skip_serializing)]
    pub query_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

/// Sitemaps known to the crawler, optionally below a parent sitemap index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SitemapsParams {
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub host_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// Identifies a sitemap of a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SitemapRef {
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub host_id: String,
    #[serde(skip_serializing)]
    pub sitemap_id: String,
}

/// Host plus a page URL, sent as the JSON body `{"url": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct UrlParams {
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub host_id: String,
    pub url: String,
}

/// Recrawl queue listing filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecrawlTasksParams {
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub host_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// Identifies a recrawl task of a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecrawlTaskRef {
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub host_id: String,
    #[serde(skip_serializing)]
    pub task_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_camel_case_arguments() {
        let params: PopularQueriesParams = serde_json::from_value(json!({
            "userId": "42",
            "hostId": "https:example.com:443",
            "orderBy": "TOTAL_SHOWS",
            "queryIndicator": "TOTAL_CLICKS",
            "limit": 50
        }))
        .unwrap();

        assert_eq!(params.user_id, "42");
        assert_eq!(params.host_id, "https:example.com:443");
        assert_eq!(params.order_by, "TOTAL_SHOWS");
        assert_eq!(params.query_indicator.as_deref(), Some("TOTAL_CLICKS"));
        assert_eq!(params.limit, Some(50));
        assert_eq!(params.offset, None);
    }

    #[test]
    fn test_query_omits_identifiers_and_unset_fields() {
        let params = PageParams {
            user_id: "42".to_string(),
            host_id: "h".to_string(),
            offset: None,
            limit: Some(10),
        };
        assert_eq!(serde_urlencoded::to_string(&params).unwrap(), "limit=10");
    }

    #[test]
    fn test_query_keys_are_snake_case_in_field_order() {
        let params = RecrawlTasksParams {
            user_id: "42".to_string(),
            host_id: "h".to_string(),
            date_from: Some("2024-01-01".to_string()),
            date_to: Some("2024-01-31".to_string()),
            offset: Some(20),
            limit: Some(10),
        };
        assert_eq!(
            serde_urlencoded::to_string(&params).unwrap(),
            "date_from=2024-01-01&date_to=2024-01-31&offset=20&limit=10"
        );
    }
}
