//! Webmaster API operations.
//!
//! One method per upstream endpoint. Each validates its required identifiers,
//! builds the URL and delegates to [`WebmasterClient::execute`] through the
//! verb helpers. Responses are passed through as raw JSON.

use serde::Serialize;
use serde_json::Value;

use super::client::{WebmasterClient, with_query};
use super::error::{ApiError, ApiResult};
use super::params::{
    AddHostParams, DateRangeParams, HostRef, PageParams, PopularQueriesParams,
    QueriesHistoryParams, QueryHistoryParams, RecrawlTaskRef, RecrawlTasksParams, SitemapRef,
    SitemapsParams, UrlParams, UserRef, VerifyHostParams,
};
use super::validation::{require, require_all};

/// Serialize `params` as a JSON request body; path identifiers are skipped.
fn json_body<T: Serialize>(params: &T) -> ApiResult<Value> {
    serde_json::to_value(params).map_err(|e| ApiError::invalid_request(e.to_string()))
}

fn require_host(user_id: &str, host_id: &str) -> ApiResult<()> {
    require_all([("userId", user_id), ("hostId", host_id)])
}

impl WebmasterClient {
    // ========================================================================
    // User and hosts
    // ========================================================================

    /// `GET /user` - the ID of the user owning the token.
    pub async fn get_user(&self) -> ApiResult<Value> {
        self.get(self.url(&["user"])?).await
    }

    /// `GET /user/{userId}/hosts`
    pub async fn list_hosts(&self, params: &UserRef) -> ApiResult<Value> {
        require("userId", &params.user_id)?;
        self.get(self.url(&["user", &params.user_id, "hosts"])?).await
    }

    /// `POST /user/{userId}/hosts` with body `{"host_url": ...}`.
    pub async fn add_host(&self, params: &AddHostParams) -> ApiResult<Value> {
        require_all([
            ("userId", params.user_id.as_str()),
            ("hostUrl", params.host_url.as_str()),
        ])?;
        let url = self.url(&["user", &params.user_id, "hosts"])?;
        self.post(url, Some(json_body(params)?)).await
    }

    /// `GET /user/{userId}/hosts/{hostId}`
    pub async fn get_host(&self, params: &HostRef) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        self.get(self.host_url(&params.user_id, &params.host_id, &[])?)
            .await
    }

    /// `DELETE /user/{userId}/hosts/{hostId}`
    pub async fn delete_host(&self, params: &HostRef) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        self.delete(self.host_url(&params.user_id, &params.host_id, &[])?)
            .await
    }

    /// `GET .../summary`
    pub async fn get_host_summary(&self, params: &HostRef) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        self.get(self.host_url(&params.user_id, &params.host_id, &["summary"])?)
            .await
    }

    // ========================================================================
    // Verification
    // ========================================================================

    /// `GET .../verification`
    pub async fn get_verification(&self, params: &HostRef) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        self.get(self.host_url(&params.user_id, &params.host_id, &["verification"])?)
            .await
    }

    /// `POST .../verification?verification_type=...`
    pub async fn verify_host(&self, params: &VerifyHostParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        require("verificationType", &params.verification_type)?;
        let url = self.host_url(&params.user_id, &params.host_id, &["verification"])?;
        self.post(with_query(url, params)?, None).await
    }

    // ========================================================================
    // Quality
    // ========================================================================

    /// `GET .../sqi-history`
    pub async fn get_sqi_history(&self, params: &DateRangeParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        let url = self.host_url(&params.user_id, &params.host_id, &["sqi-history"])?;
        self.get(with_query(url, params)?).await
    }

    // ========================================================================
    // Search queries
    // ========================================================================

    /// `GET .../search-queries/popular`
    pub async fn get_popular_queries(&self, params: &PopularQueriesParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        require("orderBy", &params.order_by)?;
        let url = self.host_url(
            &params.user_id,
            &params.host_id,
            &["search-queries", "popular"],
        )?;
        self.get(with_query(url, params)?).await
    }

    /// `GET .../search-queries/all/history`
    pub async fn get_search_queries_history(
        &self,
        params: &QueriesHistoryParams,
    ) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        let url = self.host_url(
            &params.user_id,
            &params.host_id,
            &["search-queries", "all", "history"],
        )?;
        self.get(with_query(url, params)?).await
    }

    /// `GET .../search-queries/{queryId}/history`
    pub async fn get_search_query_history(&self, params: &QueryHistoryParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        require("queryId", &params.query_id)?;
        let url = self.host_url(
            &params.user_id,
            &params.host_id,
            &["search-queries", &params.query_id, "history"],
        )?;
        self.get(with_query(url, params)?).await
    }

    // ========================================================================
    // Sitemaps
    // ========================================================================

    /// `GET .../sitemaps`
    pub async fn list_sitemaps(&self, params: &SitemapsParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        let url = self.host_url(&params.user_id, &params.host_id, &["sitemaps"])?;
        self.get(with_query(url, params)?).await
    }

    /// `GET .../sitemaps/{sitemapId}`
    pub async fn get_sitemap(&self, params: &SitemapRef) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        require("sitemapId", &params.sitemap_id)?;
        self.get(self.host_url(
            &params.user_id,
            &params.host_id,
            &["sitemaps", &params.sitemap_id],
        )?)
        .await
    }

    /// `GET .../user-added-sitemaps`
    pub async fn list_user_sitemaps(&self, params: &PageParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        let url = self.host_url(&params.user_id, &params.host_id, &["user-added-sitemaps"])?;
        self.get(with_query(url, params)?).await
    }

    /// `POST .../user-added-sitemaps` with body `{"url": ...}`.
    pub async fn add_sitemap(&self, params: &UrlParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        require("url", &params.url)?;
        let url = self.host_url(&params.user_id, &params.host_id, &["user-added-sitemaps"])?;
        self.post(url, Some(json_body(params)?)).await
    }

    /// `DELETE .../user-added-sitemaps/{sitemapId}`
    pub async fn delete_sitemap(&self, params: &SitemapRef) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        require("sitemapId", &params.sitemap_id)?;
        self.delete(self.host_url(
            &params.user_id,
            &params.host_id,
            &["user-added-sitemaps", &params.sitemap_id],
        )?)
        .await
    }

    // ========================================================================
    // Indexing
    // ========================================================================

    /// `GET .../indexing/history`
    pub async fn get_indexing_history(&self, params: &DateRangeParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        let url = self.host_url(&params.user_id, &params.host_id, &["indexing", "history"])?;
        self.get(with_query(url, params)?).await
    }

    /// `GET .../indexing/samples`
    pub async fn get_indexing_samples(&self, params: &PageParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        let url = self.host_url(&params.user_id, &params.host_id, &["indexing", "samples"])?;
        self.get(with_query(url, params)?).await
    }

    /// `GET .../search-urls/in-search/history`
    pub async fn get_insearch_history(&self, params: &DateRangeParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        let url = self.host_url(
            &params.user_id,
            &params.host_id,
            &["search-urls", "in-search", "history"],
        )?;
        self.get(with_query(url, params)?).await
    }

    /// `GET .../search-urls/in-search/samples`
    pub async fn get_insearch_samples(&self, params: &PageParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        let url = self.host_url(
            &params.user_id,
            &params.host_id,
            &["search-urls", "in-search", "samples"],
        )?;
        self.get(with_query(url, params)?).await
    }

    /// `GET .../important-urls`
    pub async fn get_important_urls(&self, params: &HostRef) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        self.get(self.host_url(&params.user_id, &params.host_id, &["important-urls"])?)
            .await
    }

    /// `GET .../diagnostics`
    pub async fn get_diagnostics(&self, params: &HostRef) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        self.get(self.host_url(&params.user_id, &params.host_id, &["diagnostics"])?)
            .await
    }

    // ========================================================================
    // Recrawl
    // ========================================================================

    /// `POST .../recrawl/queue` with body `{"url": ...}`.
    pub async fn recrawl_url(&self, params: &UrlParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        require("url", &params.url)?;
        let url = self.host_url(&params.user_id, &params.host_id, &["recrawl", "queue"])?;
        self.post(url, Some(json_body(params)?)).await
    }

    /// `GET .../recrawl/queue`
    pub async fn list_recrawl_tasks(&self, params: &RecrawlTasksParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        let url = self.host_url(&params.user_id, &params.host_id, &["recrawl", "queue"])?;
        self.get(with_query(url, params)?).await
    }

    /// `GET .../recrawl/queue/{taskId}`
    pub async fn get_recrawl_task(&self, params: &RecrawlTaskRef) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        require("taskId", &params.task_id)?;
        self.get(self.host_url(
            &params.user_id,
            &params.host_id,
            &["recrawl", "queue", &params.task_id],
        )?)
        .await
    }

    /// `GET .../recrawl/quota`
    pub async fn get_recrawl_quota(&self, params: &HostRef) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        self.get(self.host_url(&params.user_id, &params.host_id, &["recrawl", "quota"])?)
            .await
    }

    // ========================================================================
    // Links
    // ========================================================================

    /// `GET .../links/internal/broken/samples`
    pub async fn get_broken_internal_links(&self, params: &PageParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        let url = self.host_url(
            &params.user_id,
            &params.host_id,
            &["links", "internal", "broken", "samples"],
        )?;
        self.get(with_query(url, params)?).await
    }

    /// `GET .../links/external/samples`
    pub async fn get_external_links(&self, params: &PageParams) -> ApiResult<Value> {
        require_host(&params.user_id, &params.host_id)?;
        let url = self.host_url(
            &params.user_id,
            &params.host_id,
            &["links", "external", "samples"],
        )?;
        self.get(with_query(url, params)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::backend::Method;
    use super::super::testing::{ScriptedBackend, Step, scripted_client};
    use super::*;
    use serde_json::json;

    const HOST: &str = "https://api.webmaster.yandex.net/v4/user/42/hosts/https:example.com:443";

    fn host() -> HostRef {
        HostRef::new("42", "https:example.com:443")
    }

    #[tokio::test]
    async fn test_popular_queries_query_string() {
        let backend = ScriptedBackend::new(vec![Step::Respond(200, r#"{"queries":[]}"#)]);
        let client = scripted_client(backend.clone());

        let params = PopularQueriesParams {
            user_id: "42".to_string(),
            host_id: "https:example.com:443".to_string(),
            date_from: Some("2024-01-01".to_string()),
            date_to: Some("2024-01-31".to_string()),
            order_by: "TOTAL_CLICKS".to_string(),
            ..Default::default()
        };
        let result = client.get_popular_queries(&params).await.unwrap();

        assert_eq!(result, json!({"queries": []}));
        let request = backend.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url,
            format!(
                "{HOST}/search-queries/popular?date_from=2024-01-01&date_to=2024-01-31&order_by=TOTAL_CLICKS"
            )
        );
        assert!(!request.url.contains("limit"));
        assert!(!request.url.contains("offset"));
        assert!(!request.url.contains("query_indicator"));
    }

    #[tokio::test]
    async fn test_missing_identifiers_issue_no_request() {
        let backend = ScriptedBackend::new(vec![]);
        let client = scripted_client(backend.clone());

        let err = client
            .get_host_summary(&HostRef::new("42", "  "))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref f) if f == "hostId"));

        let err = client.list_hosts(&UserRef::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: userId");

        let err = client
            .recrawl_url(&UrlParams {
                user_id: "42".to_string(),
                host_id: "h".to_string(),
                url: String::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: url");

        assert_eq!(backend.attempts(), 0);
    }

    #[tokio::test]
    async fn test_add_host_posts_snake_case_body() {
        let backend = ScriptedBackend::new(vec![Step::Respond(201, r#"{"host_id":"h"}"#)]);
        let client = scripted_client(backend.clone());

        client
            .add_host(&AddHostParams {
                user_id: "42".to_string(),
                host_url: "https://example.com".to_string(),
            })
            .await
            .unwrap();

        let request = backend.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.url,
            "https://api.webmaster.yandex.net/v4/user/42/hosts"
        );
        assert_eq!(request.body, Some(json!({"host_url": "https://example.com"})));
    }

    #[tokio::test]
    async fn test_recrawl_url_posts_url_body() {
        let backend = ScriptedBackend::new(vec![Step::Respond(202, r#"{"task_id":"t1"}"#)]);
        let client = scripted_client(backend.clone());

        let result = client
            .recrawl_url(&UrlParams {
                user_id: "42".to_string(),
                host_id: "https:example.com:443".to_string(),
                url: "https://example.com/page".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result["task_id"], "t1");
        let request = backend.last_request();
        assert_eq!(request.url, format!("{HOST}/recrawl/queue"));
        assert_eq!(request.body, Some(json!({"url": "https://example.com/page"})));
    }

    #[tokio::test]
    async fn test_verify_host_passes_type_in_query() {
        let backend = ScriptedBackend::new(vec![Step::Respond(200, "{}")]);
        let client = scripted_client(backend.clone());

        client
            .verify_host(&VerifyHostParams {
                user_id: "42".to_string(),
                host_id: "https:example.com:443".to_string(),
                verification_type: "DNS".to_string(),
            })
            .await
            .unwrap();

        let request = backend.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, format!("{HOST}/verification?verification_type=DNS"));
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn test_delete_sitemap_uses_delete_with_empty_body_response() {
        let backend = ScriptedBackend::new(vec![Step::Respond(204, "")]);
        let client = scripted_client(backend.clone());

        let result = client
            .delete_sitemap(&SitemapRef {
                user_id: "42".to_string(),
                host_id: "https:example.com:443".to_string(),
                sitemap_id: "s1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result, json!({}));
        let request = backend.last_request();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.url, format!("{HOST}/user-added-sitemaps/s1"));
    }

    #[tokio::test]
    async fn test_paths_without_query() {
        let backend = ScriptedBackend::new(vec![
            Step::Respond(200, "{}"),
            Step::Respond(200, "{}"),
            Step::Respond(200, "{}"),
        ]);
        let client = scripted_client(backend.clone());

        client.get_recrawl_quota(&host()).await.unwrap();
        assert_eq!(backend.last_request().url, format!("{HOST}/recrawl/quota"));

        client
            .get_broken_internal_links(&PageParams {
                user_id: "42".to_string(),
                host_id: "https:example.com:443".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(
            backend.last_request().url,
            format!("{HOST}/links/internal/broken/samples")
        );

        client.get_user().await.unwrap();
        assert_eq!(
            backend.last_request().url,
            "https://api.webmaster.yandex.net/v4/user"
        );
    }
}
