//! Tool Router - builds the rmcp ToolRouter from the tool tables.
//!
//! Every [`ToolSpec`](super::spec::ToolSpec) becomes one dynamic route for the
//! STDIO/TCP transports. The route shares the client and goes through the same
//! `ToolSpec::call` path as HTTP dispatch.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::ErrorData;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};

use super::definitions::all_tools;
use crate::domains::webmaster::WebmasterClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<WebmasterClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    all_tools().fold(ToolRouter::new(), |router, spec| {
        let client = client.clone();
        router.with_route(ToolRoute::new_dyn(
            spec.to_tool(),
            move |ctx: ToolCallContext<'_, S>| {
                let args = ctx.arguments.clone();
                let client = client.clone();
                async move { Ok::<_, ErrorData>(spec.call(client, args).await) }.boxed()
            },
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_client() -> Arc<WebmasterClient> {
        Arc::new(WebmasterClient::new("test-token"))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 29);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_user_id"));
        assert!(names.contains(&"verify_host"));
        assert!(names.contains(&"get_search_query_history"));
        assert!(names.contains(&"delete_sitemap"));
        assert!(names.contains(&"get_insearch_samples"));
        assert!(names.contains(&"get_recrawl_quota"));
    }

    #[test]
    fn test_registry_matches_router() {
        let client = test_client();
        let registry = ToolRegistry::new(client.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(client);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
