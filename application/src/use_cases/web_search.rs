//! `web_search` tool: search the web through Kagi.
//!
//! # Parameters
//!
//! | Name | Type | Required | Description |
//! |------|------|:---:|-------------|
//! | `queries` | string[] | Yes | One or more keyword-focused queries |
//!
//! Queries run one after another; the first failure fails the whole call.
//! Results are listed as `N. title / url / snippet` blocks and bounded by
//! the configured [`TruncationLimits`](kagi_domain::TruncationLimits).

use super::shared::bound_output;
use super::tool::Tool;
use crate::config::ToolsConfig;
use crate::ports::kagi_gateway::KagiGateway;
use crate::ports::output_store::OutputStore;
use async_trait::async_trait;
use kagi_domain::{
    ToolCall, ToolDefinition, ToolDetails, ToolError, ToolInvocationResult, ToolParameter,
    WebSearchDetails, format_results,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Canonical tool name for the web search tool.
pub const WEB_SEARCH: &str = "web_search";

/// Prefix of the temp directory holding spilled output
const SPILL_PREFIX: &str = "pi-web-search-";

const TOOL_DESCRIPTION: &str = r#"Search the web for real-time information using one or more queries. Returns ranked results with titles, URLs, and snippets.

When to use:
- Looking up documentation, APIs, libraries, or error messages you're unsure about
- Answering questions about recent events, releases, or data beyond your training cutoff
- Verifying assumptions or checking for updated best practices

Tips for effective queries:
- Write concise, keyword-focused queries and include the current year for time-sensitive topics
- Use multiple queries to cover different angles of a broad question
- Prefer specific technical terms over natural language when searching for code or docs

After using search results in your response, include a "Sources" section listing the URLs you referenced as markdown links, e.g.:
Sources:
- [Page Title](https://example.com)"#;

#[derive(Debug, Deserialize)]
struct WebSearchParams {
    queries: Vec<String>,
}

/// Create the [`ToolDefinition`] for `web_search`.
pub fn web_search_definition() -> ToolDefinition {
    ToolDefinition::new(WEB_SEARCH, "Web Search", TOOL_DESCRIPTION).with_parameter(
        ToolParameter::new(
            "queries",
            "One or more concise, keyword-focused search queries",
            true,
        )
        .with_items("string"),
    )
}

/// The `web_search` tool
pub struct WebSearchTool<G: KagiGateway + 'static> {
    gateway: Arc<G>,
    store: Arc<dyn OutputStore>,
    config: Arc<ToolsConfig>,
}

impl<G: KagiGateway + 'static> WebSearchTool<G> {
    pub fn new(gateway: Arc<G>, store: Arc<dyn OutputStore>, config: Arc<ToolsConfig>) -> Self {
        Self {
            gateway,
            store,
            config,
        }
    }

    fn fail(&self, queries: Vec<String>, error: ToolError) -> ToolInvocationResult {
        warn!(code = %error.code, "web_search failed: {}", error.message);
        let details = WebSearchDetails::new(queries).with_error(error.clone());
        ToolInvocationResult::failure(&error, details)
    }
}

#[async_trait]
impl<G: KagiGateway + 'static> Tool for WebSearchTool<G> {
    fn name(&self) -> &'static str {
        WEB_SEARCH
    }

    fn definition(&self) -> ToolDefinition {
        web_search_definition()
    }

    async fn execute(&self, call: &ToolCall, cancel: &CancellationToken) -> ToolInvocationResult {
        let params: WebSearchParams = match call.parse_args() {
            Ok(p) => p,
            Err(e) => {
                let queries = call
                    .get_string_array("queries")
                    .map(|qs| qs.into_iter().map(String::from).collect())
                    .unwrap_or_default();
                return self.fail(queries, ToolError::invalid_argument(e));
            }
        };

        let Some(api_key) = self.config.api_key.as_ref() else {
            return self.fail(
                params.queries,
                ToolError::missing_api_key(
                    "KAGI_API_KEY environment variable is not set. Set it to your Kagi API key to use web search.",
                ),
            );
        };

        debug!(queries = ?params.queries, "Executing web_search");

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            outcome = self.gateway.search(&params.queries, api_key) => Some(outcome),
        };

        let results = match outcome {
            Some(Ok(results)) => results,
            Some(Err(e)) => return self.fail(params.queries, ToolError::from(&e)),
            None => return self.fail(params.queries, ToolError::cancelled()),
        };

        if results.is_empty() {
            return ToolInvocationResult::success(
                "No results found.",
                WebSearchDetails::new(params.queries),
            );
        }

        let output = format_results(&results);
        let bounded = bound_output(&output, self.config.limits, self.store.as_ref(), SPILL_PREFIX);

        let result_count = results.len();
        let mut details: ToolDetails = WebSearchDetails::new(params.queries).with_results(results).into();
        if let Some(truncation) = bounded.truncation {
            details.set_truncation(truncation, bounded.full_output_path);
        }

        debug!(result_count, "web_search complete");
        ToolInvocationResult::success(bounded.text, details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::kagi_gateway::KagiError;
    use crate::use_cases::test_support::{MemoryStore, MockGateway};
    use kagi_domain::{SearchResult, TruncationLimits};

    fn tool(gateway: Arc<MockGateway>, config: ToolsConfig) -> (WebSearchTool<MockGateway>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let tool = WebSearchTool::new(gateway, store.clone(), Arc::new(config));
        (tool, store)
    }

    fn call(queries: &[&str]) -> ToolCall {
        ToolCall::new(WEB_SEARCH).with_arg("queries", serde_json::json!(queries))
    }

    fn web_details(result: &ToolInvocationResult) -> &WebSearchDetails {
        match &result.details {
            ToolDetails::WebSearch(d) => d,
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_makes_no_request() {
        let gateway = Arc::new(MockGateway::new());
        let (tool, _) = tool(gateway.clone(), ToolsConfig::new());

        let result = tool
            .execute(&call(&["rust ownership"]), &CancellationToken::new())
            .await;

        assert!(result.is_error);
        assert_eq!(gateway.search_calls(), 0);
        assert!(result.text().starts_with("KAGI_API_KEY environment variable is not set"));
        assert!(result.text().ends_with("to use web search."));
        let details = web_details(&result);
        assert!(details.error.as_ref().unwrap().is_missing_api_key());
        assert_eq!(details.queries, vec!["rust ownership"]);
        assert_eq!(details.result_count, 0);
    }

    #[tokio::test]
    async fn test_results_are_formatted() {
        let gateway = Arc::new(MockGateway::new().with_search(Ok(vec![
            SearchResult::new("The Book", "https://doc.rust-lang.org/book/")
                .with_snippet("Understanding ownership"),
            SearchResult::new("Nomicon", "https://doc.rust-lang.org/nomicon/"),
        ])));
        let (tool, store) = tool(gateway.clone(), ToolsConfig::new().with_api_key("key"));

        let result = tool
            .execute(&call(&["rust ownership", "rust unsafe"]), &CancellationToken::new())
            .await;

        assert!(!result.is_error);
        assert_eq!(gateway.search_calls(), 1);
        assert_eq!(gateway.last_queries(), vec!["rust ownership", "rust unsafe"]);
        assert_eq!(gateway.last_key().as_deref(), Some("key"));
        assert_eq!(
            result.text(),
            "1. The Book\n   https://doc.rust-lang.org/book/\n   Understanding ownership\n\n\
             2. Nomicon\n   https://doc.rust-lang.org/nomicon/"
        );

        let details = web_details(&result);
        assert_eq!(details.result_count, 2);
        assert_eq!(details.results.as_ref().unwrap().len(), 2);
        assert!(details.truncation.is_none());
        assert!(store.saved().is_empty());
    }

    #[tokio::test]
    async fn test_zero_results_is_not_an_error() {
        let gateway = Arc::new(MockGateway::new().with_search(Ok(vec![])));
        let (tool, _) = tool(gateway, ToolsConfig::new().with_api_key("key"));

        let result = tool.execute(&call(&["zzzz"]), &CancellationToken::new()).await;

        assert!(!result.is_error);
        assert_eq!(result.text(), "No results found.");
        let details = web_details(&result);
        assert_eq!(details.result_count, 0);
        assert!(details.results.is_none());
        assert!(details.error.is_none());
    }

    #[tokio::test]
    async fn test_gateway_failure_becomes_error_result() {
        let gateway = Arc::new(MockGateway::new().with_search(Err(KagiError::HttpStatus {
            status: 401,
            messages: vec!["Unauthorized".to_string()],
        })));
        let (tool, _) = tool(gateway, ToolsConfig::new().with_api_key("key"));

        let result = tool.execute(&call(&["rust"]), &CancellationToken::new()).await;

        assert!(result.is_error);
        assert_eq!(result.text(), "Kagi API returned HTTP 401: Unauthorized");
        let error = web_details(&result).error.as_ref().unwrap();
        assert_eq!(error.code, ToolError::HTTP_STATUS);
    }

    #[tokio::test]
    async fn test_truncated_output_spills_full_text() {
        let results: Vec<SearchResult> = (1..=5)
            .map(|i| SearchResult::new(format!("Title {}", i), format!("https://example.com/{}", i)))
            .collect();
        let full_text = format_results(&results);
        let gateway = Arc::new(MockGateway::new().with_search(Ok(results)));
        let config = ToolsConfig::new()
            .with_api_key("key")
            .with_limits(TruncationLimits::new(4, 10_000).unwrap());
        let (tool, store) = tool(gateway, config);

        let result = tool.execute(&call(&["many"]), &CancellationToken::new()).await;

        assert!(!result.is_error);
        let details = web_details(&result);
        let truncation = details.truncation.as_ref().unwrap();
        assert_eq!(truncation.output_lines, 4);
        assert_eq!(truncation.total_lines, 14);

        let path = details.full_output_path.as_ref().unwrap();
        assert!(result.text().contains("[Output truncated: showing 4 of 14 lines"));
        assert!(result.text().ends_with(&format!("Full output saved to: {}]", path.display())));

        let saved = store.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, "pi-web-search-");
        assert_eq!(saved[0].1, full_text);
    }

    #[tokio::test]
    async fn test_invalid_arguments() {
        let gateway = Arc::new(MockGateway::new());
        let (tool, _) = tool(gateway.clone(), ToolsConfig::new().with_api_key("key"));

        let result = tool
            .execute(&ToolCall::new(WEB_SEARCH).with_arg("queries", "rust"), &CancellationToken::new())
            .await;

        assert!(result.is_error);
        assert_eq!(gateway.search_calls(), 0);
        assert_eq!(
            web_details(&result).error.as_ref().unwrap().code,
            ToolError::INVALID_ARGUMENT
        );
    }

    #[tokio::test]
    async fn test_cancelled_before_request() {
        let gateway = Arc::new(MockGateway::new().with_search(Ok(vec![SearchResult::new("a", "https://a")])));
        let (tool, _) = tool(gateway, ToolsConfig::new().with_api_key("key"));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = tool.execute(&call(&["rust"]), &cancel).await;

        assert!(result.is_error);
        assert_eq!(web_details(&result).error.as_ref().unwrap().code, ToolError::CANCELLED);
    }

    #[test]
    fn test_definition() {
        let definition = web_search_definition();
        assert_eq!(definition.name, "web_search");
        let queries = definition.parameter("queries").unwrap();
        assert!(queries.required);
        assert_eq!(queries.param_type, "array");
    }
}
