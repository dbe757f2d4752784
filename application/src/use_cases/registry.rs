//! Tool registry: name-based dispatch with host-side validation.

use super::tool::Tool;
use kagi_domain::{
    DefaultToolValidator, ToolCall, ToolDetails, ToolError, ToolInvocationResult, ToolSpec,
    ToolValidator,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Registered tools, keyed by canonical name.
///
/// Plays the host's part: arguments are validated against the tool's
/// declared schema before `execute` is called.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    spec: ToolSpec,
    validator: DefaultToolValidator,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, tool: Arc<dyn Tool>) -> Self {
        self.spec = std::mem::take(&mut self.spec).register(tool.definition());
        self.tools.insert(tool.name().to_string(), tool);
        self
    }

    pub fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    /// Validate and execute `call` with the matching tool
    pub async fn execute(&self, call: &ToolCall, cancel: &CancellationToken) -> ToolInvocationResult {
        let (Some(tool), Some(definition)) =
            (self.tools.get(&call.tool_name), self.spec.get(&call.tool_name))
        else {
            let error = ToolError::not_found(&call.tool_name);
            warn!(tool = %call.tool_name, "Unknown tool requested");
            return ToolInvocationResult::failure(
                &error,
                ToolDetails::None {
                    error: Some(error.clone()),
                },
            );
        };

        if let Err(message) = self.validator.validate(call, definition) {
            debug!(tool = %call.tool_name, %message, "Tool call failed validation");
            let error = ToolError::invalid_argument(message);
            return ToolInvocationResult::failure(
                &error,
                ToolDetails::None {
                    error: Some(error.clone()),
                },
            );
        }

        tool.execute(call, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolsConfig;
    use crate::use_cases::summarize::{SUMMARIZE, SummarizeTool};
    use crate::use_cases::test_support::{MemoryStore, MockGateway};
    use crate::use_cases::web_search::{WEB_SEARCH, WebSearchTool};
    use kagi_domain::SearchResult;

    fn registry(gateway: Arc<MockGateway>) -> ToolRegistry {
        let store = Arc::new(MemoryStore::default());
        let config = Arc::new(ToolsConfig::new().with_api_key("key"));
        ToolRegistry::new()
            .register(Arc::new(WebSearchTool::new(
                gateway.clone(),
                store.clone(),
                config.clone(),
            )))
            .register(Arc::new(SummarizeTool::new(gateway, store, config)))
    }

    #[test]
    fn test_spec_lists_both_tools() {
        let registry = registry(Arc::new(MockGateway::new()));
        assert_eq!(registry.spec().len(), 2);
        assert!(registry.spec().get(WEB_SEARCH).is_some());
        assert!(registry.spec().get(SUMMARIZE).is_some());
    }

    #[tokio::test]
    async fn test_dispatches_by_name() {
        let gateway = Arc::new(
            MockGateway::new().with_search(Ok(vec![SearchResult::new("Rust", "https://rust-lang.org")])),
        );
        let registry = registry(gateway.clone());
        let call = ToolCall::new(WEB_SEARCH).with_arg("queries", serde_json::json!(["rust"]));

        let result = registry.execute(&call, &CancellationToken::new()).await;

        assert!(!result.is_error);
        assert_eq!(gateway.search_calls(), 1);
        assert_eq!(gateway.summarize_calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let registry = registry(Arc::new(MockGateway::new()));
        let result = registry
            .execute(&ToolCall::new("web_fetch"), &CancellationToken::new())
            .await;

        assert!(result.is_error);
        assert_eq!(result.error().unwrap().code, ToolError::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validation_runs_before_execute() {
        let gateway = Arc::new(MockGateway::new());
        let registry = registry(gateway.clone());
        let call = ToolCall::new(SUMMARIZE)
            .with_arg("url", "https://x")
            .with_arg("engine", "muriel");

        let result = registry.execute(&call, &CancellationToken::new()).await;

        assert!(result.is_error);
        assert_eq!(gateway.summarize_calls(), 0);
        assert_eq!(result.error().unwrap().code, ToolError::INVALID_ARGUMENT);
        assert!(result.text().contains("must be one of: cecil, agnes"));
    }
}
