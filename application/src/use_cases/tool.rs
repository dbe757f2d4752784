//! The interface every tool implements towards its host.

use async_trait::async_trait;
use kagi_domain::{ToolCall, ToolDefinition, ToolInvocationResult};
use tokio_util::sync::CancellationToken;

/// A host-registered tool.
///
/// The host validates arguments against [`definition()`](Tool::definition)
/// before calling [`execute()`](Tool::execute). Execution never fails with an
/// `Err`: every failure is reported as a [`ToolInvocationResult`] with
/// `is_error` set.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Canonical tool name (e.g. `web_search`)
    fn name(&self) -> &'static str;

    /// Declared parameter schema
    fn definition(&self) -> ToolDefinition;

    /// Run the tool.
    ///
    /// `cancel` is honored at network boundaries; a cancelled invocation
    /// returns a `CANCELLED` error result.
    async fn execute(&self, call: &ToolCall, cancel: &CancellationToken) -> ToolInvocationResult;
}
