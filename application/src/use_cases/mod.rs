//! Use cases: the agent-facing tools
//!
//! Each tool reads its credential from [`ToolsConfig`](crate::config::ToolsConfig),
//! delegates to the [`KagiGateway`](crate::ports::kagi_gateway::KagiGateway) port,
//! and bounds its output through the shared truncation/spill step.

pub mod registry;
pub(crate) mod shared;
pub mod summarize;
pub mod tool;
pub mod web_search;

#[cfg(test)]
pub(crate) mod test_support;
