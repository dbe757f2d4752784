//! Application layer for kagi-tools
//!
//! This crate contains the tools, port definitions, and tool configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{API_KEY_ENV, ApiKey, ToolsConfig};
pub use ports::{
    kagi_gateway::{KagiError, KagiGateway},
    output_store::OutputStore,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::{
    registry::ToolRegistry,
    summarize::{SUMMARIZE, SummarizeTool, summarize_definition},
    tool::Tool,
    web_search::{WEB_SEARCH, WebSearchTool, web_search_definition},
};
