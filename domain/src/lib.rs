//! Domain layer for kagi-tools
//!
//! This crate contains the core entities and value objects for the
//! `web_search` and `summarize` tools. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Tool**: a named capability with a declared parameter schema,
//!   invoked with a [`ToolCall`] and answered with a [`ToolInvocationResult`]
//! - **Search**: ranked [`SearchResult`] hits for one or more queries
//! - **Summary**: a [`Summary`] of a document, shaped by [`SummarizeOptions`]
//! - **Truncation**: head truncation bounded by lines and bytes

pub mod core;
pub mod search;
pub mod summary;
pub mod tool;
pub mod truncation;

// Re-export commonly used types
pub use core::error::DomainError;
pub use search::{SearchResult, format_results};
pub use summary::{SummarizeOptions, Summary, SummaryEngine, SummaryType};
pub use tool::{
    details::{SummarizeDetails, ToolDetails, WebSearchDetails},
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ContentBlock, ToolError, ToolInvocationResult},
};
pub use truncation::{
    DEFAULT_MAX_BYTES, DEFAULT_MAX_LINES, TruncatedBy, TruncationLimits, TruncationResult,
    format_size, truncate_head,
};
