//! Tool domain module
//!
//! Core abstractions for the agent-facing tools: how a tool is declared to a
//! host, how it is called, and what it hands back.
//!
//! ```text
//! ┌────────────────┐    ┌──────────────┐    ┌──────────────────────┐
//! │ ToolDefinition │───▶│ ToolCall     │───▶│ ToolInvocationResult │
//! │ (schema)       │    │ (invocation) │    │ content + details    │
//! └────────────────┘    └──────────────┘    └──────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ToolSpec`]: Registry of tool definitions by name
//! - [`ToolDefinition`]: Schema for a single tool (name, label, params)
//! - [`ToolCall`]: An invocation request with JSON arguments
//! - [`ToolInvocationResult`]: Content blocks, a [`ToolDetails`] record and an error flag
//! - [`ToolError`]: Structured error tag carried in the details
//! - [`ToolValidator`]: Pure domain trait for parameter validation
//!
//! # Architecture
//!
//! - **Domain** (this module): Pure definitions, no I/O
//! - **Application** (`Tool`): async execution against ports
//! - **Infrastructure**: the HTTP gateway and temp-file store behind those ports

pub mod details;
pub mod entities;
pub mod traits;
pub mod value_objects;

pub use details::{SummarizeDetails, ToolDetails, WebSearchDetails};
pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ContentBlock, ToolError, ToolInvocationResult};
