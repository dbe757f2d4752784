//! Tool domain value objects: immutable result and error types
//!
//! Every tool invocation produces a [`ToolInvocationResult`]: the content
//! blocks handed to the model, a [`ToolDetails`] record consumed by the
//! renderer, and an `is_error` flag. Failures carry a [`ToolError`] whose
//! `code` is the structured error tag.

use super::details::ToolDetails;
use serde::{Deserialize, Serialize};

/// Error that occurred during tool execution.
///
/// | Code | Description |
/// |------|-------------|
/// | `MISSING_API_KEY` | No credential configured; no request was made |
/// | `INVALID_ARGUMENT` | Arguments did not match the tool's schema |
/// | `NOT_FOUND` | Unknown tool name |
/// | `NETWORK_ERROR` | Request could not be sent or completed |
/// | `HTTP_STATUS` | Non-2xx response |
/// | `PARSE_ERROR` | Response body was not the expected JSON |
/// | `API_ERROR` | Service reported an error in a 2xx body |
/// | `EMPTY_RESULT` | Service returned no output |
/// | `CANCELLED` | Invocation was aborted |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "MISSING_API_KEY", "HTTP_STATUS")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ToolError {
    pub const MISSING_API_KEY: &'static str = "MISSING_API_KEY";
    pub const INVALID_ARGUMENT: &'static str = "INVALID_ARGUMENT";
    pub const NOT_FOUND: &'static str = "NOT_FOUND";
    pub const NETWORK_ERROR: &'static str = "NETWORK_ERROR";
    pub const HTTP_STATUS: &'static str = "HTTP_STATUS";
    pub const PARSE_ERROR: &'static str = "PARSE_ERROR";
    pub const API_ERROR: &'static str = "API_ERROR";
    pub const EMPTY_RESULT: &'static str = "EMPTY_RESULT";
    pub const CANCELLED: &'static str = "CANCELLED";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn missing_api_key(message: impl Into<String>) -> Self {
        Self::new(Self::MISSING_API_KEY, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_ARGUMENT, message)
    }

    pub fn not_found(tool_name: impl Into<String>) -> Self {
        Self::new(
            Self::NOT_FOUND,
            format!("Unknown tool: {}", tool_name.into()),
        )
    }

    pub fn cancelled() -> Self {
        Self::new(Self::CANCELLED, "Operation cancelled")
    }

    pub fn is_missing_api_key(&self) -> bool {
        self.code == Self::MISSING_API_KEY
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// A block of content returned to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn as_text(&self) -> &str {
        match self {
            ContentBlock::Text { text } => text,
        }
    }
}

/// Result of a tool invocation, as returned to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInvocationResult {
    pub content: Vec<ContentBlock>,
    pub details: ToolDetails,
    #[serde(default)]
    pub is_error: bool,
}

impl ToolInvocationResult {
    /// Create a successful result with a single text block
    pub fn success(text: impl Into<String>, details: impl Into<ToolDetails>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            details: details.into(),
            is_error: false,
        }
    }

    /// Create a failed result; the error message becomes the text block
    pub fn failure(error: &ToolError, details: impl Into<ToolDetails>) -> Self {
        Self {
            content: vec![ContentBlock::text(error.message.clone())],
            details: details.into(),
            is_error: true,
        }
    }

    /// Text of the first content block, or "" when there is none
    pub fn text(&self) -> &str {
        self.content.first().map(|b| b.as_text()).unwrap_or("")
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.details.error()
    }
}
