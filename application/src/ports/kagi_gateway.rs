//! Kagi Gateway port
//!
//! Defines the interface for talking to the Kagi search and summarizer APIs.

use crate::config::ApiKey;
use async_trait::async_trait;
use kagi_domain::{SearchResult, SummarizeOptions, Summary, ToolError};
use thiserror::Error;

/// Errors that can occur during Kagi gateway operations.
///
/// Every variant is terminal for the invocation; there is no retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KagiError {
    /// Request could not be sent or the connection failed.
    /// `context` reads like `searching for "rust"`.
    #[error("Network error while {context}: {message}")]
    Network { context: String, message: String },

    #[error("Kagi API returned HTTP {status}{}", api_suffix(.messages))]
    HttpStatus { status: u16, messages: Vec<String> },

    /// `target` is the query or URL whose response could not be parsed
    #[error("Failed to parse Kagi API response for \"{target}\"")]
    Parse { target: String },

    #[error("Kagi API error: {}", .messages.join(", "))]
    Api { messages: Vec<String> },

    #[error("Kagi API returned no summary output")]
    EmptyOutput,
}

fn api_suffix(messages: &[String]) -> String {
    if messages.is_empty() {
        String::new()
    } else {
        format!(": {}", messages.join(", "))
    }
}

impl KagiError {
    /// Structured error tag for this failure
    pub fn code(&self) -> &'static str {
        match self {
            KagiError::Network { .. } => ToolError::NETWORK_ERROR,
            KagiError::HttpStatus { .. } => ToolError::HTTP_STATUS,
            KagiError::Parse { .. } => ToolError::PARSE_ERROR,
            KagiError::Api { .. } => ToolError::API_ERROR,
            KagiError::EmptyOutput => ToolError::EMPTY_RESULT,
        }
    }
}

impl From<&KagiError> for ToolError {
    fn from(error: &KagiError) -> Self {
        let tool_error = ToolError::new(error.code(), error.to_string());
        match error {
            KagiError::HttpStatus { status, .. } => {
                tool_error.with_details(format!("status {}", status))
            }
            _ => tool_error,
        }
    }
}

/// Gateway for the Kagi REST API
///
/// This port defines how the application layer reaches Kagi.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait KagiGateway: Send + Sync {
    /// Run every query in order, one request at a time.
    ///
    /// Returns the search-result hits of all queries flattened in query order,
    /// then API order. The first failing query fails the whole batch and
    /// discards anything gathered so far.
    async fn search(
        &self,
        queries: &[String],
        api_key: &ApiKey,
    ) -> Result<Vec<SearchResult>, KagiError>;

    /// Summarize the document at `url`.
    ///
    /// Only the options that are `Some` are sent.
    async fn summarize(
        &self,
        url: &str,
        api_key: &ApiKey,
        options: &SummarizeOptions,
    ) -> Result<Summary, KagiError>;
}
