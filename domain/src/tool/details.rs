//! Per-tool details records.
//!
//! The host treats these as opaque; only the renderers look inside.

use super::value_objects::ToolError;
use crate::search::SearchResult;
use crate::summary::{SummaryEngine, SummaryType};
use crate::truncation::TruncationResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Details for a `web_search` invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSearchDetails {
    pub queries: Vec<String>,
    pub result_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SearchResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncation: Option<TruncationResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_output_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
}

impl WebSearchDetails {
    pub fn new(queries: Vec<String>) -> Self {
        Self {
            queries,
            ..Default::default()
        }
    }

    pub fn with_results(mut self, results: Vec<SearchResult>) -> Self {
        self.result_count = results.len();
        self.results = Some(results);
        self
    }

    pub fn with_error(mut self, error: ToolError) -> Self {
        self.error = Some(error);
        self
    }
}

/// Details for a `summarize` invocation.
///
/// `summary_type` and `engine` are the effective values (defaults applied),
/// which may differ from what was sent to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeDetails {
    pub url: String,
    pub summary_type: SummaryType,
    pub engine: SummaryEngine,
    pub tokens: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncation: Option<TruncationResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_output_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
}

impl SummarizeDetails {
    pub fn new(url: impl Into<String>, summary_type: SummaryType, engine: SummaryEngine) -> Self {
        Self {
            url: url.into(),
            summary_type,
            engine,
            tokens: 0,
            truncation: None,
            full_output_path: None,
            error: None,
        }
    }

    pub fn with_tokens(mut self, tokens: u64) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_error(mut self, error: ToolError) -> Self {
        self.error = Some(error);
        self
    }
}

/// Details record attached to every [`ToolInvocationResult`](super::ToolInvocationResult)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolDetails {
    WebSearch(WebSearchDetails),
    Summarize(SummarizeDetails),
    /// Used when no tool-specific record could be built (e.g. unknown tool)
    None {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<ToolError>,
    },
}

impl ToolDetails {
    pub fn error(&self) -> Option<&ToolError> {
        match self {
            ToolDetails::WebSearch(d) => d.error.as_ref(),
            ToolDetails::Summarize(d) => d.error.as_ref(),
            ToolDetails::None { error } => error.as_ref(),
        }
    }

    pub fn truncation(&self) -> Option<&TruncationResult> {
        match self {
            ToolDetails::WebSearch(d) => d.truncation.as_ref(),
            ToolDetails::Summarize(d) => d.truncation.as_ref(),
            ToolDetails::None { .. } => None,
        }
    }

    pub fn full_output_path(&self) -> Option<&Path> {
        match self {
            ToolDetails::WebSearch(d) => d.full_output_path.as_deref(),
            ToolDetails::Summarize(d) => d.full_output_path.as_deref(),
            ToolDetails::None { .. } => None,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.truncation().is_some_and(|t| t.truncated)
    }

    /// Record a truncation and (when the spill succeeded) the full output path
    pub fn set_truncation(&mut self, truncation: TruncationResult, path: Option<PathBuf>) {
        match self {
            ToolDetails::WebSearch(d) => {
                d.truncation = Some(truncation);
                d.full_output_path = path;
            }
            ToolDetails::Summarize(d) => {
                d.truncation = Some(truncation);
                d.full_output_path = path;
            }
            ToolDetails::None { .. } => {}
        }
    }
}

impl From<WebSearchDetails> for ToolDetails {
    fn from(details: WebSearchDetails) -> Self {
        ToolDetails::WebSearch(details)
    }
}

impl From<SummarizeDetails> for ToolDetails {
    fn from(details: SummarizeDetails) -> Self {
        ToolDetails::Summarize(details)
    }
}
