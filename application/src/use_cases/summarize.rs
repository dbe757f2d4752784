//! `summarize` tool: summarize a document through the Kagi Universal Summarizer.
//!
//! # Parameters
//!
//! | Name | Type | Required | Description |
//! |------|------|:---:|-------------|
//! | `url` | string | Yes | Document to summarize |
//! | `summary_type` | `summary` \| `takeaway` | No | Prose or bullet points |
//! | `engine` | `cecil` \| `agnes` | No | General-purpose or technical engine |
//! | `target_language` | string | No | Output language code (`EN`, `DE`, ...) |
//!
//! Omitted options are not sent; the service picks its own defaults. The
//! details record shows the effective values for display.

use super::shared::bound_output;
use super::tool::Tool;
use crate::config::ToolsConfig;
use crate::ports::kagi_gateway::KagiGateway;
use crate::ports::output_store::OutputStore;
use async_trait::async_trait;
use kagi_domain::{
    SummarizeDetails, SummarizeOptions, SummaryEngine, SummaryType, ToolCall, ToolDefinition,
    ToolDetails, ToolError, ToolInvocationResult, ToolParameter,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Canonical tool name for the summarize tool.
pub const SUMMARIZE: &str = "summarize";

const SPILL_PREFIX: &str = "pi-summarize-";

const TOOL_DESCRIPTION: &str = r#"Summarize content from a URL. Works with web pages, PDFs, videos, podcasts, and other document types. Returns a concise summary to avoid consuming excessive context on long documents.

When to use:
- Digesting long documentation pages, release notes, or changelogs
- Getting key points from a video or podcast transcript
- Summarizing a PDF or technical paper
- Understanding a lengthy discussion thread or blog post

Parameters:
- url (required): The URL to summarize
- summary_type (optional): "summary" for paragraph prose (default), or "takeaway" for a bulleted list of key points
- engine (optional): Summarization engine to use:
  - "cecil" (default): Fast, general-purpose, good for most content
  - "agnes": Formal, technical, analytical, better for technical docs, papers, and specs
- target_language (optional): Language code for the output (e.g., "EN", "DE", "JA"). Defaults to the document's language."#;

#[derive(Debug, Deserialize)]
struct SummarizeParams {
    url: String,
    #[serde(default)]
    summary_type: Option<SummaryType>,
    #[serde(default)]
    engine: Option<SummaryEngine>,
    #[serde(default)]
    target_language: Option<String>,
}

impl SummarizeParams {
    fn options(&self) -> SummarizeOptions {
        SummarizeOptions {
            summary_type: self.summary_type,
            engine: self.engine,
            target_language: self.target_language.clone(),
        }
    }
}

/// Create the [`ToolDefinition`] for `summarize`.
pub fn summarize_definition() -> ToolDefinition {
    ToolDefinition::new(SUMMARIZE, "Summarize", TOOL_DESCRIPTION)
        .with_parameter(ToolParameter::new(
            "url",
            "A URL to a document to summarize",
            true,
        ))
        .with_parameter(
            ToolParameter::new(
                "summary_type",
                "Type of summary: \"summary\" for paragraph prose (default), \"takeaway\" for bullet points",
                false,
            )
            .with_allowed_values(SummaryType::VARIANTS),
        )
        .with_parameter(
            ToolParameter::new(
                "engine",
                "Summarization engine: \"cecil\" (default, fast general-purpose) or \"agnes\" (formal, technical, analytical)",
                false,
            )
            .with_allowed_values(SummaryEngine::VARIANTS),
        )
        .with_parameter(ToolParameter::new(
            "target_language",
            "Language code for the output (e.g., \"EN\", \"DE\", \"JA\"). Defaults to the document's language.",
            false,
        ))
}

/// The `summarize` tool
pub struct SummarizeTool<G: KagiGateway + 'static> {
    gateway: Arc<G>,
    store: Arc<dyn OutputStore>,
    config: Arc<ToolsConfig>,
}

impl<G: KagiGateway + 'static> SummarizeTool<G> {
    pub fn new(gateway: Arc<G>, store: Arc<dyn OutputStore>, config: Arc<ToolsConfig>) -> Self {
        Self {
            gateway,
            store,
            config,
        }
    }

    fn fail(&self, details: SummarizeDetails, error: ToolError) -> ToolInvocationResult {
        warn!(code = %error.code, "summarize failed: {}", error.message);
        let details = details.with_error(error.clone());
        ToolInvocationResult::failure(&error, details)
    }
}

#[async_trait]
impl<G: KagiGateway + 'static> Tool for SummarizeTool<G> {
    fn name(&self) -> &'static str {
        SUMMARIZE
    }

    fn definition(&self) -> ToolDefinition {
        summarize_definition()
    }

    async fn execute(&self, call: &ToolCall, cancel: &CancellationToken) -> ToolInvocationResult {
        let params: SummarizeParams = match call.parse_args() {
            Ok(p) => p,
            Err(e) => {
                let url = call.get_string("url").unwrap_or_default();
                let details =
                    SummarizeDetails::new(url, SummaryType::default(), SummaryEngine::default());
                return self.fail(details, ToolError::invalid_argument(e));
            }
        };

        let options = params.options();
        let details = SummarizeDetails::new(
            params.url.clone(),
            options.effective_summary_type(),
            options.effective_engine(),
        );

        let Some(api_key) = self.config.api_key.as_ref() else {
            return self.fail(
                details,
                ToolError::missing_api_key(
                    "KAGI_API_KEY environment variable is not set. Set it to your Kagi API key to use summarize.",
                ),
            );
        };

        debug!(url = %params.url, ?options, "Executing summarize");

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            outcome = self.gateway.summarize(&params.url, api_key, &options) => Some(outcome),
        };

        let summary = match outcome {
            Some(Ok(summary)) => summary,
            Some(Err(e)) => return self.fail(details, ToolError::from(&e)),
            None => return self.fail(details, ToolError::cancelled()),
        };

        let bounded = bound_output(
            &summary.output,
            self.config.limits,
            self.store.as_ref(),
            SPILL_PREFIX,
        );

        let mut details: ToolDetails = details.with_tokens(summary.tokens).into();
        if let Some(truncation) = bounded.truncation {
            details.set_truncation(truncation, bounded.full_output_path);
        }

        debug!(tokens = summary.tokens, "summarize complete");
        ToolInvocationResult::success(bounded.text, details)
    }
}
