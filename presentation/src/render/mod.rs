//! Terminal rendering of tool calls and results
//!
//! Each tool has a [`ToolRenderer`] producing a one-line call summary and
//! a compact (or, when expanded, detailed) result view.

mod summarize;
mod theme;
mod web_search;

pub use summarize::SummarizeRenderer;
pub use theme::{Role, Theme};
pub use web_search::WebSearchRenderer;

use kagi_application::{SUMMARIZE, WEB_SEARCH};
use kagi_domain::{ToolCall, ToolInvocationResult};

/// How a result should be rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    /// Show individual results / content lines
    pub expanded: bool,
    /// The invocation is still running
    pub is_partial: bool,
}

impl RenderState {
    pub fn collapsed() -> Self {
        Self::default()
    }

    pub fn expanded() -> Self {
        Self {
            expanded: true,
            is_partial: false,
        }
    }

    pub fn partial() -> Self {
        Self {
            expanded: false,
            is_partial: true,
        }
    }
}

/// Renders one tool's calls and results
pub trait ToolRenderer: Send + Sync {
    fn render_call(&self, call: &ToolCall, theme: &Theme) -> String;

    fn render_result(&self, result: &ToolInvocationResult, state: RenderState, theme: &Theme)
    -> String;
}

/// Renderer for the named tool, if it has one
pub fn renderer_for(tool_name: &str) -> Option<&'static dyn ToolRenderer> {
    match tool_name {
        WEB_SEARCH => Some(&WebSearchRenderer),
        SUMMARIZE => Some(&SummarizeRenderer),
        _ => None,
    }
}

/// `Error: <message>` line shared by both renderers
pub(crate) fn error_line(message: &str, theme: &Theme) -> String {
    theme.fg(Role::Error, &format!("Error: {}", message))
}

pub(crate) fn truncated_marker(theme: &Theme) -> String {
    theme.fg(Role::Warning, " (truncated)")
}

pub(crate) fn full_output_line(path: &std::path::Path, theme: &Theme) -> String {
    format!(
        "\n  {}",
        theme.fg(Role::Dim, &format!("Full output: {}", path.display()))
    )
}
