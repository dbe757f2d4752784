//! `web_search` rendering

use super::{RenderState, Role, Theme, ToolRenderer, error_line, full_output_line, truncated_marker};
use kagi_domain::{ToolCall, ToolDetails, ToolInvocationResult};

/// Results listed in the expanded view
const MAX_EXPANDED_RESULTS: usize = 10;

pub struct WebSearchRenderer;

impl ToolRenderer for WebSearchRenderer {
    fn render_call(&self, call: &ToolCall, theme: &Theme) -> String {
        let queries = call
            .get_string_array("queries")
            .unwrap_or_default()
            .iter()
            .map(|q| format!("\"{}\"", q))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}{}",
            theme.fg(Role::ToolTitle, &theme.bold("web_search ")),
            theme.fg(Role::Accent, &queries)
        )
    }

    fn render_result(
        &self,
        result: &ToolInvocationResult,
        state: RenderState,
        theme: &Theme,
    ) -> String {
        if state.is_partial {
            return theme.fg(Role::Warning, "Searching...");
        }

        if let Some(error) = result.error() {
            return error_line(&error.message, theme);
        }
        if result.is_error {
            return error_line(result.text(), theme);
        }

        let details = match &result.details {
            ToolDetails::WebSearch(d) if d.result_count > 0 => d,
            _ => return theme.fg(Role::Dim, "No results found"),
        };

        let mut text = theme.fg(Role::Success, &format!("{} results", details.result_count));

        if result.details.is_truncated() {
            text.push_str(&truncated_marker(theme));
        }

        if state.expanded
            && let Some(results) = &details.results
        {
            for r in results.iter().take(MAX_EXPANDED_RESULTS) {
                text.push_str(&format!("\n  {}", theme.fg(Role::Accent, &r.title)));
                text.push_str(&format!("\n  {}", theme.fg(Role::Dim, &r.url)));
                if r.has_snippet() {
                    text.push_str(&format!("\n  {}", theme.fg(Role::Muted, &r.snippet)));
                }
            }
            if results.len() > MAX_EXPANDED_RESULTS {
                let more = format!("... and {} more", results.len() - MAX_EXPANDED_RESULTS);
                text.push_str(&format!("\n  {}", theme.fg(Role::Muted, &more)));
            }
            if let Some(path) = result.details.full_output_path() {
                text.push_str(&full_output_line(path, theme));
            }
        }

        text
    }
}
