//! `summarize` rendering

use super::{RenderState, Role, Theme, ToolRenderer, error_line, full_output_line, truncated_marker};
use kagi_domain::{SummaryEngine, SummaryType, ToolCall, ToolDetails, ToolInvocationResult};

/// Content lines shown in the expanded view
const MAX_EXPANDED_LINES: usize = 20;

pub struct SummarizeRenderer;

impl ToolRenderer for SummarizeRenderer {
    fn render_call(&self, call: &ToolCall, theme: &Theme) -> String {
        let url = call.get_string("url").unwrap_or_default();
        let mut text = format!(
            "{}{}",
            theme.fg(Role::ToolTitle, &theme.bold("summarize ")),
            theme.fg(Role::Accent, &format!("\"{}\"", url))
        );

        // Engine first, then type; defaults are not worth mentioning
        let extras: Vec<&str> = [
            call.get_string("engine")
                .filter(|e| !e.parse::<SummaryEngine>().is_ok_and(|e| e.is_default())),
            call.get_string("summary_type")
                .filter(|t| !t.parse::<SummaryType>().is_ok_and(|t| t.is_default())),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !extras.is_empty() {
            text.push_str(&theme.fg(Role::Dim, &format!(" ({})", extras.join(", "))));
        }
        text
    }

    fn render_result(
        &self,
        result: &ToolInvocationResult,
        state: RenderState,
        theme: &Theme,
    ) -> String {
        if state.is_partial {
            return theme.fg(Role::Warning, "Summarizing...");
        }

        if let Some(error) = result.error() {
            return error_line(&error.message, theme);
        }
        if result.is_error {
            return error_line(result.text(), theme);
        }

        let ToolDetails::Summarize(details) = &result.details else {
            return theme.fg(Role::Dim, "No summary available");
        };

        let mut text = theme.fg(
            Role::Success,
            &format!(
                "{} · {} · {} tokens",
                details.engine, details.summary_type, details.tokens
            ),
        );

        if result.details.is_truncated() {
            text.push_str(&truncated_marker(theme));
        }

        if state.expanded {
            let content = result.text();
            if !content.is_empty() {
                let lines: Vec<&str> = content.split('\n').collect();
                for line in lines.iter().take(MAX_EXPANDED_LINES) {
                    text.push_str(&format!("\n  {}", theme.fg(Role::Muted, line)));
                }
                if lines.len() > MAX_EXPANDED_LINES {
                    let more = format!("... and {} more lines", lines.len() - MAX_EXPANDED_LINES);
                    text.push_str(&format!("\n  {}", theme.fg(Role::Dim, &more)));
                }
            }
            if let Some(path) = result.details.full_output_path() {
                text.push_str(&full_output_line(path, theme));
            }
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kagi_domain::{SummarizeDetails, ToolError};
    use std::path::PathBuf;

    fn theme() -> Theme {
        Theme::plain()
    }

    fn details() -> SummarizeDetails {
        SummarizeDetails::new("https://x", SummaryType::Summary, SummaryEngine::Cecil)
            .with_tokens(512)
    }

    #[test]
    fn test_render_call_default_options_hidden() {
        let call = ToolCall::new("summarize")
            .with_arg("url", "https://example.com/post")
            .with_arg("engine", "cecil")
            .with_arg("summary_type", "summary");

        assert_eq!(
            SummarizeRenderer.render_call(&call, &theme()),
            "summarize \"https://example.com/post\""
        );
    }

    #[test]
    fn test_render_call_lists_engine_then_type() {
        let call = ToolCall::new("summarize")
            .with_arg("url", "https://x")
            .with_arg("summary_type", "takeaway")
            .with_arg("engine", "agnes");

        assert_eq!(
            SummarizeRenderer.render_call(&call, &theme()),
            "summarize \"https://x\" (agnes, takeaway)"
        );
    }

    #[test]
    fn test_render_call_default_options_any_case() {
        let call = ToolCall::new("summarize")
            .with_arg("url", "https://x")
            .with_arg("engine", "Cecil")
            .with_arg("summary_type", "TAKEAWAY");

        assert_eq!(
            SummarizeRenderer.render_call(&call, &theme()),
            "summarize \"https://x\" (TAKEAWAY)"
        );
    }

    #[test]
    fn test_partial() {
        let result = ToolInvocationResult::success("", details());
        assert_eq!(
            SummarizeRenderer.render_result(&result, RenderState::partial(), &theme()),
            "Summarizing..."
        );
    }

    #[test]
    fn test_error() {
        let error = ToolError::new(ToolError::EMPTY_RESULT, "Kagi API returned no summary output");
        let result = ToolInvocationResult::failure(&error, details().with_error(error.clone()));

        assert_eq!(
            SummarizeRenderer.render_result(&result, RenderState::expanded(), &theme()),
            "Error: Kagi API returned no summary output"
        );
    }

    #[test]
    fn test_collapsed_success_line() {
        let result = ToolInvocationResult::success("A summary.", details());
        assert_eq!(
            SummarizeRenderer.render_result(&result, RenderState::collapsed(), &theme()),
            "cecil · summary · 512 tokens"
        );
    }

    #[test]
    fn test_expanded_shows_first_twenty_lines() {
        let content = (1..=25).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
        let mut d = details();
        d.full_output_path = Some(PathBuf::from("/tmp/pi-summarize-1/output.txt"));
        let result = ToolInvocationResult::success(content, d);

        let rendered = SummarizeRenderer.render_result(&result, RenderState::expanded(), &theme());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "cecil · summary · 512 tokens");
        assert_eq!(lines[1], "  line 1");
        assert_eq!(lines[20], "  line 20");
        assert_eq!(lines[21], "  ... and 5 more lines");
        assert_eq!(lines[22], "  Full output: /tmp/pi-summarize-1/output.txt");
        assert_eq!(lines.len(), 23);
    }

    #[test]
    fn test_no_details() {
        let result = ToolInvocationResult::success("text", ToolDetails::None { error: None });
        assert_eq!(
            SummarizeRenderer.render_result(&result, RenderState::collapsed(), &theme()),
            "No summary available"
        );
    }
}
