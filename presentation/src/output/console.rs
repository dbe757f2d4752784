//! Console output formatter for tool invocations

use crate::render::{RenderState, Theme, renderer_for};
use kagi_domain::{ToolCall, ToolInvocationResult};

/// Formats tool invocations for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a finished invocation: call line, result view, then the text
    /// handed to the host (omitted for errors and in the expanded view).
    pub fn format(
        call: &ToolCall,
        result: &ToolInvocationResult,
        expanded: bool,
        theme: &Theme,
    ) -> String {
        let state = RenderState {
            expanded,
            is_partial: false,
        };

        let Some(renderer) = renderer_for(&call.tool_name) else {
            return result.text().to_string();
        };

        let mut output = renderer.render_call(call, theme);
        output.push('\n');
        output.push_str(&renderer.render_result(result, state, theme));
        output.push('\n');

        if !result.is_error && !expanded && !result.text().is_empty() {
            output.push('\n');
            output.push_str(result.text());
            output.push('\n');
        }

        output
    }

    /// Progress line shown while the invocation runs
    pub fn format_pending(call: &ToolCall, theme: &Theme) -> Option<String> {
        let renderer = renderer_for(&call.tool_name)?;
        let placeholder = ToolInvocationResult::success(
            "",
            kagi_domain::ToolDetails::None { error: None },
        );
        Some(format!(
            "{}\n{}",
            renderer.render_call(call, theme),
            renderer.render_result(&placeholder, RenderState::partial(), theme)
        ))
    }

    /// Format as JSON
    pub fn format_json(result: &ToolInvocationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format tool schemas as a JSON array
    pub fn format_schema(schemas: &[serde_json::Value]) -> String {
        serde_json::to_string_pretty(schemas).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kagi_domain::{SearchResult, ToolError, WebSearchDetails};

    fn search_call() -> ToolCall {
        ToolCall::new("web_search").with_arg("queries", serde_json::json!(["rust"]))
    }

    #[test]
    fn test_format_success_includes_host_text() {
        let result = ToolInvocationResult::success(
            "1. Rust\n   https://rust-lang.org",
            WebSearchDetails::new(vec!["rust".to_string()])
                .with_results(vec![SearchResult::new("Rust", "https://rust-lang.org")]),
        );

        let output = ConsoleFormatter::format(&search_call(), &result, false, &Theme::plain());

        assert_eq!(
            output,
            "web_search \"rust\"\n1 results\n\n1. Rust\n   https://rust-lang.org\n"
        );
    }

    #[test]
    fn test_format_error_has_no_body() {
        let error = ToolError::cancelled();
        let result = ToolInvocationResult::failure(
            &error,
            WebSearchDetails::new(vec!["rust".to_string()]).with_error(error.clone()),
        );

        let output = ConsoleFormatter::format(&search_call(), &result, false, &Theme::plain());
        assert_eq!(output, "web_search \"rust\"\nError: Operation cancelled\n");
    }

    #[test]
    fn test_format_pending() {
        let pending = ConsoleFormatter::format_pending(&search_call(), &Theme::plain()).unwrap();
        assert_eq!(pending, "web_search \"rust\"\nSearching...");
        assert!(ConsoleFormatter::format_pending(&ToolCall::new("other"), &Theme::plain()).is_none());
    }

    #[test]
    fn test_format_json() {
        let result = ToolInvocationResult::success("No results found.", WebSearchDetails::new(vec![]));
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&result)).unwrap();

        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][0]["text"], "No results found.");
        assert_eq!(json["details"]["tool"], "web_search");
        assert_eq!(json["is_error"], false);
    }
}
