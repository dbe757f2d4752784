//! Search result entities

use serde::{Deserialize, Serialize};

/// One ranked hit from a web search.
///
/// Only hits with both a title and a URL are ever constructed; the snippet
/// falls back to an empty string when the backend omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub snippet: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: String::new(),
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    pub fn has_snippet(&self) -> bool {
        !self.snippet.is_empty()
    }
}

/// Format results as a numbered plain-text listing.
///
/// ```text
/// 1. Title
///    https://example.com
///    Snippet
///
/// 2. ...
/// ```
pub fn format_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let mut entry = format!("{}. {}\n   {}", i + 1, r.title, r.url);
            if r.has_snippet() {
                entry.push_str("\n   ");
                entry.push_str(&r.snippet);
            }
            entry
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
