//! Kagi API wire types
//!
//! Only the fields the tools read are modelled; everything else in the
//! response is ignored.

use kagi_domain::{SearchResult, SummarizeOptions};
use serde::{Deserialize, Serialize};

/// Result type discriminator for an actual search hit.
/// Other values are related searches and similar extras.
pub(crate) const SEARCH_RESULT_TYPE: i64 = 0;

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorItem {
    /// Kagi sends `msg`; `message` is accepted as well
    #[serde(default, alias = "message")]
    pub msg: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiMeta {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub ms: Option<u64>,
}

/// Any response body that may carry a top-level `error` array
pub(crate) trait HasApiErrors {
    fn api_errors(&self) -> Option<&[ApiErrorItem]>;

    /// Error messages, or `None` when the body reports no error
    fn error_messages(&self) -> Option<Vec<String>> {
        match self.api_errors() {
            Some(errors) if !errors.is_empty() => {
                Some(errors.iter().map(|e| e.msg.clone()).collect())
            }
            _ => None,
        }
    }
}

/// Body of an error response; parsed best-effort for its messages
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<Vec<ApiErrorItem>>,
}

impl HasApiErrors for ErrorEnvelope {
    fn api_errors(&self) -> Option<&[ApiErrorItem]> {
        self.error.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    #[serde(default)]
    pub t: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

impl SearchItem {
    /// Convert to a [`SearchResult`] if this is a search hit with a title and URL
    pub fn into_result(self) -> Option<SearchResult> {
        if self.t != Some(SEARCH_RESULT_TYPE) {
            return None;
        }
        let title = self.title.filter(|t| !t.is_empty())?;
        let url = self.url.filter(|u| !u.is_empty())?;
        Some(SearchResult::new(title, url).with_snippet(self.snippet.unwrap_or_default()))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub meta: Option<ApiMeta>,
    #[serde(default)]
    pub data: Option<Vec<SearchItem>>,
    #[serde(default)]
    pub error: Option<Vec<ApiErrorItem>>,
}

impl HasApiErrors for SearchResponse {
    fn api_errors(&self) -> Option<&[ApiErrorItem]> {
        self.error.as_deref()
    }
}

/// Request body for the summarizer; unset options are omitted
#[derive(Debug, Serialize)]
pub(crate) struct SummarizeRequest<'a> {
    pub url: &'a str,
    #[serde(flatten)]
    pub options: &'a SummarizeOptions,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryData {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub tokens: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummarizeResponse {
    #[serde(default)]
    pub meta: Option<ApiMeta>,
    #[serde(default)]
    pub data: Option<SummaryData>,
    #[serde(default)]
    pub error: Option<Vec<ApiErrorItem>>,
}

impl HasApiErrors for SummarizeResponse {
    fn api_errors(&self) -> Option<&[ApiErrorItem]> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kagi_domain::{SummaryEngine, SummaryType};

    #[test]
    fn test_search_item_filtering() {
        let body: SearchResponse = serde_json::from_value(serde_json::json!({
            "meta": {"id": "abc", "node": "us-east", "ms": 120},
            "data": [
                {"t": 0, "title": "Rust", "url": "https://rust-lang.org", "snippet": "A language"},
                {"t": 1, "list": ["rust book", "rust async"]},
                {"t": 0, "title": "No URL"},
                {"t": 0, "title": "No snippet", "url": "https://example.com"},
                {"t": 0, "title": "", "url": "https://empty-title.example"}
            ]
        }))
        .unwrap();

        let results: Vec<SearchResult> = body
            .data
            .unwrap()
            .into_iter()
            .filter_map(SearchItem::into_result)
            .collect();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Rust");
        assert_eq!(results[0].snippet, "A language");
        assert_eq!(results[1].title, "No snippet");
        assert_eq!(results[1].snippet, "");
    }

    #[test]
    fn test_error_messages() {
        let body: ErrorEnvelope = serde_json::from_value(serde_json::json!({
            "error": [{"code": 1, "msg": "Unauthorized"}, {"code": 2, "message": "Bad key"}]
        }))
        .unwrap();
        assert_eq!(
            body.error_messages(),
            Some(vec!["Unauthorized".to_string(), "Bad key".to_string()])
        );

        let empty: ErrorEnvelope = serde_json::from_value(serde_json::json!({"error": []})).unwrap();
        assert_eq!(empty.error_messages(), None);
    }

    #[test]
    fn test_summarize_request_only_url() {
        let options = SummarizeOptions::new();
        let request = SummarizeRequest {
            url: "https://x",
            options: &options,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"url": "https://x"})
        );
    }

    #[test]
    fn test_summarize_request_with_options() {
        let options = SummarizeOptions::new()
            .with_summary_type(SummaryType::Takeaway)
            .with_engine(SummaryEngine::Agnes)
            .with_target_language("JA");
        let request = SummarizeRequest {
            url: "https://x",
            options: &options,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "url": "https://x",
                "summary_type": "takeaway",
                "engine": "agnes",
                "target_language": "JA"
            })
        );
    }
}
