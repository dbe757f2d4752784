//! reqwest-backed [`KagiGateway`] adapter.

use super::types::{
    ErrorEnvelope, HasApiErrors, SearchItem, SearchResponse, SummarizeRequest, SummarizeResponse,
};
use async_trait::async_trait;
use kagi_application::{ApiKey, KagiError, KagiGateway};
use kagi_domain::{SearchResult, SummarizeOptions, Summary};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://kagi.com/api/v0/";

/// Errors while constructing a [`KagiClient`]
#[derive(Error, Debug)]
pub enum KagiClientError {
    #[error("Invalid Kagi base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Failed to create HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// HTTP client for the Kagi search and summarizer endpoints.
///
/// Requests are sent one at a time; no timeout is imposed unless one is
/// configured, in which case it applies per request.
#[derive(Debug, Clone)]
pub struct KagiClient {
    http: reqwest::Client,
    search_url: Url,
    summarize_url: Url,
}

impl KagiClient {
    /// Client against `base_url`, normally [`DEFAULT_BASE_URL`]
    pub fn with_base_url(base_url: &str, timeout: Option<Duration>) -> Result<Self, KagiClientError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("kagi-tools/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            search_url: base.join("search")?,
            summarize_url: base.join("summarize")?,
        })
    }

    fn auth_header(api_key: &ApiKey) -> String {
        format!("Bot {}", api_key.expose())
    }

    /// Classify a response: non-2xx becomes `HttpStatus` (with the API's own
    /// messages when the body parses), an unreadable 2xx body becomes `Parse`.
    async fn read_body<T: DeserializeOwned>(
        response: reqwest::Response,
        target: &str,
    ) -> Result<T, KagiError> {
        let status = response.status();
        if !status.is_success() {
            let messages = response
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|body| body.error_messages())
                .unwrap_or_default();
            warn!(status = status.as_u16(), "Kagi API returned an error status");
            return Err(KagiError::HttpStatus {
                status: status.as_u16(),
                messages,
            });
        }

        response.json::<T>().await.map_err(|e| {
            debug!(error = %e, "Failed to decode Kagi response");
            KagiError::Parse {
                target: target.to_string(),
            }
        })
    }

    async fn search_one(&self, query: &str, api_key: &ApiKey) -> Result<Vec<SearchResult>, KagiError> {
        let response = self
            .http
            .get(self.search_url.clone())
            .query(&[("q", query)])
            .header(AUTHORIZATION, Self::auth_header(api_key))
            .send()
            .await
            .map_err(|e| KagiError::Network {
                context: format!("searching for \"{}\"", query),
                message: e.to_string(),
            })?;

        let body: SearchResponse = Self::read_body(response, query).await?;

        if let Some(messages) = body.error_messages() {
            return Err(KagiError::Api { messages });
        }

        if let Some(meta) = &body.meta {
            debug!(query, request_id = ?meta.id, ms = ?meta.ms, "Kagi search answered");
        }

        Ok(body
            .data
            .unwrap_or_default()
            .into_iter()
            .filter_map(SearchItem::into_result)
            .collect())
    }
}

#[async_trait]
impl KagiGateway for KagiClient {
    async fn search(
        &self,
        queries: &[String],
        api_key: &ApiKey,
    ) -> Result<Vec<SearchResult>, KagiError> {
        let mut all_results = Vec::new();
        for query in queries {
            let results = self.search_one(query, api_key).await?;
            debug!(query = %query, hits = results.len(), "Collected search results");
            all_results.extend(results);
        }
        Ok(all_results)
    }

    async fn summarize(
        &self,
        url: &str,
        api_key: &ApiKey,
        options: &SummarizeOptions,
    ) -> Result<Summary, KagiError> {
        let request = SummarizeRequest { url, options };

        let response = self
            .http
            .post(self.summarize_url.clone())
            .header(AUTHORIZATION, Self::auth_header(api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| KagiError::Network {
                context: format!("summarizing \"{}\"", url),
                message: e.to_string(),
            })?;

        let body: SummarizeResponse = Self::read_body(response, url).await?;

        if let Some(messages) = body.error_messages() {
            return Err(KagiError::Api { messages });
        }

        if let Some(meta) = &body.meta {
            debug!(url, request_id = ?meta.id, ms = ?meta.ms, "Kagi summarizer answered");
        }

        let data = body.data.ok_or(KagiError::EmptyOutput)?;
        let output = data
            .output
            .filter(|o| !o.is_empty())
            .ok_or(KagiError::EmptyOutput)?;

        Ok(Summary::new(output, data.tokens.unwrap_or(0)))
    }
}
