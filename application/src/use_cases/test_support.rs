//! In-memory test doubles for the tool use cases.

use crate::config::ApiKey;
use crate::ports::kagi_gateway::{KagiError, KagiGateway};
use crate::ports::output_store::OutputStore;
use async_trait::async_trait;
use kagi_domain::{SearchResult, SummarizeOptions, Summary};
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Gateway that returns canned outcomes and records what it was asked
pub(crate) struct MockGateway {
    search_outcome: Result<Vec<SearchResult>, KagiError>,
    summarize_outcome: Result<Summary, KagiError>,
    search_calls: AtomicUsize,
    summarize_calls: AtomicUsize,
    last_queries: Mutex<Vec<String>>,
    last_options: Mutex<Option<SummarizeOptions>>,
    last_key: Mutex<Option<String>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            search_outcome: Ok(Vec::new()),
            summarize_outcome: Err(KagiError::EmptyOutput),
            search_calls: AtomicUsize::new(0),
            summarize_calls: AtomicUsize::new(0),
            last_queries: Mutex::new(Vec::new()),
            last_options: Mutex::new(None),
            last_key: Mutex::new(None),
        }
    }

    pub fn with_search(mut self, outcome: Result<Vec<SearchResult>, KagiError>) -> Self {
        self.search_outcome = outcome;
        self
    }

    pub fn with_summary(mut self, outcome: Result<Summary, KagiError>) -> Self {
        self.summarize_outcome = outcome;
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn summarize_calls(&self) -> usize {
        self.summarize_calls.load(Ordering::SeqCst)
    }

    pub fn last_queries(&self) -> Vec<String> {
        self.last_queries.lock().unwrap().clone()
    }

    pub fn last_options(&self) -> Option<SummarizeOptions> {
        self.last_options.lock().unwrap().clone()
    }

    pub fn last_key(&self) -> Option<String> {
        self.last_key.lock().unwrap().clone()
    }
}

#[async_trait]
impl KagiGateway for MockGateway {
    async fn search(
        &self,
        queries: &[String],
        api_key: &ApiKey,
    ) -> Result<Vec<SearchResult>, KagiError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_queries.lock().unwrap() = queries.to_vec();
        *self.last_key.lock().unwrap() = Some(api_key.expose().to_string());
        self.search_outcome.clone()
    }

    async fn summarize(
        &self,
        _url: &str,
        api_key: &ApiKey,
        options: &SummarizeOptions,
    ) -> Result<Summary, KagiError> {
        self.summarize_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_options.lock().unwrap() = Some(options.clone());
        *self.last_key.lock().unwrap() = Some(api_key.expose().to_string());
        self.summarize_outcome.clone()
    }
}

/// Store that keeps spilled output in memory
#[derive(Default)]
pub(crate) struct MemoryStore {
    saved: Mutex<Vec<(String, String)>>,
}

impl MemoryStore {
    pub fn saved(&self) -> Vec<(String, String)> {
        self.saved.lock().unwrap().clone()
    }
}

impl OutputStore for MemoryStore {
    fn save_full_output(&self, prefix: &str, content: &str) -> std::io::Result<PathBuf> {
        let mut saved = self.saved.lock().unwrap();
        saved.push((prefix.to_string(), content.to_string()));
        Ok(PathBuf::from(format!("/tmp/{}{}/output.txt", prefix, saved.len())))
    }
}

/// Store that always fails
pub(crate) struct FailingStore;

impl OutputStore for FailingStore {
    fn save_full_output(&self, _prefix: &str, _content: &str) -> std::io::Result<PathBuf> {
        Err(std::io::Error::other("disk full"))
    }
}
