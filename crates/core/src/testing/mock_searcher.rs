//! Mock search client for testing.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::searcher::{CandidateRelease, SearchClient, SearchError, SearchQuery};

/// Mock implementation of the `SearchClient` trait.
///
/// Returns the configured results for every query and records the queries
/// it was asked.
#[derive(Debug, Default)]
pub struct MockSearchClient {
    results: Mutex<Vec<CandidateRelease>>,
    queries: Mutex<Vec<SearchQuery>>,
    next_error: Mutex<Option<String>>,
}

impl MockSearchClient {
    /// Create a new mock searcher with empty results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock searcher with predefined results.
    pub fn with_results(results: Vec<CandidateRelease>) -> Self {
        let searcher = Self::new();
        searcher.set_results(results);
        searcher
    }

    /// Set the results to return for subsequent searches.
    pub fn set_results(&self, results: Vec<CandidateRelease>) {
        *self.results.lock().unwrap() = results;
    }

    /// Make the next search fail with an API error carrying `message`.
    pub fn fail_next(&self, message: &str) {
        *self.next_error.lock().unwrap() = Some(message.to_string());
    }

    /// Queries searched so far, in call order.
    pub fn recorded_queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn search_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchClient for MockSearchClient {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<CandidateRelease>, SearchError> {
        self.queries.lock().unwrap().push(query.clone());

        if let Some(message) = self.next_error.lock().unwrap().take() {
            return Err(SearchError::ApiError {
                status: 503,
                message,
            });
        }

        Ok(self.results.lock().unwrap().clone())
    }
}
