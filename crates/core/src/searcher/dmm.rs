//! DMM-style filtered search backend (`/dmm/filtered`).

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::SearchConfig;
use crate::metrics::{record_external_call, SEARCH_RESULTS};

use super::{CandidateRelease, SearchClient, SearchError, SearchQuery};

/// HTTP search backend.
pub struct DmmSearchClient {
    client: Client,
    base_url: String,
}

impl DmmSearchClient {
    /// Create a new search client with the given configuration.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the filtered search URL for a query.
    fn build_search_url(&self, query: &SearchQuery) -> String {
        let mut url = format!(
            "{}/dmm/filtered?query={}",
            self.base_url,
            urlencoding::encode(&query.query)
        );

        if let Some(year) = query.year {
            url.push_str(&format!("&year={}", year));
        }
        if let Some(season) = query.season {
            url.push_str(&format!("&season={}", season));
        }
        if let Some(episode) = query.episode {
            url.push_str(&format!("&episode={}", episode));
        }
        if let Some(resolution) = &query.resolution {
            url.push_str(&format!("&resolution={}", urlencoding::encode(resolution)));
        }

        url
    }

    async fn fetch(&self, url: &str) -> Result<Vec<CandidateRelease>, SearchError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl SearchClient for DmmSearchClient {
    fn name(&self) -> &str {
        "dmm"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<CandidateRelease>, SearchError> {
        let url = self.build_search_url(query);
        debug!(query = %query.query, "Searching release index");

        let start = Instant::now();
        let result = self.fetch(&url).await;
        record_external_call(
            "search",
            "filtered",
            result.is_ok(),
            start.elapsed().as_secs_f64(),
        );

        let candidates = result?;
        SEARCH_RESULTS.observe(candidates.len() as f64);
        debug!(
            query = %query.query,
            results = candidates.len(),
            "Release search complete"
        );

        Ok(candidates)
    }
}
