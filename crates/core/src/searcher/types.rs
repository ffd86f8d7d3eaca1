//! Types for the release search system.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Query parameters for a release search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text title query.
    pub query: String,
    /// Release year (movies).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    /// Season number (episodes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    /// Episode number within the season (episodes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
    /// Resolution filter such as "1080p".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

/// A release returned by the index.
///
/// Both fields are optional on the wire; entries missing either one are
/// skipped during matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRelease {
    /// Display title as published.
    #[serde(default)]
    pub raw_title: Option<String>,
    /// 40-character hex info hash.
    #[serde(default)]
    pub info_hash: Option<String>,
}

impl CandidateRelease {
    pub fn new(raw_title: &str, info_hash: &str) -> Self {
        Self {
            raw_title: Some(raw_title.to_string()),
            info_hash: Some(info_hash.to_string()),
        }
    }
}

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse search response: {0}")]
    InvalidResponse(String),
}

/// Trait for release search backends.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Search the index. Results keep the order the backend returned them in.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<CandidateRelease>, SearchError>;
}
