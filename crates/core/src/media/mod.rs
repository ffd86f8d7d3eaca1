//! Media metadata parsing.
//!
//! A `ParseClient` turns a loosely formatted release name into a structured
//! description of the media it refers to. The production implementation talks
//! to Radarr/Sonarr-compatible `/api/v3/parse` endpoints.

mod arr;
mod types;

pub use arr::{looks_like_episode, ArrParseClient};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when calling the metadata parsing service.
#[derive(Debug, Error)]
pub enum ParseError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),
}

/// Trait for metadata parsing backends.
#[async_trait]
pub trait ParseClient: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Parse a release name into structured media information.
    async fn parse(&self, title: &str) -> Result<ParsedRelease, ParseError>;
}
