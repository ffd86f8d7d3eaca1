//! Testing utilities and mock implementations for E2E tests.
//!
//! This module provides mock implementations of the external service traits,
//! allowing the whole request flow to be exercised without real services.
//!
//! # Example
//!
//! ```rust,ignore
//! use mirage_core::testing::{fixtures, MockParseClient, MockSearchClient};
//!
//! let parser = MockParseClient::new();
//! parser.set_response(
//!     "Movie.Name.2020.1080p",
//!     fixtures::parsed_movie("Movie.Name.2020.1080p", "Movie Name", 2020, Some(1080)),
//! );
//!
//! let searcher = MockSearchClient::with_results(vec![
//!     fixtures::candidate("Movie.Name.2020.1080p.BluRay", "41e6cd50ccec55cd5704c5e3d176e7b59317a3fb"),
//! ]);
//! ```

mod mock_parser;
mod mock_searcher;

pub use mock_parser::MockParseClient;
pub use mock_searcher::MockSearchClient;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::media::{EpisodeInfo, MovieInfo, ParsedRelease};
    use crate::searcher::CandidateRelease;

    /// A parsed movie release.
    pub fn parsed_movie(
        title: &str,
        movie_title: &str,
        year: u32,
        resolution: Option<u32>,
    ) -> ParsedRelease {
        ParsedRelease::movie(
            title,
            MovieInfo {
                title: movie_title.to_string(),
                year: Some(year),
                resolution,
            },
        )
    }

    /// A parsed episode release.
    pub fn parsed_episode(
        title: &str,
        series_title: &str,
        season: u32,
        episodes: &[u32],
        resolution: Option<u32>,
    ) -> ParsedRelease {
        ParsedRelease::episode(
            title,
            EpisodeInfo {
                series_title: Some(series_title.to_string()),
                season: Some(season),
                episode_numbers: episodes.to_vec(),
                resolution,
            },
        )
    }

    /// A complete search candidate.
    pub fn candidate(raw_title: &str, info_hash: &str) -> CandidateRelease {
        CandidateRelease::new(raw_title, info_hash)
    }
}
