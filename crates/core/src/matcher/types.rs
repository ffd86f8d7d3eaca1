//! Match result types.

use thiserror::Error;

use crate::searcher::SearchError;
use crate::torrent::magnet_uri;

/// Info hash substituted when no adequate release is found.
pub const FALLBACK_INFO_HASH: &str = "91426fbc17ad836b5a3525aeccbd3360097aeb24";

/// Why the fallback release was used.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    /// The search returned no usable candidates.
    NoResults,
    /// The best candidate scored below the acceptance threshold.
    NoGoodMatch { best_score: f64 },
}

/// Outcome of matching one request against search results.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    Matched {
        info_hash: String,
        raw_title: String,
        /// Similarity of the accepted candidate, at least the threshold.
        score: f64,
    },
    Fallback(FallbackReason),
}

impl MatchResult {
    /// Info hash to synthesize from.
    pub fn info_hash(&self) -> &str {
        match self {
            MatchResult::Matched { info_hash, .. } => info_hash,
            MatchResult::Fallback(_) => FALLBACK_INFO_HASH,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, MatchResult::Fallback(_))
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            MatchResult::Matched { score, .. } => Some(*score),
            MatchResult::Fallback(_) => None,
        }
    }

    /// Magnet reference for this result under the given display name.
    pub fn magnet_uri(&self, display_name: &str) -> String {
        magnet_uri(self.info_hash(), display_name)
    }
}

/// Errors that abort matching.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Episodic parse without series title or season.
    #[error("Invalid episode parse for '{0}': missing series title or season")]
    InvalidParse(String),

    /// Parser recognized neither a movie nor an episode.
    #[error("Could not identify media for '{0}'")]
    Unrecognized(String),

    #[error("Search failed: {0}")]
    Search(#[from] SearchError),
}
