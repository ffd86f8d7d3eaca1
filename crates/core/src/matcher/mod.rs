//! Release matching.
//!
//! Turns a parsed release into an index query, then picks the search result
//! whose normalized title is most similar to the requested title. When
//! nothing scores at least the configured threshold, a fixed fallback
//! release is substituted instead of failing the request.

mod normalize;
mod query;
mod release_matcher;
mod similarity;
mod types;

pub use normalize::normalize;
pub use query::build_query;
pub use release_matcher::ReleaseMatcher;
pub use similarity::similarity;
pub use types::{FallbackReason, MatchError, MatchResult, FALLBACK_INFO_HASH};
