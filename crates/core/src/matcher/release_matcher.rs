//! Best-candidate selection with threshold fallback.

use tracing::{debug, info, warn};

use crate::config::MatcherConfig;
use crate::media::ParsedRelease;
use crate::metrics::{MATCH_OUTCOMES, MATCH_SCORE};
use crate::searcher::{CandidateRelease, SearchClient};

use super::normalize::normalize;
use super::query::build_query;
use super::similarity::similarity;
use super::types::{FallbackReason, MatchError, MatchResult};

/// Selects the release whose title best matches the requested one.
#[derive(Debug, Clone)]
pub struct ReleaseMatcher {
    threshold: f64,
}

impl Default for ReleaseMatcher {
    fn default() -> Self {
        Self::with_config(&MatcherConfig::default())
    }
}

impl ReleaseMatcher {
    /// Create a matcher accepting candidates scoring at least `threshold`.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn with_config(config: &MatcherConfig) -> Self {
        Self::new(config.threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Search the index for a parsed release and pick the best candidate.
    ///
    /// Fails only when the parse cannot produce a query or the search itself
    /// fails; poor or empty results resolve to the fallback.
    pub async fn find(
        &self,
        parsed: &ParsedRelease,
        searcher: &dyn SearchClient,
    ) -> Result<MatchResult, MatchError> {
        let query = build_query(parsed)?;
        info!(
            searcher = searcher.name(),
            query = %query.query,
            year = ?query.year,
            season = ?query.season,
            episode = ?query.episode,
            resolution = ?query.resolution,
            "Searching for release"
        );

        let candidates = searcher.search(&query).await?;
        Ok(self.select(&parsed.title, &candidates))
    }

    /// Pick the candidate most similar to `target_title`.
    ///
    /// Candidates are scanned in order and only a strictly higher score
    /// replaces the current best, so the earliest candidate wins ties.
    /// Candidates missing a title or info hash are ignored.
    pub fn select(&self, target_title: &str, candidates: &[CandidateRelease]) -> MatchResult {
        if candidates.is_empty() {
            return self.fallback(target_title, FallbackReason::NoResults);
        }

        let target = normalize(target_title);
        let mut best: Option<(&str, &str, f64)> = None;

        for candidate in candidates {
            let (Some(raw_title), Some(info_hash)) =
                (candidate.raw_title.as_deref(), candidate.info_hash.as_deref())
            else {
                debug!(candidate = ?candidate, "Skipping incomplete candidate");
                continue;
            };

            let ratio = similarity(&target, &normalize(raw_title));
            if best.is_none_or(|(_, _, best_ratio)| ratio > best_ratio) {
                best = Some((raw_title, info_hash, ratio));
            }
        }

        let Some((raw_title, info_hash, score)) = best else {
            return self.fallback(target_title, FallbackReason::NoResults);
        };

        MATCH_SCORE.observe(score);

        if score >= self.threshold {
            info!(
                target = target_title,
                matched = raw_title,
                info_hash,
                score,
                "Found matching release"
            );
            MATCH_OUTCOMES.with_label_values(&["matched"]).inc();
            MatchResult::Matched {
                info_hash: info_hash.to_string(),
                raw_title: raw_title.to_string(),
                score,
            }
        } else {
            self.fallback(target_title, FallbackReason::NoGoodMatch { best_score: score })
        }
    }

    fn fallback(&self, target_title: &str, reason: FallbackReason) -> MatchResult {
        match &reason {
            FallbackReason::NoResults => {
                warn!(target = target_title, "No search results, using fallback release");
                MATCH_OUTCOMES.with_label_values(&["no_results"]).inc();
            }
            FallbackReason::NoGoodMatch { best_score } => {
                warn!(
                    target = target_title,
                    best_score = *best_score,
                    threshold = self.threshold,
                    "No good match found, using fallback release"
                );
                MATCH_OUTCOMES.with_label_values(&["below_threshold"]).inc();
            }
        }
        MatchResult::Fallback(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::FALLBACK_INFO_HASH;
    use crate::media::{EpisodeInfo, MovieInfo};
    use crate::testing::MockSearchClient;

    const HASH_A: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const HASH_B: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    #[test]
    fn test_selects_best_candidate() {
        let matcher = ReleaseMatcher::new(0.8);
        let candidates = vec![
            CandidateRelease::new("Show.S01E02.1080p", HASH_A),
            CandidateRelease::new("Unrelated", HASH_B),
        ];

        let result = matcher.select("Show S01E02 1080p", &candidates);
        assert_eq!(result.info_hash(), HASH_A);
        assert!(result.score().unwrap() >= 0.8);
    }

    #[test]
    fn test_later_better_candidate_wins() {
        let matcher = ReleaseMatcher::new(0.8);
        let candidates = vec![
            CandidateRelease::new("Movie Name 2019", HASH_A),
            CandidateRelease::new("Movie.Name.2020.1080p", HASH_B),
        ];

        let result = matcher.select("Movie.Name.2020.1080p", &candidates);
        match result {
            MatchResult::Matched {
                info_hash,
                raw_title,
                score,
            } => {
                assert_eq!(info_hash, HASH_B);
                assert_eq!(raw_title, "Movie.Name.2020.1080p");
                assert!((score - 1.0).abs() < 1e-9);
            }
            other => panic!("expected match, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_candidates_fall_back() {
        let matcher = ReleaseMatcher::new(0.8);
        let result = matcher.select("Anything", &[]);
        assert_eq!(result, MatchResult::Fallback(FallbackReason::NoResults));
        assert_eq!(result.info_hash(), FALLBACK_INFO_HASH);
    }

    #[test]
    fn test_ties_keep_earliest_candidate() {
        let matcher = ReleaseMatcher::new(0.5);
        let candidates = vec![
            CandidateRelease::new("Show.S01E02.720p", HASH_A),
            CandidateRelease::new("show s01e02 720p", HASH_B),
        ];

        let result = matcher.select("Show S01E02 1080p", &candidates);
        assert_eq!(result.info_hash(), HASH_A);
    }

    #[test]
    fn test_below_threshold_falls_back() {
        let matcher = ReleaseMatcher::new(0.8);
        let candidates = vec![CandidateRelease::new("Completely Different Title", HASH_A)];

        let result = matcher.select("Movie.Name.2020.1080p", &candidates);
        match result {
            MatchResult::Fallback(FallbackReason::NoGoodMatch { best_score }) => {
                assert!(best_score < 0.8);
            }
            other => panic!("expected fallback, got {:?}", other),
        }
        assert_eq!(result.info_hash(), FALLBACK_INFO_HASH);
    }

    #[test]
    fn test_incomplete_candidates_are_skipped() {
        let matcher = ReleaseMatcher::new(0.8);
        let candidates = vec![
            CandidateRelease {
                raw_title: Some("Movie.Name.2020.1080p".to_string()),
                info_hash: None,
            },
            CandidateRelease {
                raw_title: None,
                info_hash: Some(HASH_A.to_string()),
            },
            CandidateRelease::new("Movie Name 2020 1080p", HASH_B),
        ];

        let result = matcher.select("Movie.Name.2020.1080p", &candidates);
        assert_eq!(result.info_hash(), HASH_B);
    }

    #[test]
    fn test_only_incomplete_candidates_fall_back() {
        let matcher = ReleaseMatcher::new(0.8);
        let candidates = vec![CandidateRelease {
            raw_title: Some("Movie.Name".to_string()),
            info_hash: None,
        }];

        assert_eq!(
            matcher.select("Movie.Name", &candidates),
            MatchResult::Fallback(FallbackReason::NoResults)
        );
    }

    #[test]
    fn test_zero_threshold_accepts_anything() {
        let matcher = ReleaseMatcher::new(0.0);
        let candidates = vec![CandidateRelease::new("zzz", HASH_A)];
        assert_eq!(matcher.select("abc", &candidates).info_hash(), HASH_A);
    }

    #[test]
    fn test_find_searches_with_built_query() {
        let searcher = MockSearchClient::with_results(vec![CandidateRelease::new(
            "Movie.Name.2020.1080p.BluRay",
            HASH_A,
        )]);
        let parsed = ParsedRelease::movie(
            "Movie.Name.2020.1080p",
            MovieInfo {
                title: "Movie Name".to_string(),
                year: Some(2020),
                resolution: Some(1080),
            },
        );

        let result =
            tokio_test::block_on(ReleaseMatcher::default().find(&parsed, &searcher)).unwrap();
        assert_eq!(result.info_hash(), HASH_A);

        let searches = searcher.recorded_queries();
        assert_eq!(searches.len(), 1);
        assert_eq!(searches[0].query, "movie name");
        assert_eq!(searches[0].year, Some(2020));
        assert_eq!(searches[0].resolution.as_deref(), Some("1080p"));
    }

    #[test]
    fn test_find_invalid_episode_does_not_search() {
        let searcher = MockSearchClient::new();
        let parsed = ParsedRelease::episode(
            "Show.S01E02",
            EpisodeInfo {
                series_title: None,
                season: Some(1),
                episode_numbers: vec![2],
                resolution: None,
            },
        );

        let result = tokio_test::block_on(ReleaseMatcher::default().find(&parsed, &searcher));
        assert!(matches!(result, Err(MatchError::InvalidParse(_))));
        assert!(searcher.recorded_queries().is_empty());
    }

    #[test]
    fn test_find_propagates_search_failure() {
        let searcher = MockSearchClient::new();
        searcher.fail_next("index offline");
        let parsed = ParsedRelease::movie(
            "Movie.2020",
            MovieInfo {
                title: "Movie".to_string(),
                year: Some(2020),
                resolution: None,
            },
        );

        let result = tokio_test::block_on(ReleaseMatcher::default().find(&parsed, &searcher));
        assert!(matches!(result, Err(MatchError::Search(_))));
    }
}
