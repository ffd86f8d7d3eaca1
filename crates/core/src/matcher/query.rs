//! Search query construction from a parsed release.

use crate::media::{ParsedMedia, ParsedRelease};
use crate::searcher::SearchQuery;

use super::normalize::normalize;
use super::types::MatchError;

/// Build the index query for a parsed release.
///
/// Movies search by normalized title and year; episodes by series title and
/// season, narrowed to the first listed episode. Both add a `<height>p`
/// resolution filter when the parser detected one.
pub fn build_query(parsed: &ParsedRelease) -> Result<SearchQuery, MatchError> {
    let resolution = parsed.resolution().map(|height| format!("{}p", height));

    match &parsed.media {
        ParsedMedia::Movie(movie) => Ok(SearchQuery {
            query: normalize(&movie.title),
            year: movie.year,
            resolution,
            ..Default::default()
        }),
        ParsedMedia::Episode(episode) => {
            let (Some(series_title), Some(season)) = (&episode.series_title, episode.season)
            else {
                return Err(MatchError::InvalidParse(parsed.title.clone()));
            };

            Ok(SearchQuery {
                query: normalize(series_title),
                season: Some(season),
                episode: episode.episode_numbers.first().copied(),
                resolution,
                ..Default::default()
            })
        }
        ParsedMedia::Unrecognized => Err(MatchError::Unrecognized(parsed.title.clone())),
    }
}
