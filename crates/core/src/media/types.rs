//! Parsed media types and the wire format they are decoded from.

use serde::Deserialize;

/// Result of parsing one release name.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRelease {
    /// The raw title as echoed by the parser. Used as the match target.
    pub title: String,
    /// What the parser recognized.
    pub media: ParsedMedia,
}

/// Kind of media recognized by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedMedia {
    Movie(MovieInfo),
    Episode(EpisodeInfo),
    /// The parser recognized neither a movie nor an episode.
    Unrecognized,
}

/// A parsed movie release.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieInfo {
    pub title: String,
    pub year: Option<u32>,
    /// Vertical resolution (e.g. 1080).
    pub resolution: Option<u32>,
}

/// A parsed episodic release.
///
/// Series title and season are optional because the parser may return a
/// partial parse; the matcher rejects those.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeInfo {
    pub series_title: Option<String>,
    pub season: Option<u32>,
    pub episode_numbers: Vec<u32>,
    pub resolution: Option<u32>,
}

impl ParsedRelease {
    pub fn movie(title: &str, movie: MovieInfo) -> Self {
        Self {
            title: title.to_string(),
            media: ParsedMedia::Movie(movie),
        }
    }

    pub fn episode(title: &str, episode: EpisodeInfo) -> Self {
        Self {
            title: title.to_string(),
            media: ParsedMedia::Episode(episode),
        }
    }

    pub fn unrecognized(title: &str) -> Self {
        Self {
            title: title.to_string(),
            media: ParsedMedia::Unrecognized,
        }
    }

    /// Resolution detected by the parser, whatever the media kind.
    pub fn resolution(&self) -> Option<u32> {
        match &self.media {
            ParsedMedia::Movie(m) => m.resolution,
            ParsedMedia::Episode(e) => e.resolution,
            ParsedMedia::Unrecognized => None,
        }
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ParseResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    parsed_movie_info: Option<WireMovieInfo>,
    #[serde(default)]
    parsed_episode_info: Option<WireEpisodeInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMovieInfo {
    #[serde(default)]
    movie_title: Option<String>,
    #[serde(default)]
    primary_movie_title: Option<String>,
    #[serde(default)]
    movie_titles: Vec<String>,
    #[serde(default)]
    year: Option<u32>,
    #[serde(default)]
    quality: Option<WireQualityModel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireEpisodeInfo {
    #[serde(default)]
    series_title: Option<String>,
    #[serde(default)]
    season_number: Option<u32>,
    #[serde(default)]
    episode_numbers: Vec<u32>,
    #[serde(default)]
    quality: Option<WireQualityModel>,
}

#[derive(Debug, Deserialize)]
struct WireQualityModel {
    #[serde(default)]
    quality: Option<WireQuality>,
}

#[derive(Debug, Deserialize)]
struct WireQuality {
    #[serde(default)]
    resolution: Option<u32>,
}

/// The *arr services report unknown numbers as 0.
fn known(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v > 0)
}

fn resolution_of(quality: Option<WireQualityModel>) -> Option<u32> {
    known(quality.and_then(|q| q.quality).and_then(|q| q.resolution))
}

impl ParseResponse {
    /// Convert into the domain type. `requested` is used when the service
    /// does not echo the title back.
    pub(crate) fn into_parsed(self, requested: &str) -> ParsedRelease {
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| requested.to_string());

        if let Some(episode) = self.parsed_episode_info {
            return ParsedRelease::episode(
                &title,
                EpisodeInfo {
                    series_title: episode.series_title.filter(|t| !t.trim().is_empty()),
                    season: episode.season_number,
                    episode_numbers: episode.episode_numbers,
                    resolution: resolution_of(episode.quality),
                },
            );
        }

        if let Some(movie) = self.parsed_movie_info {
            let movie_title = movie
                .movie_title
                .or(movie.primary_movie_title)
                .or_else(|| movie.movie_titles.into_iter().next())
                .filter(|t| !t.trim().is_empty());

            if let Some(movie_title) = movie_title {
                return ParsedRelease::movie(
                    &title,
                    MovieInfo {
                        title: movie_title,
                        year: known(movie.year),
                        resolution: resolution_of(movie.quality),
                    },
                );
            }
        }

        ParsedRelease::unrecognized(&title)
    }
}
