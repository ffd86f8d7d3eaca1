//! Radarr/Sonarr parse API client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use reqwest::Client;
use tracing::debug;

use crate::config::{ParserConfig, ServiceEndpoint};
use crate::metrics::record_external_call;

use super::types::ParseResponse;
use super::{ParseClient, ParseError, ParsedRelease};

static EPISODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)S?\d+[xe]\d+").expect("episode pattern is valid"));

/// Whether a release name carries a season/episode marker (`S01E02`, `1x02`).
pub fn looks_like_episode(title: &str) -> bool {
    EPISODE_PATTERN.is_match(title)
}

/// Parse client backed by a movie service and an episode service.
pub struct ArrParseClient {
    client: Client,
    movie: ServiceEndpoint,
    episode: ServiceEndpoint,
}

impl ArrParseClient {
    /// Create a new client from the parser configuration.
    pub fn new(config: ParserConfig) -> Result<Self, ParseError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        Ok(Self {
            client,
            movie: config.movie,
            episode: config.episode,
        })
    }

    fn endpoint_for(&self, title: &str) -> (&'static str, &ServiceEndpoint) {
        if looks_like_episode(title) {
            ("episode", &self.episode)
        } else {
            ("movie", &self.movie)
        }
    }

    /// Build the parse URL for a title against one endpoint.
    fn build_parse_url(endpoint: &ServiceEndpoint, title: &str) -> String {
        format!(
            "{}/api/v3/parse?title={}&apikey={}",
            endpoint.url.trim_end_matches('/'),
            urlencoding::encode(title),
            urlencoding::encode(&endpoint.api_key)
        )
    }

    async fn fetch(&self, url: &str) -> Result<ParseResponse, ParseError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ParseError::ApiError {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ParseError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl ParseClient for ArrParseClient {
    fn name(&self) -> &str {
        "arr"
    }

    async fn parse(&self, title: &str) -> Result<ParsedRelease, ParseError> {
        let (kind, endpoint) = self.endpoint_for(title);
        let url = Self::build_parse_url(endpoint, title);
        debug!(kind, title, "Parsing release name");

        let start = Instant::now();
        let result = self.fetch(&url).await;
        record_external_call(
            "parser",
            kind,
            result.is_ok(),
            start.elapsed().as_secs_f64(),
        );

        let parsed = result?.into_parsed(title);
        debug!(title, media = ?parsed.media, "Parse complete");
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ParserConfig {
        ParserConfig {
            movie: ServiceEndpoint {
                url: "http://radarr:7878/".to_string(),
                api_key: "movie key".to_string(),
            },
            episode: ServiceEndpoint {
                url: "http://sonarr:8989".to_string(),
                api_key: "episode-key".to_string(),
            },
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_looks_like_episode() {
        assert!(looks_like_episode("Show.S01E02.1080p"));
        assert!(looks_like_episode("show s01e02"));
        assert!(looks_like_episode("Show 1x02"));
        assert!(looks_like_episode("Show.2X10.HDTV"));
        assert!(!looks_like_episode("Movie.Name.2020.1080p"));
        assert!(!looks_like_episode("Some Movie"));
    }

    #[test]
    fn test_endpoint_selection() {
        let client = ArrParseClient::new(config()).unwrap();

        let (kind, endpoint) = client.endpoint_for("Show.S02E05");
        assert_eq!(kind, "episode");
        assert_eq!(endpoint.url, "http://sonarr:8989");

        let (kind, endpoint) = client.endpoint_for("Movie.Name.2020");
        assert_eq!(kind, "movie");
        assert_eq!(endpoint.url, "http://radarr:7878/");
    }

    #[test]
    fn test_build_parse_url_encodes_and_trims() {
        let cfg = config();
        let url = ArrParseClient::build_parse_url(&cfg.movie, "Movie Name (2020)");
        assert_eq!(
            url,
            "http://radarr:7878/api/v3/parse?title=Movie%20Name%20%282020%29&apikey=movie%20key"
        );
    }
}
