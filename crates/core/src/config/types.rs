use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub parser: ParserConfig,
    pub search: SearchConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8000
}

/// A single *arr-style metadata service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceEndpoint {
    /// Base URL (e.g., "http://localhost:7878")
    pub url: String,
    /// API key sent as the `apikey` query parameter
    pub api_key: String,
}

/// Metadata parsing service configuration.
///
/// Titles that look like episodes go to `episode`, everything else to `movie`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParserConfig {
    pub movie: ServiceEndpoint,
    pub episode: ServiceEndpoint,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

/// Release index search service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Search service base URL (e.g., "http://localhost:8181")
    pub url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_timeout() -> u32 {
    30
}

/// Release matching configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatcherConfig {
    /// Minimum similarity for a candidate to be accepted (0.0-1.0).
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

fn default_threshold() -> f64 {
    0.8
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// When set, logs are also written to a daily-rotated file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

fn default_log_level() -> String {
    "debug".to_string()
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub parser: SanitizedParserConfig,
    pub search: SearchConfig,
    pub matcher: MatcherConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedParserConfig {
    pub movie: SanitizedServiceEndpoint,
    pub episode: SanitizedServiceEndpoint,
    pub timeout_secs: u32,
}

/// Sanitized endpoint (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedServiceEndpoint {
    pub url: String,
    pub api_key_configured: bool,
}

impl From<&ServiceEndpoint> for SanitizedServiceEndpoint {
    fn from(endpoint: &ServiceEndpoint) -> Self {
        Self {
            url: endpoint.url.clone(),
            api_key_configured: !endpoint.api_key.is_empty(),
        }
    }
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            parser: SanitizedParserConfig {
                movie: SanitizedServiceEndpoint::from(&config.parser.movie),
                episode: SanitizedServiceEndpoint::from(&config.parser.episode),
                timeout_secs: config.parser.timeout_secs,
            },
            search: config.search.clone(),
            matcher: config.matcher.clone(),
            logging: config.logging.clone(),
        }
    }
}
