pub mod config;
pub mod generator;
pub mod matcher;
pub mod media;
pub mod metrics;
pub mod nzb;
pub mod searcher;
pub mod testing;
pub mod torrent;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, LoggingConfig,
    MatcherConfig, ParserConfig, SanitizedConfig, SearchConfig, ServerConfig, ServiceEndpoint,
};
pub use generator::{Clock, FileKind, FileRequest, GenerateError, GeneratedFile, ReleaseGenerator};
pub use matcher::{
    normalize, similarity, FallbackReason, MatchError, MatchResult, ReleaseMatcher,
    FALLBACK_INFO_HASH,
};
pub use media::{
    ArrParseClient, EpisodeInfo, MovieInfo, ParseClient, ParseError, ParsedMedia, ParsedRelease,
};
pub use searcher::{CandidateRelease, DmmSearchClient, SearchClient, SearchError, SearchQuery};
pub use torrent::{synthesize, synthesize_from_magnet, TorrentDescriptor, TorrentError};
