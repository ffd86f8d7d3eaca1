use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Match threshold lies within [0, 1]
/// - Every external service URL is an http(s) URL
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let threshold = config.matcher.threshold;
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ConfigError::ValidationError(format!(
            "matcher.threshold must be between 0 and 1, got {}",
            threshold
        )));
    }

    validate_url("parser.movie.url", &config.parser.movie.url)?;
    validate_url("parser.episode.url", &config.parser.episode.url)?;
    validate_url("search.url", &config.search.url)?;

    Ok(())
}

fn validate_url(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "{} cannot be empty",
            field
        )));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "{} must start with http:// or https://, got {}",
            field, url
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        LoggingConfig, MatcherConfig, ParserConfig, SearchConfig, ServerConfig, ServiceEndpoint,
    };
    use std::net::IpAddr;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig::default(),
            parser: ParserConfig {
                movie: ServiceEndpoint {
                    url: "http://radarr:7878".to_string(),
                    api_key: "a".to_string(),
                },
                episode: ServiceEndpoint {
                    url: "https://sonarr.example".to_string(),
                    api_key: "b".to_string(),
                },
                timeout_secs: 30,
            },
            search: SearchConfig {
                url: "http://zilean:8181".to_string(),
                timeout_secs: 30,
            },
            matcher: MatcherConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let mut config = valid_config();
        config.server = ServerConfig {
            host: "0.0.0.0".parse::<IpAddr>().unwrap(),
            port: 0,
        };
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_threshold_out_of_range_fails() {
        let mut config = valid_config();
        config.matcher.threshold = 1.5;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("matcher.threshold"));
    }

    #[test]
    fn test_validate_bad_search_url_fails() {
        let mut config = valid_config();
        config.search.url = "zilean:8181".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("search.url"));
    }

    #[test]
    fn test_validate_empty_parser_url_fails() {
        let mut config = valid_config();
        config.parser.episode.url = String::new();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("parser.episode.url"));
    }
}
