use mirage_core::{Config, ReleaseGenerator, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    generator: ReleaseGenerator,
}

impl AppState {
    pub fn new(config: Config, generator: ReleaseGenerator) -> Self {
        Self { config, generator }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn generator(&self) -> &ReleaseGenerator {
        &self.generator
    }
}
