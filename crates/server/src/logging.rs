//! Tracing subscriber setup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mirage_core::LoggingConfig;

/// File name prefix for the rolling log file.
const LOG_FILE_NAME: &str = "mirage.log";

/// Build the filter: `RUST_LOG` wins, otherwise the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=debug", config.level)))
}

/// Install the global subscriber.
///
/// Logs always go to stderr. When a log directory is configured they are also
/// written to a daily rolling file; the returned guard flushes that writer and
/// must be held until shutdown.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}
