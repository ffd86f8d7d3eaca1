//! The request orchestrator.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::matcher::ReleaseMatcher;
use crate::media::ParseClient;
use crate::metrics::{FILES_GENERATED, GENERATION_FAILURES};
use crate::nzb::render_nzb;
use crate::searcher::SearchClient;
use crate::torrent::synthesize_from_magnet;

use super::types::{FileKind, FileRequest, GenerateError, GeneratedFile};

/// Source of the timestamp stamped into generated files.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Generates descriptor files for requested release names.
///
/// Holds no per-request state; one instance serves all requests concurrently.
pub struct ReleaseGenerator {
    parser: Arc<dyn ParseClient>,
    searcher: Arc<dyn SearchClient>,
    matcher: ReleaseMatcher,
    clock: Clock,
}

impl ReleaseGenerator {
    pub fn new(
        parser: Arc<dyn ParseClient>,
        searcher: Arc<dyn SearchClient>,
        matcher: ReleaseMatcher,
    ) -> Self {
        Self {
            parser,
            searcher,
            matcher,
            clock: Arc::new(Utc::now),
        }
    }

    /// Replace the wall clock (used by tests to pin `creation date`).
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn matcher(&self) -> &ReleaseMatcher {
        &self.matcher
    }

    /// Generate a file from a raw `{name}.{ext}` path segment.
    pub async fn generate_file(&self, file: &str) -> Result<GeneratedFile, GenerateError> {
        match FileRequest::parse(file) {
            Ok(request) => self.generate(&request).await,
            Err(e) => {
                warn!(file, error = %e, "Rejected file request");
                GENERATION_FAILURES.with_label_values(&[e.reason()]).inc();
                Err(e)
            }
        }
    }

    /// Generate the file for a parsed request.
    pub async fn generate(&self, request: &FileRequest) -> Result<GeneratedFile, GenerateError> {
        info!(name = %request.name, kind = %request.kind, "New request");

        let result = match request.kind {
            FileKind::Torrent => self.generate_torrent(&request.name).await,
            FileKind::Nzb => Ok(self.generate_nzb(&request.name)),
        };

        match &result {
            Ok(file) => {
                FILES_GENERATED
                    .with_label_values(&[request.kind.extension()])
                    .inc();
                info!(file = %file.file_name, bytes = file.body.len(), "File generated");
            }
            Err(e) => {
                GENERATION_FAILURES.with_label_values(&[e.reason()]).inc();
                if e.status_code() >= 500 {
                    error!(name = %request.name, error = %e, "Error generating file");
                } else {
                    warn!(name = %request.name, error = %e, "Rejected file request");
                }
            }
        }

        result
    }

    async fn generate_torrent(&self, name: &str) -> Result<GeneratedFile, GenerateError> {
        info!(name, "Generating torrent");

        let parsed = self.parser.parse(name).await?;
        let matched = self.matcher.find(&parsed, self.searcher.as_ref()).await?;
        let magnet = matched.magnet_uri(name);
        let body = synthesize_from_magnet(name, &magnet, (self.clock)())?;

        Ok(GeneratedFile {
            file_name: format!("{}.{}", name, FileKind::Torrent.extension()),
            content_type: FileKind::Torrent.content_type(),
            body,
        })
    }

    fn generate_nzb(&self, name: &str) -> GeneratedFile {
        info!(name, "Generating nzb");

        GeneratedFile {
            file_name: format!("{}.{}", name, FileKind::Nzb.extension()),
            content_type: FileKind::Nzb.content_type(),
            body: render_nzb(name, (self.clock)()).into_bytes(),
        }
    }
}
