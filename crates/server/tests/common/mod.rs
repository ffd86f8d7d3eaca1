//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with mock dependencies injected, enabling E2E testing without the
//! metadata or search services.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use mirage_core::{
    load_config_from_str, ParseClient, ReleaseGenerator, ReleaseMatcher, SearchClient,
    testing::{MockParseClient, MockSearchClient},
};
use mirage_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use mirage_core::testing::fixtures;

/// Fixed `creation date` stamped into generated files.
pub const FIXED_TIMESTAMP: i64 = 1_700_000_000;

const TEST_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 8000

[parser]
movie = { url = "http://radarr.test", api_key = "movie-secret" }
episode = { url = "http://sonarr.test", api_key = "episode-secret" }

[search]
url = "http://index.test"
"#;

/// Test fixture for E2E testing with mock dependencies.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_torrent() {
///     let fixture = TestFixture::new();
///     fixture.parser.set_response("Movie.2020", fixtures::parsed_movie(...));
///
///     let response = fixture.get("/Movie.2020.torrent").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock parser - configure parse results per title
    pub parser: Arc<MockParseClient>,
    /// Mock searcher - configure index results
    pub searcher: Arc<MockSearchClient>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub bytes: Bytes,
}

impl TestResponse {
    /// Body decoded as JSON, or `Null` if it is not JSON.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap_or(Value::Null)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestFixture {
    /// Create a new test fixture with default mocks.
    pub fn new() -> Self {
        let config = load_config_from_str(TEST_CONFIG).expect("Failed to parse test config");

        let parser = Arc::new(MockParseClient::new());
        let searcher = Arc::new(MockSearchClient::new());

        let generator = ReleaseGenerator::new(
            Arc::clone(&parser) as Arc<dyn ParseClient>,
            Arc::clone(&searcher) as Arc<dyn SearchClient>,
            ReleaseMatcher::with_config(&config.matcher),
        )
        .with_clock(Arc::new(|| Utc.timestamp_opt(FIXED_TIMESTAMP, 0).unwrap()));

        let state = Arc::new(AppState::new(config, generator));
        let router = create_router(state);

        Self {
            router,
            parser,
            searcher,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            bytes,
        }
    }
}
