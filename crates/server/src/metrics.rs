//! Prometheus metrics for observability.
//!
//! This module provides the HTTP-level metrics for the Mirage server and a
//! registry that also carries the generation metrics from `mirage_core`.

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use regex_lite::Regex;

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "mirage_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("mirage_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "mirage_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Core metrics (generation, matching, external services)
    for metric in mirage_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

static HASH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9a-fA-F]{40}").expect("hash pattern is valid"));
static NUMERIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\d+(/|$)").expect("numeric pattern is valid"));

/// Collapse a request path into a bounded metrics label.
///
/// Every top-level segment outside `/api/` is a generated file request and
/// becomes `/{file}`; hashes and numeric segments become placeholders.
pub fn normalize_path(path: &str) -> String {
    if !path.starts_with("/api/") {
        let segment = path.trim_start_matches('/');
        if !segment.is_empty() && !segment.contains('/') {
            return "/{file}".to_string();
        }
    }

    let result = HASH_PATTERN.replace_all(path, "{hash}");
    let result = NUMERIC_PATTERN.replace_all(&result, "/{id}$1");
    result.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_file_request() {
        assert_eq!(normalize_path("/Movie.Name.2020.1080p.torrent"), "/{file}");
        assert_eq!(normalize_path("/anything.nzb"), "/{file}");
        assert_eq!(normalize_path("/noextension"), "/{file}");
    }

    #[test]
    fn test_normalize_path_hash() {
        let path = "/api/v1/files/a94a8fe5ccb19ba61c4c0873d391e987982fbbd3";
        assert_eq!(normalize_path(path), "/api/v1/files/{hash}");
    }

    #[test]
    fn test_normalize_path_numeric() {
        assert_eq!(normalize_path("/api/v1/items/12345"), "/api/v1/items/{id}");
        assert_eq!(
            normalize_path("/api/v1/items/12345/part/2"),
            "/api/v1/items/{id}/part/{id}"
        );
    }

    #[test]
    fn test_normalize_path_no_ids() {
        assert_eq!(normalize_path("/api/v1/health"), "/api/v1/health");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn test_encode_metrics_returns_prometheus_format() {
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/test", "200"])
            .inc();

        let output = encode_metrics().unwrap();
        assert!(output.contains("mirage_http_requests_total"));
        assert!(output.contains("# HELP"));
        assert!(output.contains("# TYPE"));
    }
}
