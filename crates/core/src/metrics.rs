//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - File generation (torrent/nzb, failures by reason)
//! - Release matching (outcomes, best scores, candidate counts)
//! - External services (metadata parser, release search)

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, HistogramVec, IntCounterVec, Opts};

// =============================================================================
// Generation Metrics
// =============================================================================

/// Files generated total by kind.
pub static FILES_GENERATED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("mirage_files_generated_total", "Total files generated"),
        &["kind"], // "torrent", "nzb"
    )
    .unwrap()
});

/// Generation failures by reason.
pub static GENERATION_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "mirage_generation_failures_total",
            "Total failed generation requests",
        ),
        &["reason"],
    )
    .unwrap()
});

// =============================================================================
// Matching Metrics
// =============================================================================

/// Match outcomes.
pub static MATCH_OUTCOMES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("mirage_match_outcomes_total", "Release match outcomes"),
        &["outcome"], // "matched", "no_results", "below_threshold"
    )
    .unwrap()
});

/// Best candidate similarity per match attempt.
pub static MATCH_SCORE: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "mirage_match_score",
            "Distribution of best candidate similarity scores",
        )
        .buckets(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.95, 1.0]),
    )
    .unwrap()
});

/// Candidates returned by the release search.
pub static SEARCH_RESULTS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "mirage_search_results",
            "Number of candidate releases returned per search",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0]),
    )
    .unwrap()
});

// =============================================================================
// External Service Metrics
// =============================================================================

/// External service request duration.
pub static EXTERNAL_SERVICE_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "mirage_external_service_duration_seconds",
            "Duration of external service calls",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["service", "operation"],
    )
    .unwrap()
});

/// External service requests total.
pub static EXTERNAL_SERVICE_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "mirage_external_service_requests_total",
            "Total external service requests",
        ),
        &["service", "operation", "status"], // status: "success", "error"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Record one external call.
pub fn record_external_call(service: &str, operation: &str, success: bool, duration_secs: f64) {
    let status = if success { "success" } else { "error" };
    EXTERNAL_SERVICE_REQUESTS
        .with_label_values(&[service, operation, status])
        .inc();
    EXTERNAL_SERVICE_DURATION
        .with_label_values(&[service, operation])
        .observe(duration_secs);
}

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Generation
        Box::new(FILES_GENERATED.clone()),
        Box::new(GENERATION_FAILURES.clone()),
        // Matching
        Box::new(MATCH_OUTCOMES.clone()),
        Box::new(MATCH_SCORE.clone()),
        Box::new(SEARCH_RESULTS.clone()),
        // External services
        Box::new(EXTERNAL_SERVICE_DURATION.clone()),
        Box::new(EXTERNAL_SERVICE_REQUESTS.clone()),
    ]
}
