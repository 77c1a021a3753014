//! Telemetry metric name constants.
//!
//! Centralised metric names for schema generation runs. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `schema_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `scope`: "role", "entity" or "common"
//! - `source`: category source (e.g. "file", "remote")
//! - `status`: outcome: "ok" or "error"

/// Metric definitions placed into assembled documents.
///
/// Labels: `scope` ("role" | "entity" | "common").
pub const METRIC_DEFINITIONS_TOTAL: &str = "schema_metric_definitions_total";

/// Number of request categories in the latest run.
pub const REQUEST_CATEGORIES: &str = "schema_request_categories";

/// Time to assemble a service schema, in seconds.
pub const GENERATION_DURATION_SECONDS: &str = "schema_generation_duration_seconds";

/// Category registry reads.
///
/// Labels: `source`, `status` ("ok" | "error").
pub const CATEGORY_FETCHES_TOTAL: &str = "schema_category_fetches_total";

pub(crate) fn record_category_fetch(source: &str, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    metrics::counter!(CATEGORY_FETCHES_TOTAL,
        "source" => source.to_owned(),
        "status" => status,
    )
    .increment(1);
}

pub(crate) fn record_definitions(scope: &'static str, count: usize) {
    metrics::counter!(METRIC_DEFINITIONS_TOTAL, "scope" => scope).increment(count as u64);
}
