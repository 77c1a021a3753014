//! Per-request-type metric expansion.
//!
//! Every request category gets the request-handler and delayed-request
//! meters followed by seven metrics derived from a fixed template: six
//! latency-stage histograms and a throughput meter.

use tracing::debug;

use super::category::{RequestCategories, RequestCategory};
use crate::catalog::StaticMetric;
use crate::types::path::{
    self, DELAYED_FETCH_REQUEST_METRICS, DELAYED_PRODUCER_REQUEST_METRICS, REQUEST_HANDLER_POOL,
};
use crate::types::{MetricDefinition, MetricKind, RegistryPath, Unit, Units};
use crate::Result;

/// Metrics repeated once per category.
///
/// They do not depend on the category; the repetition is kept because
/// schema consumers count on `11 × categories` request metrics.
pub const SHARED_REQUEST_METRICS: &[StaticMetric] = &[
    StaticMetric {
        name: "request_handler_avg_idle",
        label: "Request Handler Average Idle",
        description: "The average free capacity of the request handler",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::PercentIdle, Unit::Nanoseconds),
        path: RegistryPath::Grouped(REQUEST_HANDLER_POOL, "RequestHandlerAvgIdlePercent"),
    },
    StaticMetric {
        name: "consumer_expires",
        label: "Consumer Expires",
        description: "Number of expired delayed consumer fetch requests",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::Requests, Unit::Second),
        path: RegistryPath::Grouped(DELAYED_FETCH_REQUEST_METRICS, "ConsumerExpiresPerSecond"),
    },
    StaticMetric {
        name: "follower_expires",
        label: "Follower Expires",
        description: "Number of expired delayed follower fetch requests",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::Requests, Unit::Second),
        path: RegistryPath::Grouped(DELAYED_FETCH_REQUEST_METRICS, "FollowerExpiresPerSecond"),
    },
    StaticMetric {
        name: "producer_expires",
        label: "Producer Expires",
        description: "Number of expired delayed producer requests",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::Requests, Unit::Second),
        path: RegistryPath::Grouped(DELAYED_PRODUCER_REQUEST_METRICS, "ExpiresPerSecond"),
    },
];

/// One entry of the per-category template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTemplate {
    /// Appended to the category prefix: `<prefix>_<suffix>`.
    pub suffix: &'static str,
    /// Stage title, e.g. `"Local Time"`.
    pub title: &'static str,
    /// Registry leaf under `kafka.network.RequestMetrics.request.<Category>`.
    pub leaf: &'static str,
    pub kind: MetricKind,
}

impl RequestTemplate {
    const fn stage(suffix: &'static str, title: &'static str, leaf: &'static str) -> Self {
        Self {
            suffix,
            title,
            leaf,
            kind: MetricKind::Histogram,
        }
    }

    pub fn name(&self, category: &RequestCategory) -> String {
        format!("{}_{}", category.prefix(), self.suffix)
    }

    pub fn label(&self, category: &RequestCategory) -> String {
        format!("{} {}", category.name(), self.title)
    }

    pub fn description(&self, category: &RequestCategory) -> String {
        match self.kind {
            MetricKind::Meter => format!("Number of {} requests", category.name()),
            _ => format!(
                "{} spent in responding to {} requests",
                self.title,
                category.name()
            ),
        }
    }

    pub fn units(&self) -> Units {
        match self.kind {
            MetricKind::Meter => Units::rate(Unit::Requests, Unit::Second),
            _ => Units::distribution(Unit::Ms, Unit::Requests),
        }
    }

    pub fn context(&self, category: &RequestCategory) -> String {
        path::request_path(category.name(), self.leaf)
    }

    pub fn instantiate(&self, category: &RequestCategory) -> Result<MetricDefinition> {
        MetricDefinition::with_derived_name(
            self.kind,
            self.name(category),
            self.label(category),
            self.description(category),
            self.units(),
            self.context(category),
        )
    }
}

/// The seven per-category metrics, in output order.
pub const REQUEST_TEMPLATE: [RequestTemplate; 7] = [
    RequestTemplate::stage("local_time", "Local Time", "LocalTimeMs"),
    RequestTemplate::stage("remote_time", "Remote Time", "RemoteTimeMs"),
    RequestTemplate::stage("request_queue_time", "Request Queue Time", "RequestQueueTimeMs"),
    RequestTemplate::stage("response_queue_time", "Response Queue Time", "ResponseQueueTimeMs"),
    RequestTemplate::stage("response_send_time", "Response Send Time", "ResponseSendTimeMs"),
    RequestTemplate::stage("total_time", "Total Time", "TotalTimeMs"),
    RequestTemplate {
        suffix: "requests",
        title: "Requests",
        leaf: "RequestsPerSec",
        kind: MetricKind::Meter,
    },
];

/// Metrics emitted for every category.
pub const METRICS_PER_CATEGORY: usize = SHARED_REQUEST_METRICS.len() + REQUEST_TEMPLATE.len();

/// Metrics for a single category: shared meters, then the template.
pub fn category_metrics(category: &RequestCategory) -> Result<Vec<MetricDefinition>> {
    let mut metrics = Vec::with_capacity(METRICS_PER_CATEGORY);
    for shared in SHARED_REQUEST_METRICS {
        metrics.push(shared.definition()?);
    }
    for template in &REQUEST_TEMPLATE {
        metrics.push(template.instantiate(category)?);
    }
    Ok(metrics)
}

/// Expand every category, in sorted order, into one flat list.
///
/// An empty category set yields an empty list. Category prefixes are used
/// as normalized, so any non-blank name expands; the only failure is a
/// malformed template, which the const tables rule out.
pub fn expand_request_metrics(categories: &RequestCategories) -> Result<Vec<MetricDefinition>> {
    let mut metrics = Vec::with_capacity(categories.len() * METRICS_PER_CATEGORY);
    for category in categories {
        metrics.extend(category_metrics(category)?);
    }
    debug!(
        categories = categories.len(),
        metrics = metrics.len(),
        "expanded request metrics"
    );
    Ok(metrics)
}
