//! Request purgatory metrics.

use super::StaticMetric;
use crate::types::path::{FETCH_REQUEST_PURGATORY, PRODUCER_REQUEST_PURGATORY};
use crate::types::{MetricKind, RegistryPath, Unit, Units};

pub const METRICS: &[StaticMetric] = &[
    StaticMetric {
        name: "producer_purgatory_size",
        label: "Requests waiting in the producer purgatory",
        description: "Requests waiting in the producer purgatory. This should be non-zero \
                      when acks = -1 is used in producers",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Requests),
        path: RegistryPath::Grouped(PRODUCER_REQUEST_PURGATORY, "PurgatorySize"),
    },
    StaticMetric {
        name: "producer_purgatory_delayed_requests",
        label: "Number of requests delayed in the producer purgatory",
        description: "Number of requests delayed in the producer purgatory",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Requests),
        path: RegistryPath::Grouped(PRODUCER_REQUEST_PURGATORY, "NumDelayedRequests"),
    },
    StaticMetric {
        name: "fetch_purgatory_size",
        label: "Requests waiting in the fetch purgatory",
        description: "Requests waiting in the fetch purgatory. This depends on value of \
                      fetch.wait.max.ms in the consumer",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Requests),
        path: RegistryPath::Grouped(FETCH_REQUEST_PURGATORY, "PurgatorySize"),
    },
    StaticMetric {
        name: "fetch_purgatory_delayed_requests",
        label: "Number of requests delayed in the fetch purgatory",
        description: "Number of requests delayed in the fetch purgatory",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Requests),
        path: RegistryPath::Grouped(FETCH_REQUEST_PURGATORY, "NumDelayedRequests"),
    },
];
