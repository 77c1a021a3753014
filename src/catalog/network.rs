//! Network layer metrics: request channel and socket server.

use super::StaticMetric;
use crate::types::path::{REQUEST_CHANNEL, SOCKET_SERVER};
use crate::types::{MetricKind, RegistryPath, Unit, Units};

pub const METRICS: &[StaticMetric] = &[
    StaticMetric {
        name: "request_queue_size",
        label: "Request Queue Size",
        description: "Request Queue Size",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Requests),
        path: RegistryPath::Grouped(REQUEST_CHANNEL, "RequestQueueSize"),
    },
    StaticMetric {
        name: "response_queue_size",
        label: "Response Queue Size",
        description: "Response Queue Size",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Responses),
        path: RegistryPath::Grouped(REQUEST_CHANNEL, "ResponseQueueSize"),
    },
    StaticMetric {
        name: "network_processor_avg_idle",
        label: "Network Processor Average Idle",
        description: "The average free capacity of the network processors",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::PercentIdle, Unit::Nanoseconds),
        path: RegistryPath::Grouped(SOCKET_SERVER, "NetworkProcessorAvgIdle"),
    },
    StaticMetric {
        name: "responses_being_sent",
        label: "Responses Being Sent",
        description: "The number of responses being sent by the network processors",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Responses),
        path: RegistryPath::Grouped(SOCKET_SERVER, "ResponsesBeingSent"),
    },
];
