//! Topic traffic metrics.
//!
//! The broker role reports these aggregated over all topics; the topic
//! entity reports the same measurements per topic, with the registry root
//! supplied by the platform.

use super::StaticMetric;
use crate::types::path::BROKER_TOPIC_METRICS as GROUP;
use crate::types::{MetricKind, RegistryPath, Unit, Units};

pub const BROKER_TOPIC_METRICS: &[StaticMetric] = &[
    StaticMetric {
        name: "messages_received",
        label: "Messages Received",
        description: "Number of messages written to topic on this broker",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::Messages, Unit::Second),
        path: RegistryPath::Grouped(GROUP, "MessagesInPerSec"),
    },
    StaticMetric {
        name: "bytes_received",
        label: "Bytes Received",
        description: "Amount of data written to topic on this broker",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::Bytes, Unit::Second),
        path: RegistryPath::Grouped(GROUP, "BytesInPerSec"),
    },
    StaticMetric {
        name: "bytes_fetched",
        label: "Bytes Fetched",
        description: "Amount of data consumers fetched from this topic on this broker",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::Bytes, Unit::Second),
        path: RegistryPath::Grouped(GROUP, "BytesOutPerSec"),
    },
    StaticMetric {
        name: "bytes_rejected",
        label: "Bytes Rejected",
        description: "Amount of data in messages rejected by broker for this topic",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::Bytes, Unit::Second),
        path: RegistryPath::Grouped(GROUP, "BytesRejectedPerSec"),
    },
    StaticMetric {
        name: "rejected_message_batches",
        label: "Rejected Message Batches",
        description: "Number of message batches sent by producers that the broker rejected \
                      for this topic",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::MessageBatches, Unit::Second),
        path: RegistryPath::Grouped(GROUP, "FailedProduceRequestsPerSec"),
    },
    StaticMetric {
        name: "fetch_request_failures",
        label: "Fetch Request Failures",
        description: "Number of data read requests from consumers that brokers failed to \
                      process for this topic",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::FetchRequests, Unit::Second),
        path: RegistryPath::Grouped(GROUP, "FailedFetchRequestsPerSec"),
    },
];
