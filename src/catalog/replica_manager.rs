//! Replica manager and replica fetcher metrics.

use super::StaticMetric;
use crate::types::path::{REPLICA_FETCHER_MANAGER, REPLICA_MANAGER};
use crate::types::{MetricKind, RegistryPath, Unit, Units};

pub const METRICS: &[StaticMetric] = &[
    StaticMetric {
        name: "partitions",
        label: "Partitions",
        description: "Number of partitions (lead or follower replicas) on broker",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Partitions),
        path: RegistryPath::Grouped(REPLICA_MANAGER, "PartitionCount"),
    },
    StaticMetric {
        name: "leader_replicas",
        label: "Leader Replicas",
        description: "Number of leader replicas on broker",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Replicas),
        path: RegistryPath::Grouped(REPLICA_MANAGER, "LeaderCount"),
    },
    StaticMetric {
        name: "under_replicated_partitions",
        label: "Under Replicated Partitions",
        description: "Number of partitions with unavailable replicas",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Partitions),
        path: RegistryPath::Grouped(REPLICA_MANAGER, "UnderReplicatedPartitions"),
    },
    StaticMetric {
        name: "isr_expands",
        label: "ISR Expansions",
        description: "Number of times ISR for a partition expanded",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::Expansions, Unit::Second),
        path: RegistryPath::Grouped(REPLICA_MANAGER, "IsrExpandsPerSec"),
    },
    StaticMetric {
        name: "isr_shrinks",
        label: "ISR Shrinks",
        description: "Number of times ISR for a partition shrank",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::Shrinks, Unit::Second),
        path: RegistryPath::Grouped(REPLICA_MANAGER, "IsrShrinksPerSec"),
    },
    StaticMetric {
        name: "max_replication_lag",
        label: "Maximum Replication Lag on Broker",
        description: "Maximum replication lag on broker, across all fetchers, topics and \
                      partitions",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Messages),
        path: RegistryPath::Grouped(REPLICA_FETCHER_MANAGER, "MaxLag"),
    },
    // Rate-valued gauge: the fetcher publishes an already averaged rate.
    StaticMetric {
        name: "min_replication_rate",
        label: "Minimum Replication Rate",
        description: "Minimum replication rate, across all fetchers, topics and partitions. \
                      Measured in average fetch requests per sec in the last minute",
        kind: MetricKind::Gauge,
        units: Units::rate(Unit::FetchRequestsSpaced, Unit::Second),
        path: RegistryPath::Grouped(REPLICA_FETCHER_MANAGER, "MinFetchRate"),
    },
];
