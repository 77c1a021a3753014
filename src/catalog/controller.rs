//! Controller metrics.

use super::StaticMetric;
use crate::types::path::{CONTROLLER_STATS, KAFKA_CONTROLLER};
use crate::types::{MetricKind, RegistryPath, Unit, Units};

pub const METRICS: &[StaticMetric] = &[
    StaticMetric {
        name: "leader_election",
        label: "Leader Elections",
        description: "Leader elections",
        kind: MetricKind::Timer,
        units: Units::timed(Unit::Ms, Unit::Elections, Unit::Second),
        path: RegistryPath::Grouped(CONTROLLER_STATS, "LeaderElectionRateAndTimeMs"),
    },
    StaticMetric {
        name: "unclean_leader_elections",
        label: "Unclean Leader Elections",
        description: "Unclean leader elections. We recommend disabling unclean leader elections, \
                      to avoid potential data loss, so this should be 0",
        kind: MetricKind::Meter,
        units: Units::rate(Unit::Elections, Unit::Second),
        path: RegistryPath::Grouped(CONTROLLER_STATS, "UncleanLeaderElectionsPerSec"),
    },
    StaticMetric {
        name: "active_controller",
        label: "Active Controller",
        description: "Will be 1 if this broker is the active controller, 0 otherwise",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Controller),
        path: RegistryPath::Grouped(KAFKA_CONTROLLER, "ActiveControllerCount"),
    },
    StaticMetric {
        name: "preferred_replica_imbalance",
        label: "Preferred Replica Imbalance",
        description: "Number of partitions where the lead replica is not the preferred replica",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Partitions),
        path: RegistryPath::Grouped(KAFKA_CONTROLLER, "PreferredReplicaImbalanceCount"),
    },
    StaticMetric {
        name: "offline_partitions",
        label: "Offline Partitions",
        description: "Number of unavailable partitions",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Partitions),
        path: RegistryPath::Grouped(KAFKA_CONTROLLER, "OfflinePartitionsCount"),
    },
];
