//! Broker process metrics: state, log flushing and the offsets cache.

use super::StaticMetric;
use crate::types::path::{KAFKA_SERVER, LOG_FLUSH_STATS, OFFSET_MANAGER};
use crate::types::{MetricKind, RegistryPath, Unit, Units};

pub const METRICS: &[StaticMetric] = &[
    StaticMetric {
        name: "broker_state",
        label: "Broker State",
        description: "The state the broker is in. 0 = NotRunning, 1 = Starting, \
                      2 = RecoveringFromUncleanShutdown, 3 = RunningAsBroker, \
                      4 = RunningAsController, 6 = PendingControlledShutdown, \
                      7 = BrokerShuttingDown",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::State),
        path: RegistryPath::Grouped(KAFKA_SERVER, "BrokerState"),
    },
    StaticMetric {
        name: "log_flush",
        label: "Log Flush",
        description: "Rate of flushing Kafka logs to disk",
        kind: MetricKind::Timer,
        units: Units::timed(Unit::Ms, Unit::Flushes, Unit::Second),
        path: RegistryPath::Grouped(LOG_FLUSH_STATS, "LogFlushRateAndTimeMs"),
    },
    StaticMetric {
        name: "offsets_groups",
        label: "Offsets Groups",
        description: "The number of consumer groups in the offsets cache",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Groups),
        path: RegistryPath::Grouped(OFFSET_MANAGER, "NumGroups"),
    },
    StaticMetric {
        name: "offsets",
        label: "Offsets",
        description: "The size of the offsets cache",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Groups),
        path: RegistryPath::Grouped(OFFSET_MANAGER, "NumOffsets"),
    },
];
