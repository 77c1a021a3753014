//! Per-replica log metrics.
//!
//! Registry paths carry only the leaf: the platform knows each replica's
//! log root and completes the path at collection time.

use super::StaticMetric;
use crate::types::{MetricKind, RegistryPath, Unit, Units};

pub const METRICS: &[StaticMetric] = &[
    StaticMetric {
        name: "log_end_offset",
        label: "Log End Offset",
        description: "The offset of the next message that will be appended to the log",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Offset),
        path: RegistryPath::Relative("LogEndOffset"),
    },
    StaticMetric {
        name: "log_start_offset",
        label: "Log Start Offset",
        description: "The earliest message offset in the log",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Offset),
        path: RegistryPath::Relative("LogStartOffset"),
    },
    StaticMetric {
        name: "num_log_segments",
        label: "Number of log segments",
        description: "The number of segments in the log",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Segments),
        path: RegistryPath::Relative("NumLogSegments"),
    },
    StaticMetric {
        name: "size",
        label: "Log size",
        description: "The size of the log",
        kind: MetricKind::Gauge,
        units: Units::count(Unit::Bytes),
        path: RegistryPath::Relative("Size"),
    },
];
