//! Common runtime metrics fixture.
//!
//! Brokers expose the standard Codahale JVM gauge sets. Their descriptors
//! are the same for every JVM service, so they are emitted as a separate
//! fixture keyed by role rather than inside the service schema.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{KAFKA_BROKER, SERVICE_NAME};
use crate::telemetry;
use crate::types::path::PATH_SEPARATOR;
use crate::types::{MetricDefinition, MetricKind, Unit, Units};
use crate::Result;

/// A runtime gauge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricSetKind {
    /// `MemoryUsageGaugeSet`: heap, non-heap and total memory.
    Memory,
    /// `ThreadStatesGaugeSet`: thread counts per state.
    ThreadState,
}

impl MetricSetKind {
    /// Segment used in metric names.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricSetKind::Memory => "memory",
            MetricSetKind::ThreadState => "thread_state",
        }
    }

    /// Registry group the set is published under.
    pub fn group(self) -> &'static str {
        match self {
            MetricSetKind::Memory => "jvm.memory",
            MetricSetKind::ThreadState => "jvm.thread-states",
        }
    }
}

/// Version tag of the runtime metric library the broker ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MetricSetVersion {
    /// Codahale metrics 2.x virtual machine gauge sets.
    #[default]
    #[serde(rename = "codahale-2.x")]
    Codahale2xVirtualMachine,
}

impl MetricSetVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricSetVersion::Codahale2xVirtualMachine => "codahale-2.x",
        }
    }
}

impl fmt::Display for MetricSetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider of runtime metric-set descriptors.
pub trait RuntimeMetricSets {
    fn metric_set(
        &self,
        kind: MetricSetKind,
        version: MetricSetVersion,
    ) -> Result<Vec<MetricDefinition>>;
}

// (codahale segment, name segment, title)
const MEMORY_AREAS: [(&str, &str, &str); 3] = [
    ("total", "total", "Total"),
    ("heap", "heap", "Heap"),
    ("non-heap", "non_heap", "Non-Heap"),
];

// (codahale leaf, title, description fragment)
const MEMORY_STATS: [(&str, &str, &str); 4] = [
    ("init", "Initial", "initially requested from the operating system"),
    ("used", "Used", "currently in use"),
    ("max", "Max", "available at most"),
    ("committed", "Committed", "committed by the operating system"),
];

// (codahale leaf, name suffix, label, description)
const THREAD_GAUGES: [(&str, &str, &str, &str); 9] = [
    ("count", "count", "Threads", "Number of live threads"),
    ("daemon.count", "daemon_count", "Daemon Threads", "Number of live daemon threads"),
    ("deadlocks", "deadlocks", "Deadlocked Threads", "Number of deadlocked threads"),
    ("new.count", "new", "New Threads", "Number of threads in the NEW state"),
    ("runnable.count", "runnable", "Runnable Threads", "Number of threads in the RUNNABLE state"),
    ("blocked.count", "blocked", "Blocked Threads", "Number of threads in the BLOCKED state"),
    ("waiting.count", "waiting", "Waiting Threads", "Number of threads in the WAITING state"),
    (
        "timed_waiting.count",
        "timed_waiting",
        "Timed Waiting Threads",
        "Number of threads in the TIMED_WAITING state",
    ),
    (
        "terminated.count",
        "terminated",
        "Terminated Threads",
        "Number of threads in the TERMINATED state",
    ),
];

/// Codahale JVM gauge sets as published through the metrics servlet.
///
/// Names are `<service>_<set>_<leaf>`; registry paths are
/// `<group><separator><codahale name>`, e.g. `jvm.memory::heap.used`.
#[derive(Debug, Clone)]
pub struct JvmMetricSets {
    service_name: String,
    separator: String,
}

impl JvmMetricSets {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            separator: PATH_SEPARATOR.to_string(),
        }
    }

    /// Override the group/leaf separator of registry paths.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    fn name(&self, kind: MetricSetKind, leaf: &str) -> String {
        format!(
            "{}_{}_{leaf}",
            self.service_name.to_ascii_lowercase(),
            kind.as_str()
        )
    }

    fn context(&self, kind: MetricSetKind, leaf: &str) -> String {
        format!("{}{}{leaf}", kind.group(), self.separator)
    }

    fn memory(&self) -> Result<Vec<MetricDefinition>> {
        let kind = MetricSetKind::Memory;
        let mut metrics = Vec::with_capacity(MEMORY_AREAS.len() * MEMORY_STATS.len());
        for (area, area_name, area_title) in MEMORY_AREAS {
            for (stat, stat_title, fragment) in MEMORY_STATS {
                metrics.push(MetricDefinition::new(
                    MetricKind::Gauge,
                    self.name(kind, &format!("{area_name}_{stat}")),
                    format!("{area_title} Memory {stat_title}"),
                    format!("{area_title} memory {fragment}"),
                    Units::count(Unit::Bytes),
                    self.context(kind, &format!("{area}.{stat}")),
                )?);
            }
        }
        Ok(metrics)
    }

    fn thread_states(&self) -> Result<Vec<MetricDefinition>> {
        let kind = MetricSetKind::ThreadState;
        THREAD_GAUGES
            .iter()
            .map(|(leaf, suffix, label, description)| {
                MetricDefinition::new(
                    MetricKind::Gauge,
                    self.name(kind, suffix),
                    *label,
                    *description,
                    Units::count(Unit::Threads),
                    self.context(kind, leaf),
                )
            })
            .collect()
    }
}

impl Default for JvmMetricSets {
    fn default() -> Self {
        Self::new(SERVICE_NAME)
    }
}

impl RuntimeMetricSets for JvmMetricSets {
    fn metric_set(
        &self,
        kind: MetricSetKind,
        version: MetricSetVersion,
    ) -> Result<Vec<MetricDefinition>> {
        match version {
            MetricSetVersion::Codahale2xVirtualMachine => match kind {
                MetricSetKind::Memory => self.memory(),
                MetricSetKind::ThreadState => self.thread_states(),
            },
        }
    }
}

/// Runtime metrics per role, serialized as a bare `{ role: [...] }` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommonMetricsFixture {
    roles: BTreeMap<String, Vec<MetricDefinition>>,
}

impl CommonMetricsFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append metrics to a role's list.
    pub fn extend_role(
        &mut self,
        role: impl Into<String>,
        metrics: impl IntoIterator<Item = MetricDefinition>,
    ) {
        self.roles.entry(role.into()).or_default().extend(metrics);
    }

    pub fn role_metrics(&self, role: &str) -> &[MetricDefinition] {
        self.roles.get(role).map_or(&[], Vec::as_slice)
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.roles.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the broker's common metrics: the memory set, then the thread-state set.
#[instrument(skip(provider))]
pub fn assemble_common_metrics(
    provider: &dyn RuntimeMetricSets,
    version: MetricSetVersion,
) -> Result<CommonMetricsFixture> {
    let memory = provider.metric_set(MetricSetKind::Memory, version)?;
    let threads = provider.metric_set(MetricSetKind::ThreadState, version)?;

    let mut fixture = CommonMetricsFixture::new();
    fixture.extend_role(KAFKA_BROKER, memory.into_iter().chain(threads));

    telemetry::record_definitions("common", fixture.len());
    debug!(metrics = fixture.len(), "assembled common metrics fixture");
    Ok(fixture)
}
