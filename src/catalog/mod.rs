//! Static metric catalogs.
//!
//! Each submodule is a const table of [`StaticMetric`] records for one broker
//! subsystem. Tables are plain read-only data; they become
//! [`MetricDefinition`]s through the validating factory when a schema is
//! assembled.

pub mod broker;
pub mod controller;
pub mod network;
pub mod purgatory;
pub mod replica;
pub mod replica_manager;
pub mod topic;

use crate::types::{MetricDefinition, MetricKind, RegistryPath, Units};
use crate::Result;

/// A fixed metric record in a catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticMetric {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub kind: MetricKind,
    pub units: Units,
    pub path: RegistryPath,
}

impl StaticMetric {
    pub fn definition(&self) -> Result<MetricDefinition> {
        self.definition_at(self.path)
    }

    /// The same record with its registry root left to the platform.
    pub fn entity_definition(&self) -> Result<MetricDefinition> {
        self.definition_at(self.path.relative())
    }

    fn definition_at(&self, path: RegistryPath) -> Result<MetricDefinition> {
        MetricDefinition::new(
            self.kind,
            self.name,
            self.label,
            self.description,
            self.units,
            path.render(),
        )
    }
}

/// Static role-scope tables for the broker, in schema order.
pub const BROKER_ROLE_TABLES: [&[StaticMetric]; 6] = [
    broker::METRICS,
    topic::BROKER_TOPIC_METRICS,
    controller::METRICS,
    network::METRICS,
    purgatory::METRICS,
    replica_manager::METRICS,
];

/// Static broker role metrics: broker-state, log-flush and offsets records,
/// then topic, controller, network, purgatory and replica-manager metrics.
pub fn broker_role_metrics() -> Result<Vec<MetricDefinition>> {
    BROKER_ROLE_TABLES
        .iter()
        .flat_map(|table| table.iter())
        .map(StaticMetric::definition)
        .collect()
}

/// Per-topic entity metrics.
pub fn topic_entity_metrics() -> Result<Vec<MetricDefinition>> {
    topic::BROKER_TOPIC_METRICS
        .iter()
        .map(StaticMetric::entity_definition)
        .collect()
}

/// Per-replica entity metrics.
pub fn replica_entity_metrics() -> Result<Vec<MetricDefinition>> {
    replica::METRICS.iter().map(StaticMetric::definition).collect()
}
