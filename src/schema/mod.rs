//! Schema assembly.
//!
//! Merges the static catalogs and the request-metric expansion into a
//! [`ServiceSchema`], and builds the separate [`CommonMetricsFixture`] of
//! runtime (JVM) metrics.
//!
//! Role metrics for the broker are laid out in a fixed order so successive
//! schema versions diff cleanly:
//!
//! 1. broker state, log flush, offsets cache
//! 2. topic, controller, network, purgatory, replica manager
//! 3. per-request-category metrics, categories in sorted order

pub mod common;

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, instrument};

use crate::catalog;
use crate::request::{RequestCategories, expand_request_metrics};
use crate::telemetry;
use crate::types::{MetricDefinition, MetricScope};
use crate::{Result, SchemaError};

pub use common::{
    CommonMetricsFixture, JvmMetricSets, MetricSetKind, MetricSetVersion, RuntimeMetricSets,
    assemble_common_metrics,
};

/// Service identifier written into every schema.
pub const SERVICE_NAME: &str = "KAFKA";
/// The broker process role.
pub const KAFKA_BROKER: &str = "KAFKA_BROKER";
/// Per-topic entity, as seen from one broker.
pub const KAFKA_BROKER_TOPIC: &str = "KAFKA_BROKER_TOPIC";
/// Per-replica entity.
pub const KAFKA_REPLICA: &str = "KAFKA_REPLICA";

/// The metric schema of one service.
///
/// Immutable once built; obtain one from [`assemble_schema`] or
/// [`ServiceSchema::builder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSchema {
    service_name: String,
    role_metrics: BTreeMap<String, Vec<MetricDefinition>>,
    entity_metrics: BTreeMap<String, Vec<MetricDefinition>>,
}

impl ServiceSchema {
    pub fn builder(service_name: impl Into<String>) -> ServiceSchemaBuilder {
        ServiceSchemaBuilder::new(service_name)
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Metrics of a role, in insertion order (empty for unknown roles).
    pub fn role_metrics(&self, role: &str) -> &[MetricDefinition] {
        self.role_metrics.get(role).map_or(&[], Vec::as_slice)
    }

    /// Metrics of an entity type, in insertion order (empty for unknown types).
    pub fn entity_metrics(&self, entity: &str) -> &[MetricDefinition] {
        self.entity_metrics.get(entity).map_or(&[], Vec::as_slice)
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.role_metrics.keys().map(String::as_str)
    }

    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entity_metrics.keys().map(String::as_str)
    }

    /// Total definitions in a scope.
    pub fn metric_count(&self, scope: MetricScope) -> usize {
        let lists = match scope {
            MetricScope::Role => &self.role_metrics,
            MetricScope::Entity => &self.entity_metrics,
        };
        lists.values().map(Vec::len).sum()
    }
}

/// Builder for [`ServiceSchema`].
///
/// Names must be unique per role (or entity type). Re-adding a definition
/// identical to one already present is accepted and appended again; a
/// different definition under a taken name is rejected.
#[derive(Debug, Clone)]
pub struct ServiceSchemaBuilder {
    schema: ServiceSchema,
}

impl ServiceSchemaBuilder {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            schema: ServiceSchema {
                service_name: service_name.into(),
                role_metrics: BTreeMap::new(),
                entity_metrics: BTreeMap::new(),
            },
        }
    }

    pub fn add_metric(
        &mut self,
        scope: MetricScope,
        owner: &str,
        metric: MetricDefinition,
    ) -> Result<()> {
        let lists = match scope {
            MetricScope::Role => &mut self.schema.role_metrics,
            MetricScope::Entity => &mut self.schema.entity_metrics,
        };
        let list = lists.entry(owner.to_string()).or_default();
        if let Some(existing) = list.iter().find(|m| m.name() == metric.name()) {
            if *existing != metric {
                return Err(SchemaError::DuplicateMetric {
                    name: metric.name().to_string(),
                    owner: format!("{} {owner}", scope.as_str()),
                });
            }
        }
        list.push(metric);
        Ok(())
    }

    pub fn add_role_metrics(
        &mut self,
        role: &str,
        metrics: impl IntoIterator<Item = MetricDefinition>,
    ) -> Result<()> {
        for metric in metrics {
            self.add_metric(MetricScope::Role, role, metric)?;
        }
        Ok(())
    }

    pub fn add_entity_metrics(
        &mut self,
        entity: &str,
        metrics: impl IntoIterator<Item = MetricDefinition>,
    ) -> Result<()> {
        for metric in metrics {
            self.add_metric(MetricScope::Entity, entity, metric)?;
        }
        Ok(())
    }

    pub fn build(self) -> ServiceSchema {
        self.schema
    }
}

/// Assemble the Kafka service schema for a set of request categories.
///
/// The broker role gets the static catalogs followed by the request-metric
/// expansion; topic and replica entities get their own static lists.
#[instrument(skip(categories), fields(categories = categories.len()))]
pub fn assemble_schema(categories: &RequestCategories) -> Result<ServiceSchema> {
    let start = Instant::now();

    let mut builder = ServiceSchema::builder(SERVICE_NAME);
    builder.add_role_metrics(KAFKA_BROKER, catalog::broker_role_metrics()?)?;
    builder.add_role_metrics(KAFKA_BROKER, expand_request_metrics(categories)?)?;
    builder.add_entity_metrics(KAFKA_BROKER_TOPIC, catalog::topic_entity_metrics()?)?;
    builder.add_entity_metrics(KAFKA_REPLICA, catalog::replica_entity_metrics()?)?;
    let schema = builder.build();

    let role_count = schema.metric_count(MetricScope::Role);
    let entity_count = schema.metric_count(MetricScope::Entity);
    telemetry::record_definitions(MetricScope::Role.as_str(), role_count);
    telemetry::record_definitions(MetricScope::Entity.as_str(), entity_count);
    metrics::gauge!(telemetry::REQUEST_CATEGORIES).set(categories.len() as f64);
    metrics::histogram!(telemetry::GENERATION_DURATION_SECONDS)
        .record(start.elapsed().as_secs_f64());

    info!(
        role_metrics = role_count,
        entity_metrics = entity_count,
        "assembled service schema"
    );
    Ok(schema)
}
