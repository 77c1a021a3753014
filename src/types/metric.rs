//! Metric definitions: the atomic unit of a schema document.

use std::fmt;

use serde::Serialize;

use super::Unit;
use crate::{Result, SchemaError};

/// Codahale metric type of a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricKind {
    Gauge,
    Meter,
    Timer,
    Histogram,
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MetricKind::Gauge => "GAUGE",
            MetricKind::Meter => "METER",
            MetricKind::Timer => "TIMER",
            MetricKind::Histogram => "HISTOGRAM",
        };
        f.write_str(s)
    }
}

/// Where a set of metrics attaches on the monitoring platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricScope {
    /// A process instance, e.g. the broker.
    Role,
    /// A sub-resource instance, e.g. a topic or a replica.
    Entity,
}

impl MetricScope {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricScope::Role => "role",
            MetricScope::Entity => "entity",
        }
    }
}

/// Numerator/denominator/counter units of a metric.
///
/// Which combination is legal depends on the [`MetricKind`]; see
/// [`MetricDefinition::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Units {
    pub numerator: Unit,
    pub denominator: Option<Unit>,
    pub counter_numerator: Option<Unit>,
}

impl Units {
    /// A plain value (gauges).
    pub const fn count(numerator: Unit) -> Self {
        Self {
            numerator,
            denominator: None,
            counter_numerator: None,
        }
    }

    /// `numerator` per `denominator` (meters, rate-valued gauges).
    pub const fn rate(numerator: Unit, denominator: Unit) -> Self {
        Self {
            numerator,
            denominator: Some(denominator),
            counter_numerator: None,
        }
    }

    /// A value distribution with an event-count companion (histograms).
    pub const fn distribution(numerator: Unit, counter: Unit) -> Self {
        Self {
            numerator,
            denominator: None,
            counter_numerator: Some(counter),
        }
    }

    /// A duration distribution plus an event rate (timers).
    pub const fn timed(numerator: Unit, counter: Unit, denominator: Unit) -> Self {
        Self {
            numerator,
            denominator: Some(denominator),
            counter_numerator: Some(counter),
        }
    }
}

/// A single metric descriptor as written into schema documents.
///
/// Instances can only be obtained through [`MetricDefinition::new`], which
/// checks the invariants below, so every value in a schema is well formed.
///
/// ```rust
/// # use kafka_metrics_schema::{MetricDefinition, MetricKind, Unit, Units};
/// let metric = MetricDefinition::new(
///     MetricKind::Gauge,
///     "offline_partitions",
///     "Offline Partitions",
///     "Number of unavailable partitions",
///     Units::count(Unit::Partitions),
///     "kafka.controller.KafkaController::OfflinePartitionsCount",
/// )
/// .unwrap();
/// assert_eq!(metric.name(), "offline_partitions");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDefinition {
    name: String,
    label: String,
    description: String,
    numerator: Unit,
    #[serde(skip_serializing_if = "Option::is_none")]
    denominator: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    counter_numerator: Option<Unit>,
    #[serde(rename = "metricType")]
    kind: MetricKind,
    context: String,
}

impl MetricDefinition {
    /// Build a definition, rejecting combinations the platform cannot use.
    ///
    /// - `name` must be a non-empty `[a-z0-9_]` identifier
    /// - `label` and `context` (the registry path) must be non-empty
    /// - meters need a denominator and no counter unit
    /// - timers need both a denominator and a counter unit
    /// - histograms must not carry a denominator
    /// - gauges must not carry a counter unit; a denominator marks a
    ///   rate-valued gauge
    pub fn new(
        kind: MetricKind,
        name: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        units: Units,
        context: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if !is_metric_identifier(&name) {
            return Err(SchemaError::invalid_metric(
                &name,
                "name must be a non-empty [a-z0-9_] identifier",
            ));
        }
        Self::validated(kind, name, label.into(), description.into(), units, context.into())
    }

    /// Like [`MetricDefinition::new`], for names built from a broker-reported
    /// request category. The name only has to be non-empty: whatever the
    /// normalizer produced is kept as-is.
    pub(crate) fn with_derived_name(
        kind: MetricKind,
        name: String,
        label: String,
        description: String,
        units: Units,
        context: String,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(SchemaError::invalid_metric(&name, "name is empty"));
        }
        Self::validated(kind, name, label, description, units, context)
    }

    fn validated(
        kind: MetricKind,
        name: String,
        label: String,
        description: String,
        units: Units,
        context: String,
    ) -> Result<Self> {
        if label.trim().is_empty() {
            return Err(SchemaError::invalid_metric(&name, "label is empty"));
        }
        if context.trim().is_empty() {
            return Err(SchemaError::invalid_metric(&name, "registry path is empty"));
        }

        match kind {
            MetricKind::Meter => {
                if units.denominator.is_none() {
                    return Err(SchemaError::invalid_metric(&name, "meter needs a denominator"));
                }
                if units.counter_numerator.is_some() {
                    return Err(SchemaError::invalid_metric(
                        &name,
                        "meter cannot carry a counter unit",
                    ));
                }
            }
            MetricKind::Timer => {
                if units.denominator.is_none() || units.counter_numerator.is_none() {
                    return Err(SchemaError::invalid_metric(
                        &name,
                        "timer needs a denominator and a counter unit",
                    ));
                }
            }
            MetricKind::Histogram => {
                if units.denominator.is_some() {
                    return Err(SchemaError::invalid_metric(
                        &name,
                        "histogram cannot carry a denominator",
                    ));
                }
            }
            MetricKind::Gauge => {
                if units.counter_numerator.is_some() {
                    return Err(SchemaError::invalid_metric(
                        &name,
                        "gauge cannot carry a counter unit",
                    ));
                }
            }
        }

        Ok(Self {
            name,
            label,
            description,
            numerator: units.numerator,
            denominator: units.denominator,
            counter_numerator: units.counter_numerator,
            kind,
            context,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn units(&self) -> Units {
        Units {
            numerator: self.numerator,
            denominator: self.denominator,
            counter_numerator: self.counter_numerator,
        }
    }

    /// Registry path the raw value is read from.
    pub fn context(&self) -> &str {
        &self.context
    }
}

/// Whether `s` is usable as a metric name.
pub(crate) fn is_metric_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gauge(name: &str) -> Result<MetricDefinition> {
        MetricDefinition::new(
            MetricKind::Gauge,
            name,
            "Label",
            "Description",
            Units::count(Unit::Partitions),
            "group::Leaf",
        )
    }

    #[test]
    fn valid_gauge() {
        let metric = gauge("partitions").unwrap();
        assert_eq!(metric.kind(), MetricKind::Gauge);
        assert_eq!(metric.units(), Units::count(Unit::Partitions));
        assert_eq!(metric.context(), "group::Leaf");
    }

    #[test]
    fn rejects_bad_names() {
        assert!(gauge("").is_err());
        assert!(gauge("Partitions").is_err());
        assert!(gauge("log-size").is_err());
        assert!(gauge("log size").is_err());
        assert!(gauge("log_size_2").is_ok());
    }

    #[test]
    fn derived_names_keep_normalizer_output() {
        let metric = MetricDefinition::with_derived_name(
            MetricKind::Meter,
            "fetch-consumer_requests".to_string(),
            "Fetch-Consumer Requests".to_string(),
            String::new(),
            Units::rate(Unit::Requests, Unit::Second),
            "g::RequestsPerSec".to_string(),
        )
        .unwrap();
        assert_eq!(metric.name(), "fetch-consumer_requests");

        let empty = MetricDefinition::with_derived_name(
            MetricKind::Meter,
            " ".to_string(),
            "Label".to_string(),
            String::new(),
            Units::rate(Unit::Requests, Unit::Second),
            "g::RequestsPerSec".to_string(),
        );
        assert!(empty.is_err());
    }

    #[test]
    fn rejects_empty_context() {
        let err = MetricDefinition::new(
            MetricKind::Gauge,
            "size",
            "Size",
            "",
            Units::count(Unit::Bytes),
            "  ",
        )
        .unwrap_err();
        assert!(err.to_string().contains("registry path is empty"));
    }

    #[test]
    fn meter_requires_denominator() {
        let missing = MetricDefinition::new(
            MetricKind::Meter,
            "isr_shrinks",
            "ISR Shrinks",
            "",
            Units::count(Unit::Shrinks),
            "g::IsrShrinksPerSec",
        );
        assert!(missing.is_err());

        let ok = MetricDefinition::new(
            MetricKind::Meter,
            "isr_shrinks",
            "ISR Shrinks",
            "",
            Units::rate(Unit::Shrinks, Unit::Second),
            "g::IsrShrinksPerSec",
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn timer_requires_rate_and_counter() {
        let result = MetricDefinition::new(
            MetricKind::Timer,
            "log_flush",
            "Log Flush",
            "",
            Units::distribution(Unit::Ms, Unit::Flushes),
            "g::LogFlushRateAndTimeMs",
        );
        assert!(result.is_err());
    }

    #[test]
    fn histogram_rejects_denominator() {
        let result = MetricDefinition::new(
            MetricKind::Histogram,
            "produce_total_time",
            "Produce Total Time",
            "",
            Units::rate(Unit::Ms, Unit::Second),
            "g::TotalTimeMs",
        );
        assert!(result.is_err());
    }

    #[test]
    fn gauge_may_report_a_rate() {
        let result = MetricDefinition::new(
            MetricKind::Gauge,
            "min_replication_rate",
            "Minimum Replication Rate",
            "",
            Units::rate(Unit::FetchRequestsSpaced, Unit::Second),
            "g::MinFetchRate",
        );
        assert!(result.is_ok());
    }

    #[test]
    fn serializes_platform_field_names() {
        let metric = MetricDefinition::new(
            MetricKind::Timer,
            "log_flush",
            "Log Flush",
            "Rate of flushing Kafka logs to disk",
            Units::timed(Unit::Ms, Unit::Flushes, Unit::Second),
            "kafka.log.LogFlushStats::LogFlushRateAndTimeMs",
        )
        .unwrap();
        let value = serde_json::to_value(&metric).unwrap();
        assert_eq!(value["numerator"], "ms");
        assert_eq!(value["denominator"], "second");
        assert_eq!(value["counterNumerator"], "flushes");
        assert_eq!(value["metricType"], "TIMER");
        assert_eq!(value["context"], "kafka.log.LogFlushStats::LogFlushRateAndTimeMs");
    }

    #[test]
    fn optional_units_are_omitted() {
        let value = serde_json::to_value(gauge("partitions").unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("denominator"));
        assert!(!object.contains_key("counterNumerator"));
        assert_eq!(object.len(), 6);
    }
}
