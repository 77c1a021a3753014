use std::path::PathBuf;

use kafka_metrics_schema::{Config, MetricDefinition, MetricKind, Result, SchemaError, Unit, Units};

#[test]
fn test_error_display() {
    let err = SchemaError::InvalidCategory {
        name: " ".to_string(),
        reason: "name is empty".to_string(),
    };
    assert!(err.to_string().contains("name is empty"));
}

#[test]
fn test_collision_names_both_categories() {
    let err = SchemaError::CategoryCollision {
        first: "LeaderAndIsr".to_string(),
        second: "leader_and_isr".to_string(),
        prefix: "leader_and_isr".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("LeaderAndIsr"));
    assert!(message.contains("'leader_and_isr'"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(SchemaError::RegistryUnavailable("timeout".into()))
    }
    assert!(returns_error().is_err());
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn registry_unavailable_classification() {
    assert!(SchemaError::RegistryUnavailable("down".into()).is_registry_unavailable());
    assert!(!SchemaError::Configuration("bad".into()).is_registry_unavailable());
}

#[test]
fn io_error_keeps_source_and_path() {
    let err = SchemaError::io(
        PathBuf::from("/out/kafka.json"),
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    assert!(err.to_string().contains("/out/kafka.json"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn json_error_converts() {
    fn parse() -> Result<serde_json::Value> {
        Ok(serde_json::from_str("{")?)
    }
    assert!(matches!(parse(), Err(SchemaError::Json(_))));
}

// ============================================================================
// Errors from public constructors
// ============================================================================

#[test]
fn invalid_metric_definition() {
    let err = MetricDefinition::new(
        MetricKind::Meter,
        "Bad Name",
        "Label",
        "",
        Units::rate(Unit::Requests, Unit::Second),
        "group::Leaf",
    )
    .unwrap_err();
    assert!(matches!(err, SchemaError::InvalidMetric { .. }));
}

#[test]
fn missing_config_file_is_configuration_error() {
    let err = Config::load(Some(std::path::Path::new("/nonexistent/config.toml"))).unwrap_err();
    assert!(matches!(err, SchemaError::Configuration(_)));
}
