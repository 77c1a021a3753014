//! Integration tests for schema assembly: layout, ordering and determinism.

use kafka_metrics_schema::request::{
    BuiltinCategories, METRICS_PER_CATEGORY, RequestCategories, StaticCategories,
};
use kafka_metrics_schema::schema::{
    self, KAFKA_BROKER, KAFKA_BROKER_TOPIC, KAFKA_REPLICA, SERVICE_NAME,
};
use kafka_metrics_schema::{MetricKind, MetricScope, SchemaError};

const STATIC_ROLE_METRICS: usize = 30;

fn categories(names: &[&str]) -> RequestCategories {
    RequestCategories::from_names(names.iter().copied()).unwrap()
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn role_metrics_grow_by_eleven_per_category() {
    for names in [&[][..], &["Produce"], &["Produce", "Fetch", "Metadata"]] {
        let schema = schema::assemble_schema(&categories(names)).unwrap();
        assert_eq!(
            schema.role_metrics(KAFKA_BROKER).len(),
            STATIC_ROLE_METRICS + METRICS_PER_CATEGORY * names.len()
        );
    }
    assert_eq!(METRICS_PER_CATEGORY, 11);
}

#[test]
fn builtin_categories_schema() {
    let categories = RequestCategories::from_source(&BuiltinCategories).unwrap();
    let schema = schema::assemble_schema(&categories).unwrap();

    assert_eq!(schema.service_name(), SERVICE_NAME);
    assert_eq!(schema.roles().collect::<Vec<_>>(), [KAFKA_BROKER]);
    assert_eq!(
        schema.entities().collect::<Vec<_>>(),
        [KAFKA_BROKER_TOPIC, KAFKA_REPLICA]
    );
    assert_eq!(
        schema.metric_count(MetricScope::Role),
        STATIC_ROLE_METRICS + 15 * METRICS_PER_CATEGORY
    );
    assert_eq!(schema.metric_count(MetricScope::Entity), 10);
}

#[test]
fn static_catalogs_come_first() {
    let schema = schema::assemble_schema(&categories(&["Produce"])).unwrap();
    let broker = schema.role_metrics(KAFKA_BROKER);

    assert_eq!(broker[0].name(), "broker_state");
    assert_eq!(broker[STATIC_ROLE_METRICS - 1].name(), "min_replication_rate");
    assert_eq!(broker[STATIC_ROLE_METRICS].name(), "request_handler_avg_idle");
    assert_eq!(broker.last().unwrap().name(), "produce_requests");
}

#[test]
fn request_blocks_follow_sorted_category_order() {
    let source = StaticCategories::new(["UpdateMetadata", "Fetch", "LeaderAndIsr"]);
    let categories = RequestCategories::from_source(&source).unwrap();
    let schema = schema::assemble_schema(&categories).unwrap();

    let request_names: Vec<&str> = schema.role_metrics(KAFKA_BROKER)[STATIC_ROLE_METRICS..]
        .iter()
        .map(|m| m.name())
        .filter(|n| n.ends_with("_requests"))
        .collect();
    assert_eq!(
        request_names,
        [
            "fetch_requests",
            "leader_and_isr_requests",
            "update_metadata_requests"
        ]
    );
}

#[test]
fn request_metric_kinds() {
    let schema = schema::assemble_schema(&categories(&["Offsets"])).unwrap();
    let block = &schema.role_metrics(KAFKA_BROKER)[STATIC_ROLE_METRICS..];

    assert!(block[..4].iter().all(|m| m.kind() == MetricKind::Meter));
    assert!(block[4..10].iter().all(|m| m.kind() == MetricKind::Histogram));
    assert_eq!(block[10].kind(), MetricKind::Meter);
    assert_eq!(
        block[10].context(),
        "kafka.network.RequestMetrics.request.Offsets::RequestsPerSec"
    );
}

#[test]
fn entity_paths_are_root_relative() {
    let schema = schema::assemble_schema(&RequestCategories::default()).unwrap();
    for metric in schema.entity_metrics(KAFKA_REPLICA) {
        assert!(!metric.context().contains("::"), "{}", metric.context());
    }
    assert_eq!(
        schema.entity_metrics(KAFKA_BROKER_TOPIC)[0].name(),
        "messages_received"
    );
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn insertion_order_does_not_change_output() {
    let a = StaticCategories::new(["Produce", "Fetch", "Heartbeat", "JoinGroup"]);
    let b = StaticCategories::new(["JoinGroup", "Heartbeat", "Fetch", "Produce"]);

    let schema_a = schema::assemble_schema(&RequestCategories::from_source(&a).unwrap()).unwrap();
    let schema_b = schema::assemble_schema(&RequestCategories::from_source(&b).unwrap()).unwrap();

    assert_eq!(
        serde_json::to_string(&schema_a).unwrap(),
        serde_json::to_string(&schema_b).unwrap()
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    let categories = RequestCategories::from_source(&BuiltinCategories).unwrap();
    let first = serde_json::to_vec(&schema::assemble_schema(&categories).unwrap()).unwrap();
    let second = serde_json::to_vec(&schema::assemble_schema(&categories).unwrap()).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Serialized form
// =============================================================================

#[test]
fn serialized_definition_fields() {
    let schema = schema::assemble_schema(&categories(&["Produce"])).unwrap();
    let value = serde_json::to_value(&schema).unwrap();
    let broker = value["roleMetrics"][KAFKA_BROKER].as_array().unwrap();

    let requests = broker
        .iter()
        .find(|m| m["name"] == "produce_requests")
        .unwrap();
    assert_eq!(requests["label"], "Produce Requests");
    assert_eq!(requests["metricType"], "METER");
    assert_eq!(requests["numerator"], "requests");
    assert_eq!(requests["denominator"], "second");

    let broker_state = &broker[0];
    assert_eq!(broker_state["metricType"], "GAUGE");
    assert!(broker_state.get("denominator").is_none());
    assert!(broker_state.get("counterNumerator").is_none());
}

#[test]
fn histograms_carry_counter_numerator() {
    let schema = schema::assemble_schema(&categories(&["Fetch"])).unwrap();
    let value = serde_json::to_value(&schema).unwrap();
    let total_time = value["roleMetrics"][KAFKA_BROKER]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["name"] == "fetch_total_time")
        .unwrap()
        .clone();
    assert_eq!(total_time["metricType"], "HISTOGRAM");
    assert_eq!(total_time["numerator"], "ms");
    assert_eq!(total_time["counterNumerator"], "requests");
}

// =============================================================================
// Category rejection
// =============================================================================

#[test]
fn colliding_categories_fail_before_assembly() {
    let err = RequestCategories::from_names(["LeaderAndIsr", "leader_and_isr"]).unwrap_err();
    assert!(matches!(err, SchemaError::CategoryCollision { .. }));
}

#[test]
fn blank_category_names_are_rejected() {
    for name in ["", "   "] {
        let err = RequestCategories::from_names([name]).unwrap_err();
        assert!(
            matches!(err, SchemaError::InvalidCategory { .. }),
            "{name:?}: {err}"
        );
    }
}

#[test]
fn punctuated_category_names_expand_as_normalized() {
    let schema = schema::assemble_schema(&categories(&["Produce", "Fetch-Consumer"])).unwrap();
    let block = &schema.role_metrics(KAFKA_BROKER)[STATIC_ROLE_METRICS..];

    assert_eq!(block.len(), 22);
    assert!(block.iter().any(|m| m.name() == "fetch-consumer_requests"));
    assert!(block.iter().any(|m| m.name() == "fetch-consumer_total_time"));
    assert_eq!(block.last().unwrap().name(), "produce_requests");
}
