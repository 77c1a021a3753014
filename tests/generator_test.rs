//! Integration tests for a full generation run: both documents on disk.

use std::collections::HashSet;

use kafka_metrics_schema::request::{CategorySource, FileCategories, StaticCategories};
use kafka_metrics_schema::schema::{JvmMetricSets, KAFKA_BROKER};
use kafka_metrics_schema::{Config, Generator, GeneratorConfig, Result, SchemaError};

/// A registry that cannot be reached.
struct UnavailableRegistry;

impl CategorySource for UnavailableRegistry {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn list_categories(&self) -> Result<HashSet<String>> {
        Err(SchemaError::RegistryUnavailable("connection refused".into()))
    }
}

fn generator_in(dir: &std::path::Path, pretty: bool) -> Generator {
    Generator::new(GeneratorConfig {
        output_path: dir.join("out").join("kafka.json"),
        pretty,
        ..GeneratorConfig::default()
    })
}

fn read_json(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn writes_schema_and_common_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let generator = generator_in(dir.path(), false);

    let report = generator
        .generate(
            &StaticCategories::new(["Produce", "Fetch"]),
            &JvmMetricSets::default(),
        )
        .unwrap();

    assert_eq!(report.schema_path, dir.path().join("out").join("kafka.json"));
    assert_eq!(
        report.common_path,
        dir.path().join("out").join("common_metrics_fixture.json")
    );
    assert_eq!(report.categories, 2);
    assert_eq!(report.role_metrics, 30 + 22);
    assert_eq!(report.entity_metrics, 10);
    assert_eq!(report.common_metrics, 21);

    let schema = read_json(&report.schema_path);
    assert_eq!(schema["serviceName"], "KAFKA");
    assert_eq!(
        schema["roleMetrics"][KAFKA_BROKER].as_array().unwrap().len(),
        52
    );

    let common = read_json(&report.common_path);
    assert_eq!(common[KAFKA_BROKER].as_array().unwrap().len(), 21);
}

#[test]
fn schema_is_compact_unless_pretty() {
    let dir = tempfile::tempdir().unwrap();
    let source = StaticCategories::new(["Produce"]);

    let report = generator_in(dir.path(), false)
        .generate(&source, &JvmMetricSets::default())
        .unwrap();
    let compact = std::fs::read_to_string(&report.schema_path).unwrap();
    assert_eq!(compact.lines().count(), 1);

    // The common fixture is always pretty-printed.
    let common = std::fs::read_to_string(&report.common_path).unwrap();
    assert!(common.lines().count() > 1);

    let report = generator_in(dir.path(), true)
        .generate(&source, &JvmMetricSets::default())
        .unwrap();
    let pretty = std::fs::read_to_string(&report.schema_path).unwrap();
    assert!(pretty.lines().count() > 1);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
        serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
    );
}

#[test]
fn unavailable_registry_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let generator = generator_in(dir.path(), false);

    let err = generator
        .generate(&UnavailableRegistry, &JvmMetricSets::default())
        .unwrap_err();
    assert!(err.is_registry_unavailable());
    assert!(!dir.path().join("out").exists());
}

#[test]
fn missing_category_file_is_registry_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileCategories::new(dir.path().join("missing.json"));

    let err = generator_in(dir.path(), false)
        .generate(&source, &JvmMetricSets::default())
        .unwrap_err();
    assert!(err.is_registry_unavailable());
}

#[test]
fn category_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("categories.json");
    std::fs::write(&path, r#"{"version": 1, "categories": ["Produce", "Produce", "Fetch"]}"#)
        .unwrap();

    let documents = Generator::default()
        .build(&FileCategories::new(&path), &JvmMetricSets::default())
        .unwrap();
    assert_eq!(documents.categories.names(), ["Fetch", "Produce"]);
    assert_eq!(documents.schema.role_metrics(KAFKA_BROKER).len(), 52);
}

#[test]
fn generator_config_from_file_config() {
    let config: Config = toml::from_str(
        r#"
        [output]
        path = "/tmp/metrics/kafka.json"
        pretty = true
        "#,
    )
    .unwrap();

    let generator_config = GeneratorConfig::from(&config);
    assert_eq!(
        generator_config.output_path,
        std::path::PathBuf::from("/tmp/metrics/kafka.json")
    );
    assert!(generator_config.pretty);
}

#[test]
fn separator_reaches_common_fixture() {
    let documents = Generator::default()
        .build(
            &StaticCategories::new(Vec::<String>::new()),
            &JvmMetricSets::default().with_separator("/"),
        )
        .unwrap();
    let first = &documents.common.role_metrics(KAFKA_BROKER)[0];
    assert!(first.context().starts_with("jvm.memory/"));
}
