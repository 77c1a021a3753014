//! Kafka broker metric schema generator.
//!
//! Produces a machine-readable description of every metric a Kafka broker
//! exposes: a service schema (role and entity metrics, including one block
//! of request metrics per request category) plus a separate fixture of
//! common JVM runtime metrics.
//!
//! # Example
//!
//! ```rust
//! use kafka_metrics_schema::request::{RequestCategories, StaticCategories};
//! use kafka_metrics_schema::schema::{self, KAFKA_BROKER};
//!
//! # fn main() -> kafka_metrics_schema::Result<()> {
//! let source = StaticCategories::new(["Produce", "OffsetCommit"]);
//! let categories = RequestCategories::from_source(&source)?;
//! let schema = schema::assemble_schema(&categories)?;
//!
//! let broker = schema.role_metrics(KAFKA_BROKER);
//! assert!(broker.iter().any(|m| m.name() == "offset_commit_requests"));
//! # Ok(())
//! # }
//! ```
//!
//! # Writing documents
//!
//! ```rust,no_run
//! use kafka_metrics_schema::request::BuiltinCategories;
//! use kafka_metrics_schema::schema::JvmMetricSets;
//! use kafka_metrics_schema::{Generator, GeneratorConfig};
//!
//! # fn main() -> kafka_metrics_schema::Result<()> {
//! let generator = Generator::new(GeneratorConfig::default());
//! let report = generator.generate(&BuiltinCategories, &JvmMetricSets::default())?;
//! println!("wrote {}", report.schema_path.display());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod request;
pub mod schema;
pub mod telemetry;
pub mod types;
pub mod version;

pub use config::Config;
pub use error::{Result, SchemaError};
pub use generator::{Documents, GenerationReport, Generator, GeneratorConfig};
pub use request::{RequestCategories, RequestCategory, normalize_category};
pub use schema::{CommonMetricsFixture, ServiceSchema};
pub use types::{MetricDefinition, MetricKind, MetricScope, Unit, Units};
pub use version::{BuildInfo, PKG_VERSION, long_version_string, version_string};
