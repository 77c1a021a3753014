//! Public types for schema documents.

mod metric;
pub mod path;
mod unit;

pub(crate) use metric::is_metric_identifier;
pub use metric::{MetricDefinition, MetricKind, MetricScope, Units};
pub use path::{MetricGroup, RegistryPath};
pub use unit::Unit;
