//! Request-type metrics.
//!
//! Request categories are discovered at generation time, normalized into
//! metric prefixes and expanded into per-category metric definitions:
//!
//! ```text
//! CategorySource ──► RequestCategories ──► expand_request_metrics
//!  (unordered set)    (sorted, validated)    (11 metrics per category)
//! ```

pub mod category;
pub mod expand;
mod normalize;
#[cfg(feature = "remote")]
pub mod remote;
pub mod source;

pub use category::{RequestCategories, RequestCategory};
pub use expand::{METRICS_PER_CATEGORY, category_metrics, expand_request_metrics};
pub use normalize::{WORD_SEPARATOR, normalize_category};
pub use source::{BuiltinCategories, CategorySource, FileCategories, StaticCategories};
