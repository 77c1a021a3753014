//! Request-category sources.
//!
//! The set of request types is owned by the broker, not by this crate. A
//! [`CategorySource`] hands back whatever set it knows about, in no
//! particular order; [`RequestCategories`](super::RequestCategories) sorts
//! and validates it.
//!
//! Category files use the same JSON formats as the remote registry:
//! `{ "version": 1, "categories": [...] }` or a bare array of names.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::telemetry;
use crate::{Result, SchemaError};

/// Request-metrics names registered by a Kafka 0.8.2 broker.
pub const BUILTIN_REQUEST_CATEGORIES: &[&str] = &[
    "ConsumerMetadata",
    "ControlledShutdown",
    "Fetch",
    "FetchConsumer",
    "FetchFollower",
    "Heartbeat",
    "JoinGroup",
    "LeaderAndIsr",
    "Metadata",
    "OffsetCommit",
    "OffsetFetch",
    "Offsets",
    "Produce",
    "StopReplica",
    "UpdateMetadata",
];

/// Maximum supported category file format version.
pub const MAX_SUPPORTED_VERSION: u32 = 1;

/// Provider of the current request-category names.
pub trait CategorySource {
    /// Short name for logs and telemetry labels.
    fn name(&self) -> &str;

    /// All known category names, unordered.
    ///
    /// Failing to reach or read the underlying registry is reported as
    /// [`SchemaError::RegistryUnavailable`].
    fn list_categories(&self) -> Result<HashSet<String>>;
}

/// The compiled-in snapshot of [`BUILTIN_REQUEST_CATEGORIES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCategories;

impl CategorySource for BuiltinCategories {
    fn name(&self) -> &str {
        "builtin"
    }

    fn list_categories(&self) -> Result<HashSet<String>> {
        Ok(BUILTIN_REQUEST_CATEGORIES
            .iter()
            .map(|s| s.to_string())
            .collect())
    }
}

/// A fixed in-memory set, e.g. names already fetched from a remote registry.
#[derive(Debug, Clone, Default)]
pub struct StaticCategories {
    names: HashSet<String>,
}

impl StaticCategories {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl CategorySource for StaticCategories {
    fn name(&self) -> &str {
        "static"
    }

    fn list_categories(&self) -> Result<HashSet<String>> {
        Ok(self.names.clone())
    }
}

/// Categories read from a JSON file on every call.
#[derive(Debug, Clone)]
pub struct FileCategories {
    path: PathBuf,
}

impl FileCategories {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CategorySource for FileCategories {
    fn name(&self) -> &str {
        "file"
    }

    fn list_categories(&self) -> Result<HashSet<String>> {
        let result = read_category_file(&self.path);
        telemetry::record_category_fetch(self.name(), result.is_ok());
        let names = result?;
        debug!(path = %self.path.display(), count = names.len(), "read request categories");
        Ok(names.into_iter().collect())
    }
}

fn read_category_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SchemaError::RegistryUnavailable(format!(
            "failed to read category file {}: {e}",
            path.display()
        ))
    })?;
    parse_payload(&content)
}

/// Versioned category file payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRegistry {
    /// Format version (currently 1).
    pub version: u32,
    /// Request category names.
    pub categories: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPayload {
    Versioned(CategoryRegistry),
    Bare(Vec<String>),
}

/// Parse a category payload in either the versioned or the bare-array format.
pub fn parse_payload(json: &str) -> Result<Vec<String>> {
    let payload: RawPayload = serde_json::from_str(json).map_err(|e| {
        SchemaError::RegistryUnavailable(format!("failed to parse category registry JSON: {e}"))
    })?;
    match payload {
        RawPayload::Versioned(registry) => {
            if registry.version > MAX_SUPPORTED_VERSION {
                return Err(SchemaError::UnsupportedVersion {
                    what: "category registry",
                    found: registry.version,
                    max: MAX_SUPPORTED_VERSION,
                });
            }
            Ok(registry.categories)
        }
        RawPayload::Bare(names) => Ok(names),
    }
}
