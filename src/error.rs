//! Schema generator error types

use std::path::PathBuf;

/// Schema generator error types
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    // Category registry errors
    /// The request-category registry could not be reached or read.
    ///
    /// Fatal: generation aborts before any document is written.
    #[error("request category registry unavailable: {0}")]
    RegistryUnavailable(String),

    #[error("invalid request category '{name}': {reason}")]
    InvalidCategory { name: String, reason: String },

    /// Two distinct category names normalize to the same metric prefix.
    #[error("request categories '{first}' and '{second}' both map to metric prefix '{prefix}'")]
    CategoryCollision {
        first: String,
        second: String,
        prefix: String,
    },

    // Catalog errors
    #[error("invalid metric '{name}': {reason}")]
    InvalidMetric { name: String, reason: String },

    /// A different definition was registered under a name already in use.
    #[error("conflicting definitions for metric '{name}' under {owner}")]
    DuplicateMetric { name: String, owner: String },

    #[error("unsupported {what} version {found} (max supported: {max})")]
    UnsupportedVersion {
        what: &'static str,
        found: u32,
        max: u32,
    },

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    // Output errors
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_metric(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidMetric {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the category registry could not be read.
    pub fn is_registry_unavailable(&self) -> bool {
        matches!(self, Self::RegistryUnavailable(_))
    }
}

/// Result type alias for schema generator operations
pub type Result<T> = std::result::Result<T, SchemaError>;
