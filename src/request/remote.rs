//! Remote category registry: fetch, cache, and load request-category names.
//!
//! Brokers newer than the built-in snapshot register more request types. A
//! maintained list can be published as JSON (same format as category files)
//! and fetched from a configurable URL; the last successful fetch is cached
//! at `~/.cache/kafka-metrics-schema/categories.json` so offline runs stay
//! reproducible.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::source::{CategoryRegistry, MAX_SUPPORTED_VERSION, parse_payload};
use crate::telemetry;
use crate::{Result, SchemaError};

/// Configuration for the remote category registry.
///
/// ```rust
/// # use kafka_metrics_schema::request::remote::RemoteCategoryConfig;
/// let config = RemoteCategoryConfig::with_url("https://example.com/categories.json");
/// assert!(config.cache_path.ends_with("categories.json"));
/// ```
#[derive(Debug, Clone)]
pub struct RemoteCategoryConfig {
    /// URL to fetch the category list from.
    pub url: String,
    /// Local path to cache the fetched list.
    pub cache_path: PathBuf,
}

impl RemoteCategoryConfig {
    /// Create a config with a custom URL and default cache path.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            cache_path: default_cache_path(),
        }
    }
}

/// Default cache path: `~/.cache/kafka-metrics-schema/categories.json`.
pub fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("kafka-metrics-schema")
        .join("categories.json")
}

// ============================================================================
// Local file cache
// ============================================================================

/// Load cached category names from disk.
///
/// Returns `None` on missing or corrupt file (logs a warning on corrupt).
pub fn load_cached(path: &Path) -> Option<Vec<String>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read cached categories");
            return None;
        }
    };
    match parse_payload(&content) {
        Ok(names) => Some(names),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt cached categories");
            None
        }
    }
}

/// Save category names to the local cache (atomic write via tmp + rename).
pub fn save_cache(path: &Path, names: &[String]) -> Result<()> {
    let registry = CategoryRegistry {
        version: MAX_SUPPORTED_VERSION,
        categories: names.to_vec(),
    };
    crate::output::write_json(path, &registry, true)
}

// ============================================================================
// Remote fetch
// ============================================================================

/// Fetch category names from a remote URL.
pub async fn fetch_remote(url: &str) -> Result<Vec<String>> {
    let result = fetch_body(url).await.and_then(|body| parse_payload(&body));
    telemetry::record_category_fetch("remote", result.is_ok());
    result
}

async fn fetch_body(url: &str) -> Result<String> {
    let response = reqwest::get(url).await.map_err(|e| {
        SchemaError::RegistryUnavailable(format!("failed to fetch categories from {url}: {e}"))
    })?;

    if !response.status().is_success() {
        return Err(SchemaError::RegistryUnavailable(format!(
            "category fetch returned HTTP {}",
            response.status()
        )));
    }

    response.text().await.map_err(|e| {
        SchemaError::RegistryUnavailable(format!("failed to read category response body: {e}"))
    })
}

/// Fetch the remote list and save it to the local cache.
///
/// Returns the fetched names.
pub async fn update_categories(config: &RemoteCategoryConfig) -> Result<Vec<String>> {
    info!(url = %config.url, "fetching remote request categories");
    let names = fetch_remote(&config.url).await?;
    save_cache(&config.cache_path, &names)?;
    info!(
        count = names.len(),
        path = %config.cache_path.display(),
        "saved request categories to cache"
    );
    Ok(names)
}

/// Load the cached list, failing if nothing usable was cached.
pub fn require_cached(path: &Path) -> Result<Vec<String>> {
    load_cached(path).ok_or_else(|| {
        SchemaError::RegistryUnavailable(format!(
            "no cached request categories at {}",
            path.display()
        ))
    })
}
