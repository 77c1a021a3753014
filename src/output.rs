//! Writing documents to disk.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::{Result, SchemaError};

/// Schema document file name when no output path is given.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "service_metrics.json";

/// Common metrics fixture file name, written next to the schema document.
pub const COMMON_METRICS_FILE_NAME: &str = "common_metrics_fixture.json";

/// Path of the common metrics fixture for a given schema output path.
///
/// ```rust
/// # use std::path::Path;
/// # use kafka_metrics_schema::output::common_metrics_path;
/// assert_eq!(
///     common_metrics_path(Path::new("out/kafka.json")),
///     Path::new("out/common_metrics_fixture.json")
/// );
/// ```
pub fn common_metrics_path(schema_path: &Path) -> PathBuf {
    schema_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(COMMON_METRICS_FILE_NAME)
}

/// Serialize `value` as UTF-8 JSON and write it to `path`.
///
/// Parent directories are created. The document is written to a temporary
/// sibling first and renamed into place, so readers never see a partial
/// file. No retry on failure.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SchemaError::io(parent, e))?;
    }

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, format!("{json}\n")).map_err(|e| SchemaError::io(&tmp_path, e))?;
    std::fs::rename(&tmp_path, path).map_err(|e| SchemaError::io(path, e))?;

    debug!(path = %path.display(), bytes = json.len() + 1, "wrote document");
    Ok(())
}
