//! Configuration loading for the generator.
//!
//! Configuration is loaded from a TOML file with the following resolution
//! order:
//! 1. `--config <path>` (CLI flag; must exist)
//! 2. `~/.kafka-metrics-schema/config.toml` (user)
//! 3. built-in defaults
//!
//! Command-line flags override whatever the file sets.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::output::DEFAULT_OUTPUT_FILE_NAME;
use crate::schema::MetricSetVersion;
use crate::types::path::PATH_SEPARATOR;
use crate::{Result, SchemaError};

/// Generator configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub categories: CategoriesConfig,
    #[serde(default)]
    pub common: CommonConfig,
}

/// Where and how documents are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Schema document path (default: `service_metrics.json`).
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Pretty-print the schema document (default: false).
    #[serde(default)]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: false,
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE_NAME)
}

/// Which registry supplies the request categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySourceKind {
    /// Compiled-in snapshot.
    #[default]
    Builtin,
    /// Local JSON file (`categories.path`).
    File,
    /// Remote JSON document (`categories.url`), cached locally.
    Remote,
}

/// Request-category registry settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriesConfig {
    #[serde(default)]
    pub source: CategorySourceKind,
    /// Category file for `source = "file"`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Registry URL for `source = "remote"`.
    #[serde(default)]
    pub url: Option<String>,
    /// Cache location for remote fetches (default: user cache dir).
    #[serde(default)]
    pub cache_path: Option<PathBuf>,
    /// Use the cached remote list without fetching.
    #[serde(default)]
    pub offline: bool,
}

/// Common metrics fixture settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    #[serde(default)]
    pub version: MetricSetVersion,
    /// Registry path separator for runtime metrics (default: `::`).
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            version: MetricSetVersion::default(),
            separator: default_separator(),
        }
    }
}

fn default_separator() -> String {
    PATH_SEPARATOR.to_string()
}

impl Config {
    /// Load configuration from the standard locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SchemaError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            SchemaError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the selected category source has what it needs.
    pub fn validate(&self) -> Result<()> {
        match self.categories.source {
            CategorySourceKind::File if self.categories.path.is_none() => Err(
                SchemaError::Configuration("categories.source = \"file\" needs categories.path".into()),
            ),
            CategorySourceKind::Remote
                if self.categories.url.is_none() && !self.categories.offline =>
            {
                Err(SchemaError::Configuration(
                    "categories.source = \"remote\" needs categories.url".into(),
                ))
            }
            _ => Ok(()),
        }
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(SchemaError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".kafka-metrics-schema").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        Ok(None)
    }
}
