//! One generation run: read categories, assemble both documents, write them.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::config::Config;
use crate::output::{self, DEFAULT_OUTPUT_FILE_NAME};
use crate::request::{CategorySource, RequestCategories};
use crate::schema::{
    self, CommonMetricsFixture, MetricSetVersion, RuntimeMetricSets, ServiceSchema,
};
use crate::types::MetricScope;
use crate::Result;

/// Settings for a [`Generator`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Schema document path; the common fixture goes in the same directory.
    pub output_path: PathBuf,
    /// Pretty-print the schema document. The common fixture is always pretty.
    pub pretty: bool,
    pub metric_set_version: MetricSetVersion,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE_NAME),
            pretty: false,
            metric_set_version: MetricSetVersion::default(),
        }
    }
}

impl From<&Config> for GeneratorConfig {
    fn from(config: &Config) -> Self {
        Self {
            output_path: config.output.path.clone(),
            pretty: config.output.pretty,
            metric_set_version: config.common.version,
        }
    }
}

/// Both documents of a run, before they are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documents {
    pub categories: RequestCategories,
    pub schema: ServiceSchema,
    pub common: CommonMetricsFixture,
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub schema_path: PathBuf,
    pub common_path: PathBuf,
    pub categories: usize,
    pub role_metrics: usize,
    pub entity_metrics: usize,
    pub common_metrics: usize,
}

/// Runs the generator against a category source and a runtime metric provider.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Assemble both documents without touching the filesystem.
    ///
    /// Registry errors surface here, before anything could be written.
    pub fn build(
        &self,
        source: &dyn CategorySource,
        runtime: &dyn RuntimeMetricSets,
    ) -> Result<Documents> {
        let categories = RequestCategories::from_source(source)?;
        info!(
            source = source.name(),
            count = categories.len(),
            "collected request categories"
        );
        let schema = schema::assemble_schema(&categories)?;
        let common = schema::assemble_common_metrics(runtime, self.config.metric_set_version)?;
        Ok(Documents {
            categories,
            schema,
            common,
        })
    }

    /// Assemble and write both documents.
    #[instrument(skip_all, fields(output = %self.config.output_path.display()))]
    pub fn generate(
        &self,
        source: &dyn CategorySource,
        runtime: &dyn RuntimeMetricSets,
    ) -> Result<GenerationReport> {
        let documents = self.build(source, runtime)?;

        let schema_path = self.config.output_path.clone();
        let common_path = output::common_metrics_path(&schema_path);
        output::write_json(&schema_path, &documents.schema, self.config.pretty)?;
        output::write_json(&common_path, &documents.common, true)?;

        let report = GenerationReport {
            categories: documents.categories.len(),
            role_metrics: documents.schema.metric_count(MetricScope::Role),
            entity_metrics: documents.schema.metric_count(MetricScope::Entity),
            common_metrics: documents.common.len(),
            schema_path,
            common_path,
        };
        info!(
            schema = %report.schema_path.display(),
            common = %report.common_path.display(),
            role_metrics = report.role_metrics,
            "wrote metric schema"
        );
        Ok(report)
    }
}
