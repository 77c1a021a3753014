//! `kafka-metrics-schema`: write the Kafka broker metric schema documents.
//!
//! Reads request categories from the configured registry, then writes the
//! service schema and the common metrics fixture next to it.
//!
//! Build: `cargo build --bin kafka-metrics-schema --features cli`

use std::path::PathBuf;
use std::process;
use std::sync::LazyLock;

use clap::Parser;
use tracing::debug;

use kafka_metrics_schema::config::CategorySourceKind;
use kafka_metrics_schema::request::remote::{self, RemoteCategoryConfig};
use kafka_metrics_schema::request::{
    BuiltinCategories, CategorySource, FileCategories, StaticCategories,
};
use kafka_metrics_schema::schema::{JvmMetricSets, SERVICE_NAME};
use kafka_metrics_schema::{Config, GenerationReport, Generator, GeneratorConfig};

static LONG_VERSION: LazyLock<String> = LazyLock::new(kafka_metrics_schema::long_version_string);

// ── CLI ─────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "kafka-metrics-schema",
    about = "generate the kafka broker metric schema",
    version = kafka_metrics_schema::PKG_VERSION,
    long_version = LONG_VERSION.as_str()
)]
struct Args {
    /// config file (default: ~/.kafka-metrics-schema/config.toml if present)
    #[arg(long, env = "KAFKA_METRICS_SCHEMA_CONFIG")]
    config: Option<PathBuf>,

    /// schema output path; the common fixture is written alongside
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// read request categories from a JSON file
    #[arg(long, conflicts_with = "categories_url")]
    categories_file: Option<PathBuf>,

    /// fetch request categories from a URL (cached for --offline)
    #[arg(long)]
    categories_url: Option<String>,

    /// use the cached remote category list without fetching
    #[arg(long, conflicts_with = "categories_file")]
    offline: bool,

    /// pretty-print the schema document
    #[arg(long)]
    pretty: bool,

    /// log progress at info level
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Log filter used when `RUST_LOG` is unset.
    fn default_log_level(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }

    /// Fold command-line flags over the loaded configuration.
    fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.output {
            config.output.path = path.clone();
        }
        if self.pretty {
            config.output.pretty = true;
        }
        if let Some(path) = &self.categories_file {
            config.categories.source = CategorySourceKind::File;
            config.categories.path = Some(path.clone());
        }
        if let Some(url) = &self.categories_url {
            config.categories.source = CategorySourceKind::Remote;
            config.categories.url = Some(url.clone());
        }
        if self.offline {
            config.categories.source = CategorySourceKind::Remote;
            config.categories.offline = true;
        }
    }
}

// ── category source ─────────────────────────────────────────────────

async fn category_source(
    config: &Config,
) -> Result<Box<dyn CategorySource>, Box<dyn std::error::Error>> {
    let categories = &config.categories;
    let source: Box<dyn CategorySource> = match categories.source {
        CategorySourceKind::Builtin => Box::new(BuiltinCategories),
        CategorySourceKind::File => match &categories.path {
            Some(path) => Box::new(FileCategories::new(path)),
            None => return Err("no category file configured".into()),
        },
        CategorySourceKind::Remote => {
            let cache_path = categories
                .cache_path
                .clone()
                .unwrap_or_else(remote::default_cache_path);
            let names = if categories.offline {
                remote::require_cached(&cache_path)?
            } else {
                let url = categories
                    .url
                    .clone()
                    .ok_or("no category registry url configured")?;
                let remote_config = RemoteCategoryConfig { url, cache_path };
                remote::update_categories(&remote_config).await?
            };
            Box::new(StaticCategories::new(names))
        }
    };
    debug!(source = source.name(), "selected category source");
    Ok(source)
}

// ── run ─────────────────────────────────────────────────────────────

async fn run(args: &Args) -> Result<GenerationReport, Box<dyn std::error::Error>> {
    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    let source = category_source(&config).await?;
    let runtime = JvmMetricSets::new(SERVICE_NAME).with_separator(&config.common.separator);
    let generator = Generator::new(GeneratorConfig::from(&config));
    Ok(generator.generate(source.as_ref(), &runtime)?)
}

fn print_report(report: &GenerationReport) {
    println!(
        "wrote {} ({} role, {} entity metrics, {} request categories)",
        report.schema_path.display(),
        report.role_metrics,
        report.entity_metrics,
        report.categories,
    );
    println!(
        "wrote {} ({} common metrics)",
        report.common_path.display(),
        report.common_metrics,
    );
}

// ── main ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.default_log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args).await {
        Ok(report) => print_report(&report),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
