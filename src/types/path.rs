//! Registry-path templates.
//!
//! A registry path tells the monitoring agent where a raw value lives in the
//! broker's Codahale/Yammer registry. Paths are `<group>::<leaf>`, except for
//! entity metrics whose root is filled in per entity by the platform.

/// Separator between a registry group and the metric leaf.
pub const PATH_SEPARATOR: &str = "::";

/// A registry group such as `kafka.server.KafkaServer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricGroup(pub &'static str);

impl MetricGroup {
    /// `<group>::<leaf>`.
    pub fn path(self, leaf: &str) -> String {
        format!("{}{PATH_SEPARATOR}{leaf}", self.0)
    }
}

pub const KAFKA_SERVER: MetricGroup = MetricGroup("kafka.server.KafkaServer");
pub const LOG_FLUSH_STATS: MetricGroup = MetricGroup("kafka.log.LogFlushStats");
pub const OFFSET_MANAGER: MetricGroup = MetricGroup("kafka.server.OffsetManager");
pub const BROKER_TOPIC_METRICS: MetricGroup = MetricGroup("kafka.server.BrokerTopicMetrics");
pub const CONTROLLER_STATS: MetricGroup = MetricGroup("kafka.controller.ControllerStats");
pub const KAFKA_CONTROLLER: MetricGroup = MetricGroup("kafka.controller.KafkaController");
pub const REQUEST_CHANNEL: MetricGroup = MetricGroup("kafka.network.RequestChannel");
pub const SOCKET_SERVER: MetricGroup = MetricGroup("kafka.network.SocketServer");
pub const PRODUCER_REQUEST_PURGATORY: MetricGroup =
    MetricGroup("kafka.server.ProducerRequestPurgatory");
pub const FETCH_REQUEST_PURGATORY: MetricGroup = MetricGroup("kafka.server.FetchRequestPurgatory");
pub const REPLICA_MANAGER: MetricGroup = MetricGroup("kafka.server.ReplicaManager");
pub const REPLICA_FETCHER_MANAGER: MetricGroup =
    MetricGroup("kafka.server.ReplicaFetcherManager.clientId.Replica");
pub const REQUEST_HANDLER_POOL: MetricGroup = MetricGroup("kafka.server.KafkaRequestHandlerPool");
pub const DELAYED_FETCH_REQUEST_METRICS: MetricGroup =
    MetricGroup("kafka.server.DelayedFetchRequestMetrics");
pub const DELAYED_PRODUCER_REQUEST_METRICS: MetricGroup =
    MetricGroup("kafka.server.DelayedProducerRequestMetrics");

/// Root of the per-request-type metrics.
const REQUEST_METRICS_ROOT: &str = "kafka.network.RequestMetrics.request";

/// `kafka.network.RequestMetrics.request.<category>::<leaf>`.
pub fn request_path(category: &str, leaf: &str) -> String {
    format!("{REQUEST_METRICS_ROOT}.{category}{PATH_SEPARATOR}{leaf}")
}

/// Where a static metric's value is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryPath {
    /// Fully qualified `<group>::<leaf>`.
    Grouped(MetricGroup, &'static str),
    /// Leaf only; the platform prefixes the per-entity root at collection time.
    Relative(&'static str),
}

impl RegistryPath {
    pub fn render(self) -> String {
        match self {
            RegistryPath::Grouped(group, leaf) => group.path(leaf),
            RegistryPath::Relative(leaf) => leaf.to_string(),
        }
    }

    /// The same leaf without its group.
    pub fn relative(self) -> Self {
        match self {
            RegistryPath::Grouped(_, leaf) | RegistryPath::Relative(leaf) => {
                RegistryPath::Relative(leaf)
            }
        }
    }
}
