//! Unit vocabulary shared by every metric definition.

use std::fmt;

use serde::{Serialize, Serializer};

/// A measurement-unit token understood by the monitoring platform.
///
/// Serialized as its token string (see [`Unit::as_str`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Partitions,
    Replicas,
    Controller,
    Requests,
    Responses,
    Messages,
    MessageBatches,
    Bytes,
    Segments,
    Groups,
    Elections,
    Expansions,
    Shrinks,
    Flushes,
    Second,
    Nanoseconds,
    Ms,
    Offset,
    PercentIdle,
    State,
    FetchRequests,
    /// Spelled with a space; only the minimum replication rate gauge uses it.
    FetchRequestsSpaced,
    Threads,
}

impl Unit {
    /// Every unit, in declaration order.
    pub const ALL: [Unit; 23] = [
        Unit::Partitions,
        Unit::Replicas,
        Unit::Controller,
        Unit::Requests,
        Unit::Responses,
        Unit::Messages,
        Unit::MessageBatches,
        Unit::Bytes,
        Unit::Segments,
        Unit::Groups,
        Unit::Elections,
        Unit::Expansions,
        Unit::Shrinks,
        Unit::Flushes,
        Unit::Second,
        Unit::Nanoseconds,
        Unit::Ms,
        Unit::Offset,
        Unit::PercentIdle,
        Unit::State,
        Unit::FetchRequests,
        Unit::FetchRequestsSpaced,
        Unit::Threads,
    ];

    /// The token written into schema documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            Unit::Partitions => "partitions",
            Unit::Replicas => "replicas",
            Unit::Controller => "controller",
            Unit::Requests => "requests",
            Unit::Responses => "responses",
            Unit::Messages => "messages",
            Unit::MessageBatches => "message_batches",
            Unit::Bytes => "bytes",
            Unit::Segments => "segments",
            Unit::Groups => "groups",
            Unit::Elections => "elections",
            Unit::Expansions => "expansions",
            Unit::Shrinks => "shrinks",
            Unit::Flushes => "flushes",
            Unit::Second => "second",
            Unit::Nanoseconds => "nanoseconds",
            Unit::Ms => "ms",
            Unit::Offset => "offset",
            Unit::PercentIdle => "percent_idle",
            Unit::State => "state",
            Unit::FetchRequests => "fetch_requests",
            Unit::FetchRequestsSpaced => "fetch requests",
            Unit::Threads => "threads",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
