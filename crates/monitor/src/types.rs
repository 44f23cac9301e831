//! Value types for the snapshots Burrow reports.
//!
//! Every type here is an immutable snapshot of the service's view at the
//! instant the response was produced. Nothing is tracked across calls; two
//! snapshots of the same group are compared by value, never by identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::null_as_default;
use crate::{ClusterName, ConsumerGroupName, TopicName};

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly; the underlying representation can change without affecting the
/// domain API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a [`Timestamp`] from milliseconds since the Unix epoch.
    ///
    /// Returns `None` if the value is outside the representable range.
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

// ---------------------------------------------------------------------------
// Cluster topology
// ---------------------------------------------------------------------------

/// Connection details Burrow holds for one Kafka cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Broker host names.
    #[serde(deserialize_with = "null_as_default")]
    pub brokers: Vec<String>,

    /// ZooKeeper host names.
    #[serde(deserialize_with = "null_as_default")]
    pub zookeepers: Vec<String>,

    /// Port shared by every broker in [`Cluster::brokers`].
    pub broker_port: u16,

    /// Port shared by every host in [`Cluster::zookeepers`].
    pub zookeeper_port: u16,

    /// Topic Burrow consumes committed offsets from (usually `__consumer_offsets`).
    pub offsets_topic: TopicName,
}

// ---------------------------------------------------------------------------
// Offsets
// ---------------------------------------------------------------------------

/// One committed-offset observation for a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    /// Committed offset position.
    pub offset: i64,

    /// When the commit was observed, in milliseconds since the Unix epoch.
    pub timestamp: i64,

    /// Backlog behind the partition head at this position, as computed by Burrow.
    pub lag: i64,
}

impl Offset {
    /// Returns [`Offset::timestamp`] as a [`Timestamp`], or `None` if it is out of range.
    pub fn observed_at(&self) -> Option<Timestamp> {
        Timestamp::from_millis(self.timestamp)
    }
}

/// Latest head offset of every partition of a topic, indexed by partition number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicOffsets(Vec<i64>);

impl TopicOffsets {
    /// Creates [`TopicOffsets`] from per-partition offsets in partition order.
    pub fn new(offsets: Vec<i64>) -> Self {
        Self(offsets)
    }

    /// Number of partitions reported.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no partitions were reported.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Offset of `partition`, or `None` if the topic has no such partition.
    pub fn get(&self, partition: usize) -> Option<i64> {
        self.0.get(partition).copied()
    }

    /// Iterates offsets in partition order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    /// Returns the offsets as a slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Status evaluation
// ---------------------------------------------------------------------------

/// Burrow's classification of a group or partition.
///
/// Values the service does not document (or adds later) are kept verbatim in
/// [`LagStatus::Other`] so they survive a decode/encode cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LagStatus {
    /// Burrow has no record of the group (`NOTFOUND`).
    NotFound,
    /// Consuming normally (`OK`).
    Ok,
    /// Lag is growing (`WARN`).
    Warning,
    /// Group is in an error state (`ERR`).
    Error,
    /// Commits have stopped (`STOP`).
    Stopped,
    /// Commits continue but the offset does not advance (`STALL`).
    Stalled,
    /// The committed offset moved backwards (`REWIND`).
    Rewind,
    /// Any other value, preserved as sent.
    Other(String),
}

impl LagStatus {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotFound => "NOTFOUND",
            Self::Ok => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
            Self::Stopped => "STOP",
            Self::Stalled => "STALL",
            Self::Rewind => "REWIND",
            Self::Other(s) => s,
        }
    }

    /// Returns `true` only for [`LagStatus::Ok`].
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<String> for LagStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "NOTFOUND" => Self::NotFound,
            "OK" => Self::Ok,
            "WARN" => Self::Warning,
            "ERR" => Self::Error,
            "STOP" => Self::Stopped,
            "STALL" => Self::Stalled,
            "REWIND" => Self::Rewind,
            _ => Self::Other(value),
        }
    }
}

impl From<LagStatus> for String {
    fn from(status: LagStatus) -> Self {
        match status {
            LagStatus::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for LagStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------

/// Evaluation of one partition consumed by a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionStatus {
    /// Topic the partition belongs to.
    pub topic: TopicName,

    /// Partition index within [`PartitionStatus::topic`].
    pub partition: i32,

    /// Classification of this partition.
    pub status: LagStatus,

    /// Oldest offset in Burrow's evaluation window.
    pub start: Offset,

    /// Newest offset in Burrow's evaluation window.
    pub end: Offset,
}

impl PartitionStatus {
    /// Lag at the newest observation in the window.
    pub fn current_lag(&self) -> i64 {
        self.end.lag
    }
}

// ---------------------------------------------------------------------------

/// Evaluation of a whole consumer group: the primary monitoring signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerGroupStatus {
    /// Cluster the group consumes from.
    pub cluster: ClusterName,

    /// The evaluated group.
    pub group: ConsumerGroupName,

    /// Overall classification.
    pub status: LagStatus,

    /// Whether Burrow had a full evaluation window for every partition.
    pub complete: bool,

    /// The partition with the largest lag.
    ///
    /// `None` when the service sends `null`, which it does for a group with no
    /// partitions.
    #[serde(rename = "maxlag", default)]
    pub max_lag: Option<PartitionStatus>,

    /// Every partition evaluated for this group. Empty when absent or `null`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub partitions: Vec<PartitionStatus>,

    /// Sum of lag across [`ConsumerGroupStatus::partitions`].
    pub total_lag: i64,
}

impl ConsumerGroupStatus {
    /// Partitions whose classification is anything other than `OK`.
    pub fn unhealthy_partitions(&self) -> impl Iterator<Item = &PartitionStatus> {
        self.partitions.iter().filter(|p| !p.status.is_healthy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP_STATUS: &str = r#"{
        "cluster": "local",
        "group": "billing",
        "status": "WARN",
        "complete": true,
        "maxlag": {
            "topic": "invoices",
            "partition": 2,
            "status": "WARN",
            "start": {"offset": 100, "timestamp": 1700000000000, "lag": 5},
            "end": {"offset": 120, "timestamp": 1700000060000, "lag": 42}
        },
        "partitions": [
            {
                "topic": "invoices",
                "partition": 0,
                "status": "OK",
                "start": {"offset": 10, "timestamp": 1700000000000, "lag": 0},
                "end": {"offset": 20, "timestamp": 1700000060000, "lag": 0}
            },
            {
                "topic": "invoices",
                "partition": 2,
                "status": "WARN",
                "start": {"offset": 100, "timestamp": 1700000000000, "lag": 5},
                "end": {"offset": 120, "timestamp": 1700000060000, "lag": 42}
            }
        ],
        "total_lag": 42
    }"#;

    #[test]
    fn decodes_consumer_group_status() {
        let status: ConsumerGroupStatus = serde_json::from_str(GROUP_STATUS).unwrap();

        assert_eq!(status.cluster.as_str(), "local");
        assert_eq!(status.group.as_str(), "billing");
        assert_eq!(status.status, LagStatus::Warning);
        assert!(status.complete);
        assert_eq!(status.total_lag, 42);
        assert_eq!(status.partitions.len(), 2);

        let max_lag = status.max_lag.as_ref().unwrap();
        assert_eq!(max_lag.partition, 2);
        assert_eq!(max_lag.current_lag(), 42);

        let unhealthy: Vec<i32> = status.unhealthy_partitions().map(|p| p.partition).collect();
        assert_eq!(unhealthy, vec![2]);
    }

    #[test]
    fn null_max_lag_and_missing_partitions_decode_as_empty() {
        let status: ConsumerGroupStatus = serde_json::from_str(
            r#"{"cluster":"local","group":"idle","status":"NOTFOUND","complete":false,"maxlag":null,"total_lag":0}"#,
        )
        .unwrap();

        assert_eq!(status.status, LagStatus::NotFound);
        assert!(status.max_lag.is_none());
        assert!(status.partitions.is_empty());
    }

    #[test]
    fn null_partitions_decode_as_empty() {
        let status: ConsumerGroupStatus = serde_json::from_str(
            r#"{"cluster":"local","group":"idle","status":"OK","complete":true,"maxlag":null,"partitions":null,"total_lag":0}"#,
        )
        .unwrap();

        assert!(status.partitions.is_empty());
        assert_eq!(status.unhealthy_partitions().count(), 0);
    }

    #[test]
    fn null_host_lists_decode_as_empty() {
        let cluster: Cluster = serde_json::from_str(
            r#"{"brokers":["kafka01"],"zookeepers":null,"broker_port":9092,"zookeeper_port":2181,"offsets_topic":"__consumer_offsets"}"#,
        )
        .unwrap();

        assert_eq!(cluster.brokers, vec!["kafka01".to_owned()]);
        assert!(cluster.zookeepers.is_empty());
    }

    #[test]
    fn unknown_status_is_preserved_verbatim() {
        let status: LagStatus = serde_json::from_str(r#""PAUSED""#).unwrap();
        assert_eq!(status, LagStatus::Other("PAUSED".to_owned()));
        assert!(!status.is_healthy());
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""PAUSED""#);
    }

    #[test]
    fn known_statuses_map_to_variants() {
        for (wire, expected) in [
            ("OK", LagStatus::Ok),
            ("WARN", LagStatus::Warning),
            ("ERR", LagStatus::Error),
            ("STOP", LagStatus::Stopped),
            ("STALL", LagStatus::Stalled),
            ("REWIND", LagStatus::Rewind),
        ] {
            let status = LagStatus::from(wire.to_owned());
            assert_eq!(status, expected);
            assert_eq!(status.to_string(), wire);
        }
        assert!(LagStatus::Ok.is_healthy());
    }

    #[test]
    fn decodes_cluster() {
        let cluster: Cluster = serde_json::from_str(
            r#"{
                "brokers": ["kafka01.example.com", "kafka02.example.com"],
                "zookeepers": ["zk01.example.com"],
                "broker_port": 9092,
                "zookeeper_port": 2181,
                "offsets_topic": "__consumer_offsets"
            }"#,
        )
        .unwrap();

        assert_eq!(cluster.brokers.len(), 2);
        assert_eq!(cluster.broker_port, 9092);
        assert_eq!(cluster.zookeeper_port, 2181);
        assert_eq!(cluster.offsets_topic.as_str(), "__consumer_offsets");
    }

    #[test]
    fn offset_timestamp_converts_to_utc() {
        let offset = Offset {
            offset: 1,
            timestamp: 1_700_000_000_000,
            lag: 0,
        };
        let observed = offset.observed_at().unwrap();
        assert_eq!(observed.to_string(), "2023-11-14T22:13:20+00:00");

        let out_of_range = Offset {
            offset: 1,
            timestamp: i64::MAX,
            lag: 0,
        };
        assert!(out_of_range.observed_at().is_none());
    }

    #[test]
    fn topic_offsets_index_by_partition() {
        let offsets: TopicOffsets = serde_json::from_str("[5, 7, 9]").unwrap();
        assert_eq!(offsets.len(), 3);
        assert_eq!(offsets.get(1), Some(7));
        assert_eq!(offsets.get(3), None);
        assert_eq!(offsets.iter().sum::<i64>(), 21);
    }
}
