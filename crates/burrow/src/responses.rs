//! Payload shapes, one per response key.
//!
//! Each struct names the single field an endpoint adds next to the envelope's
//! `error` and `message`. Unknown keys are ignored. A list sent as `null`
//! reads as empty, but a missing list key is still a decode error.

use serde::Deserialize;

use monitor::wire::null_as_default;
use monitor::{Cluster, ClusterName, ConsumerGroupName, ConsumerGroupStatus, TopicName, TopicOffsets};

#[derive(Debug, Deserialize)]
pub(crate) struct ClusterList {
    #[serde(deserialize_with = "null_as_default")]
    pub clusters: Vec<ClusterName>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClusterDetail {
    pub cluster: Cluster,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConsumerGroupList {
    #[serde(deserialize_with = "null_as_default")]
    pub consumers: Vec<ConsumerGroupName>,
}

/// Shared by the consumer-group and cluster topic listings.
#[derive(Debug, Deserialize)]
pub(crate) struct TopicList {
    #[serde(deserialize_with = "null_as_default")]
    pub topics: Vec<TopicName>,
}

/// Shared by the consumer-group and cluster topic detail endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct OffsetList {
    #[serde(deserialize_with = "null_as_default")]
    pub offsets: TopicOffsets,
}

/// Shared by the status and lag endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct GroupStatus {
    pub status: ConsumerGroupStatus,
}
