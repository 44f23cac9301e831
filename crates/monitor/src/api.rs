//! The [`LagMonitor`] port: one method per lag-monitoring endpoint.
//!
//! Implementations perform exactly one request per call, never retry, and
//! keep no state between calls. Every method returns either the complete
//! payload or exactly one [`ApiError`].

use async_trait::async_trait;

use crate::{
    ApiError, Cluster, ClusterName, ConsumerGroupName, ConsumerGroupStatus, TopicName,
    TopicOffsets,
};

/// Read (and one administrative write) access to a lag-monitoring service.
#[async_trait]
pub trait LagMonitor: Send + Sync {
    /// Returns `true` once the service answers its admin endpoint.
    ///
    /// Any completed response counts as healthy; the body is not inspected.
    async fn health_check(&self) -> Result<bool, ApiError>;

    /// Names of every cluster the service monitors.
    async fn list_clusters(&self) -> Result<Vec<ClusterName>, ApiError>;

    /// Connection details for `cluster`.
    async fn cluster_details(&self, cluster: &ClusterName) -> Result<Cluster, ApiError>;

    /// Consumer groups known in `cluster`.
    async fn list_consumer_groups(
        &self,
        cluster: &ClusterName,
    ) -> Result<Vec<ConsumerGroupName>, ApiError>;

    /// Topics `group` has committed offsets for.
    async fn list_consumer_group_topics(
        &self,
        cluster: &ClusterName,
        group: &ConsumerGroupName,
    ) -> Result<Vec<TopicName>, ApiError>;

    /// `group`'s committed offset on each partition of `topic`.
    async fn consumer_group_topic_details(
        &self,
        cluster: &ClusterName,
        group: &ConsumerGroupName,
        topic: &TopicName,
    ) -> Result<TopicOffsets, ApiError>;

    /// Burrow's evaluation of `group`.
    async fn consumer_group_status(
        &self,
        cluster: &ClusterName,
        group: &ConsumerGroupName,
    ) -> Result<ConsumerGroupStatus, ApiError>;

    /// Burrow's lag-focused evaluation of `group`.
    ///
    /// Same shape as [`LagMonitor::consumer_group_status`] but a distinct
    /// endpoint; the two are not assumed to return identical data.
    async fn consumer_group_lag(
        &self,
        cluster: &ClusterName,
        group: &ConsumerGroupName,
    ) -> Result<ConsumerGroupStatus, ApiError>;

    /// Topics present in `cluster`.
    async fn list_cluster_topics(&self, cluster: &ClusterName)
        -> Result<Vec<TopicName>, ApiError>;

    /// Head offset of each partition of `topic`.
    async fn cluster_topic_details(
        &self,
        cluster: &ClusterName,
        topic: &TopicName,
    ) -> Result<TopicOffsets, ApiError>;

    /// Drops `group` from the service's tracking until it commits again.
    async fn remove_consumer_group(
        &self,
        cluster: &ClusterName,
        group: &ConsumerGroupName,
    ) -> Result<(), ApiError>;
}
