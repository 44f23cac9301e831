//! Dispatch of a parsed [`Command`] onto a [`LagMonitor`].

use anyhow::Result;
use monitor::LagMonitor;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::Command;

/// Runs `command` against `monitor` and returns the result as JSON.
///
/// Failures keep their [`monitor::ApiError`] so callers can downcast to
/// inspect the kind.
pub async fn execute(command: &Command, monitor: &dyn LagMonitor) -> Result<Value> {
    match command {
        Command::Health => Ok(json!({ "healthy": monitor.health_check().await? })),
        Command::Clusters => to_json(monitor.list_clusters().await?),
        Command::Cluster { cluster } => to_json(monitor.cluster_details(cluster).await?),
        Command::Consumers { cluster } => to_json(monitor.list_consumer_groups(cluster).await?),
        Command::ConsumerTopics { cluster, group } => {
            to_json(monitor.list_consumer_group_topics(cluster, group).await?)
        }
        Command::ConsumerTopic {
            cluster,
            group,
            topic,
        } => to_json(
            monitor
                .consumer_group_topic_details(cluster, group, topic)
                .await?,
        ),
        Command::Status { cluster, group } => {
            to_json(monitor.consumer_group_status(cluster, group).await?)
        }
        Command::Lag { cluster, group } => {
            to_json(monitor.consumer_group_lag(cluster, group).await?)
        }
        Command::Topics { cluster } => to_json(monitor.list_cluster_topics(cluster).await?),
        Command::Topic { cluster, topic } => {
            to_json(monitor.cluster_topic_details(cluster, topic).await?)
        }
        Command::RemoveConsumer { cluster, group } => {
            monitor.remove_consumer_group(cluster, group).await?;
            Ok(json!({ "removed": { "cluster": cluster, "group": group } }))
        }
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
