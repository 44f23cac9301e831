//! Command-line and environment configuration.

use clap::{Parser, Subcommand, ValueEnum};
use monitor::{ClusterName, ConsumerGroupName, TopicName};

/// Query a Burrow lag-monitoring service and print the result as JSON.
#[derive(Debug, Parser)]
#[command(name = "burrow-cli", version)]
pub struct CliConfig {
    /// Base address of the Burrow HTTP API.
    #[arg(long, env = "BURROW_BASE_URL", default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Format of log lines written to stderr.
    #[arg(long, env = "BURROW_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// OTLP gRPC endpoint to export traces to. Tracing export is off when unset.
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}

/// One subcommand per Burrow endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Check that the service answers.
    Health,
    /// List monitored clusters.
    Clusters,
    /// Show connection details of a cluster.
    Cluster {
        #[arg(value_parser = cluster_name)]
        cluster: ClusterName,
    },
    /// List consumer groups in a cluster.
    Consumers {
        #[arg(value_parser = cluster_name)]
        cluster: ClusterName,
    },
    /// List topics a consumer group commits offsets for.
    ConsumerTopics {
        #[arg(value_parser = cluster_name)]
        cluster: ClusterName,
        #[arg(value_parser = group_name)]
        group: ConsumerGroupName,
    },
    /// Show a consumer group's committed offsets on one topic.
    ConsumerTopic {
        #[arg(value_parser = cluster_name)]
        cluster: ClusterName,
        #[arg(value_parser = group_name)]
        group: ConsumerGroupName,
        #[arg(value_parser = topic_name)]
        topic: TopicName,
    },
    /// Show a consumer group's status evaluation.
    Status {
        #[arg(value_parser = cluster_name)]
        cluster: ClusterName,
        #[arg(value_parser = group_name)]
        group: ConsumerGroupName,
    },
    /// Show a consumer group's lag evaluation.
    Lag {
        #[arg(value_parser = cluster_name)]
        cluster: ClusterName,
        #[arg(value_parser = group_name)]
        group: ConsumerGroupName,
    },
    /// List topics in a cluster.
    Topics {
        #[arg(value_parser = cluster_name)]
        cluster: ClusterName,
    },
    /// Show head offsets of a topic.
    Topic {
        #[arg(value_parser = cluster_name)]
        cluster: ClusterName,
        #[arg(value_parser = topic_name)]
        topic: TopicName,
    },
    /// Stop tracking a consumer group until it commits again.
    RemoveConsumer {
        #[arg(value_parser = cluster_name)]
        cluster: ClusterName,
        #[arg(value_parser = group_name)]
        group: ConsumerGroupName,
    },
}

fn cluster_name(value: &str) -> Result<ClusterName, String> {
    ClusterName::new(value).ok_or_else(|| "cluster name must not be empty".to_owned())
}

fn group_name(value: &str) -> Result<ConsumerGroupName, String> {
    ConsumerGroupName::new(value).ok_or_else(|| "consumer group must not be empty".to_owned())
}

fn topic_name(value: &str) -> Result<TopicName, String> {
    TopicName::new(value).ok_or_else(|| "topic must not be empty".to_owned())
}
