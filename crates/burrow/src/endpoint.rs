//! Endpoint table and URL construction.
//!
//! [`Endpoint`] is the closed set of resources the client talks to. Each
//! variant carries the identifiers its path needs; [`BaseUrl::join`] turns the
//! rendered path into an absolute URL under the configured base address.

use monitor::{ApiError, ClusterName, ConsumerGroupName, TopicName};
use url::Url;

/// Health endpoint, outside the versioned API.
const ADMIN_PATH: &str = "/burrow/admin";

/// Prefix of every versioned Kafka endpoint.
const KAFKA_PATH: &str = "/v2/kafka";

// ---------------------------------------------------------------------------
// Endpoint table
// ---------------------------------------------------------------------------

/// One Burrow resource, with the identifiers that address it.
///
/// Identifiers are substituted into the path verbatim. An identifier that
/// contains `/` therefore addresses a different resource; callers must pass
/// values that are single path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `GET /burrow/admin`
    Health,
    /// `GET /v2/kafka`
    Clusters,
    /// `GET /v2/kafka/{cluster}`
    Cluster { cluster: &'a ClusterName },
    /// `GET /v2/kafka/{cluster}/consumer`
    ConsumerGroups { cluster: &'a ClusterName },
    /// `DELETE /v2/kafka/{cluster}/consumer/{group}`
    ConsumerGroup {
        cluster: &'a ClusterName,
        group: &'a ConsumerGroupName,
    },
    /// `GET /v2/kafka/{cluster}/consumer/{group}/topic`
    ConsumerGroupTopics {
        cluster: &'a ClusterName,
        group: &'a ConsumerGroupName,
    },
    /// `GET /v2/kafka/{cluster}/consumer/{group}/topic/{topic}`
    ConsumerGroupTopic {
        cluster: &'a ClusterName,
        group: &'a ConsumerGroupName,
        topic: &'a TopicName,
    },
    /// `GET /v2/kafka/{cluster}/consumer/{group}/status`
    ConsumerGroupStatus {
        cluster: &'a ClusterName,
        group: &'a ConsumerGroupName,
    },
    /// `GET /v2/kafka/{cluster}/consumer/{group}/lag`
    ConsumerGroupLag {
        cluster: &'a ClusterName,
        group: &'a ConsumerGroupName,
    },
    /// `GET /v2/kafka/{cluster}/topic`
    ClusterTopics { cluster: &'a ClusterName },
    /// `GET /v2/kafka/{cluster}/topic/{topic}`
    ClusterTopic {
        cluster: &'a ClusterName,
        topic: &'a TopicName,
    },
}

impl Endpoint<'_> {
    /// Path relative to the base address.
    pub fn path(&self) -> String {
        match self {
            Self::Health => ADMIN_PATH.to_owned(),
            Self::Clusters => KAFKA_PATH.to_owned(),
            Self::Cluster { cluster } => format!("{KAFKA_PATH}/{cluster}"),
            Self::ConsumerGroups { cluster } => format!("{KAFKA_PATH}/{cluster}/consumer"),
            Self::ConsumerGroup { cluster, group } => {
                format!("{KAFKA_PATH}/{cluster}/consumer/{group}")
            }
            Self::ConsumerGroupTopics { cluster, group } => {
                format!("{KAFKA_PATH}/{cluster}/consumer/{group}/topic")
            }
            Self::ConsumerGroupTopic {
                cluster,
                group,
                topic,
            } => format!("{KAFKA_PATH}/{cluster}/consumer/{group}/topic/{topic}"),
            Self::ConsumerGroupStatus { cluster, group } => {
                format!("{KAFKA_PATH}/{cluster}/consumer/{group}/status")
            }
            Self::ConsumerGroupLag { cluster, group } => {
                format!("{KAFKA_PATH}/{cluster}/consumer/{group}/lag")
            }
            Self::ClusterTopics { cluster } => format!("{KAFKA_PATH}/{cluster}/topic"),
            Self::ClusterTopic { cluster, topic } => {
                format!("{KAFKA_PATH}/{cluster}/topic/{topic}")
            }
        }
    }

    /// Short name of the resource, used as a log field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Clusters => "clusters",
            Self::Cluster { .. } => "cluster",
            Self::ConsumerGroups { .. } => "consumer_groups",
            Self::ConsumerGroup { .. } => "consumer_group",
            Self::ConsumerGroupTopics { .. } => "consumer_group_topics",
            Self::ConsumerGroupTopic { .. } => "consumer_group_topic",
            Self::ConsumerGroupStatus { .. } => "consumer_group_status",
            Self::ConsumerGroupLag { .. } => "consumer_group_lag",
            Self::ClusterTopics { .. } => "cluster_topics",
            Self::ClusterTopic { .. } => "cluster_topic",
        }
    }
}

// ---------------------------------------------------------------------------
// Base address
// ---------------------------------------------------------------------------

/// A validated base address that endpoint paths are joined onto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Parses and validates `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UrlConstruction`] if `base_url` is not an absolute
    /// `http` or `https` URL.
    pub fn parse(base_url: &str) -> Result<Self, ApiError> {
        let rejected = |reason: String| ApiError::UrlConstruction {
            base_url: base_url.to_owned(),
            reason,
        };

        let url = Url::parse(base_url).map_err(|e| rejected(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(rejected("address cannot carry a path".to_owned()));
        }
        if !matches!(url.scheme(), "http" | "https") {
            return Err(rejected(format!("unsupported scheme '{}'", url.scheme())));
        }
        Ok(Self(url))
    }

    /// Returns the parsed address.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Appends `relative` to the base path. Query and fragment are kept.
    pub fn join(&self, relative: &str) -> Url {
        let mut url = self.0.clone();
        let path = join_path(self.0.path(), relative);
        url.set_path(&path);
        url
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lexical path join: empty and `.` segments are dropped, `..` removes the
/// previous segment. The result is absolute with no trailing slash.
fn join_path(base: &str, relative: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(relative.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(name: &str) -> ClusterName {
        ClusterName::new(name).unwrap()
    }

    #[test]
    fn joins_onto_base_prefix_without_double_slashes() {
        let base = BaseUrl::parse("http://host:8000/prefix").unwrap();
        assert_eq!(
            base.join("/kafka/clusterA").as_str(),
            "http://host:8000/prefix/kafka/clusterA"
        );

        let trailing = BaseUrl::parse("http://host:8000/prefix/").unwrap();
        assert_eq!(
            trailing.join("/kafka/clusterA").as_str(),
            "http://host:8000/prefix/kafka/clusterA"
        );
    }

    #[test]
    fn root_base_yields_endpoint_path() {
        let base = BaseUrl::parse("http://burrow.internal:8000").unwrap();
        assert_eq!(
            base.join(&Endpoint::Clusters.path()).as_str(),
            "http://burrow.internal:8000/v2/kafka"
        );
    }

    #[test]
    fn query_and_fragment_are_preserved() {
        let base = BaseUrl::parse("https://host/prefix?token=abc#frag").unwrap();
        assert_eq!(
            base.join("/kafka/clusterA").as_str(),
            "https://host/prefix/kafka/clusterA?token=abc#frag"
        );
    }

    #[test]
    fn malformed_base_is_rejected() {
        for bad in ["not a url", "", "/relative/path", "host:8000"] {
            let err = BaseUrl::parse(bad).unwrap_err();
            assert!(
                matches!(err, ApiError::UrlConstruction { ref base_url, .. } if base_url == bad),
                "{bad:?} was accepted"
            );
        }
    }

    #[test]
    fn non_http_base_is_rejected() {
        assert!(BaseUrl::parse("mailto:ops@example.com").is_err());
        assert!(BaseUrl::parse("ftp://files.example.com/").is_err());
    }

    #[test]
    fn join_path_normalises_segments() {
        assert_eq!(join_path("/", "/v2/kafka"), "/v2/kafka");
        assert_eq!(join_path("/a//b/", "./c/"), "/a/b/c");
        assert_eq!(join_path("/a/b", "../c"), "/a/c");
        assert_eq!(join_path("", ""), "/");
    }

    #[test]
    fn endpoint_paths_follow_the_api_layout() {
        let c = cluster("local");
        let g = ConsumerGroupName::new("billing").unwrap();
        let t = TopicName::new("invoices").unwrap();

        let cases = [
            (Endpoint::Health, "/burrow/admin"),
            (Endpoint::Clusters, "/v2/kafka"),
            (Endpoint::Cluster { cluster: &c }, "/v2/kafka/local"),
            (
                Endpoint::ConsumerGroups { cluster: &c },
                "/v2/kafka/local/consumer",
            ),
            (
                Endpoint::ConsumerGroup {
                    cluster: &c,
                    group: &g,
                },
                "/v2/kafka/local/consumer/billing",
            ),
            (
                Endpoint::ConsumerGroupTopics {
                    cluster: &c,
                    group: &g,
                },
                "/v2/kafka/local/consumer/billing/topic",
            ),
            (
                Endpoint::ConsumerGroupTopic {
                    cluster: &c,
                    group: &g,
                    topic: &t,
                },
                "/v2/kafka/local/consumer/billing/topic/invoices",
            ),
            (
                Endpoint::ConsumerGroupStatus {
                    cluster: &c,
                    group: &g,
                },
                "/v2/kafka/local/consumer/billing/status",
            ),
            (
                Endpoint::ConsumerGroupLag {
                    cluster: &c,
                    group: &g,
                },
                "/v2/kafka/local/consumer/billing/lag",
            ),
            (
                Endpoint::ClusterTopics { cluster: &c },
                "/v2/kafka/local/topic",
            ),
            (
                Endpoint::ClusterTopic {
                    cluster: &c,
                    topic: &t,
                },
                "/v2/kafka/local/topic/invoices",
            ),
        ];

        for (endpoint, expected) in cases {
            assert_eq!(endpoint.path(), expected, "{}", endpoint.name());
        }
    }
}
