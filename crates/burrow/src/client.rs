//! [`BurrowClient`]: the HTTP implementation of [`LagMonitor`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, instrument, warn};
use url::Url;

use monitor::{
    ApiError, Cluster, ClusterName, ConsumerGroupName, ConsumerGroupStatus, Envelope, LagMonitor,
    TopicName, TopicOffsets,
};

use crate::endpoint::{BaseUrl, Endpoint};
use crate::responses::{
    ClusterDetail, ClusterList, ConsumerGroupList, GroupStatus, OffsetList, TopicList,
};

/// Per-request timeout applied by [`BurrowClient::new`].
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for one Burrow instance.
///
/// Cheap to clone: clones share the connection pool. Holds no per-call state,
/// so one instance may serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct BurrowClient {
    base: BaseUrl,
    http: reqwest::Client,
}

impl BurrowClient {
    /// Creates a client for the service at `base_url` with a
    /// [`DEFAULT_REQUEST_TIMEOUT`] per request.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UrlConstruction`] if `base_url` is not an absolute
    ///   `http`/`https` URL.
    /// - [`ApiError::Transport`] if the HTTP transport cannot be initialised.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base = BaseUrl::parse(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::transport(base_url, e))?;
        Ok(Self { base, http })
    }

    /// Creates a client that sends its requests through `http`.
    ///
    /// Use this to supply TLS settings, default headers, or a different
    /// timeout. The client adds no configuration of its own.
    ///
    /// # Errors
    ///
    /// [`ApiError::UrlConstruction`] if `base_url` is not an absolute
    /// `http`/`https` URL.
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Result<Self, ApiError> {
        let base = BaseUrl::parse(base_url)?;
        Ok(Self { base, http })
    }

    /// The validated base address.
    pub fn base_url(&self) -> &Url {
        self.base.as_url()
    }

    /// Absolute URL of `endpoint` under the base address.
    pub fn url_for(&self, endpoint: &Endpoint<'_>) -> Url {
        self.base.join(&endpoint.path())
    }

    async fn send(&self, method: Method, url: &Url) -> Result<reqwest::Response, ApiError> {
        self.http
            .request(method, url.clone())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, endpoint = %url, "error making request");
                ApiError::transport(url.as_str(), e)
            })
    }

    /// Requests `endpoint` and decodes its envelope, returning the payload.
    ///
    /// The HTTP status is not inspected: Burrow reports failures such as an
    /// unknown cluster through the envelope, whatever the status code. The
    /// body is read to the end before decoding.
    async fn fetch<P: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: Endpoint<'_>,
    ) -> Result<P, ApiError> {
        let url = self.url_for(&endpoint);
        debug!(resource = endpoint.name(), %method, endpoint = %url, "sending request");

        let response = self.send(method, &url).await?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, endpoint = %url, "error reading response body");
            ApiError::transport(url.as_str(), e)
        })?;

        let envelope = Envelope::<P>::from_slice(&body).map_err(|source| {
            warn!(error = %source, endpoint = %url, %status, "error decoding json");
            ApiError::Decode {
                endpoint: url.to_string(),
                source,
            }
        })?;

        envelope.into_result(url.as_str()).inspect_err(|e| {
            warn!(
                remote_message = e.remote_message().unwrap_or_default(),
                endpoint = %url,
                %status,
                "service reported an error"
            );
        })
    }

    async fn get<P: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<P, ApiError> {
        self.fetch(Method::GET, endpoint).await
    }
}

#[async_trait]
impl LagMonitor for BurrowClient {
    #[instrument(skip_all)]
    async fn health_check(&self) -> Result<bool, ApiError> {
        let url = self.url_for(&Endpoint::Health);
        debug!(endpoint = %url, "checking health");
        self.send(Method::GET, &url).await?;
        Ok(true)
    }

    #[instrument(skip_all)]
    async fn list_clusters(&self) -> Result<Vec<ClusterName>, ApiError> {
        let list: ClusterList = self.get(Endpoint::Clusters).await?;
        Ok(list.clusters)
    }

    #[instrument(skip_all, fields(%cluster))]
    async fn cluster_details(&self, cluster: &ClusterName) -> Result<Cluster, ApiError> {
        let detail: ClusterDetail = self.get(Endpoint::Cluster { cluster }).await?;
        Ok(detail.cluster)
    }

    #[instrument(skip_all, fields(%cluster))]
    async fn list_consumer_groups(
        &self,
        cluster: &ClusterName,
    ) -> Result<Vec<ConsumerGroupName>, ApiError> {
        let list: ConsumerGroupList = self.get(Endpoint::ConsumerGroups { cluster }).await?;
        Ok(list.consumers)
    }

    #[instrument(skip_all, fields(%cluster, %group))]
    async fn list_consumer_group_topics(
        &self,
        cluster: &ClusterName,
        group: &ConsumerGroupName,
    ) -> Result<Vec<TopicName>, ApiError> {
        let list: TopicList = self
            .get(Endpoint::ConsumerGroupTopics { cluster, group })
            .await?;
        Ok(list.topics)
    }

    #[instrument(skip_all, fields(%cluster, %group, %topic))]
    async fn consumer_group_topic_details(
        &self,
        cluster: &ClusterName,
        group: &ConsumerGroupName,
        topic: &TopicName,
    ) -> Result<TopicOffsets, ApiError> {
        let list: OffsetList = self
            .get(Endpoint::ConsumerGroupTopic {
                cluster,
                group,
                topic,
            })
            .await?;
        Ok(list.offsets)
    }

    #[instrument(skip_all, fields(%cluster, %group))]
    async fn consumer_group_status(
        &self,
        cluster: &ClusterName,
        group: &ConsumerGroupName,
    ) -> Result<ConsumerGroupStatus, ApiError> {
        let status: GroupStatus = self
            .get(Endpoint::ConsumerGroupStatus { cluster, group })
            .await?;
        Ok(status.status)
    }

    #[instrument(skip_all, fields(%cluster, %group))]
    async fn consumer_group_lag(
        &self,
        cluster: &ClusterName,
        group: &ConsumerGroupName,
    ) -> Result<ConsumerGroupStatus, ApiError> {
        let status: GroupStatus = self
            .get(Endpoint::ConsumerGroupLag { cluster, group })
            .await?;
        Ok(status.status)
    }

    #[instrument(skip_all, fields(%cluster))]
    async fn list_cluster_topics(
        &self,
        cluster: &ClusterName,
    ) -> Result<Vec<TopicName>, ApiError> {
        let list: TopicList = self.get(Endpoint::ClusterTopics { cluster }).await?;
        Ok(list.topics)
    }

    #[instrument(skip_all, fields(%cluster, %topic))]
    async fn cluster_topic_details(
        &self,
        cluster: &ClusterName,
        topic: &TopicName,
    ) -> Result<TopicOffsets, ApiError> {
        let list: OffsetList = self.get(Endpoint::ClusterTopic { cluster, topic }).await?;
        Ok(list.offsets)
    }

    #[instrument(skip_all, fields(%cluster, %group))]
    async fn remove_consumer_group(
        &self,
        cluster: &ClusterName,
        group: &ConsumerGroupName,
    ) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .fetch(Method::DELETE, Endpoint::ConsumerGroup { cluster, group })
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use monitor::RetryPolicy;

    #[test]
    fn url_for_uses_the_configured_prefix() {
        let client = BurrowClient::new("http://burrow.internal:8000/monitoring/").unwrap();
        let cluster = ClusterName::new("local").unwrap();
        let group = ConsumerGroupName::new("billing").unwrap();

        let url = client.url_for(&Endpoint::ConsumerGroupLag {
            cluster: &cluster,
            group: &group,
        });
        assert_eq!(
            url.as_str(),
            "http://burrow.internal:8000/monitoring/v2/kafka/local/consumer/billing/lag"
        );
    }

    #[test]
    fn construction_rejects_malformed_base() {
        let err = BurrowClient::new("burrow.internal:8000").unwrap_err();
        assert!(matches!(err, ApiError::UrlConstruction { .. }));

        let err =
            BurrowClient::with_http_client("not a url", reqwest::Client::new()).unwrap_err();
        assert!(matches!(err, ApiError::UrlConstruction { .. }));
    }

    /// Serves the cluster list after `delay` and returns the base URL.
    async fn slow_burrow(delay: Duration) -> String {
        use axum::routing::get;

        let router = axum::Router::new().route(
            "/v2/kafka",
            get(move || async move {
                tokio::time::sleep(delay).await;
                r#"{"error":false,"message":"cluster list returned","clusters":["local"]}"#
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let addr = listener.local_addr().expect("Stub listener has no address");
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Stub server failed");
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn configured_timeout_bounds_each_request() {
        let base = slow_burrow(Duration::from_millis(500)).await;

        let impatient = BurrowClient::with_timeout(&base, Duration::from_millis(100)).unwrap();
        let err = impatient.list_clusters().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }), "{err:?}");
        assert!(matches!(err.retry_policy(), RetryPolicy::Retryable { .. }));
    }

    #[tokio::test]
    async fn default_timeout_outlasts_a_slow_response() {
        let base = slow_burrow(Duration::from_millis(500)).await;

        let client = BurrowClient::new(&base).unwrap();
        let clusters = client.list_clusters().await.unwrap();
        assert_eq!(clusters, vec![ClusterName::new("local").unwrap()]);
    }

    #[test]
    fn client_is_shareable_across_tasks() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<BurrowClient>();
    }
}
