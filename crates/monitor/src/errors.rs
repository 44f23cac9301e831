//! Error and retry-policy types shared by every [`crate::LagMonitor`] implementation.
//!
//! [`ApiError`] has exactly one variant per failure channel. Transport and
//! decode failures come from the HTTP exchange itself; a remote logical error
//! arrives inside an otherwise successful response. They are never folded
//! into one another, so callers can branch on the kind without parsing text.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed error used for transport causes, keeping this crate free of I/O dependencies.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ---------------------------------------------------------------------------
// Retry semantics
// ---------------------------------------------------------------------------

/// Whether an error condition is safe to retry and, if so, after what delay.
///
/// The client never retries on its own. This is advice to the caller, which
/// owns the retry loop (for example, the next poll of an exporter).
///
/// - `Retryable`: the request did not complete (timeout, refused connection).
/// - `NonRetryable`: bad configuration, protocol mismatch, or a failure the
///   service reported about the request itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RetryPolicy {
    /// The operation may be retried.
    Retryable {
        /// Minimum back-off before the next attempt. `None` means retry
        /// immediately or apply the caller's own back-off schedule.
        after: Option<Duration>,
    },
    /// Repeating the same request will fail the same way.
    NonRetryable,
}

// ---------------------------------------------------------------------------
// Client errors
// ---------------------------------------------------------------------------

/// Failure of a single lag-monitoring API operation.
///
/// `endpoint` is always the full request URL, so the identifiers used in the
/// request (cluster, group, topic) are part of the diagnostic.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base address is not an absolute URL that can carry a path.
    ///
    /// Produced at client construction; no request is ever attempted with it.
    #[error("invalid base address '{base_url}': {reason}")]
    UrlConstruction {
        /// The base address as configured.
        base_url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP exchange did not complete: connection refused, DNS failure,
    /// timeout, or the response body could not be read.
    #[error("request to {endpoint} failed")]
    Transport {
        /// Request URL.
        endpoint: String,
        /// Underlying transport failure.
        #[source]
        source: BoxError,
    },

    /// The response body is not JSON or does not have the expected shape.
    #[error("could not decode response from {endpoint}")]
    Decode {
        /// Request URL.
        endpoint: String,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },

    /// The service answered but set `error: true` in the response envelope.
    #[error("{endpoint} reported an error: {message}")]
    RemoteLogical {
        /// Request URL.
        endpoint: String,
        /// The envelope's `message`, verbatim.
        message: String,
    },
}

impl ApiError {
    /// Builds a [`ApiError::Transport`] from any transport error type.
    pub fn transport(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// Returns whether the caller may retry the failed operation.
    pub fn retry_policy(&self) -> RetryPolicy {
        match self {
            Self::Transport { .. } => RetryPolicy::Retryable { after: None },
            Self::UrlConstruction { .. } | Self::Decode { .. } | Self::RemoteLogical { .. } => {
                RetryPolicy::NonRetryable
            }
        }
    }

    /// Request URL of the failed operation, if one was built.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::UrlConstruction { .. } => None,
            Self::Transport { endpoint, .. }
            | Self::Decode { endpoint, .. }
            | Self::RemoteLogical { endpoint, .. } => Some(endpoint),
        }
    }

    /// The service's message for a [`ApiError::RemoteLogical`] failure.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::RemoteLogical { message, .. } => Some(message),
            _ => None,
        }
    }
}
