//! The response envelope every Burrow endpoint wraps its payload in.
//!
//! A body looks like `{"error": false, "message": "...", "<key>": <payload>}`.
//! The `error` flag is independent of the HTTP status: a logical failure such
//! as an unknown cluster can arrive with any status code.
//!
//! [`Envelope::from_slice`] reads the flag first and decodes the payload only
//! when the flag is clear, so a failed response never produces a payload value
//! and a missing or malformed payload on a failed response is not a decode
//! error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::wire::null_as_default;
use crate::ApiError;

/// The fields every response carries.
///
/// Both default when absent or `null`, matching how the service omits them on
/// some endpoints and how Go encodes zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeHeader {
    /// `true` when the request failed at the domain level.
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: bool,

    /// Human-readable detail. Only meaningful when `error` is `true`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

/// A decoded response: either the payload or the service's error message.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<P> {
    /// `error` was `false`; the payload decoded as `P`.
    Payload(P),
    /// `error` was `true`; only the message is available.
    LogicalError {
        /// The envelope's `message`, verbatim.
        message: String,
    },
}

impl<P: DeserializeOwned> Envelope<P> {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the body is not JSON, or if `error` is
    /// `false` and the payload does not match `P`.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        let header = EnvelopeHeader::deserialize(&value)?;
        if header.error {
            return Ok(Self::LogicalError {
                message: header.message,
            });
        }
        P::deserialize(value).map(Self::Payload)
    }
}

impl<P> Envelope<P> {
    /// Converts into the payload, or [`ApiError::RemoteLogical`] for `endpoint`.
    pub fn into_result(self, endpoint: impl Into<String>) -> Result<P, ApiError> {
        match self {
            Self::Payload(payload) => Ok(payload),
            Self::LogicalError { message } => Err(ApiError::RemoteLogical {
                endpoint: endpoint.into(),
                message,
            }),
        }
    }
}
