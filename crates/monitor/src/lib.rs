//! Domain model for the Burrow lag-monitoring API.
//!
//! This crate contains every identifier, response type, and error type a
//! caller sees, plus the [`LagMonitor`] port trait. The HTTP implementation
//! lives in the `burrow` crate; callers that only consume results depend on
//! this crate alone.
//!
//! ## Architectural Layer
//!
//! **Domain + port definitions.** This crate has no I/O dependencies.
//! It defines *what* a lag-monitoring client provides; infrastructure crates
//! define *how*.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype names (`ClusterName`, `ConsumerGroupName`, `TopicName`) |
//! | [`types`] | Snapshot types (`Cluster`, `ConsumerGroupStatus`, `Offset`, etc.) |
//! | [`envelope`] | The `{error, message, payload}` response wrapper |
//! | [`errors`] | [`ApiError`] and [`RetryPolicy`] |
//! | [`api`] | The [`LagMonitor`] trait |
//! | [`wire`] | Null-tolerant field decoding shared with adapters |

pub mod api;
pub mod envelope;
pub mod errors;
pub mod identifiers;
pub mod types;
pub mod wire;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use api::LagMonitor;
pub use envelope::{Envelope, EnvelopeHeader};
pub use errors::{ApiError, BoxError, RetryPolicy};
pub use identifiers::{ClusterName, ConsumerGroupName, EmptyIdentifier, TopicName};
pub use types::{
    Cluster, ConsumerGroupStatus, LagStatus, Offset, PartitionStatus, Timestamp, TopicOffsets,
};
