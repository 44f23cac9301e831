//! Burrow HTTP client adapter.
//!
//! Implements the [`monitor::LagMonitor`] trait over Burrow's JSON-over-HTTP
//! API. Callers that only need results should program against the trait and
//! construct a [`BurrowClient`] at their composition root.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** URL construction, the HTTP transport, and response
//! decoding live here. The [`monitor`] crate sees only
//! [`monitor::LagMonitor`] and [`monitor::ApiError`].
//!
//! ## Request flow
//!
//! Every operation is the same round trip, parameterised by an [`Endpoint`]
//! and a payload type:
//!
//! 1. Render the endpoint path and join it onto the base address.
//! 2. Send one request (no retry) with the client-wide timeout.
//! 3. Read the whole body and decode the `{error, message, ...}` envelope.
//! 4. Return the payload, or [`monitor::ApiError::RemoteLogical`] when the
//!    envelope's `error` flag is set.
//!
//! The health check stops after step 2: any completed response is healthy.

mod client;
mod endpoint;
mod responses;

pub use client::{BurrowClient, DEFAULT_REQUEST_TIMEOUT};
pub use endpoint::{BaseUrl, Endpoint};
