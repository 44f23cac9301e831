//! Observability wiring.
//!
//! Installs one `tracing-subscriber` registry for the whole process:
//!
//! - an [`EnvFilter`] read from `RUST_LOG` (default `info`);
//! - a text or JSON formatter writing to stderr, so stdout carries only results;
//! - when an OTLP endpoint is configured, an OpenTelemetry layer exporting
//!   every span (including the client's per-operation spans) over gRPC.

use anyhow::{Context, Result};
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::runtime;
use opentelemetry_sdk::trace::TracerProvider;
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{CliConfig, LogFormat};

const TRACER_NAME: &str = "burrow-cli";

/// Handle that flushes exported spans on shutdown.
pub struct Telemetry {
    provider: Option<TracerProvider>,
}

impl Telemetry {
    /// Flushes and stops the OTLP exporter, if one was installed.
    pub fn shutdown(self) {
        if let Some(provider) = self.provider {
            if let Err(e) = provider.shutdown() {
                warn!(error = %e, "failed to flush trace exporter");
            }
        }
    }
}

/// Installs the global subscriber described by `config`.
///
/// Must be called from inside the Tokio runtime when an OTLP endpoint is set.
///
/// # Errors
///
/// Fails if the OTLP exporter cannot be built or a global subscriber is
/// already installed.
pub fn init(config: &CliConfig) -> Result<Telemetry> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (text, json) = match config.log_format {
        LogFormat::Text => (Some(fmt::layer().with_writer(std::io::stderr)), None),
        LogFormat::Json => (None, Some(fmt::layer().json().with_writer(std::io::stderr))),
    };

    let provider = config
        .otlp_endpoint
        .as_deref()
        .map(otlp_provider)
        .transpose()?;
    let otel = provider
        .as_ref()
        .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(TRACER_NAME)));

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .with(otel)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(Telemetry { provider })
}

fn otlp_provider(endpoint: &str) -> Result<TracerProvider> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .with_context(|| format!("failed to build OTLP exporter for {endpoint}"))?;

    Ok(TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .build())
}
