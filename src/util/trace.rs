//! Creates the `tracing_subscriber` registry the service logs through.
//! With the `telemetry` feature enabled, spans are also batched to an
//! OpenTelemetry collector defined by the environment.
//!
//! An example environment is shown:
//! ```bash
//! RUST_LOG=railcast=debug,tower_http=info
//! OTEL_EXPORTER_OTLP_ENDPOINT=https://<exporter>.com
//! OTEL_EXPORTER_OTLP_HEADERS=<api-key> [if required]
//! OTEL_SERVICE_NAME=railcast
//! ```

#[cfg(feature = "telemetry")]
use opentelemetry::trace::TracerProvider;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
pub fn initialize_tracer() -> Result<(), crate::Error> {
    #[cfg(feature = "telemetry")]
    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_tls_config(Default::default());

    #[cfg(feature = "telemetry")]
    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .install_batch(opentelemetry_sdk::runtime::Tokio)
        .map_err(|err| crate::Error::Trace(err.to_string()))?
        .tracer("railcast");

    // Link OTEL and STDOUT subscribers
    #[cfg(feature = "telemetry")]
    let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);
    let fmt_layer = tracing_subscriber::fmt::layer().compact();

    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer);

    #[cfg(feature = "telemetry")]
    let registry = registry.with(otel_layer);

    registry
        .try_init()
        .map_err(|err| crate::Error::Trace(err.to_string()))
}
