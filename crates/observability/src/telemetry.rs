//! Subscriber installation with optional OTLP export (OpenTelemetry 0.31)

use once_cell::sync::OnceCell;
use opentelemetry::{global, trace::TracerProvider, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{SdkTracer, SdkTracerProvider};
use opentelemetry_sdk::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

// Kept so shutdown() can flush pending spans.
static TRACER_PROVIDER: OnceCell<SdkTracerProvider> = OnceCell::new();

/// Install the global subscriber for this process.
///
/// Console output goes to stderr so that stdout stays free for command
/// output. An unreachable or invalid OTLP endpoint degrades to console-only.
/// Fails with [`ObservabilityError::AlreadyInitialized`] when called twice.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let fmt_layer = config
        .enable_console
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let otel_layer = match &config.otlp_endpoint {
        Some(endpoint) => match otlp_tracer(&config, endpoint) {
            Ok(tracer) => Some(OpenTelemetryLayer::new(tracer)),
            Err(e) => {
                // No subscriber yet, so this goes straight to stderr.
                eprintln!("OTLP export disabled ({endpoint}): {e}");
                None
            }
        },
        None => None,
    };

    Registry::default()
        .with(env_filter(&config))
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
        .map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(
        service.name = %config.service_name,
        otlp = config.otlp_endpoint.is_some(),
        "tracing initialized"
    );
    Ok(())
}

/// Flush and stop the OTLP exporter, if one was installed.
pub fn shutdown() {
    match TRACER_PROVIDER.get() {
        Some(provider) => {
            if let Err(e) = provider.shutdown() {
                tracing::warn!(error = %e, "tracer provider shutdown failed");
            }
        }
        None => tracing::debug!("no tracer provider to shut down"),
    }
}

fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    match &config.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

fn resource(config: &ObservabilityConfig) -> Resource {
    let mut attributes = vec![KeyValue::new("service.name", config.service_name.clone())];
    if let Some(version) = &config.service_version {
        attributes.push(KeyValue::new("service.version", version.clone()));
    }
    attributes.extend(
        config
            .resource_attributes
            .iter()
            .map(|(key, value)| KeyValue::new(key.clone(), value.clone())),
    );
    // Resource constructors are private in 0.31; the builder is the public API.
    Resource::builder().with_attributes(attributes).build()
}

/// Build the batch OTLP pipeline and register it as the global provider.
fn otlp_tracer(
    config: &ObservabilityConfig,
    endpoint: &str,
) -> Result<SdkTracer, ObservabilityError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint.to_string())
        .build()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource(config))
        .build();
    let tracer = provider.tracer(config.service_name.clone());

    // Global provider must be set before the layer is built.
    global::set_tracer_provider(provider.clone());
    let _ = TRACER_PROVIDER.set(provider);
    Ok(tracer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_carries_service_attributes() {
        let config = ObservabilityConfig::new("threadloom")
            .with_version("0.1.0")
            .with_resource_attribute("deployment.environment", "test");
        let resource = resource(&config);
        let get = |key: &'static str| {
            resource
                .get(&opentelemetry::Key::from_static_str(key))
                .map(|v| v.to_string())
        };
        assert_eq!(get("service.name").as_deref(), Some("threadloom"));
        assert_eq!(get("service.version").as_deref(), Some("0.1.0"));
        assert_eq!(get("deployment.environment").as_deref(), Some("test"));
    }

    #[test]
    fn test_shutdown_without_provider_is_noop() {
        shutdown();
    }
}
