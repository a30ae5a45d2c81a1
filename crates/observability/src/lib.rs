//! Threadloom Observability - tracing setup shared by the server and CLI
//!
//! Installs a `tracing-subscriber` registry with an env filter, a console
//! layer and, when an endpoint is configured, an OpenTelemetry OTLP layer.
//!
//! # Quick Start
//!
//! ```no_run
//! use threadloom_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("threadloom")
//!     .with_otlp_endpoint("http://localhost:4317")
//!     .with_log_level("info");
//!
//! init(config)?;
//! tracing::info!("Service started");
//! # Ok::<(), threadloom_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `OTEL_SERVICE_NAME` or `SERVICE_NAME` - Service name
//! - `OTEL_SERVICE_VERSION` or `SERVICE_VERSION` - Service version
//! - `OTEL_EXPORTER_OTLP_ENDPOINT` or `TEMPO_ENDPOINT` - OTLP endpoint
//! - `OTEL_LOG_LEVEL` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, shutdown};
pub use tracing::{error_chain, record_duration, record_error};

// Macros are exported via #[macro_export] and available as
// threadloom_observability::http_request_span!() and provider_span!().
