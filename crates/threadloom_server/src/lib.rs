//! threadloom-server: the HTTP face of threadloom.
//!
//! `POST /generate-thread`, `POST /generate-tweet` and `POST /generate-bio`
//! each run one [`Generator`] call. `GET /healthz` reports liveness.

pub mod config;
pub mod error;
pub mod middleware;
pub mod urls;
pub mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use threadloom_core::{Generator, ThreadloomError};
use tokio::net::TcpListener;
use tracing::{info, warn};

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody};

#[derive(Clone)]
pub struct AppState {
    /// `None` when no provider credential was available at startup; every
    /// generation endpoint then fails with the missing-credential error.
    pub generator: Option<Arc<Generator>>,
}

impl AppState {
    pub fn new(generator: Generator) -> Self {
        Self {
            generator: Some(Arc::new(generator)),
        }
    }

    pub fn unconfigured() -> Self {
        Self { generator: None }
    }

    /// Build the OpenAI-backed generator from the environment. A missing key
    /// is logged and tolerated so the server still starts.
    pub fn from_env(config: &ServerConfig) -> Result<Self> {
        match Generator::from_env(config.generation_settings()) {
            Ok(generator) => {
                info!(
                    provider = generator.provider_id(),
                    model = %generator.settings().model,
                    "completion provider configured"
                );
                Ok(Self::new(generator))
            }
            Err(err @ ThreadloomError::MissingCredential(_)) => {
                warn!(error = %err, "starting without a completion provider");
                Ok(Self::unconfigured())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn generator(&self) -> Result<&Generator, ThreadloomError> {
        self.generator.as_deref().ok_or_else(|| {
            ThreadloomError::MissingCredential(
                threadloom_llms::OpenAIProvider::API_KEY_ENV.to_string(),
            )
        })
    }
}

/// Router with every route and middleware applied.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    urls::router(config).with_state(state)
}

/// Bind `config.addr()` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig, state: AppState) -> Result<()> {
    let addr: SocketAddr = config.addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    let app = app(state, &config);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    threadloom_observability::shutdown();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
