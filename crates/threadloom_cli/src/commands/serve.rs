//! `threadloom serve`: run the HTTP API.

use anyhow::Result;
use threadloom_constant::app::{DISPLAY_NAME, VERSION};
use threadloom_server::{AppState, ServerConfig};

use crate::output;

pub async fn handle(host: Option<String>, port: Option<u16>, model: Option<String>) -> Result<()> {
    let mut config = ServerConfig::from_env()?;
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(model) = model {
        config = config.with_model(model);
    }

    let state = AppState::from_env(&config)?;

    output::header(&format!("{DISPLAY_NAME} {VERSION}"));
    output::kv("listen", &format!("http://{}:{}", config.host, config.port));
    output::kv("model", &config.model);
    output::kv("cors", &config.cors_origins.join(", "));
    if state.generator.is_none() {
        output::warning("OPENAI_API_KEY not set; generation endpoints will fail");
    }

    threadloom_server::serve(config, state).await
}
