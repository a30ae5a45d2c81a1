use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{middleware, Router};

use crate::config::ServerConfig;
use crate::middleware::{cors, trace_request, CorsPolicy};
use crate::views::{bio::generate_bio, health::health, thread::generate_thread, tweet::generate_tweet};
use crate::AppState;

pub fn router(config: &ServerConfig) -> Router<AppState> {
    let policy = Arc::new(CorsPolicy::new(config));

    Router::new()
        .route("/healthz", get(health))
        .route("/generate-thread", post(generate_thread))
        .route("/generate-tweet", post(generate_tweet))
        .route("/generate-bio", post(generate_bio))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(middleware::from_fn_with_state(policy, cors))
        .layer(middleware::from_fn(trace_request))
}
