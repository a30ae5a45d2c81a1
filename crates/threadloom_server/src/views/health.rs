use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use threadloom_constant::app::NAME;

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
    pub service: String,
    pub provider_configured: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        ok: true,
        service: NAME.to_string(),
        provider_configured: state.generator.is_some(),
    })
}
