use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use threadloom_core::{BioRequest, BioResponse};

use crate::error::ApiError;
use crate::AppState;

pub async fn generate_bio(
    State(state): State<AppState>,
    payload: Result<Json<BioRequest>, JsonRejection>,
) -> Result<Json<BioResponse>, ApiError> {
    let Json(request) = payload?;
    let generator = state.generator().map_err(|e| ApiError::generation("bio", e))?;

    let bio = generator
        .bio(&request)
        .await
        .map_err(|e| ApiError::generation("bio", e))?;
    Ok(Json(BioResponse { bio }))
}
