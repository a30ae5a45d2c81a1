use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use threadloom_core::{ThreadRequest, ThreadResponse};

use crate::error::ApiError;
use crate::AppState;

pub async fn generate_thread(
    State(state): State<AppState>,
    payload: Result<Json<ThreadRequest>, JsonRejection>,
) -> Result<Json<ThreadResponse>, ApiError> {
    let Json(request) = payload?;
    let generator = state
        .generator()
        .map_err(|e| ApiError::generation("thread", e))?;

    let thread = generator
        .thread(&request)
        .await
        .map_err(|e| ApiError::generation("thread", e))?;
    Ok(Json(ThreadResponse { thread }))
}
