use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use threadloom_core::{TweetRequest, TweetResponse};

use crate::error::ApiError;
use crate::AppState;

pub async fn generate_tweet(
    State(state): State<AppState>,
    payload: Result<Json<TweetRequest>, JsonRejection>,
) -> Result<Json<TweetResponse>, ApiError> {
    let Json(request) = payload?;
    let generator = state
        .generator()
        .map_err(|e| ApiError::generation("tweet", e))?;

    let tweet = generator
        .tweet(&request)
        .await
        .map_err(|e| ApiError::generation("tweet", e))?;
    Ok(Json(TweetResponse { tweet }))
}
