use crate::api::models::*;
use crate::api::operation::{self, Operation};
use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;
use std::collections::HashMap;

/// `GET /search?search_query=...`
pub async fn search_videos_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, AppError> {
    operation::execute(state.youtube.as_ref(), Operation::Videos, &params)
        .await
        .map(Json)
}

/// `GET /channels?channel=...`
pub async fn search_channels_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, AppError> {
    operation::execute(state.youtube.as_ref(), Operation::Channels, &params)
        .await
        .map(Json)
}
