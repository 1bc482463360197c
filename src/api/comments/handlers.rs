use crate::api::models::*;
use crate::api::operation::{self, Operation};
use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;
use std::collections::HashMap;

/// `GET /comments?videoId=...`
pub async fn comment_threads_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, AppError> {
    operation::execute(state.youtube.as_ref(), Operation::Comments, &params)
        .await
        .map(Json)
}
