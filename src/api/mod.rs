pub mod comments;
pub mod models;
pub mod operation;
pub mod search;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use models::*;

use axum::{Json, Router, routing::get};

// Health handler (simple, keep here)
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// All endpoints, bound to the shared state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(search::routes())
        .merge(comments::routes())
        .with_state(state)
}
