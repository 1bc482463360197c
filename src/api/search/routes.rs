use crate::api::models::AppState;
use crate::api::search::handlers::{search_channels_handler, search_videos_handler};
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_videos_handler))
        .route("/channels", get(search_channels_handler))
}
