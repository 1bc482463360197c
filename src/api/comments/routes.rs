use crate::api::comments::handlers::comment_threads_handler;
use crate::api::models::AppState;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new().route("/comments", get(comment_threads_handler))
}
