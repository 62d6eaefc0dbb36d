pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    response::Html,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

async fn ui() -> Html<&'static str> {
    Html(include_str!("../ui.html"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(ui))
        .route("/health", get(health::health_handler))
        .route("/api/v1/profile", get(handlers::handle_profile))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
