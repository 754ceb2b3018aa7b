pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::moodboard::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Plugin panel protocol
        .route("/api/v1/messages", post(handlers::handle_message))
        // Document inspection
        .route("/api/v1/moodboards", get(handlers::handle_list_moodboards))
        .route("/api/v1/moodboards/:id", get(handlers::handle_get_moodboard))
        .route(
            "/api/v1/moodboards/:id/export",
            get(handlers::handle_export_moodboard),
        )
        .route("/api/v1/styles", get(handlers::handle_list_styles))
        .with_state(state)
}
