pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::advisor::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form page
        .route("/", get(handlers::handle_form).post(handlers::handle_submit))
        // JSON API
        .route("/api/v1/recommendations", post(handlers::handle_recommend))
        .fallback(not_found)
        .with_state(state)
}
