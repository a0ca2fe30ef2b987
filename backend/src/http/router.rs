//! Router configuration for the HTTP API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS so a browser dashboard on another origin can call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let schedule_api = Router::new()
        .route("/add", post(handlers::add_schedule))
        .route("/all", get(handlers::list_schedules))
        .route("/overloaded", get(handlers::list_overloaded));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/schedule", schedule_api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationMode;

    #[test]
    fn test_router_creation() {
        let state = AppState::in_memory(ValidationMode::Permissive);
        let _router = create_router(state);
    }
}
