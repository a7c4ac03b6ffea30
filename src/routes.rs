use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))

        // Unified agent
        .route("/agent", post(handlers::agent))

        // Task-specific endpoints
        .route("/hobby/suggest", post(handlers::hobby_suggest))
        .route("/hobby/weekly-plan", post(handlers::hobby_weekly_plan))
}

/// Full application: routes, middleware and state
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
