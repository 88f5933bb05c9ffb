pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::planning::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route(
            "/api/v1/profiles/:id",
            get(handlers::handle_get_profile).put(handlers::handle_put_profile),
        )
        // Planning API
        .route("/api/v1/plans/recommend", post(handlers::handle_recommend))
        .route(
            "/api/v1/plans/generate",
            post(handlers::handle_generate_plan),
        )
        .route("/api/v1/plans/graph", post(handlers::handle_graph))
        .route("/api/v1/plans/:user_id", get(handlers::handle_get_plan))
        .with_state(state)
}
