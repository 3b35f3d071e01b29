pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::planning::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/career-plan", post(handlers::handle_career_plan))
        .with_state(state)
}
