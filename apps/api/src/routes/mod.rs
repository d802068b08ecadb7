pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::directory::handlers as directory;
use crate::formation::handlers as formation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Directory
        .route("/api/v1/people", get(directory::handle_list_people))
        .route("/api/v1/projects", get(directory::handle_list_projects))
        .route("/api/v1/projects/:id", get(directory::handle_get_project))
        // Team formation
        .route("/api/v1/team/rank", post(formation::handle_rank))
        .route(
            "/api/v1/team/recommendations",
            post(formation::handle_recommendations),
        )
        .route("/api/v1/team/coverage", post(formation::handle_coverage))
        // Document analysis
        .route("/api/v1/documents/analyze", post(analysis::handle_analyze))
        .with_state(state)
}
