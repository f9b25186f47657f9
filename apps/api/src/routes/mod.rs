pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pending::handlers as pending;
use crate::readiness::handlers as readiness;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Readiness API
        .route("/api/v1/roles", get(readiness::handle_list_roles))
        .route(
            "/api/v1/pathways/evaluate",
            post(readiness::handle_evaluate),
        )
        // Pending confidence edits
        .route("/api/v1/skills/confidence", post(pending::handle_enqueue_edit))
        .route(
            "/api/v1/skills/confidence/commit",
            post(pending::handle_commit_edits),
        )
        .route(
            "/api/v1/skills/confidence/flush",
            post(pending::handle_flush_due),
        )
        .with_state(state)
}
