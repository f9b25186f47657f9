//! Axum route handlers for pending confidence edits.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::pending::queue::ConfidenceEdit;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EnqueueResponse {
    pub pending: usize,
}

/// Body for both commit and flush: edits are only ever drained per user.
#[derive(Debug, Deserialize)]
pub struct CommitRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct CommittedEdits {
    pub committed: Vec<ConfidenceEdit>,
}

/// POST /api/v1/skills/confidence
///
/// Queues a slider edit. Nothing is committed until the settle period passes
/// or the user commits explicitly.
pub async fn handle_enqueue_edit(
    State(state): State<AppState>,
    Json(edit): Json<ConfidenceEdit>,
) -> Result<(StatusCode, Json<EnqueueResponse>), AppError> {
    if edit.skill.trim().is_empty() {
        return Err(AppError::Validation("skill cannot be empty".to_string()));
    }

    let pending = state.pending.lock().await.enqueue(edit, Utc::now());
    Ok((StatusCode::ACCEPTED, Json(EnqueueResponse { pending })))
}

/// POST /api/v1/skills/confidence/commit
///
/// Drains every pending edit for the user and hands them back for persistence.
pub async fn handle_commit_edits(
    State(state): State<AppState>,
    Json(request): Json<CommitRequest>,
) -> Result<Json<CommittedEdits>, AppError> {
    let committed = state.pending.lock().await.commit(request.user_id);
    info!(
        "Committed {} confidence edit(s) for user {}",
        committed.len(),
        request.user_id
    );
    Ok(Json(CommittedEdits { committed }))
}

/// POST /api/v1/skills/confidence/flush
///
/// Drains the user's edits whose settle period has elapsed.
pub async fn handle_flush_due(
    State(state): State<AppState>,
    Json(request): Json<CommitRequest>,
) -> Result<Json<CommittedEdits>, AppError> {
    let committed = state
        .pending
        .lock()
        .await
        .flush_due(request.user_id, Utc::now());
    if !committed.is_empty() {
        info!(
            "Flushed {} settled confidence edit(s) for user {}",
            committed.len(),
            request.user_id
        );
    }
    Ok(Json(CommittedEdits { committed }))
}
