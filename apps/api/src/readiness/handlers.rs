//! Axum route handlers for the readiness API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::readiness::models::{RawGapRecommendation, SkillObservation};
use crate::readiness::validation::{
    validate_gap_recommendations, validate_observations, validate_target_role,
};
use crate::readiness::{evaluate, ReadinessReport};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    /// Only used for log correlation; the engine is user-agnostic.
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub target_role: String,
    #[serde(default)]
    pub target_sector: Option<String>,
    #[serde(default)]
    pub observations: Vec<SkillObservation>,
    /// Omit to have gap candidates derived from the pathway.
    #[serde(default)]
    pub gap_recommendations: Option<Vec<RawGapRecommendation>>,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/pathways/evaluate
///
/// Classifies the target role's skills, scores readiness, ranks alternative
/// roles, and merges recommendations for the supplied committed observations.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<ReadinessReport>, AppError> {
    let target_role = validate_target_role(&request.target_role)?;
    let observations = validate_observations(request.observations)?;
    let gap_recommendations = request
        .gap_recommendations
        .map(validate_gap_recommendations)
        .transpose()?;
    let target_sector = request.target_sector.unwrap_or_default();

    let lookup = state
        .taxonomy
        .lookup(target_role, target_sector.trim())
        .await?;

    let mut report = evaluate(&observations, &lookup, gap_recommendations.as_deref());
    report.truncate_for_display(
        state.config.evidence_display_limit,
        state.config.suggested_roles_limit,
    );
    report.round_scores();

    info!(
        user_id = ?request.user_id,
        target_role = ?report.target_role,
        readiness = report.stats.readiness_score,
        "Evaluated pathway"
    );

    Ok(Json(report))
}

/// GET /api/v1/roles
pub async fn handle_list_roles(
    State(state): State<AppState>,
) -> Result<Json<RolesResponse>, AppError> {
    let roles = state.taxonomy.available_roles().await?;
    Ok(Json(RolesResponse { roles }))
}
