//! Axum route handlers for the career plan API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use career_models::{CareerProfile, CareerRoadmap};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/career-plan
///
/// Validates the profile, then asks the configured planner for a roadmap.
/// Bodies that do not decode as a profile get the same error envelope as
/// every other failure.
pub async fn handle_career_plan(
    State(state): State<AppState>,
    payload: Result<Json<CareerProfile>, JsonRejection>,
) -> Result<Json<CareerRoadmap>, AppError> {
    let Json(profile) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    profile
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let planner = state
        .planner
        .as_ref()
        .ok_or_else(|| AppError::Configuration("OPENROUTER_API_KEY is not set".to_string()))?;

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        target_role = %profile.target_role,
        daily_hours = profile.daily_hours,
        "Generating career plan"
    );

    let roadmap = planner.plan(&profile).await?;

    info!(%request_id, weeks = roadmap.study_plan.len(), "Career plan generated");
    Ok(Json(roadmap))
}
