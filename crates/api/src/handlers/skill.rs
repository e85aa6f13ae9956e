//! Handlers for the `/skills` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillboard_core::error::CoreError;
use skillboard_core::model::{CreateSkill, Skill};
use skillboard_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/skills
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Skill>>> {
    Ok(Json(state.store.list_skills()))
}

/// POST /api/skills
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSkill>,
) -> AppResult<(StatusCode, Json<Skill>)> {
    let skill = state.store.create_skill(&input)?;
    tracing::info!(id = skill.id, name = %skill.name, "Created skill");
    Ok((StatusCode::CREATED, Json(skill)))
}

/// DELETE /api/skills/{id}
///
/// Cascades to delete all skill ratings referencing the skill.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.store.delete_skill(id) {
        tracing::info!(id, "Deleted skill");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))
    }
}
