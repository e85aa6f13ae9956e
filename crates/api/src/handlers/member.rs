//! Handlers for the `/team-members` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillboard_core::error::CoreError;
use skillboard_core::model::{CreateTeamMember, TeamMember};
use skillboard_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/team-members
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TeamMember>>> {
    Ok(Json(state.store.list_members()))
}

/// POST /api/team-members
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTeamMember>,
) -> AppResult<(StatusCode, Json<TeamMember>)> {
    let member = state.store.create_member(&input)?;
    tracing::info!(id = member.id, email = %member.email, "Created team member");
    Ok((StatusCode::CREATED, Json(member)))
}

/// DELETE /api/team-members/{id}
///
/// Cascades to delete all skill ratings referencing the member.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.store.delete_member(id) {
        tracing::info!(id, "Deleted team member");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))
    }
}
