//! Handlers for the `/skill-ratings` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use skillboard_core::error::CoreError;
use skillboard_core::level::SkillLevel;
use skillboard_core::model::{CreateSkillRating, RatingWithDetails, SkillRating};
use skillboard_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Query parameters for listing ratings. The filters are mutually
/// independent; when both are present, the member filter wins.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRatingsParams {
    pub team_member_id: Option<DbId>,
    pub skill_id: Option<DbId>,
}

/// Request body for updating a rating's level.
#[derive(Debug, Deserialize)]
pub struct UpdateRatingLevel {
    pub level: SkillLevel,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/skill-ratings?teamMemberId=&skillId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListRatingsParams>,
) -> AppResult<Json<Vec<SkillRating>>> {
    let ratings = match (params.team_member_id, params.skill_id) {
        (Some(member_id), _) => state.store.ratings_for_member(member_id),
        (None, Some(skill_id)) => state.store.ratings_for_skill(skill_id),
        (None, None) => state.store.list_ratings(),
    };
    Ok(Json(ratings))
}

/// GET /api/skill-ratings/details
pub async fn details(State(state): State<AppState>) -> AppResult<Json<Vec<RatingWithDetails>>> {
    Ok(Json(state.store.ratings_with_details()?))
}

/// POST /api/skill-ratings
///
/// The level field is range-checked during deserialization; out-of-range
/// values never reach the store.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSkillRating>,
) -> AppResult<(StatusCode, Json<SkillRating>)> {
    let rating = state.store.create_rating(&input)?;
    tracing::info!(
        id = rating.id,
        team_member_id = rating.team_member_id,
        skill_id = rating.skill_id,
        level = rating.level.value(),
        "Created skill rating"
    );
    Ok((StatusCode::CREATED, Json(rating)))
}

/// PATCH /api/skill-ratings/{id}
///
/// Level-only update by rating identity.
pub async fn update_level(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRatingLevel>,
) -> AppResult<Json<SkillRating>> {
    let rating = state
        .store
        .update_rating_level(id, input.level)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SkillRating",
            id,
        }))?;
    tracing::info!(id, level = rating.level.value(), "Updated skill rating");
    Ok(Json(rating))
}
