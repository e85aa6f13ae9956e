//! Handlers for the dashboard aggregation views.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use skillboard_core::history::WeeklyBucket;
use skillboard_core::import::parse_week_of;
use skillboard_core::level::SkillLevel;
use skillboard_core::matrix::SkillMatrix;
use skillboard_core::trend::{find_most_improved_skill, SkillGap, SkillImprovement};
use skillboard_core::types::{DbId, Timestamp};

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for week-scoped views. An invalid or absent `weekOf`
/// falls back to the current date, matching the dashboard's default view.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekParams {
    pub week_of: Option<String>,
}

impl WeekParams {
    fn target(&self) -> Timestamp {
        let now = Utc::now();
        match &self.week_of {
            Some(raw) => parse_week_of(Some(&Value::String(raw.clone())), now),
            None => now,
        }
    }
}

/// Query parameters for the historical series.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryParams {
    pub team_member_id: Option<DbId>,
    pub skill_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/dashboard/team-skill-matrix?weekOf=
pub async fn team_skill_matrix(
    State(state): State<AppState>,
    Query(params): Query<WeekParams>,
) -> AppResult<Json<SkillMatrix>> {
    Ok(Json(state.store.team_skill_matrix(params.target())))
}

/// GET /api/dashboard/historical-ratings?teamMemberId=&skillId=
pub async fn historical_ratings(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> AppResult<Json<Vec<WeeklyBucket>>> {
    Ok(Json(
        state
            .store
            .historical_ratings(params.team_member_id, params.skill_id),
    ))
}

/// GET /api/dashboard/most-improved-skill
///
/// Compares the two most recent weeks across the whole team. `null` when
/// fewer than two weeks of data exist or nothing improved.
pub async fn most_improved_skill(
    State(state): State<AppState>,
) -> AppResult<Json<Option<SkillImprovement>>> {
    let history = state.store.historical_ratings(None, None);
    Ok(Json(find_most_improved_skill(&history)))
}

/// GET /api/dashboard/skill-gap?weekOf=
///
/// `null` when no skill's average falls below the gap threshold.
pub async fn skill_gap(
    State(state): State<AppState>,
    Query(params): Query<WeekParams>,
) -> AppResult<Json<Option<SkillGap>>> {
    Ok(Json(state.store.skill_gap(params.target())))
}

// ---------------------------------------------------------------------------
// Skill levels helper
// ---------------------------------------------------------------------------

/// One `{value, label}` pair for populating level pickers.
#[derive(Debug, Serialize)]
pub struct SkillLevelEntry {
    pub value: i32,
    pub label: &'static str,
}

/// GET /api/skill-levels
pub async fn skill_levels() -> Json<Vec<SkillLevelEntry>> {
    Json(
        SkillLevel::ALL
            .into_iter()
            .map(|level| SkillLevelEntry {
                value: level.value(),
                label: level.label(),
            })
            .collect(),
    )
}
