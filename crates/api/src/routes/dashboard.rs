//! Route definitions for the dashboard aggregation views.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /team-skill-matrix      -> dense weekly matrix (?weekOf)
/// GET /historical-ratings     -> weekly buckets (?teamMemberId, ?skillId)
/// GET /most-improved-skill    -> best gain over the two latest weeks
/// GET /skill-gap              -> weakest skill for a week (?weekOf)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/team-skill-matrix", get(dashboard::team_skill_matrix))
        .route("/historical-ratings", get(dashboard::historical_ratings))
        .route("/most-improved-skill", get(dashboard::most_improved_skill))
        .route("/skill-gap", get(dashboard::skill_gap))
}
