//! Route definitions for the bulk-import endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::import;
use crate::state::AppState;

/// Routes mounted at `/import`.
///
/// ```text
/// POST /team-members    -> bulk import members
/// POST /skills          -> bulk import skills
/// POST /skill-ratings   -> bulk import ratings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/team-members", post(import::import_team_members))
        .route("/skills", post(import::import_skills))
        .route("/skill-ratings", post(import::import_skill_ratings))
}
