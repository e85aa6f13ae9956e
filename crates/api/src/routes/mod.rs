pub mod dashboard;
pub mod health;
pub mod import;
pub mod skill_ratings;
pub mod skills;
pub mod team_members;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /team-members                      list, create
/// /team-members/{id}                 delete (cascades)
///
/// /skills                            list, create
/// /skills/{id}                       delete (cascades)
///
/// /skill-ratings                     list (?teamMemberId, ?skillId), create
/// /skill-ratings/details             enriched list
/// /skill-ratings/{id}                patch (level only)
///
/// /dashboard/team-skill-matrix       weekly matrix (?weekOf)
/// /dashboard/historical-ratings      weekly buckets (?teamMemberId, ?skillId)
/// /dashboard/most-improved-skill     trend summary
/// /dashboard/skill-gap               weakest skill (?weekOf)
///
/// /skill-levels                      {value, label} pairs
///
/// /import/team-members               bulk import (POST)
/// /import/skills                     bulk import (POST)
/// /import/skill-ratings              bulk import (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/team-members", team_members::router())
        .nest("/skills", skills::router())
        .nest("/skill-ratings", skill_ratings::router())
        .nest("/dashboard", dashboard::router())
        .nest("/import", import::router())
        .route("/skill-levels", get(handlers::dashboard::skill_levels))
}
