//! Route definitions for the `/skill-ratings` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::rating;
use crate::state::AppState;

/// Routes mounted at `/skill-ratings`.
///
/// ```text
/// GET    /           -> list (?teamMemberId, ?skillId)
/// POST   /           -> create
/// GET    /details    -> list enriched with names
/// PATCH  /{id}       -> update level by id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rating::list).post(rating::create))
        .route("/details", get(rating::details))
        .route("/{id}", patch(rating::update_level))
}
