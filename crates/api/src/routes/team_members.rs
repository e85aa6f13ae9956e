//! Route definitions for the `/team-members` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::member;
use crate::state::AppState;

/// Routes mounted at `/team-members`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /{id}    -> delete (cascades to ratings)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(member::list).post(member::create))
        .route("/{id}", delete(member::delete))
}
