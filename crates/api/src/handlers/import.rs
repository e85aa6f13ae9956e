//! Handlers for the bulk-import endpoints.
//!
//! Each endpoint accepts an array of loosely-shaped spreadsheet rows and
//! processes them independently: a bad row lands in the error tally and
//! the batch carries on. There is no partial-batch rollback.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use skillboard_core::import::{member_from_row, skill_from_row, ImportReport, RatingResolver};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body shared by all import endpoints: `{ "data": [row, ...] }`.
#[derive(Debug, Deserialize)]
pub struct ImportPayload {
    pub data: Vec<Value>,
}

/// Response for an import batch: a summary line plus the per-row tally.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub message: String,
    pub details: ImportReport,
}

fn require_rows(payload: &ImportPayload, noun: &str) -> Result<(), AppError> {
    if payload.data.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Invalid data format. Expected a non-empty array of {noun}."
        )));
    }
    Ok(())
}

/// POST /api/import/team-members
pub async fn import_team_members(
    State(state): State<AppState>,
    Json(payload): Json<ImportPayload>,
) -> AppResult<Json<ImportResponse>> {
    require_rows(&payload, "team members")?;

    let mut report = ImportReport::default();
    for (index, row) in payload.data.iter().enumerate() {
        match state.store.create_member(&member_from_row(row)) {
            Ok(_) => report.record_success(),
            Err(err) => report.record_error(index, err.to_string()),
        }
    }

    tracing::info!(
        success = report.success,
        errors = report.errors.len(),
        "Imported team members"
    );
    Ok(Json(ImportResponse {
        message: report.summary("team members"),
        details: report,
    }))
}

/// POST /api/import/skills
pub async fn import_skills(
    State(state): State<AppState>,
    Json(payload): Json<ImportPayload>,
) -> AppResult<Json<ImportResponse>> {
    require_rows(&payload, "skills")?;

    let mut report = ImportReport::default();
    for (index, row) in payload.data.iter().enumerate() {
        match state.store.create_skill(&skill_from_row(row)) {
            Ok(_) => report.record_success(),
            Err(err) => report.record_error(index, err.to_string()),
        }
    }

    tracing::info!(
        success = report.success,
        errors = report.errors.len(),
        "Imported skills"
    );
    Ok(Json(ImportResponse {
        message: report.summary("skills"),
        details: report,
    }))
}

/// POST /api/import/skill-ratings
///
/// Rows may reference members and skills by id or by name. The resolver
/// snapshot is taken once for the batch, so rows cannot reference members
/// created earlier in the same batch.
pub async fn import_skill_ratings(
    State(state): State<AppState>,
    Json(payload): Json<ImportPayload>,
) -> AppResult<Json<ImportResponse>> {
    require_rows(&payload, "skill ratings")?;

    let resolver = RatingResolver::new(&state.store.list_members(), &state.store.list_skills());
    let now = Utc::now();

    let mut report = ImportReport::default();
    for (index, row) in payload.data.iter().enumerate() {
        let outcome = resolver
            .rating_from_row(row, now)
            .map_err(AppError::BadRequest)
            .and_then(|dto| state.store.create_rating(&dto).map_err(AppError::from));
        match outcome {
            Ok(_) => report.record_success(),
            Err(err) => report.record_error(index, err.to_string()),
        }
    }

    tracing::info!(
        success = report.success,
        errors = report.errors.len(),
        "Imported skill ratings"
    );
    Ok(Json(ImportResponse {
        message: report.summary("skill ratings"),
        details: report,
    }))
}
