//! Bulk-import row normalization.
//!
//! Spreadsheet exports arrive as arrays of loosely-shaped JSON rows with
//! inconsistent header casing, synonym column names, textual level labels,
//! and missing or garbled dates. This module turns a single row into a
//! typed create DTO; per-row bookkeeping lives in [`ImportReport`] so one
//! bad row never fails the batch.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::level::SkillLevel;
use crate::model::{CreateSkill, CreateSkillRating, CreateTeamMember, Skill, TeamMember};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Column synonyms
// ---------------------------------------------------------------------------

const MEMBER_NAME_KEYS: &[&str] = &["name", "Name"];
const MEMBER_ROLE_KEYS: &[&str] = &["role", "Role", "position", "Position"];
const MEMBER_DEPARTMENT_KEYS: &[&str] = &["department", "Department"];
const MEMBER_EMAIL_KEYS: &[&str] = &["email", "Email"];

const SKILL_NAME_KEYS: &[&str] = &["name", "Name"];
const SKILL_CATEGORY_KEYS: &[&str] = &["category", "Category"];
const SKILL_DESCRIPTION_KEYS: &[&str] = &["description", "Description"];

const RATING_MEMBER_ID_KEYS: &[&str] = &["teamMemberId", "team_member_id"];
const RATING_MEMBER_NAME_KEYS: &[&str] = &["teamMemberName", "team_member_name", "name", "Name"];
const RATING_SKILL_ID_KEYS: &[&str] = &["skillId", "skill_id"];
const RATING_SKILL_NAME_KEYS: &[&str] = &["skillName", "skill_name", "skill", "Skill"];
const RATING_LEVEL_KEYS: &[&str] = &["level", "Level"];
const RATING_WEEK_KEYS: &[&str] = &["weekOf", "week_of", "date", "Date"];

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// A single failed row, 1-based to match the spreadsheet the user sees.
#[derive(Debug, Clone, Serialize)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

/// Per-row success/error tally for one import batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    pub success: usize,
    pub errors: Vec<RowError>,
}

impl ImportReport {
    pub fn record_success(&mut self) {
        self.success += 1;
    }

    /// Record a failure for the row at `index` (0-based).
    pub fn record_error(&mut self, index: usize, message: impl Into<String>) {
        self.errors.push(RowError {
            row: index + 1,
            message: message.into(),
        });
    }

    /// Human-readable batch summary, e.g.
    /// `"Imported 4 skills successfully with 1 errors."`.
    pub fn summary(&self, noun: &str) -> String {
        format!(
            "Imported {} {noun} successfully with {} errors.",
            self.success,
            self.errors.len()
        )
    }
}

// ---------------------------------------------------------------------------
// Field extraction
// ---------------------------------------------------------------------------

/// First value present under any of the candidate column names.
fn field<'a>(row: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| row.get(k))
        .find(|v| !v.is_null())
}

/// First non-empty string under any of the candidate column names.
/// Numeric cells are stringified, since spreadsheets are careless about
/// cell types.
fn string_field(row: &Value, keys: &[&str]) -> Option<String> {
    let value = field(row, keys)?;
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn id_field(row: &Value, keys: &[&str]) -> Option<DbId> {
    match field(row, keys)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Row -> DTO conversion
// ---------------------------------------------------------------------------

/// Assemble a member create DTO from a loose row.
///
/// Missing columns become empty strings; the store's validation rejects
/// them with a per-field message, which the import report records.
pub fn member_from_row(row: &Value) -> CreateTeamMember {
    CreateTeamMember {
        name: string_field(row, MEMBER_NAME_KEYS).unwrap_or_default(),
        role: string_field(row, MEMBER_ROLE_KEYS).unwrap_or_default(),
        department: string_field(row, MEMBER_DEPARTMENT_KEYS).unwrap_or_default(),
        email: string_field(row, MEMBER_EMAIL_KEYS).unwrap_or_default(),
    }
}

/// Assemble a skill create DTO from a loose row.
pub fn skill_from_row(row: &Value) -> CreateSkill {
    CreateSkill {
        name: string_field(row, SKILL_NAME_KEYS).unwrap_or_default(),
        category: string_field(row, SKILL_CATEGORY_KEYS).unwrap_or_default(),
        description: string_field(row, SKILL_DESCRIPTION_KEYS),
    }
}

/// Parse a level cell: numbers are clamped into 0-3, text labels are
/// matched by keyword, unparseable input defaults to 0.
pub fn parse_level(value: Option<&Value>) -> SkillLevel {
    match value {
        Some(Value::Number(n)) => SkillLevel::from_clamped(n.as_i64().unwrap_or(0)),
        Some(Value::String(s)) => parse_level_text(s),
        _ => SkillLevel::Unknown,
    }
}

fn parse_level_text(text: &str) -> SkillLevel {
    let lower = text.to_lowercase();
    if lower.contains("unknown") || lower.contains("none") {
        SkillLevel::Unknown
    } else if lower.contains("basic") || lower.contains("beginner") {
        SkillLevel::BasicKnowledge
    } else if lower.contains("hands") || lower.contains("experienced") || lower.contains("intermediate")
    {
        SkillLevel::HandsOnExperience
    } else if lower.contains("expert") || lower.contains("advanced") {
        SkillLevel::Expert
    } else {
        match lower.trim().parse::<i64>() {
            Ok(n) => SkillLevel::from_clamped(n),
            Err(_) => SkillLevel::Unknown,
        }
    }
}

/// Parse a week-of cell, falling back to `now` for missing or invalid
/// dates. Accepts RFC 3339 timestamps, ISO dates, and US-style
/// `MM/DD/YYYY` dates.
pub fn parse_week_of(value: Option<&Value>, now: Timestamp) -> Timestamp {
    let Some(Value::String(text)) = value else {
        return now;
    };
    let text = text.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return ts.with_timezone(&Utc);
    }
    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return midnight.and_utc();
            }
        }
    }
    now
}

// ---------------------------------------------------------------------------
// Rating resolution
// ---------------------------------------------------------------------------

/// Resolves rating rows against the current member and skill catalogs,
/// matching by id when present and by case-insensitive name otherwise.
pub struct RatingResolver {
    member_ids: HashSet<DbId>,
    members_by_name: HashMap<String, DbId>,
    skill_ids: HashSet<DbId>,
    skills_by_name: HashMap<String, DbId>,
}

impl RatingResolver {
    pub fn new(members: &[TeamMember], skills: &[Skill]) -> Self {
        Self {
            member_ids: members.iter().map(|m| m.id).collect(),
            members_by_name: members
                .iter()
                .map(|m| (m.name.to_lowercase(), m.id))
                .collect(),
            skill_ids: skills.iter().map(|s| s.id).collect(),
            skills_by_name: skills
                .iter()
                .map(|s| (s.name.to_lowercase(), s.id))
                .collect(),
        }
    }

    /// Turn a loose rating row into a create DTO.
    ///
    /// Errors describe which reference could not be resolved; levels and
    /// dates never fail, they normalize (clamp / default) instead.
    pub fn rating_from_row(&self, row: &Value, now: Timestamp) -> Result<CreateSkillRating, String> {
        let team_member_id = self
            .resolve(
                row,
                RATING_MEMBER_ID_KEYS,
                RATING_MEMBER_NAME_KEYS,
                &self.member_ids,
                &self.members_by_name,
            )
            .ok_or_else(|| "Could not resolve team member by id or name".to_string())?;

        let skill_id = self
            .resolve(
                row,
                RATING_SKILL_ID_KEYS,
                RATING_SKILL_NAME_KEYS,
                &self.skill_ids,
                &self.skills_by_name,
            )
            .ok_or_else(|| "Could not resolve skill by id or name".to_string())?;

        Ok(CreateSkillRating {
            team_member_id,
            skill_id,
            level: parse_level(field(row, RATING_LEVEL_KEYS)),
            week_of: parse_week_of(field(row, RATING_WEEK_KEYS), now),
        })
    }

    fn resolve(
        &self,
        row: &Value,
        id_keys: &[&str],
        name_keys: &[&str],
        ids: &HashSet<DbId>,
        by_name: &HashMap<String, DbId>,
    ) -> Option<DbId> {
        if let Some(id) = id_field(row, id_keys) {
            return ids.contains(&id).then_some(id);
        }
        let name = string_field(row, name_keys)?;
        by_name.get(&name.to_lowercase()).copied()
    }
}
