//! Entity models and create DTOs shared by the store and the API layer.
//!
//! Field names serialize in camelCase to match the dashboard's wire format.

use serde::{Deserialize, Serialize};

use crate::level::SkillLevel;
use crate::types::{DbId, Timestamp};

/// A member of the team being tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub department: String,
    pub email: String,
}

/// DTO for creating a new team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMember {
    pub name: String,
    pub role: String,
    pub department: String,
    pub email: String,
}

/// A skill in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
}

/// DTO for creating a new skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkill {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One member's proficiency in one skill for one week.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRating {
    pub id: DbId,
    pub team_member_id: DbId,
    pub skill_id: DbId,
    pub level: SkillLevel,
    /// The week this rating applies to. Stored as given; normalized to a
    /// week bucket by [`crate::week`] for all aggregation purposes.
    pub week_of: Timestamp,
}

/// DTO for creating a new skill rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillRating {
    pub team_member_id: DbId,
    pub skill_id: DbId,
    pub level: SkillLevel,
    pub week_of: Timestamp,
}

/// A rating enriched with denormalized member and skill names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingWithDetails {
    pub id: DbId,
    pub team_member_id: DbId,
    pub team_member_name: String,
    pub skill_id: DbId,
    pub skill_name: String,
    pub skill_category: String,
    pub level: SkillLevel,
    pub week_of: Timestamp,
}
