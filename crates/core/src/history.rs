//! Historical rating aggregation.
//!
//! Buckets the flat rating list into week-ordered groups for trend
//! analysis, optionally filtered by member and/or skill, and enriches each
//! rating with denormalized member and skill names. Dangling references
//! (member or skill deleted out from under a rating) degrade to an
//! "Unknown" placeholder rather than failing the whole aggregation.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::model::{RatingWithDetails, Skill, SkillRating, TeamMember};
use crate::types::DbId;
use crate::week;

/// Placeholder substituted for names of deleted members and skills.
pub const UNKNOWN_PLACEHOLDER: &str = "Unknown";

/// All ratings for one week bucket, enriched with names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBucket {
    /// ISO week key (`YYYY-MM-DD` of the bucket's Sunday).
    pub week_of: String,
    pub ratings: Vec<RatingWithDetails>,
}

/// Group ratings into chronologically ordered weekly buckets.
///
/// `member_filter` and `skill_filter` are applied independently by exact
/// id equality before bucketing.
pub fn build_history(
    ratings: &[SkillRating],
    member_filter: Option<DbId>,
    skill_filter: Option<DbId>,
    members: &[TeamMember],
    skills: &[Skill],
) -> Vec<WeeklyBucket> {
    let member_names: HashMap<DbId, &TeamMember> = members.iter().map(|m| (m.id, m)).collect();
    let skill_names: HashMap<DbId, &Skill> = skills.iter().map(|s| (s.id, s)).collect();

    // BTreeMap keyed by the ISO week key keeps buckets sorted; the fixed
    // date format makes lexicographic order chronological.
    let mut buckets: BTreeMap<String, Vec<RatingWithDetails>> = BTreeMap::new();

    for rating in ratings {
        if member_filter.is_some_and(|id| rating.team_member_id != id) {
            continue;
        }
        if skill_filter.is_some_and(|id| rating.skill_id != id) {
            continue;
        }

        let key = week::week_key(week::week_bucket(rating.week_of));
        buckets
            .entry(key)
            .or_default()
            .push(enrich(rating, &member_names, &skill_names));
    }

    buckets
        .into_iter()
        .map(|(week_of, ratings)| WeeklyBucket { week_of, ratings })
        .collect()
}

fn enrich(
    rating: &SkillRating,
    members: &HashMap<DbId, &TeamMember>,
    skills: &HashMap<DbId, &Skill>,
) -> RatingWithDetails {
    let (skill_name, skill_category) = skills
        .get(&rating.skill_id)
        .map(|s| (s.name.clone(), s.category.clone()))
        .unwrap_or_else(|| {
            (
                UNKNOWN_PLACEHOLDER.to_string(),
                UNKNOWN_PLACEHOLDER.to_string(),
            )
        });

    RatingWithDetails {
        id: rating.id,
        team_member_id: rating.team_member_id,
        team_member_name: members
            .get(&rating.team_member_id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string()),
        skill_id: rating.skill_id,
        skill_name,
        skill_category,
        level: rating.level,
        week_of: rating.week_of,
    }
}
