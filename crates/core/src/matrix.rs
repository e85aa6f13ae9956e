//! Weekly skill matrix construction.
//!
//! Turns the flat rating list into a dense member x skill grid for one
//! target week. The grid always has one row per member and one entry per
//! skill; pairs with no stored rating report level 0 (Unknown) as a
//! presentation default.

use serde::Serialize;

use crate::level::SkillLevel;
use crate::model::{Skill, SkillRating, TeamMember};
use crate::types::{DbId, Timestamp};
use crate::week;

/// A skill column header in the matrix.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillColumn {
    pub id: DbId,
    pub name: String,
    pub category: String,
}

/// One member's level in one skill.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSkillLevel {
    pub skill_id: DbId,
    pub skill_name: String,
    pub level: SkillLevel,
}

/// One row of the matrix: a member plus their level in every skill.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRow {
    pub team_member_id: DbId,
    pub team_member_name: String,
    pub role: String,
    pub department: String,
    pub email: String,
    pub skills: Vec<MemberSkillLevel>,
}

/// Dense member x skill grid for one target week.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatrix {
    pub week_of: Timestamp,
    pub skills: Vec<SkillColumn>,
    pub team_members: Vec<MemberRow>,
}

/// Build the dense skill matrix for the week containing `target`.
///
/// Only ratings whose `week_of` falls in the target's week bucket are
/// considered. If a member+skill pair has more than one rating in the
/// bucket, the first match wins.
pub fn build_matrix(
    target: Timestamp,
    members: &[TeamMember],
    skills: &[Skill],
    ratings: &[SkillRating],
) -> SkillMatrix {
    let bucket = week::week_bucket(target);
    let week_ratings: Vec<&SkillRating> = ratings
        .iter()
        .filter(|r| week::in_bucket(r.week_of, bucket))
        .collect();

    let team_members = members
        .iter()
        .map(|member| {
            let skill_levels = skills
                .iter()
                .map(|skill| {
                    let level = week_ratings
                        .iter()
                        .find(|r| r.team_member_id == member.id && r.skill_id == skill.id)
                        .map(|r| r.level)
                        .unwrap_or(SkillLevel::Unknown);
                    MemberSkillLevel {
                        skill_id: skill.id,
                        skill_name: skill.name.clone(),
                        level,
                    }
                })
                .collect();

            MemberRow {
                team_member_id: member.id,
                team_member_name: member.name.clone(),
                role: member.role.clone(),
                department: member.department.clone(),
                email: member.email.clone(),
                skills: skill_levels,
            }
        })
        .collect();

    SkillMatrix {
        week_of: target,
        skills: skills
            .iter()
            .map(|s| SkillColumn {
                id: s.id,
                name: s.name.clone(),
                category: s.category.clone(),
            })
            .collect(),
        team_members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn member(id: DbId, name: &str) -> TeamMember {
        TeamMember {
            id,
            name: name.to_string(),
            role: "Engineer".to_string(),
            department: "Engineering".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn skill(id: DbId, name: &str) -> Skill {
        Skill {
            id,
            name: name.to_string(),
            category: "Backend".to_string(),
            description: None,
        }
    }

    fn rating(id: DbId, member_id: DbId, skill_id: DbId, level: SkillLevel) -> SkillRating {
        SkillRating {
            id,
            team_member_id: member_id,
            skill_id,
            level,
            week_of: Utc.with_ymd_and_hms(2024, 3, 13, 10, 0, 0).unwrap(),
        }
    }

    fn target() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, 12, 9, 0, 0).unwrap()
    }

    #[test]
    fn matrix_is_dense_regardless_of_rating_sparsity() {
        let members = vec![member(1, "Alex"), member(2, "Jamie")];
        let skills = vec![skill(1, "Rust"), skill(2, "Docker"), skill(3, "Kubernetes")];
        // Only a single rating exists.
        let ratings = vec![rating(1, 1, 1, SkillLevel::Expert)];

        let matrix = build_matrix(target(), &members, &skills, &ratings);

        assert_eq!(matrix.team_members.len(), 2);
        for row in &matrix.team_members {
            assert_eq!(row.skills.len(), 3);
        }
        assert_eq!(matrix.skills.len(), 3);
    }

    #[test]
    fn missing_pair_defaults_to_unknown() {
        let members = vec![member(1, "Alex")];
        let skills = vec![skill(1, "Rust"), skill(2, "Docker")];
        let ratings = vec![rating(1, 1, 1, SkillLevel::BasicKnowledge)];

        let matrix = build_matrix(target(), &members, &skills, &ratings);

        let row = &matrix.team_members[0];
        assert_eq!(row.team_member_id, 1);
        assert_eq!(row.skills[0].skill_id, 1);
        assert_eq!(row.skills[0].level, SkillLevel::BasicKnowledge);
        assert_eq!(row.skills[1].skill_id, 2);
        assert_eq!(row.skills[1].level, SkillLevel::Unknown);
    }

    #[test]
    fn ratings_outside_target_week_are_ignored() {
        let members = vec![member(1, "Alex")];
        let skills = vec![skill(1, "Rust")];
        let mut stale = rating(1, 1, 1, SkillLevel::Expert);
        stale.week_of = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();

        let matrix = build_matrix(target(), &members, &skills, &[stale]);

        assert_eq!(matrix.team_members[0].skills[0].level, SkillLevel::Unknown);
    }

    #[test]
    fn empty_inputs_produce_empty_matrix() {
        let matrix = build_matrix(target(), &[], &[], &[]);
        assert!(matrix.team_members.is_empty());
        assert!(matrix.skills.is_empty());
    }

    #[test]
    fn serialized_shape_matches_wire_format() {
        let members = vec![member(1, "Alex")];
        let skills = vec![skill(1, "Rust")];
        let ratings = vec![rating(1, 1, 1, SkillLevel::BasicKnowledge)];

        let json = serde_json::to_value(build_matrix(target(), &members, &skills, &ratings)).unwrap();

        assert_eq!(json["teamMembers"][0]["teamMemberId"], 1);
        assert_eq!(json["teamMembers"][0]["skills"][0]["skillId"], 1);
        assert_eq!(json["teamMembers"][0]["skills"][0]["level"], 1);
        assert_eq!(json["skills"][0]["name"], "Rust");
    }
}
