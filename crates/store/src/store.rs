//! The entity store and its CRUD and aggregation entry points.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use skillboard_core::error::CoreError;
use skillboard_core::history::{self, WeeklyBucket};
use skillboard_core::matrix::{self, SkillMatrix};
use skillboard_core::model::{
    CreateSkill, CreateSkillRating, CreateTeamMember, RatingWithDetails, Skill, SkillRating,
    TeamMember,
};
use skillboard_core::trend::{self, SkillGap};
use skillboard_core::types::{DbId, Timestamp};
use skillboard_core::week;

/// Mutable interior of the store. All maps are keyed by id; `BTreeMap`
/// keeps listings in insertion (id) order.
#[derive(Debug, Default)]
struct StoreInner {
    members: BTreeMap<DbId, TeamMember>,
    skills: BTreeMap<DbId, Skill>,
    ratings: BTreeMap<DbId, SkillRating>,
    next_member_id: DbId,
    next_skill_id: DbId,
    next_rating_id: DbId,
}

/// In-memory entity store.
///
/// Every read takes the lock for the full scan, so aggregations always see
/// a consistent snapshot; cascade deletes hold the write lock across the
/// whole multi-record mutation.
#[derive(Debug)]
pub struct Store {
    inner: RwLock<StoreInner>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                next_member_id: 1,
                next_skill_id: 1,
                next_rating_id: 1,
                ..StoreInner::default()
            }),
        }
    }

    // A poisoned lock means another handler panicked mid-mutation; the
    // panic-recovery layer already turned that request into a 500, and
    // there is no meaningful state to salvage here.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().expect("store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().expect("store lock poisoned")
    }

    // -----------------------------------------------------------------------
    // Team members
    // -----------------------------------------------------------------------

    pub fn list_members(&self) -> Vec<TeamMember> {
        self.read().members.values().cloned().collect()
    }

    pub fn get_member(&self, id: DbId) -> Option<TeamMember> {
        self.read().members.get(&id).cloned()
    }

    pub fn create_member(&self, input: &CreateTeamMember) -> Result<TeamMember, CoreError> {
        require_non_empty("name", &input.name)?;
        require_non_empty("role", &input.role)?;
        require_non_empty("department", &input.department)?;
        require_non_empty("email", &input.email)?;

        let mut inner = self.write();
        if inner
            .members
            .values()
            .any(|m| m.email.eq_ignore_ascii_case(&input.email))
        {
            return Err(CoreError::Conflict(format!(
                "A team member with email {} already exists",
                input.email
            )));
        }

        let id = inner.next_member_id;
        inner.next_member_id += 1;
        let member = TeamMember {
            id,
            name: input.name.clone(),
            role: input.role.clone(),
            department: input.department.clone(),
            email: input.email.clone(),
        };
        inner.members.insert(id, member.clone());
        Ok(member)
    }

    /// Delete a member and every rating referencing them. Returns whether
    /// the member existed.
    pub fn delete_member(&self, id: DbId) -> bool {
        let mut inner = self.write();
        if inner.members.remove(&id).is_none() {
            return false;
        }
        let before = inner.ratings.len();
        inner.ratings.retain(|_, r| r.team_member_id != id);
        tracing::debug!(
            member_id = id,
            cascaded = before - inner.ratings.len(),
            "Deleted team member"
        );
        true
    }

    // -----------------------------------------------------------------------
    // Skills
    // -----------------------------------------------------------------------

    pub fn list_skills(&self) -> Vec<Skill> {
        self.read().skills.values().cloned().collect()
    }

    pub fn get_skill(&self, id: DbId) -> Option<Skill> {
        self.read().skills.get(&id).cloned()
    }

    pub fn create_skill(&self, input: &CreateSkill) -> Result<Skill, CoreError> {
        require_non_empty("name", &input.name)?;
        require_non_empty("category", &input.category)?;

        let mut inner = self.write();
        if inner
            .skills
            .values()
            .any(|s| s.name.eq_ignore_ascii_case(&input.name))
        {
            return Err(CoreError::Conflict(format!(
                "A skill named {} already exists",
                input.name
            )));
        }

        let id = inner.next_skill_id;
        inner.next_skill_id += 1;
        let skill = Skill {
            id,
            name: input.name.clone(),
            category: input.category.clone(),
            description: input.description.clone(),
        };
        inner.skills.insert(id, skill.clone());
        Ok(skill)
    }

    /// Delete a skill and every rating referencing it. Returns whether the
    /// skill existed.
    pub fn delete_skill(&self, id: DbId) -> bool {
        let mut inner = self.write();
        if inner.skills.remove(&id).is_none() {
            return false;
        }
        let before = inner.ratings.len();
        inner.ratings.retain(|_, r| r.skill_id != id);
        tracing::debug!(
            skill_id = id,
            cascaded = before - inner.ratings.len(),
            "Deleted skill"
        );
        true
    }

    // -----------------------------------------------------------------------
    // Skill ratings
    // -----------------------------------------------------------------------

    pub fn list_ratings(&self) -> Vec<SkillRating> {
        self.read().ratings.values().cloned().collect()
    }

    pub fn ratings_for_member(&self, team_member_id: DbId) -> Vec<SkillRating> {
        self.read()
            .ratings
            .values()
            .filter(|r| r.team_member_id == team_member_id)
            .cloned()
            .collect()
    }

    pub fn ratings_for_skill(&self, skill_id: DbId) -> Vec<SkillRating> {
        self.read()
            .ratings
            .values()
            .filter(|r| r.skill_id == skill_id)
            .cloned()
            .collect()
    }

    /// All ratings whose `week_of` falls in the week bucket containing
    /// `target`.
    pub fn ratings_for_week(&self, target: Timestamp) -> Vec<SkillRating> {
        let bucket = week::week_bucket(target);
        self.read()
            .ratings
            .values()
            .filter(|r| week::in_bucket(r.week_of, bucket))
            .cloned()
            .collect()
    }

    /// Insert a rating after checking both foreign keys and the
    /// one-rating-per-member-skill-week rule.
    pub fn create_rating(&self, input: &CreateSkillRating) -> Result<SkillRating, CoreError> {
        let mut inner = self.write();
        if !inner.members.contains_key(&input.team_member_id) {
            return Err(CoreError::NotFound {
                entity: "TeamMember",
                id: input.team_member_id,
            });
        }
        if !inner.skills.contains_key(&input.skill_id) {
            return Err(CoreError::NotFound {
                entity: "Skill",
                id: input.skill_id,
            });
        }

        let bucket = week::week_bucket(input.week_of);
        let duplicate = inner.ratings.values().any(|r| {
            r.team_member_id == input.team_member_id
                && r.skill_id == input.skill_id
                && week::week_bucket(r.week_of) == bucket
        });
        if duplicate {
            return Err(CoreError::Conflict(format!(
                "A rating for this member and skill already exists in the week of {}",
                week::week_key(bucket)
            )));
        }

        let id = inner.next_rating_id;
        inner.next_rating_id += 1;
        let rating = SkillRating {
            id,
            team_member_id: input.team_member_id,
            skill_id: input.skill_id,
            level: input.level,
            week_of: input.week_of,
        };
        inner.ratings.insert(id, rating.clone());
        Ok(rating)
    }

    /// Update the level of an existing rating. Returns `None` when no
    /// rating has that id.
    pub fn update_rating_level(
        &self,
        id: DbId,
        level: skillboard_core::level::SkillLevel,
    ) -> Option<SkillRating> {
        let mut inner = self.write();
        let rating = inner.ratings.get_mut(&id)?;
        rating.level = level;
        Some(rating.clone())
    }

    // -----------------------------------------------------------------------
    // Combined queries
    // -----------------------------------------------------------------------

    /// All ratings enriched with member and skill names.
    ///
    /// Unlike the history aggregation, a dangling reference here is an
    /// internal-consistency failure (cascades should make it impossible)
    /// and is surfaced as an error.
    pub fn ratings_with_details(&self) -> Result<Vec<RatingWithDetails>, CoreError> {
        let inner = self.read();
        inner
            .ratings
            .values()
            .map(|rating| {
                let member = inner.members.get(&rating.team_member_id).ok_or_else(|| {
                    CoreError::Internal(format!(
                        "Missing team member {} for rating {}",
                        rating.team_member_id, rating.id
                    ))
                })?;
                let skill = inner.skills.get(&rating.skill_id).ok_or_else(|| {
                    CoreError::Internal(format!(
                        "Missing skill {} for rating {}",
                        rating.skill_id, rating.id
                    ))
                })?;
                Ok(RatingWithDetails {
                    id: rating.id,
                    team_member_id: rating.team_member_id,
                    team_member_name: member.name.clone(),
                    skill_id: rating.skill_id,
                    skill_name: skill.name.clone(),
                    skill_category: skill.category.clone(),
                    level: rating.level,
                    week_of: rating.week_of,
                })
            })
            .collect()
    }

    /// Dense member x skill matrix for the week containing `target`.
    pub fn team_skill_matrix(&self, target: Timestamp) -> SkillMatrix {
        let inner = self.read();
        let members: Vec<TeamMember> = inner.members.values().cloned().collect();
        let skills: Vec<Skill> = inner.skills.values().cloned().collect();
        let ratings: Vec<SkillRating> = inner.ratings.values().cloned().collect();
        drop(inner);
        matrix::build_matrix(target, &members, &skills, &ratings)
    }

    /// Week-bucketed rating history, optionally filtered by member and/or
    /// skill.
    pub fn historical_ratings(
        &self,
        member_filter: Option<DbId>,
        skill_filter: Option<DbId>,
    ) -> Vec<WeeklyBucket> {
        let inner = self.read();
        let members: Vec<TeamMember> = inner.members.values().cloned().collect();
        let skills: Vec<Skill> = inner.skills.values().cloned().collect();
        let ratings: Vec<SkillRating> = inner.ratings.values().cloned().collect();
        drop(inner);
        history::build_history(&ratings, member_filter, skill_filter, &members, &skills)
    }

    /// Weakest skill for the week containing `target`, if any falls below
    /// the gap threshold. Reads skills and week ratings under one lock so
    /// the two stay consistent.
    pub fn skill_gap(&self, target: Timestamp) -> Option<SkillGap> {
        let inner = self.read();
        let skills: Vec<Skill> = inner.skills.values().cloned().collect();
        let bucket = week::week_bucket(target);
        let week_ratings: Vec<SkillRating> = inner
            .ratings
            .values()
            .filter(|r| week::in_bucket(r.week_of, bucket))
            .cloned()
            .collect();
        drop(inner);
        trend::find_skill_gap(&skills, &week_ratings)
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
