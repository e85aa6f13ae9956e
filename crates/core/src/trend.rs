//! Trend classification over weekly rating history.
//!
//! Operates on the ordered output of [`crate::history`] and on the
//! per-week rating set backing the skill matrix.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::history::WeeklyBucket;
use crate::level::SkillLevel;
use crate::model::{Skill, SkillRating};

/// A skill's average level must fall below this value to count as a gap.
pub const SKILL_GAP_THRESHOLD: f64 = 1.5;

/// Direction of a member's most recent level transition in one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Same,
}

/// The skill whose best per-member gain between the two most recent weeks
/// was highest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillImprovement {
    pub name: String,
    /// Level delta, always positive (non-positive deltas yield `None`
    /// instead of a zero-value record).
    pub improvement: i32,
}

/// The weakest skill across the team for one week.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub name: String,
    pub category: String,
    pub average: f64,
    pub below_basic_count: usize,
}

/// Classify the last transition in a chronologically ascending level
/// history. Fewer than two entries is `Same`.
pub fn classify_trend(history: &[SkillLevel]) -> Trend {
    let [.., previous, latest] = history else {
        return Trend::Same;
    };
    match latest.cmp(previous) {
        std::cmp::Ordering::Greater => Trend::Improving,
        std::cmp::Ordering::Less => Trend::Declining,
        std::cmp::Ordering::Equal => Trend::Same,
    }
}

/// Find the skill with the highest positive per-member improvement between
/// the two most recent weekly buckets.
///
/// Buckets must be in ascending week order (as produced by
/// [`crate::history::build_history`]). Returns `None` with fewer than two
/// buckets or when no skill improved. Ties break by skill name ascending.
pub fn find_most_improved_skill(buckets: &[WeeklyBucket]) -> Option<SkillImprovement> {
    let [.., previous_week, latest_week] = buckets else {
        return None;
    };

    // Max improvement per skill name. BTreeMap iteration order gives the
    // alphabetical tie-break.
    let mut improvements: BTreeMap<&str, i32> = BTreeMap::new();

    for latest in &latest_week.ratings {
        let Some(previous) = previous_week.ratings.iter().find(|p| {
            p.skill_id == latest.skill_id && p.team_member_id == latest.team_member_id
        }) else {
            continue;
        };

        let delta = latest.level.value() - previous.level.value();
        improvements
            .entry(latest.skill_name.as_str())
            .and_modify(|best| *best = (*best).max(delta))
            .or_insert(delta);
    }

    let mut most_improved: Option<SkillImprovement> = None;
    for (name, improvement) in improvements {
        let beats_current = most_improved
            .as_ref()
            .is_none_or(|best| improvement > best.improvement);
        if beats_current {
            most_improved = Some(SkillImprovement {
                name: name.to_string(),
                improvement,
            });
        }
    }

    most_improved.filter(|best| best.improvement > 0)
}

/// Find the weakest skill for one week, if any falls below the gap
/// threshold.
///
/// `week_ratings` must already be restricted to the target week bucket.
/// The average is taken over members that actually have a stored rating
/// for the skill; members without one are excluded rather than counted as
/// level 0. Skills nobody has rated are skipped entirely.
pub fn find_skill_gap(skills: &[Skill], week_ratings: &[SkillRating]) -> Option<SkillGap> {
    let mut lowest: Option<SkillGap> = None;

    for skill in skills {
        let mut total = 0;
        let mut rated = 0;
        let mut below_basic = 0;

        for rating in week_ratings.iter().filter(|r| r.skill_id == skill.id) {
            total += rating.level.value();
            rated += 1;
            if rating.level < SkillLevel::BasicKnowledge {
                below_basic += 1;
            }
        }

        if rated == 0 {
            continue;
        }

        let average = f64::from(total) / f64::from(rated);
        let is_lower = lowest.as_ref().is_none_or(|low| average < low.average);
        if is_lower {
            lowest = Some(SkillGap {
                name: skill.name.clone(),
                category: skill.category.clone(),
                average,
                below_basic_count: below_basic,
            });
        }
    }

    lowest.filter(|gap| gap.average < SKILL_GAP_THRESHOLD)
}
