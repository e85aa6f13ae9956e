//! Demo data for local development.

use chrono::{Days, Utc};
use skillboard_core::error::CoreError;
use skillboard_core::level::SkillLevel;
use skillboard_core::model::{CreateSkill, CreateSkillRating, CreateTeamMember};

use crate::Store;

/// Seed the store with a small team, a skill catalog, and two weeks of
/// ratings (the previous week slightly lower, so the dashboard has a
/// visible trend out of the box).
pub fn seed_demo_data(store: &Store) -> Result<(), CoreError> {
    let members = [
        ("Alex Johnson", "Frontend Developer", "Engineering", "alex@example.com"),
        ("Jamie Williams", "Backend Developer", "Engineering", "jamie@example.com"),
        ("Sam Rodriguez", "DevOps Engineer", "Operations", "sam@example.com"),
    ];
    for (name, role, department, email) in members {
        store.create_member(&CreateTeamMember {
            name: name.to_string(),
            role: role.to_string(),
            department: department.to_string(),
            email: email.to_string(),
        })?;
    }

    let skills = [
        ("React.js", "Frontend Development", "Frontend JavaScript framework"),
        ("Next.js", "Frontend Development", "React framework for server-side rendering"),
        ("Tailwind CSS", "Frontend Development", "Utility-first CSS framework"),
        ("Node.js", "Backend Development", "JavaScript runtime"),
        ("Docker", "DevOps", "Containerization platform"),
    ];
    for (name, category, description) in skills {
        store.create_skill(&CreateSkill {
            name: name.to_string(),
            category: category.to_string(),
            description: Some(description.to_string()),
        })?;
    }

    let current_week = Utc::now();
    let previous_week = current_week
        .checked_sub_days(Days::new(7))
        .unwrap_or(current_week);

    // (member, [level per skill, in catalog order])
    let current_levels: [(i64, [i64; 5]); 3] =
        [(1, [3, 2, 3, 1, 0]), (2, [1, 1, 0, 3, 2]), (3, [1, 0, 0, 2, 3])];
    let previous_levels: [(i64, [i64; 5]); 3] =
        [(1, [2, 1, 3, 0, 0]), (2, [0, 0, 0, 3, 1]), (3, [0, 0, 0, 2, 2])];

    for (levels, week_of) in [(current_levels, current_week), (previous_levels, previous_week)] {
        for (member_id, member_levels) in levels {
            for (index, level) in member_levels.into_iter().enumerate() {
                store.create_rating(&CreateSkillRating {
                    team_member_id: member_id,
                    skill_id: index as i64 + 1,
                    level: SkillLevel::from_clamped(level),
                    week_of,
                })?;
            }
        }
    }

    tracing::info!("Seeded demo data (3 members, 5 skills, 2 weeks of ratings)");
    Ok(())
}
