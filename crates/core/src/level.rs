//! The ordinal proficiency scale used for all skill ratings.
//!
//! Levels are serialized as plain integers (0-3) on the wire, matching the
//! rating payloads the dashboard consumes.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lowest valid skill level.
pub const MIN_LEVEL: i32 = 0;
/// Highest valid skill level.
pub const MAX_LEVEL: i32 = 3;

/// Ordinal proficiency value for one member in one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillLevel {
    Unknown,
    BasicKnowledge,
    HandsOnExperience,
    Expert,
}

impl SkillLevel {
    /// All levels in ascending order, for building `{value, label}` lists.
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Unknown,
        SkillLevel::BasicKnowledge,
        SkillLevel::HandsOnExperience,
        SkillLevel::Expert,
    ];

    /// Numeric wire value (0-3).
    pub fn value(self) -> i32 {
        match self {
            SkillLevel::Unknown => 0,
            SkillLevel::BasicKnowledge => 1,
            SkillLevel::HandsOnExperience => 2,
            SkillLevel::Expert => 3,
        }
    }

    /// Human-readable label for display in the UI.
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Unknown => "Unknown",
            SkillLevel::BasicKnowledge => "Basic Knowledge",
            SkillLevel::HandsOnExperience => "Hands-on Experience",
            SkillLevel::Expert => "Expert",
        }
    }

    /// Convert a raw integer, rejecting out-of-range values.
    pub fn from_value(value: i32) -> Result<Self, String> {
        match value {
            0 => Ok(SkillLevel::Unknown),
            1 => Ok(SkillLevel::BasicKnowledge),
            2 => Ok(SkillLevel::HandsOnExperience),
            3 => Ok(SkillLevel::Expert),
            other => Err(format!(
                "Invalid skill level {other}. Must be between {MIN_LEVEL}-{MAX_LEVEL}"
            )),
        }
    }

    /// Convert a raw integer, clamping out-of-range values into 0-3.
    ///
    /// Used by the bulk-import path, which tolerates sloppy input.
    pub fn from_clamped(value: i64) -> Self {
        match value.clamp(MIN_LEVEL as i64, MAX_LEVEL as i64) {
            0 => SkillLevel::Unknown,
            1 => SkillLevel::BasicKnowledge,
            2 => SkillLevel::HandsOnExperience,
            _ => SkillLevel::Expert,
        }
    }
}

impl Serialize for SkillLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value())
    }
}

impl<'de> Deserialize<'de> for SkillLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i32::deserialize(deserializer)?;
        SkillLevel::from_value(value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_round_trips_for_all_levels() {
        for level in SkillLevel::ALL {
            assert_eq!(SkillLevel::from_value(level.value()).unwrap(), level);
        }
    }

    #[test]
    fn from_value_rejects_out_of_range() {
        assert!(SkillLevel::from_value(-1).is_err());
        assert!(SkillLevel::from_value(4).is_err());
    }

    #[test]
    fn from_clamped_pins_to_bounds() {
        assert_eq!(SkillLevel::from_clamped(-5), SkillLevel::Unknown);
        assert_eq!(SkillLevel::from_clamped(99), SkillLevel::Expert);
        assert_eq!(SkillLevel::from_clamped(2), SkillLevel::HandsOnExperience);
    }

    #[test]
    fn serializes_as_integer() {
        let json = serde_json::to_string(&SkillLevel::Expert).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn deserializes_from_integer() {
        let level: SkillLevel = serde_json::from_str("1").unwrap();
        assert_eq!(level, SkillLevel::BasicKnowledge);
    }

    #[test]
    fn deserialize_rejects_out_of_range_integer() {
        assert!(serde_json::from_str::<SkillLevel>("4").is_err());
    }

    #[test]
    fn ordering_follows_proficiency() {
        assert!(SkillLevel::Expert > SkillLevel::BasicKnowledge);
        assert!(SkillLevel::Unknown < SkillLevel::HandsOnExperience);
    }
}
